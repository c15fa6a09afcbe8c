//! One service per record type.
//!
//! Every service implements [`EntityService`], which supplies the plain
//! CRUD surface over the service's [`Collection`]. Services only write
//! `create` themselves (validation differs per type) and override reads
//! where records need reshaping.

use convene_store::{Collection, Patch};
use convene_types::Record;

use crate::error::SdkResult;

mod agenda;
mod challenges;
mod events;
mod faqs;
mod marquee;
mod partners;
mod press;
mod resources;
mod speakers;
mod topics;

pub use agenda::AgendaService;
pub use challenges::ChallengeService;
pub use events::EventService;
pub use faqs::FaqService;
pub use marquee::MarqueeService;
pub use partners::PartnerService;
pub use press::PressReleaseService;
pub use resources::ResourceService;
pub use speakers::SpeakerService;
pub use topics::TopicService;

/// CRUD surface shared by every entity service.
pub trait EntityService {
    type Entity: Record;

    /// The partition this service owns.
    fn collection(&self) -> &Collection<Self::Entity>;

    /// Validate and store a new record.
    ///
    /// Returns `Err` for invalid input and `Ok(None)` if the write failed.
    fn create(&self, item: Self::Entity) -> SdkResult<Option<Self::Entity>>;

    fn get_all(&self) -> Vec<Self::Entity> {
        self.collection().get_all()
    }

    fn get_by_id(&self, id: &str) -> Option<Self::Entity> {
        self.collection().get_by_id(id)
    }

    /// Records belonging to `event_id`, in stored order. Always empty for
    /// record types that are not event-scoped.
    fn get_by_event_id(&self, event_id: &str) -> Vec<Self::Entity> {
        self.collection().get_by_event_id(event_id)
    }

    fn update(&self, id: &str, patch: Patch) -> Option<Self::Entity> {
        self.collection().update(id, patch)
    }

    fn remove(&self, id: &str) -> bool {
        self.collection().remove(id)
    }
}

/// Stable sort by a display-order key.
pub(crate) fn by_order<T, K: Ord>(mut items: Vec<T>, key: impl Fn(&T) -> K) -> Vec<T> {
    items.sort_by_key(key);
    items
}
