use std::cmp::Reverse;
use std::sync::Arc;

use convene_store::{Collection, KeyValueStore};
use convene_types::PressRelease;

use super::EntityService;
use crate::error::SdkResult;
use crate::validation::{optional_url, require, require_date};

const ENTITY: &str = "PressRelease";

/// Press releases, stored under the fixed `pressReleases` key.
#[derive(Debug, Clone)]
pub struct PressReleaseService {
    releases: Collection<PressRelease>,
}

impl PressReleaseService {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            releases: Collection::new(kv),
        }
    }

    /// Published releases of an event, newest first.
    pub fn get_published(&self, event_id: &str) -> Vec<PressRelease> {
        newest_first(
            self.releases
                .get_by_event_id(event_id)
                .into_iter()
                .filter(|r| r.published)
                .collect(),
        )
    }

    /// The `limit` newest published releases across all events.
    pub fn get_featured(&self, limit: usize) -> Vec<PressRelease> {
        let mut releases = newest_first(
            self.releases
                .get_all()
                .into_iter()
                .filter(|r| r.published)
                .collect(),
        );
        releases.truncate(limit);
        releases
    }
}

/// Stable; releases with unparseable dates go last.
fn newest_first(mut releases: Vec<PressRelease>) -> Vec<PressRelease> {
    releases.sort_by_key(|r| match r.publish_key() {
        Some(date) => (false, Reverse(Some(date))),
        None => (true, Reverse(None)),
    });
    releases
}

impl EntityService for PressReleaseService {
    type Entity = PressRelease;

    fn collection(&self) -> &Collection<PressRelease> {
        &self.releases
    }

    fn create(&self, release: PressRelease) -> SdkResult<Option<PressRelease>> {
        require(ENTITY, "eventId", &release.event_id)?;
        require(ENTITY, "title", &release.title)?;
        require_date(ENTITY, "publishDate", &release.publish_date)?;
        optional_url(ENTITY, "imageUrl", release.image_url.as_deref())?;
        Ok(self.releases.create(release))
    }
}
