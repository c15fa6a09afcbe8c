use std::sync::Arc;

use convene_store::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};
use convene_types::{
    AgendaDay, Challenge, Event, Faq, MarqueeItem, Partner, PressRelease, Record, Resource,
    Speaker, Topic,
};
use serde::Serialize;
use tracing::info;

use crate::config::{Backend, StoreConfig};
use crate::error::SdkResult;
use crate::seed::{seed_all, SeedReport};
use crate::services::{
    AgendaService, ChallengeService, EntityService, EventService, FaqService, MarqueeService,
    PartnerService, PressReleaseService, ResourceService, SpeakerService, TopicService,
};

/// Every partition key, in seeding order.
pub const PARTITIONS: [&str; 10] = [
    Event::PARTITION,
    Speaker::PARTITION,
    AgendaDay::PARTITION,
    Topic::PARTITION,
    Partner::PARTITION,
    Faq::PARTITION,
    Resource::PARTITION,
    Challenge::PARTITION,
    PressRelease::PARTITION,
    MarqueeItem::PARTITION,
];

/// All entity services sharing one key-value backend.
pub struct ContentStore {
    kv: Arc<dyn KeyValueStore>,
    events: EventService,
    speakers: SpeakerService,
    agenda: AgendaService,
    topics: TopicService,
    partners: PartnerService,
    faqs: FaqService,
    resources: ResourceService,
    challenges: ChallengeService,
    press_releases: PressReleaseService,
    marquee: MarqueeService,
}

/// Record counts for one event's public page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventOverview {
    pub event: Event,
    pub speakers: usize,
    pub agenda_days: usize,
    pub sessions: usize,
    pub topics: usize,
    pub partners: usize,
    pub faqs: usize,
    pub resources: usize,
    pub challenges: usize,
    pub press_releases: usize,
    pub marquee_items: usize,
}

/// Presence and size of one partition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PartitionInfo {
    pub key: &'static str,
    pub present: bool,
    pub records: usize,
}

impl ContentStore {
    /// Wrap an existing backend. Nothing is seeded.
    pub fn with_backend(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            events: EventService::new(Arc::clone(&kv)),
            speakers: SpeakerService::new(Arc::clone(&kv)),
            agenda: AgendaService::new(Arc::clone(&kv)),
            topics: TopicService::new(Arc::clone(&kv)),
            partners: PartnerService::new(Arc::clone(&kv)),
            faqs: FaqService::new(Arc::clone(&kv)),
            resources: ResourceService::new(Arc::clone(&kv)),
            challenges: ChallengeService::new(Arc::clone(&kv)),
            press_releases: PressReleaseService::new(Arc::clone(&kv)),
            marquee: MarqueeService::new(Arc::clone(&kv)),
            kv,
        }
    }

    /// An empty, unseeded in-memory store.
    pub fn in_memory() -> Self {
        Self::with_backend(Arc::new(InMemoryKeyValueStore::new()))
    }

    /// Open the backend described by `config`, seeding if configured.
    ///
    /// Only backend setup can fail here (e.g. an unwritable data directory).
    pub fn open(config: &StoreConfig) -> SdkResult<Self> {
        let kv: Arc<dyn KeyValueStore> = match config.backend {
            Backend::Memory => match config.quota_bytes {
                Some(limit) => Arc::new(InMemoryKeyValueStore::with_quota(limit)),
                None => Arc::new(InMemoryKeyValueStore::new()),
            },
            Backend::File => Arc::new(FileKeyValueStore::open(&config.data_dir)?),
        };
        info!(
            backend = ?config.backend,
            data_dir = %config.data_dir.display(),
            "opened content store"
        );
        let store = Self::with_backend(kv);
        if config.seed_on_open {
            store.seed();
        }
        Ok(store)
    }

    /// Seed every absent partition from the bundled fixtures.
    pub fn seed(&self) -> SeedReport {
        seed_all(&self.kv)
    }

    pub fn events(&self) -> &EventService {
        &self.events
    }

    pub fn speakers(&self) -> &SpeakerService {
        &self.speakers
    }

    pub fn agenda(&self) -> &AgendaService {
        &self.agenda
    }

    pub fn topics(&self) -> &TopicService {
        &self.topics
    }

    pub fn partners(&self) -> &PartnerService {
        &self.partners
    }

    pub fn faqs(&self) -> &FaqService {
        &self.faqs
    }

    pub fn resources(&self) -> &ResourceService {
        &self.resources
    }

    pub fn challenges(&self) -> &ChallengeService {
        &self.challenges
    }

    pub fn press_releases(&self) -> &PressReleaseService {
        &self.press_releases
    }

    pub fn marquee(&self) -> &MarqueeService {
        &self.marquee
    }

    /// Counts of everything attached to one event, or `None` if the event
    /// does not exist. Orphaned records of a deleted event are not found
    /// through here but remain in their partitions.
    pub fn event_overview(&self, event_id: &str) -> Option<EventOverview> {
        let event = self.events.get_by_id(event_id)?;
        let days = self.agenda.get_by_event_id(event_id);
        Some(EventOverview {
            event,
            speakers: self.speakers.get_by_event_id(event_id).len(),
            sessions: days.iter().map(|d| d.sessions.len()).sum(),
            agenda_days: days.len(),
            topics: self.topics.get_by_event_id(event_id).len(),
            partners: self.partners.get_by_event_id(event_id).len(),
            faqs: self.faqs.get_by_event_id(event_id).len(),
            resources: self.resources.get_by_event_id(event_id).len(),
            challenges: self.challenges.get_by_event_id(event_id).len(),
            press_releases: self.press_releases.get_by_event_id(event_id).len(),
            marquee_items: self.marquee.get_by_event_id(event_id).len(),
        })
    }

    /// Presence and record count of every partition.
    pub fn partitions(&self) -> Vec<PartitionInfo> {
        let counts = [
            (self.events.collection().exists(), self.events.collection().count()),
            (self.speakers.collection().exists(), self.speakers.collection().count()),
            (self.agenda.collection().exists(), self.agenda.collection().count()),
            (self.topics.collection().exists(), self.topics.collection().count()),
            (self.partners.collection().exists(), self.partners.collection().count()),
            (self.faqs.collection().exists(), self.faqs.collection().count()),
            (self.resources.collection().exists(), self.resources.collection().count()),
            (self.challenges.collection().exists(), self.challenges.collection().count()),
            (
                self.press_releases.collection().exists(),
                self.press_releases.collection().count(),
            ),
            (self.marquee.collection().exists(), self.marquee.collection().count()),
        ];
        PARTITIONS
            .into_iter()
            .zip(counts)
            .map(|(key, (present, records))| PartitionInfo {
                key,
                present,
                records,
            })
            .collect()
    }
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore").finish_non_exhaustive()
    }
}
