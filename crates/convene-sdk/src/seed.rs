//! First-run population of every partition from bundled fixtures.
//!
//! A partition is seeded only when its key is entirely absent. An empty
//! array counts as present, so content an admin deliberately cleared is
//! never brought back. Seeding never merges with or overwrites stored data,
//! which makes it idempotent and independent of partition order.

use std::sync::Arc;

use convene_store::{Collection, KeyValueStore};
use convene_types::{
    AgendaDay, Challenge, Event, Faq, MarqueeItem, Partner, PressRelease, Record, Resource,
    Speaker, Topic,
};
use tracing::{info, warn};

const EVENTS: &str = include_str!("../fixtures/events.json");
const SPEAKERS: &str = include_str!("../fixtures/speakers.json");
const AGENDA: &str = include_str!("../fixtures/agenda.json");
const TOPICS: &str = include_str!("../fixtures/topics.json");
const PARTNERS: &str = include_str!("../fixtures/partners.json");
const FAQS: &str = include_str!("../fixtures/faqs.json");
const RESOURCES: &str = include_str!("../fixtures/resources.json");
const CHALLENGES: &str = include_str!("../fixtures/challenges.json");
const PRESS_RELEASES: &str = include_str!("../fixtures/pressReleases.json");
const MARQUEE: &str = include_str!("../fixtures/marquee.json");

/// What happened to one partition during seeding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The key was absent and now holds `records` fixture records.
    Seeded { records: usize },
    /// The key already existed; nothing was written.
    Skipped,
    /// The fixture could not be decoded or the write failed.
    Failed(String),
}

/// Per-partition outcomes of one seeding pass, in seeding order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub partitions: Vec<(&'static str, SeedOutcome)>,
}

impl SeedReport {
    pub fn seeded(&self) -> Vec<&'static str> {
        self.matching(|o| matches!(o, SeedOutcome::Seeded { .. }))
    }

    pub fn skipped(&self) -> Vec<&'static str> {
        self.matching(|o| matches!(o, SeedOutcome::Skipped))
    }

    pub fn failed(&self) -> Vec<&'static str> {
        self.matching(|o| matches!(o, SeedOutcome::Failed(_)))
    }

    /// `true` if nothing was written.
    pub fn is_noop(&self) -> bool {
        self.seeded().is_empty()
    }

    fn matching(&self, pred: impl Fn(&SeedOutcome) -> bool) -> Vec<&'static str> {
        self.partitions
            .iter()
            .filter(|(_, outcome)| pred(outcome))
            .map(|(key, _)| *key)
            .collect()
    }
}

/// Seed every absent partition from the bundled fixtures.
pub fn seed_all(kv: &Arc<dyn KeyValueStore>) -> SeedReport {
    let partitions = vec![
        seed_partition::<Event>(kv, EVENTS),
        seed_partition::<Speaker>(kv, SPEAKERS),
        seed_partition::<AgendaDay>(kv, AGENDA),
        seed_partition::<Topic>(kv, TOPICS),
        seed_partition::<Partner>(kv, PARTNERS),
        seed_partition::<Faq>(kv, FAQS),
        seed_partition::<Resource>(kv, RESOURCES),
        seed_partition::<Challenge>(kv, CHALLENGES),
        seed_partition::<PressRelease>(kv, PRESS_RELEASES),
        seed_partition::<MarqueeItem>(kv, MARQUEE),
    ];
    SeedReport { partitions }
}

/// Seed one partition from a JSON array fixture if its key is absent.
pub fn seed_partition<T: Record>(
    kv: &Arc<dyn KeyValueStore>,
    fixture: &str,
) -> (&'static str, SeedOutcome) {
    let collection: Collection<T> = Collection::new(Arc::clone(kv));
    if collection.exists() {
        return (T::PARTITION, SeedOutcome::Skipped);
    }

    let records: Vec<T> = match serde_json::from_str(fixture) {
        Ok(records) => records,
        Err(e) => {
            warn!(partition = T::PARTITION, error = %e, "invalid seed fixture");
            return (T::PARTITION, SeedOutcome::Failed(e.to_string()));
        }
    };
    if !collection.replace_all(&records) {
        return (
            T::PARTITION,
            SeedOutcome::Failed("partition write failed".to_string()),
        );
    }
    info!(partition = T::PARTITION, records = records.len(), "seeded partition");
    (
        T::PARTITION,
        SeedOutcome::Seeded {
            records: records.len(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use convene_store::InMemoryKeyValueStore;

    fn store() -> Arc<dyn KeyValueStore> {
        Arc::new(InMemoryKeyValueStore::new())
    }

    #[test]
    fn every_fixture_decodes() {
        let kv = store();
        let report = seed_all(&kv);
        assert!(report.failed().is_empty(), "failed: {:?}", report.partitions);
        assert_eq!(report.seeded().len(), 10);
        for (key, outcome) in &report.partitions {
            assert!(
                matches!(outcome, SeedOutcome::Seeded { records } if *records > 0),
                "{key} seeded nothing"
            );
        }
    }

    #[test]
    fn second_pass_is_noop() {
        let kv = store();
        seed_all(&kv);
        let snapshot: Vec<_> = kv
            .keys()
            .unwrap()
            .into_iter()
            .map(|k| (k.clone(), kv.get(&k).unwrap()))
            .collect();

        let report = seed_all(&kv);
        assert!(report.is_noop());
        assert_eq!(report.skipped().len(), 10);

        let after: Vec<_> = kv
            .keys()
            .unwrap()
            .into_iter()
            .map(|k| (k.clone(), kv.get(&k).unwrap()))
            .collect();
        assert_eq!(snapshot, after);
    }

    #[test]
    fn empty_array_counts_as_present() {
        let kv = store();
        kv.set("speakers", "[]").unwrap();
        let report = seed_all(&kv);
        assert_eq!(report.skipped(), ["speakers"]);
        assert_eq!(kv.get("speakers").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn bad_fixture_is_reported() {
        let kv = store();
        let (key, outcome) = seed_partition::<Event>(&kv, "{");
        assert_eq!(key, "events");
        assert!(matches!(outcome, SeedOutcome::Failed(_)));
        assert!(!kv.contains("events").unwrap());
    }

    #[test]
    fn full_backend_is_reported() {
        let kv: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::with_quota(16));
        let report = seed_all(&kv);
        assert_eq!(report.failed().len(), 10);
    }
}
