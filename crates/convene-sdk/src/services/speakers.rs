use std::sync::Arc;

use convene_store::{Collection, KeyValueStore, Patch};
use convene_types::Speaker;
use serde_json::Value;

use super::EntityService;
use crate::error::SdkResult;
use crate::validation::{optional_url, require};

const ENTITY: &str = "Speaker";

/// Speakers, per event.
///
/// Every read returns records with the legacy `social` alias filled in from
/// `socialLinks`. Writes only ever store `socialLinks`.
#[derive(Debug, Clone)]
pub struct SpeakerService {
    speakers: Collection<Speaker>,
}

impl SpeakerService {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            speakers: Collection::new(kv),
        }
    }

    pub fn get_featured(&self, event_id: &str) -> Vec<Speaker> {
        self.get_by_event_id(event_id)
            .into_iter()
            .filter(|s| s.featured)
            .collect()
    }

    fn validate(speaker: &Speaker) -> SdkResult<()> {
        require(ENTITY, "name", &speaker.name)?;
        require(ENTITY, "role", &speaker.role)?;
        require(ENTITY, "company", &speaker.company)?;
        optional_url(ENTITY, "photoUrl", speaker.photo_url.as_deref())?;
        if let Some(links) = &speaker.social_links {
            for (field, url) in links.entries() {
                optional_url(ENTITY, field, url)?;
            }
        }
        Ok(())
    }
}

fn reshape(speakers: Vec<Speaker>) -> Vec<Speaker> {
    speakers.into_iter().map(Speaker::with_legacy_social).collect()
}

impl EntityService for SpeakerService {
    type Entity = Speaker;

    fn collection(&self) -> &Collection<Speaker> {
        &self.speakers
    }

    fn create(&self, mut speaker: Speaker) -> SdkResult<Option<Speaker>> {
        speaker.normalize_social();
        Self::validate(&speaker)?;
        Ok(self.speakers.create(speaker).map(Speaker::with_legacy_social))
    }

    fn get_all(&self) -> Vec<Speaker> {
        reshape(self.speakers.get_all())
    }

    fn get_by_id(&self, id: &str) -> Option<Speaker> {
        self.speakers.get_by_id(id).map(Speaker::with_legacy_social)
    }

    fn get_by_event_id(&self, event_id: &str) -> Vec<Speaker> {
        reshape(self.speakers.get_by_event_id(event_id))
    }

    /// A legacy `social` field in the patch is written as `socialLinks`
    /// unless the patch also sets `socialLinks`. A stored record that only
    /// carries `social` is migrated to `socialLinks` by the same write.
    fn update(&self, id: &str, mut patch: Patch) -> Option<Speaker> {
        if let Some(legacy) = patch.take("social") {
            if !patch.contains("socialLinks") {
                patch = patch.set("socialLinks", legacy);
            }
        }
        if let Some(stored) = self.speakers.get_by_id(id) {
            if let Some(legacy) = stored.social {
                if stored.social_links.is_none() && !patch.contains("socialLinks") {
                    patch = patch.set("socialLinks", legacy);
                }
                patch = patch.set("social", Value::Null);
            }
        }
        self.speakers
            .update(id, patch)
            .map(Speaker::with_legacy_social)
    }
}
