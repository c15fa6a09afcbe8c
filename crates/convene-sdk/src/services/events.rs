use std::sync::Arc;

use convene_store::{Collection, KeyValueStore};
use convene_types::{parse_date, Event};

use super::EntityService;
use crate::error::{SdkError, SdkResult};
use crate::validation::{optional_date, optional_url, require, require_date};

const ENTITY: &str = "Event";

/// Conferences. Public pages look events up by id or short name.
#[derive(Debug, Clone)]
pub struct EventService {
    events: Collection<Event>,
}

impl EventService {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            events: Collection::new(kv),
        }
    }

    pub fn get_published(&self) -> Vec<Event> {
        self.events
            .get_all()
            .into_iter()
            .filter(|e| e.published)
            .collect()
    }

    /// Published events flagged as featured.
    pub fn get_featured(&self) -> Vec<Event> {
        self.get_published()
            .into_iter()
            .filter(|e| e.featured)
            .collect()
    }

    /// Case-insensitive lookup by short name.
    pub fn get_by_short_name(&self, short_name: &str) -> Option<Event> {
        if short_name.is_empty() {
            return None;
        }
        self.events
            .get_all()
            .into_iter()
            .find(|e| e.short_name.eq_ignore_ascii_case(short_name))
    }

    fn validate(event: &Event) -> SdkResult<()> {
        require(ENTITY, "title", &event.title)?;
        require(ENTITY, "description", &event.description)?;
        require_date(ENTITY, "startDate", &event.start_date)?;
        optional_date(ENTITY, "endDate", event.end_date.as_deref())?;

        if let (Some(start), Some(end)) = (
            parse_date(&event.start_date),
            event.end_date.as_deref().and_then(parse_date),
        ) {
            if end < start {
                return Err(SdkError::InvalidRange {
                    entity: ENTITY,
                    reason: format!(
                        "endDate {} precedes startDate {}",
                        event.end_date.as_deref().unwrap_or_default(),
                        event.start_date
                    ),
                });
            }
        }

        for (field, url) in event.media_urls() {
            optional_url(ENTITY, field, url)?;
        }
        Ok(())
    }
}

impl EntityService for EventService {
    type Entity = Event;

    fn collection(&self) -> &Collection<Event> {
        &self.events
    }

    fn create(&self, event: Event) -> SdkResult<Option<Event>> {
        Self::validate(&event)?;
        Ok(self.events.create(event))
    }
}
