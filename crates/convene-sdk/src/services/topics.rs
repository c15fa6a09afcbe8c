use std::sync::Arc;

use convene_store::{Collection, KeyValueStore};
use convene_types::Topic;

use super::{by_order, EntityService};
use crate::error::SdkResult;
use crate::validation::require;

const ENTITY: &str = "Topic";

#[derive(Debug, Clone)]
pub struct TopicService {
    topics: Collection<Topic>,
}

impl TopicService {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            topics: Collection::new(kv),
        }
    }

    /// Topics of an event in display order.
    pub fn list_for_event(&self, event_id: &str) -> Vec<Topic> {
        by_order(self.topics.get_by_event_id(event_id), |t| t.order)
    }

    pub fn get_by_category(&self, event_id: &str, category: &str) -> Vec<Topic> {
        self.list_for_event(event_id)
            .into_iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Topics of an event carrying `tag`.
    pub fn get_by_tag(&self, event_id: &str, tag: &str) -> Vec<Topic> {
        self.list_for_event(event_id)
            .into_iter()
            .filter(|t| t.tags.as_ref().is_some_and(|tags| tags.iter().any(|x| x == tag)))
            .collect()
    }
}

impl EntityService for TopicService {
    type Entity = Topic;

    fn collection(&self) -> &Collection<Topic> {
        &self.topics
    }

    fn create(&self, topic: Topic) -> SdkResult<Option<Topic>> {
        require(ENTITY, "eventId", &topic.event_id)?;
        require(ENTITY, "title", &topic.title)?;
        Ok(self.topics.create(topic))
    }
}
