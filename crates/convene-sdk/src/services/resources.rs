use std::sync::Arc;

use convene_store::{Collection, KeyValueStore};
use convene_types::{Resource, ResourceType};

use super::{by_order, EntityService};
use crate::error::SdkResult;
use crate::validation::{optional_url, require, require_url};

const ENTITY: &str = "Resource";

#[derive(Debug, Clone)]
pub struct ResourceService {
    resources: Collection<Resource>,
}

impl ResourceService {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            resources: Collection::new(kv),
        }
    }

    /// Resources of an event in display order.
    pub fn list_for_event(&self, event_id: &str) -> Vec<Resource> {
        by_order(self.resources.get_by_event_id(event_id), |r| r.order)
    }

    pub fn get_by_type(&self, event_id: &str, resource_type: ResourceType) -> Vec<Resource> {
        self.list_for_event(event_id)
            .into_iter()
            .filter(|r| r.resource_type == resource_type)
            .collect()
    }

    pub fn get_by_category(&self, event_id: &str, category: &str) -> Vec<Resource> {
        self.list_for_event(event_id)
            .into_iter()
            .filter(|r| r.category.as_deref() == Some(category))
            .collect()
    }
}

impl EntityService for ResourceService {
    type Entity = Resource;

    fn collection(&self) -> &Collection<Resource> {
        &self.resources
    }

    fn create(&self, resource: Resource) -> SdkResult<Option<Resource>> {
        require(ENTITY, "eventId", &resource.event_id)?;
        require(ENTITY, "title", &resource.title)?;
        require_url(ENTITY, "url", &resource.url)?;
        optional_url(ENTITY, "thumbnailUrl", resource.thumbnail_url.as_deref())?;
        Ok(self.resources.create(resource))
    }
}
