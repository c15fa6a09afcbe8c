use std::sync::Arc;

use convene_store::{Collection, KeyValueStore};
use convene_types::MarqueeItem;

use super::{by_order, EntityService};
use crate::error::SdkResult;
use crate::validation::require;

const ENTITY: &str = "MarqueeItem";

/// Scrolling announcement banner items.
#[derive(Debug, Clone)]
pub struct MarqueeService {
    items: Collection<MarqueeItem>,
}

impl MarqueeService {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            items: Collection::new(kv),
        }
    }

    /// Active items of an event in display order.
    pub fn get_active(&self, event_id: &str) -> Vec<MarqueeItem> {
        let active: Vec<MarqueeItem> = self
            .items
            .get_by_event_id(event_id)
            .into_iter()
            .filter(|m| m.active)
            .collect();
        by_order(active, |m| m.order)
    }
}

impl EntityService for MarqueeService {
    type Entity = MarqueeItem;

    fn collection(&self) -> &Collection<MarqueeItem> {
        &self.items
    }

    fn create(&self, item: MarqueeItem) -> SdkResult<Option<MarqueeItem>> {
        require(ENTITY, "eventId", &item.event_id)?;
        require(ENTITY, "text", &item.text)?;
        Ok(self.items.create(item))
    }
}
