use std::sync::Arc;

use convene_store::{Collection, KeyValueStore};
use convene_types::Faq;

use super::EntityService;
use crate::error::SdkResult;
use crate::validation::require;

const ENTITY: &str = "FAQ";

#[derive(Debug, Clone)]
pub struct FaqService {
    faqs: Collection<Faq>,
}

impl FaqService {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            faqs: Collection::new(kv),
        }
    }

    pub fn get_by_category(&self, event_id: &str, category: &str) -> Vec<Faq> {
        self.faqs
            .get_by_event_id(event_id)
            .into_iter()
            .filter(|f| f.category.as_deref() == Some(category))
            .collect()
    }

    /// Distinct categories used by an event's FAQs, in first-seen order.
    pub fn categories(&self, event_id: &str) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for faq in self.faqs.get_by_event_id(event_id) {
            if let Some(category) = faq.category {
                if !seen.contains(&category) {
                    seen.push(category);
                }
            }
        }
        seen
    }
}

impl EntityService for FaqService {
    type Entity = Faq;

    fn collection(&self) -> &Collection<Faq> {
        &self.faqs
    }

    fn create(&self, faq: Faq) -> SdkResult<Option<Faq>> {
        require(ENTITY, "eventId", &faq.event_id)?;
        require(ENTITY, "question", &faq.question)?;
        require(ENTITY, "answer", &faq.answer)?;
        Ok(self.faqs.create(faq))
    }
}
