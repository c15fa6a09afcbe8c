use std::sync::Arc;

use convene_store::{Collection, KeyValueStore};
use convene_types::{Partner, PartnerCategory};

use super::{by_order, EntityService};
use crate::error::SdkResult;
use crate::validation::{optional_url, require, require_url};

const ENTITY: &str = "Partner";

/// Sponsors and community partners.
#[derive(Debug, Clone)]
pub struct PartnerService {
    partners: Collection<Partner>,
}

impl PartnerService {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            partners: Collection::new(kv),
        }
    }

    /// Partners of an event in display order.
    pub fn list_for_event(&self, event_id: &str) -> Vec<Partner> {
        by_order(self.partners.get_by_event_id(event_id), |p| p.order)
    }

    pub fn get_by_category(&self, event_id: &str, category: PartnerCategory) -> Vec<Partner> {
        self.list_for_event(event_id)
            .into_iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Non-empty tiers, platinum first, each in display order.
    pub fn grouped_by_category(&self, event_id: &str) -> Vec<(PartnerCategory, Vec<Partner>)> {
        let partners = self.list_for_event(event_id);
        PartnerCategory::ALL
            .into_iter()
            .filter_map(|tier| {
                let members: Vec<Partner> = partners
                    .iter()
                    .filter(|p| p.category == tier)
                    .cloned()
                    .collect();
                (!members.is_empty()).then_some((tier, members))
            })
            .collect()
    }
}

impl EntityService for PartnerService {
    type Entity = Partner;

    fn collection(&self) -> &Collection<Partner> {
        &self.partners
    }

    fn create(&self, partner: Partner) -> SdkResult<Option<Partner>> {
        require(ENTITY, "eventId", &partner.event_id)?;
        require(ENTITY, "name", &partner.name)?;
        require_url(ENTITY, "logoUrl", &partner.logo_url)?;
        optional_url(ENTITY, "website", partner.website.as_deref())?;
        Ok(self.partners.create(partner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdkError;
    use convene_store::InMemoryKeyValueStore;

    fn partner(name: &str, category: PartnerCategory, order: i32) -> Partner {
        Partner {
            event_id: "ev1".into(),
            name: name.into(),
            logo_url: format!("https://cdn.example.com/{name}.svg"),
            category,
            order,
            ..Default::default()
        }
    }

    #[test]
    fn grouped_by_tier() {
        let partners = PartnerService::new(Arc::new(InMemoryKeyValueStore::new()));
        partners.create(partner("Meetup", PartnerCategory::Community, 0)).unwrap();
        partners.create(partner("Beta", PartnerCategory::Gold, 2)).unwrap();
        partners.create(partner("Alpha", PartnerCategory::Gold, 1)).unwrap();
        partners.create(partner("Mega", PartnerCategory::Platinum, 0)).unwrap();

        let groups = partners.grouped_by_category("ev1");
        let tiers: Vec<_> = groups.iter().map(|(tier, _)| *tier).collect();
        assert_eq!(
            tiers,
            [PartnerCategory::Platinum, PartnerCategory::Gold, PartnerCategory::Community]
        );
        let gold: Vec<_> = groups[1].1.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(gold, ["Alpha", "Beta"]);
        assert_eq!(partners.get_by_category("ev1", PartnerCategory::Gold).len(), 2);
        assert!(partners.get_by_category("ev1", PartnerCategory::Media).is_empty());
    }

    #[test]
    fn create_requires_valid_logo() {
        let partners = PartnerService::new(Arc::new(InMemoryKeyValueStore::new()));
        assert!(matches!(
            partners.create(Partner {
                logo_url: String::new(),
                ..partner("A", PartnerCategory::Gold, 0)
            }),
            Err(SdkError::MissingField { field: "logoUrl", .. })
        ));
        assert!(matches!(
            partners.create(Partner {
                logo_url: "logo.svg".into(),
                ..partner("A", PartnerCategory::Gold, 0)
            }),
            Err(SdkError::InvalidUrl { field: "logoUrl", .. })
        ));
        assert!(matches!(
            partners.create(Partner {
                website: Some("acme".into()),
                ..partner("A", PartnerCategory::Gold, 0)
            }),
            Err(SdkError::InvalidUrl { field: "website", .. })
        ));
    }

    #[test]
    fn unknown_category_survives_create() {
        let kv = Arc::new(InMemoryKeyValueStore::new());
        kv.set(
            "partners",
            r#"[
                {"id":"p1","eventId":"ev1","name":"Old","category":"gold"},
                {"id":"p2","eventId":"ev1","name":"Odd","category":"sponsor"}
            ]"#,
        )
        .unwrap();
        let partners = PartnerService::new(kv.clone());
        assert_eq!(partners.get_all().len(), 1);

        partners.create(partner("New", PartnerCategory::Gold, 0)).unwrap().unwrap();
        let stored: Vec<serde_json::Value> =
            serde_json::from_str(&kv.get("partners").unwrap().unwrap()).unwrap();
        let names: Vec<_> = stored.iter().map(|p| p["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["Old", "Odd", "New"]);
        assert_eq!(stored[1]["category"], "sponsor");
        assert_eq!(partners.get_all().len(), 2);
    }
}
