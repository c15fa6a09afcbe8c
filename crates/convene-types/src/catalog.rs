//! Per-event reference content: topics, partners, resources and FAQs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::record::impl_record;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub event_id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub order: i32,
}

impl_record!(Topic, "topics", "topic-", event_scoped);

/// Sponsorship tier. Declaration order is display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerCategory {
    Platinum,
    Gold,
    Silver,
    #[default]
    Bronze,
    Media,
    Community,
}

impl PartnerCategory {
    pub const ALL: [Self; 6] = [
        Self::Platinum,
        Self::Gold,
        Self::Silver,
        Self::Bronze,
        Self::Media,
        Self::Community,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Platinum => "platinum",
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Bronze => "bronze",
            Self::Media => "media",
            Self::Community => "community",
        }
    }
}

impl fmt::Display for PartnerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartnerCategory {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TypeError::UnknownVariant {
                kind: "partner category",
                value: s.to_string(),
            })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Partner {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub logo_url: String,
    pub category: PartnerCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub order: i32,
}

impl_record!(Partner, "partners", "partner-", event_scoped);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Pdf,
    Video,
    #[default]
    Link,
    Image,
    #[serde(other)]
    Other,
}

impl ResourceType {
    pub const ALL: [Self; 5] = [Self::Pdf, Self::Video, Self::Link, Self::Image, Self::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Video => "video",
            Self::Link => "link",
            Self::Image => "image",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TypeError::UnknownVariant {
                kind: "resource type",
                value: s.to_string(),
            })
    }
}

/// A downloadable or linked asset (slides, recordings, venue maps).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub event_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Human-readable size such as `"2.4 MB"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub order: i32,
}

impl_record!(Resource, "resources", "resource-", event_scoped);

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Faq {
    pub id: String,
    pub event_id: String,
    pub question: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl_record!(Faq, "faqs", "faq-", event_scoped);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;
    use serde_json::json;

    #[test]
    fn partner_tiers_order_for_display() {
        let mut tiers = vec![
            PartnerCategory::Community,
            PartnerCategory::Gold,
            PartnerCategory::Platinum,
        ];
        tiers.sort();
        assert_eq!(
            tiers,
            [PartnerCategory::Platinum, PartnerCategory::Gold, PartnerCategory::Community]
        );
    }

    #[test]
    fn unknown_partner_category_is_rejected() {
        let parsed: Result<Partner, _> =
            serde_json::from_value(json!({ "id": "p", "category": "diamond" }));
        assert!(parsed.is_err());
        assert!("diamond".parse::<PartnerCategory>().is_err());
        assert_eq!("GOLD".parse::<PartnerCategory>().unwrap(), PartnerCategory::Gold);
    }

    #[test]
    fn resource_type_uses_type_key() {
        let resource: Resource = serde_json::from_value(json!({
            "id": "r1",
            "eventId": "ev1",
            "type": "pdf",
            "fileSize": "2 MB"
        }))
        .unwrap();
        assert_eq!(resource.resource_type, ResourceType::Pdf);
        assert_eq!(resource.file_size.as_deref(), Some("2 MB"));
        assert_eq!(resource.event_id(), Some("ev1"));
    }

    #[test]
    fn unknown_resource_type_reads_as_other() {
        let resource: Resource = serde_json::from_value(json!({ "type": "zip" })).unwrap();
        assert_eq!(resource.resource_type, ResourceType::Other);
    }

    #[test]
    fn topic_tags_are_optional() {
        let topic: Topic = serde_json::from_value(json!({ "id": "t", "title": "Async" })).unwrap();
        assert!(topic.tags.is_none());
        assert_eq!(topic.order, 0);
        assert_eq!(Topic::PARTITION, "topics");
    }

    #[test]
    fn faq_partition() {
        assert_eq!(Faq::PARTITION, "faqs");
        assert_eq!(Faq::ID_PREFIX, "faq-");
    }
}
