use serde::{Deserialize, Serialize};

use crate::record::impl_record;

/// A named conference. Every other entity is scoped to one by `event_id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Short display name, also used as a URL slug.
    pub short_name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub featured: bool,
    pub published: bool,
    /// Theme color token used by the site (e.g. `"violet"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl_record!(Event, "events", "event-");

impl Event {
    /// Media URL fields paired with their JSON names, for validation.
    pub fn media_urls(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("imageUrl", self.image_url.as_deref()),
            ("bannerUrl", self.banner_url.as_deref()),
            ("logoUrl", self.logo_url.as_deref()),
            ("videoUrl", self.video_url.as_deref()),
        ]
    }
}
