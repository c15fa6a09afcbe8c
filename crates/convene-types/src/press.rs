use serde::{Deserialize, Serialize};

use crate::record::impl_record;
use crate::validate::parse_date;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PressRelease {
    pub id: String,
    pub event_id: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub publish_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub published: bool,
}

impl_record!(PressRelease, "pressReleases", "press-", event_scoped);

impl PressRelease {
    /// Ordering key for "newest first" listings. Unparseable dates sort
    /// after every parseable one.
    pub fn publish_key(&self) -> Option<chrono::NaiveDateTime> {
        parse_date(&self.publish_date)
    }
}
