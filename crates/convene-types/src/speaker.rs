use serde::{Deserialize, Serialize};

use crate::record::impl_record;

/// Optional social profile links for a speaker.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl SocialLinks {
    /// Link fields paired with their JSON names.
    pub fn entries(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("twitter", self.twitter.as_deref()),
            ("linkedin", self.linkedin.as_deref()),
            ("github", self.github.as_deref()),
            ("website", self.website.as_deref()),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Speaker {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    /// Legacy alias of `social_links` still read by older page components.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social: Option<SocialLinks>,
    pub featured: bool,
}

impl_record!(Speaker, "speakers", "speaker-", event_scoped);

impl Speaker {
    /// Fold a legacy `social` value into `social_links` and clear the alias.
    ///
    /// Applied before a speaker is written so only `socialLinks` is stored.
    pub fn normalize_social(&mut self) {
        if let Some(legacy) = self.social.take() {
            if self.social_links.is_none() {
                self.social_links = Some(legacy);
            }
        }
    }

    /// Project `social_links` into the legacy `social` alias.
    ///
    /// Records stored with only `social` are first folded into
    /// `social_links`, so both fields agree afterwards.
    pub fn with_legacy_social(mut self) -> Self {
        self.normalize_social();
        self.social = self.social_links.clone();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn links() -> SocialLinks {
        SocialLinks {
            twitter: Some("https://twitter.com/ann".into()),
            ..Default::default()
        }
    }

    #[test]
    fn legacy_alias_mirrors_social_links() {
        let speaker = Speaker {
            social_links: Some(links()),
            ..Default::default()
        }
        .with_legacy_social();
        assert_eq!(speaker.social, Some(links()));
        assert_eq!(speaker.social_links, Some(links()));
    }

    #[test]
    fn legacy_only_record_is_folded() {
        let speaker: Speaker = serde_json::from_value(json!({
            "id": "s1",
            "eventId": "ev1",
            "name": "Ann",
            "social": { "twitter": "https://twitter.com/ann" }
        }))
        .unwrap();
        let speaker = speaker.with_legacy_social();
        assert_eq!(speaker.social_links, Some(links()));
        assert_eq!(speaker.social, Some(links()));
    }

    #[test]
    fn normalize_prefers_existing_social_links() {
        let mut speaker = Speaker {
            social_links: Some(links()),
            social: Some(SocialLinks::default()),
            ..Default::default()
        };
        speaker.normalize_social();
        assert_eq!(speaker.social_links, Some(links()));
        assert!(speaker.social.is_none());
    }

    #[test]
    fn no_links_means_no_alias() {
        let speaker = Speaker::default().with_legacy_social();
        assert!(speaker.social.is_none());
        let value = serde_json::to_value(&speaker).unwrap();
        assert!(value.get("social").is_none());
    }
}
