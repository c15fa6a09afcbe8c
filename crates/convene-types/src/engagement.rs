//! Attendee engagement content: challenges and the scrolling marquee.

use serde::{Deserialize, Serialize};

use crate::record::impl_record;

/// One task within a [`Challenge`]. Steps are embedded in their challenge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    pub description: String,
    pub points: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub event_id: String,
    pub title: String,
    pub description: String,
    pub steps: Vec<Step>,
    pub reward: String,
    pub active: bool,
}

impl_record!(Challenge, "challenges", "challenge-", event_scoped);

impl Challenge {
    /// Sum of points across all steps.
    pub fn total_points(&self) -> u32 {
        self.steps.iter().map(|s| s.points).sum()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarqueeItem {
    pub id: String,
    pub event_id: String,
    pub text: String,
    pub order: i32,
    pub active: bool,
}

impl_record!(MarqueeItem, "marquee", "marquee-", event_scoped);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_points_sums_steps() {
        let challenge = Challenge {
            steps: vec![
                Step { id: "a".into(), description: "Visit booth".into(), points: 10 },
                Step { id: "b".into(), description: "Attend talk".into(), points: 25 },
            ],
            ..Default::default()
        };
        assert_eq!(challenge.total_points(), 35);
        assert_eq!(Challenge::default().total_points(), 0);
    }
}
