use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::record::impl_record;

/// Kind of agenda slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    #[default]
    Talk,
    Workshop,
    Panel,
    Break,
    Networking,
    /// Anything else, including unknown values found in storage.
    #[serde(other)]
    Other,
}

impl SessionType {
    pub const ALL: [Self; 6] = [
        Self::Talk,
        Self::Workshop,
        Self::Panel,
        Self::Break,
        Self::Networking,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Talk => "talk",
            Self::Workshop => "workshop",
            Self::Panel => "panel",
            Self::Break => "break",
            Self::Networking => "networking",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TypeError::UnknownVariant {
                kind: "session type",
                value: s.to_string(),
            })
    }
}

/// One slot on an agenda day. Sessions live inside their [`AgendaDay`]
/// and have no partition of their own.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Wall-clock start, e.g. `"09:00"`. Sessions sort by plain string
    /// comparison of this field.
    pub start_time: String,
    pub end_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker_id: Option<String>,
    #[serde(rename = "type")]
    pub session_type: SessionType,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgendaDay {
    pub id: String,
    pub event_id: String,
    pub date: String,
    pub day_number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub sessions: Vec<Session>,
}

impl_record!(AgendaDay, "agenda", "day-", event_scoped);

impl AgendaDay {
    /// Stable sort of the embedded sessions by `start_time`.
    pub fn sort_sessions(&mut self) {
        self.sessions.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    }

    pub fn session(&self, session_id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn session_type_wire_names() {
        let session = Session {
            session_type: SessionType::Networking,
            ..Default::default()
        };
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["type"], "networking");
    }

    #[test]
    fn unknown_session_type_reads_as_other() {
        let session: Session =
            serde_json::from_value(json!({ "id": "s", "type": "keynote" })).unwrap();
        assert_eq!(session.session_type, SessionType::Other);
    }

    #[test]
    fn session_type_from_str() {
        assert_eq!("Panel".parse::<SessionType>().unwrap(), SessionType::Panel);
        assert!("keynote".parse::<SessionType>().is_err());
    }

    #[test]
    fn sort_is_by_start_time_string() {
        let mut day = AgendaDay {
            sessions: vec![
                Session { id: "b".into(), start_time: "13:00".into(), ..Default::default() },
                Session { id: "a".into(), start_time: "09:00".into(), ..Default::default() },
                Session { id: "c".into(), start_time: "09:00".into(), ..Default::default() },
            ],
            ..Default::default()
        };
        day.sort_sessions();
        let ids: Vec<_> = day.sessions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "c", "b"]);
        assert!(day.session("c").is_some());
        assert!(day.session("z").is_none());
    }
}
