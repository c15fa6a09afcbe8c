use std::sync::Arc;

use convene_store::{Collection, KeyValueStore, Patch};
use convene_types::{generate_id, AgendaDay, Session};
use tracing::warn;

use super::{by_order, EntityService};
use crate::error::SdkResult;
use crate::validation::{require, require_date};

const ENTITY: &str = "AgendaDay";
const SESSION: &str = "Session";
const SESSION_ID_PREFIX: &str = "session-";

/// Agenda days and the sessions embedded in them.
///
/// Sessions have no partition of their own. Every session edit reads the
/// owning day, splices its `sessions` array, re-sorts it by start time and
/// writes the day back with a single update. Session fields are nested, so
/// they are stored without HTML escaping.
#[derive(Debug, Clone)]
pub struct AgendaService {
    days: Collection<AgendaDay>,
}

impl AgendaService {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            days: Collection::new(kv),
        }
    }

    /// Days of one event ordered by day number.
    pub fn get_schedule(&self, event_id: &str) -> Vec<AgendaDay> {
        by_order(self.days.get_by_event_id(event_id), |d| d.day_number)
    }

    pub fn get_session(&self, day_id: &str, session_id: &str) -> Option<Session> {
        self.days.get_by_id(day_id)?.session(session_id).cloned()
    }

    /// Every session of an event given by `speaker_id`, in schedule order.
    pub fn get_sessions_by_speaker(&self, event_id: &str, speaker_id: &str) -> Vec<Session> {
        if speaker_id.is_empty() {
            return Vec::new();
        }
        self.get_schedule(event_id)
            .into_iter()
            .flat_map(|day| day.sessions)
            .filter(|s| s.speaker_id.as_deref() == Some(speaker_id))
            .collect()
    }

    /// Insert a session into a day. Returns the updated day, or `Ok(None)`
    /// if the day does not exist or the write failed.
    pub fn add_session(&self, day_id: &str, mut session: Session) -> SdkResult<Option<AgendaDay>> {
        validate_session(&session)?;
        let Some(day) = self.days.get_by_id(day_id) else {
            return Ok(None);
        };
        if session.id.is_empty() {
            session.id = generate_id(SESSION_ID_PREFIX);
        }
        let mut sessions = day.sessions;
        sessions.push(session);
        Ok(self.write_sessions(day_id, sessions))
    }

    /// Merge `patch` into one session of a day.
    pub fn update_session(
        &self,
        day_id: &str,
        session_id: &str,
        patch: Patch,
    ) -> Option<AgendaDay> {
        let day = self.days.get_by_id(day_id)?;
        let mut sessions = day.sessions;
        let index = sessions.iter().position(|s| s.id == session_id)?;
        sessions[index] = match patch.merge_into(&sessions[index]) {
            Ok(session) => session,
            Err(e) => {
                warn!(day_id, session_id, error = %e, "rejected session patch");
                return None;
            }
        };
        self.write_sessions(day_id, sessions)
    }

    /// Delete one session from a day. Returns `true` if it was removed.
    pub fn remove_session(&self, day_id: &str, session_id: &str) -> bool {
        let Some(day) = self.days.get_by_id(day_id) else {
            return false;
        };
        let mut sessions = day.sessions;
        let before = sessions.len();
        sessions.retain(|s| s.id != session_id);
        if sessions.len() == before {
            return false;
        }
        self.write_sessions(day_id, sessions).is_some()
    }

    fn write_sessions(&self, day_id: &str, mut sessions: Vec<Session>) -> Option<AgendaDay> {
        sessions.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        self.days
            .update(day_id, Patch::new().set("sessions", sessions))
    }
}

fn validate_session(session: &Session) -> SdkResult<()> {
    require(SESSION, "title", &session.title)?;
    require(SESSION, "startTime", &session.start_time)?;
    require(SESSION, "endTime", &session.end_time)?;
    Ok(())
}

impl EntityService for AgendaService {
    type Entity = AgendaDay;

    fn collection(&self) -> &Collection<AgendaDay> {
        &self.days
    }

    fn create(&self, mut day: AgendaDay) -> SdkResult<Option<AgendaDay>> {
        require(ENTITY, "eventId", &day.event_id)?;
        require_date(ENTITY, "date", &day.date)?;
        for session in &mut day.sessions {
            validate_session(session)?;
            if session.id.is_empty() {
                session.id = generate_id(SESSION_ID_PREFIX);
            }
        }
        day.sort_sessions();
        Ok(self.days.create(day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdkError;
    use convene_store::InMemoryKeyValueStore;
    use convene_types::SessionType;

    fn service() -> AgendaService {
        AgendaService::new(Arc::new(InMemoryKeyValueStore::new()))
    }

    fn session(title: &str, start: &str) -> Session {
        Session {
            title: title.into(),
            start_time: start.into(),
            end_time: "23:59".into(),
            ..Default::default()
        }
    }

    fn day(agenda: &AgendaService, event_id: &str, number: u32) -> AgendaDay {
        agenda
            .create(AgendaDay {
                event_id: event_id.into(),
                date: format!("2025-09-0{number}"),
                day_number: number,
                ..Default::default()
            })
            .unwrap()
            .unwrap()
    }

    #[test]
    fn create_validates_day_and_sessions() {
        let agenda = service();
        assert!(matches!(
            agenda.create(AgendaDay { date: "2025-09-01".into(), ..Default::default() }),
            Err(SdkError::MissingField { field: "eventId", .. })
        ));
        assert!(matches!(
            agenda.create(AgendaDay {
                event_id: "ev1".into(),
                date: "day one".into(),
                ..Default::default()
            }),
            Err(SdkError::InvalidDate { .. })
        ));
        assert!(matches!(
            agenda.create(AgendaDay {
                event_id: "ev1".into(),
                date: "2025-09-01".into(),
                sessions: vec![session("", "09:00")],
                ..Default::default()
            }),
            Err(SdkError::MissingField { entity: "Session", field: "title" })
        ));
    }

    #[test]
    fn create_assigns_session_ids_and_sorts() {
        let agenda = service();
        let created = agenda
            .create(AgendaDay {
                event_id: "ev1".into(),
                date: "2025-09-01".into(),
                day_number: 1,
                sessions: vec![session("Lunch", "12:00"), session("Keynote", "09:00")],
                ..Default::default()
            })
            .unwrap()
            .unwrap();
        let titles: Vec<_> = created.sessions.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Keynote", "Lunch"]);
        assert!(created.sessions.iter().all(|s| s.id.starts_with("session-")));
    }

    #[test]
    fn schedule_orders_by_day_number() {
        let agenda = service();
        day(&agenda, "ev1", 2);
        day(&agenda, "ev1", 1);
        day(&agenda, "ev2", 1);
        let numbers: Vec<_> = agenda.get_schedule("ev1").iter().map(|d| d.day_number).collect();
        assert_eq!(numbers, [1, 2]);
    }

    #[test]
    fn add_session_keeps_start_time_order() {
        let agenda = service();
        let d = day(&agenda, "ev1", 1);
        agenda.add_session(&d.id, session("Afternoon", "14:00")).unwrap().unwrap();
        agenda.add_session(&d.id, session("Morning", "09:30")).unwrap().unwrap();
        let updated = agenda.add_session(&d.id, session("Noon", "12:00")).unwrap().unwrap();

        let titles: Vec<_> = updated.sessions.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Morning", "Noon", "Afternoon"]);
        assert_eq!(agenda.get_by_id(&d.id).unwrap(), updated);
    }

    #[test]
    fn add_session_to_missing_day() {
        let agenda = service();
        assert!(agenda.add_session("nope", session("X", "09:00")).unwrap().is_none());
        assert!(agenda.add_session("nope", session("", "09:00")).is_err());
    }

    #[test]
    fn session_fields_are_not_escaped() {
        let agenda = service();
        let d = day(&agenda, "ev1", 1);
        let updated = agenda
            .add_session(&d.id, session("<b>Rust</b> & you", "09:00"))
            .unwrap()
            .unwrap();
        assert_eq!(updated.sessions[0].title, "<b>Rust</b> & you");
    }

    #[test]
    fn update_session_merges_and_resorts() {
        let agenda = service();
        let d = day(&agenda, "ev1", 1);
        agenda.add_session(&d.id, session("First", "09:00")).unwrap();
        let with_two = agenda.add_session(&d.id, session("Second", "10:00")).unwrap().unwrap();
        let first_id = with_two.sessions[0].id.clone();

        let updated = agenda
            .update_session(
                &d.id,
                &first_id,
                Patch::new().set("startTime", "11:00").set("type", SessionType::Workshop),
            )
            .unwrap();
        assert_eq!(updated.sessions[1].id, first_id);
        assert_eq!(updated.sessions[1].title, "First");
        assert_eq!(updated.sessions[1].session_type, SessionType::Workshop);

        assert!(agenda.update_session(&d.id, "missing", Patch::new()).is_none());
        assert!(agenda
            .update_session(&d.id, &first_id, Patch::new().set("startTime", 11))
            .is_none());
    }

    #[test]
    fn remove_session() {
        let agenda = service();
        let d = day(&agenda, "ev1", 1);
        let with_one = agenda.add_session(&d.id, session("Only", "09:00")).unwrap().unwrap();
        let id = with_one.sessions[0].id.clone();

        assert!(agenda.remove_session(&d.id, &id));
        assert!(!agenda.remove_session(&d.id, &id));
        assert!(!agenda.remove_session("missing-day", &id));
        assert!(agenda.get_by_id(&d.id).unwrap().sessions.is_empty());
    }

    #[test]
    fn sessions_by_speaker_across_days() {
        let agenda = service();
        let d1 = day(&agenda, "ev1", 1);
        let d2 = day(&agenda, "ev1", 2);
        agenda
            .add_session(
                &d2.id,
                Session { speaker_id: Some("sp1".into()), ..session("Talk B", "09:00") },
            )
            .unwrap();
        agenda
            .add_session(
                &d1.id,
                Session { speaker_id: Some("sp1".into()), ..session("Talk A", "15:00") },
            )
            .unwrap();
        agenda.add_session(&d1.id, session("Break", "10:00")).unwrap();

        let titles: Vec<_> = agenda
            .get_sessions_by_speaker("ev1", "sp1")
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, ["Talk A", "Talk B"]);
        assert!(agenda.get_session(&d1.id, "missing").is_none());
        assert!(agenda.get_sessions_by_speaker("ev1", "").is_empty());
    }
}
