use std::sync::Arc;

use convene_store::{Collection, KeyValueStore, Patch};
use convene_types::{generate_id, Challenge, Step};

use super::EntityService;
use crate::error::SdkResult;
use crate::validation::require;

const ENTITY: &str = "Challenge";
const STEP: &str = "Step";
const STEP_ID_PREFIX: &str = "step-";

/// Attendee challenges. Steps are embedded and edited by splicing the
/// owning challenge, the same way agenda sessions are.
#[derive(Debug, Clone)]
pub struct ChallengeService {
    challenges: Collection<Challenge>,
}

impl ChallengeService {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            challenges: Collection::new(kv),
        }
    }

    pub fn get_active(&self, event_id: &str) -> Vec<Challenge> {
        self.challenges
            .get_by_event_id(event_id)
            .into_iter()
            .filter(|c| c.active)
            .collect()
    }

    /// Append a step. Returns `Ok(None)` if the challenge does not exist.
    pub fn add_step(&self, challenge_id: &str, mut step: Step) -> SdkResult<Option<Challenge>> {
        require(STEP, "description", &step.description)?;
        let Some(challenge) = self.challenges.get_by_id(challenge_id) else {
            return Ok(None);
        };
        if step.id.is_empty() {
            step.id = generate_id(STEP_ID_PREFIX);
        }
        let mut steps = challenge.steps;
        steps.push(step);
        Ok(self
            .challenges
            .update(challenge_id, Patch::new().set("steps", steps)))
    }

    /// Delete one step. Returns `true` if it was removed.
    pub fn remove_step(&self, challenge_id: &str, step_id: &str) -> bool {
        let Some(challenge) = self.challenges.get_by_id(challenge_id) else {
            return false;
        };
        let mut steps = challenge.steps;
        let before = steps.len();
        steps.retain(|s| s.id != step_id);
        if steps.len() == before {
            return false;
        }
        self.challenges
            .update(challenge_id, Patch::new().set("steps", steps))
            .is_some()
    }
}

impl EntityService for ChallengeService {
    type Entity = Challenge;

    fn collection(&self) -> &Collection<Challenge> {
        &self.challenges
    }

    fn create(&self, mut challenge: Challenge) -> SdkResult<Option<Challenge>> {
        require(ENTITY, "eventId", &challenge.event_id)?;
        require(ENTITY, "title", &challenge.title)?;
        for step in &mut challenge.steps {
            require(STEP, "description", &step.description)?;
            if step.id.is_empty() {
                step.id = generate_id(STEP_ID_PREFIX);
            }
        }
        Ok(self.challenges.create(challenge))
    }
}
