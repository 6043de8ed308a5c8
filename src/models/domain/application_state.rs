use async_graphql::Enum;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Difficulty, Question, UserAnswer},
    services::quiz_session_service::{AdvanceOutcome, QuizSession, SelectOutcome},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Enum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    #[default]
    Setup,
    Quiz,
    Results,
}

/// The whole application state as one record.
///
/// Every transition consumes the current record and returns the next one,
/// so callers swap it in wholesale and never observe a half-applied change.
#[derive(Clone, Debug, Default)]
pub struct ApplicationState {
    pub phase: Phase,
    pub topic: String,
    pub difficulty: Option<Difficulty>,
    pub questions: Vec<Question>,
    pub answers: Vec<UserAnswer>,
    pub session: Option<QuizSession>,
    pub loading: bool,
    pub error: Option<String>,
    /// Bumped by `reset`; generation results carrying an older epoch are stale.
    pub epoch: u64,
}

impl ApplicationState {
    pub fn generation_started(self) -> Self {
        Self {
            loading: true,
            error: None,
            ..self
        }
    }

    pub fn quiz_ready(self, topic: String, difficulty: Difficulty, session: QuizSession) -> Self {
        Self {
            phase: Phase::Quiz,
            topic,
            difficulty: Some(difficulty),
            questions: session.questions().to_vec(),
            answers: Vec::new(),
            session: Some(session),
            loading: false,
            error: None,
            ..self
        }
    }

    /// Back to setup; topic and difficulty survive for another attempt.
    pub fn generation_failed(self, message: String) -> Self {
        Self {
            phase: Phase::Setup,
            questions: Vec::new(),
            answers: Vec::new(),
            session: None,
            loading: false,
            error: Some(message),
            ..self
        }
    }

    pub fn answer_selected(mut self, option: &str) -> AppResult<(Self, SelectOutcome)> {
        let session = self.active_session_mut()?;
        let outcome = session.select(option)?;
        Ok((self, outcome))
    }

    pub fn advanced(mut self) -> AppResult<(Self, AdvanceOutcome)> {
        let outcome = self.active_session_mut()?.advance()?;
        let next = match &outcome {
            AdvanceOutcome::Completed(answers) => self.completed(answers.clone()),
            AdvanceOutcome::Presenting(_) => self,
        };
        Ok((next, outcome))
    }

    pub fn completed(self, answers: Vec<UserAnswer>) -> Self {
        Self {
            phase: Phase::Results,
            answers,
            session: None,
            ..self
        }
    }

    pub fn reset(self) -> Self {
        Self {
            epoch: self.epoch.wrapping_add(1),
            ..Self::default()
        }
    }

    /// Topic and difficulty for "new quiz, same topic".
    pub fn regeneration_request(&self) -> AppResult<(String, Difficulty)> {
        if self.phase != Phase::Results {
            return Err(AppError::InvalidTransition(
                "A new quiz on the same topic can only be started from the results".to_string(),
            ));
        }

        match self.difficulty {
            Some(difficulty) if !self.topic.is_empty() => Ok((self.topic.clone(), difficulty)),
            _ => Err(AppError::InvalidTransition(
                "No topic and difficulty to reuse".to_string(),
            )),
        }
    }

    pub fn incorrect_answers(&self) -> Vec<UserAnswer> {
        self.answers
            .iter()
            .filter(|a| !a.is_correct)
            .cloned()
            .collect()
    }

    pub fn require_phase(&self, phase: Phase) -> AppResult<()> {
        if self.phase != phase {
            return Err(AppError::InvalidTransition(format!(
                "Expected phase {:?}, currently {:?}",
                phase, self.phase
            )));
        }
        Ok(())
    }

    fn active_session_mut(&mut self) -> AppResult<&mut QuizSession> {
        self.require_phase(Phase::Quiz)?;
        self.session
            .as_mut()
            .ok_or_else(|| AppError::InternalError("Quiz phase without a session".to_string()))
    }
}
