use async_graphql::SimpleObject;
use serde::Serialize;

use crate::{
    models::domain::{ApplicationState, Difficulty, Phase, UserAnswer},
    services::{
        quiz_session_service::QuizSession,
        results_service::{QuizScore, ScoreTier},
    },
};

/// The question on screen. The correct answer is only present once the
/// player has answered.
#[derive(Debug, Clone, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub index: usize,
    pub total: usize,
    pub question: String,
    pub options: Vec<String>,
    pub answer: Option<UserAnswer>,
    pub is_last: bool,
    pub progress_percent: u32,
}

impl QuestionView {
    pub fn from_session(session: &QuizSession) -> Option<Self> {
        let index = session.current_index()?;
        let question = session.current_question()?;
        let total = session.len();

        Some(QuestionView {
            index,
            total,
            question: question.question().to_string(),
            options: question.options().to_vec(),
            answer: session.current_answer().cloned(),
            is_last: session.is_last_question(),
            progress_percent: (((index + 1) * 100) / total) as u32,
        })
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct AppSnapshot {
    pub phase: Phase,
    pub topic: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub question_count: usize,
    pub answered_count: usize,
    pub current_question: Option<QuestionView>,
    pub loading: bool,
    pub error: Option<String>,
}

impl From<&ApplicationState> for AppSnapshot {
    fn from(state: &ApplicationState) -> Self {
        let answered_count = match &state.session {
            Some(session) => session.answers().len(),
            None => state.answers.len(),
        };

        AppSnapshot {
            phase: state.phase,
            topic: (!state.topic.is_empty()).then(|| state.topic.clone()),
            difficulty: state.difficulty,
            question_count: state.questions.len(),
            answered_count,
            current_question: state.session.as_ref().and_then(QuestionView::from_session),
            loading: state.loading,
            error: state.error.clone(),
        }
    }
}

impl From<ApplicationState> for AppSnapshot {
    fn from(state: ApplicationState) -> Self {
        AppSnapshot::from(&state)
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct QuizResultsDto {
    pub topic: String,
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub tier: ScoreTier,
    pub color: String,
    pub answers: Vec<UserAnswer>,
}

impl QuizResultsDto {
    pub fn new(topic: String, score: QuizScore, answers: Vec<UserAnswer>) -> Self {
        QuizResultsDto {
            topic,
            score: score.score,
            total: score.total,
            percentage: score.percentage,
            color: score.tier.color().to_string(),
            tier: score.tier,
            answers,
        }
    }
}
