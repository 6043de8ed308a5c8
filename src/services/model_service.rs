use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    constants::{
        quiz_prompt::{improvement_prompt, quiz_generation_prompt, QUIZ_SCHEMA_NAME},
        CONGRATULATIONS_MESSAGE,
    },
    errors::{AppError, AppResult},
    models::{
        domain::{Difficulty, Question, UserAnswer},
        dto::generated::{question_entries, GeneratedQuestion, GeneratedQuiz},
    },
    services::chat_backend::{ChatBackend, ChatRequest},
};

/// Supplies quiz questions and post-quiz feedback.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizProvider: Send + Sync {
    /// One attempt, no retry. Returned questions are valid but may number
    /// fewer than `count`; that check is the caller's.
    async fn generate_quiz(
        &self,
        topic: &str,
        difficulty: Difficulty,
        count: usize,
    ) -> AppResult<Vec<Question>>;

    async fn improvement_suggestions(
        &self,
        topic: &str,
        incorrect_answers: &[UserAnswer],
    ) -> AppResult<String>;
}

pub struct ModelService {
    backend: Arc<dyn ChatBackend>,
}

impl ModelService {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self { backend }
    }

    /// Turns the raw model reply into validated, de-duplicated questions.
    pub fn parse_questions(content: &str) -> AppResult<Vec<Question>> {
        let mut seen = HashSet::new();
        let mut questions = Vec::new();

        for (position, entry) in question_entries(content)?.into_iter().enumerate() {
            let generated: GeneratedQuestion = match serde_json::from_value(entry) {
                Ok(generated) => generated,
                Err(e) => {
                    log::warn!("Dropping generated question {}: {}", position + 1, e);
                    continue;
                }
            };

            let question = match Question::try_from(generated) {
                Ok(question) => question,
                Err(e) => {
                    log::warn!("Dropping generated question {}: {}", position + 1, e);
                    continue;
                }
            };

            if !seen.insert(question.question().to_string()) {
                log::warn!("Dropping duplicate question '{}'", question.question());
                continue;
            }

            questions.push(question);
        }

        if questions.is_empty() {
            return Err(AppError::GenerationError(
                "AI returned an invalid or empty quiz structure".to_string(),
            ));
        }

        Ok(questions)
    }
}

#[async_trait]
impl QuizProvider for ModelService {
    async fn generate_quiz(
        &self,
        topic: &str,
        difficulty: Difficulty,
        count: usize,
    ) -> AppResult<Vec<Question>> {
        let schema = serde_json::to_value(schemars::schema_for!(GeneratedQuiz))
            .map_err(|e| AppError::InternalError(format!("Quiz schema serialization: {}", e)))?;
        let request = ChatRequest::structured(
            quiz_generation_prompt(topic, difficulty, count),
            QUIZ_SCHEMA_NAME,
            schema,
        );

        let content = self.backend.complete(request).await.map_err(|e| {
            log::error!("Error generating quiz on '{}': {}", topic, e);
            AppError::GenerationError(e.to_string())
        })?;

        let questions = Self::parse_questions(&content)?;
        log::info!(
            "Model returned {} usable questions on '{}' ({} requested)",
            questions.len(),
            topic,
            count
        );
        Ok(questions)
    }

    async fn improvement_suggestions(
        &self,
        topic: &str,
        incorrect_answers: &[UserAnswer],
    ) -> AppResult<String> {
        if incorrect_answers.is_empty() {
            return Ok(CONGRATULATIONS_MESSAGE.to_string());
        }

        let request = ChatRequest::text(improvement_prompt(topic, incorrect_answers));
        self.backend.complete(request).await.map_err(|e| {
            log::error!("Error getting improvement suggestions: {}", e);
            AppError::SuggestionError(e.to_string())
        })
    }
}
