#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use tokio::sync::Notify;

use quiz_forge_server::{
    errors::{AppError, AppResult},
    models::domain::{Difficulty, Question, UserAnswer},
    services::{
        chat_backend::{ChatBackend, ChatRequest},
        model_service::QuizProvider,
    },
};

pub fn question(i: usize) -> Question {
    let options: Vec<String> = (0..4).map(|o| format!("Answer {}.{}", i, o)).collect();
    let correct = options[0].clone();
    Question::new(format!("Roman history question {}?", i), options, correct)
        .expect("test question should be valid")
}

pub fn questions(n: usize) -> Vec<Question> {
    (0..n).map(question).collect()
}

/// In-memory provider with canned questions that counts its calls.
pub struct InMemoryQuizProvider {
    questions: AppResult<Vec<Question>>,
    suggestions: AppResult<String>,
    pub generate_calls: AtomicUsize,
    pub suggestion_calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl InMemoryQuizProvider {
    pub fn returning(questions: Vec<Question>) -> Self {
        Self {
            questions: Ok(questions),
            suggestions: Ok("* Review the late Republic".to_string()),
            generate_calls: AtomicUsize::new(0),
            suggestion_calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    pub fn failing(error: AppError) -> Self {
        Self {
            questions: Err(error),
            ..Self::returning(Vec::new())
        }
    }

    pub fn with_suggestions(mut self, suggestions: AppResult<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Holds every generation until the gate is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }
}

#[async_trait]
impl QuizProvider for InMemoryQuizProvider {
    async fn generate_quiz(
        &self,
        _topic: &str,
        _difficulty: Difficulty,
        _count: usize,
    ) -> AppResult<Vec<Question>> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.questions.clone()
    }

    async fn improvement_suggestions(
        &self,
        _topic: &str,
        incorrect_answers: &[UserAnswer],
    ) -> AppResult<String> {
        if incorrect_answers.is_empty() {
            return Ok(quiz_forge_server::constants::CONGRATULATIONS_MESSAGE.to_string());
        }
        self.suggestion_calls.fetch_add(1, Ordering::SeqCst);
        self.suggestions.clone()
    }
}

/// Chat backend that replays one fixed reply and counts requests.
pub struct CannedChatBackend {
    reply: AppResult<String>,
    pub calls: AtomicUsize,
}

impl CannedChatBackend {
    pub fn new(reply: AppResult<String>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ChatBackend for CannedChatBackend {
    async fn complete(&self, _request: ChatRequest) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}
