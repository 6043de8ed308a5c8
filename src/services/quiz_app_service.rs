use std::sync::Arc;

use tokio::sync::RwLock;
use validator::Validate;

use crate::{
    constants::SUGGESTIONS_FALLBACK_MESSAGE,
    errors::{AppError, AppResult},
    models::{
        domain::{ApplicationState, Difficulty, Phase, Question},
        dto::{request::StartQuizInput, response::QuizResultsDto},
    },
    services::{
        model_service::QuizProvider,
        quiz_session_service::{AdvanceOutcome, QuizSession, SelectOutcome},
        results_service::{QuizScore, ResultsService},
    },
};

/// Drives the setup → quiz → results cycle for the single player.
pub struct QuizAppService {
    provider: Arc<dyn QuizProvider>,
    question_count: usize,
    state: RwLock<ApplicationState>,
}

impl QuizAppService {
    pub fn new(provider: Arc<dyn QuizProvider>, question_count: usize) -> Self {
        Self {
            provider,
            question_count,
            state: RwLock::new(ApplicationState::default()),
        }
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub async fn snapshot(&self) -> ApplicationState {
        self.state.read().await.clone()
    }

    pub async fn start_quiz(&self, input: StartQuizInput) -> AppResult<ApplicationState> {
        input.validate()?;
        let topic = input.topic.trim().to_string();
        if topic.is_empty() {
            return Err(AppError::ValidationError("Topic cannot be blank".to_string()));
        }

        let difficulty = input.difficulty;
        self.generate(move |state| {
            state.require_phase(Phase::Setup)?;
            Ok((topic, difficulty))
        })
        .await
    }

    /// "New quiz, same topic" from the results.
    pub async fn new_quiz(&self) -> AppResult<ApplicationState> {
        self.generate(|state| state.regeneration_request()).await
    }

    pub async fn select_answer(&self, option: &str) -> AppResult<ApplicationState> {
        let mut state = self.state.write().await;
        let (next, outcome) = state.clone().answer_selected(option)?;

        match outcome {
            SelectOutcome::Recorded(answer) => log::info!(
                "Recorded answer for '{}' (correct: {})",
                answer.question,
                answer.is_correct
            ),
            SelectOutcome::Locked => log::debug!("Ignoring re-selection on an answered question"),
        }

        *state = next;
        Ok(state.clone())
    }

    pub async fn next_question(&self) -> AppResult<ApplicationState> {
        let mut state = self.state.write().await;
        let (next, outcome) = state.clone().advanced()?;

        match outcome {
            AdvanceOutcome::Presenting(index) => {
                log::debug!("Presenting question {}", index + 1)
            }
            AdvanceOutcome::Completed(answers) => log::info!(
                "Quiz on '{}' completed with {} answers",
                next.topic,
                answers.len()
            ),
        }

        *state = next;
        Ok(state.clone())
    }

    pub async fn start_over(&self) -> ApplicationState {
        let mut state = self.state.write().await;
        let current = std::mem::take(&mut *state);
        *state = current.reset();
        log::info!("Application reset to setup");
        state.clone()
    }

    pub async fn score(&self) -> AppResult<QuizScore> {
        let state = self.state.read().await;
        state.require_phase(Phase::Results)?;
        Ok(ResultsService::score(&state.answers, state.questions.len()))
    }

    pub async fn results(&self) -> AppResult<QuizResultsDto> {
        let state = self.state.read().await;
        state.require_phase(Phase::Results)?;
        let score = ResultsService::score(&state.answers, state.questions.len());
        Ok(QuizResultsDto::new(
            state.topic.clone(),
            score,
            state.answers.clone(),
        ))
    }

    /// Review topics for the finished quiz; provider failures fall back to a
    /// fixed message so the results stay viewable.
    pub async fn improvement_suggestions(&self) -> AppResult<String> {
        let (topic, incorrect) = {
            let state = self.state.read().await;
            state.require_phase(Phase::Results)?;
            (state.topic.clone(), state.incorrect_answers())
        };

        match self
            .provider
            .improvement_suggestions(&topic, &incorrect)
            .await
        {
            Ok(text) => Ok(text),
            Err(e) => {
                log::warn!("Falling back to default suggestions: {}", e);
                Ok(SUGGESTIONS_FALLBACK_MESSAGE.to_string())
            }
        }
    }

    /// `request` picks topic and difficulty from the state under the same
    /// write lock that marks generation as started.
    async fn generate<F>(&self, request: F) -> AppResult<ApplicationState>
    where
        F: FnOnce(&ApplicationState) -> AppResult<(String, Difficulty)>,
    {
        let (epoch, topic, difficulty) = {
            let mut state = self.state.write().await;
            if state.loading {
                return Err(AppError::Busy(
                    "A quiz is already being generated".to_string(),
                ));
            }
            let (topic, difficulty) = request(&*state)?;
            let current = std::mem::take(&mut *state);
            *state = current.generation_started();
            (state.epoch, topic, difficulty)
        };

        log::info!(
            "Generating {} {} questions on '{}'",
            self.question_count,
            difficulty,
            topic
        );

        let outcome = self
            .provider
            .generate_quiz(&topic, difficulty, self.question_count)
            .await
            .and_then(|questions| self.take_requested(questions))
            .and_then(QuizSession::new);

        let mut state = self.state.write().await;
        if state.epoch != epoch {
            log::info!("Discarding quiz generated before the last reset");
            return Ok(state.clone());
        }

        let current = std::mem::take(&mut *state);
        *state = match outcome {
            Ok(session) => current.quiz_ready(topic, difficulty, session),
            Err(e) => {
                log::error!("Quiz generation on '{}' failed: {}", topic, e);
                current.generation_failed(e.user_message())
            }
        };

        Ok(state.clone())
    }

    fn take_requested(&self, mut questions: Vec<Question>) -> AppResult<Vec<Question>> {
        if questions.len() < self.question_count {
            return Err(AppError::InsufficientQuestions {
                requested: self.question_count,
                received: questions.len(),
            });
        }
        questions.truncate(self.question_count);
        Ok(questions)
    }
}
