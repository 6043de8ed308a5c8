use std::collections::HashSet;
use std::fmt;

use async_graphql::Enum;
use serde::{Deserialize, Serialize};

use crate::{
    constants::OPTIONS_PER_QUESTION,
    errors::{AppError, AppResult},
};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, Enum, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// A multiple-choice question whose correct answer is one of its options.
///
/// Fields are private so the only way to obtain a `Question` is through
/// [`Question::new`], which enforces the option count and answer membership.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    question: String,
    options: Vec<String>,
    correct_answer: String,
}

impl Question {
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> AppResult<Self> {
        let question = question.into().trim().to_string();
        let options: Vec<String> = options.into_iter().map(|o| o.trim().to_string()).collect();
        let correct_answer = correct_answer.into().trim().to_string();

        if question.is_empty() {
            return Err(AppError::ValidationError(
                "Question text cannot be empty".to_string(),
            ));
        }

        if options.len() != OPTIONS_PER_QUESTION {
            return Err(AppError::ValidationError(format!(
                "Question '{}' has {} options, expected {}",
                question,
                options.len(),
                OPTIONS_PER_QUESTION
            )));
        }

        if options.iter().any(|o| o.is_empty()) {
            return Err(AppError::ValidationError(format!(
                "Question '{}' has an empty option",
                question
            )));
        }

        let distinct: HashSet<&str> = options.iter().map(String::as_str).collect();
        if distinct.len() != options.len() {
            return Err(AppError::ValidationError(format!(
                "Question '{}' repeats an option",
                question
            )));
        }

        if !options.contains(&correct_answer) {
            return Err(AppError::ValidationError(format!(
                "Correct answer '{}' is not one of the options of '{}'",
                correct_answer, question
            )));
        }

        Ok(Self {
            question,
            options,
            correct_answer,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn is_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}
