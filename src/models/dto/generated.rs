use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Question,
};

/// Root object requested from the model as structured output.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GeneratedQuiz {
    /// The quiz questions, one entry per requested question.
    pub questions: Vec<GeneratedQuestion>,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    /// The quiz question text.
    pub question: String,
    /// An array of 4 possible answers.
    pub options: Vec<String>,
    /// The correct answer, which must be one of the strings from the 'options' array.
    pub correct_answer: String,
}

impl TryFrom<GeneratedQuestion> for Question {
    type Error = AppError;

    fn try_from(generated: GeneratedQuestion) -> Result<Self, Self::Error> {
        Question::new(
            generated.question,
            generated.options,
            generated.correct_answer,
        )
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GeneratedPayload {
    Wrapped { questions: Vec<Value> },
    Bare(Vec<Value>),
}

/// Splits a model response into raw question entries.
///
/// Accepts `{"questions": [...]}` or a bare array, optionally inside a
/// Markdown code fence. Entries are returned unparsed so one malformed
/// question does not sink the rest.
pub fn question_entries(content: &str) -> AppResult<Vec<Value>> {
    let payload: GeneratedPayload = serde_json::from_str(strip_code_fence(content))
        .map_err(|e| AppError::GenerationError(format!("Unparseable quiz payload: {}", e)))?;

    Ok(match payload {
        GeneratedPayload::Wrapped { questions } => questions,
        GeneratedPayload::Bare(questions) => questions,
    })
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}
