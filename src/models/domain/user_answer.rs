use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

use crate::models::domain::Question;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct UserAnswer {
    pub question: String,
    pub selected_answer: String,
    pub is_correct: bool,
    pub correct_answer: String,
}

impl UserAnswer {
    /// Grades `selected` against the question's correct answer (exact, case-sensitive).
    pub fn grade(question: &Question, selected: &str) -> Self {
        UserAnswer {
            question: question.question().to_string(),
            selected_answer: selected.to_string(),
            is_correct: selected == question.correct_answer(),
            correct_answer: question.correct_answer().to_string(),
        }
    }
}
