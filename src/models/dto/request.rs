use async_graphql::InputObject;
use serde::Deserialize;
use validator::Validate;

use crate::models::domain::Difficulty;

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct StartQuizInput {
    #[validate(length(min = 1, max = 200))]
    pub topic: String,

    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct SelectAnswerInput {
    #[validate(length(min = 1))]
    pub option: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_quiz_input_validates_topic_length() {
        let valid = StartQuizInput {
            topic: "Computer Networks".to_string(),
            difficulty: Difficulty::Easy,
        };
        assert!(valid.validate().is_ok());

        let empty = StartQuizInput {
            topic: String::new(),
            difficulty: Difficulty::Easy,
        };
        assert!(empty.validate().is_err());

        let too_long = StartQuizInput {
            topic: "x".repeat(201),
            difficulty: Difficulty::Hard,
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn start_quiz_input_deserializes_difficulty() {
        let input: StartQuizInput =
            serde_json::from_str(r#"{"topic": "Roman History", "difficulty": "MEDIUM"}"#)
                .expect("input should deserialize");

        assert_eq!(input.difficulty, Difficulty::Medium);
    }
}
