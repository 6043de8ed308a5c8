use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use async_graphql::ErrorExtensions;
use serde::Serialize;
use thiserror::Error;

pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate quiz. The AI might be busy or the topic might be too specific. Please try again.";
pub const INSUFFICIENT_QUESTIONS_MESSAGE: &str =
    "Failed to generate enough questions. Please try a broader topic.";

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Quiz generation failed: {0}")]
    GenerationError(String),

    #[error("Insufficient questions: received {received} of {requested}")]
    InsufficientQuestions { requested: usize, received: usize },

    #[error("Suggestion generation failed: {0}")]
    SuggestionError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Model service error: {0}")]
    ModelError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Busy: {0}")]
    Busy(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::GenerationError(_) => "GENERATION_ERROR",
            AppError::InsufficientQuestions { .. } => "INSUFFICIENT_QUESTIONS",
            AppError::SuggestionError(_) => "SUGGESTION_ERROR",
            AppError::ConfigurationError(_) => "CONFIGURATION_ERROR",
            AppError::ModelError(_) => "MODEL_ERROR",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::InvalidTransition(_) => "INVALID_TRANSITION",
            AppError::Busy(_) => "BUSY",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Message shown to the player on the setup screen.
    pub fn user_message(&self) -> String {
        match self {
            AppError::GenerationError(_) | AppError::ModelError(_) => {
                GENERATION_FAILED_MESSAGE.to_string()
            }
            AppError::InsufficientQuestions { .. } => INSUFFICIENT_QUESTIONS_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::GenerationError(_) => StatusCode::BAD_GATEWAY,
            AppError::InsufficientQuestions { .. } => StatusCode::BAD_GATEWAY,
            AppError::SuggestionError(_) => StatusCode::BAD_GATEWAY,
            AppError::ModelError(_) => StatusCode::BAD_GATEWAY,
            AppError::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidTransition(_) => StatusCode::CONFLICT,
            AppError::Busy(_) => StatusCode::CONFLICT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_err, e| {
            e.set("code", self.error_code());
        })
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::ValidationError("topic".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Busy("generating".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::GenerationError("timeout".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::InsufficientQuestions {
            requested: 5,
            received: 3,
        };
        assert_eq!(err.to_string(), "Insufficient questions: received 3 of 5");
    }

    #[test]
    fn test_user_messages_hide_provider_details() {
        let err = AppError::GenerationError("upstream returned 503".into());
        assert_eq!(err.user_message(), GENERATION_FAILED_MESSAGE);

        let err = AppError::InsufficientQuestions {
            requested: 5,
            received: 1,
        };
        assert_eq!(err.user_message(), INSUFFICIENT_QUESTIONS_MESSAGE);
    }

    #[test]
    fn test_graphql_extension_carries_code() {
        let err = AppError::Busy("generating".into()).extend();

        assert_eq!(err.message, "Busy: generating");
        assert!(err.extensions.is_some());
    }
}
