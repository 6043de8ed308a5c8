use std::env;

use secrecy::SecretString;

use crate::{
    constants::NUMBER_OF_QUESTIONS,
    errors::{AppError, AppResult},
};

const MAX_QUESTION_COUNT: usize = 20;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: SecretString,
    pub api_base: String,
    pub model: String,
    pub question_count: usize,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    /// A missing or blank `API_KEY` is a fatal configuration error.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::ConfigurationError("API_KEY environment variable not set".to_string())
            })?;

        let question_count = match lookup("QUIZ_QUESTION_COUNT") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                AppError::ConfigurationError(format!(
                    "QUIZ_QUESTION_COUNT must be a positive integer, got '{}'",
                    raw
                ))
            })?,
            None => NUMBER_OF_QUESTIONS,
        };

        if !(1..=MAX_QUESTION_COUNT).contains(&question_count) {
            return Err(AppError::ConfigurationError(format!(
                "QUIZ_QUESTION_COUNT must be between 1 and {}, got {}",
                MAX_QUESTION_COUNT, question_count
            )));
        }

        Ok(Self {
            api_key: SecretString::from(api_key),
            api_base: lookup("AI_API_BASE")
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: lookup("AI_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string()),
            question_count,
            web_server_host: lookup("WEB_SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            web_server_port: lookup("WEB_SERVER_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|| "http://localhost:5173".to_string()),
        })
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            api_key: SecretString::from("test-api-key".to_string()),
            api_base: "http://localhost:9999/v1".to_string(),
            model: "test-model".to_string(),
            question_count: NUMBER_OF_QUESTIONS,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: "http://localhost:5173".to_string(),
        }
    }
}
