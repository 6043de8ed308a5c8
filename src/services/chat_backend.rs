use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// JSON schema the model's reply must conform to.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSchema {
    pub name: String,
    pub schema: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub prompt: String,
    pub response_schema: Option<ResponseSchema>,
}

impl ChatRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: None,
        }
    }

    pub fn structured(prompt: impl Into<String>, name: impl Into<String>, schema: Value) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: Some(ResponseSchema {
                name: name.into(),
                schema,
            }),
        }
    }
}

/// One request to the generative model, the text of its reply back.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(&self, request: ChatRequest) -> AppResult<String>;
}

#[derive(Debug, Deserialize)]
struct ChatCompletionBody {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Chat-completions backend for any OpenAI-compatible endpoint.
pub struct OpenAiBackend {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiBackend {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key.expose_secret().to_string())
            .with_api_base(config.api_base.clone());

        Self {
            client: Client::with_config(openai_config),
            model: config.model.clone(),
        }
    }

    fn request_body(&self, request: &ChatRequest) -> Value {
        let mut body = json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": request.prompt }
            ],
        });

        if let Some(schema) = &request.response_schema {
            body["response_format"] = json!({
                "type": "json_schema",
                "json_schema": {
                    "name": schema.name,
                    "schema": schema.schema,
                    "strict": false,
                }
            });
        }

        body
    }
}

#[async_trait]
impl ChatBackend for OpenAiBackend {
    async fn complete(&self, request: ChatRequest) -> AppResult<String> {
        let body = self.request_body(&request);

        log::debug!(
            "Sending chat completion to model {} (structured: {})",
            self.model,
            request.response_schema.is_some()
        );

        let response: ChatCompletionBody = self
            .client
            .chat()
            .create_byot(body)
            .await
            .map_err(|e| AppError::ModelError(e.to_string()))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| AppError::ModelError("Model returned an empty response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_request_has_no_response_format() {
        let backend = OpenAiBackend::new(&Config::test_config());
        let body = backend.request_body(&ChatRequest::text("Summarize"));

        assert_eq!(body["model"], "test-model");
        assert_eq!(body["messages"][0]["content"], "Summarize");
        assert!(body.get("response_format").is_none());
    }

    #[test]
    fn structured_request_carries_json_schema() {
        let backend = OpenAiBackend::new(&Config::test_config());
        let schema = json!({ "type": "object" });
        let body = backend.request_body(&ChatRequest::structured("Quiz me", "quiz", schema.clone()));

        assert_eq!(body["response_format"]["type"], "json_schema");
        assert_eq!(body["response_format"]["json_schema"]["name"], "quiz");
        assert_eq!(body["response_format"]["json_schema"]["schema"], schema);
    }

    #[test]
    fn completion_body_reads_first_choice_content() {
        let body: ChatCompletionBody = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "hello" } }
            ]
        }))
        .expect("completion body should deserialize");

        assert_eq!(body.choices[0].message.content.as_deref(), Some("hello"));
    }
}
