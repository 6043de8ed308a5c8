use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        chat_backend::OpenAiBackend,
        model_service::{ModelService, QuizProvider},
        quiz_app_service::QuizAppService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizAppService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let backend = Arc::new(OpenAiBackend::new(&config));
        let provider = Arc::new(ModelService::new(backend));
        Self::with_provider(config, provider)
    }

    pub fn with_provider(config: Config, provider: Arc<dyn QuizProvider>) -> Self {
        let quiz_service = Arc::new(QuizAppService::new(provider, config.question_count));

        Self {
            quiz_service,
            config: Arc::new(config),
        }
    }
}
