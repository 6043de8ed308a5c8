pub mod chat_backend;
pub mod model_service;
pub mod quiz_app_service;
pub mod quiz_session_service;
pub mod results_service;
