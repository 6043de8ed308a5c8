use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::response::AppSnapshot};

#[get("/api/state")]
async fn get_state(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let snapshot = AppSnapshot::from(state.quiz_service.snapshot().await);
    Ok(HttpResponse::Ok().json(snapshot))
}

#[get("/health")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.config.model,
        "question_count": state.quiz_service.question_count(),
    }))
}
