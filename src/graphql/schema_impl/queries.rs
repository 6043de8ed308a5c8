use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::{
    app_state::AppState,
    models::dto::response::{AppSnapshot, QuestionView, QuizResultsDto},
    services::results_service::ResultsService,
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn state(&self, ctx: &Context<'_>) -> Result<AppSnapshot> {
        let state = ctx.data::<AppState>()?;
        Ok(state.quiz_service.snapshot().await.into())
    }

    async fn current_question(&self, ctx: &Context<'_>) -> Result<Option<QuestionView>> {
        let state = ctx.data::<AppState>()?;
        let snapshot = state.quiz_service.snapshot().await;
        Ok(snapshot.session.as_ref().and_then(QuestionView::from_session))
    }

    async fn results(&self, ctx: &Context<'_>) -> Result<QuizResultsDto> {
        let state = ctx.data::<AppState>()?;
        state.quiz_service.results().await.map_err(|e| e.extend())
    }

    /// Review topics for the finished quiz, bullets rendered as "•".
    async fn improvement_suggestions(&self, ctx: &Context<'_>) -> Result<String> {
        let state = ctx.data::<AppState>()?;
        let text = state
            .quiz_service
            .improvement_suggestions()
            .await
            .map_err(|e| e.extend())?;
        Ok(ResultsService::format_suggestions(&text))
    }
}
