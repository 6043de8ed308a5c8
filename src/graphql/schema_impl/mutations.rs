use async_graphql::{Context, ErrorExtensions, Object, Result};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{SelectAnswerInput, StartQuizInput},
        response::AppSnapshot,
    },
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Generation failures do not error; they come back as `error` on a
    /// snapshot in the setup phase.
    async fn start_quiz(&self, ctx: &Context<'_>, input: StartQuizInput) -> Result<AppSnapshot> {
        let state = ctx.data::<AppState>()?;
        let next = state
            .quiz_service
            .start_quiz(input)
            .await
            .map_err(|e| e.extend())?;
        Ok(next.into())
    }

    async fn select_answer(&self, ctx: &Context<'_>, input: SelectAnswerInput) -> Result<AppSnapshot> {
        let state = ctx.data::<AppState>()?;
        input
            .validate()
            .map_err(|e| AppError::from(e).extend())?;
        let next = state
            .quiz_service
            .select_answer(&input.option)
            .await
            .map_err(|e| e.extend())?;
        Ok(next.into())
    }

    async fn next_question(&self, ctx: &Context<'_>) -> Result<AppSnapshot> {
        let state = ctx.data::<AppState>()?;
        let next = state
            .quiz_service
            .next_question()
            .await
            .map_err(|e| e.extend())?;
        Ok(next.into())
    }

    async fn new_quiz(&self, ctx: &Context<'_>) -> Result<AppSnapshot> {
        let state = ctx.data::<AppState>()?;
        let next = state.quiz_service.new_quiz().await.map_err(|e| e.extend())?;
        Ok(next.into())
    }

    async fn start_over(&self, ctx: &Context<'_>) -> Result<AppSnapshot> {
        let state = ctx.data::<AppState>()?;
        Ok(state.quiz_service.start_over().await.into())
    }
}
