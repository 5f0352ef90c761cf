use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use cutlogger_core::domain::assistant::entities::AssistRequest;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    ai::validators::{AssistValidator, MISSING_MODE_OR_INPUT},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AssistResponse {
    pub output: String,
}

#[utoipa::path(
    post,
    path = "/ai",
    tag = "ai",
    summary = "Ask the assistant",
    description = "Builds a workout or food prompt from the input and returns the model's trimmed reply. Also served at `/api/ai`.",
    request_body = AssistValidator,
    responses(
        (status = 200, body = AssistResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 405, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn assist(
    State(state): State<AppState>,
    payload: Result<Json<AssistValidator>, JsonRejection>,
) -> Result<Response<AssistResponse>, ApiError> {
    // an unreadable body is reported the same way as missing fields
    let Json(payload) =
        payload.map_err(|_| ApiError::BadRequest(MISSING_MODE_OR_INPUT.to_string()))?;
    payload.validate().map_err(ApiError::from_validation)?;

    let request = AssistRequest::try_from(payload)?;
    info!(mode = %request.mode, "assist request");

    let output = state.assistant.assist(request).await?;

    Ok(Response::OK(AssistResponse { output }))
}
