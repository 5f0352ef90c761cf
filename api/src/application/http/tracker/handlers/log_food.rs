use axum::extract::State;
use cutlogger_core::domain::{day::entities::LogEntry, food::value_objects::RawFoodInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    tracker::validators::FoodInputValidator,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LogFoodResponse {
    pub data: LogEntry,
}

#[utoipa::path(
    post,
    path = "/logs",
    tag = "tracker",
    summary = "Log a food",
    description = "Classifies the food and appends it to the active day's log.",
    request_body = FoodInputValidator,
    responses(
        (status = 201, body = LogFoodResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 409, body = ApiErrorResponse)
    )
)]
pub async fn log_food(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<FoodInputValidator>,
) -> Result<Response<LogFoodResponse>, ApiError> {
    let entry = RawFoodInput::from(payload).into_entry()?;
    let log = state.with_tracker(|tracker| tracker.log_food(&entry))?;

    Ok(Response::Created(LogFoodResponse { data: log }))
}
