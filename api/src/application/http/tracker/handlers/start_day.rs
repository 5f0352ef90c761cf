use axum::extract::State;
use cutlogger_core::domain::day::entities::DayState;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct StartDayResponse {
    pub data: DayState,
}

#[utoipa::path(
    post,
    path = "/day/start",
    tag = "tracker",
    summary = "Start a new day",
    responses(
        (status = 200, body = StartDayResponse),
        (status = 409, body = ApiErrorResponse)
    )
)]
pub async fn start_day(
    State(state): State<AppState>,
) -> Result<Response<StartDayResponse>, ApiError> {
    let day_state = state.with_tracker(|tracker| tracker.start_day())?;

    Ok(Response::OK(StartDayResponse { data: day_state }))
}
