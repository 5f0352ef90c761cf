use axum::extract::State;
use cutlogger_core::domain::day::entities::ArchivedDay;
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
pub struct EndDayResponse {
    pub data: ArchivedDay,
}

#[utoipa::path(
    post,
    path = "/day/end",
    tag = "tracker",
    summary = "End the day",
    description = "Archives the active day with its summary and locks the day slot.",
    responses(
        (status = 200, body = EndDayResponse),
        (status = 409, body = ApiErrorResponse)
    )
)]
pub async fn end_day(State(state): State<AppState>) -> Result<Response<EndDayResponse>, ApiError> {
    let archived = state.with_tracker(|tracker| tracker.end_day())?;

    Ok(Response::OK(EndDayResponse { data: archived }))
}
