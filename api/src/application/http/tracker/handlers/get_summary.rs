use axum::extract::State;
use cutlogger_core::domain::day::entities::DaySummary;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSummaryResponse {
    pub data: DaySummary,
}

#[utoipa::path(
    get,
    path = "/summary",
    tag = "tracker",
    summary = "Score the live day",
    responses(
        (status = 200, body = GetSummaryResponse)
    )
)]
pub async fn get_summary(
    State(state): State<AppState>,
) -> Result<Response<GetSummaryResponse>, ApiError> {
    let summary = state.with_tracker(|tracker| Ok(tracker.summary()))?;

    Ok(Response::OK(GetSummaryResponse { data: summary }))
}
