use axum::extract::State;
use cutlogger_core::domain::{
    day::entities::{ArchivedDay, DayState, DaySummary, LogEntry},
    workout::entities::WorkoutPlan,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

/// The whole application state plus the live day's summary.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackerStateView {
    pub workouts: Vec<WorkoutPlan>,
    pub day_state: DayState,
    pub day_logs: Vec<LogEntry>,
    pub ended_days: Vec<ArchivedDay>,
    pub summary: DaySummary,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetStateResponse {
    pub data: TrackerStateView,
}

#[utoipa::path(
    get,
    path = "/state",
    tag = "tracker",
    summary = "Get tracker state",
    responses(
        (status = 200, body = GetStateResponse)
    )
)]
pub async fn get_state(
    State(state): State<AppState>,
) -> Result<Response<GetStateResponse>, ApiError> {
    let view = state.with_tracker(|tracker| {
        let app_state = tracker.state();
        Ok(TrackerStateView {
            workouts: app_state.workouts.clone(),
            day_state: app_state.ledger.day_state.clone(),
            day_logs: app_state.ledger.day_logs.clone(),
            ended_days: app_state.ledger.ended_days.clone(),
            summary: tracker.summary(),
        })
    })?;

    Ok(Response::OK(GetStateResponse { data: view }))
}
