use axum::extract::State;
use cutlogger_core::domain::workout::entities::WorkoutPlan;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetWorkoutsResponse {
    pub data: Vec<WorkoutPlan>,
}

#[utoipa::path(
    get,
    path = "/workouts",
    tag = "tracker",
    summary = "List workout plans",
    responses(
        (status = 200, body = GetWorkoutsResponse)
    )
)]
pub async fn get_workouts(
    State(state): State<AppState>,
) -> Result<Response<GetWorkoutsResponse>, ApiError> {
    let workouts = state.with_tracker(|tracker| Ok(tracker.workouts().to_vec()))?;

    Ok(Response::OK(GetWorkoutsResponse { data: workouts }))
}
