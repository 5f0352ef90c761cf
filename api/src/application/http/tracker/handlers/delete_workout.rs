use axum::extract::{Path, State};
use cutlogger_core::domain::workout::entities::WorkoutPlan;
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
pub struct DeleteWorkoutResponse {
    pub data: WorkoutPlan,
}

#[utoipa::path(
    delete,
    path = "/workouts/{workout_id}",
    tag = "tracker",
    summary = "Remove a workout plan",
    params(
        ("workout_id" = String, Path, description = "Workout plan id"),
    ),
    responses(
        (status = 200, body = DeleteWorkoutResponse),
        (status = 404, body = ApiErrorResponse)
    )
)]
pub async fn delete_workout(
    Path(workout_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<DeleteWorkoutResponse>, ApiError> {
    let plan = state.with_tracker(|tracker| tracker.remove_workout(&workout_id))?;

    Ok(Response::OK(DeleteWorkoutResponse { data: plan }))
}
