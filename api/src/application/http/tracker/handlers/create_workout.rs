use axum::extract::State;
use cutlogger_core::domain::workout::{
    entities::WorkoutPlan, value_objects::CreateWorkoutInput,
};
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
    tracker::validators::CreateWorkoutValidator,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateWorkoutResponse {
    pub data: WorkoutPlan,
}

#[utoipa::path(
    post,
    path = "/workouts",
    tag = "tracker",
    summary = "Add a workout plan",
    request_body = CreateWorkoutValidator,
    responses(
        (status = 201, body = CreateWorkoutResponse),
        (status = 400, body = ApiErrorResponse)
    )
)]
pub async fn create_workout(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateWorkoutValidator>,
) -> Result<Response<CreateWorkoutResponse>, ApiError> {
    let input = CreateWorkoutInput::from(payload);
    let plan = state.with_tracker(|tracker| tracker.add_workout(input))?;

    Ok(Response::Created(CreateWorkoutResponse { data: plan }))
}
