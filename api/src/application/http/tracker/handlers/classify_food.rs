use axum::extract::State;
use cutlogger_core::domain::food::{entities::ClassificationResult, value_objects::RawFoodInput};
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

/// The classification plus the advice lines to show under it.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ClassifiedFood {
    #[serde(flatten)]
    pub result: ClassificationResult,
    pub advice: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ClassifyFoodResponse {
    pub data: ClassifiedFood,
}

#[utoipa::path(
    post,
    path = "/classify",
    tag = "tracker",
    summary = "Classify a food",
    description = "Rates the food against the cut targets of its category without logging it.",
    request_body = FoodInputValidator,
    responses(
        (status = 200, body = ClassifyFoodResponse),
        (status = 400, body = ApiErrorResponse)
    )
)]
pub async fn classify_food(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<FoodInputValidator>,
) -> Result<Response<ClassifyFoodResponse>, ApiError> {
    let entry = RawFoodInput::from(payload).into_entry()?;
    let result = state.with_tracker(|tracker| Ok(tracker.classify(&entry)))?;
    let advice = result.advice();

    Ok(Response::OK(ClassifyFoodResponse {
        data: ClassifiedFood { result, advice },
    }))
}
