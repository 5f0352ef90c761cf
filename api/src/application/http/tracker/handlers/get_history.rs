use axum::extract::State;
use cutlogger_core::domain::day::entities::ArchivedDay;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetHistoryResponse {
    pub data: Vec<ArchivedDay>,
}

#[utoipa::path(
    get,
    path = "/history",
    tag = "tracker",
    summary = "List ended days",
    description = "Archived days, oldest first.",
    responses(
        (status = 200, body = GetHistoryResponse)
    )
)]
pub async fn get_history(
    State(state): State<AppState>,
) -> Result<Response<GetHistoryResponse>, ApiError> {
    let history = state.with_tracker(|tracker| Ok(tracker.history().to_vec()))?;

    Ok(Response::OK(GetHistoryResponse { data: history }))
}
