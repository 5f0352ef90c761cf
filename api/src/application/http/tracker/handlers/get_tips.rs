use axum::Json;
use cutlogger_core::domain::food::tips::{DOING_WELL_TIPS, TIP_LIBRARY};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TipsView {
    /// Shown with every good or mid result.
    pub doing_well: Vec<String>,
    pub library: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetTipsResponse {
    pub data: TipsView,
}

#[utoipa::path(
    get,
    path = "/tips",
    tag = "tracker",
    summary = "List cut tips",
    responses(
        (status = 200, body = GetTipsResponse)
    )
)]
pub async fn get_tips() -> Json<GetTipsResponse> {
    Json(GetTipsResponse {
        data: TipsView {
            doing_well: DOING_WELL_TIPS.iter().map(|tip| tip.to_string()).collect(),
            library: TIP_LIBRARY.iter().map(|tip| tip.to_string()).collect(),
        },
    })
}
