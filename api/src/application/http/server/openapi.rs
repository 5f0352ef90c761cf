use crate::application::http::{
    ai::router::AiApiDoc, health::HealthApiDoc, tracker::router::TrackerApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "cutlogger API"
    ),
    nest(
        (path = "/tracker", api = TrackerApiDoc),
    )
)]
pub struct ApiDoc;

/// The full document. The AI and health groups already carry root-level paths.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(AiApiDoc::openapi());
    openapi.merge(HealthApiDoc::openapi());
    openapi
}
