use super::handlers::assist::{__path_assist, assist};
use super::handlers::method_not_allowed::method_not_allowed;
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(assist))]
pub struct AiApiDoc;

pub fn ai_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/ai", state.args.server.root_path),
            post(assist).fallback(method_not_allowed),
        )
        .route(
            &format!("{}/api/ai", state.args.server.root_path),
            post(assist).fallback(method_not_allowed),
        )
}
