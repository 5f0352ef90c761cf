use crate::application::http::server::api_entities::api_error::ApiError;

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed("Use POST".to_string())
}
