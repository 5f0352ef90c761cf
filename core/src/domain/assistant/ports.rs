use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// A text-completion backend.
pub trait LLMClient: Send + Sync {
    fn generate_text(&self, prompt: String)
    -> impl Future<Output = Result<String, CoreError>> + Send;
}
