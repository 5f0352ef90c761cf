use tracing::info;

use crate::domain::{
    assistant::{entities::AssistRequest, ports::LLMClient, prompts::build_prompt},
    common::entities::app_errors::CoreError,
};

#[derive(Debug, Clone)]
pub struct AssistantService<L>
where
    L: LLMClient,
{
    llm_client: L,
}

impl<L> AssistantService<L>
where
    L: LLMClient,
{
    pub fn new(llm_client: L) -> Self {
        Self { llm_client }
    }

    /// Build the prompt for the request and return the trimmed completion.
    pub async fn assist(&self, request: AssistRequest) -> Result<String, CoreError> {
        let prompt = build_prompt(&request);
        info!(mode = %request.mode, "sending assist prompt");

        let output = self.llm_client.generate_text(prompt).await?;

        Ok(output.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::assistant::entities::AssistMode;

    struct FakeLLM {
        reply: Result<String, CoreError>,
        prompts: Mutex<Vec<String>>,
    }

    impl FakeLLM {
        fn replying(reply: Result<String, CoreError>) -> Self {
            Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    impl LLMClient for FakeLLM {
        async fn generate_text(&self, prompt: String) -> Result<String, CoreError> {
            self.prompts.lock().unwrap().push(prompt);
            self.reply.clone()
        }
    }

    #[tokio::test]
    async fn test_assist_trims_output() {
        let service = AssistantService::new(FakeLLM::replying(Ok("\n  - Try wall push-ups \n".to_string())));
        let output = service
            .assist(AssistRequest {
                mode: AssistMode::Workout,
                input: "push-ups".to_string(),
                constraints: None,
            })
            .await
            .unwrap();

        assert_eq!(output, "- Try wall push-ups");
        let prompts = service.llm_client.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("User: \"push-ups\""));
    }

    #[tokio::test]
    async fn test_assist_surfaces_upstream_error() {
        let service = AssistantService::new(FakeLLM::replying(Err(
            CoreError::ExternalServiceError("quota exceeded".to_string()),
        )));
        let err = service
            .assist(AssistRequest {
                mode: AssistMode::Food,
                input: "pizza".to_string(),
                constraints: Some("veg".to_string()),
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "quota exceeded");
    }
}
