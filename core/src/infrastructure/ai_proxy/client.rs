use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::domain::{assistant::entities::AssistMode, common::entities::app_errors::CoreError};

pub const AI_BASE_URL_ENV: &str = "CUT_LOGGER_AI_BASE_URL";

const FALLBACK_ERROR: &str = "AI request failed";
const EMPTY_INPUT: &str = "Type something first.";

/// Where the caller runs; decides the default proxy address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    /// The Android emulator reaches the host loopback through 10.0.2.2.
    AndroidEmulator,
    Native,
}

impl Platform {
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Platform::Web | Platform::Native => "http://localhost:8787",
            Platform::AndroidEmulator => "http://10.0.2.2:8787",
        }
    }
}

#[derive(Debug, Serialize)]
struct ProxyRequest<'a> {
    mode: AssistMode,
    input: &'a str,
    constraints: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct ProxyResponse {
    #[serde(default)]
    output: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Client side of the `/ai` proxy endpoint.
#[derive(Debug, Clone)]
pub struct AiProxyClient {
    base_url: String,
    client: Client,
}

impl AiProxyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Base URL from `CUT_LOGGER_AI_BASE_URL`, else the platform default.
    pub fn from_env(platform: Platform) -> Self {
        Self::new(resolve_base_url(
            std::env::var(AI_BASE_URL_ENV).ok(),
            platform,
        ))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn assist(
        &self,
        mode: AssistMode,
        input: &str,
        constraints: &str,
    ) -> Result<String, CoreError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CoreError::Invalid(EMPTY_INPUT.to_string()));
        }

        let url = format!("{}/ai", self.base_url);
        debug!(%url, %mode, "calling AI proxy");

        let response = self
            .client
            .post(&url)
            .json(&ProxyRequest {
                mode,
                input,
                constraints: constraints.trim(),
            })
            .send()
            .await
            .map_err(|e| {
                error!("AI proxy request failed: {}", e);
                CoreError::ExternalServiceError(e.to_string())
            })?;

        let status = response.status();
        let body: ProxyResponse = response.json().await.map_err(|e| {
            error!("Failed to parse AI proxy response: {}", e);
            CoreError::ExternalServiceError(e.to_string())
        })?;

        if !status.is_success() {
            return Err(CoreError::ExternalServiceError(
                body.error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| FALLBACK_ERROR.to_string()),
            ));
        }

        Ok(body.output.unwrap_or_default())
    }
}

fn resolve_base_url(configured: Option<String>, platform: Platform) -> String {
    configured
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| platform.default_base_url().to_string())
}

/// The text shown in place of the output: the output itself, or `Error: <message>`.
pub fn render_outcome(outcome: &Result<String, CoreError>) -> String {
    match outcome {
        Ok(output) => output.clone(),
        Err(e) => format!("Error: {}", e),
    }
}
