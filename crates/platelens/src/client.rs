//! Generation service client.
//!
//! One trait seam so the pipeline can run against the real HTTP backend in
//! production and a scripted fake in tests. The real client keeps a single
//! pooled `reqwest::Client` shared by every stage; the credential is
//! supplied once at construction.

use async_trait::async_trait;
use platelens_common::{ChatRequest, ChatResponse, GenerationError};
use std::time::Duration;
use tracing::{error, info};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Minimal interface a stage needs: submit one structured request, get the
/// raw completion text back. No retries, no session state.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn complete(&self, request: ChatRequest) -> Result<String, GenerationError>;
}

/// HTTP client for the chat-completions endpoint.
pub struct OpenAiClient {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint (local gateways, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl GenerationClient for OpenAiClient {
    async fn complete(&self, request: ChatRequest) -> Result<String, GenerationError> {
        info!(
            "[>]  generation call [{}] (max_tokens: {}, temperature: {})",
            request.model, request.max_tokens, request.temperature
        );

        let response = self
            .http_client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            error!("[-]  generation service error {}: {}", status, body);
            return Err(GenerationError::Response { status, body });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Transport(format!("invalid response body: {}", e)))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| GenerationError::Response {
                status: 200,
                body: "response contained no choices".to_string(),
            })?;

        info!("[<]  generation response ({} chars)", content.len());
        Ok(content)
    }
}
