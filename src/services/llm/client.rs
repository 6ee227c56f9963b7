use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Failure of an outbound generation call. Nothing here is fatal to the
/// process; every caller maps these onto its own fallback path.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("generation request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("generation service returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed generation response: {0}")]
    Malformed(String),
    #[error("generation call exceeded {0:?}")]
    Timeout(Duration),
}

/// One outbound request to the generation service.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: usize,
    /// When set, ask the service to constrain decoding to one of these
    /// labels. Servers may ignore the constraint; callers must still
    /// validate the result.
    pub labels: Option<Vec<String>>,
}

/// Boundary to the hosted text-generation service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<String, ServiceError>;
}

#[derive(Serialize)]
struct CompletionRequest {
    prompt: String,
    stream: bool,
    n_predict: usize,
    temperature: f32,
    stop: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    json_schema: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    content: String,
}

/// Client for a llama-server style `/completion` endpoint.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl LlmClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout) // Network-level bound; generate() adds the call-site bound
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, ServiceError> {
        let full_prompt = format!(
            "System: {}\nUser: {}\nAssistant:",
            request.system, request.user
        );

        let request_body = CompletionRequest {
            prompt: full_prompt,
            stream: false, // One-shot only
            n_predict: request.max_tokens,
            temperature: request.temperature,
            stop: vec!["User:".to_string(), "System:".to_string()],
            // Enum constraint for closed label sets
            json_schema: request
                .labels
                .as_ref()
                .map(|labels| serde_json::json!({ "type": "string", "enum": labels })),
        };

        let send = self
            .client
            .post(format!("{}/completion", self.base_url))
            .json(&request_body)
            .send();

        let response = tokio::time::timeout(self.timeout, send)
            .await
            .map_err(|_| ServiceError::Timeout(self.timeout))??;

        if !response.status().is_success() {
            return Err(ServiceError::Status(response.status()));
        }

        let resp_json: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Malformed(e.to_string()))?;

        debug!(chars = resp_json.content.len(), "completion received");
        Ok(resp_json.content.trim().to_string())
    }
}
