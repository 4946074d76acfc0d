//! Gemini LLM Gateway implementation

use super::error::GeminiError;
use super::protocol::{GenerateContentRequest, GenerateContentResponse, error_message};
use async_trait::async_trait;
use interview_application::ports::llm_gateway::{GatewayError, LlmGateway};
use interview_domain::core::string::truncate;
use reqwest::StatusCode;
use tracing::{debug, info};

/// Non-JSON error bodies (proxy pages and the like) are cut to this many bytes.
const MAX_ERROR_BODY: usize = 200;

/// LLM Gateway implementation for the Gemini `generateContent` API
pub struct GeminiGateway {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiGateway {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let gateway = Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
        };
        info!(model = %gateway.model, "GeminiGateway initialized");
        gateway
    }

    /// Endpoint for this gateway's model
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    async fn call(&self, prompt: &str) -> Result<String, GeminiError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body).unwrap_or_else(|| truncate(&body, MAX_ERROR_BODY));
            return Err(if status == StatusCode::TOO_MANY_REQUESTS {
                GeminiError::Quota(message)
            } else {
                GeminiError::Status {
                    status: status.as_u16(),
                    body: message,
                }
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        body.text().ok_or(GeminiError::NoText)
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        debug!(model = %self.model, prompt_bytes = prompt.len(), "Sending prompt");
        let text = self
            .call(prompt)
            .await
            .map_err(|e| e.into_gateway_error(&self.model))?;
        debug!(model = %self.model, reply_bytes = text.len(), "Received reply");
        Ok(text)
    }
}
