//! Error types for the Gemini adapter

use interview_application::ports::llm_gateway::GatewayError;
use thiserror::Error;

/// Errors that can occur when calling the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gemini returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Rate limit or quota exceeded: {0}")]
    Quota(String),

    #[error("Response contained no candidate text")]
    NoText,
}

impl GeminiError {
    /// Map to the port error, keeping the model name for empty replies.
    pub fn into_gateway_error(self, model: &str) -> GatewayError {
        match self {
            GeminiError::Transport(e) if e.is_connect() || e.is_timeout() => {
                GatewayError::ConnectionError(e.to_string())
            }
            GeminiError::Transport(e) if e.is_decode() => {
                GatewayError::RequestFailed(format!("malformed response: {}", e))
            }
            GeminiError::Transport(e) => GatewayError::Other(e.to_string()),
            GeminiError::Status { status, body } => {
                GatewayError::RequestFailed(format!("HTTP {}: {}", status, body))
            }
            GeminiError::Quota(message) => GatewayError::QuotaExceeded(message),
            GeminiError::NoText => GatewayError::EmptyResponse(model.to_string()),
        }
    }
}
