//! LLM Gateway port
//!
//! Defines the interface for the text-generation service. Every judgment the
//! interview delegates (scoring, domain detection, question generation,
//! follow-ups, critique) is a single prompt in, text out.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Empty response from model {0}")]
    EmptyResponse(String),

    #[error("Not configured: {0}")]
    NotConfigured(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for text generation
///
/// This port defines how the application layer communicates with the
/// generation service. Implementations (adapters) live in the
/// infrastructure layer. Calls are attempted exactly once; callers decide
/// the fallback for a failure.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Identifier of the model answering prompts (for logs)
    fn model_name(&self) -> &str;

    /// Send a prompt and get the generated text
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;
}
