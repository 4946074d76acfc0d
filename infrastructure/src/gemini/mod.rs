//! Gemini text generation adapter
//!
//! One `generateContent` call per prompt over HTTPS. No timeout and no
//! retry: a slow call stalls the session, a failed one is reported to the
//! caller, which applies its own fallback.

pub mod error;
pub mod gateway;
pub mod protocol;

pub use error::GeminiError;
pub use gateway::GeminiGateway;
