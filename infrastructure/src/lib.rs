//! Infrastructure layer for mock-interview
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod audio;
pub mod config;
pub mod document;
pub mod gemini;
pub mod logging;
pub mod speech;
pub mod transcription;

// Re-export commonly used types
pub use audio::{AudioSettings, build_capture, encode_wav};
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use document::PdfDocumentReader;
pub use gemini::{GeminiError, GeminiGateway};
pub use logging::JsonlSessionLogger;
pub use speech::CommandSpeaker;
pub use transcription::{DisabledTranscriber, WhisperTranscriber};
