//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod answer_input;
pub mod audio_capture;
pub mod document_reader;
pub mod llm_gateway;
pub mod progress;
pub mod session_logger;
pub mod speech;
pub mod transcriber;
