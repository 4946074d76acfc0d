//! Logging infrastructure: the structured session transcript.
//!
//! Provides [`JsonlSessionLogger`], a JSONL file writer that implements
//! the [`SessionLogger`](interview_application::SessionLogger) port.

mod jsonl_logger;

pub use jsonl_logger::{JsonlSessionLogger, transcript_file_name};
