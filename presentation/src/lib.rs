//! Presentation layer for mock-interview
//!
//! This crate contains the CLI definition, the interactive console prompts,
//! progress reporters and the final report formatters.

pub mod cli;
pub mod console;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use console::{ConsoleAnswerInput, DocumentIntake, LinePrompter};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{OutputFormatter, formatter_for};
pub use output::json::JsonFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
