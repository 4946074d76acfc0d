//! Interactive console prompts
//!
//! Everything that reads from the terminal: document intake before the
//! session and the per-question answer prompts during it.

pub mod answer_input;
pub mod intake;
pub mod prompter;

pub use answer_input::{ConsoleAnswerInput, parse_source_choice};
pub use intake::DocumentIntake;
pub use prompter::LinePrompter;
