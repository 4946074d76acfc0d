//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod collect_answer;
pub mod conduct_thread;
pub mod critique;
pub mod detect_domain;
pub mod evaluate_gate;
pub mod generate_questions;
pub mod prepare_documents;
pub mod run_interview;

#[cfg(test)]
pub(crate) mod test_support;
