//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated interview question
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: text helpers (truncation, first line, blank checks)

pub mod error;
pub mod question;
pub mod string;
