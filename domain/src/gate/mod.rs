//! Admission gate: resume/job-description compatibility.
//!
//! The score itself is judged by the text-generation service; this module
//! owns the parts that must not depend on it behaving: turning a loose reply
//! into a bounded [`MatchScore`] and comparing it against the threshold.

pub mod decision;
pub mod score;

pub use decision::GateDecision;
pub use score::{MatchScore, parse_match_score};
