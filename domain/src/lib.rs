//! Domain layer for mock-interview
//!
//! This crate contains the core interview logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Gate
//!
//! Before anything else, the candidate's resume is scored against the job
//! description. The reply is parsed by [`parse_match_score`] into a bounded
//! [`MatchScore`]; a [`GateDecision`] below the threshold ends the session.
//!
//! ## Threads
//!
//! Each main question opens a [`QuestionThread`]. The
//! [`FollowUpController`] state machine decides after every answer whether
//! to ask another follow-up, stop on the model's [`STOP_TOKEN`], stop on a
//! blank answer, or stop at the follow-up limit.

pub mod config;
pub mod core;
pub mod gate;
pub mod interview;
pub mod prompt;
pub mod questions;

// Re-export commonly used types
pub use config::{InterviewPolicy, OutputFormat};
pub use core::{error::DomainError, question::Question};
pub use gate::{GateDecision, MatchScore, parse_match_score};
pub use interview::{
    Answer, AnswerProvenance, FollowUpController, FollowUpReply, FollowUpRequest, FollowUpState,
    InterviewOutcome, InterviewReport, InterviewSession, Phase, QuestionThread, STOP_TOKEN,
    SessionStage, TerminationReason, ThreadSummary, Turn, parse_follow_up_reply,
};
pub use prompt::PromptTemplate;
pub use questions::{DomainProfile, normalize_question_list};
