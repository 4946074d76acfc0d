//! Configuration value objects owned by the domain.
//!
//! - [`InterviewPolicy`]: gate threshold and thread/question limits
//! - [`OutputFormat`]: how the final report is rendered

mod output_format;
mod policy;

pub use output_format::OutputFormat;
pub use policy::{
    DEFAULT_MAX_FOLLOW_UPS, DEFAULT_PASS_THRESHOLD, DEFAULT_QUESTION_COUNT, InterviewPolicy,
};
