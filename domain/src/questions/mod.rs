//! Main-question set and the candidate's detected domain.
//!
//! - [`normalize_question_list`]: turns a loosely formatted list reply into questions
//! - [`DomainProfile`]: the domain description questions are generated for

pub mod normalize;
pub mod profile;

pub use normalize::{normalize_question_line, normalize_question_list};
pub use profile::DomainProfile;
