//! Interview policy: the numeric limits that shape a session.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Minimum match score required to start the interview.
pub const DEFAULT_PASS_THRESHOLD: u8 = 60;

/// Maximum follow-up turns per thread (the main turn is not counted).
pub const DEFAULT_MAX_FOLLOW_UPS: usize = 5;

/// Number of main questions requested from the generator.
pub const DEFAULT_QUESTION_COUNT: usize = 5;

/// Limits applied by the gate, the question generator and the follow-up
/// controller.
///
/// `question_count` is what the generator is *asked* for; the session
/// proceeds with however many questions actually come back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewPolicy {
    pub pass_threshold: u8,
    pub max_follow_ups: usize,
    pub question_count: usize,
}

impl Default for InterviewPolicy {
    fn default() -> Self {
        Self {
            pass_threshold: DEFAULT_PASS_THRESHOLD,
            max_follow_ups: DEFAULT_MAX_FOLLOW_UPS,
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }
}

impl InterviewPolicy {
    pub fn with_pass_threshold(mut self, threshold: u8) -> Self {
        self.pass_threshold = threshold;
        self
    }

    pub fn with_max_follow_ups(mut self, max: usize) -> Self {
        self.max_follow_ups = max;
        self
    }

    pub fn with_question_count(mut self, count: usize) -> Self {
        self.question_count = count;
        self
    }

    /// Maximum number of turns a thread can hold, main turn included.
    pub fn max_turns(&self) -> usize {
        self.max_follow_ups + 1
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.pass_threshold > 100 {
            return Err(DomainError::InvalidPolicy(format!(
                "pass_threshold must be within 0..=100, got {}",
                self.pass_threshold
            )));
        }
        if self.question_count == 0 {
            return Err(DomainError::InvalidPolicy(
                "question_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = InterviewPolicy::default();
        assert_eq!(policy.pass_threshold, 60);
        assert_eq!(policy.max_follow_ups, 5);
        assert_eq!(policy.question_count, 5);
        assert_eq!(policy.max_turns(), 6);
    }

    #[test]
    fn test_validate() {
        assert!(InterviewPolicy::default().validate().is_ok());
        assert!(
            InterviewPolicy::default()
                .with_pass_threshold(101)
                .validate()
                .is_err()
        );
        assert!(
            InterviewPolicy::default()
                .with_question_count(0)
                .validate()
                .is_err()
        );
        // Zero follow-ups is a legal (if unusual) configuration
        assert!(
            InterviewPolicy::default()
                .with_max_follow_ups(0)
                .validate()
                .is_ok()
        );
    }
}
