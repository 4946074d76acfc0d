//! Application-level configuration.
//!
//! [`InterviewConfig`] is handed to the session orchestrator at construction.
//! Nothing in the application layer reads ambient global state.

use interview_domain::{DomainError, InterviewPolicy};

/// Interview behavior configuration.
#[derive(Debug, Clone)]
pub struct InterviewConfig {
    /// Gate threshold and thread/question limits.
    pub policy: InterviewPolicy,
    /// Read each question aloud through the speech port.
    pub speak_questions: bool,
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            policy: InterviewPolicy::default(),
            speak_questions: true,
        }
    }
}

impl InterviewConfig {
    pub fn new(policy: InterviewPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn without_speech(mut self) -> Self {
        self.speak_questions = false;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        self.policy.validate()
    }
}
