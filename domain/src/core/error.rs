//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    #[error("Follow-up controller is not awaiting an answer (state: {0})")]
    NotAwaitingAnswer(String),

    #[error("Follow-up controller is not awaiting a follow-up decision (state: {0})")]
    NotAwaitingDecision(String),
}

impl DomainError {
    /// Check if this error comes from driving the follow-up state machine out of order
    pub fn is_state_violation(&self) -> bool {
        matches!(
            self,
            DomainError::NotAwaitingAnswer(_) | DomainError::NotAwaitingDecision(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DomainError::InvalidQuestion("blank".to_string());
        assert_eq!(error.to_string(), "Invalid question: blank");
    }

    #[test]
    fn test_is_state_violation_check() {
        assert!(DomainError::NotAwaitingAnswer("terminated".to_string()).is_state_violation());
        assert!(DomainError::NotAwaitingDecision("awaiting".to_string()).is_state_violation());
        assert!(!DomainError::InvalidPolicy("x".to_string()).is_state_violation());
    }
}
