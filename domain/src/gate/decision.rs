//! Gate decision entity.

use super::score::MatchScore;
use serde::{Deserialize, Serialize};

/// Outcome of the admission gate. Computed once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateDecision {
    pub score: MatchScore,
    pub threshold: u8,
    pub passed: bool,
}

impl GateDecision {
    /// Compare a score against the threshold. Scores equal to the threshold pass.
    pub fn evaluate(score: MatchScore, threshold: u8) -> Self {
        Self {
            score,
            threshold,
            passed: score.value() >= threshold,
        }
    }

    pub fn is_pass(&self) -> bool {
        self.passed
    }
}
