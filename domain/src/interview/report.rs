//! Final interview report.

use super::thread::{QuestionThread, TerminationReason};
use crate::gate::GateDecision;
use crate::questions::DomainProfile;
use serde::{Deserialize, Serialize};

/// Consolidated result of a completed session (Value Object)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewReport {
    pub gate: GateDecision,
    pub domain: DomainProfile,
    pub threads: Vec<QuestionThread>,
}

/// Aggregate counts over a report, for logs and summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadSummary {
    pub questions: usize,
    pub answered: usize,
    pub follow_ups: usize,
    pub exhausted: usize,
    pub failed: usize,
}

impl InterviewReport {
    pub fn new(gate: GateDecision, domain: DomainProfile, threads: Vec<QuestionThread>) -> Self {
        Self {
            gate,
            domain,
            threads,
        }
    }

    pub fn summary(&self) -> ThreadSummary {
        self.threads
            .iter()
            .fold(ThreadSummary::default(), |mut acc, thread| {
                acc.questions += 1;
                if !thread.is_empty() {
                    acc.answered += 1;
                }
                acc.follow_ups += thread.follow_up_count();
                match thread.termination() {
                    TerminationReason::Exhausted => acc.exhausted += 1,
                    TerminationReason::Failed => acc.failed += 1,
                    _ => {}
                }
                acc
            })
    }
}
