//! Interview session entity.

use super::report::InterviewReport;
use super::thread::QuestionThread;
use crate::core::question::Question;
use crate::gate::GateDecision;
use crate::questions::DomainProfile;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStage {
    Created,
    Gated,
    Rejected,
    Questioning,
}

/// Top-level run of one interview (Entity)
///
/// Owns its threads exclusively. Lives for the duration of the process.
#[derive(Debug, Clone)]
pub struct InterviewSession {
    candidate_text: String,
    target_text: String,
    gate: Option<GateDecision>,
    domain: Option<DomainProfile>,
    questions: Vec<Question>,
    threads: Vec<QuestionThread>,
    stage: SessionStage,
}

/// How a session ended.
#[derive(Debug, Clone)]
pub enum InterviewOutcome {
    /// The gate refused the session; nothing else ran
    Rejected(GateDecision),
    Completed(InterviewReport),
}

impl InterviewSession {
    pub fn new(candidate_text: impl Into<String>, target_text: impl Into<String>) -> Self {
        Self {
            candidate_text: candidate_text.into(),
            target_text: target_text.into(),
            gate: None,
            domain: None,
            questions: Vec::new(),
            threads: Vec::new(),
            stage: SessionStage::Created,
        }
    }

    pub fn candidate_text(&self) -> &str {
        &self.candidate_text
    }

    pub fn target_text(&self) -> &str {
        &self.target_text
    }

    pub fn stage(&self) -> SessionStage {
        self.stage
    }

    pub fn gate(&self) -> Option<&GateDecision> {
        self.gate.as_ref()
    }

    pub fn domain(&self) -> Option<&DomainProfile> {
        self.domain.as_ref()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn threads(&self) -> &[QuestionThread] {
        &self.threads
    }

    /// Record the gate decision. Returns whether the session may proceed.
    pub fn record_gate(&mut self, decision: GateDecision) -> bool {
        self.gate = Some(decision);
        self.stage = if decision.is_pass() {
            SessionStage::Gated
        } else {
            SessionStage::Rejected
        };
        decision.is_pass()
    }

    pub fn record_domain(&mut self, domain: DomainProfile) {
        self.domain = Some(domain);
    }

    pub fn record_questions(&mut self, questions: Vec<Question>) {
        self.questions = questions;
        self.stage = SessionStage::Questioning;
    }

    pub fn push_thread(&mut self, thread: QuestionThread) {
        self.threads.push(thread);
    }

    /// Close the session.
    ///
    /// A session that was never gated is reported as rejected with a zero
    /// score, matching the fail-closed gate.
    pub fn finish(self) -> InterviewOutcome {
        match self.gate {
            Some(decision) if decision.is_pass() => InterviewOutcome::Completed(
                InterviewReport::new(
                    decision,
                    self.domain.unwrap_or_else(DomainProfile::fallback),
                    self.threads,
                ),
            ),
            Some(decision) => InterviewOutcome::Rejected(decision),
            None => InterviewOutcome::Rejected(GateDecision::evaluate(
                crate::gate::MatchScore::MIN,
                crate::config::DEFAULT_PASS_THRESHOLD,
            )),
        }
    }
}
