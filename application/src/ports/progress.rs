//! Progress notification port
//!
//! Defines the interface for reporting progress during an interview session.

use interview_domain::{DomainProfile, GateDecision, Phase, Question, QuestionThread};

/// Callback for progress updates during an interview
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinners, plain text, nothing).
pub trait InterviewProgress: Send + Sync {
    /// Called before a text-generation call starts
    fn on_phase_start(&self, phase: &Phase);

    /// Called when a text-generation call returns, successfully or not
    fn on_phase_complete(&self, phase: &Phase, success: bool);

    fn on_gate_decision(&self, _decision: &GateDecision) {}

    fn on_domain_detected(&self, _domain: &DomainProfile) {}

    fn on_questions_ready(&self, _questions: &[Question]) {}

    /// A main question is about to be asked (`index` is zero-based)
    fn on_main_question(&self, _index: usize, _question: &Question) {}

    /// A follow-up is about to be asked (`number` is one-based within the thread)
    fn on_follow_up_question(&self, _index: usize, _number: usize, _question: &Question) {}

    /// A thread ended early because an answer was blank
    fn on_thread_skipped(&self, _index: usize, _follow_up: bool) {}

    fn on_thread_complete(&self, _index: usize, _thread: &QuestionThread) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl InterviewProgress for NoProgress {
    fn on_phase_start(&self, _phase: &Phase) {}
    fn on_phase_complete(&self, _phase: &Phase, _success: bool) {}
}
