//! Question thread entity.

use super::turn::Turn;
use crate::core::question::Question;
use serde::{Deserialize, Serialize};

/// Why a thread stopped asking follow-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminationReason {
    /// The follow-up limit was reached
    #[serde(rename = "exhausted-limit")]
    Exhausted,
    /// The generation service replied with the stop token (or could not be reached)
    #[serde(rename = "model-signaled-stop")]
    StopSignal,
    /// A follow-up answer was blank
    EmptyAnswer,
    /// The main answer was blank, so the thread never started
    NoFollowUpsAttempted,
    /// A collaborator failed while the thread was running
    Failed,
}

impl TerminationReason {
    pub fn as_str(&self) -> &str {
        match self {
            TerminationReason::Exhausted => "exhausted-limit",
            TerminationReason::StopSignal => "model-signaled-stop",
            TerminationReason::EmptyAnswer => "empty-answer",
            TerminationReason::NoFollowUpsAttempted => "no-follow-ups-attempted",
            TerminationReason::Failed => "failed",
        }
    }
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One main question with its follow-up chain and feedback (Entity)
///
/// Invariants:
/// - `turns[0]`, when present, is the main turn
/// - an empty thread never carries feedback
/// - a thread that ended on a blank follow-up answer never carries follow-up feedback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionThread {
    main_question: Question,
    turns: Vec<Turn>,
    termination: TerminationReason,
    main_feedback: Option<String>,
    follow_up_feedback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<String>,
}

impl QuestionThread {
    pub fn new(main_question: Question, turns: Vec<Turn>, termination: TerminationReason) -> Self {
        Self {
            main_question,
            turns,
            termination,
            main_feedback: None,
            follow_up_feedback: None,
            failure: None,
        }
    }

    /// A thread cut short by a collaborator failure. Keeps the turns admitted so far.
    pub fn failed(main_question: Question, turns: Vec<Turn>, error: impl Into<String>) -> Self {
        Self {
            failure: Some(error.into()),
            ..Self::new(main_question, turns, TerminationReason::Failed)
        }
    }

    pub fn main_question(&self) -> &Question {
        &self.main_question
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn termination(&self) -> TerminationReason {
        self.termination
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn main_turn(&self) -> Option<&Turn> {
        self.turns.first()
    }

    /// All turns after the main one.
    pub fn follow_up_turns(&self) -> &[Turn] {
        self.turns.get(1..).unwrap_or(&[])
    }

    pub fn follow_up_count(&self) -> usize {
        self.follow_up_turns().len()
    }

    pub fn main_feedback(&self) -> Option<&str> {
        self.main_feedback.as_deref()
    }

    pub fn follow_up_feedback(&self) -> Option<&str> {
        self.follow_up_feedback.as_deref()
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Whether a follow-up critique should be computed for this thread.
    ///
    /// False with zero follow-up turns, and false whenever the thread ended on
    /// a blank answer, even if earlier follow-ups were answered.
    // TODO: product review: summarize the answered part of the sub-thread
    // instead of dropping it when it ends on a blank answer.
    pub fn wants_follow_up_feedback(&self) -> bool {
        self.follow_up_count() > 0
            && !matches!(
                self.termination,
                TerminationReason::EmptyAnswer | TerminationReason::Failed
            )
    }

    /// Attach the main-answer critique. Ignored for an empty thread.
    pub fn set_main_feedback(&mut self, feedback: impl Into<String>) -> bool {
        if self.main_turn().is_none() {
            return false;
        }
        self.main_feedback = Some(feedback.into());
        true
    }

    /// Attach the follow-up critique. Ignored unless [`Self::wants_follow_up_feedback`].
    pub fn set_follow_up_feedback(&mut self, feedback: impl Into<String>) -> bool {
        if !self.wants_follow_up_feedback() {
            return false;
        }
        self.follow_up_feedback = Some(feedback.into());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::turn::Answer;

    fn turn(q: &str, a: &str) -> Turn {
        Turn::try_new(Question::new(q), Answer::typed(a)).unwrap()
    }

    #[test]
    fn test_empty_thread_rejects_feedback() {
        let mut thread = QuestionThread::new(
            Question::new("Main?"),
            vec![],
            TerminationReason::NoFollowUpsAttempted,
        );
        assert!(!thread.set_main_feedback("good"));
        assert!(!thread.set_follow_up_feedback("good"));
        assert!(thread.main_feedback().is_none());
        assert!(thread.follow_up_feedback().is_none());
        assert!(thread.follow_up_turns().is_empty());
    }

    #[test]
    fn test_follow_up_feedback_needs_follow_ups() {
        let mut thread = QuestionThread::new(
            Question::new("Main?"),
            vec![turn("Main?", "answer")],
            TerminationReason::StopSignal,
        );
        assert!(thread.set_main_feedback("detailed"));
        assert!(!thread.wants_follow_up_feedback());
        assert!(!thread.set_follow_up_feedback("short"));
    }

    #[test]
    fn test_empty_answer_suppresses_follow_up_feedback() {
        let mut thread = QuestionThread::new(
            Question::new("Main?"),
            vec![turn("Main?", "a"), turn("F1?", "b"), turn("F2?", "c")],
            TerminationReason::EmptyAnswer,
        );
        assert_eq!(thread.follow_up_count(), 2);
        assert!(!thread.wants_follow_up_feedback());
        assert!(!thread.set_follow_up_feedback("short"));
        assert!(thread.set_main_feedback("kept"));
        assert_eq!(thread.main_feedback(), Some("kept"));
    }

    #[test]
    fn test_follow_up_feedback_accepted() {
        let mut thread = QuestionThread::new(
            Question::new("Main?"),
            vec![turn("Main?", "a"), turn("F1?", "b")],
            TerminationReason::Exhausted,
        );
        assert!(thread.set_follow_up_feedback("short"));
        assert_eq!(thread.follow_up_feedback(), Some("short"));
    }

    #[test]
    fn test_failed_thread() {
        let thread = QuestionThread::failed(Question::new("Main?"), vec![], "stdin closed");
        assert_eq!(thread.termination(), TerminationReason::Failed);
        assert_eq!(thread.failure(), Some("stdin closed"));
    }

    #[test]
    fn test_reason_serialization() {
        let json = serde_json::to_string(&TerminationReason::Exhausted).unwrap();
        assert_eq!(json, "\"exhausted-limit\"");
        let json = serde_json::to_string(&TerminationReason::NoFollowUpsAttempted).unwrap();
        assert_eq!(json, "\"no-follow-ups-attempted\"");
        assert_eq!(TerminationReason::StopSignal.to_string(), "model-signaled-stop");
    }
}
