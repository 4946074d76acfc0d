//! Session phases, for progress reporting.

use serde::{Deserialize, Serialize};

/// A step of the session that waits on the text-generation service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Scoring the resume against the job description
    Gate,
    /// Deriving the candidate's domain
    DomainDetection,
    /// Generating the main questions
    QuestionGeneration,
    /// Critiquing a main answer
    MainFeedback,
    /// Asking for the next follow-up
    FollowUpDecision,
    /// Critiquing the follow-up turns of a thread
    FollowUpFeedback,
}

impl Phase {
    pub fn as_str(&self) -> &str {
        match self {
            Phase::Gate => "gate",
            Phase::DomainDetection => "domain_detection",
            Phase::QuestionGeneration => "question_generation",
            Phase::MainFeedback => "main_feedback",
            Phase::FollowUpDecision => "follow_up_decision",
            Phase::FollowUpFeedback => "follow_up_feedback",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Phase::Gate => "Calculating resume match score",
            Phase::DomainDetection => "Detecting domain info",
            Phase::QuestionGeneration => "Generating interview questions",
            Phase::MainFeedback => "Analyzing your answer",
            Phase::FollowUpDecision => "Thinking of a follow-up",
            Phase::FollowUpFeedback => "Summarizing follow-up answers",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
