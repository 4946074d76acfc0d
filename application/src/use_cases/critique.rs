//! Feedback Aggregator
//!
//! Two independent critiques per thread: a detailed one for the main answer
//! and a short consolidated one over the follow-up turns. Both are plain
//! functions of text that has already been collected.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::InterviewProgress;
use interview_domain::{Phase, PromptTemplate, Question, QuestionThread};
use std::sync::Arc;
use tracing::{debug, warn};

/// Feedback text recorded when a critique call fails.
pub fn unavailable_feedback(error: &impl std::fmt::Display) -> String {
    format!("[Feedback unavailable: {}]", error)
}

pub struct FeedbackAggregator<G: LlmGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: LlmGateway + 'static> FeedbackAggregator<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Detailed critique of one main answer.
    pub async fn critique_main_answer(
        &self,
        answer: &str,
        question: &Question,
        progress: &dyn InterviewProgress,
    ) -> Result<String, GatewayError> {
        let prompt = PromptTemplate::critique_main_answer(answer, question);

        progress.on_phase_start(&Phase::MainFeedback);
        let result = self.gateway.generate(&prompt).await;
        progress.on_phase_complete(&Phase::MainFeedback, result.is_ok());

        result.map(|feedback| feedback.trim().to_string())
    }

    /// Short critique over a thread's follow-up turns.
    ///
    /// `Ok(None)` without calling the service when the thread has no
    /// follow-up turns or ended on an empty answer.
    pub async fn critique_follow_ups(
        &self,
        thread: &QuestionThread,
        progress: &dyn InterviewProgress,
    ) -> Result<Option<String>, GatewayError> {
        if !thread.wants_follow_up_feedback() {
            debug!(
                follow_ups = thread.follow_up_count(),
                reason = %thread.termination(),
                "Follow-up feedback not applicable"
            );
            return Ok(None);
        }

        let prompt =
            PromptTemplate::critique_follow_ups(thread.follow_up_turns(), thread.main_question());

        progress.on_phase_start(&Phase::FollowUpFeedback);
        let result = self.gateway.generate(&prompt).await;
        progress.on_phase_complete(&Phase::FollowUpFeedback, result.is_ok());

        result.map(|feedback| Some(feedback.trim().to_string()))
    }

    /// Attach follow-up feedback to a thread, substituting a placeholder on failure.
    pub async fn attach_follow_up_feedback(
        &self,
        thread: &mut QuestionThread,
        progress: &dyn InterviewProgress,
    ) {
        match self.critique_follow_ups(thread, progress).await {
            Ok(Some(feedback)) => {
                thread.set_follow_up_feedback(feedback);
            }
            Ok(None) => {}
            Err(e) => {
                warn!(
                    question = %thread.main_question(),
                    error = %e,
                    "Follow-up critique failed"
                );
                thread.set_follow_up_feedback(unavailable_feedback(&e));
            }
        }
    }
}
