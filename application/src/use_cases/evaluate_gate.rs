//! Gating Evaluator
//!
//! Scores the candidate document against the target document and applies
//! the admission threshold. Fails closed: a gateway error or an unparseable
//! reply scores 0.

use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::InterviewProgress;
use interview_domain::{GateDecision, MatchScore, Phase, PromptTemplate, parse_match_score};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct GatingEvaluator<G: LlmGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: LlmGateway + 'static> GatingEvaluator<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Compute the match score. Never fails.
    pub async fn score(
        &self,
        candidate_text: &str,
        target_text: &str,
        progress: &dyn InterviewProgress,
    ) -> MatchScore {
        let prompt = PromptTemplate::match_score(candidate_text, target_text);

        progress.on_phase_start(&Phase::Gate);
        let result = self.gateway.generate(&prompt).await;
        progress.on_phase_complete(&Phase::Gate, result.is_ok());

        match result {
            Ok(reply) => {
                debug!(reply = %reply.trim(), "Match score reply");
                parse_match_score(&reply)
            }
            Err(e) => {
                warn!(error = %e, "Match score request failed; scoring 0");
                MatchScore::MIN
            }
        }
    }

    /// Score and compare against the threshold.
    pub async fn evaluate(
        &self,
        candidate_text: &str,
        target_text: &str,
        threshold: u8,
        progress: &dyn InterviewProgress,
    ) -> GateDecision {
        let score = self.score(candidate_text, target_text, progress).await;
        let decision = GateDecision::evaluate(score, threshold);
        info!(
            score = score.value(),
            threshold,
            passed = decision.passed,
            "Gate evaluated"
        );
        decision
    }
}
