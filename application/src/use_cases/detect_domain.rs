//! Detect Domain use case
//!
//! Derives the domain description that seeds question generation.

use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::InterviewProgress;
use interview_domain::{DomainProfile, Phase, PromptTemplate};
use std::sync::Arc;
use tracing::{info, warn};

pub struct DetectDomainUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: LlmGateway + 'static> DetectDomainUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Ask for the candidate's probable domain. Falls back to
    /// [`DomainProfile::FALLBACK`] when the call fails or the reply is blank.
    pub async fn execute(
        &self,
        candidate_text: &str,
        target_text: &str,
        progress: &dyn InterviewProgress,
    ) -> DomainProfile {
        let prompt = PromptTemplate::detect_domain(candidate_text, target_text);

        progress.on_phase_start(&Phase::DomainDetection);
        let result = self.gateway.generate(&prompt).await;
        progress.on_phase_complete(&Phase::DomainDetection, result.is_ok());

        let domain = match result {
            Ok(reply) => DomainProfile::from_reply(&reply),
            Err(e) => {
                warn!(error = %e, "Domain detection failed; using fallback");
                DomainProfile::fallback()
            }
        };
        info!(domain = %domain, fallback = domain.is_fallback(), "Domain detected");
        domain
    }
}
