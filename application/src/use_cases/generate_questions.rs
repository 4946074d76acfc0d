//! Question Generator
//!
//! Produces the ordered main questions for a domain. The requested count is
//! a hint to the generation service, not an enforced size: whatever the
//! normalized reply holds, including nothing, is what the session asks.

use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::InterviewProgress;
use interview_domain::{DomainProfile, Phase, PromptTemplate, Question, normalize_question_list};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct GenerateQuestionsUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: LlmGateway + 'static> GenerateQuestionsUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Generate and normalize the main questions. A failed call yields an
    /// empty list.
    pub async fn execute(
        &self,
        domain: &DomainProfile,
        count: usize,
        progress: &dyn InterviewProgress,
    ) -> Vec<Question> {
        let prompt = PromptTemplate::generate_questions(domain.description(), count);

        progress.on_phase_start(&Phase::QuestionGeneration);
        let result = self.gateway.generate(&prompt).await;
        progress.on_phase_complete(&Phase::QuestionGeneration, result.is_ok());

        let questions = match result {
            Ok(reply) => normalize_question_list(&reply),
            Err(e) => {
                warn!(error = %e, "Question generation failed; no questions to ask");
                Vec::new()
            }
        };

        if questions.len() != count {
            debug!(
                requested = count,
                received = questions.len(),
                "Question count differs from request"
            );
        }
        info!(count = questions.len(), "Main questions ready");
        questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::test_support::{PromptKind, ScriptedGateway};

    async fn generate(gateway: Arc<ScriptedGateway>) -> Vec<Question> {
        GenerateQuestionsUseCase::new(gateway)
            .execute(&DomainProfile::from_reply("Backend engineering"), 5, &NoProgress)
            .await
    }

    #[tokio::test]
    async fn test_markers_stripped_and_blanks_dropped() {
        let gateway = Arc::new(ScriptedGateway::new().reply(
            PromptKind::Questions,
            "1. What is ownership?\n\n- Explain borrowing.\n* 3) How do lifetimes work?\n",
        ));
        let questions = generate(gateway).await;
        let texts: Vec<&str> = questions.iter().map(Question::content).collect();
        assert_eq!(
            texts,
            vec![
                "What is ownership?",
                "Explain borrowing.",
                "How do lifetimes work?"
            ]
        );
    }

    #[tokio::test]
    async fn test_count_not_enforced() {
        let gateway = Arc::new(ScriptedGateway::new().reply(PromptKind::Questions, "Only one?"));
        assert_eq!(generate(gateway).await.len(), 1);
    }

    #[tokio::test]
    async fn test_failure_yields_empty_list() {
        let gateway = Arc::new(ScriptedGateway::new().fail(PromptKind::Questions));
        assert!(generate(gateway.clone()).await.is_empty());
        assert_eq!(gateway.calls(PromptKind::Questions), 1);
    }

    #[tokio::test]
    async fn test_prompt_names_domain_and_count() {
        let gateway = Arc::new(ScriptedGateway::new());
        generate(gateway.clone()).await;
        let prompt = &gateway.prompts(PromptKind::Questions)[0];
        assert!(prompt.starts_with("Generate 5 interview questions"));
        assert!(prompt.contains("Backend engineering"));
    }
}
