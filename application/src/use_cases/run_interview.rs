//! Run Interview use case
//!
//! The session orchestrator: gate, domain detection, question generation,
//! one thread per main question, follow-up feedback per thread, report.
//! Strictly sequential; every step depends on the one before it.

use super::collect_answer::AnswerCollector;
use super::conduct_thread::ConductThreadUseCase;
use super::critique::FeedbackAggregator;
use super::detect_domain::DetectDomainUseCase;
use super::evaluate_gate::GatingEvaluator;
use super::generate_questions::GenerateQuestionsUseCase;
use super::prepare_documents::PreparedDocuments;
use crate::config::InterviewConfig;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{InterviewProgress, NoProgress};
use crate::ports::session_logger::{NoSessionLogger, SessionEvent, SessionLogger};
use crate::ports::speech::{SilentSpeaker, SpeechNotifier};
use interview_domain::{DomainError, InterviewOutcome, InterviewSession, Question};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can end a session before it starts
///
/// Collaborator failures never appear here: each step recovers with its own
/// fallback so a session always reaches a report or a gate rejection.
#[derive(Error, Debug)]
pub enum RunInterviewError {
    #[error("Invalid interview configuration: {0}")]
    InvalidConfig(#[from] DomainError),
}

/// Use case for running one interview session
pub struct RunInterviewUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    collector: Arc<AnswerCollector>,
    config: InterviewConfig,
    speech: Arc<dyn SpeechNotifier>,
    logger: Arc<dyn SessionLogger>,
}

impl<G: LlmGateway + 'static> RunInterviewUseCase<G> {
    pub fn new(gateway: Arc<G>, collector: Arc<AnswerCollector>, config: InterviewConfig) -> Self {
        Self {
            gateway,
            collector,
            config,
            speech: Arc::new(SilentSpeaker),
            logger: Arc::new(NoSessionLogger),
        }
    }

    /// Read questions aloud through this notifier
    pub fn with_speech(mut self, speech: Arc<dyn SpeechNotifier>) -> Self {
        self.speech = speech;
        self
    }

    /// Record the session transcript through this logger
    pub fn with_logger(mut self, logger: Arc<dyn SessionLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        documents: PreparedDocuments,
    ) -> Result<InterviewOutcome, RunInterviewError> {
        self.execute_with_progress(documents, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        documents: PreparedDocuments,
        progress: &dyn InterviewProgress,
    ) -> Result<InterviewOutcome, RunInterviewError> {
        self.config.validate()?;
        let policy = &self.config.policy;

        info!(
            model = self.gateway.model_name(),
            threshold = policy.pass_threshold,
            max_follow_ups = policy.max_follow_ups,
            "Starting interview session"
        );
        self.logger.log(SessionEvent::new(
            "session_start",
            json!({
                "model": self.gateway.model_name(),
                "pass_threshold": policy.pass_threshold,
                "max_follow_ups": policy.max_follow_ups,
                "question_count": policy.question_count,
            }),
        ));

        let mut session = InterviewSession::new(documents.resume_text, documents.job_text);

        // Gate
        let decision = GatingEvaluator::new(Arc::clone(&self.gateway))
            .evaluate(
                session.candidate_text(),
                session.target_text(),
                policy.pass_threshold,
                progress,
            )
            .await;
        progress.on_gate_decision(&decision);
        self.logger.log(SessionEvent::new(
            "gate_decision",
            json!({
                "score": decision.score.value(),
                "threshold": decision.threshold,
                "passed": decision.passed,
            }),
        ));
        if !session.record_gate(decision) {
            info!(score = decision.score.value(), "Gate failed; ending session");
            return Ok(session.finish());
        }

        // Domain and questions
        let domain = DetectDomainUseCase::new(Arc::clone(&self.gateway))
            .execute(session.candidate_text(), session.target_text(), progress)
            .await;
        progress.on_domain_detected(&domain);
        self.logger.log(SessionEvent::new(
            "domain",
            json!({ "description": domain.description(), "fallback": domain.is_fallback() }),
        ));

        let questions = GenerateQuestionsUseCase::new(Arc::clone(&self.gateway))
            .execute(&domain, policy.question_count, progress)
            .await;
        progress.on_questions_ready(&questions);
        self.logger.log(SessionEvent::new(
            "questions",
            json!({ "questions": questions.iter().map(Question::content).collect::<Vec<_>>() }),
        ));
        session.record_domain(domain);
        session.record_questions(questions.clone());

        // Threads
        let driver = ConductThreadUseCase::new(
            Arc::clone(&self.gateway),
            Arc::clone(&self.collector),
            Arc::clone(&self.speech),
            Arc::clone(&self.logger),
            policy.max_follow_ups,
            self.config.speak_questions,
        );
        let feedback = FeedbackAggregator::new(Arc::clone(&self.gateway));

        for (index, question) in questions.into_iter().enumerate() {
            let mut thread = driver.execute(index, question, progress).await;
            feedback.attach_follow_up_feedback(&mut thread, progress).await;
            if let Some(text) = thread.follow_up_feedback() {
                self.logger.log(SessionEvent::new(
                    "follow_up_feedback",
                    json!({ "thread": index, "feedback": text }),
                ));
            }
            progress.on_thread_complete(index, &thread);
            session.push_thread(thread);
        }

        let outcome = session.finish();
        if let InterviewOutcome::Completed(report) = &outcome {
            let summary = report.summary();
            info!(
                questions = summary.questions,
                answered = summary.answered,
                follow_ups = summary.follow_ups,
                failed = summary.failed,
                "Interview complete"
            );
            self.logger.log(SessionEvent::new(
                "session_complete",
                json!({
                    "questions": summary.questions,
                    "answered": summary.answered,
                    "follow_ups": summary.follow_ups,
                    "exhausted": summary.exhausted,
                    "failed": summary.failed,
                }),
            ));
        }
        Ok(outcome)
    }
}
