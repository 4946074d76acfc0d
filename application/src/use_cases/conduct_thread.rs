//! Conduct Thread use case
//!
//! Drives one [`FollowUpController`] from its main question to a terminal
//! state: asks each pending question, routes the answer through the
//! [`AnswerCollector`], critiques the main answer as soon as it is admitted,
//! and asks the generation service for each follow-up decision.
//!
//! This is the per-thread error boundary. A failure of the answer input
//! closes the thread as `failed` with the turns it already had; it is never
//! returned to the session.

use super::collect_answer::AnswerCollector;
use super::critique::{FeedbackAggregator, unavailable_feedback};
use crate::ports::answer_input::AnswerInputError;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::InterviewProgress;
use crate::ports::session_logger::{SessionEvent, SessionLogger};
use crate::ports::speech::SpeechNotifier;
use interview_domain::{
    DomainError, FollowUpController, FollowUpState, Phase, PromptTemplate, Question,
    QuestionThread,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Why a thread was cut short
#[derive(Error, Debug)]
enum ThreadError {
    #[error("Answer input failed: {0}")]
    Input(#[from] AnswerInputError),

    #[error(transparent)]
    State(#[from] DomainError),
}

pub struct ConductThreadUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    feedback: FeedbackAggregator<G>,
    collector: Arc<AnswerCollector>,
    speech: Arc<dyn SpeechNotifier>,
    logger: Arc<dyn SessionLogger>,
    max_follow_ups: usize,
    speak_questions: bool,
}

impl<G: LlmGateway + 'static> ConductThreadUseCase<G> {
    pub fn new(
        gateway: Arc<G>,
        collector: Arc<AnswerCollector>,
        speech: Arc<dyn SpeechNotifier>,
        logger: Arc<dyn SessionLogger>,
        max_follow_ups: usize,
        speak_questions: bool,
    ) -> Self {
        Self {
            feedback: FeedbackAggregator::new(Arc::clone(&gateway)),
            gateway,
            collector,
            speech,
            logger,
            max_follow_ups,
            speak_questions,
        }
    }

    /// Run the thread for main question `index` (zero-based). Never fails.
    pub async fn execute(
        &self,
        index: usize,
        main_question: Question,
        progress: &dyn InterviewProgress,
    ) -> QuestionThread {
        let mut controller = FollowUpController::new(main_question, self.max_follow_ups);
        let mut main_feedback = None;

        let mut thread = match self
            .drive(index, &mut controller, &mut main_feedback, progress)
            .await
        {
            Ok(()) => controller.into_thread(),
            Err(e) => {
                warn!(thread = index, error = %e, "Thread aborted");
                self.logger.log(SessionEvent::new(
                    "thread_failed",
                    json!({ "thread": index, "error": e.to_string() }),
                ));
                controller.abort(e.to_string())
            }
        };

        if let Some(feedback) = main_feedback {
            thread.set_main_feedback(feedback);
        }

        info!(
            thread = index,
            turns = thread.turns().len(),
            reason = %thread.termination(),
            "Thread finished"
        );
        self.logger.log(SessionEvent::new(
            "thread_complete",
            json!({
                "thread": index,
                "termination": thread.termination().as_str(),
                "turns": thread.turns().len(),
            }),
        ));
        thread
    }

    async fn drive(
        &self,
        index: usize,
        controller: &mut FollowUpController,
        main_feedback: &mut Option<String>,
        progress: &dyn InterviewProgress,
    ) -> Result<(), ThreadError> {
        loop {
            match controller.state().clone() {
                FollowUpState::AwaitingAnswer {
                    turn_index,
                    question,
                } => {
                    self.ask(index, turn_index, &question, progress);

                    let answer = self.collector.collect().await?;
                    if answer.is_blank() {
                        debug!(thread = index, turn = turn_index, "Blank answer; ending thread");
                        progress.on_thread_skipped(index, turn_index > 0);
                        self.logger.log(SessionEvent::new(
                            "empty_answer",
                            json!({ "thread": index, "turn": turn_index }),
                        ));
                    } else {
                        self.logger.log(SessionEvent::new(
                            "turn",
                            json!({
                                "thread": index,
                                "turn": turn_index,
                                "question": question.content(),
                                "answer": answer.text,
                                "provenance": answer.provenance.as_str(),
                            }),
                        ));
                    }

                    let main_answer = (turn_index == 0 && !answer.is_blank())
                        .then(|| answer.text.clone());
                    controller.submit_answer(answer)?;

                    // Main feedback never depends on how the follow-ups go
                    if let Some(text) = main_answer {
                        let feedback = self.critique_main(index, &text, &question, progress).await;
                        *main_feedback = Some(feedback);
                    }
                }
                FollowUpState::AwaitingFollowUpDecision => {
                    self.decide_follow_up(index, controller, progress).await?;
                }
                FollowUpState::Terminated(_) => return Ok(()),
            }
        }
    }

    fn ask(
        &self,
        index: usize,
        turn_index: usize,
        question: &Question,
        progress: &dyn InterviewProgress,
    ) {
        if turn_index == 0 {
            progress.on_main_question(index, question);
        } else {
            progress.on_follow_up_question(index, turn_index, question);
        }
        if self.speak_questions {
            self.speech.announce(question.content());
        }
        self.logger.log(SessionEvent::new(
            "question_asked",
            json!({
                "thread": index,
                "turn": turn_index,
                "question": question.content(),
            }),
        ));
    }

    async fn critique_main(
        &self,
        index: usize,
        answer: &str,
        question: &Question,
        progress: &dyn InterviewProgress,
    ) -> String {
        let feedback = match self
            .feedback
            .critique_main_answer(answer, question, progress)
            .await
        {
            Ok(feedback) => feedback,
            Err(e) => {
                warn!(thread = index, error = %e, "Main answer critique failed");
                unavailable_feedback(&e)
            }
        };
        self.logger.log(SessionEvent::new(
            "main_feedback",
            json!({ "thread": index, "feedback": feedback }),
        ));
        feedback
    }

    /// One follow-up decision. A failed call is treated as the stop signal.
    async fn decide_follow_up(
        &self,
        index: usize,
        controller: &mut FollowUpController,
        progress: &dyn InterviewProgress,
    ) -> Result<(), ThreadError> {
        let prompt = PromptTemplate::follow_up(&controller.follow_up_request()?);

        progress.on_phase_start(&Phase::FollowUpDecision);
        let result = self.gateway.generate(&prompt).await;
        progress.on_phase_complete(&Phase::FollowUpDecision, result.is_ok());

        let state = match result {
            Ok(reply) => controller.apply_reply(&reply)?,
            Err(e) => {
                warn!(thread = index, error = %e, "Follow-up request failed; stopping thread");
                controller.stop()?
            }
        };

        let decision = match state {
            FollowUpState::AwaitingAnswer { question, .. } => {
                json!({ "thread": index, "decision": "follow-up", "question": question.content() })
            }
            _ => json!({ "thread": index, "decision": "stop" }),
        };
        self.logger.log(SessionEvent::new("follow_up_decision", decision));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::audio_capture::NoAudioCapture;
    use crate::ports::progress::NoProgress;
    use crate::ports::session_logger::NoSessionLogger;
    use crate::ports::speech::SilentSpeaker;
    use crate::use_cases::test_support::{
        FakeTranscriber, PromptKind, RecordingLogger, RecordingSpeaker, ScriptedGateway,
        ScriptedInput,
    };
    use interview_domain::TerminationReason;

    struct Harness {
        gateway: Arc<ScriptedGateway>,
        logger: Arc<RecordingLogger>,
        speaker: Arc<RecordingSpeaker>,
    }

    impl Harness {
        fn new(gateway: ScriptedGateway) -> Self {
            Self {
                gateway: Arc::new(gateway),
                logger: Arc::new(RecordingLogger::default()),
                speaker: Arc::new(RecordingSpeaker::default()),
            }
        }

        async fn run(&self, input: ScriptedInput) -> QuestionThread {
            let collector = Arc::new(AnswerCollector::new(
                Arc::new(input),
                Arc::new(FakeTranscriber::failing()),
                Arc::new(NoAudioCapture),
            ));
            ConductThreadUseCase::new(
                self.gateway.clone(),
                collector,
                self.speaker.clone(),
                self.logger.clone(),
                5,
                true,
            )
            .execute(0, Question::new("Tell me about a hard bug."), &NoProgress)
            .await
        }
    }

    #[tokio::test]
    async fn test_stop_token_ends_thread_after_main_turn() {
        let harness = Harness::new(ScriptedGateway::new().reply(PromptKind::FollowUp, "no_followup"));
        let thread = harness.run(ScriptedInput::typed(["A race condition."])).await;

        assert_eq!(thread.termination(), TerminationReason::StopSignal);
        assert_eq!(thread.turns().len(), 1);
        assert_eq!(thread.main_feedback(), Some("Detailed feedback"));
        assert_eq!(thread.follow_up_feedback(), None);
        assert_eq!(harness.gateway.calls(PromptKind::FollowUp), 1);
    }

    #[tokio::test]
    async fn test_hard_cap_without_sixth_request() {
        let gateway = (1..=10).fold(ScriptedGateway::new(), |g, i| {
            g.reply(PromptKind::FollowUp, &format!("Follow-up {}?", i))
        });
        let harness = Harness::new(gateway);
        let thread = harness
            .run(ScriptedInput::typed(["main", "f1", "f2", "f3", "f4", "f5", "f6"]))
            .await;

        assert_eq!(thread.termination(), TerminationReason::Exhausted);
        assert_eq!(thread.turns().len(), 6);
        assert_eq!(thread.follow_up_count(), 5);
        assert_eq!(harness.gateway.calls(PromptKind::FollowUp), 5);
    }

    #[tokio::test]
    async fn test_follow_up_prompt_carries_history() {
        let harness = Harness::new(
            ScriptedGateway::new()
                .reply(PromptKind::FollowUp, "Which tool found it?\nExtra commentary")
                .reply(PromptKind::FollowUp, "NO_FOLLOWUP"),
        );
        let thread = harness
            .run(ScriptedInput::typed(["A race condition.", "A debugger."]))
            .await;

        assert_eq!(thread.turns()[1].question().content(), "Which tool found it?");
        let prompts = harness.gateway.prompts(PromptKind::FollowUp);
        assert!(prompts[1].contains("Q1: Tell me about a hard bug.\nA1: A race condition."));
        assert!(prompts[1].contains("Q2: Which tool found it?\nA2: A debugger."));
        assert!(prompts[1].contains("The candidate's last answer was: 'A debugger.'"));
    }

    #[tokio::test]
    async fn test_blank_main_answer() {
        let harness = Harness::new(ScriptedGateway::new());
        let thread = harness.run(ScriptedInput::typed(["   "])).await;

        assert_eq!(thread.termination(), TerminationReason::NoFollowUpsAttempted);
        assert!(thread.is_empty());
        assert_eq!(thread.main_feedback(), None);
        assert_eq!(harness.gateway.calls(PromptKind::MainCritique), 0);
        assert_eq!(harness.gateway.calls(PromptKind::FollowUp), 0);
    }

    #[tokio::test]
    async fn test_blank_follow_up_keeps_main_feedback() {
        let harness = Harness::new(
            ScriptedGateway::new()
                .reply(PromptKind::FollowUp, "Why?")
                .reply(PromptKind::FollowUp, "And then?"),
        );
        let thread = harness.run(ScriptedInput::typed(["main", "because", ""])).await;

        assert_eq!(thread.termination(), TerminationReason::EmptyAnswer);
        assert_eq!(thread.turns().len(), 2);
        assert_eq!(thread.main_feedback(), Some("Detailed feedback"));
        assert!(!thread.wants_follow_up_feedback());
    }

    #[tokio::test]
    async fn test_follow_up_failure_is_stop() {
        let harness = Harness::new(ScriptedGateway::new().fail(PromptKind::FollowUp));
        let thread = harness.run(ScriptedInput::typed(["main"])).await;

        assert_eq!(thread.termination(), TerminationReason::StopSignal);
        assert_eq!(thread.turns().len(), 1);
    }

    #[tokio::test]
    async fn test_main_critique_failure_uses_placeholder() {
        let harness = Harness::new(ScriptedGateway::new().fail(PromptKind::MainCritique));
        let thread = harness.run(ScriptedInput::typed(["main"])).await;

        assert!(
            thread
                .main_feedback()
                .unwrap()
                .starts_with("[Feedback unavailable:")
        );
    }

    #[tokio::test]
    async fn test_closed_input_fails_thread_keeping_turns() {
        let harness = Harness::new(ScriptedGateway::new().reply(PromptKind::FollowUp, "More?"));
        // One typed answer, then the input runs out of sources
        let thread = harness.run(ScriptedInput::typed(["main"])).await;

        assert_eq!(thread.termination(), TerminationReason::Failed);
        assert_eq!(thread.turns().len(), 1);
        assert!(thread.failure().unwrap().contains("Input closed"));
        assert_eq!(thread.main_feedback(), Some("Detailed feedback"));
        assert!(harness.logger.event_types().contains(&"thread_failed"));
    }

    #[tokio::test]
    async fn test_questions_spoken_and_logged() {
        let harness = Harness::new(ScriptedGateway::new().reply(PromptKind::FollowUp, "Why?"));
        harness.run(ScriptedInput::typed(["main", "because"])).await;

        assert_eq!(
            harness.speaker.spoken(),
            vec!["Tell me about a hard bug.".to_string(), "Why?".to_string()]
        );
        let events = harness.logger.event_types();
        assert_eq!(events.first(), Some(&"question_asked"));
        assert_eq!(events.last(), Some(&"thread_complete"));
        assert!(events.contains(&"main_feedback"));
        assert!(events.contains(&"follow_up_decision"));
    }

    #[tokio::test]
    async fn test_speech_disabled() {
        let gateway = Arc::new(ScriptedGateway::new());
        let speaker = Arc::new(RecordingSpeaker::default());
        let collector = Arc::new(AnswerCollector::new(
            Arc::new(ScriptedInput::typed(["main"])),
            Arc::new(FakeTranscriber::failing()),
            Arc::new(NoAudioCapture),
        ));
        ConductThreadUseCase::new(
            gateway,
            collector,
            speaker.clone(),
            Arc::new(NoSessionLogger),
            5,
            false,
        )
        .execute(0, Question::new("Main?"), &NoProgress)
        .await;

        assert!(speaker.spoken().is_empty());
    }

    #[tokio::test]
    async fn test_silent_speaker_is_accepted() {
        let collector = Arc::new(AnswerCollector::new(
            Arc::new(ScriptedInput::typed(["main"])),
            Arc::new(FakeTranscriber::failing()),
            Arc::new(NoAudioCapture),
        ));
        let thread = ConductThreadUseCase::new(
            Arc::new(ScriptedGateway::new()),
            collector,
            Arc::new(SilentSpeaker),
            Arc::new(NoSessionLogger),
            5,
            true,
        )
        .execute(0, Question::new("Main?"), &NoProgress)
        .await;
        assert_eq!(thread.turns().len(), 1);
    }
}
