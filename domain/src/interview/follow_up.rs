//! Follow-up controller: the per-thread state machine.
//!
//! The controller owns no I/O. Its driver feeds it answers and follow-up
//! replies and asks it what to do next:
//!
//! 1. [`FollowUpController::submit_answer`] after each answer is acquired
//! 2. [`FollowUpController::follow_up_request`] when a decision is needed
//! 3. [`FollowUpController::apply_reply`] with the generation service's reply,
//!    or [`FollowUpController::stop`] when the service could not be reached
//!
//! The follow-up limit is checked before a request is built, so no request is
//! ever issued once the thread holds `max_follow_ups` follow-up turns.

use super::thread::{QuestionThread, TerminationReason};
use super::turn::{Answer, Turn};
use crate::core::error::DomainError;
use crate::core::question::Question;
use crate::core::string::first_line;

/// Literal reply meaning "no further follow-up is warranted".
pub const STOP_TOKEN: &str = "NO_FOLLOWUP";

/// State of a thread's follow-up dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUpState {
    /// Waiting for the answer to `question`; index 0 is the main question
    AwaitingAnswer { turn_index: usize, question: Question },
    /// Last answer admitted; the next step is asking for a follow-up
    AwaitingFollowUpDecision,
    Terminated(TerminationReason),
}

impl FollowUpState {
    fn name(&self) -> String {
        match self {
            FollowUpState::AwaitingAnswer { turn_index, .. } => {
                format!("awaiting-answer({})", turn_index)
            }
            FollowUpState::AwaitingFollowUpDecision => "awaiting-follow-up-decision".to_string(),
            FollowUpState::Terminated(reason) => format!("terminated({})", reason),
        }
    }
}

/// Interpreted follow-up reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUpReply {
    Question(Question),
    Stop,
}

/// Interpret a follow-up reply.
///
/// Only the first line counts. The stop token matches case-insensitively
/// after trimming. A reply with no usable first line is also a stop: there
/// is nothing to ask.
pub fn parse_follow_up_reply(reply: &str) -> FollowUpReply {
    let line = first_line(reply);
    if line.eq_ignore_ascii_case(STOP_TOKEN) {
        return FollowUpReply::Stop;
    }
    match Question::try_new(line) {
        Some(question) => FollowUpReply::Question(question),
        None => FollowUpReply::Stop,
    }
}

/// Everything the generation service needs to propose the next follow-up.
#[derive(Debug, Clone, Copy)]
pub struct FollowUpRequest<'a> {
    pub main_question: &'a Question,
    /// All admitted turns, main turn first
    pub history: &'a [Turn],
    pub last_answer: &'a str,
}

/// Drives one thread from its main question to termination.
#[derive(Debug, Clone)]
pub struct FollowUpController {
    main_question: Question,
    max_follow_ups: usize,
    turns: Vec<Turn>,
    state: FollowUpState,
}

impl FollowUpController {
    pub fn new(main_question: Question, max_follow_ups: usize) -> Self {
        Self {
            state: FollowUpState::AwaitingAnswer {
                turn_index: 0,
                question: main_question.clone(),
            },
            main_question,
            max_follow_ups,
            turns: Vec::new(),
        }
    }

    pub fn main_question(&self) -> &Question {
        &self.main_question
    }

    pub fn state(&self) -> &FollowUpState {
        &self.state
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn follow_up_count(&self) -> usize {
        self.turns.len().saturating_sub(1)
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.state, FollowUpState::Terminated(_))
    }

    pub fn termination_reason(&self) -> Option<TerminationReason> {
        match self.state {
            FollowUpState::Terminated(reason) => Some(reason),
            _ => None,
        }
    }

    /// The question waiting for an answer, if any.
    pub fn pending_question(&self) -> Option<&Question> {
        match &self.state {
            FollowUpState::AwaitingAnswer { question, .. } => Some(question),
            _ => None,
        }
    }

    /// Index of the pending turn (0 = main question).
    pub fn pending_turn_index(&self) -> Option<usize> {
        match &self.state {
            FollowUpState::AwaitingAnswer { turn_index, .. } => Some(*turn_index),
            _ => None,
        }
    }

    /// Feed the answer to the pending question.
    ///
    /// A blank answer ends the thread: `NoFollowUpsAttempted` for the main
    /// question, `EmptyAnswer` for a follow-up. Otherwise the turn is admitted
    /// and the thread either needs a follow-up decision or is exhausted.
    pub fn submit_answer(&mut self, answer: Answer) -> Result<&FollowUpState, DomainError> {
        let FollowUpState::AwaitingAnswer {
            turn_index,
            question,
        } = &self.state
        else {
            return Err(DomainError::NotAwaitingAnswer(self.state.name()));
        };
        let turn_index = *turn_index;

        match Turn::try_new(question.clone(), answer) {
            None => {
                let reason = if turn_index == 0 {
                    TerminationReason::NoFollowUpsAttempted
                } else {
                    TerminationReason::EmptyAnswer
                };
                self.state = FollowUpState::Terminated(reason);
            }
            Some(turn) => {
                self.turns.push(turn);
                self.state = if self.follow_up_count() >= self.max_follow_ups {
                    FollowUpState::Terminated(TerminationReason::Exhausted)
                } else {
                    FollowUpState::AwaitingFollowUpDecision
                };
            }
        }

        Ok(&self.state)
    }

    /// Build the follow-up request for the generation service.
    pub fn follow_up_request(&self) -> Result<FollowUpRequest<'_>, DomainError> {
        if self.state != FollowUpState::AwaitingFollowUpDecision {
            return Err(DomainError::NotAwaitingDecision(self.state.name()));
        }
        // AwaitingFollowUpDecision is only entered after a turn is admitted
        let last_answer = self.turns.last().map(Turn::answer).unwrap_or_default();

        Ok(FollowUpRequest {
            main_question: &self.main_question,
            history: &self.turns,
            last_answer,
        })
    }

    /// Apply the generation service's reply.
    pub fn apply_reply(&mut self, reply: &str) -> Result<&FollowUpState, DomainError> {
        if self.state != FollowUpState::AwaitingFollowUpDecision {
            return Err(DomainError::NotAwaitingDecision(self.state.name()));
        }

        self.state = match parse_follow_up_reply(reply) {
            FollowUpReply::Stop => FollowUpState::Terminated(TerminationReason::StopSignal),
            FollowUpReply::Question(question) => FollowUpState::AwaitingAnswer {
                turn_index: self.turns.len(),
                question,
            },
        };

        Ok(&self.state)
    }

    /// End the thread as if the stop token had been received.
    pub fn stop(&mut self) -> Result<&FollowUpState, DomainError> {
        if self.state != FollowUpState::AwaitingFollowUpDecision {
            return Err(DomainError::NotAwaitingDecision(self.state.name()));
        }
        self.state = FollowUpState::Terminated(TerminationReason::StopSignal);
        Ok(&self.state)
    }

    /// Finish the thread. A controller that never reached a terminal state
    /// is closed as `Failed`.
    pub fn into_thread(self) -> QuestionThread {
        match self.state {
            FollowUpState::Terminated(reason) => {
                QuestionThread::new(self.main_question, self.turns, reason)
            }
            other => QuestionThread::failed(
                self.main_question,
                self.turns,
                format!("thread closed in state {}", other.name()),
            ),
        }
    }

    /// Close the thread after a collaborator failure, keeping admitted turns.
    pub fn abort(self, error: impl Into<String>) -> QuestionThread {
        QuestionThread::failed(self.main_question, self.turns, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> FollowUpController {
        FollowUpController::new(Question::new("Describe a project you led."), 5)
    }

    #[test]
    fn test_initial_state() {
        let c = controller();
        assert_eq!(c.pending_turn_index(), Some(0));
        assert_eq!(
            c.pending_question().unwrap().content(),
            "Describe a project you led."
        );
        assert!(c.follow_up_request().is_err());
    }

    #[test]
    fn test_blank_main_answer() {
        let mut c = controller();
        c.submit_answer(Answer::typed("   ")).unwrap();
        assert_eq!(
            c.termination_reason(),
            Some(TerminationReason::NoFollowUpsAttempted)
        );
        let thread = c.into_thread();
        assert!(thread.is_empty());
    }

    #[test]
    fn test_stop_token_ends_thread() {
        let mut c = controller();
        c.submit_answer(Answer::typed("A payments service")).unwrap();
        assert_eq!(c.state(), &FollowUpState::AwaitingFollowUpDecision);

        c.apply_reply("  no_followup \n").unwrap();
        assert_eq!(c.termination_reason(), Some(TerminationReason::StopSignal));
        assert_eq!(c.turns().len(), 1);
        assert!(c.follow_up_request().is_err());
    }

    #[test]
    fn test_follow_up_reply_uses_first_line_only() {
        let mut c = controller();
        c.submit_answer(Answer::typed("A payments service")).unwrap();
        c.apply_reply("How did you handle retries?\nAlso explain idempotency.")
            .unwrap();
        assert_eq!(c.pending_turn_index(), Some(1));
        assert_eq!(
            c.pending_question().unwrap().content(),
            "How did you handle retries?"
        );
    }

    #[test]
    fn test_request_carries_history() {
        let mut c = controller();
        c.submit_answer(Answer::typed("first")).unwrap();
        c.apply_reply("Follow-up one?").unwrap();
        c.submit_answer(Answer::typed("second")).unwrap();

        let request = c.follow_up_request().unwrap();
        assert_eq!(request.main_question.content(), "Describe a project you led.");
        assert_eq!(request.history.len(), 2);
        assert_eq!(request.history[1].question().content(), "Follow-up one?");
        assert_eq!(request.last_answer, "second");
    }

    #[test]
    fn test_hard_cap_after_five_follow_ups() {
        let mut c = controller();
        c.submit_answer(Answer::typed("main")).unwrap();

        let mut requests = 0;
        while !c.is_terminated() {
            c.follow_up_request().unwrap();
            requests += 1;
            c.apply_reply(&format!("Follow-up {}?", requests)).unwrap();
            c.submit_answer(Answer::typed(format!("answer {}", requests)))
                .unwrap();
        }

        assert_eq!(requests, 5);
        assert_eq!(c.termination_reason(), Some(TerminationReason::Exhausted));
        assert_eq!(c.turns().len(), 6);
        assert!(c.follow_up_request().is_err());
    }

    #[test]
    fn test_zero_follow_up_limit_exhausts_after_main() {
        let mut c = FollowUpController::new(Question::new("Main?"), 0);
        c.submit_answer(Answer::typed("main")).unwrap();
        assert_eq!(c.termination_reason(), Some(TerminationReason::Exhausted));
    }

    #[test]
    fn test_blank_follow_up_answer() {
        let mut c = controller();
        c.submit_answer(Answer::typed("main")).unwrap();
        c.apply_reply("F1?").unwrap();
        c.submit_answer(Answer::typed("one")).unwrap();
        c.apply_reply("F2?").unwrap();
        c.submit_answer(Answer::typed("")).unwrap();

        assert_eq!(c.termination_reason(), Some(TerminationReason::EmptyAnswer));
        // Nothing is admitted after the blank answer
        assert_eq!(c.turns().len(), 2);
        assert!(c.submit_answer(Answer::typed("late")).is_err());

        let thread = c.into_thread();
        assert!(!thread.wants_follow_up_feedback());
    }

    #[test]
    fn test_stop_on_service_failure() {
        let mut c = controller();
        assert!(c.stop().is_err());
        c.submit_answer(Answer::typed("main")).unwrap();
        c.stop().unwrap();
        assert_eq!(c.termination_reason(), Some(TerminationReason::StopSignal));
    }

    #[test]
    fn test_out_of_order_calls_rejected() {
        let mut c = controller();
        let err = c.apply_reply("F1?").unwrap_err();
        assert!(err.is_state_violation());

        c.submit_answer(Answer::typed("main")).unwrap();
        let err = c.submit_answer(Answer::typed("again")).unwrap_err();
        assert!(err.is_state_violation());
    }

    #[test]
    fn test_unfinished_controller_closes_as_failed() {
        let mut c = controller();
        c.submit_answer(Answer::typed("main")).unwrap();
        let thread = c.into_thread();
        assert_eq!(thread.termination(), TerminationReason::Failed);
        assert_eq!(thread.turns().len(), 1);
    }

    #[test]
    fn test_parse_follow_up_reply() {
        assert_eq!(parse_follow_up_reply("NO_FOLLOWUP"), FollowUpReply::Stop);
        assert_eq!(parse_follow_up_reply("No_FollowUp"), FollowUpReply::Stop);
        assert_eq!(parse_follow_up_reply(""), FollowUpReply::Stop);
        assert_eq!(
            parse_follow_up_reply("NO_FOLLOWUP needed? Why not"),
            FollowUpReply::Question(Question::new("NO_FOLLOWUP needed? Why not"))
        );
    }
}
