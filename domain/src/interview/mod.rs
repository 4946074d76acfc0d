//! Interview threads and the follow-up state machine.
//!
//! A session asks a fixed set of main questions. Each main question opens a
//! [`QuestionThread`]: the main turn followed by at most
//! `max_follow_ups` adaptive follow-up turns. [`FollowUpController`] decides,
//! turn by turn, whether the thread continues.
//!
//! ```text
//!                 answer (non-blank)              follow-ups < max
//! AwaitingAnswer ───────────────────▶ [admit] ──────────────────▶ AwaitingFollowUpDecision
//!      ▲  │                              │                              │
//!      │  │ answer blank                 │ follow-ups == max            │ reply
//!      │  ▼                              ▼                              ▼
//!      │ Terminated(EmptyAnswer /   Terminated(Exhausted)        stop token? ──▶ Terminated(StopSignal)
//!      │  NoFollowUpsAttempted)                                         │ question
//!      └────────────────────────────────────────────────────────────────┘
//! ```

pub mod follow_up;
pub mod phase;
pub mod report;
pub mod session;
pub mod thread;
pub mod turn;

pub use follow_up::{
    FollowUpController, FollowUpReply, FollowUpRequest, FollowUpState, STOP_TOKEN,
    parse_follow_up_reply,
};
pub use phase::Phase;
pub use report::{InterviewReport, ThreadSummary};
pub use session::{InterviewOutcome, InterviewSession, SessionStage};
pub use thread::{QuestionThread, TerminationReason};
pub use turn::{Answer, AnswerProvenance, Turn};
