//! Answer input port
//!
//! The interactive side of answer acquisition: which source the candidate
//! picks and the raw input for it. The adapter is the console prompt in the
//! presentation layer; [`AnswerCollector`](crate::AnswerCollector) turns what
//! it returns into an [`Answer`](interview_domain::Answer).

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// How the candidate wants to answer the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    Typed,
    UploadedAudio,
    LiveRecording,
}

/// Things worth telling the candidate while collecting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerNotice<'a> {
    /// The audio path is missing or not a WAV file; falling back to typing
    InvalidAudioPath(&'a Path),
    RecordingStarted,
    NoAudioRecorded,
    Transcribed(&'a str),
    TranscriptionFailed(&'a str),
}

#[derive(Error, Debug)]
pub enum AnswerInputError {
    #[error("Input closed")]
    Closed,

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for AnswerInputError {
    fn from(e: std::io::Error) -> Self {
        AnswerInputError::Io(e.to_string())
    }
}

/// Port for reading answers from the candidate.
///
/// End of input on a typed answer is a blank answer, not an error.
#[async_trait]
pub trait AnswerInput: Send + Sync {
    async fn choose_source(&self) -> Result<AnswerSource, AnswerInputError>;

    async fn read_typed_answer(&self) -> Result<String, AnswerInputError>;

    async fn read_audio_path(&self) -> Result<PathBuf, AnswerInputError>;

    /// Block until the candidate signals the recording should start.
    async fn wait_for_recording_start(&self) -> Result<(), AnswerInputError>;

    /// Block until the candidate signals the recording should stop.
    async fn wait_for_recording_stop(&self) -> Result<(), AnswerInputError>;

    fn notify(&self, notice: AnswerNotice<'_>);
}
