//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod audio;
mod gemini;
mod interview;
mod logging;
mod output;
mod speech;
mod transcription;

pub use audio::FileAudioConfig;
pub use gemini::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_KEY_ENV, DEFAULT_GEMINI_MODEL, FileGeminiConfig,
};
pub use interview::FileInterviewConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use speech::FileSpeechConfig;
pub use transcription::{
    DEFAULT_TRANSCRIPTION_BASE_URL, DEFAULT_TRANSCRIPTION_MODEL, FileTranscriptionConfig,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation issues
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("interview.pass_threshold must be within 0..=100, got {0}")]
    PassThresholdOutOfRange(u8),

    #[error("interview.question_count must be at least 1")]
    NoQuestions,

    #[error("interview.max_follow_ups is 0: no follow-up questions will be asked")]
    FollowUpsDisabled,

    #[error("{0}: model name cannot be empty")]
    EmptyModelName(&'static str),

    #[error("audio.sample_rate cannot be 0")]
    ZeroSampleRate,
}

impl ConfigValidationError {
    /// Warnings are reported but do not stop the program.
    pub fn is_warning(&self) -> bool {
        matches!(self, ConfigValidationError::FollowUpsDisabled)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Text generation service
    pub gemini: FileGeminiConfig,
    /// Gate threshold and thread limits
    pub interview: FileInterviewConfig,
    /// Audio answer transcription
    pub transcription: FileTranscriptionConfig,
    /// Live recording
    pub audio: FileAudioConfig,
    /// Reading questions aloud
    pub speech: FileSpeechConfig,
    /// Session transcript
    pub logging: FileLoggingConfig,
    /// Report rendering
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.interview.pass_threshold > 100 {
            issues.push(ConfigValidationError::PassThresholdOutOfRange(
                self.interview.pass_threshold,
            ));
        }
        if self.interview.question_count == 0 {
            issues.push(ConfigValidationError::NoQuestions);
        }
        if self.interview.max_follow_ups == 0 {
            issues.push(ConfigValidationError::FollowUpsDisabled);
        }
        if self.gemini.model.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModelName("gemini.model"));
        }
        if self.transcription.enabled && self.transcription.model.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModelName("transcription.model"));
        }
        if self.audio.sample_rate == 0 {
            issues.push(ConfigValidationError::ZeroSampleRate);
        }

        issues
    }
}
