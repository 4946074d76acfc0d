//! Audio-to-text transcription adapters

mod whisper;

pub use whisper::{DisabledTranscriber, WhisperTranscriber};
