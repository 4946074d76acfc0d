//! Audio-to-text transcription port

use async_trait::async_trait;
use thiserror::Error;

/// Recorded or uploaded audio, WAV-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    wav: Vec<u8>,
}

impl AudioClip {
    pub fn wav(bytes: Vec<u8>) -> Self {
        Self { wav: bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.wav
    }

    pub fn len(&self) -> usize {
        self.wav.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wav.is_empty()
    }
}

/// What the transcription service made of a clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transcript {
    Text(String),
    /// The service could not make out any speech
    Unintelligible,
    /// The service could not be reached or refused the request
    ServiceUnavailable,
}

/// Errors raised before a request reaches the transcription service
#[derive(Error, Debug)]
pub enum TranscriptionError {
    #[error("Transcription is not configured: {0}")]
    NotConfigured(String),

    #[error("Invalid audio: {0}")]
    InvalidAudio(String),
}

/// Converts recorded audio to text.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, clip: &AudioClip) -> Result<Transcript, TranscriptionError>;
}
