//! Text Source Adapter
//!
//! Turns whatever the candidate chose (typing, an uploaded WAV file, a live
//! recording) into a single [`Answer`]. Audio problems never surface as
//! errors: they become sentinel answer texts with `transcription-failed`
//! provenance, which are non-blank and therefore admitted as turns.
//!
//! Only the input port itself failing (closed stdin, I/O error) is returned
//! as an error; the thread driver decides what that means for the thread.

use super::prepare_documents::has_extension;
use crate::ports::answer_input::{AnswerInput, AnswerInputError, AnswerNotice, AnswerSource};
use crate::ports::audio_capture::AudioCapture;
use crate::ports::transcriber::{AudioClip, Transcriber, Transcript};
use interview_domain::{Answer, AnswerProvenance};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Answer text when the service could not make out any speech.
pub const UNINTELLIGIBLE_ANSWER: &str = "Could not understand audio.";

/// Answer text when the transcription service could not be reached.
pub const SERVICE_ERROR_ANSWER: &str = "Speech recognition service error.";

/// Answer text for any other capture or transcription failure.
pub const TRANSCRIPTION_FAILED_ANSWER: &str = "[Transcription failed]";

pub struct AnswerCollector {
    input: Arc<dyn AnswerInput>,
    transcriber: Arc<dyn Transcriber>,
    capture: Arc<dyn AudioCapture>,
}

impl AnswerCollector {
    pub fn new(
        input: Arc<dyn AnswerInput>,
        transcriber: Arc<dyn Transcriber>,
        capture: Arc<dyn AudioCapture>,
    ) -> Self {
        Self {
            input,
            transcriber,
            capture,
        }
    }

    /// Ask for the answer source and acquire the answer.
    pub async fn collect(&self) -> Result<Answer, AnswerInputError> {
        let answer = match self.input.choose_source().await? {
            AnswerSource::Typed => self.typed().await?,
            AnswerSource::UploadedAudio => self.uploaded().await?,
            AnswerSource::LiveRecording => self.live().await?,
        };
        debug!(
            provenance = %answer.provenance,
            chars = answer.text.len(),
            "Answer collected"
        );
        Ok(answer)
    }

    async fn typed(&self) -> Result<Answer, AnswerInputError> {
        Ok(Answer::typed(self.input.read_typed_answer().await?))
    }

    async fn uploaded(&self) -> Result<Answer, AnswerInputError> {
        let path = self.input.read_audio_path().await?;
        if !path.is_file() || !has_extension(&path, "wav") {
            info!(path = %path.display(), "Invalid audio upload; falling back to typed answer");
            self.input.notify(AnswerNotice::InvalidAudioPath(&path));
            return self.typed().await;
        }

        match read_clip(&path).await {
            Ok(clip) => Ok(self
                .transcribe(&clip, AnswerProvenance::TranscribedUpload)
                .await),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not read audio upload");
                Ok(self.failed(TRANSCRIPTION_FAILED_ANSWER))
            }
        }
    }

    async fn live(&self) -> Result<Answer, AnswerInputError> {
        self.input.wait_for_recording_start().await?;

        let handle = match self.capture.start() {
            Ok(handle) => handle,
            Err(e) => {
                warn!(error = %e, "Could not start recording");
                return Ok(self.failed(TRANSCRIPTION_FAILED_ANSWER));
            }
        };
        self.input.notify(AnswerNotice::RecordingStarted);

        // An error here drops `handle`, which releases the device.
        self.input.wait_for_recording_stop().await?;

        match handle.stop() {
            Ok(Some(clip)) if !clip.is_empty() => Ok(self
                .transcribe(&clip, AnswerProvenance::TranscribedLive)
                .await),
            Ok(_) => {
                self.input.notify(AnswerNotice::NoAudioRecorded);
                Ok(self.failed(TRANSCRIPTION_FAILED_ANSWER))
            }
            Err(e) => {
                warn!(error = %e, "Recording failed");
                Ok(self.failed(TRANSCRIPTION_FAILED_ANSWER))
            }
        }
    }

    async fn transcribe(&self, clip: &AudioClip, provenance: AnswerProvenance) -> Answer {
        match self.transcriber.transcribe(clip).await {
            Ok(Transcript::Text(text)) if !text.trim().is_empty() => {
                self.input.notify(AnswerNotice::Transcribed(&text));
                Answer::new(text, provenance)
            }
            Ok(Transcript::Text(_)) | Ok(Transcript::Unintelligible) => {
                self.failed(UNINTELLIGIBLE_ANSWER)
            }
            Ok(Transcript::ServiceUnavailable) => self.failed(SERVICE_ERROR_ANSWER),
            Err(e) => {
                warn!(error = %e, "Transcription failed");
                self.failed(TRANSCRIPTION_FAILED_ANSWER)
            }
        }
    }

    fn failed(&self, sentinel: &str) -> Answer {
        self.input.notify(AnswerNotice::TranscriptionFailed(sentinel));
        Answer::transcription_failed(sentinel)
    }
}

async fn read_clip(path: &Path) -> std::io::Result<AudioClip> {
    tokio::fs::read(path).await.map(AudioClip::wav)
}
