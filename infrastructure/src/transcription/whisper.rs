//! Whisper-compatible HTTP transcription.
//!
//! Posts the WAV clip as multipart form data to
//! `{base_url}/v1/audio/transcriptions`. Every service-side failure maps to
//! [`Transcript::ServiceUnavailable`]; only a malformed clip is an error.

use async_trait::async_trait;
use interview_application::ports::transcriber::{
    AudioClip, Transcriber, Transcript, TranscriptionError,
};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    #[serde(default)]
    text: String,
}

/// Transcriber backed by a Whisper `audio/transcriptions` endpoint.
pub struct WhisperTranscriber {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    language: Option<String>,
}

impl WhisperTranscriber {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: None,
            language: None,
        }
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}/v1/audio/transcriptions", self.base_url)
    }

    fn form(&self, clip: &AudioClip) -> Result<Form, TranscriptionError> {
        let file = Part::bytes(clip.bytes().to_vec())
            .file_name("answer.wav")
            .mime_str("audio/wav")
            .map_err(|e| TranscriptionError::InvalidAudio(e.to_string()))?;

        let mut form = Form::new()
            .part("file", file)
            .text("model", self.model.clone());
        if let Some(language) = &self.language {
            form = form.text("language", language.clone());
        }
        Ok(form)
    }
}

/// Interpret the service's text.
fn transcript_from_text(text: String) -> Transcript {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Transcript::Unintelligible
    } else {
        Transcript::Text(trimmed.to_string())
    }
}

#[async_trait]
impl Transcriber for WhisperTranscriber {
    async fn transcribe(&self, clip: &AudioClip) -> Result<Transcript, TranscriptionError> {
        if clip.is_empty() {
            return Err(TranscriptionError::InvalidAudio("empty clip".to_string()));
        }
        let Some(api_key) = &self.api_key else {
            warn!("No transcription API key configured");
            return Ok(Transcript::ServiceUnavailable);
        };

        let response = match self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .multipart(self.form(clip)?)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Transcription request failed");
                return Ok(Transcript::ServiceUnavailable);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %body, "Transcription service error");
            return Ok(Transcript::ServiceUnavailable);
        }

        match response.json::<TranscriptionResponse>().await {
            Ok(body) => {
                debug!(chars = body.text.len(), "Transcription received");
                Ok(transcript_from_text(body.text))
            }
            Err(e) => {
                warn!(error = %e, "Malformed transcription response");
                Ok(Transcript::ServiceUnavailable)
            }
        }
    }
}

/// Transcriber used when transcription is turned off in configuration.
pub struct DisabledTranscriber;

#[async_trait]
impl Transcriber for DisabledTranscriber {
    async fn transcribe(&self, _clip: &AudioClip) -> Result<Transcript, TranscriptionError> {
        Ok(Transcript::ServiceUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip() -> AudioClip {
        AudioClip::wav(b"RIFF\0\0\0\0WAVE".to_vec())
    }

    #[test]
    fn test_transcript_from_text() {
        assert_eq!(
            transcript_from_text("  I would use a queue. ".to_string()),
            Transcript::Text("I would use a queue.".to_string())
        );
        assert_eq!(
            transcript_from_text(" \n".to_string()),
            Transcript::Unintelligible
        );
    }

    #[test]
    fn test_endpoint() {
        let transcriber = WhisperTranscriber::new("https://api.example.test/", "whisper-1");
        assert_eq!(
            transcriber.endpoint(),
            "https://api.example.test/v1/audio/transcriptions"
        );
    }

    #[tokio::test]
    async fn test_missing_key_is_service_unavailable() {
        let transcriber = WhisperTranscriber::new("http://127.0.0.1:9", "whisper-1");
        assert_eq!(
            transcriber.transcribe(&clip()).await.unwrap(),
            Transcript::ServiceUnavailable
        );
    }

    #[tokio::test]
    async fn test_empty_clip_is_invalid() {
        let transcriber = WhisperTranscriber::new("http://127.0.0.1:9", "whisper-1")
            .with_api_key(Some("key".to_string()));
        let result = transcriber.transcribe(&AudioClip::wav(Vec::new())).await;
        assert!(matches!(result, Err(TranscriptionError::InvalidAudio(_))));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_service_unavailable() {
        let transcriber = WhisperTranscriber::new("http://127.0.0.1:9", "whisper-1")
            .with_api_key(Some("key".to_string()))
            .with_language(Some("en".to_string()));
        assert_eq!(
            transcriber.transcribe(&clip()).await.unwrap(),
            Transcript::ServiceUnavailable
        );
    }

    #[tokio::test]
    async fn test_disabled_transcriber() {
        assert_eq!(
            DisabledTranscriber.transcribe(&clip()).await.unwrap(),
            Transcript::ServiceUnavailable
        );
    }
}
