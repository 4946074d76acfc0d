//! Transcription settings from TOML (`[transcription]` section)

use super::gemini::resolve_key;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TRANSCRIPTION_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-1";
pub const DEFAULT_TRANSCRIPTION_KEY_ENV: &str = "OPENAI_API_KEY";

/// Raw `[transcription]` configuration
///
/// Any service speaking the Whisper `audio/transcriptions` API works here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTranscriptionConfig {
    pub enabled: bool,
    pub base_url: String,
    pub model: String,
    pub api_key_env: String,
    pub api_key: Option<String>,
    /// ISO-639-1 hint, e.g. "en"
    pub language: Option<String>,
}

impl Default for FileTranscriptionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: DEFAULT_TRANSCRIPTION_BASE_URL.to_string(),
            model: DEFAULT_TRANSCRIPTION_MODEL.to_string(),
            api_key_env: DEFAULT_TRANSCRIPTION_KEY_ENV.to_string(),
            api_key: None,
            language: Some("en".to_string()),
        }
    }
}

impl FileTranscriptionConfig {
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_key(self.api_key.as_deref(), &self.api_key_env)
    }
}
