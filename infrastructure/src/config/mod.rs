//! Configuration file loading for mock-interview
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `MOCK_INTERVIEW_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./interview.toml` or `./.interview.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/mock-interview/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_KEY_ENV, DEFAULT_GEMINI_MODEL,
    DEFAULT_TRANSCRIPTION_BASE_URL, DEFAULT_TRANSCRIPTION_MODEL, FileAudioConfig, FileConfig,
    FileGeminiConfig, FileInterviewConfig, FileLoggingConfig, FileOutputConfig, FileSpeechConfig,
    FileTranscriptionConfig,
};
pub use loader::ConfigLoader;
