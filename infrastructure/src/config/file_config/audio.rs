//! Microphone settings from TOML (`[audio]` section)

use serde::{Deserialize, Serialize};

/// Raw `[audio]` configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAudioConfig {
    /// Sample rate of the recorded WAV (always mono)
    pub sample_rate: u32,
    /// Input device name (substring match); default device when unset
    pub device: Option<String>,
}

impl Default for FileAudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: 16_000,
            device: None,
        }
    }
}
