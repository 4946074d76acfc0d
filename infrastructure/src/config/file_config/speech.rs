//! Speech synthesis settings from TOML (`[speech]` section)

use serde::{Deserialize, Serialize};

/// Raw `[speech]` configuration
///
/// # Example
///
/// ```toml
/// [speech]
/// enabled = true
/// command = "espeak-ng"   # detected when unset
/// rate = 170              # words per minute
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSpeechConfig {
    pub enabled: bool,
    pub command: Option<String>,
    pub rate: Option<u32>,
}

impl Default for FileSpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: None,
            rate: Some(170),
        }
    }
}
