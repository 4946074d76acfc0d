//! Text generation settings from TOML (`[gemini]` section)

use serde::{Deserialize, Serialize};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_KEY_ENV: &str = "GEMINI_API_KEY";

/// Raw `[gemini]` configuration
///
/// # Example
///
/// ```toml
/// [gemini]
/// model = "gemini-2.0-flash"
/// api_key_env = "GEMINI_API_KEY"   # read the key from this variable
/// # api_key = "..."                # or set it directly
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    pub model: String,
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// API key given directly; takes precedence over `api_key_env`
    pub api_key: Option<String>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            api_key_env: DEFAULT_GEMINI_KEY_ENV.to_string(),
            api_key: None,
        }
    }
}

impl FileGeminiConfig {
    /// The API key, from the direct value or the named environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_key(self.api_key.as_deref(), &self.api_key_env)
    }
}

/// Shared key lookup: a non-blank direct value wins, then the environment.
pub(super) fn resolve_key(direct: Option<&str>, env_name: &str) -> Option<String> {
    direct
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .or_else(|| {
            std::env::var(env_name)
                .ok()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
        })
}
