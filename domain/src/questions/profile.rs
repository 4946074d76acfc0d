//! Detected candidate domain.

use serde::{Deserialize, Serialize};

/// Description of the candidate's probable domain, derived from both documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainProfile {
    description: String,
}

impl DomainProfile {
    /// Description used when detection fails or comes back blank.
    pub const FALLBACK: &'static str = "general professional experience";

    /// Build from a detection reply; blank replies fall back to [`Self::FALLBACK`].
    pub fn from_reply(reply: &str) -> Self {
        let trimmed = reply.trim();
        if trimmed.is_empty() {
            Self::fallback()
        } else {
            Self {
                description: trimmed.to_string(),
            }
        }
    }

    pub fn fallback() -> Self {
        Self {
            description: Self::FALLBACK.to_string(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_fallback(&self) -> bool {
        self.description == Self::FALLBACK
    }
}

impl std::fmt::Display for DomainProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}
