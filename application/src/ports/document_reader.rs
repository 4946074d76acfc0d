//! Document-to-text extraction port

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while extracting text from a document
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Could not read {path}: {message}")]
    Unreadable { path: PathBuf, message: String },

    #[error("Could not extract text from {path}: {message}")]
    Corrupt { path: PathBuf, message: String },
}

/// Extracts plain text from a document file (resume, job description).
#[async_trait]
pub trait DocumentReader: Send + Sync {
    async fn extract_text(&self, path: &Path) -> Result<String, ExtractionError>;
}
