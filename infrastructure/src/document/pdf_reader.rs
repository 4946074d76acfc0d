//! PDF text extraction with `pdf-extract`.

use async_trait::async_trait;
use interview_application::ports::document_reader::{DocumentReader, ExtractionError};
use std::path::Path;
use tracing::debug;

/// Page separator emitted by `pdf-extract`
const FORM_FEED: char = '\x0c';

/// Join extracted pages with single spaces, dropping blank pages.
pub fn join_pages(raw: &str) -> String {
    raw.split(FORM_FEED)
        .map(str::trim)
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reads resumes and job descriptions from PDF files.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfDocumentReader;

impl PdfDocumentReader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentReader for PdfDocumentReader {
    async fn extract_text(&self, path: &Path) -> Result<String, ExtractionError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ExtractionError::Unreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        // Parsing is CPU-bound, and a malformed file can make the parser panic
        let extracted =
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
                .await
                .map_err(|e| ExtractionError::Corrupt {
                    path: path.to_path_buf(),
                    message: format!("parser aborted: {}", e),
                })?
                .map_err(|e| ExtractionError::Corrupt {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;

        let text = join_pages(&extracted);
        debug!(path = %path.display(), chars = text.len(), "Extracted PDF text");
        Ok(text)
    }
}
