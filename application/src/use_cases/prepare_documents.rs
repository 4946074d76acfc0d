//! Prepare Documents use case
//!
//! Validates the document inputs and extracts their text. This is the only
//! place an input error can end the session: nothing downstream runs on a
//! missing or wrong file.

use crate::ports::document_reader::{DocumentReader, ExtractionError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Input validation errors
#[derive(Error, Debug)]
pub enum PrepareDocumentsError {
    #[error("File not found: {0}")]
    MissingFile(PathBuf),

    #[error("Please provide a resume file including 'resume' in the file name: {0}")]
    NotAResume(PathBuf),

    #[error("Expected a {expected} file: {path}")]
    WrongFileType { path: PathBuf, expected: &'static str },

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Where the job description comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobDescriptionSource {
    Pdf(PathBuf),
    Text(String),
}

/// Input for the PrepareDocuments use case
#[derive(Debug, Clone)]
pub struct DocumentSources {
    pub resume: PathBuf,
    pub job_description: JobDescriptionSource,
}

/// Extracted document text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedDocuments {
    pub resume_text: String,
    pub job_text: String,
}

/// Strip whitespace and the quotes terminals add around drag-and-dropped paths.
pub fn clean_path_input(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| {
            trimmed
                .strip_prefix('\'')
                .and_then(|s| s.strip_suffix('\''))
        })
        .unwrap_or(trimmed);
    PathBuf::from(unquoted)
}

/// Whether the path has the given extension, ignoring case.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

fn require_pdf(path: &Path) -> Result<(), PrepareDocumentsError> {
    if !path.is_file() {
        return Err(PrepareDocumentsError::MissingFile(path.to_path_buf()));
    }
    if !has_extension(path, "pdf") {
        return Err(PrepareDocumentsError::WrongFileType {
            path: path.to_path_buf(),
            expected: "PDF",
        });
    }
    Ok(())
}

fn require_resume_name(path: &Path) -> Result<(), PrepareDocumentsError> {
    let is_resume = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.to_lowercase().contains("resume"));
    if is_resume {
        Ok(())
    } else {
        Err(PrepareDocumentsError::NotAResume(path.to_path_buf()))
    }
}

/// Use case for validating and reading the two session documents
pub struct PrepareDocumentsUseCase {
    reader: Arc<dyn DocumentReader>,
}

impl PrepareDocumentsUseCase {
    pub fn new(reader: Arc<dyn DocumentReader>) -> Self {
        Self { reader }
    }

    /// Validate both inputs first, then extract. A bad job description path
    /// is reported before any extraction work is done.
    pub async fn execute(
        &self,
        sources: DocumentSources,
    ) -> Result<PreparedDocuments, PrepareDocumentsError> {
        require_pdf(&sources.resume)?;
        require_resume_name(&sources.resume)?;
        if let JobDescriptionSource::Pdf(path) = &sources.job_description {
            require_pdf(path)?;
        }

        let resume_text = self.reader.extract_text(&sources.resume).await?;
        let job_text = match sources.job_description {
            JobDescriptionSource::Pdf(path) => self.reader.extract_text(&path).await?,
            JobDescriptionSource::Text(text) => text,
        };

        if job_text.trim().is_empty() {
            warn!("Job description is empty; the match score will reflect that");
        }
        info!(
            resume_chars = resume_text.len(),
            job_chars = job_text.len(),
            "Documents prepared"
        );

        Ok(PreparedDocuments {
            resume_text,
            job_text,
        })
    }
}
