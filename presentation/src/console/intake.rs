//! Document intake prompts
//!
//! Collects where the resume and job description come from. Validation of
//! the paths happens in the application layer
//! ([`PrepareDocumentsUseCase`](interview_application::PrepareDocumentsUseCase)).

use super::prompter::LinePrompter;
use interview_application::{DocumentSources, JobDescriptionSource, clean_path_input};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

pub struct DocumentIntake {
    prompter: Arc<LinePrompter>,
}

impl DocumentIntake {
    pub fn new(prompter: Arc<LinePrompter>) -> Self {
        Self { prompter }
    }

    /// Prompt for whatever was not given on the command line.
    pub fn collect(
        &self,
        resume: Option<PathBuf>,
        job: Option<PathBuf>,
    ) -> io::Result<DocumentSources> {
        let resume = match resume {
            Some(path) => path,
            None => self.prompt_resume()?,
        };
        let job_description = match job {
            Some(path) => JobDescriptionSource::Pdf(path),
            None => self.prompt_job_description()?,
        };
        Ok(DocumentSources {
            resume,
            job_description,
        })
    }

    fn prompt_resume(&self) -> io::Result<PathBuf> {
        println!(
            "Please provide your Resume PDF (must include 'resume' in filename). You can drag and drop the file into the terminal or paste the full path."
        );
        let raw = self.prompter.ask_required("Resume PDF path:")?;
        Ok(clean_path_input(&raw))
    }

    fn prompt_job_description(&self) -> io::Result<JobDescriptionSource> {
        let mode = self
            .prompter
            .ask_required("Provide Job Description as (1) PDF or (2) Text? Enter 1 or 2:")?;

        if mode.trim() == "1" {
            println!(
                "Please provide your Job Description PDF. You can drag and drop the file into the terminal or paste the full path."
            );
            let raw = self.prompter.ask_required("Job Description PDF path:")?;
            return Ok(JobDescriptionSource::Pdf(clean_path_input(&raw)));
        }

        println!("Paste the Job Description text below. End input with a blank line:");
        Ok(JobDescriptionSource::Text(self.prompter.ask_block()?))
    }
}
