//! CLI command definitions

use clap::Parser;
use interview_domain::OutputFormat;
use std::path::PathBuf;

/// CLI arguments for mock-interview
#[derive(Parser, Debug)]
#[command(name = "mock-interview")]
#[command(author, version, about = "AI mock interview - screen a resume, then practice answering")]
#[command(long_about = r#"
Mock Interview scores your resume against a job description and, if the
match is strong enough, runs a practice interview in your terminal.

The session has three stages:
1. Gate: the resume is scored against the job description (0-100)
2. Interview: generated questions, each followed by adaptive follow-ups
3. Feedback: a critique of every main answer and its follow-ups

Answers can be typed, uploaded as a WAV file, or recorded live.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./interview.toml    Project-level config
3. ~/.config/mock-interview/config.toml   Global config

Example:
  mock-interview
  mock-interview --resume ~/docs/resume.pdf --job ~/docs/job.pdf
  mock-interview --no-speech --output json
"#)]
pub struct Cli {
    /// Resume PDF (prompted for when omitted)
    #[arg(long, value_name = "PATH")]
    pub resume: Option<PathBuf>,

    /// Job description PDF (prompted for when omitted)
    #[arg(long, value_name = "PATH")]
    pub job: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Do not read questions aloud
    #[arg(long)]
    pub no_speech: bool,

    /// Write a JSONL session transcript to this file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["mock-interview"]).unwrap();
        assert!(cli.resume.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.no_speech);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_output_and_verbosity() {
        let cli = Cli::try_parse_from(["mock-interview", "-o", "json", "-vv"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_unknown_output_format_rejected() {
        assert!(Cli::try_parse_from(["mock-interview", "--output", "yaml"]).is_err());
    }

    #[test]
    fn test_document_paths() {
        let cli = Cli::try_parse_from([
            "mock-interview",
            "--resume",
            "my_resume.pdf",
            "--job",
            "job.pdf",
        ])
        .unwrap();
        assert_eq!(cli.resume, Some(PathBuf::from("my_resume.pdf")));
        assert_eq!(cli.job, Some(PathBuf::from("job.pdf")));
    }
}
