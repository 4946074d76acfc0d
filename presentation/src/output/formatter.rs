//! Output formatter trait

use super::console::ConsoleFormatter;
use super::json::JsonFormatter;
use interview_domain::{GateDecision, InterviewOutcome, InterviewReport, OutputFormat};

/// Trait for formatting the end of a session
pub trait OutputFormatter {
    /// Format a completed session's feedback report
    fn format_report(&self, report: &InterviewReport) -> String;

    /// Format a session the gate refused
    fn format_rejection(&self, decision: &GateDecision) -> String;

    fn format_outcome(&self, outcome: &InterviewOutcome) -> String {
        match outcome {
            InterviewOutcome::Rejected(decision) => self.format_rejection(decision),
            InterviewOutcome::Completed(report) => self.format_report(report),
        }
    }
}

/// Pick the formatter for an output format.
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
