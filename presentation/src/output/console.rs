//! Console output formatter for interview results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use interview_domain::{GateDecision, InterviewReport, QuestionThread};

/// Formats interview results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn header(title: &str) -> String {
        let line = "-".repeat(13);
        format!("\n{} {} {}\n", line.cyan(), title.bold(), line.cyan())
    }

    fn format_thread(index: usize, thread: &QuestionThread) -> String {
        let n = index + 1;
        let mut output = String::new();
        if thread.is_empty() && thread.failure().is_none() {
            return format!("{}\n", format!("Q{}: No answer provided.", n).dimmed());
        }

        if let Some(feedback) = thread.main_feedback() {
            output.push_str(&format!(
                "{} {}\n\n",
                format!("Q{} Main Answer Feedback:", n).yellow().bold(),
                feedback
            ));
        }
        if let Some(feedback) = thread.follow_up_feedback() {
            output.push_str(&format!(
                "{} {}\n\n",
                format!("Q{} Follow-up Feedback:", n).yellow().bold(),
                feedback
            ));
        }
        if let Some(failure) = thread.failure() {
            output.push_str(&format!(
                "{}\n\n",
                format!("Q{} ended early: {}", n, failure).red()
            ));
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &InterviewReport) -> String {
        let mut output = Self::header("Feedback");
        output.push('\n');

        for (index, thread) in report.threads.iter().enumerate() {
            output.push_str(&Self::format_thread(index, thread));
        }

        let summary = report.summary();
        output.push_str(&format!(
            "{}\n",
            format!(
                "Answered {} of {} questions ({} follow-ups).",
                summary.answered, summary.questions, summary.follow_ups
            )
            .dimmed()
        ));
        output
    }

    fn format_rejection(&self, decision: &GateDecision) -> String {
        format!(
            "{} Match score is too low to proceed (Required: {}%). Please refine your resume.",
            "[ERROR]".red().bold(),
            decision.threshold
        )
    }
}
