//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use interview_domain::{GateDecision, InterviewReport};
use serde_json::json;

/// Prints the whole report as pretty JSON.
///
/// A rejected session has the same shape with no domain and no threads.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &InterviewReport) -> String {
        let value = json!({
            "gate": report.gate,
            "domain": report.domain,
            "summary": report.summary(),
            "threads": report.threads,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_rejection(&self, decision: &GateDecision) -> String {
        let value = json!({
            "gate": decision,
            "domain": null,
            "threads": [],
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interview_domain::{
        Answer, DomainProfile, MatchScore, Question, QuestionThread, TerminationReason, Turn,
    };
    use serde_json::Value;

    #[test]
    fn test_report_json() {
        let turns = vec![
            Turn::try_new(Question::new("Main?"), Answer::typed("Yes")).unwrap(),
            Turn::try_new(Question::new("Why?"), Answer::transcription_failed("[Transcription failed]"))
                .unwrap(),
        ];
        let mut thread = QuestionThread::new(Question::new("Main?"), turns, TerminationReason::Exhausted);
        thread.set_main_feedback("Solid.");
        let report = InterviewReport::new(
            GateDecision::evaluate(MatchScore::new(75), 60),
            DomainProfile::from_reply("Data engineering"),
            vec![thread],
        );

        let value: Value = serde_json::from_str(&JsonFormatter.format_report(&report)).unwrap();
        assert_eq!(value["gate"]["passed"], Value::Bool(true));
        assert_eq!(value["gate"]["threshold"], 60);
        assert_eq!(value["summary"]["follow_ups"], 1);

        let thread = &value["threads"][0];
        assert_eq!(thread["termination"], "exhausted-limit");
        assert_eq!(thread["main_feedback"], "Solid.");
        assert_eq!(thread["turns"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_rejection_json() {
        let decision = GateDecision::evaluate(MatchScore::new(10), 60);
        let value: Value = serde_json::from_str(&JsonFormatter.format_rejection(&decision)).unwrap();
        assert_eq!(value["gate"]["passed"], Value::Bool(false));
        assert!(value["domain"].is_null());
        assert!(value["threads"].as_array().unwrap().is_empty());
    }
}
