//! Progress reporting during an interview
//!
//! Both reporters print what the candidate needs to follow the session
//! (score, detected domain, the questions and their headers). They differ
//! only in how waiting on text generation is shown.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use interview_application::InterviewProgress;
use interview_domain::{DomainProfile, GateDecision, Phase, Question};
use std::sync::Mutex;
use std::time::Duration;

fn print_gate(decision: &GateDecision) {
    let score = format!("{}%", decision.score.value());
    let score = if decision.passed {
        score.green().bold()
    } else {
        score.red().bold()
    };
    println!("Resume Match Score: {}", score);
}

fn print_domain(domain: &DomainProfile) {
    println!("Detected Domain Info: {}\n", domain);
}

fn print_questions(questions: &[Question]) {
    if questions.is_empty() {
        println!("{}", "No interview questions could be generated.".yellow());
        return;
    }
    println!("{}", "Generated Interview Questions:".cyan().bold());
    for (idx, question) in questions.iter().enumerate() {
        println!("Q{}: {}", idx + 1, question);
    }
    println!("\n{}\n", "--- Answer the questions below ---".bold());
}

fn print_main_question(index: usize, question: &Question) {
    println!("\n{} {}", format!("Q{}:", index + 1).cyan().bold(), question);
}

fn print_follow_up(number: usize, question: &Question) {
    println!("{} {}", format!("Follow-up Q{}:", number).magenta().bold(), question);
}

fn print_skipped(follow_up: bool) {
    let message = if follow_up {
        "No answer provided for follow-up. Skipping to next main question."
    } else {
        "No answer provided. Skipping to next main question."
    };
    println!("{} {}", "[INFO]".blue(), message);
}

/// Reports progress with a spinner while text generation runs
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl InterviewProgress for ProgressReporter {
    fn on_phase_start(&self, phase: &Phase) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("{}...", phase.display_name()));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_phase_complete(&self, phase: &Phase, success: bool) {
        let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        if success {
            pb.finish_and_clear();
        } else {
            pb.finish_with_message(format!("{} {} failed", "x".red(), phase.display_name()));
        }
    }

    fn on_gate_decision(&self, decision: &GateDecision) {
        print_gate(decision);
    }

    fn on_domain_detected(&self, domain: &DomainProfile) {
        print_domain(domain);
    }

    fn on_questions_ready(&self, questions: &[Question]) {
        print_questions(questions);
    }

    fn on_main_question(&self, index: usize, question: &Question) {
        print_main_question(index, question);
    }

    fn on_follow_up_question(&self, _index: usize, number: usize, question: &Question) {
        print_follow_up(number, question);
    }

    fn on_thread_skipped(&self, _index: usize, follow_up: bool) {
        print_skipped(follow_up);
    }
}

/// Plain output without spinners (`--quiet`, or when output is not a terminal)
pub struct SimpleProgress;

impl InterviewProgress for SimpleProgress {
    fn on_phase_start(&self, _phase: &Phase) {}

    fn on_phase_complete(&self, phase: &Phase, success: bool) {
        if !success {
            println!("  {} {} failed", "x".red(), phase.display_name());
        }
    }

    fn on_gate_decision(&self, decision: &GateDecision) {
        print_gate(decision);
    }

    fn on_domain_detected(&self, domain: &DomainProfile) {
        print_domain(domain);
    }

    fn on_questions_ready(&self, questions: &[Question]) {
        print_questions(questions);
    }

    fn on_main_question(&self, index: usize, question: &Question) {
        print_main_question(index, question);
    }

    fn on_follow_up_question(&self, _index: usize, number: usize, question: &Question) {
        print_follow_up(number, question);
    }

    fn on_thread_skipped(&self, _index: usize, follow_up: bool) {
        print_skipped(follow_up);
    }
}
