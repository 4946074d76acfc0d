//! Prompt templates for the interview flow

use crate::core::question::Question;
use crate::interview::follow_up::{FollowUpRequest, STOP_TOKEN};
use crate::interview::turn::Turn;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Gate: ask for a bare 0-100 compatibility score
    pub fn match_score(resume: &str, job_description: &str) -> String {
        format!(
            r#"Compare the following resume and job description.

Resume:
{}

Job Description:
{}

Based on skills, experience, and role alignment, provide a matching score between 0 to 100 indicating how well the resume fits the job description. Only return a number."#,
            resume, job_description
        )
    }

    /// Domain detection from both documents
    pub fn detect_domain(resume: &str, job_description: &str) -> String {
        format!(
            r#"Analyze the resume and job description below.
Resume:
{}

Job Description:
{}
What is the candidate's probable domain or area of expertise based on the resume and job description?"#,
            resume, job_description
        )
    }

    /// Main question generation for a domain
    pub fn generate_questions(domain: &str, count: usize) -> String {
        format!(
            r#"Generate {} interview questions for a candidate in the domain: {}.
Do not include any introductory text. Do not include any explanations. Do not include any context.
Put each question on its own line.
Just return the questions that are relevant to the candidate's experience, skills and domain."#,
            count, domain
        )
    }

    /// Detailed critique of a main answer
    pub fn critique_main_answer(answer: &str, question: &Question) -> String {
        format!(
            r#"Analyze the following interview answer to the question: {}
Provide a detailed, constructive analysis and suggestions for improvement.
Do not return JSON or any structured format, just plain text feedback.

Answer: {}"#,
            question, answer
        )
    }

    /// Next follow-up, or the stop token
    pub fn follow_up(request: &FollowUpRequest<'_>) -> String {
        format!(
            r#"You are conducting a technical interview. Given the main question: '{}', and the following conversation so far:
{}
The candidate's last answer was: '{}'.
Ask a relevant follow-up question to probe deeper. If no further follow-up is needed, reply with '{}'.
Do not include any explanations, just the question or '{}'."#,
            request.main_question,
            Self::conversation(request.history),
            request.last_answer,
            STOP_TOKEN,
            STOP_TOKEN
        )
    }

    /// Short consolidated critique over the follow-up turns of a thread
    pub fn critique_follow_ups(follow_ups: &[Turn], main_question: &Question) -> String {
        format!(
            r#"Given the following interview conversation for the main question: '{}', provide a short, concise feedback (2-3 sentences) on the candidate's overall performance for the follow-up questions.
Focus on strengths and areas for improvement. Do not include any explanations or context, just the feedback.

{}"#,
            main_question,
            Self::conversation(follow_ups)
        )
    }

    /// Numbered `Q{i}` / `A{i}` transcript of turns
    fn conversation(turns: &[Turn]) -> String {
        turns
            .iter()
            .enumerate()
            .map(|(i, turn)| {
                let (question, answer) = turn.as_pair();
                format!("Q{n}: {}\nA{n}: {}", question, answer, n = i + 1)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::turn::Answer;

    fn turn(q: &str, a: &str) -> Turn {
        Turn::try_new(Question::new(q), Answer::typed(a)).unwrap()
    }

    #[test]
    fn test_match_score_format() {
        let prompt = PromptTemplate::match_score("Python, 5 years backend", "Senior Python Engineer");
        assert!(prompt.contains("Python, 5 years backend"));
        assert!(prompt.contains("Senior Python Engineer"));
        assert!(prompt.contains("Only return a number"));
    }

    #[test]
    fn test_generate_questions_mentions_count() {
        let prompt = PromptTemplate::generate_questions("Backend engineering", 5);
        assert!(prompt.starts_with("Generate 5 interview questions"));
        assert!(prompt.contains("Backend engineering"));
    }

    #[test]
    fn test_follow_up_includes_numbered_history() {
        let main = Question::new("Tell me about caching.");
        let history = vec![turn("Tell me about caching.", "I used Redis"), turn("Why Redis?", "Speed")];
        let request = FollowUpRequest {
            main_question: &main,
            history: &history,
            last_answer: "Speed",
        };
        let prompt = PromptTemplate::follow_up(&request);
        assert!(prompt.contains("Q1: Tell me about caching.\nA1: I used Redis"));
        assert!(prompt.contains("Q2: Why Redis?\nA2: Speed"));
        assert!(prompt.contains("last answer was: 'Speed'"));
        assert!(prompt.contains("NO_FOLLOWUP"));
    }

    #[test]
    fn test_critique_follow_ups_numbers_from_one() {
        let main = Question::new("Main?");
        let follow_ups = vec![turn("F1?", "x")];
        let prompt = PromptTemplate::critique_follow_ups(&follow_ups, &main);
        assert!(prompt.contains("Q1: F1?\nA1: x"));
        assert!(prompt.contains("2-3 sentences"));
    }

    #[test]
    fn test_critique_main_answer() {
        let prompt = PromptTemplate::critique_main_answer("I wrote tests", &Question::new("How do you ensure quality?"));
        assert!(prompt.contains("How do you ensure quality?"));
        assert!(prompt.contains("Answer: I wrote tests"));
    }
}
