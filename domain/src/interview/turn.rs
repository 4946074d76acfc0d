//! Answers and turns.

use crate::core::question::Question;
use crate::core::string::is_blank;
use serde::{Deserialize, Serialize};

/// Where an answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerProvenance {
    /// Typed at the prompt
    Typed,
    /// Transcribed from an uploaded audio file
    TranscribedUpload,
    /// Transcribed from a live microphone recording
    TranscribedLive,
    /// Audio was given but transcription did not produce the candidate's words
    TranscriptionFailed,
}

impl AnswerProvenance {
    pub fn as_str(&self) -> &str {
        match self {
            AnswerProvenance::Typed => "typed",
            AnswerProvenance::TranscribedUpload => "transcribed-upload",
            AnswerProvenance::TranscribedLive => "transcribed-live",
            AnswerProvenance::TranscriptionFailed => "transcription-failed",
        }
    }

    pub fn is_audio(&self) -> bool {
        !matches!(self, AnswerProvenance::Typed)
    }
}

impl std::fmt::Display for AnswerProvenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An answer as acquired, before it is admitted into a thread.
///
/// May be blank: a blank answer is how the candidate ends a thread early.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    pub provenance: AnswerProvenance,
}

impl Answer {
    pub fn new(text: impl Into<String>, provenance: AnswerProvenance) -> Self {
        Self {
            text: text.into(),
            provenance,
        }
    }

    pub fn typed(text: impl Into<String>) -> Self {
        Self::new(text, AnswerProvenance::Typed)
    }

    pub fn transcription_failed(text: impl Into<String>) -> Self {
        Self::new(text, AnswerProvenance::TranscriptionFailed)
    }

    pub fn is_blank(&self) -> bool {
        is_blank(&self.text)
    }
}

/// One admitted (question, answer) exchange. The answer is never blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    question: Question,
    answer: String,
    provenance: AnswerProvenance,
}

impl Turn {
    /// Admit an answer to a question. Blank answers produce no turn.
    pub fn try_new(question: Question, answer: Answer) -> Option<Self> {
        if answer.is_blank() {
            return None;
        }
        Some(Self {
            question,
            answer: answer.text,
            provenance: answer.provenance,
        })
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn provenance(&self) -> AnswerProvenance {
        self.provenance
    }

    /// `(question, answer)` pair, as used in prompts.
    pub fn as_pair(&self) -> (&str, &str) {
        (self.question.content(), &self.answer)
    }
}
