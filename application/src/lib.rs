//! Application layer for mock-interview
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::InterviewConfig;
pub use ports::{
    answer_input::{AnswerInput, AnswerInputError, AnswerNotice, AnswerSource},
    audio_capture::{AudioCapture, CaptureError, CaptureHandle, NoAudioCapture},
    document_reader::{DocumentReader, ExtractionError},
    llm_gateway::{GatewayError, LlmGateway},
    progress::{InterviewProgress, NoProgress},
    session_logger::{NoSessionLogger, SessionEvent, SessionLogger},
    speech::{SilentSpeaker, SpeechNotifier},
    transcriber::{AudioClip, Transcriber, Transcript, TranscriptionError},
};
pub use use_cases::collect_answer::{
    AnswerCollector, SERVICE_ERROR_ANSWER, TRANSCRIPTION_FAILED_ANSWER, UNINTELLIGIBLE_ANSWER,
};
pub use use_cases::prepare_documents::{
    DocumentSources, JobDescriptionSource, PrepareDocumentsError, PrepareDocumentsUseCase,
    PreparedDocuments, clean_path_input, has_extension,
};
pub use use_cases::run_interview::{RunInterviewError, RunInterviewUseCase};
