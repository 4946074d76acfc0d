//! Scripted port implementations shared by use case tests.

use crate::ports::answer_input::{AnswerInput, AnswerInputError, AnswerNotice, AnswerSource};
use crate::ports::audio_capture::{AudioCapture, CaptureError, CaptureHandle};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::session_logger::{SessionEvent, SessionLogger};
use crate::ports::speech::SpeechNotifier;
use crate::ports::transcriber::{AudioClip, Transcriber, Transcript, TranscriptionError};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ==================== Gateway ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum PromptKind {
    Score,
    Domain,
    Questions,
    MainCritique,
    FollowUp,
    FollowUpCritique,
}

impl PromptKind {
    fn classify(prompt: &str) -> Self {
        if prompt.starts_with("Compare the following resume") {
            PromptKind::Score
        } else if prompt.starts_with("Analyze the resume") {
            PromptKind::Domain
        } else if prompt.starts_with("Generate ") {
            PromptKind::Questions
        } else if prompt.starts_with("Analyze the following interview answer") {
            PromptKind::MainCritique
        } else if prompt.starts_with("You are conducting") {
            PromptKind::FollowUp
        } else {
            PromptKind::FollowUpCritique
        }
    }

    fn default_reply(&self) -> &'static str {
        match self {
            PromptKind::Score => "85",
            PromptKind::Domain => "Backend engineering",
            PromptKind::Questions => "1. First question?\n2. Second question?",
            PromptKind::MainCritique => "Detailed feedback",
            PromptKind::FollowUp => "NO_FOLLOWUP",
            PromptKind::FollowUpCritique => "Short feedback",
        }
    }
}

/// Gateway that answers by prompt kind: queued replies first, then a default.
#[derive(Default)]
pub(crate) struct ScriptedGateway {
    queued: Mutex<HashMap<PromptKind, VecDeque<Result<String, GatewayError>>>>,
    calls: Mutex<Vec<(PromptKind, String)>>,
}

impl ScriptedGateway {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(self, kind: PromptKind, text: &str) -> Self {
        self.queued
            .lock()
            .unwrap()
            .entry(kind)
            .or_default()
            .push_back(Ok(text.to_string()));
        self
    }

    pub(crate) fn fail(self, kind: PromptKind) -> Self {
        self.queued
            .lock()
            .unwrap()
            .entry(kind)
            .or_default()
            .push_back(Err(GatewayError::QuotaExceeded("scripted".to_string())));
        self
    }

    pub(crate) fn calls(&self, kind: PromptKind) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| *k == kind)
            .count()
    }

    pub(crate) fn prompts(&self, kind: PromptKind) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, p)| p.clone())
            .collect()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    fn model_name(&self) -> &str {
        "scripted-model"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let kind = PromptKind::classify(prompt);
        self.calls.lock().unwrap().push((kind, prompt.to_string()));

        let queued = self
            .queued
            .lock()
            .unwrap()
            .get_mut(&kind)
            .and_then(VecDeque::pop_front);
        queued.unwrap_or_else(|| Ok(kind.default_reply().to_string()))
    }
}

// ==================== Answer input ====================

/// Input that replays a fixed script of sources, typed lines and paths.
///
/// Running out of sources is reported as closed input; running out of typed
/// lines behaves like end of input (a blank answer).
#[derive(Default)]
pub(crate) struct ScriptedInput {
    sources: Mutex<VecDeque<AnswerSource>>,
    typed: Mutex<VecDeque<String>>,
    paths: Mutex<VecDeque<PathBuf>>,
    pub(crate) notices: Mutex<Vec<String>>,
    fail_on_stop: bool,
}

impl ScriptedInput {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Every answer typed, in order.
    pub(crate) fn typed<'a>(answers: impl IntoIterator<Item = &'a str>) -> Self {
        let input = Self::new();
        for answer in answers {
            input.sources.lock().unwrap().push_back(AnswerSource::Typed);
            input.typed.lock().unwrap().push_back(answer.to_string());
        }
        input
    }

    pub(crate) fn source(self, source: AnswerSource) -> Self {
        self.sources.lock().unwrap().push_back(source);
        self
    }

    pub(crate) fn line(self, text: &str) -> Self {
        self.typed.lock().unwrap().push_back(text.to_string());
        self
    }

    pub(crate) fn path(self, path: impl Into<PathBuf>) -> Self {
        self.paths.lock().unwrap().push_back(path.into());
        self
    }

    pub(crate) fn failing_on_stop(mut self) -> Self {
        self.fail_on_stop = true;
        self
    }

    pub(crate) fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnswerInput for ScriptedInput {
    async fn choose_source(&self) -> Result<AnswerSource, AnswerInputError> {
        self.sources
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(AnswerInputError::Closed)
    }

    async fn read_typed_answer(&self) -> Result<String, AnswerInputError> {
        Ok(self.typed.lock().unwrap().pop_front().unwrap_or_default())
    }

    async fn read_audio_path(&self) -> Result<PathBuf, AnswerInputError> {
        self.paths
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(AnswerInputError::Closed)
    }

    async fn wait_for_recording_start(&self) -> Result<(), AnswerInputError> {
        Ok(())
    }

    async fn wait_for_recording_stop(&self) -> Result<(), AnswerInputError> {
        if self.fail_on_stop {
            Err(AnswerInputError::Io("interrupted".to_string()))
        } else {
            Ok(())
        }
    }

    fn notify(&self, notice: AnswerNotice<'_>) {
        self.notices.lock().unwrap().push(format!("{:?}", notice));
    }
}

// ==================== Audio ====================

pub(crate) struct FakeTranscriber {
    result: Mutex<Option<Result<Transcript, TranscriptionError>>>,
    pub(crate) calls: AtomicUsize,
}

impl FakeTranscriber {
    pub(crate) fn returning(transcript: Transcript) -> Self {
        Self {
            result: Mutex::new(Some(Ok(transcript))),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            result: Mutex::new(Some(Err(TranscriptionError::NotConfigured(
                "no api key".to_string(),
            )))),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transcriber for FakeTranscriber {
    async fn transcribe(&self, _clip: &AudioClip) -> Result<Transcript, TranscriptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Ok(Transcript::ServiceUnavailable))
    }
}

/// Capture that records whether its device was released.
pub(crate) struct FakeCapture {
    clip: Option<AudioClip>,
    pub(crate) released: Arc<AtomicBool>,
}

impl FakeCapture {
    pub(crate) fn with_clip(clip: Option<AudioClip>) -> Self {
        Self {
            clip,
            released: Arc::new(AtomicBool::new(false)),
        }
    }

    pub(crate) fn was_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }
}

struct FakeHandle {
    clip: Option<AudioClip>,
    released: Arc<AtomicBool>,
}

impl AudioCapture for FakeCapture {
    fn start(&self) -> Result<Box<dyn CaptureHandle>, CaptureError> {
        Ok(Box::new(FakeHandle {
            clip: self.clip.clone(),
            released: Arc::clone(&self.released),
        }))
    }
}

impl CaptureHandle for FakeHandle {
    fn stop(mut self: Box<Self>) -> Result<Option<AudioClip>, CaptureError> {
        Ok(self.clip.take())
    }
}

impl Drop for FakeHandle {
    fn drop(&mut self) {
        self.released.store(true, Ordering::SeqCst);
    }
}

// ==================== Side channels ====================

#[derive(Default)]
pub(crate) struct RecordingLogger {
    events: Mutex<Vec<&'static str>>,
}

impl RecordingLogger {
    pub(crate) fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().clone()
    }
}

impl SessionLogger for RecordingLogger {
    fn log(&self, event: SessionEvent) {
        self.events.lock().unwrap().push(event.event_type);
    }
}

#[derive(Default)]
pub(crate) struct RecordingSpeaker {
    spoken: Mutex<Vec<String>>,
}

impl RecordingSpeaker {
    pub(crate) fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }
}

impl SpeechNotifier for RecordingSpeaker {
    fn announce(&self, text: &str) {
        self.spoken.lock().unwrap().push(text.to_string());
    }
}
