//! Speech notification port
//!
//! Reading questions aloud is a side effect the interview never waits on
//! and never depends on.

/// Fire-and-forget speech output.
pub trait SpeechNotifier: Send + Sync {
    /// Speak the text. Must return promptly; failures are swallowed.
    fn announce(&self, text: &str);
}

/// No-op speech for tests and when speech is disabled
pub struct SilentSpeaker;

impl SpeechNotifier for SilentSpeaker {
    fn announce(&self, _text: &str) {}
}
