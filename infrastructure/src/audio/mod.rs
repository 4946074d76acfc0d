//! Audio capture adapters and WAV encoding
//!
//! Live capture needs the `live-audio` feature. Without it
//! [`build_capture`] returns [`NoAudioCapture`] and live answers fall back
//! to the transcription-failed sentinel.

#[cfg(feature = "live-audio")]
mod cpal_capture;
mod wav;

#[cfg(feature = "live-audio")]
pub use cpal_capture::CpalAudioCapture;
pub use wav::encode_wav;

use interview_application::ports::audio_capture::AudioCapture;
#[cfg(not(feature = "live-audio"))]
use interview_application::ports::audio_capture::NoAudioCapture;
use std::sync::Arc;

/// Recording parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSettings {
    /// Sample rate of the produced WAV (mono)
    pub sample_rate: u32,
    /// Input device name (substring match); default device when `None`
    pub device: Option<String>,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            sample_rate: 16_000,
            device: None,
        }
    }
}

/// The capture adapter this build supports.
pub fn build_capture(settings: AudioSettings) -> Arc<dyn AudioCapture> {
    #[cfg(feature = "live-audio")]
    {
        Arc::new(CpalAudioCapture::new(settings))
    }
    #[cfg(not(feature = "live-audio"))]
    {
        tracing::debug!(?settings, "Built without live-audio; live recording unavailable");
        Arc::new(NoAudioCapture)
    }
}
