//! Live audio capture port
//!
//! Capture is scoped: [`AudioCapture::start`] acquires the input device and
//! the returned [`CaptureHandle`] owns it. The device is released when the
//! handle is stopped or dropped, so every exit path (including an error
//! while waiting for the stop signal) closes the input stream.

use super::transcriber::AudioClip;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Live audio capture is not available: {0}")]
    Unavailable(String),

    #[error("Audio device error: {0}")]
    Device(String),

    #[error("Audio stream error: {0}")]
    Stream(String),
}

/// Starts recordings on an input device.
pub trait AudioCapture: Send + Sync {
    fn start(&self) -> Result<Box<dyn CaptureHandle>, CaptureError>;
}

/// A running recording. Dropping it stops the recording and releases the device.
pub trait CaptureHandle: Send {
    /// Stop recording and return the captured audio, or `None` if nothing was captured.
    fn stop(self: Box<Self>) -> Result<Option<AudioClip>, CaptureError>;
}

/// Capture adapter for builds or machines without an input device.
pub struct NoAudioCapture;

impl AudioCapture for NoAudioCapture {
    fn start(&self) -> Result<Box<dyn CaptureHandle>, CaptureError> {
        Err(CaptureError::Unavailable(
            "this build has no live audio support".to_string(),
        ))
    }
}
