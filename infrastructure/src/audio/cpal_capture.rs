//! Microphone capture via cpal.
//!
//! Records from the device's native format into a shared buffer, then
//! downmixes and resamples to the configured mono rate when the recording
//! stops. The cpal stream lives inside the handle: dropping the handle on
//! any path stops the stream and releases the device.

use super::wav::{downmix, encode_wav, f32_to_i16, resample};
use super::AudioSettings;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use interview_application::ports::audio_capture::{AudioCapture, CaptureError, CaptureHandle};
use interview_application::ports::transcriber::AudioClip;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};

/// Wrapper to make `cpal::Stream` movable into a `Send` handle.
///
/// Some cpal backends mark `Stream` as `!Send` with a raw-pointer marker.
/// The handle only ever keeps the stream alive and drops it.
struct SendStream(#[allow(dead_code)] cpal::Stream);

// SAFETY: the stream is never used after construction except to be dropped,
// and the audio callback runs on cpal's own thread.
unsafe impl Send for SendStream {}

pub struct CpalAudioCapture {
    settings: AudioSettings,
}

impl CpalAudioCapture {
    pub fn new(settings: AudioSettings) -> Self {
        Self { settings }
    }

    fn device(&self) -> Result<cpal::Device, CaptureError> {
        let host = cpal::default_host();
        match &self.settings.device {
            None => host
                .default_input_device()
                .ok_or_else(|| CaptureError::Device("No default input device found".into())),
            Some(name) => {
                let wanted = name.to_lowercase();
                host.input_devices()
                    .map_err(|e| CaptureError::Device(format!("Failed to enumerate devices: {}", e)))?
                    .find(|d| {
                        d.name()
                            .map(|n| n.to_lowercase().contains(&wanted))
                            .unwrap_or(false)
                    })
                    .ok_or_else(|| CaptureError::Device(format!("Audio device '{}' not found", name)))
            }
        }
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    buffer: Arc<Mutex<Vec<f32>>>,
    to_f32: fn(T) -> f32,
) -> Result<cpal::Stream, CaptureError>
where
    T: cpal::SizedSample,
{
    device
        .build_input_stream(
            config,
            move |data: &[T], _: &cpal::InputCallbackInfo| {
                if let Ok(mut buf) = buffer.lock() {
                    buf.extend(data.iter().copied().map(to_f32));
                }
            },
            |err| error!("Audio stream error: {}", err),
            None,
        )
        .map_err(|e| CaptureError::Stream(format!("Failed to build audio stream: {}", e)))
}

impl AudioCapture for CpalAudioCapture {
    fn start(&self) -> Result<Box<dyn CaptureHandle>, CaptureError> {
        let device = self.device()?;
        let device_name = device.name().unwrap_or_else(|_| "unknown".to_string());

        let supported = device
            .default_input_config()
            .map_err(|e| CaptureError::Device(format!("No usable input config: {}", e)))?;
        let config = supported.config();
        let buffer = Arc::new(Mutex::new(Vec::new()));

        let stream = match supported.sample_format() {
            cpal::SampleFormat::F32 => {
                build_stream::<f32>(&device, &config, Arc::clone(&buffer), |s| s)
            }
            cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config, Arc::clone(&buffer), |s| {
                f32::from(s) / f32::from(i16::MAX)
            }),
            cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config, Arc::clone(&buffer), |s| {
                (f32::from(s) - 32_768.0) / 32_768.0
            }),
            other => {
                return Err(CaptureError::Device(format!(
                    "Unsupported sample format {:?}",
                    other
                )));
            }
        }?;

        stream
            .play()
            .map_err(|e| CaptureError::Stream(format!("Failed to start audio stream: {}", e)))?;

        info!(
            device = %device_name,
            device_rate = config.sample_rate.0,
            device_channels = config.channels,
            "Recording started"
        );

        Ok(Box::new(CpalCaptureHandle {
            stream: SendStream(stream),
            buffer,
            device_rate: config.sample_rate.0,
            device_channels: config.channels,
            target_rate: self.settings.sample_rate,
        }))
    }
}

struct CpalCaptureHandle {
    stream: SendStream,
    buffer: Arc<Mutex<Vec<f32>>>,
    device_rate: u32,
    device_channels: u16,
    target_rate: u32,
}

impl CaptureHandle for CpalCaptureHandle {
    fn stop(self: Box<Self>) -> Result<Option<AudioClip>, CaptureError> {
        let CpalCaptureHandle {
            stream,
            buffer,
            device_rate,
            device_channels,
            target_rate,
        } = *self;
        drop(stream);

        let raw = buffer
            .lock()
            .map(|mut b| std::mem::take(&mut *b))
            .map_err(|_| CaptureError::Stream("Audio buffer poisoned".into()))?;
        debug!(samples = raw.len(), "Recording stopped");
        if raw.is_empty() {
            return Ok(None);
        }

        let mono = resample(&downmix(&raw, device_channels), device_rate, target_rate);
        let pcm: Vec<i16> = mono.into_iter().map(f32_to_i16).collect();
        Ok(Some(AudioClip::wav(encode_wav(&pcm, target_rate, 1))))
    }
}
