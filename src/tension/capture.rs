//! Camera frame acquisition and encoding for the remote vision session
//!
//! The core pulls frames (rather than being pushed them) at a fixed low
//! rate, downscales them and encodes a compressed still image before handing
//! the payload to the transport. 2 Hz at half resolution is plenty for a
//! hand-openness estimate and keeps bandwidth low

use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::RgbImage;
use thiserror::Error;

/// Failures while acquiring or encoding camera frames
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("camera/microphone permission denied")]
    PermissionDenied,

    #[error("capture device unavailable: {0}")]
    Unavailable(String),

    #[error("frame encoding failed: {0}")]
    Encode(String),
}

/// A live video frame source (the real camera lives outside the core; tests
/// inject scripted implementations)
pub trait FrameSource {
    /// Acquire the device; may fail with permission or availability errors
    fn open(&mut self) -> Result<(), CaptureError>;

    /// Pull the most recent frame
    fn grab(&mut self) -> Result<RgbImage, CaptureError>;

    /// Release the device; must be safe to call more than once
    fn close(&mut self);
}

/// Due-based scheduler for the fixed capture rate
///
/// The first call after construction is immediately due, so a freshly
/// connected session sends its first frame without waiting a full interval
#[derive(Debug, Clone)]
pub struct FrameCadence {
    interval: f64,     // seconds between frames
    last: Option<f64>, // time of the last sent frame
}

impl FrameCadence {
    pub fn new(rate_hz: f64) -> Self {
        Self {
            interval: 1.0 / rate_hz.max(1e-6),
            last: None,
        }
    }

    /// Returns true (and records `now`) when a frame should be sent
    pub fn due(&mut self, now: f64) -> bool {
        match self.last {
            Some(last) if now - last < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

/// Downscale + JPEG-encode captured frames into transport payloads
#[derive(Debug, Clone)]
pub struct FrameSampler {
    downscale: f64,   // linear scale factor applied to both dimensions
    jpeg_quality: u8, // 1–100
}

impl FrameSampler {
    pub fn new(downscale: f64, jpeg_quality: u8) -> Self {
        Self {
            downscale: downscale.clamp(0.05, 1.0),
            jpeg_quality: jpeg_quality.clamp(1, 100),
        }
    }

    /// Produce the compressed payload for one frame
    pub fn encode(&self, frame: &RgbImage) -> Result<Vec<u8>, CaptureError> {
        let w = ((frame.width() as f64 * self.downscale) as u32).max(1);
        let h = ((frame.height() as f64 * self.downscale) as u32).max(1);
        let scaled = imageops::resize(frame, w, h, FilterType::Triangle);

        let mut payload = Vec::new();
        JpegEncoder::new_with_quality(&mut payload, self.jpeg_quality)
            .encode_image(&scaled)
            .map_err(|e| CaptureError::Encode(e.to_string()))?;

        Ok(payload)
    }
}
