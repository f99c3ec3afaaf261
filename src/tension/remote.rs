//! Remote vision session boundary
//!
//! The session that watches the camera feed and estimates hand openness is
//! an external collaborator. This module pins down its interface contract:
//!
//! - [`RemoteSession`] – an explicit, injected session object (never a
//!   process-wide singleton with a settable callback)
//! - [`TensionReport`] – the typed, validated decode of an inbound tool-call
//!   payload; malformed payloads become a [`ReportError`], not a crash
//! - [`RemoteLink`] – owns a connected camera + session pair and pumps the
//!   capture/report cycle once per frame
//!
//! Every received report carrying a usable id is acknowledged back to the
//! session, even when its level is rejected; an unacknowledged report is a
//! protocol violation on our side, though lost acknowledgments are not
//! retried

use log::warn;
use serde_json::Value;
use thiserror::Error;

use crate::tension::capture::{CaptureError, FrameCadence, FrameSampler, FrameSource};
use crate::tension::source::TensionSource;

/// Name of the remote function call that carries a tension estimate
pub const TENSION_CALL: &str = "set_hand_tension";

/// Failures on the connect path and the live session
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("no API credential configured")]
    MissingCredential,

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error("remote session handshake failed: {0}")]
    Handshake(String),

    #[error("remote session transport error: {0}")]
    Transport(String),
}

/// Why an inbound report was rejected
#[derive(Error, Debug, PartialEq)]
pub enum ReportError {
    #[error("report is missing an id")]
    MissingId,

    #[error("unknown function call: {0}")]
    UnknownCall(String),

    #[error("report level is missing or not a number")]
    NotANumber,

    #[error("report level {0} outside [0, 1]")]
    OutOfRange(f64),
}

/// A validated tension report: one finite level in [0, 1] plus the id used
/// to acknowledge receipt
#[derive(Debug, Clone, PartialEq)]
pub struct TensionReport {
    pub id: String,
    pub level: f64,
}

impl TensionReport {
    /// Decode a raw tool-call payload of the form
    /// `{ "id": "...", "name": "set_hand_tension", "args": { "level": 0.7 } }`
    ///
    /// Rejects (rather than guesses at) anything missing, non-numeric,
    /// non-finite or out of range
    pub fn decode(raw: &Value) -> Result<Self, ReportError> {
        let id = raw
            .get("id")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .ok_or(ReportError::MissingId)?;

        let name = raw.get("name").and_then(Value::as_str).unwrap_or("");
        if name != TENSION_CALL {
            return Err(ReportError::UnknownCall(name.to_string()));
        }

        let level = raw
            .get("args")
            .and_then(|a| a.get("level"))
            .and_then(Value::as_f64)
            .filter(|l| l.is_finite())
            .ok_or(ReportError::NotANumber)?;

        if !(0.0..=1.0).contains(&level) {
            return Err(ReportError::OutOfRange(level));
        }

        Ok(Self {
            id: id.to_string(),
            level,
        })
    }
}

/// The remote vision/audio session, at its interface boundary only
///
/// Implementations wrap whatever transport the deployment uses; the core
/// never sees past this trait. `try_recv` is a non-blocking pull — report
/// delivery happens between frame ticks, never during one, so the hot path
/// needs no locking
pub trait RemoteSession {
    /// Perform the session handshake
    fn open(&mut self) -> Result<(), SessionError>;

    /// Hand one encoded still-image payload to the transport
    fn send_frame(&mut self, payload: &[u8]) -> Result<(), SessionError>;

    /// Pull the next pending raw report, if any, in arrival order
    fn try_recv(&mut self) -> Option<Value>;

    /// Acknowledge a received report by id
    fn acknowledge(&mut self, id: &str) -> Result<(), SessionError>;

    /// Tear the session down; must be safe to call more than once
    fn close(&mut self);
}

/// A connected camera + session pair with its capture schedule
///
/// Construction is fail-closed: the link only exists once both the capture
/// device and the session handshake have succeeded, and a failure on either
/// releases whatever was already acquired
pub struct RemoteLink {
    camera: Box<dyn FrameSource + Send + Sync>,
    session: Box<dyn RemoteSession + Send + Sync>,
    cadence: FrameCadence,
    sampler: FrameSampler,
}

impl RemoteLink {
    pub fn connect(
        mut camera: Box<dyn FrameSource + Send + Sync>,
        mut session: Box<dyn RemoteSession + Send + Sync>,
        frame_rate: f64,
        downscale: f64,
        jpeg_quality: u8,
    ) -> Result<Self, SessionError> {
        camera.open()?;

        if let Err(e) = session.open() {
            camera.close();
            return Err(e);
        }

        Ok(Self {
            camera,
            session,
            cadence: FrameCadence::new(frame_rate),
            sampler: FrameSampler::new(downscale, jpeg_quality),
        })
    }

    /// One per-frame pump of the capture/report cycle
    ///
    /// Sends a frame when the cadence is due, then drains pending reports in
    /// arrival order into the smoother. Malformed reports are dropped with a
    /// warning and the last good value stands, but they are acknowledged all
    /// the same when their id is recoverable. A transport error aborts the
    /// pump and bubbles up so the caller can tear the link down
    pub fn pump(&mut self, now: f64, tension: &mut TensionSource) -> Result<(), SessionError> {
        if self.cadence.due(now) {
            let frame = self.camera.grab()?;
            let payload = self.sampler.encode(&frame)?;
            self.session.send_frame(&payload)?;
        }

        while let Some(raw) = self.session.try_recv() {
            match TensionReport::decode(&raw) {
                Ok(report) => {
                    tension.apply_report(report.level);
                    // Lost acks are not retried; the report was applied
                    if let Err(e) = self.session.acknowledge(&report.id) {
                        warn!("failed to acknowledge report {}: {e}", report.id);
                    }
                }
                Err(e) => {
                    warn!("dropping malformed tension report: {e}");
                    // A recognized call with a bad level was still received,
                    // so it still gets its acknowledgment; only calls we do
                    // not recognize at all go unanswered
                    if !matches!(e, ReportError::UnknownCall(_)) {
                        if let Some(id) = raw
                            .get("id")
                            .and_then(Value::as_str)
                            .filter(|s| !s.is_empty())
                        {
                            if let Err(e) = self.session.acknowledge(id) {
                                warn!("failed to acknowledge report {id}: {e}");
                            }
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Stop the capture cycle and release both collaborators
    pub fn close(&mut self) {
        self.session.close();
        self.camera.close();
    }
}
