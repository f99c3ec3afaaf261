//! Runtime orchestration for the visualizer
//!
//! `Engine` owns everything that is not a particle buffer: the selected
//! shape and color, the connection state machine, the tension source and
//! its authority rules, and the optional live link to the remote vision
//! session. The render loop calls [`Engine::tick`] once per frame and reads
//! [`Engine::tension`] — it never sees connect-path failures, only a valid
//! clamped scalar

use log::{info, warn};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use crate::animation::field::ParticleField;
use crate::animation::sampler::{sample, Shape};
use crate::configuration::config::RemoteConfig;
use crate::tension::capture::FrameSource;
use crate::tension::remote::{RemoteLink, RemoteSession, SessionError};
use crate::tension::source::TensionSource;

/// Whether the remote vision session currently drives the tension signal
///
/// Only `Connected` suppresses the pointer fallback; `Connecting` exists so
/// a connect action cannot be double-triggered while the handshake is
/// in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
}

pub struct Engine {
    pub shape: Shape,
    pub color_index: usize,
    pub connection: ConnectionState,
    tension: TensionSource,
    credential: Option<String>,
    remote_cfg: RemoteConfig,
    rng: Pcg64Mcg,
    link: Option<RemoteLink>,
}

impl Engine {
    pub fn new(
        shape: Shape,
        tension: TensionSource,
        remote_cfg: RemoteConfig,
        credential: Option<String>,
        seed: u64,
    ) -> Self {
        Self {
            shape,
            color_index: 0,
            connection: ConnectionState::Disconnected,
            tension,
            credential,
            remote_cfg,
            rng: Pcg64Mcg::seed_from_u64(seed),
            link: None,
        }
    }

    /// Current tension, safe to read every frame
    pub fn tension(&self) -> f64 {
        self.tension.value()
    }

    /// Whether an API credential was configured at startup
    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Select a shape, resampling the target buffer on an actual change
    ///
    /// Selecting the already-active shape is a no-op: the target is not
    /// resampled and the field is untouched. `current` is never reset, the
    /// relaxation step morphs it toward the new target over time
    pub fn set_shape(&mut self, shape: Shape, field: &mut ParticleField) {
        if shape == self.shape {
            return;
        }
        self.shape = shape;
        field.retarget(sample(shape, field.len(), &mut self.rng));
    }

    /// Select a palette entry; purely cosmetic, never touches geometry
    pub fn set_color(&mut self, index: usize, palette_len: usize) {
        if palette_len > 0 {
            self.color_index = index % palette_len;
        }
    }

    /// Step to the next palette entry
    pub fn cycle_color(&mut self, palette_len: usize) {
        self.set_color(self.color_index + 1, palette_len);
    }

    /// Feed a pointer position (already mapped to [0, 1], top = 1.0)
    ///
    /// Ignored while the remote session is authoritative
    pub fn pointer_moved(&mut self, norm_y: f64) {
        if self.connection != ConnectionState::Connected {
            self.tension.apply_pointer(norm_y);
        }
    }

    /// Attempt to bring up the remote session (fail-closed)
    ///
    /// Refused up front without a credential; otherwise acquires the camera
    /// and performs the handshake, and any failure rolls back to
    /// `Disconnected` with both collaborators released. The pointer fallback
    /// keeps driving tension the whole time
    pub fn connect(
        &mut self,
        camera: Box<dyn FrameSource + Send + Sync>,
        session: Box<dyn RemoteSession + Send + Sync>,
    ) -> Result<(), SessionError> {
        if self.connection != ConnectionState::Disconnected {
            return Ok(()); // already connecting/connected
        }
        if self.credential.is_none() {
            return Err(SessionError::MissingCredential);
        }

        self.connection = ConnectionState::Connecting;

        match RemoteLink::connect(
            camera,
            session,
            self.remote_cfg.frame_rate,
            self.remote_cfg.downscale,
            self.remote_cfg.jpeg_quality,
        ) {
            Ok(link) => {
                self.link = Some(link);
                self.connection = ConnectionState::Connected;
                info!("remote session connected; pointer fallback suppressed");
                Ok(())
            }
            Err(e) => {
                self.connection = ConnectionState::Disconnected;
                Err(e)
            }
        }
    }

    /// Tear down the remote link and restore pointer authority
    pub fn disconnect(&mut self) {
        if let Some(mut link) = self.link.take() {
            link.close();
        }
        self.connection = ConnectionState::Disconnected;
    }

    /// Per-frame upkeep: pump the remote link when one is live
    ///
    /// A transport or capture failure mid-session degrades back to pointer
    /// mode immediately; no in-flight frame is retried
    pub fn tick(&mut self, now: f64) {
        if let Some(link) = &mut self.link {
            if let Err(e) = link.pump(now, &mut self.tension) {
                warn!("remote session failed, reverting to pointer mode: {e}");
                self.disconnect();
            }
        }
    }
}
