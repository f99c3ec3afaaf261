//! The smoothed tension scalar driving expansion/contraction
//!
//! Two producers feed it, mutually exclusive by connection state:
//! - pointer fallback: vertical pointer position mapped linearly
//!   (top of viewport = 1.0, bottom = 0.0), applied directly
//! - remote reports: discrete hand-openness estimates arriving at irregular
//!   intervals (0.3–2 s apart), blended in with exponential smoothing so a
//!   late-arriving report never snaps the visual
//!
//! The value is always clamped to [0, 1] and is safe to read every frame

#[derive(Debug, Clone)]
pub struct TensionSource {
    smoothed: f64,
    smoothing: f64, // exponential smoothing factor for remote reports
}

impl TensionSource {
    /// `smoothing` is the remote-report blend factor (0.5 in the original
    /// tuning); `initial` is the resting tension before any input arrives
    pub fn new(smoothing: f64, initial: f64) -> Self {
        Self {
            smoothed: initial.clamp(0.0, 1.0),
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    /// Blend one remote report into the smoothed value
    /// s_n+1 = s_n + k * (report - s_n)
    pub fn apply_report(&mut self, level: f64) {
        self.smoothed += self.smoothing * (level - self.smoothed);
        self.smoothed = self.smoothed.clamp(0.0, 1.0);
    }

    /// Apply a pointer position directly (pointer motion is already
    /// continuous, so no smoothing at this layer)
    pub fn apply_pointer(&mut self, norm_y: f64) {
        self.smoothed = norm_y.clamp(0.0, 1.0);
    }

    /// Most recent smoothed tension, clamped to [0, 1]; never blocks
    pub fn value(&self) -> f64 {
        self.smoothed
    }
}

/// Map a pointer y coordinate to tension: top of the viewport is 1.0,
/// bottom is 0.0
pub fn pointer_to_tension(cursor_y: f64, viewport_height: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    1.0 - (cursor_y / viewport_height).clamp(0.0, 1.0)
}
