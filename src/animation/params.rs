//! Tuning parameters for the per-frame animation kernel
//!
//! `Parameters` holds runtime settings:
//! - relaxation rate toward the target shape,
//! - tension-driven expansion and point-size gains,
//! - breathing pulsation amplitude/frequency,
//! - rotation speed about the vertical axis
//!
//! These values were tuned by feel in the original visualizer; they are
//! loaded from configuration rather than hard-coded so they can be retuned
//! without a rebuild

#[derive(Debug, Clone)]
pub struct Parameters {
    pub lerp_speed: f64,     // fraction of remaining distance closed per frame
    pub expansion_gain: f64, // expansion = 1 + tension * gain
    pub breathe_freq: f64,   // pulsation angular frequency (rad/s)
    pub breathe_amp: f64,    // pulsation amplitude around 1.0
    pub rotation_speed: f64, // vertical-axis rotation (rad/s)
    pub base_size: f64,      // rendered point size at tension 0
    pub size_gain: f64,      // extra point size at tension 1
}
