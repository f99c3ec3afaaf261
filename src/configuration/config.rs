//! Configuration types for loading visualizer presets from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! visualizer preset. A preset consists of:
//!
//! - [`VisualConfig`]  – particle count, initial shape, and animation tuning
//! - [`TensionConfig`] – tension smoothing factor and resting value
//! - [`RemoteConfig`]  – capture rate and frame encoding for the vision session
//! - [`VisualizerConfig`] – top-level wrapper used to load a preset from YAML
//!
//! # YAML format
//! An example preset YAML matching these types:
//!
//! ```yaml
//! visual:
//!   particle_count: 3000
//!   initial_shape: "sphere"   # sphere | heart | flower | saturn | buddha | fireworks
//!   lerp_speed: 0.03          # fraction of remaining morph distance per frame
//!   expansion_gain: 1.5       # expansion = 1 + tension * gain
//!   breathe_freq: 2.0         # pulsation angular frequency (rad/s)
//!   breathe_amp: 0.1          # pulsation amplitude
//!   rotation_speed: 0.5       # vertical-axis rotation (rad/s)
//!   base_size: 0.03           # point size at tension 0
//!   size_gain: 0.08           # extra point size at tension 1
//!
//! tension:
//!   smoothing: 0.5            # remote-report blend factor
//!   initial: 0.2              # resting tension before any input
//!
//! remote:
//!   frame_rate: 2.0           # capture cadence in Hz
//!   downscale: 0.5            # linear frame downscale factor
//!   jpeg_quality: 50          # 1-100
//!
//! palette:                    # hex colors, cycled by the color action
//!   - "#00ffff"
//!   - "#ff00ff"
//!
//! seed: 42                    # RNG seed for shape sampling
//! ```
//!
//! Every tuning value here was originally a magic constant tuned by feel;
//! they are config fields (with those constants as serde defaults) rather
//! than hard invariants.

use serde::Deserialize;

use crate::animation::sampler::Shape;

/// Particle count, initial shape and animation tuning
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct VisualConfig {
    pub particle_count: usize, // fixed at startup; all three buffers share it
    pub initial_shape: Shape,  // shape sampled for current and target at t = 0
    pub lerp_speed: f64,       // morph relaxation rate
    pub expansion_gain: f64,   // tension-driven expansion gain
    pub breathe_freq: f64,     // pulsation angular frequency (rad/s)
    pub breathe_amp: f64,      // pulsation amplitude
    pub rotation_speed: f64,   // vertical-axis rotation (rad/s)
    pub base_size: f64,        // point size at tension 0
    pub size_gain: f64,        // extra point size at tension 1
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            particle_count: 3000,
            initial_shape: Shape::Sphere,
            lerp_speed: 0.03,
            expansion_gain: 1.5,
            breathe_freq: 2.0,
            breathe_amp: 0.1,
            rotation_speed: 0.5,
            base_size: 0.03,
            size_gain: 0.08,
        }
    }
}

/// Tension smoothing factor and resting value
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct TensionConfig {
    pub smoothing: f64, // exponential blend factor for remote reports
    pub initial: f64,   // resting tension before any input
}

impl Default for TensionConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.5,
            initial: 0.2,
        }
    }
}

/// Capture cadence and frame encoding for the remote vision session
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RemoteConfig {
    pub frame_rate: f64,  // Hz; low on purpose, the estimator is slow anyway
    pub downscale: f64,   // linear scale factor for captured frames
    pub jpeg_quality: u8, // 1-100
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            frame_rate: 2.0,
            downscale: 0.5,
            jpeg_quality: 50,
        }
    }
}

/// Top-level preset configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct VisualizerConfig {
    pub visual: VisualConfig,   // particle/animation tuning
    pub tension: TensionConfig, // tension source tuning
    pub remote: RemoteConfig,   // vision session interface tuning
    pub palette: Vec<String>,   // hex colors, purely cosmetic
    pub seed: u64,              // RNG seed for shape sampling
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            visual: VisualConfig::default(),
            tension: TensionConfig::default(),
            remote: RemoteConfig::default(),
            palette: default_palette(),
            seed: 42,
        }
    }
}

/// The original eight-color palette
pub fn default_palette() -> Vec<String> {
    [
        "#00ffff", // cyan
        "#ff00ff", // magenta
        "#ffff00", // yellow
        "#ff4444", // red
        "#44ff44", // green
        "#4444ff", // blue
        "#ffffff", // white
        "#ffaa00", // orange
    ]
    .map(str::to_string)
    .to_vec()
}

/// Parse a `#rrggbb` hex color into [0, 1] RGB components
/// Returns `None` for anything that is not exactly that form
pub fn parse_hex(s: &str) -> Option<[f32; 3]> {
    let s = s.strip_prefix('#')?;
    // Length is in bytes; reject non-ASCII input before slicing so a
    // multi-byte entry cannot split a char boundary
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0])
}
