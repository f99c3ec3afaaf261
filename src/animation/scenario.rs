//! Build a fully-initialized visualizer scenario from configuration
//!
//! Takes a `VisualizerConfig` (YAML-facing) and produces the runtime bundle
//! inserted into Bevy as a `Resource`:
//! - animation parameters (`Parameters`)
//! - the orchestrating `Engine` (shape/color/connection/tension)
//! - the `ParticleField` with its initial shape sampled into both `current`
//!   and `target`
//! - the parsed color palette
//!
//! The scenario is consumed each frame by the animation and rendering
//! systems in `visualization::viewer`

use bevy::prelude::Resource;
use log::warn;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use crate::animation::engine::Engine;
use crate::animation::field::ParticleField;
use crate::animation::params::Parameters;
use crate::animation::sampler::sample;
use crate::configuration::config::{parse_hex, VisualizerConfig};
use crate::tension::source::TensionSource;

/// Bevy resource representing a fully-initialized visualizer scenario
///
/// This is the main "runtime bundle" constructed from a
/// [`VisualizerConfig`]: parameters, orchestration state, and the particle
/// buffers. The render loop reads and mutates it through the resource —
/// the loop itself is created once and never rebuilt when these values
/// change
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub engine: Engine,
    pub field: ParticleField,
    pub palette: Vec<[f32; 3]>,
}

impl Scenario {
    pub fn build_scenario(cfg: VisualizerConfig, credential: Option<String>) -> Self {
        // Parameters (runtime) from VisualConfig
        let v = cfg.visual;
        let parameters = Parameters {
            lerp_speed: v.lerp_speed,
            expansion_gain: v.expansion_gain,
            breathe_freq: v.breathe_freq,
            breathe_amp: v.breathe_amp,
            rotation_speed: v.rotation_speed,
            base_size: v.base_size,
            size_gain: v.size_gain,
        };

        // Initial point cloud: both current and target start on the
        // configured shape. A separate seeded RNG keeps the startup cloud
        // reproducible regardless of later shape switches
        let mut seed_rng = Pcg64Mcg::seed_from_u64(cfg.seed);
        let initial = sample(v.initial_shape, v.particle_count, &mut seed_rng);
        let field = ParticleField::new(initial);

        let tension = TensionSource::new(cfg.tension.smoothing, cfg.tension.initial);
        let engine = Engine::new(v.initial_shape, tension, cfg.remote, credential, cfg.seed);

        // Palette: unparseable entries fall back to white rather than
        // aborting startup
        let palette: Vec<[f32; 3]> = cfg
            .palette
            .iter()
            .map(|hex| {
                parse_hex(hex).unwrap_or_else(|| {
                    warn!("invalid palette color {hex:?}, using white");
                    [1.0, 1.0, 1.0]
                })
            })
            .collect();

        Self {
            parameters,
            engine,
            field,
            palette,
        }
    }
}
