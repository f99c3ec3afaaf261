//! Particle buffer state for the visualizer
//!
//! `ParticleField` owns the three per-particle position buffers:
//! - `current` – the resting geometry, relaxed toward `target` each frame
//! - `target`  – the destination shape, replaced wholesale on a shape change
//! - `render`  – the transformed positions actually handed to the renderer
//!
//! All three are allocated together with the same length, so a length
//! mismatch between them cannot be constructed

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct ParticleField {
    pub current: Vec<NVec3>, // resting positions, relaxed toward target
    pub target: Vec<NVec3>,  // destination shape
    pub render: Vec<NVec3>,  // post-transform positions for the renderer
}

impl ParticleField {
    /// Build a field from an initial point cloud
    ///
    /// `current` and `target` both start at the initial cloud, `render`
    /// starts as a copy so the first frame has valid positions even before
    /// the first animation step runs
    pub fn new(initial: Vec<NVec3>) -> Self {
        let render = initial.clone();
        let target = initial.clone();
        Self {
            current: initial,
            target,
            render,
        }
    }

    /// Number of particles in the field
    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Replace the target shape wholesale
    ///
    /// `current` is deliberately left untouched: the per-frame relaxation
    /// morphs the old configuration toward the new target, so the swap
    /// itself IS the transition
    pub fn retarget(&mut self, points: Vec<NVec3>) {
        assert_eq!(
            points.len(),
            self.current.len(),
            "retarget with mismatched particle count"
        );
        self.target = points;
    }
}
