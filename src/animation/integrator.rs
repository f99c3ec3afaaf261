//! Per-frame animation step for the particle field
//!
//! Two stages, driven by wall-clock time `t` and the current tension `tau`:
//! - [`relax_step`] moves the resting geometry toward the target shape
//! - [`compose_frame`] rotates/scales the resting geometry into the render
//!   buffer
//!
//! Relaxation acts on the pre-transform base positions while rotation,
//! expansion and breathing are applied after it every frame. That split
//! keeps the morph trajectory independent of tension changes, and keeps the
//! rotation phase independent of shape changes

use super::field::{NVec3, ParticleField};
use super::params::Parameters;

/// Close a fraction of the remaining distance between `current` and `target`
///
/// Exponential approach: per frame each particle moves
/// `(target - current) * lerp_speed`, which never overshoots and converges
/// within a few dozen frames without oscillating. There is no transition
/// state machine anywhere — this step is the shape morph
pub fn relax_step(field: &mut ParticleField, params: &Parameters) {
    for (c, t) in field.current.iter_mut().zip(field.target.iter()) {
        // c_n+1 = c_n + (t - c_n) * k
        *c += (t - *c) * params.lerp_speed;
    }
}

/// Transform the resting geometry into the render buffer
///
/// Global scalars for this frame:
/// - expansion = 1 + tau * expansion_gain     (tension-driven)
/// - breathe   = 1 + amp * sin(freq * t)      (slow pulsation, tension-free)
/// - angle     = t * rotation_speed           (monotonic; trig periodicity
///   wraps it naturally, no modulo reset needed)
pub fn compose_frame(field: &mut ParticleField, t: f64, tau: f64, params: &Parameters) {
    let expansion = 1.0 + tau * params.expansion_gain;
    let breathe = 1.0 + params.breathe_amp * (params.breathe_freq * t).sin();
    let scale = expansion * breathe;

    let angle = t * params.rotation_speed;
    let (sin_a, cos_a) = angle.sin_cos();

    for (r, c) in field.render.iter_mut().zip(field.current.iter()) {
        // Rotate about the vertical axis
        let rx = c.x * cos_a - c.z * sin_a;
        let rz = c.x * sin_a + c.z * cos_a;

        // Scale all three axes and write out; current is never touched here
        *r = NVec3::new(rx * scale, c.y * scale, rz * scale);
    }
}

/// One full frame: relax the base geometry, then compose the render buffer
pub fn advance(field: &mut ParticleField, t: f64, tau: f64, params: &Parameters) {
    relax_step(field, params);
    compose_frame(field, t, tau, params);
}

/// Rendered point size for the current tension
pub fn point_size(tau: f64, params: &Parameters) -> f64 {
    params.base_size + tau * params.size_gain
}
