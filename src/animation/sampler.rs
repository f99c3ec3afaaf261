//! Stochastic point-cloud sampling for the shape archetypes
//!
//! Each shape is a distribution, not a literal mesh: every call to
//! [`sample`] draws fresh random points, so two calls with identical inputs
//! yield different clouds with the same silhouette. Callers that need
//! reproducibility seed the RNG they pass in

use std::f64::consts::TAU;

use rand::Rng;
use serde::Deserialize;

use crate::animation::field::NVec3;

/// The closed set of shape archetypes the visualizer can morph between
/// `shape: "sphere"`, `"heart"`, `"flower"`, `"saturn"`, `"buddha"` or `"fireworks"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    #[serde(rename = "sphere")] // uniform ball of radius 2
    Sphere,

    #[serde(rename = "heart")] // parametric heart curve extruded into a thin slab
    Heart,

    #[serde(rename = "flower")] // 4-petal rose curve
    Flower,

    #[serde(rename = "saturn")] // ring + planet mixture
    Saturn,

    #[serde(rename = "buddha")] // base / torso / head mixture
    Buddha,

    #[serde(rename = "fireworks")] // radial burst from the origin
    Fireworks,
}

/// Draw a point uniformly inside a ball of the given radius
///
/// Spherical coordinates with cube-root radius scaling give uniform
/// volumetric density (plain linear radius would cluster points at the core)
fn random_in_ball(radius: f64, rng: &mut impl Rng) -> NVec3 {
    let theta = TAU * rng.random::<f64>();
    let phi = (2.0 * rng.random::<f64>() - 1.0).acos();
    let r = rng.random::<f64>().cbrt() * radius;
    NVec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

/// Draw a direction uniformly on the unit sphere
fn random_direction(rng: &mut impl Rng) -> NVec3 {
    let theta = TAU * rng.random::<f64>();
    let z: f64 = rng.random_range(-1.0..=1.0);
    let s = (1.0 - z * z).sqrt();
    NVec3::new(s * theta.cos(), s * theta.sin(), z)
}

/// Sample `count` points from the distribution belonging to `shape`
///
/// Pure apart from the RNG: no I/O, no shared state. `count` is
/// caller-guaranteed positive and there are no error conditions
pub fn sample(shape: Shape, count: usize, rng: &mut impl Rng) -> Vec<NVec3> {
    let mut points = Vec::with_capacity(count);

    for _ in 0..count {
        let p = match shape {
            Shape::Sphere => random_in_ball(2.0, rng),

            Shape::Heart => {
                // x = 16 sin^3 t, y = 13 cos t - 5 cos 2t - 2 cos 3t - cos 4t
                // scaled by 0.15, with z jitter for volumetric thickness
                let t = TAU * rng.random::<f64>();
                let x = 16.0 * t.sin().powi(3) * 0.15;
                let y = (13.0 * t.cos()
                    - 5.0 * (2.0 * t).cos()
                    - 2.0 * (3.0 * t).cos()
                    - (4.0 * t).cos())
                    * 0.15;
                let z = rng.random_range(-0.5..0.5);
                NVec3::new(x, y, z)
            }

            Shape::Flower => {
                // 4-petal rose: r = cos(4 theta), radius 2, thin in z
                let theta = TAU * rng.random::<f64>();
                let r = (4.0 * theta).cos() * 2.0;
                NVec3::new(
                    r * theta.cos(),
                    r * theta.sin(),
                    rng.random_range(-0.25..0.25),
                )
            }

            Shape::Saturn => {
                if rng.random::<f64>() < 0.6 {
                    // ring point: uniform angle, radial distance in [1.5, 3.0]
                    let angle = TAU * rng.random::<f64>();
                    let dist = rng.random_range(1.5..3.0);
                    NVec3::new(
                        angle.cos() * dist,
                        rng.random_range(-0.05..0.05),
                        angle.sin() * dist,
                    )
                } else {
                    // the planet
                    random_in_ball(1.0, rng)
                }
            }

            Shape::Buddha => {
                let r = rng.random::<f64>();
                if r < 0.4 {
                    // base: flattened oval, squashed in z
                    let angle = TAU * rng.random::<f64>();
                    let rad = rng.random::<f64>() * 1.5;
                    NVec3::new(
                        angle.cos() * rad,
                        rng.random_range(-1.5..-1.0),
                        angle.sin() * rad * 0.6,
                    )
                } else if r < 0.8 {
                    // torso: ball scaled down, shifted slightly below center
                    random_in_ball(1.0, rng) * 0.8 + NVec3::new(0.0, -0.2, 0.0)
                } else {
                    // head
                    random_in_ball(0.6, rng) + NVec3::new(0.0, 1.0, 0.0)
                }
            }

            Shape::Fireworks => {
                // burst pattern emanating from the origin
                random_direction(rng) * rng.random_range(0.0..3.0)
            }
        };

        points.push(p);
    }

    points
}
