use std::time::Instant;

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use crate::animation::field::ParticleField;
use crate::animation::integrator::advance;
use crate::animation::params::Parameters;
use crate::animation::sampler::{sample, Shape};

fn bench_params() -> Parameters {
    Parameters {
        lerp_speed: 0.03,
        expansion_gain: 1.5,
        breathe_freq: 2.0,
        breathe_amp: 0.1,
        rotation_speed: 0.5,
        base_size: 0.03,
        size_gain: 0.08,
    }
}

/// Time the per-frame kernel (relax + compose) across particle counts
///
/// A display frame at 60 Hz leaves ~16 ms; the kernel should be far under
/// that even well past the default 3000 particles. Invoked by swapping the
/// commented call into `main` (release build)
pub fn bench_advance() {
    let ns = [1000, 3000, 10_000, 30_000, 100_000];
    let frames = 240;

    let params = bench_params();
    let mut rng = Pcg64Mcg::seed_from_u64(7);

    for n in ns {
        let mut field = ParticleField::new(sample(Shape::Sphere, n, &mut rng));
        // Give the relaxation something to chase
        field.retarget(sample(Shape::Heart, n, &mut rng));

        // Warm up
        advance(&mut field, 0.0, 0.5, &params);

        let t0 = Instant::now();
        for f in 0..frames {
            let t = f as f64 / 60.0;
            advance(&mut field, t, 0.5, &params);
        }
        let per_frame_ms = t0.elapsed().as_secs_f64() * 1000.0 / frames as f64;

        println!("N = {n:6}, frame = {per_frame_ms:8.4} ms");
    }
}

/// Time the stochastic samplers across shapes at the default particle count
pub fn bench_sampler() {
    let shapes = [
        ("sphere", Shape::Sphere),
        ("heart", Shape::Heart),
        ("flower", Shape::Flower),
        ("saturn", Shape::Saturn),
        ("buddha", Shape::Buddha),
        ("fireworks", Shape::Fireworks),
    ];
    let n = 3000;
    let reps = 100;

    let mut rng = Pcg64Mcg::seed_from_u64(7);

    for (name, shape) in shapes {
        // Warm up
        let _ = sample(shape, n, &mut rng);

        let t0 = Instant::now();
        for _ in 0..reps {
            let cloud = sample(shape, n, &mut rng);
            std::hint::black_box(&cloud);
        }
        let per_call_ms = t0.elapsed().as_secs_f64() * 1000.0 / reps as f64;

        println!("{name:>9}: N = {n}, sample = {per_call_ms:8.4} ms");
    }
}
