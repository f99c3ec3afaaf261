pub mod animation;
pub mod configuration;
pub mod tension;
pub mod visualization;
pub mod benchmark;

pub use animation::field::{NVec3, ParticleField};
pub use animation::sampler::{sample, Shape};
pub use animation::integrator::{advance, compose_frame, point_size, relax_step};
pub use animation::params::Parameters;
pub use animation::engine::{ConnectionState, Engine};
pub use animation::scenario::Scenario;

pub use configuration::config::{
    default_palette, parse_hex, RemoteConfig, TensionConfig, VisualConfig, VisualizerConfig,
};

pub use tension::capture::{CaptureError, FrameCadence, FrameSampler, FrameSource};
pub use tension::remote::{
    RemoteLink, RemoteSession, ReportError, SessionError, TensionReport, TENSION_CALL,
};
pub use tension::source::{pointer_to_tension, TensionSource};

pub use visualization::viewer::run_viewer;

pub use benchmark::benchmark::{bench_advance, bench_sampler};
