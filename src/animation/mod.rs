pub mod field;
pub mod params;
pub mod sampler;
pub mod integrator;
pub mod engine;
pub mod scenario;
