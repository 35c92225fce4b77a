pub mod app;
pub mod commands;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod init_config;
pub mod particle;
pub mod profiler;
pub mod simulation;
pub mod vector;

pub use config::{ForceMultiplier, SimConfig, SpawnSettings, Viewport};
pub use error::SimError;
pub use particle::{Particle, ParticleId};
pub use simulation::Simulation;
pub use vector::{Polar, Vector2};

#[cfg(feature = "profiling")]
use once_cell::sync::Lazy;
#[cfg(feature = "profiling")]
use parking_lot::Mutex;

#[cfg(feature = "profiling")]
pub static PROFILER: Lazy<Mutex<profiler::Profiler>> =
    Lazy::new(|| Mutex::new(profiler::Profiler::new()));
