// init_config.rs
// Handles loading and parsing a scenario file (TOML): viewport, spawn
// controls, initial particles and a frame-indexed command script

use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use std::fs;
use std::path::Path;

use crate::commands::SimCommand;
use crate::config::{self, ForceMultiplier, SimConfig, SpawnSettings, Viewport};
use crate::error::{ParseConfigSnafu, ReadConfigSnafu, SimError};

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct InitConfig {
    pub simulation: SimulationConfig,
    pub spawn: SpawnSettings,
    pub particles: Vec<ParticleConfig>,
    pub random: Vec<RandomConfig>,
    pub script: Vec<ScriptEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SimulationConfig {
    /// Viewport width. Falls back to the default when omitted.
    pub width: Option<f64>,
    /// Viewport height, control band included. Falls back to the default when omitted.
    pub height: Option<f64>,
    pub force_multiplier: Option<ForceMultiplier>,
}

impl SimulationConfig {
    /// Return the viewport, using the global defaults when values are not provided.
    pub fn viewport(&self) -> Result<Viewport, SimError> {
        Viewport::new(
            self.width.unwrap_or(config::DEFAULT_WIDTH),
            self.height.unwrap_or(config::DEFAULT_HEIGHT),
        )
    }
}

/// A single particle placed before the first frame.
#[derive(Debug, Deserialize, Serialize)]
pub struct ParticleConfig {
    pub x: f64,
    pub y: f64,
    pub mass: f64,
    #[serde(default)]
    pub charge_density: f64,
    #[serde(default)]
    pub vx: f64,
    #[serde(default)]
    pub vy: f64,
}

/// `count` identical particles at random positions inside the viewport.
#[derive(Debug, Deserialize, Serialize)]
pub struct RandomConfig {
    pub count: usize,
    pub mass: f64,
    #[serde(default)]
    pub charge_density: f64,
    /// Seed for reproducible placement; a fresh seed is drawn when omitted.
    pub seed: Option<u64>,
}

/// A command replayed right before the given frame is stepped.
#[derive(Debug, Deserialize, Serialize)]
pub struct ScriptEntry {
    pub frame: u64,
    #[serde(flatten)]
    pub command: SimCommand,
}

impl InitConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).context(ReadConfigSnafu { path })?;
        let config: InitConfig = toml::from_str(&content).context(ParseConfigSnafu { path })?;
        tracing::debug!(
            path = %path.display(),
            particles = config.particles.len(),
            random = config.random.len(),
            script = config.script.len(),
            "loaded scenario"
        );
        Ok(config)
    }

    /// Runtime configuration described by the `[simulation]` and `[spawn]` tables.
    pub fn sim_config(&self) -> Result<SimConfig, SimError> {
        Ok(SimConfig {
            viewport: self.simulation.viewport()?,
            force_multiplier: self.simulation.force_multiplier.unwrap_or_default(),
            spawn: self.spawn.normalized(),
        })
    }
}
