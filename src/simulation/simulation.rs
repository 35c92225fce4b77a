// simulation/simulation.rs
// Contains the Simulation struct and its lifecycle (new, step, spawn, clear, flip_force)

use super::update;
use crate::config::{ForceMultiplier, SimConfig, SpawnSettings, Viewport};
use crate::error::SimError;
use crate::particle::{Particle, ParticleId};
use crate::profile_scope;
use crate::vector::Vector2;

/// Owns every particle plus the global force sign. Single threaded: one
/// `step` per frame, nothing else touches the particles while it runs.
#[derive(Clone, Debug)]
pub struct Simulation {
    particles: Vec<Particle>,
    config: SimConfig,
    frame: u64,
    next_id: u64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            particles: Vec::new(),
            config: SimConfig::default(),
            frame: 0,
            next_id: 0,
        }
    }
}

impl Simulation {
    /// An empty simulation in the given viewport with the default force sign.
    pub fn new(viewport: Viewport) -> Result<Self, SimError> {
        Self::with_config(SimConfig {
            viewport,
            ..SimConfig::default()
        })
    }

    pub fn with_config(config: SimConfig) -> Result<Self, SimError> {
        config.viewport.validate()?;
        Ok(Self {
            config: SimConfig {
                spawn: config.spawn.normalized(),
                ..config
            },
            ..Self::default()
        })
    }

    /// Advance every particle by one frame, in spawn order. Each particle is
    /// updated in place, so later particles see the already-moved earlier ones.
    pub fn step(&mut self) {
        profile_scope!("simulation_step");
        let multiplier = self.config.force_multiplier;
        let viewport = self.config.viewport;
        for index in 0..self.particles.len() {
            update::update_particle(&mut self.particles, index, multiplier, &viewport);
        }
        self.frame += 1;
        tracing::trace!(frame = self.frame, particles = self.particles.len(), "stepped");
    }

    /// Append a particle at rest. There is no limit on the particle count.
    pub fn spawn(
        &mut self,
        x: f64,
        y: f64,
        mass: f64,
        charge_density: f64,
    ) -> Result<ParticleId, SimError> {
        let id = ParticleId(self.next_id);
        let particle = Particle::new(id, Vector2::new(x, y), mass, charge_density)?;
        self.next_id += 1;
        self.particles.push(particle);
        tracing::debug!(%id, x, y, mass, charge_density, "spawned particle");
        Ok(id)
    }

    /// Spawn with the current [`SpawnSettings`].
    pub fn spawn_with_settings(&mut self, x: f64, y: f64) -> Result<ParticleId, SimError> {
        let settings = self.config.spawn;
        self.spawn(x, y, settings.mass(), settings.charge_density())
    }

    /// Remove every particle. Ids are never reused.
    pub fn clear(&mut self) {
        let removed = self.particles.len();
        self.particles.clear();
        tracing::debug!(removed, "cleared particles");
    }

    /// Negate the sign of every pairwise force.
    pub fn flip_force(&mut self) {
        self.config.force_multiplier = self.config.force_multiplier.flipped();
        tracing::debug!(multiplier = self.config.force_multiplier.value(), "flipped force");
    }

    pub fn force_multiplier(&self) -> ForceMultiplier {
        self.config.force_multiplier
    }

    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn spawn_settings(&self) -> SpawnSettings {
        self.config.spawn
    }

    pub fn spawn_settings_mut(&mut self) -> &mut SpawnSettings {
        &mut self.config.spawn
    }

    /// Particles in spawn order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id() == id)
    }

    pub fn particle_mut(&mut self, id: ParticleId) -> Option<&mut Particle> {
        self.particles.iter_mut().find(|p| p.id() == id)
    }

    /// Number of frames stepped since creation.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
