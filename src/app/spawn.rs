use crate::config::{self, constrain};
use crate::error::SimError;
use crate::init_config::{InitConfig, ParticleConfig, RandomConfig};
use crate::particle::ParticleId;
use crate::simulation::Simulation;
use crate::vector::Vector2;

/// Build a simulation from a scenario: config first, then listed particles
/// in file order, then the random batches.
pub fn build_simulation(config: &InitConfig) -> Result<Simulation, SimError> {
    let mut simulation = Simulation::with_config(config.sim_config()?)?;
    for particle in &config.particles {
        add_particle(&mut simulation, particle)?;
    }
    for batch in &config.random {
        add_random(&mut simulation, batch)?;
    }
    tracing::info!(
        particles = simulation.len(),
        width = simulation.viewport().width,
        height = simulation.viewport().height,
        "simulation ready"
    );
    Ok(simulation)
}

pub fn add_particle(
    simulation: &mut Simulation,
    particle: &ParticleConfig,
) -> Result<ParticleId, SimError> {
    let id = simulation.spawn(particle.x, particle.y, particle.mass, particle.charge_density)?;
    if let Some(p) = simulation.particle_mut(id) {
        p.set_velocity(Vector2::new(particle.vx, particle.vy));
    }
    Ok(id)
}

/// Scatter `batch.count` particles uniformly over the area their centres may
/// occupy, so none of them starts outside the hard bounds.
pub fn add_random(
    simulation: &mut Simulation,
    batch: &RandomConfig,
) -> Result<Vec<ParticleId>, SimError> {
    let mut rng = match batch.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let viewport = simulation.viewport();
    let diameter = batch.mass.sqrt() * config::DIAMETER_SCALE;
    let (min_x, max_x) = viewport.x_bounds(diameter);
    let (min_y, max_y) = viewport.y_bounds(diameter);

    let mut ids = Vec::with_capacity(batch.count);
    for _ in 0..batch.count {
        let x = between(&mut rng, min_x, max_x);
        let y = between(&mut rng, min_y, max_y);
        ids.push(simulation.spawn(x, y, batch.mass, batch.charge_density)?);
    }
    Ok(ids)
}

fn between(rng: &mut fastrand::Rng, low: f64, high: f64) -> f64 {
    constrain(low + rng.f64() * (high - low), low, high)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(count: usize, seed: Option<u64>) -> RandomConfig {
        RandomConfig {
            count,
            mass: 4.0,
            charge_density: -8.0,
            seed,
        }
    }

    #[test]
    fn builds_listed_particles_with_velocity() {
        let config: InitConfig = toml::from_str(
            "[[particles]]\nx = 200.0\ny = 300.0\nmass = 10.0\nvx = 5.0\n\n\
             [[particles]]\nx = 800.0\ny = 300.0\nmass = 1.0\nvx = -5.0",
        )
        .unwrap();
        let sim = build_simulation(&config).unwrap();
        assert_eq!(sim.len(), 2);
        assert_eq!(sim.particles()[0].velocity(), Vector2::new(5.0, 0.0));
        assert_eq!(sim.particles()[1].velocity(), Vector2::new(-5.0, 0.0));
        assert_eq!(sim.particles()[0].mass(), 10.0);
    }

    #[test]
    fn random_batch_stays_in_bounds() {
        let mut sim = Simulation::default();
        let ids = add_random(&mut sim, &batch(50, Some(3))).unwrap();
        assert_eq!(ids.len(), 50);
        let viewport = sim.viewport();
        for p in sim.particles() {
            let (min_x, max_x) = viewport.x_bounds(p.diameter());
            let (min_y, max_y) = viewport.y_bounds(p.diameter());
            assert!((min_x..=max_x).contains(&p.position().x));
            assert!((min_y..=max_y).contains(&p.position().y));
            assert_eq!(p.charge(), -32.0);
        }
    }

    #[test]
    fn seeded_batches_are_reproducible() {
        let mut first = Simulation::default();
        let mut second = Simulation::default();
        add_random(&mut first, &batch(10, Some(99))).unwrap();
        add_random(&mut second, &batch(10, Some(99))).unwrap();
        let positions = |sim: &Simulation| -> Vec<Vector2> {
            sim.particles().iter().map(|p| p.position()).collect()
        };
        assert_eq!(positions(&first), positions(&second));
    }

    #[test]
    fn invalid_batch_mass_is_an_error() {
        let mut sim = Simulation::default();
        let bad = RandomConfig {
            count: 3,
            mass: 0.0,
            charge_density: 0.0,
            seed: Some(1),
        };
        assert!(matches!(
            add_random(&mut sim, &bad),
            Err(SimError::InvalidMass { .. })
        ));
        assert!(sim.is_empty());
    }
}
