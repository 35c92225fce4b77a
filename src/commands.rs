// commands.rs
// Handles processing of SimCommand messages for the simulation

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::particle::ParticleId;
use crate::simulation::Simulation;

/// Everything a presentation shell can ask of the simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SimCommand {
    /// Pointer click: spawns with the current spawn settings when the click
    /// lands above the control band, otherwise it is ignored.
    Click { x: f64, y: f64 },
    /// Spawn with explicit parameters, bypassing the spawn settings.
    Spawn {
        x: f64,
        y: f64,
        mass: f64,
        charge_density: f64,
    },
    /// Negate the global force sign.
    FlipForce,
    /// Remove every particle.
    Clear,
    /// Advance one frame.
    Step,
    /// Move the mass control; the value is rounded and clamped.
    SetMass { mass: f64 },
    /// Move the charge density control; the value is rounded and clamped.
    SetChargeDensity { charge_density: f64 },
}

/// Process a single SimCommand. Returns the id of a newly spawned particle,
/// if the command spawned one.
pub fn process_command(
    cmd: SimCommand,
    simulation: &mut Simulation,
) -> Result<Option<ParticleId>, SimError> {
    match cmd {
        SimCommand::Click { x, y } => handle_click(simulation, x, y),
        SimCommand::Spawn {
            x,
            y,
            mass,
            charge_density,
        } => simulation.spawn(x, y, mass, charge_density).map(Some),
        SimCommand::FlipForce => {
            simulation.flip_force();
            Ok(None)
        }
        SimCommand::Clear => {
            simulation.clear();
            Ok(None)
        }
        SimCommand::Step => {
            simulation.step();
            Ok(None)
        }
        SimCommand::SetMass { mass } => {
            simulation.spawn_settings_mut().set_mass(mass);
            tracing::debug!(mass = simulation.spawn_settings().mass(), "spawn mass set");
            Ok(None)
        }
        SimCommand::SetChargeDensity { charge_density } => {
            simulation
                .spawn_settings_mut()
                .set_charge_density(charge_density);
            tracing::debug!(
                charge_density = simulation.spawn_settings().charge_density(),
                "spawn charge density set"
            );
            Ok(None)
        }
    }
}

fn handle_click(
    simulation: &mut Simulation,
    x: f64,
    y: f64,
) -> Result<Option<ParticleId>, SimError> {
    if !simulation.viewport().in_particle_area(y) {
        tracing::warn!(x, y, "click on the control band ignored");
        return Ok(None);
    }
    simulation.spawn_with_settings(x, y).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ForceMultiplier, Viewport};

    fn sim() -> Simulation {
        Simulation::new(Viewport::default()).unwrap()
    }

    #[test]
    fn click_spawns_with_current_settings() {
        let mut sim = sim();
        process_command(SimCommand::SetMass { mass: 6.7 }, &mut sim).unwrap();
        process_command(
            SimCommand::SetChargeDensity {
                charge_density: -200.0,
            },
            &mut sim,
        )
        .unwrap();

        let id = process_command(SimCommand::Click { x: 300.0, y: 200.0 }, &mut sim)
            .unwrap()
            .expect("click above the band spawns");
        let p = sim.particle(id).unwrap();
        assert_eq!(p.mass(), 7.0);
        assert_eq!(p.charge_density(), -128.0);
    }

    #[test]
    fn click_on_control_band_is_ignored() {
        let mut sim = sim();
        let spawned = process_command(SimCommand::Click { x: 300.0, y: 500.0 }, &mut sim).unwrap();
        assert!(spawned.is_none());
        assert!(sim.is_empty());
    }

    #[test]
    fn explicit_spawn_reports_invalid_mass() {
        let mut sim = sim();
        let result = process_command(
            SimCommand::Spawn {
                x: 10.0,
                y: 10.0,
                mass: 0.0,
                charge_density: 1.0,
            },
            &mut sim,
        );
        assert!(result.is_err());
        assert!(sim.is_empty());
    }

    #[test]
    fn flip_clear_and_step_dispatch() {
        let mut sim = sim();
        process_command(SimCommand::Click { x: 100.0, y: 100.0 }, &mut sim).unwrap();
        process_command(SimCommand::FlipForce, &mut sim).unwrap();
        assert_eq!(sim.force_multiplier(), ForceMultiplier::Negative);
        process_command(SimCommand::Step, &mut sim).unwrap();
        assert_eq!(sim.frame(), 1);
        process_command(SimCommand::Clear, &mut sim).unwrap();
        assert!(sim.is_empty());
    }

    #[test]
    fn commands_deserialize_from_tagged_tables() {
        let click: SimCommand = toml::from_str("action = \"click\"\nx = 10.0\ny = 20.0").unwrap();
        assert_eq!(click, SimCommand::Click { x: 10.0, y: 20.0 });
        let flip: SimCommand = toml::from_str("action = \"flip_force\"").unwrap();
        assert_eq!(flip, SimCommand::FlipForce);
    }
}
