// diagnostics.rs
// Per-frame summary numbers for logging and the JSON stats stream

use serde::Serialize;

use crate::simulation::Simulation;

/// Snapshot of whole-simulation quantities after a frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FrameStats {
    pub frame: u64,
    pub particles: usize,
    /// Sum of every particle's collision counter; each contact visit adds 2.
    pub total_collisions: u64,
    pub kinetic_energy: f64,
    pub momentum_x: f64,
    pub momentum_y: f64,
    pub force_multiplier: f64,
}

impl FrameStats {
    pub fn capture(simulation: &Simulation) -> Self {
        let mut stats = Self {
            frame: simulation.frame(),
            particles: simulation.len(),
            force_multiplier: simulation.force_multiplier().value(),
            ..Self::default()
        };
        for p in simulation.particles() {
            stats.total_collisions += p.collisions();
            stats.kinetic_energy += p.kinetic_energy();
            stats.momentum_x += p.momentum().x;
            stats.momentum_y += p.momentum().y;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Viewport;

    #[test]
    fn empty_simulation_reports_zeroes() {
        let sim = Simulation::new(Viewport::default()).unwrap();
        let stats = FrameStats::capture(&sim);
        assert_eq!(stats.particles, 0);
        assert_eq!(stats.total_collisions, 0);
        assert_eq!(stats.kinetic_energy, 0.0);
        assert_eq!(stats.force_multiplier, 1.0);
    }

    #[test]
    fn sums_over_particles() {
        let mut sim = Simulation::new(Viewport::default()).unwrap();
        sim.spawn(200.0, 200.0, 2.0, 0.0).unwrap();
        sim.spawn(205.0, 200.0, 1.0, 0.0).unwrap();
        sim.spawn(600.0, 300.0, 1.0, 0.0).unwrap();

        sim.step();
        let stats = FrameStats::capture(&sim);
        assert_eq!(stats.frame, 1);
        assert_eq!(stats.particles, 3);
        // one resting contact visited from both sides
        assert_eq!(stats.total_collisions, 4);
        assert_eq!(stats.kinetic_energy, 0.0);
    }

    #[test]
    fn serializes_as_flat_json() {
        let json = serde_json::to_value(FrameStats::default()).unwrap();
        assert_eq!(json["particles"], 0);
        assert_eq!(json["momentum_x"], 0.0);
    }
}
