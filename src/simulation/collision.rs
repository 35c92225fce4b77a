// simulation/collision.rs
// Contains collision resolution between two overlapping particles

use crate::config;
use crate::particle::Particle;
use crate::vector::{Polar, Vector2};

/// Resolve a contact between `particles[i]` and `particles[j]`.
///
/// If `i` is closing in on `j` an impulse along `angle` with magnitude
/// `closing_speed / COLLISION_IMPULSE_DIVISOR` is split between them, each
/// side scaled by `1 / (2 * mass)`. This is not an elastic solver: kinetic
/// energy is not preserved. Both collision counters are bumped whether or not
/// an impulse was applied.
pub fn resolve(particles: &mut [Particle], i: usize, j: usize, displacement: Vector2, angle: f64) {
    let relative_vel = particles[i].velocity() - particles[j].velocity();
    let closing_speed = relative_vel.dot(displacement);

    if closing_speed > 0.0 {
        let impulse = Vector2::from_angle_length(angle, closing_speed / config::COLLISION_IMPULSE_DIVISOR);
        let mass_i = particles[i].mass();
        let mass_j = particles[j].mass();
        particles[i].sub_velocity(impulse / (mass_i * 2.0));
        particles[j].add_velocity(impulse / (mass_j * 2.0));
    }

    particles[i].record_collision();
    particles[j].record_collision();
}
