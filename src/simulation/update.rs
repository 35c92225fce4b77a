// simulation/update.rs
// The full per-particle frame update

use super::collision;
use super::forces::{self, Interaction};
use crate::config::{ForceMultiplier, Viewport};
use crate::particle::Particle;
use crate::profile_scope;
use crate::vector::Vector2;

/// Advance `particles[index]` by one frame against every particle in the slice.
///
/// The scan covers the whole slice, the particle itself included (it is
/// skipped as coincident), so a contact between two particles is visited from
/// both sides within a frame. Collisions write to both particles' velocities
/// immediately; later pairs in the same scan see those new velocities.
pub fn update_particle(
    particles: &mut [Particle],
    index: usize,
    multiplier: ForceMultiplier,
    viewport: &Viewport,
) {
    profile_scope!("update_particle");
    let mut net_force = Vector2::zero();

    for other in 0..particles.len() {
        match forces::interaction(&particles[index], &particles[other], multiplier) {
            Interaction::Coincident => {}
            Interaction::Contact { displacement, angle } => {
                collision::resolve(particles, index, other, displacement, angle);
            }
            Interaction::Force(force) => net_force += force,
        }
    }

    let particle = &mut particles[index];
    particle.reflect_off_walls(viewport);
    particle.integrate(net_force);
    particle.clamp_to(viewport);
    particle.refresh_momentum();
}
