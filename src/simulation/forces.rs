//! Pairwise force classification for the particle simulation.
//!
//! Every ordered pair of particles falls into exactly one case per frame:
//! coincident centres (ignored), overlapping discs (resolved as a collision)
//! or a long-range force that adds to the particle's net force.
//!
//! The force law is `-(q1 * q2) / dist / FORCE_DIVISOR * multiplier`: it falls
//! off with the distance, not its square. The resulting vector points along
//! the displacement toward `other` when positive, so with the default
//! multiplier like charges push apart and opposite charges pull together.

use crate::config::{self, ForceMultiplier};
use crate::particle::Particle;
use crate::vector::{Polar, Vector2};

/// How `other` affects `this` during the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interaction {
    /// Same centre, including a particle compared with itself.
    Coincident,
    /// The discs overlap; resolve a collision instead of applying a force.
    Contact {
        /// `other.pos - this.pos`
        displacement: Vector2,
        /// Heading of `displacement`
        angle: f64,
    },
    /// Force on `this`, pointing along the displacement for positive values.
    Force(Vector2),
}

/// Signed scalar force between two charges `dist` apart. Positive pulls
/// `this` toward `other`.
#[inline]
pub fn scalar_force(this_charge: f64, other_charge: f64, dist: f64, multiplier: ForceMultiplier) -> f64 {
    -(this_charge * other_charge) / dist / config::FORCE_DIVISOR * multiplier.value()
}

/// Classify the effect of `other` on `this`.
pub fn interaction(this: &Particle, other: &Particle, multiplier: ForceMultiplier) -> Interaction {
    let displacement = other.position() - this.position();
    let dist = displacement.mag();
    if dist == 0.0 {
        return Interaction::Coincident;
    }

    let angle = displacement.heading();
    if dist < (this.diameter() + other.diameter()) / 2.0 {
        return Interaction::Contact { displacement, angle };
    }

    let force = scalar_force(this.charge(), other.charge(), dist, multiplier);
    Interaction::Force(Vector2::from_angle_length(angle, force))
}
