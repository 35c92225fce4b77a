// particle/types.rs
// Contains the Particle struct, its derived quantities and the per-particle
// parts of the frame update (walls, integration, clamping, momentum)

use palette::Srgb;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{self, constrain, Viewport};
use crate::error::{InvalidMassSnafu, NonFiniteSnafu, SimError};
use crate::vector::Vector2;

/// Stable handle returned when a particle is spawned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticleId(pub u64);

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A charged disc. Mass and charge density are fixed at creation; diameter
/// and charge are derived from them once.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    id: ParticleId,
    pos: Vector2,
    /// Distance per frame.
    vel: Vector2,
    acc: Vector2,
    momentum: Vector2,
    mass: f64,
    charge_density: f64,
    charge: f64,
    diameter: f64,
    collisions: u64,
}

impl Particle {
    /// Creates a particle at rest. Rejects non-positive or non-finite mass and
    /// non-finite position or charge density.
    pub fn new(
        id: ParticleId,
        pos: Vector2,
        mass: f64,
        charge_density: f64,
    ) -> Result<Self, SimError> {
        if !(mass.is_finite() && mass > 0.0) {
            return InvalidMassSnafu { mass }.fail();
        }
        if !(pos.x.is_finite() && pos.y.is_finite()) {
            return NonFiniteSnafu { what: "position" }.fail();
        }
        if !charge_density.is_finite() {
            return NonFiniteSnafu {
                what: "charge density",
            }
            .fail();
        }

        Ok(Self {
            id,
            pos,
            vel: Vector2::zero(),
            acc: Vector2::zero(),
            momentum: Vector2::zero(),
            mass,
            charge_density,
            charge: charge_density * mass,
            diameter: mass.sqrt() * config::DIAMETER_SCALE,
            collisions: 0,
        })
    }

    pub fn id(&self) -> ParticleId {
        self.id
    }

    pub fn position(&self) -> Vector2 {
        self.pos
    }

    pub fn velocity(&self) -> Vector2 {
        self.vel
    }

    pub fn set_velocity(&mut self, vel: Vector2) {
        self.vel = vel;
    }

    /// Acceleration applied during the most recent frame.
    pub fn acceleration(&self) -> Vector2 {
        self.acc
    }

    /// `velocity * mass`, refreshed at the end of every frame.
    pub fn momentum(&self) -> Vector2 {
        self.momentum
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn charge_density(&self) -> f64 {
        self.charge_density
    }

    pub fn charge(&self) -> f64 {
        self.charge
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    /// Number of collision resolutions this particle took part in. Every
    /// contact is visited once from each side per frame, so it counts twice.
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.mag_sq()
    }

    /// Fill colour: red for positive charge density, cyan for negative,
    /// grey when neutral.
    pub fn color(&self) -> Srgb<u8> {
        let channel = |value: f64| constrain(value.round(), 0.0, 255.0) as u8;
        Srgb::new(
            channel(128.0 + self.charge_density),
            channel(128.0 - self.charge_density),
            channel(128.0 - self.charge_density),
        )
    }

    pub(crate) fn record_collision(&mut self) {
        self.collisions += 1;
    }

    pub(crate) fn add_velocity(&mut self, delta: Vector2) {
        self.vel += delta;
    }

    pub(crate) fn sub_velocity(&mut self, delta: Vector2) {
        self.vel -= delta;
    }

    /// Flips the velocity component heading into a wall once the particle is
    /// within `WALL_REFLECT_MARGIN` of it. The bottom wall sits on top of the
    /// control band.
    pub fn reflect_off_walls(&mut self, viewport: &Viewport) {
        let half = self.diameter / 2.0;
        let margin = config::WALL_REFLECT_MARGIN;

        if (self.pos.x < half + margin && self.vel.x < 0.0)
            || (self.pos.x > viewport.width - half - margin && self.vel.x > 0.0)
        {
            self.vel.x *= -1.0;
        }

        if (self.pos.y < half + margin && self.vel.y < 0.0)
            || (self.pos.y > viewport.floor() - half - margin && self.vel.y > 0.0)
        {
            self.vel.y *= -1.0;
        }
    }

    /// `a = F / m`, `v += a`, `x += v`, one frame at a time.
    pub fn integrate(&mut self, net_force: Vector2) {
        self.acc = Vector2::new(net_force.x / self.mass, net_force.y / self.mass);
        self.vel += self.acc;
        self.pos += self.vel;
    }

    /// Forces the centre back inside the hard bounds of the viewport.
    pub fn clamp_to(&mut self, viewport: &Viewport) {
        let (min_x, max_x) = viewport.x_bounds(self.diameter);
        let (min_y, max_y) = viewport.y_bounds(self.diameter);
        self.pos.x = constrain(self.pos.x, min_x, max_x);
        self.pos.y = constrain(self.pos.y, min_y, max_y);
    }

    /// Recomputes momentum from velocity and sends velocity through the same
    /// multiply/divide round trip, so its value carries that rounding.
    pub fn refresh_momentum(&mut self) {
        self.momentum = self.vel * self.mass;
        self.vel = self.momentum / self.mass;
    }
}
