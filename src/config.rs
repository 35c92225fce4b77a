// Centralized configuration for simulation parameters

use serde::{Deserialize, Serialize};

use crate::error::{InvalidViewportSnafu, SimError};

// ====================
// Particle Parameters
// ====================
/// Rendered and collision diameter per square root of mass.
pub const DIAMETER_SCALE: f64 = 10.0;

// ====================
// Force Parameters
// ====================
/// Divisor applied to `q1 * q2 / dist` to get the pairwise force.
pub const FORCE_DIVISOR: f64 = 1000.0;
/// Divisor applied to the closing speed to get the collision impulse.
pub const COLLISION_IMPULSE_DIVISOR: f64 = 5.0;

// ====================
// Wall Parameters
// ====================
/// Distance from a wall (beyond the particle radius) at which velocity reflects.
pub const WALL_REFLECT_MARGIN: f64 = 5.0;
/// Distance from a wall (beyond the particle radius) that positions are clamped to.
pub const WALL_CLAMP_MARGIN: f64 = 4.0;
/// Height of the band at the bottom of the viewport reserved for controls.
pub const CONTROL_BAND_HEIGHT: f64 = 150.0;

// ====================
// Viewport Defaults
// ====================
pub const DEFAULT_WIDTH: f64 = 1000.0;
pub const DEFAULT_HEIGHT: f64 = 600.0;

// ====================
// Spawn Controls
// ====================
pub const MIN_SPAWN_MASS: f64 = 1.0;
pub const MAX_SPAWN_MASS: f64 = 10.0;
pub const MIN_CHARGE_DENSITY: f64 = -128.0;
pub const MAX_CHARGE_DENSITY: f64 = 128.0;

/// Clamp without panicking when `low > high`; `low` wins, like a UI constrain.
#[inline]
pub fn constrain(value: f64, low: f64, high: f64) -> f64 {
    value.min(high).max(low)
}

/// Drawing area the particles live in. The bottom `CONTROL_BAND_HEIGHT`
/// units belong to the controls and are never entered by particles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self, SimError> {
        let viewport = Self { width, height };
        viewport.validate()?;
        Ok(viewport)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let usable = self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > CONTROL_BAND_HEIGHT;
        if !usable {
            return InvalidViewportSnafu {
                width: self.width,
                height: self.height,
            }
            .fail();
        }
        Ok(())
    }

    /// The y coordinate where particle space ends and the control band begins.
    pub fn floor(&self) -> f64 {
        self.height - CONTROL_BAND_HEIGHT
    }

    /// Whether a click at height `y` lands in particle space rather than on the controls.
    pub fn in_particle_area(&self, y: f64) -> bool {
        y < self.floor()
    }

    /// Hard horizontal bounds for a particle centre of the given diameter.
    pub fn x_bounds(&self, diameter: f64) -> (f64, f64) {
        let half = diameter / 2.0;
        (
            half + WALL_CLAMP_MARGIN,
            self.width - half - WALL_CLAMP_MARGIN,
        )
    }

    /// Hard vertical bounds for a particle centre of the given diameter.
    pub fn y_bounds(&self, diameter: f64) -> (f64, f64) {
        let half = diameter / 2.0;
        (
            half + WALL_CLAMP_MARGIN,
            self.floor() - half - WALL_CLAMP_MARGIN,
        )
    }
}

/// Global sign applied to every pairwise force.
///
/// With `Positive` like charges push apart and opposite charges pull
/// together; `Negative` swaps that for every pair at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForceMultiplier {
    #[default]
    Positive,
    Negative,
}

impl ForceMultiplier {
    pub fn value(self) -> f64 {
        match self {
            ForceMultiplier::Positive => 1.0,
            ForceMultiplier::Negative => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            ForceMultiplier::Positive => ForceMultiplier::Negative,
            ForceMultiplier::Negative => ForceMultiplier::Positive,
        }
    }
}

/// Mass and charge density given to the next particle spawned by a click.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnSettings {
    mass: f64,
    charge_density: f64,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            mass: MIN_SPAWN_MASS,
            charge_density: 0.0,
        }
    }
}

impl SpawnSettings {
    pub fn new(mass: f64, charge_density: f64) -> Self {
        let mut settings = Self::default();
        settings.set_mass(mass);
        settings.set_charge_density(charge_density);
        settings
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn charge_density(&self) -> f64 {
        self.charge_density
    }

    /// Rounds to a whole mass in `MIN_SPAWN_MASS..=MAX_SPAWN_MASS`.
    pub fn set_mass(&mut self, mass: f64) {
        if mass.is_finite() {
            self.mass = constrain(mass.round(), MIN_SPAWN_MASS, MAX_SPAWN_MASS);
        }
    }

    /// Rounds to a whole charge density in `MIN_CHARGE_DENSITY..=MAX_CHARGE_DENSITY`.
    pub fn set_charge_density(&mut self, charge_density: f64) {
        if charge_density.is_finite() {
            self.charge_density = constrain(
                charge_density.round(),
                MIN_CHARGE_DENSITY,
                MAX_CHARGE_DENSITY,
            );
        }
    }

    /// Re-applies rounding and clamping, e.g. after deserializing raw values.
    pub fn normalized(self) -> Self {
        Self::new(self.mass, self.charge_density)
    }
}

/// Runtime configuration owned by a [`crate::simulation::Simulation`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub viewport: Viewport,
    pub force_multiplier: ForceMultiplier,
    pub spawn: SpawnSettings,
}
