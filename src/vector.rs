//! Two-dimensional vector helpers.
//!
//! The simulation works on [`ultraviolet::DVec2`], which already provides
//! addition, subtraction, scaling, division, `mag` and `dot` as operators and
//! methods. `DVec2` is `Copy` and every operator returns a fresh value, so a
//! vector read during a force or collision computation can never be mutated
//! behind the caller's back. The [`Polar`] trait adds the two polar-form
//! operations the physics needs.

pub use ultraviolet::DVec2 as Vector2;

/// Polar-form construction and inspection.
pub trait Polar {
    /// Angle of the vector in radians, `atan2(y, x)`.
    fn heading(&self) -> f64;

    /// Builds `(length * cos(angle), length * sin(angle))`. A negative length
    /// points the result the opposite way.
    fn from_angle_length(angle: f64, length: f64) -> Self;
}

impl Polar for Vector2 {
    #[inline]
    fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }

    #[inline]
    fn from_angle_length(angle: f64, length: f64) -> Self {
        Vector2::new(length * angle.cos(), length * angle.sin())
    }
}
