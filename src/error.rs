//! Errors for this library

use std::path::PathBuf;

/// All the known errors returned by this crate.
///
/// The physics step itself is total; errors only come from the boundary,
/// i.e. spawning, viewport setup and loading scenario files.
#[derive(Debug, snafu::Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SimError {
    /// A particle must have a positive, finite mass.
    #[snafu(display("particle mass must be positive and finite, got {mass}"))]
    InvalidMass {
        /// The rejected mass
        mass: f64,
    },

    /// Positions and charge densities must be finite numbers.
    #[snafu(display("{what} must be finite"))]
    NonFinite {
        /// Which input was not finite
        what: &'static str,
    },

    /// The viewport must leave room for particles above the control band.
    #[snafu(display("viewport {width}x{height} leaves no particle space"))]
    InvalidViewport {
        /// Requested width
        width: f64,
        /// Requested height
        height: f64,
    },

    /// The scenario file could not be read.
    #[snafu(display("could not read scenario file {}", path.display()))]
    ReadConfig {
        /// Path of the scenario file
        path: PathBuf,
        /// The parent error type
        source: std::io::Error,
    },

    /// The scenario file is not valid TOML for a scenario.
    #[snafu(display("could not parse scenario file {}", path.display()))]
    ParseConfig {
        /// Path of the scenario file
        path: PathBuf,
        /// The parent error type
        source: toml::de::Error,
    },
}
