//! Error types for lattice-life.
//!
//! Only configuration and lifecycle misuse are recoverable. Shape mismatches
//! and out-of-range coordinates are programming errors and panic.

use thiserror::Error;

/// Lattice axis, used in configuration errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Invalid [`GameOptions`](crate::config::GameOptions).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A lattice dimension was zero.
    #[error("{axis}-cell count must be positive")]
    ZeroDimension {
        /// Offending axis.
        axis: Axis,
    },

    /// Density outside `[0, 1]` or not finite.
    #[error("density must be within [0, 1], got {0}")]
    InvalidDensity(f64),

    /// The lattice would hold more cells than can be allocated.
    #[error("lattice of {x}x{y}x{z} cells is too large")]
    TooLarge { x: usize, y: usize, z: usize },

    /// A transition pool needs at least one thread.
    #[error("thread count must be at least 1")]
    ZeroThreads,
}

/// Errors returned by [`Simulation`](crate::simulation::Simulation).
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// `start` was called on a running simulation. Call `stop` first.
    #[error("simulation is already running")]
    AlreadyRunning,

    /// The transition thread pool could not be built.
    #[error("failed to build transition thread pool: {0}")]
    ThreadPool(String),
}

impl From<rayon::ThreadPoolBuildError> for SimulationError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        SimulationError::ThreadPool(err.to_string())
    }
}
