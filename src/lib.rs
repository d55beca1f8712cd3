//! Lattice Life - 2D/3D Game-of-Life engine
//!
//! A generalized Game of Life over a fixed `nx * ny * nz` lattice: B6/S567
//! over 26 neighbors when the lattice has depth, classic B3/S23 on a single
//! layer. The outermost layer is never recomputed and stays dead.
//!
//! [`Simulation`] owns a run and its two lattice buffers; [`StepLoop`] feeds
//! it from a host's frame callbacks. The `ffi` module exposes the same
//! lifecycle through a C ABI for renderers written in other languages.

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod lattice;
pub mod simulation;
pub mod step_loop;

pub use automaton::{
    create_new_generation, create_new_generation_par, generate_field, LatticeView, RuleSet,
};
pub use config::{GameOptions, GameOptionsBuilder};
pub use error::{Axis, ConfigError, SimulationError};
pub use lattice::Lattice;
pub use simulation::Simulation;
pub use step_loop::{FrameId, FrameScheduler, ManualScheduler, Renderer, StepLoop};
