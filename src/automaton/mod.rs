//! Core automaton logic.
//!
//! This module contains lattice initialization, the birth/survival rules,
//! generation stepping, and the read-only view handed to renderers.
//! The simulation loop and the FFI layer call into these functions.

pub mod grid;
pub mod rules;
pub mod stepping;
pub mod view;

pub use grid::{count_neighbors_2d, count_neighbors_3d, generate_field};
pub use rules::RuleSet;
pub use stepping::{create_new_generation, create_new_generation_par};
pub use view::LatticeView;
