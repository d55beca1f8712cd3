//! C FFI layer for non-Rust presentation hosts.
//!
//! This module exports C ABI functions for a renderer written in another
//! language. All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in `simulation` and `automaton`. These functions are
//! thin wrappers that handle null checks, coordinate clamping, and C-to-Rust
//! conversions. Unlike the Rust API they never panic on bad coordinates or
//! oversized lattices.

pub mod grid;
pub mod lifecycle;
pub mod region;
pub mod run;

use rand_chacha::ChaCha8Rng;

use crate::simulation::Simulation;

/// Opaque handle type behind every `lg_*` pointer.
///
/// ChaCha8 output is stable across releases, so a seed passed to
/// `lg_create_seeded` always yields the same initial fields.
pub type Handle = Simulation<ChaCha8Rng>;

/// Success.
pub const LG_OK: i32 = 0;
/// Null handle or buffer.
pub const LG_ERR_NULL: i32 = 1;
/// Options failed validation.
pub const LG_ERR_CONFIG: i32 = 2;
/// `lg_start` on a running handle.
pub const LG_ERR_RUNNING: i32 = 3;
/// Thread pool could not be created.
pub const LG_ERR_POOL: i32 = 4;

pub use grid::{lg_get_cell, lg_get_dimensions, lg_population};
pub use lifecycle::{lg_create, lg_create_seeded, lg_destroy, lg_get_generation, lg_is_running};
pub use region::lg_extract_region;
pub use run::{lg_start, lg_stop, lg_tick};
