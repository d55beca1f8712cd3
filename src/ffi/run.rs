//! Start, stop, and tick.

use super::{Handle, LG_ERR_CONFIG, LG_ERR_NULL, LG_ERR_POOL, LG_ERR_RUNNING, LG_OK};
use crate::config::GameOptions;
use crate::error::SimulationError;

/// Starts a run.
///
/// A cell count or thread count of 0 and a negative or NaN density select
/// the default for that option.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Handle, or null
///
/// # Returns
/// `LG_OK`, `LG_ERR_NULL`, `LG_ERR_CONFIG`, `LG_ERR_RUNNING` or `LG_ERR_POOL`.
#[no_mangle]
pub unsafe extern "C" fn lg_start(
    ptr: *mut Handle,
    x_cells: u32,
    y_cells: u32,
    z_cells: u32,
    density: f64,
    threads: u32,
) -> i32 {
    if ptr.is_null() {
        return LG_ERR_NULL;
    }

    let mut builder = GameOptions::builder();
    if x_cells > 0 {
        builder = builder.x_cells(x_cells as usize);
    }
    if y_cells > 0 {
        builder = builder.y_cells(y_cells as usize);
    }
    if z_cells > 0 {
        builder = builder.z_cells(z_cells as usize);
    }
    if density >= 0.0 {
        builder = builder.density(density);
    }
    if threads > 0 {
        builder = builder.threads(threads as usize);
    }

    let options = match builder.build() {
        Ok(options) => options,
        Err(_) => return LG_ERR_CONFIG,
    };

    match (*ptr).start(options) {
        Ok(()) => LG_OK,
        Err(SimulationError::Config(_)) => LG_ERR_CONFIG,
        Err(SimulationError::AlreadyRunning) => LG_ERR_RUNNING,
        Err(SimulationError::ThreadPool(_)) => LG_ERR_POOL,
    }
}

/// Stops the run. Safe to call when idle.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Handle, or null
#[no_mangle]
pub unsafe extern "C" fn lg_stop(ptr: *mut Handle) {
    if ptr.is_null() {
        return;
    }
    (*ptr).stop();
}

/// Advances one generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Handle, or null
///
/// # Returns
/// 1 if a generation was computed, 0 if idle or null.
#[no_mangle]
pub unsafe extern "C" fn lg_tick(ptr: *mut Handle) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).tick().is_some() as u8
}
