//! Handle creation, destruction, and status queries.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::Handle;
use crate::simulation::Simulation;

/// Creates a new idle simulation and returns an opaque pointer.
///
/// # Safety
/// The returned pointer must eventually be freed with `lg_destroy()`.
#[no_mangle]
pub extern "C" fn lg_create() -> *mut Handle {
    Box::into_raw(Box::new(Simulation::with_rng(ChaCha8Rng::from_entropy())))
}

/// Creates a new idle simulation whose initial fields are reproducible.
///
/// # Safety
/// The returned pointer must eventually be freed with `lg_destroy()`.
#[no_mangle]
pub extern "C" fn lg_create_seeded(seed: u64) -> *mut Handle {
    Box::into_raw(Box::new(Simulation::with_rng(ChaCha8Rng::seed_from_u64(seed))))
}

/// Destroys a simulation, stopping it first if it is running.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `lg_create*()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn lg_destroy(ptr: *mut Handle) {
    if !ptr.is_null() {
        let mut sim = Box::from_raw(ptr);
        sim.stop();
    }
}

/// Gets the generation counter of the current run.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Handle, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null or the simulation is idle.
#[no_mangle]
pub unsafe extern "C" fn lg_get_generation(ptr: *const Handle) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

/// # Safety
/// - `ptr` must be a valid pointer to a Handle, or null
///
/// # Returns
/// 1 if running, 0 if idle or null.
#[no_mangle]
pub unsafe extern "C" fn lg_is_running(ptr: *const Handle) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).is_running() as u8
}
