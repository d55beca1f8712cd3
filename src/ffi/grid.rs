//! Cell access and lattice queries on the current generation.

use super::{Handle, LG_ERR_NULL, LG_OK};

/// Gets the state of a cell in the current generation (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Handle, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, idle, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn lg_get_cell(ptr: *const Handle, x: i32, y: i32, z: i32) -> u8 {
    if ptr.is_null() || x < 0 || y < 0 || z < 0 {
        return 0;
    }

    let view = match (*ptr).current() {
        Some(view) => view,
        None => return 0,
    };
    let (x, y, z) = (x as usize, y as usize, z as usize);
    if !view.lattice().in_bounds(x, y, z) {
        return 0;
    }

    view.get(x, y, z)
}

/// Writes `[nx, ny, nz]` of the current run into `out_dims`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Handle, or null
/// - `out_dims` must point to at least 3 writable `u32`s, or be null
///
/// # Returns
/// `LG_OK`, or `LG_ERR_NULL` if either pointer is null or the simulation is
/// idle (in which case `out_dims` is untouched).
#[no_mangle]
pub unsafe extern "C" fn lg_get_dimensions(ptr: *const Handle, out_dims: *mut u32) -> i32 {
    if ptr.is_null() || out_dims.is_null() {
        return LG_ERR_NULL;
    }

    let view = match (*ptr).current() {
        Some(view) => view,
        None => return LG_ERR_NULL,
    };
    let (nx, ny, nz) = view.dimensions();
    let out = std::slice::from_raw_parts_mut(out_dims, 3);
    out[0] = nx as u32;
    out[1] = ny as u32;
    out[2] = nz as u32;

    LG_OK
}

/// Counts alive cells in the current generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Handle, or null
///
/// # Returns
/// The population, or 0 if null or idle.
#[no_mangle]
pub unsafe extern "C" fn lg_population(ptr: *const Handle) -> u64 {
    if ptr.is_null() {
        return 0;
    }

    (*ptr)
        .current()
        .map(|view| view.population() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::lifecycle::{lg_create_seeded, lg_destroy};
    use crate::ffi::run::{lg_start, lg_stop};
    use std::ptr;

    #[test]
    fn test_get_cell_bounds() {
        unsafe {
            let sim = lg_create_seeded(2);
            lg_start(sim, 4, 4, 4, 1.0, 0);

            assert_eq!(lg_get_cell(sim, 0, 0, 0), 1);
            assert_eq!(lg_get_cell(sim, 3, 3, 3), 1);

            // Out of bounds reads return 0
            assert_eq!(lg_get_cell(sim, 4, 0, 0), 0);
            assert_eq!(lg_get_cell(sim, -1, 0, 0), 0);
            assert_eq!(lg_get_cell(ptr::null(), 0, 0, 0), 0);

            lg_stop(sim);
            assert_eq!(lg_get_cell(sim, 0, 0, 0), 0);

            lg_destroy(sim);
        }
    }

    #[test]
    fn test_dimensions_and_population() {
        unsafe {
            let sim = lg_create_seeded(2);
            let mut dims = [0u32; 3];
            assert_eq!(lg_get_dimensions(sim, dims.as_mut_ptr()), LG_ERR_NULL);

            lg_start(sim, 6, 5, 1, 1.0, 0);
            assert_eq!(lg_get_dimensions(sim, dims.as_mut_ptr()), LG_OK);
            assert_eq!(dims, [6, 5, 1]);
            assert_eq!(lg_population(sim), 30);

            assert_eq!(lg_get_dimensions(sim, ptr::null_mut()), LG_ERR_NULL);
            assert_eq!(lg_population(ptr::null()), 0);

            lg_destroy(sim);
        }
    }
}
