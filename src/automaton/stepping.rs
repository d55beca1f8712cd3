//! Generation stepping: B6/S567 in 3D, B3/S23 on a single layer.
//!
//! Only interior cells are written. The outer layer of `next` keeps whatever
//! it held before the call, so a `next` that starts dead stays dead there.
//!
//! The sequential and parallel steppers share the same per-plane (3D) and
//! per-row (2D) kernels and produce identical output.

use rayon::prelude::*;

use super::grid::{count_neighbors_2d, count_neighbors_3d};
use super::rules::RuleSet;
use crate::lattice::Lattice;

/// Write generation N+1 of `prev` into `next` and return `next`.
///
/// # Panics
/// If `prev` and `next` differ in shape.
pub fn create_new_generation<'a>(prev: &Lattice, next: &'a mut Lattice) -> &'a mut Lattice {
    check_shapes(prev, next);
    let (nx, ny, nz) = prev.dimensions();
    if nx < 3 || ny < 3 {
        return next;
    }

    match RuleSet::for_depth(nz) {
        RuleSet::Life3d => {
            if let Some(planes) = interior_planes(next.cells_mut(), nx, ny, nz) {
                for (i, plane) in planes.chunks_mut(nx * ny).enumerate() {
                    step_plane_3d(prev, i + 1, plane);
                }
            }
        }
        RuleSet::Life2d => {
            for (i, row) in interior_rows(next.cells_mut(), nx, ny).chunks_mut(nx).enumerate() {
                step_row_2d(prev, i + 1, row);
            }
        }
    }

    next
}

/// Same as [`create_new_generation`], fanned out over z-planes (3D) or rows
/// (2D) on the current rayon pool.
///
/// # Panics
/// If `prev` and `next` differ in shape.
pub fn create_new_generation_par<'a>(prev: &Lattice, next: &'a mut Lattice) -> &'a mut Lattice {
    check_shapes(prev, next);
    let (nx, ny, nz) = prev.dimensions();
    if nx < 3 || ny < 3 {
        return next;
    }

    match RuleSet::for_depth(nz) {
        RuleSet::Life3d => {
            if let Some(planes) = interior_planes(next.cells_mut(), nx, ny, nz) {
                planes
                    .par_chunks_mut(nx * ny)
                    .enumerate()
                    .for_each(|(i, plane)| step_plane_3d(prev, i + 1, plane));
            }
        }
        RuleSet::Life2d => {
            interior_rows(next.cells_mut(), nx, ny)
                .par_chunks_mut(nx)
                .enumerate()
                .for_each(|(i, row)| step_row_2d(prev, i + 1, row));
        }
    }

    next
}

fn check_shapes(prev: &Lattice, next: &Lattice) {
    assert!(
        prev.same_shape(next),
        "generation shape mismatch: prev is {:?}, next is {:?}",
        prev.dimensions(),
        next.dimensions()
    );
}

/// Slice covering planes `1..nz-1`, or `None` when there is no interior plane.
fn interior_planes(cells: &mut [u8], nx: usize, ny: usize, nz: usize) -> Option<&mut [u8]> {
    if nz < 3 {
        return None;
    }
    let plane = nx * ny;
    Some(&mut cells[plane..(nz - 1) * plane])
}

/// Slice covering rows `1..ny-1` of plane 0. Requires `ny >= 3`.
fn interior_rows(cells: &mut [u8], nx: usize, ny: usize) -> &mut [u8] {
    &mut cells[nx..(ny - 1) * nx]
}

/// Recompute the interior of plane `z`. `plane` is that plane's `nx * ny` cells.
fn step_plane_3d(prev: &Lattice, z: usize, plane: &mut [u8]) {
    let (nx, ny, _) = prev.dimensions();
    for y in 1..ny - 1 {
        for x in 1..nx - 1 {
            let neighbors = count_neighbors_3d(prev, x, y, z);
            let alive = prev.get(x, y, z) == 1;
            plane[y * nx + x] = RuleSet::Life3d.next_state(alive, neighbors);
        }
    }
}

/// Recompute the interior of row `y` on plane 0. `row` is that row's `nx` cells.
fn step_row_2d(prev: &Lattice, y: usize, row: &mut [u8]) {
    let nx = prev.nx();
    for x in 1..nx - 1 {
        let neighbors = count_neighbors_2d(prev, x, y, 0);
        let alive = prev.get(x, y, 0) == 1;
        row[x] = RuleSet::Life2d.next_state(alive, neighbors);
    }
}
