//! Lattice initialization and neighbor counting.

use rand::Rng;

use crate::lattice::Lattice;

/// Build a lattice where each cell is independently alive with probability
/// `density`.
///
/// Each cell draws one uniform `[0, 1)` sample; `density == 0.0` yields an
/// all-dead lattice and `density == 1.0` an all-alive one.
///
/// # Panics
/// If any dimension is zero.
pub fn generate_field<R: Rng + ?Sized>(
    nx: usize,
    ny: usize,
    nz: usize,
    density: f64,
    rng: &mut R,
) -> Lattice {
    let mut lattice = Lattice::new(nx, ny, nz);
    for cell in lattice.cells_mut() {
        *cell = if rng.gen::<f64>() < density { 1 } else { 0 };
    }
    lattice
}

/// Count alive neighbors using the Moore neighborhood (26 neighbors).
///
/// Only defined for interior cells; callers iterate `1..n-1` on every axis.
#[inline]
pub fn count_neighbors_3d(lattice: &Lattice, x: usize, y: usize, z: usize) -> u8 {
    let mut count = 0;

    for dz in 0..3 {
        for dy in 0..3 {
            for dx in 0..3 {
                // Skip the center cell
                if dx == 1 && dy == 1 && dz == 1 {
                    continue;
                }

                count += lattice.get(x + dx - 1, y + dy - 1, z + dz - 1);
            }
        }
    }

    count
}

/// Count alive neighbors in the planar Moore neighborhood (8 neighbors) at
/// the same `z`.
#[inline]
pub fn count_neighbors_2d(lattice: &Lattice, x: usize, y: usize, z: usize) -> u8 {
    let mut count = 0;

    for dy in 0..3 {
        for dx in 0..3 {
            if dx == 1 && dy == 1 {
                continue;
            }

            count += lattice.get(x + dx - 1, y + dy - 1, z);
        }
    }

    count
}
