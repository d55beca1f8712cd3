//! Core lattice structure and helper methods.

/// Number of cells in an `nx * ny * nz` lattice, or `None` if that many
/// bytes cannot be allocated.
pub fn cell_count(nx: usize, ny: usize, nz: usize) -> Option<usize> {
    nx.checked_mul(ny)
        .and_then(|plane| plane.checked_mul(nz))
        .filter(|&count| count <= isize::MAX as usize)
}

/// A 3D lattice of binary cells.
///
/// Cells are stored z-major: `index = z * ny * nx + y * nx + x`, so `x`
/// changes fastest. Every stored value is `0` (dead) or `1` (alive).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lattice {
    nx: usize,
    ny: usize,
    nz: usize,
    cells: Vec<u8>,
}

impl Lattice {
    /// Allocate an all-dead lattice.
    ///
    /// # Panics
    /// If any dimension is zero or the cell count overflows.
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        assert!(
            nx > 0 && ny > 0 && nz > 0,
            "lattice dimensions must be positive, got {}x{}x{}",
            nx,
            ny,
            nz
        );
        let count = cell_count(nx, ny, nz).unwrap_or_else(|| {
            panic!("lattice of {}x{}x{} cells is too large", nx, ny, nz)
        });
        Lattice {
            nx,
            ny,
            nz,
            cells: vec![0; count],
        }
    }

    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }

    #[inline]
    pub fn ny(&self) -> usize {
        self.ny
    }

    #[inline]
    pub fn nz(&self) -> usize {
        self.nz
    }

    /// `(nx, ny, nz)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize, usize) {
        (self.nx, self.ny, self.nz)
    }

    /// Total number of cells. Never zero.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if coordinates are within lattice bounds.
    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.nx && y < self.ny && z < self.nz
    }

    /// Get the linear index for a 3D coordinate.
    ///
    /// # Panics
    /// If the coordinate is outside the lattice.
    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        assert!(
            self.in_bounds(x, y, z),
            "coordinate ({}, {}, {}) out of bounds for {}x{}x{} lattice",
            x,
            y,
            z,
            self.nx,
            self.ny,
            self.nz
        );
        z * self.ny * self.nx + y * self.nx + x
    }

    /// Cell state at `(x, y, z)`: 0 = dead, 1 = alive.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> u8 {
        self.cells[self.index(x, y, z)]
    }

    /// Set a cell. Any non-zero value is stored as alive.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: u8) {
        let idx = self.index(x, y, z);
        self.cells[idx] = if value != 0 { 1 } else { 0 };
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().map(|&c| c as usize).sum()
    }

    /// Whether `other` has the same dimensions.
    #[inline]
    pub fn same_shape(&self, other: &Lattice) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Whether `(x, y, z)` lies on the outermost layer along any axis.
    ///
    /// A single-layer lattice (`nz == 1`) is planar: its one z-plane is not
    /// a boundary, only the outer ring in x and y is.
    #[inline]
    pub fn is_boundary(&self, x: usize, y: usize, z: usize) -> bool {
        x == 0
            || y == 0
            || x == self.nx - 1
            || y == self.ny - 1
            || (self.nz > 1 && (z == 0 || z == self.nz - 1))
    }

    /// Kill every boundary cell.
    pub fn clear_boundary(&mut self) {
        for z in 0..self.nz {
            for y in 0..self.ny {
                for x in 0..self.nx {
                    if self.is_boundary(x, y, z) {
                        let idx = self.index(x, y, z);
                        self.cells[idx] = 0;
                    }
                }
            }
        }
    }

    /// Raw cell storage in z,y,x order.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Address of the backing storage. Stable for the lattice's lifetime,
    /// used to observe buffer reuse.
    #[inline]
    pub fn storage_id(&self) -> usize {
        self.cells.as_ptr() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lattice_is_dead() {
        let lattice = Lattice::new(8, 8, 8);
        assert_eq!(lattice.dimensions(), (8, 8, 8));
        assert_eq!(lattice.len(), 512);
        assert_eq!(lattice.population(), 0);
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn test_zero_dimension_panics() {
        Lattice::new(4, 0, 4);
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(cell_count(5, 3, 2), Some(30));
        assert_eq!(cell_count(usize::MAX / 2, 4, 1), None);
        assert_eq!(cell_count(usize::MAX / 2, 2, 1), None);
        assert_eq!(cell_count(u32::MAX as usize, u32::MAX as usize, u32::MAX as usize), None);
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn test_oversized_lattice_panics() {
        Lattice::new(usize::MAX / 2, 4, 1);
    }

    #[test]
    fn test_index() {
        let lattice = Lattice::new(4, 4, 4);

        // First cell
        assert_eq!(lattice.index(0, 0, 0), 0);
        // Last cell
        assert_eq!(lattice.index(3, 3, 3), 63);
        // Various cells
        assert_eq!(lattice.index(1, 0, 0), 1);
        assert_eq!(lattice.index(0, 1, 0), 4);
        assert_eq!(lattice.index(0, 0, 1), 16);
    }

    #[test]
    fn test_index_non_cubic() {
        let lattice = Lattice::new(5, 3, 2);
        assert_eq!(lattice.index(4, 2, 1), 29);
        assert_eq!(lattice.index(0, 1, 1), 20);
    }

    #[test]
    fn test_in_bounds() {
        let lattice = Lattice::new(4, 4, 4);

        assert!(lattice.in_bounds(0, 0, 0));
        assert!(lattice.in_bounds(3, 3, 3));

        assert!(!lattice.in_bounds(4, 0, 0));
        assert!(!lattice.in_bounds(0, 4, 0));
        assert!(!lattice.in_bounds(0, 0, 4));
    }

    #[test]
    fn test_set_get_normalizes() {
        let mut lattice = Lattice::new(4, 4, 4);
        lattice.set(1, 2, 3, 7);
        assert_eq!(lattice.get(1, 2, 3), 1);
        lattice.set(1, 2, 3, 0);
        assert_eq!(lattice.get(1, 2, 3), 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let lattice = Lattice::new(4, 4, 4);
        lattice.get(4, 0, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_out_of_bounds_panics() {
        let mut lattice = Lattice::new(4, 4, 1);
        lattice.set(0, 0, 1, 1);
    }

    #[test]
    fn test_clear_boundary_keeps_interior() {
        let mut lattice = Lattice::new(4, 4, 4);
        for z in 0..4 {
            for y in 0..4 {
                for x in 0..4 {
                    lattice.set(x, y, z, 1);
                }
            }
        }

        lattice.clear_boundary();

        // 2x2x2 interior survives
        assert_eq!(lattice.population(), 8);
        assert_eq!(lattice.get(1, 1, 1), 1);
        assert_eq!(lattice.get(2, 2, 2), 1);
        assert_eq!(lattice.get(0, 1, 1), 0);
        assert_eq!(lattice.get(1, 1, 3), 0);
    }

    #[test]
    fn test_clear_boundary_single_layer() {
        let mut lattice = Lattice::new(3, 3, 1);
        lattice.set(1, 1, 0, 1);
        lattice.set(0, 1, 0, 1);
        lattice.clear_boundary();
        assert_eq!(lattice.population(), 1);
        assert_eq!(lattice.get(1, 1, 0), 1);
    }
}
