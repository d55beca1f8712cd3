//! Read-only lattice view handed to renderers, plus region extraction.

use crate::lattice::Lattice;

/// Borrowed, read-only view of the current generation.
///
/// The borrow ends at the next tick; the underlying buffer is reused as
/// scratch space after that.
#[derive(Clone, Copy, Debug)]
pub struct LatticeView<'a> {
    lattice: &'a Lattice,
    generation: u64,
}

impl<'a> LatticeView<'a> {
    pub fn new(lattice: &'a Lattice, generation: u64) -> Self {
        LatticeView {
            lattice,
            generation,
        }
    }

    /// Generation number of the viewed lattice (0 = initial field).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn dimensions(&self) -> (usize, usize, usize) {
        self.lattice.dimensions()
    }

    /// Cell state at `(x, y, z)`. Panics out of bounds.
    pub fn get(&self, x: usize, y: usize, z: usize) -> u8 {
        self.lattice.get(x, y, z)
    }

    pub fn is_alive(&self, x: usize, y: usize, z: usize) -> bool {
        self.get(x, y, z) == 1
    }

    pub fn population(&self) -> usize {
        self.lattice.population()
    }

    /// The underlying lattice.
    pub fn lattice(&self) -> &'a Lattice {
        self.lattice
    }

    /// Coordinates of every alive cell, in z,y,x order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize, usize)> + 'a {
        let (nx, ny, _) = self.lattice.dimensions();
        self.lattice
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == 1)
            .map(move |(idx, _)| (idx % nx, (idx / nx) % ny, idx / (nx * ny)))
    }

    /// Marker position for a cell, centered on the lattice: each coordinate
    /// minus half the corresponding dimension.
    pub fn marker_position(&self, x: usize, y: usize, z: usize) -> [f32; 3] {
        let (nx, ny, nz) = self.lattice.dimensions();
        [
            x as f32 - nx as f32 / 2.0,
            y as f32 - ny as f32 / 2.0,
            z as f32 - nz as f32 / 2.0,
        ]
    }

    /// Centered marker positions of every alive cell.
    pub fn live_positions(&self) -> impl Iterator<Item = [f32; 3]> + 'a {
        let view = *self;
        self.live_cells()
            .map(move |(x, y, z)| view.marker_position(x, y, z))
    }

    /// Copy the box `[min, max)` into `out_buf`.
    ///
    /// # Layout
    /// The buffer is filled in z,y,x order (z changes slowest, x fastest).
    /// Coordinates are clamped to the lattice.
    ///
    /// # Returns
    /// Number of bytes written, or 0 for an empty region or a short buffer.
    pub fn extract_region(&self, out_buf: &mut [u8], min: [usize; 3], max: [usize; 3]) -> usize {
        let (nx, ny, nz) = self.lattice.dimensions();

        // Clamp coordinates to lattice bounds
        let max = [max[0].min(nx), max[1].min(ny), max[2].min(nz)];
        let min = [min[0].min(max[0]), min[1].min(max[1]), min[2].min(max[2])];

        if min[0] >= max[0] || min[1] >= max[1] || min[2] >= max[2] {
            return 0;
        }

        let width = max[0] - min[0];
        let total_size = width * (max[1] - min[1]) * (max[2] - min[2]);
        if out_buf.len() < total_size {
            return 0;
        }

        let cells = self.lattice.cells();
        let mut offset = 0;
        for z in min[2]..max[2] {
            for y in min[1]..max[1] {
                let start = self.lattice.index(min[0], y, z);
                out_buf[offset..offset + width].copy_from_slice(&cells[start..start + width]);
                offset += width;
            }
        }

        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Lattice {
        let mut lattice = Lattice::new(8, 8, 8);
        lattice.set(2, 2, 2, 1);
        lattice.set(3, 2, 2, 1);
        lattice.set(2, 3, 2, 1);
        lattice
    }

    #[test]
    fn test_live_cells() {
        let lattice = sample();
        let view = LatticeView::new(&lattice, 0);
        let cells: Vec<_> = view.live_cells().collect();
        assert_eq!(cells, vec![(2, 2, 2), (3, 2, 2), (2, 3, 2)]);
        assert_eq!(view.population(), 3);
    }

    #[test]
    fn test_marker_position_centered() {
        let lattice = Lattice::new(75, 75, 75);
        let view = LatticeView::new(&lattice, 0);
        assert_eq!(view.marker_position(0, 0, 0), [-37.5, -37.5, -37.5]);
        assert_eq!(view.marker_position(74, 37, 0), [36.5, -0.5, -37.5]);
    }

    #[test]
    fn test_live_positions() {
        let lattice = sample();
        let view = LatticeView::new(&lattice, 4);
        let positions: Vec<_> = view.live_positions().collect();
        assert_eq!(positions[0], [-2.0, -2.0, -2.0]);
        assert_eq!(positions.len(), 3);
        assert_eq!(view.generation(), 4);
    }

    #[test]
    fn test_extract_region_basic() {
        let lattice = sample();
        let view = LatticeView::new(&lattice, 0);

        let mut buffer = vec![0u8; 4 * 4 * 4];
        let written = view.extract_region(&mut buffer, [2, 2, 2], [6, 6, 6]);
        assert_eq!(written, 64);

        // (2,2,2) -> buffer[0], (3,2,2) -> buffer[1], (2,3,2) -> buffer[4]
        assert_eq!(buffer[0], 1);
        assert_eq!(buffer[1], 1);
        assert_eq!(buffer[4], 1);
        assert_eq!(buffer.iter().filter(|&&c| c == 1).count(), 3);
    }

    #[test]
    fn test_extract_region_clamped() {
        let lattice = Lattice::new(4, 4, 4);
        let view = LatticeView::new(&lattice, 0);

        let mut buffer = vec![0u8; 8 * 8 * 8];
        assert_eq!(view.extract_region(&mut buffer, [0, 0, 0], [10, 10, 10]), 64);
    }

    #[test]
    fn test_extract_region_empty_or_short() {
        let lattice = Lattice::new(4, 4, 4);
        let view = LatticeView::new(&lattice, 0);

        let mut buffer = vec![0u8; 64];
        assert_eq!(view.extract_region(&mut buffer, [3, 0, 0], [3, 4, 4]), 0);
        assert_eq!(view.extract_region(&mut buffer[..10], [0, 0, 0], [4, 4, 4]), 0);
    }
}
