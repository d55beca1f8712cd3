//! Birth/survival rules for the 2D and 3D lattices.

/// Which rule a lattice is evolved with, chosen from its depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleSet {
    /// Classic Conway B3/S23 over the 8 planar neighbors.
    Life2d,
    /// B6/S567 over the 26 Moore neighbors.
    Life3d,
}

impl RuleSet {
    /// `nz > 1` selects the 3D rule, a single layer the 2D rule.
    #[inline]
    pub fn for_depth(nz: usize) -> Self {
        if nz > 1 {
            RuleSet::Life3d
        } else {
            RuleSet::Life2d
        }
    }

    /// Next cell state given the current state and live neighbor count.
    #[inline]
    pub fn next_state(self, alive: bool, neighbors: u8) -> u8 {
        let next = match self {
            // B6/S567
            RuleSet::Life3d => {
                (alive && (5..=7).contains(&neighbors)) || (!alive && neighbors == 6)
            }
            RuleSet::Life2d => (alive && (neighbors == 2 || neighbors == 3)) || neighbors == 3,
        };
        next as u8
    }
}
