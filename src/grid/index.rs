//! Grid extents, node coordinates, and linear indexing.
//!
//! Nodes of a regular 3D lattice are addressed by integer (x, y, z) triplets
//! and indexed in x-then-y-then-z order: the linear index of a node is
//! `x + y * nx + z * nx * ny`.

use serde::{Deserialize, Serialize};

use crate::error::GridmatError;

/// Integer position of one grid node.
pub type Coords = [i64; 3];

/// Relative displacement from a node to a candidate neighbor.
pub type Offset = [i64; 3];

/// Node counts along each axis of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridExtent {
    pub nx: i64,
    pub ny: i64,
    pub nz: i64,
}

impl GridExtent {
    /// Create an extent. All components must be positive.
    pub fn new(nx: i64, ny: i64, nz: i64) -> Result<Self, GridmatError> {
        if nx <= 0 || ny <= 0 || nz <= 0 {
            return Err(GridmatError::InvalidExtent { nx, ny, nz });
        }
        Ok(Self { nx, ny, nz })
    }

    /// Total number of nodes in the grid.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        (self.nx * self.ny * self.nz) as usize
    }

    /// Per-axis node counts as an array, indexable by axis.
    #[inline]
    pub fn axes(&self) -> [i64; 3] {
        [self.nx, self.ny, self.nz]
    }

    /// True if `coords` lies within the grid.
    #[inline]
    pub fn contains(&self, coords: Coords) -> bool {
        (0..3).all(|axis| 0 <= coords[axis] && coords[axis] < self.axes()[axis])
    }

    /// True if `coords` is at least one layer away from every grid boundary.
    ///
    /// Inner nodes can take any offset of the 7-point base pattern without
    /// leaving the grid.
    pub fn is_inner(&self, coords: Coords) -> Result<bool, GridmatError> {
        self.check(coords)?;
        Ok((0..3).all(|axis| 1 <= coords[axis] && coords[axis] < self.axes()[axis] - 1))
    }

    /// Linear index of the node at `coords`.
    ///
    /// Indexing is a bijection between valid coordinates and
    /// `[0, nx * ny * nz)`.
    pub fn node_index(&self, coords: Coords) -> Result<usize, GridmatError> {
        self.check(coords)?;
        let index = coords[0] + coords[1] * self.nx + coords[2] * self.nx * self.ny;
        Ok(index as usize)
    }

    /// Matrix entry (row, column) for a node and its neighbor.
    ///
    /// A connection between node `n` and neighbor `m` produces a non-zero
    /// at (index(n), index(m)).
    pub fn matrix_entry(
        &self,
        coords: Coords,
        neighbor_coords: Coords,
    ) -> Result<(usize, usize), GridmatError> {
        let row = self.node_index(coords)?;
        let col = self.node_index(neighbor_coords)?;
        Ok((row, col))
    }

    fn check(&self, coords: Coords) -> Result<(), GridmatError> {
        if !self.contains(coords) {
            return Err(GridmatError::OutOfRange {
                x: coords[0],
                y: coords[1],
                z: coords[2],
                nx: self.nx,
                ny: self.ny,
                nz: self.nz,
            });
        }
        Ok(())
    }
}

/// Elementwise sum of a coordinate and an offset.
#[inline]
pub fn add_offset(coords: Coords, offset: Offset) -> Coords {
    [
        coords[0] + offset[0],
        coords[1] + offset[1],
        coords[2] + offset[2],
    ]
}

/// Floor-style modulus: maps `n` into `[0, modulus)` for positive `modulus`.
///
/// Negative raw remainders are shifted up by the modulus, so
/// `wrap(-1, 4) == 3`. Used to implement periodic boundary conditions.
#[inline]
pub fn wrap(n: i64, modulus: i64) -> i64 {
    debug_assert!(modulus > 0);
    let m = n % modulus;
    if m >= 0 {
        m
    } else {
        m + modulus
    }
}

/// Geometric midpoint between two nodes.
#[inline]
pub fn midpoint(a: Coords, b: Coords) -> [f64; 3] {
    [
        a[0] as f64 + (b[0] - a[0]) as f64 / 2.0,
        a[1] as f64 + (b[1] - a[1]) as f64 / 2.0,
        a[2] as f64 + (b[2] - a[2]) as f64 / 2.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_extent_rejects_nonpositive() {
        assert!(GridExtent::new(0, 3, 3).is_err());
        assert!(GridExtent::new(3, -1, 3).is_err());
        assert!(GridExtent::new(3, 3, 3).is_ok());
    }

    #[test]
    fn test_node_index_ordering() {
        // x varies fastest, then y, then z
        let extent = GridExtent::new(3, 4, 5).unwrap();
        assert_eq!(extent.node_index([0, 0, 0]).unwrap(), 0);
        assert_eq!(extent.node_index([1, 0, 0]).unwrap(), 1);
        assert_eq!(extent.node_index([0, 1, 0]).unwrap(), 3);
        assert_eq!(extent.node_index([0, 0, 1]).unwrap(), 12);
        assert_eq!(extent.node_index([2, 3, 4]).unwrap(), 59);
    }

    #[test]
    fn test_node_index_out_of_range() {
        let extent = GridExtent::new(3, 3, 1).unwrap();
        assert!(extent.node_index([-1, 0, 0]).is_err());
        assert!(extent.node_index([0, 3, 0]).is_err());
        assert!(extent.node_index([0, 0, 1]).is_err());
    }

    #[test]
    fn test_matrix_entry() {
        let extent = GridExtent::new(3, 3, 1).unwrap();
        let (row, col) = extent.matrix_entry([1, 1, 0], [2, 1, 0]).unwrap();
        assert_eq!((row, col), (4, 5));
        assert!(extent.matrix_entry([1, 1, 0], [3, 1, 0]).is_err());
    }

    #[test]
    fn test_is_inner() {
        let extent = GridExtent::new(3, 3, 3).unwrap();
        assert!(extent.is_inner([1, 1, 1]).unwrap());
        assert!(!extent.is_inner([0, 1, 1]).unwrap());
        assert!(!extent.is_inner([1, 2, 1]).unwrap());

        // A single-wide axis has no inner nodes at all
        let flat = GridExtent::new(3, 3, 1).unwrap();
        assert!(!flat.is_inner([1, 1, 0]).unwrap());
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(5, 4), 1);
        assert_eq!(wrap(-1, 4), 3);
        assert_eq!(wrap(-4, 4), 0);
        assert_eq!(wrap(0, 1), 0);
        assert_eq!(wrap(-1, 1), 0);
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(midpoint([0, 0, 0], [1, 0, 0]), [0.5, 0.0, 0.0]);
        assert_eq!(midpoint([2, 2, 2], [2, 0, 2]), [2.0, 1.0, 2.0]);
    }

    #[test]
    fn test_extent_serde_round_trip() {
        let extent = GridExtent::new(4, 4, 2).unwrap();
        let json = serde_json::to_string(&extent).unwrap();
        let back: GridExtent = serde_json::from_str(&json).unwrap();
        assert_eq!(extent, back);
    }

    proptest! {
        #[test]
        fn prop_node_index_bijection(nx in 1i64..6, ny in 1i64..6, nz in 1i64..6) {
            let extent = GridExtent::new(nx, ny, nz).unwrap();
            let mut seen = vec![false; extent.num_nodes()];
            for z in 0..nz {
                for y in 0..ny {
                    for x in 0..nx {
                        let index = extent.node_index([x, y, z]).unwrap();
                        prop_assert!(index < extent.num_nodes());
                        prop_assert!(!seen[index], "index {} hit twice", index);
                        seen[index] = true;
                    }
                }
            }
            prop_assert!(seen.iter().all(|&s| s));
        }
    }
}
