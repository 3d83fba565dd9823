//! Boundary-aware stencil generation.
//!
//! A stencil is the set of relative offsets defining which neighbors are
//! adjacent to a node. Static offset tables cover the common symmetric
//! 7/19/27-point patterns; [`Stencil7p`] additionally modulates the 7-point
//! pattern per axis by a boundary condition.

use serde::{Deserialize, Serialize};

use super::index::{add_offset, wrap, Coords, GridExtent, Offset};
use crate::error::GridmatError;

/// Policy for stencil offsets that would reference a node outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryCondition {
    /// Drop the offending offset. The node's degree shrinks at boundaries.
    Fixed,
    /// Wrap the offset around to the opposite side of the grid.
    Periodic,
    /// Mirror the offset at the boundary. Not implemented; selecting it
    /// fails with [`GridmatError::NotImplemented`] rather than guessing the
    /// reflection formula.
    Reflective,
}

/// Symmetric 7-point stencil: the node itself plus its 6 face neighbors.
pub const STENCIL_7P: [Offset; 7] = [
    [0, 0, 0],
    [-1, 0, 0], [0, -1, 0], [0, 0, -1],
    [1, 0, 0], [0, 1, 0], [0, 0, 1],
];

/// Symmetric 19-point stencil: 7-point plus the 12 edge neighbors.
pub const STENCIL_19P: [Offset; 19] = [
    [0, 0, 0],
    [-1, 0, 0], [0, -1, 0], [0, 0, -1],
    [1, 0, 0], [0, 1, 0], [0, 0, 1],
    [-1, -1, 0], [-1, 1, 0], [1, -1, 0], [1, 1, 0],
    [-1, 0, -1], [-1, 0, 1], [1, 0, -1], [1, 0, 1],
    [0, -1, -1], [0, -1, 1], [0, 1, -1], [0, 1, 1],
];

/// Symmetric 27-point stencil: the full 3x3x3 neighborhood.
pub const STENCIL_27P: [Offset; 27] = [
    [0, 0, 0],
    [-1, 0, 0], [0, -1, 0], [0, 0, -1],
    [1, 0, 0], [0, 1, 0], [0, 0, 1],
    [-1, -1, 0], [-1, 1, 0], [1, -1, 0], [1, 1, 0],
    [-1, 0, -1], [-1, 0, 1], [1, 0, -1], [1, 0, 1],
    [0, -1, -1], [0, -1, 1], [0, 1, -1], [0, 1, 1],
    [-1, -1, -1], [-1, -1, 1], [-1, 1, -1], [-1, 1, 1],
    [1, -1, -1], [1, -1, 1], [1, 1, -1], [1, 1, 1],
];

/// 7-point stencil generator with per-axis boundary conditions.
///
/// For a node and a grid extent, [`offsets`](Stencil7p::offsets) produces the
/// valid neighbor offsets under the configured boundary policies. Every
/// produced offset lands inside the grid.
///
/// The null offset (0, 0, 0) is emitted for inner and boundary nodes alike,
/// mirroring the base pattern's self entry. Whether the resulting structural
/// diagonal is wanted depends on the consumer; use
/// [`without_self_offset`](Stencil7p::without_self_offset) to suppress it.
#[derive(Debug, Clone, Copy)]
pub struct Stencil7p {
    boundaries: [BoundaryCondition; 3],
    self_offset: bool,
}

impl Default for Stencil7p {
    fn default() -> Self {
        Self::new()
    }
}

impl Stencil7p {
    /// Fixed boundary conditions on all axes.
    pub fn new() -> Self {
        Self::with_boundaries(
            BoundaryCondition::Fixed,
            BoundaryCondition::Fixed,
            BoundaryCondition::Fixed,
        )
    }

    /// Select boundary conditions independently per axis.
    pub fn with_boundaries(
        x: BoundaryCondition,
        y: BoundaryCondition,
        z: BoundaryCondition,
    ) -> Self {
        Self {
            boundaries: [x, y, z],
            self_offset: true,
        }
    }

    /// Drop the null offset from the generated pattern.
    pub fn without_self_offset(mut self) -> Self {
        self.self_offset = false;
        self
    }

    /// Valid neighbor offsets for the node at `coords`.
    ///
    /// Order is deterministic: the null offset first (if enabled), then the
    /// -x, +x, -y, +y, -z, +z face offsets, with per-axis substitutions
    /// applied in place.
    pub fn offsets(
        &self,
        coords: Coords,
        extent: &GridExtent,
    ) -> Result<Vec<Offset>, GridmatError> {
        // Inner nodes take the full base pattern; no offset can leave the
        // grid, so the boundary conditions never apply.
        if extent.is_inner(coords)? {
            let mut offsets = Vec::with_capacity(7);
            if self.self_offset {
                offsets.push([0, 0, 0]);
            }
            for axis in 0..3 {
                for step in [-1i64, 1] {
                    let mut offset = [0i64; 3];
                    offset[axis] = step;
                    offsets.push(offset);
                }
            }
            return Ok(offsets);
        }

        let axes = extent.axes();
        let mut offsets = Vec::with_capacity(7);
        if self.self_offset {
            offsets.push([0, 0, 0]);
        }
        for axis in 0..3 {
            for step in [-1i64, 1] {
                let mut offset = [0i64; 3];
                offset[axis] = step;
                match self.boundaries[axis] {
                    BoundaryCondition::Fixed => {
                        if extent.contains(add_offset(coords, offset)) {
                            offsets.push(offset);
                        }
                    }
                    BoundaryCondition::Periodic => {
                        offset[axis] = wrap(coords[axis] + step, axes[axis]) - coords[axis];
                        offsets.push(offset);
                    }
                    BoundaryCondition::Reflective => {
                        return Err(GridmatError::NotImplemented(
                            "reflective boundary condition",
                        ));
                    }
                }
            }
        }
        Ok(offsets)
    }
}
