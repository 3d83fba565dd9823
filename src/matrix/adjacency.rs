//! Adjacency matrix builder.
//!
//! Traverses a structured grid in x-then-y-then-z order, asks the adjacency
//! capability for each node's neighbor offsets, weighs each connection, and
//! bulk-constructs the resulting square sparse matrix from triplets.

use log::debug;
use num_traits::Num;
use sprs::{CsMat, TriMat};

use super::weight::WeightFn;
use crate::error::GridmatError;
use crate::grid::{add_offset, Coords, GridExtent, Offset, Stencil7p};

/// Source of per-node neighbor offsets, dispatched on call shape.
///
/// The stencil variant guarantees in-grid neighbors (its boundary policies
/// already clamp or wrap); the other variants may produce offsets landing
/// outside the grid, which the builder discards.
pub enum Adjacency {
    /// Boundary-aware 7-point stencil generator.
    Stencil(Stencil7p),
    /// A fixed offset table applied at every node, e.g. [`crate::grid::STENCIL_27P`].
    Offsets(Vec<Offset>),
    /// Position-dependent offsets from the node coordinate alone.
    PerNode(Box<dyn FnMut(Coords) -> Vec<Offset>>),
    /// Position-dependent offsets from the node coordinate and grid extent.
    WithExtent(Box<dyn FnMut(Coords, GridExtent) -> Vec<Offset>>),
}

impl From<Stencil7p> for Adjacency {
    fn from(stencil: Stencil7p) -> Self {
        Self::Stencil(stencil)
    }
}

impl Adjacency {
    pub fn offsets(table: &[Offset]) -> Self {
        Self::Offsets(table.to_vec())
    }

    pub fn per_node(f: impl FnMut(Coords) -> Vec<Offset> + 'static) -> Self {
        Self::PerNode(Box::new(f))
    }

    pub fn with_extent(f: impl FnMut(Coords, GridExtent) -> Vec<Offset> + 'static) -> Self {
        Self::WithExtent(Box::new(f))
    }

    /// Offsets for one node, plus whether they are guaranteed in-grid.
    fn node_offsets(
        &mut self,
        coords: Coords,
        extent: &GridExtent,
    ) -> Result<(Vec<Offset>, bool), GridmatError> {
        match self {
            Self::Stencil(stencil) => Ok((stencil.offsets(coords, extent)?, true)),
            Self::Offsets(table) => Ok((table.clone(), false)),
            Self::PerNode(f) => Ok((f(coords), false)),
            Self::WithExtent(f) => Ok((f(coords, *extent), false)),
        }
    }
}

/// Build the adjacency matrix of a structured grid.
///
/// The output is a square row-major matrix of dimension `nx * ny * nz`.
/// Multiple triplets for the same entry are summed during construction; a
/// boundary node whose offsets fold onto one neighbor (periodic wrap on a
/// single-wide axis) therefore accumulates the combined connection weight.
pub fn adjmat<N>(
    extent: GridExtent,
    adjacency: &mut Adjacency,
    weight: &mut WeightFn<N>,
) -> Result<CsMat<N>, GridmatError>
where
    N: Copy + Num,
{
    let matrix_height = extent.num_nodes();
    // Stencil size varies per node under non-static adjacency functions, so
    // the triplet vector grows dynamically.
    let mut triplets = TriMat::new((matrix_height, matrix_height));

    for z in 0..extent.nz {
        for y in 0..extent.ny {
            for x in 0..extent.nx {
                let coords = [x, y, z];
                let (offsets, in_grid) = adjacency.node_offsets(coords, &extent)?;
                for offset in offsets {
                    let neighbor = add_offset(coords, offset);
                    if !in_grid && !extent.contains(neighbor) {
                        continue;
                    }
                    let (row, col) = extent.matrix_entry(coords, neighbor)?;
                    let value = weight.evaluate((row, col), coords, neighbor, extent);
                    triplets.add_triplet(row, col, value);
                }
            }
        }
    }

    debug!(
        "adjmat: {}x{} matrix from {} triplets",
        matrix_height,
        matrix_height,
        triplets.nnz()
    );
    Ok(triplets.to_csr())
}

/// Diagonally dominant sinusoidal grid matrix.
///
/// Builds the stencil adjacency matrix weighted by
/// [`WeightFn::sinusoidal`], then sets each diagonal entry to one plus the
/// row's sum of absolute off-diagonal values.
pub fn diagonally_dominant_sinusoidal(
    extent: GridExtent,
    stencil: Stencil7p,
    fx: f64,
    fy: f64,
    fz: f64,
) -> Result<CsMat<f64>, GridmatError> {
    let base = adjmat(
        extent,
        &mut Adjacency::Stencil(stencil),
        &mut WeightFn::sinusoidal(fx, fy, fz),
    )?;

    let n = base.rows();
    let mut triplets = TriMat::new((n, n));
    for (row, vec) in base.outer_iterator().enumerate() {
        let mut abs_sum = 0.0;
        for (col, &value) in vec.iter() {
            if col != row {
                triplets.add_triplet(row, col, value);
                abs_sum += value.abs();
            }
        }
        triplets.add_triplet(row, row, 1.0 + abs_sum);
    }
    Ok(triplets.to_csr())
}
