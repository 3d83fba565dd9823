//! Structured-grid sparse matrix generation.
//!
//! This crate builds adjacency matrices for regular 3D grids and derives
//! new matrices from existing ones, for use in numerical simulation and
//! linear-algebra testing.
//!
//! # Architecture
//!
//! The crate is split into three main modules:
//!
//! - `grid`: extents, node indexing, and boundary-aware stencil generation
//! - `matrix`: the adjacency matrix builder, weight functions, and the
//!   assemble/interleave/perturb/create transformations
//! - `sampling`: moving-sum and darts-sampling primitives behind the
//!   interleave engine
//!
//! Adjacency matrices follow a simple schema: an adjacency capability
//! decides where the non-zeros are, a weight function decides their values,
//! and the builder accumulates (row, col, value) triplets whose duplicates
//! sum during bulk construction.
//!
//! # Example
//!
//! ```
//! use gridmat::{adjmat, Adjacency, GridExtent, Stencil7p, WeightFn};
//!
//! // A 3x3x1 grid with fixed boundaries and unit weights.
//! let extent = GridExtent::new(3, 3, 1)?;
//! let mut adjacency = Adjacency::from(Stencil7p::new());
//! let mut weight = WeightFn::constant(1.0);
//!
//! let matrix = adjmat(extent, &mut adjacency, &mut weight)?;
//! assert_eq!(matrix.rows(), 9);
//! # Ok::<(), gridmat::GridmatError>(())
//! ```

pub mod error;
pub mod grid;
pub mod matrix;
pub mod sampling;

// Re-export commonly used types
pub use error::GridmatError;
pub use grid::{
    BoundaryCondition, Coords, GridExtent, Offset, Stencil7p, STENCIL_19P, STENCIL_27P,
    STENCIL_7P,
};
pub use matrix::{
    adjmat, assemble, create_dense, create_sparse, diagonally_dominant_sinusoidal, interleave,
    perturb, Adjacency, WeightFn,
};
