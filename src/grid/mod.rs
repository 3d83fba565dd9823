//! Grid module - Extents, indexing, and stencil generation.

mod index;
mod stencil;

pub use index::*;
pub use stencil::*;
