//! Matrix module - Builders and transformations for sparse matrices.

mod adjacency;
mod assemble;
mod create;
mod interleave;
mod perturb;
mod weight;

pub use adjacency::*;
pub use assemble::*;
pub use create::*;
pub use interleave::*;
pub use perturb::*;
pub use weight::*;
