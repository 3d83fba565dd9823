//! Error types for grid indexing and matrix synthesis.

/// Errors raised by the generation and synthesis operations.
///
/// All variants are precondition violations. They are surfaced at the call
/// boundary and never recovered internally; callers either validate their
/// inputs up front or treat the failure as fatal to that operation.
#[derive(Debug, thiserror::Error)]
pub enum GridmatError {
    #[error("coordinates ({x}, {y}, {z}) lie outside the grid {nx}x{ny}x{nz}")]
    OutOfRange {
        x: i64,
        y: i64,
        z: i64,
        nx: i64,
        ny: i64,
        nz: i64,
    },
    #[error("grid extent components must be positive, got ({nx}, {ny}, {nz})")]
    InvalidExtent { nx: i64, ny: i64, nz: i64 },
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
    #[error("index {index} out of range, expected < {bound}")]
    IndexOutOfRange { index: usize, bound: usize },
    #[error("expected {expected} elements, got {actual}")]
    CountMismatch { expected: usize, actual: usize },
    #[error("at least one input element is required")]
    EmptyInput,
    #[error("source matrices must share one storage order")]
    StorageOrderMismatch,
    #[error("source matrices must share one outer size, got {a} and {b}")]
    OuterSizeMismatch { a: usize, b: usize },
}
