use thiserror::Error;

/// Errors raised by the connectivity structure and the percolation grid.
///
/// All of them are precondition violations detected before any state is
/// mutated.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PercolationError {
    #[error("grid dimension must be at least 1 and small enough to index, got {0}")]
    InvalidDimension(i32),
    #[error("union-find size must be non-negative, got {0}")]
    InvalidSize(i32),
    #[error("element {index} is out of range for a structure of {bound} elements")]
    IndexOutOfRange { index: i32, bound: i32 },
    #[error("site ({row}, {col}) is outside the {dimension}x{dimension} grid")]
    SiteOutOfRange { row: i32, col: i32, dimension: i32 },
    #[error("probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),
    #[error("cannot draw uniformly from [{low}, {high})")]
    InvalidRange { low: f64, high: f64 },
}
