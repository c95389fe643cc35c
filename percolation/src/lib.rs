//! Site percolation on an n-by-n grid.
//!
//! Sites are opened one at a time and [`Percolation::percolates`] answers
//! whether open sites connect the top row to the bottom row, using a
//! [`UnionFind`] with two virtual terminal nodes instead of a graph search.

pub mod connectivity;
mod error;
pub mod grid;
mod random;

pub use connectivity::UnionFind;
pub use error::PercolationError;
pub use grid::Percolation;
pub use grid::Site;
pub use random::RandomSource;
pub use random::SeededSource;
