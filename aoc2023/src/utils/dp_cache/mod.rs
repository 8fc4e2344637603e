//! Dynamic Programming Cache with Lazy Evaluation
//!
//! This module provides a memoization cache for dynamic programming problems
//! where values depend on other values in a directed acyclic graph (DAG).
//!
//! Values live in a [`Vec2DBackend`], a runtime-sized grid of `(row, col)`
//! indices; indices outside the grid are reported as
//! [`DpCacheError::IndexOutOfBounds`].
//!
//! # Warning: Cycle Behavior
//!
//! **The cache does NOT support cycle detection.** A dependency cycle
//! recurses until the stack overflows.
//!
//! # Example
//!
//! ```rust
//! use aoc2023::utils::dp_cache::{DpCache, DpProblem, Vec2DBackend};
//!
//! struct GridPaths;
//!
//! impl DpProblem<(usize, usize), u64> for GridPaths {
//!     fn deps(&self, pos: &(usize, usize)) -> Vec<(usize, usize)> {
//!         let (r, c) = *pos;
//!         if r == 0 && c == 0 { vec![] }
//!         else if r == 0 { vec![(0, c - 1)] }
//!         else if c == 0 { vec![(r - 1, 0)] }
//!         else { vec![(r - 1, c), (r, c - 1)] }
//!     }
//!     fn compute(&self, _pos: &(usize, usize), deps: Vec<u64>) -> u64 {
//!         if deps.is_empty() { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let cache = DpCache::builder()
//!     .backend(Vec2DBackend::new(5, 5))
//!     .problem(GridPaths)
//!     .build();
//! assert_eq!(cache.get(&(4, 4)).unwrap(), 70); // C(8,4) = 70 paths
//! assert!(cache.get(&(5, 0)).is_err());
//! ```

use thiserror::Error;

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, Vec2DBackend};
pub use cache::{DpCache, DpCacheBuilder};
pub use problem::DpProblem;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DpCacheError {
    #[error("index {index} is outside the backend bounds {bounds}")]
    IndexOutOfBounds { index: String, bounds: String },
}

#[cfg(test)]
mod tests;
