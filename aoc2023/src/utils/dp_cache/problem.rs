//! Trait-based DP problem definition.

/// A trait for defining dynamic programming problems.
///
/// Implement this trait to define the dependency structure and computation
/// logic for a DP problem.
///
/// # Type Parameters
///
/// - `I`: Index type for the DP cache
/// - `K`: Value type stored in the cache
///
/// # Example
///
/// ```rust
/// use aoc2023::utils::dp_cache::{DpCache, DpProblem, Vec2DBackend};
///
/// /// Fibonacci numbers along a single row
/// struct Fibonacci;
///
/// impl DpProblem<(usize, usize), u64> for Fibonacci {
///     fn deps(&self, &(row, n): &(usize, usize)) -> Vec<(usize, usize)> {
///         if n <= 1 { vec![] }
///         else { vec![(row, n - 1), (row, n - 2)] }
///     }
///
///     fn compute(&self, &(_, n): &(usize, usize), deps: Vec<u64>) -> u64 {
///         if n <= 1 { n as u64 }
///         else { deps[0] + deps[1] }
///     }
/// }
///
/// let cache = DpCache::builder()
///     .backend(Vec2DBackend::new(1, 11))
///     .problem(Fibonacci)
///     .build();
/// assert_eq!(cache.get(&(0, 10)).unwrap(), 55);
/// ```
pub trait DpProblem<I, K> {
    /// Returns the indices that this index depends on.
    ///
    /// For base cases, return an empty vector.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Computes the value for the given index using resolved dependency values.
    ///
    /// The `deps` vector contains the computed values for each dependency
    /// returned by `deps()`, in the same order.
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}
