//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::DpCacheError;
use super::backend::Backend;
use super::problem::DpProblem;

/// A dynamic programming cache with lazy evaluation and dependency resolution.
///
/// `DpCache` provides memoization for recursive computations where values may depend
/// on other values. Dependencies are resolved automatically and each value is computed
/// exactly once.
///
/// # Type Parameters
///
/// - `I`: Index type (must implement `Clone`)
/// - `K`: Value type (must implement `Clone`)
/// - `B`: Backend storage type (must implement `Backend<I, K>`)
/// - `P`: Problem type (must implement `DpProblem<I, K>`)
///
/// # Warning: No Cycle Detection
///
/// This cache does NOT detect cycles in the dependency graph. If cycles exist,
/// the recursion never bottoms out and overflows the stack.
/// **Users MUST ensure dependencies form a DAG.**
///
/// # Example
///
/// ```rust
/// use aoc2023::utils::dp_cache::{DpCache, DpProblem, Vec2DBackend};
///
/// /// `C(n, k)` through Pascal's rule
/// struct Binomial;
///
/// impl DpProblem<(usize, usize), u64> for Binomial {
///     fn deps(&self, &(n, k): &(usize, usize)) -> Vec<(usize, usize)> {
///         if k == 0 || k == n { vec![] } else { vec![(n - 1, k - 1), (n - 1, k)] }
///     }
///     fn compute(&self, _: &(usize, usize), deps: Vec<u64>) -> u64 {
///         if deps.is_empty() { 1 } else { deps[0] + deps[1] }
///     }
/// }
///
/// let cache = DpCache::builder()
///     .backend(Vec2DBackend::new(11, 11))
///     .problem(Binomial)
///     .build();
/// assert_eq!(cache.get(&(10, 5)).unwrap(), 252);
/// ```
pub struct DpCache<I, K, B, P> {
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<fn(&I) -> K>,
}

impl DpCache<(), (), (), ()> {
    /// Start building a cache; both a backend and a problem are required.
    pub fn builder() -> DpCacheBuilder<(), ()> {
        DpCacheBuilder {
            backend: (),
            problem: (),
        }
    }
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    /// Retrieves the value for the given index, computing it if necessary.
    ///
    /// If the value is already cached, returns a clone of the cached value.
    /// Otherwise, resolves all dependencies recursively, computes the value,
    /// caches it, and returns a clone.
    ///
    /// # Errors
    ///
    /// [`DpCacheError::IndexOutOfBounds`] when the index, or any index it
    /// depends on, does not fit a bounded backend.
    pub fn get(&self, index: &I) -> Result<K, DpCacheError> {
        // Fast path: already computed
        if let Some(value) = self.backend.borrow().get(index) {
            return Ok(value.clone());
        }

        // Resolve dependencies with no borrow held
        let dep_values = self
            .problem
            .deps(index)
            .iter()
            .map(|dep| self.get(dep))
            .collect::<Result<Vec<K>, _>>()?;

        let mut backend = self.backend.borrow_mut();
        let value = backend.get_or_insert(index.clone(), || {
            self.problem.compute(index, dep_values)
        })?;
        Ok(value.clone())
    }
}

/// Builder returned by [`DpCache::builder`].
pub struct DpCacheBuilder<B, P> {
    backend: B,
    problem: P,
}

impl<B, P> DpCacheBuilder<B, P> {
    pub fn backend<B2>(self, backend: B2) -> DpCacheBuilder<B2, P> {
        DpCacheBuilder {
            backend,
            problem: self.problem,
        }
    }

    pub fn problem<P2>(self, problem: P2) -> DpCacheBuilder<B, P2> {
        DpCacheBuilder {
            backend: self.backend,
            problem,
        }
    }

    pub fn build<I, K>(self) -> DpCache<I, K, B, P>
    where
        B: Backend<I, K>,
        P: DpProblem<I, K>,
    {
        DpCache {
            backend: RefCell::new(self.backend),
            problem: self.problem,
            _phantom: PhantomData,
        }
    }
}
