//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use super::*;

type Pos = (usize, usize);

/// Simple problem with no dependencies for testing
struct NoDeps;

impl DpProblem<Pos, usize> for NoDeps {
    fn deps(&self, _index: &Pos) -> Vec<Pos> {
        vec![]
    }

    fn compute(&self, &(r, c): &Pos, _deps: Vec<usize>) -> usize {
        r * 10 + c
    }
}

/// Fibonacci numbers along row 0
struct Fibonacci;

impl DpProblem<Pos, u64> for Fibonacci {
    fn deps(&self, &(r, n): &Pos) -> Vec<Pos> {
        if n <= 1 {
            vec![]
        } else {
            vec![(r, n - 1), (r, n - 2)]
        }
    }

    fn compute(&self, &(_, n): &Pos, deps: Vec<u64>) -> u64 {
        if n <= 1 {
            n as u64
        } else {
            deps[0] + deps[1]
        }
    }
}

/// Every cell depends on the one to its right until `last_col`
struct RightChain {
    last_col: usize,
}

impl DpProblem<Pos, u32> for RightChain {
    fn deps(&self, &(r, c): &Pos) -> Vec<Pos> {
        if c < self.last_col {
            vec![(r, c + 1)]
        } else {
            vec![]
        }
    }

    fn compute(&self, _index: &Pos, deps: Vec<u32>) -> u32 {
        deps.first().map_or(0, |d| d + 1)
    }
}

#[test]
fn test_basic_cache_creation_and_single_value() {
    let cache = DpCache::builder()
        .backend(Vec2DBackend::new(3, 10))
        .problem(NoDeps)
        .build();

    assert_eq!(cache.get(&(0, 5)).unwrap(), 5);
    assert_eq!(cache.get(&(2, 9)).unwrap(), 29);
    assert_eq!(cache.get(&(0, 0)).unwrap(), 0);
}

#[test]
fn test_fibonacci_linear_dependency_chain() {
    let cache = DpCache::builder()
        .backend(Vec2DBackend::new(1, 91))
        .problem(Fibonacci)
        .build();

    assert_eq!(cache.get(&(0, 0)).unwrap(), 0);
    assert_eq!(cache.get(&(0, 1)).unwrap(), 1);
    assert_eq!(cache.get(&(0, 5)).unwrap(), 5);
    assert_eq!(cache.get(&(0, 20)).unwrap(), 6765);
    assert_eq!(cache.get(&(0, 90)).unwrap(), 2_880_067_194_370_816_120);
}

#[test]
fn test_diamond_dependency_memoization() {
    // A(0) depends on B(1) and C(2), both depend on D(3)
    let compute_count = Rc::new(Cell::new(0));

    struct Diamond {
        count: Rc<Cell<i32>>,
    }

    impl DpProblem<Pos, i32> for Diamond {
        fn deps(&self, &(r, _): &Pos) -> Vec<Pos> {
            match r {
                0 => vec![(1, 0), (2, 0)],
                1 | 2 => vec![(3, 0)],
                _ => vec![],
            }
        }

        fn compute(&self, &(r, _): &Pos, deps: Vec<i32>) -> i32 {
            self.count.set(self.count.get() + 1);
            match r {
                0 => deps[0] + deps[1],
                1 => deps[0] * 2,
                2 => deps[0] * 3,
                _ => 10,
            }
        }
    }

    let cache = DpCache::builder()
        .backend(Vec2DBackend::new(4, 1))
        .problem(Diamond {
            count: compute_count.clone(),
        })
        .build();

    // D=10, B=20, C=30, A=50
    assert_eq!(cache.get(&(0, 0)).unwrap(), 50);
    assert_eq!(compute_count.get(), 4);

    let _ = cache.get(&(0, 0)).unwrap();
    assert_eq!(compute_count.get(), 4);
}

#[test]
fn test_vec2d_backend_get_or_insert() {
    let mut backend: Vec2DBackend<i32> = Vec2DBackend::new(2, 3);

    assert_eq!(*backend.get_or_insert((1, 2), || 42).unwrap(), 42);
    // cached value wins over a new computation
    assert_eq!(*backend.get_or_insert((1, 2), || 999).unwrap(), 42);
    assert_eq!(backend.get(&(1, 2)), Some(&42));
    assert_eq!(backend.get(&(0, 0)), None);
}

#[test]
fn test_vec2d_backend_bounds() {
    let mut backend: Vec2DBackend<u8> = Vec2DBackend::new(2, 3);

    assert_eq!(backend.get(&(2, 0)), None);
    assert_eq!(backend.get(&(0, 3)), None);

    let err = backend.get_or_insert((0, 3), || 1).unwrap_err();
    assert_eq!(
        err,
        DpCacheError::IndexOutOfBounds {
            index: "(0, 3)".to_string(),
            bounds: "2x3".to_string(),
        }
    );
}

#[test]
fn test_dependency_chain_inside_bounds() {
    let cache = DpCache::builder()
        .backend(Vec2DBackend::new(1, 5))
        .problem(RightChain { last_col: 4 })
        .build();

    assert_eq!(cache.get(&(0, 0)).unwrap(), 4);
    assert_eq!(cache.get(&(0, 4)).unwrap(), 0);
}

#[test]
fn test_out_of_bounds_dependency_propagates() {
    // the chain ends one column past the grid
    let cache = DpCache::builder()
        .backend(Vec2DBackend::new(1, 4))
        .problem(RightChain { last_col: 4 })
        .build();

    assert_eq!(
        cache.get(&(0, 0)),
        Err(DpCacheError::IndexOutOfBounds {
            index: "(0, 4)".to_string(),
            bounds: "1x4".to_string(),
        })
    );
}
