//! Storage backends for the DP cache.

use super::DpCacheError;

/// A storage backend for the DP cache.
///
/// Implementations pick the data structure that suits the index type, such
/// as the fixed grid of [`Vec2DBackend`] for `(row, col)` pairs.
///
/// # Contract
///
/// - `get` never computes; it returns `None` for indices without a value
/// - `get_or_insert` runs `compute` only when no value is cached yet
/// - bounded backends reject indices outside their bounds with an error
pub trait Backend<I, K> {
    /// Returns the cached value for the index, if any.
    fn get(&self, index: &I) -> Option<&K>;

    /// Returns the cached value, storing the result of `compute` first if the
    /// index has no value yet.
    fn get_or_insert<F>(&mut self, index: I, compute: F) -> Result<&K, DpCacheError>
    where
        F: FnOnce() -> K;
}

/// A fixed-size 2D backend for `(row, col)` indices.
///
/// Dimensions are chosen at runtime; indices outside `rows x cols` are
/// rejected with [`DpCacheError::IndexOutOfBounds`].
#[derive(Debug)]
pub struct Vec2DBackend<K> {
    rows: usize,
    cols: usize,
    data: Vec<Option<K>>,
}

impl<K> Vec2DBackend<K> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: (0..rows * cols).map(|_| None).collect(),
        }
    }

    fn offset(&self, (row, col): (usize, usize)) -> Option<usize> {
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }
}

impl<K> Backend<(usize, usize), K> for Vec2DBackend<K> {
    fn get(&self, index: &(usize, usize)) -> Option<&K> {
        self.data[self.offset(*index)?].as_ref()
    }

    fn get_or_insert<F>(&mut self, index: (usize, usize), compute: F) -> Result<&K, DpCacheError>
    where
        F: FnOnce() -> K,
    {
        let offset = self
            .offset(index)
            .ok_or_else(|| DpCacheError::IndexOutOfBounds {
                index: format!("{index:?}"),
                bounds: format!("{}x{}", self.rows, self.cols),
            })?;
        Ok(self.data[offset].get_or_insert_with(compute))
    }
}
