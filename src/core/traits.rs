//! Core shape and access traits for spanmat.

/// Row/column extent of a two-dimensional container.
pub trait MatShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
}

/// Unchecked element access by (row, column) position.
pub trait MatrixGet<T> {
    /// Return the element at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` is outside the container's extent. Callers that
    /// need a fallible lookup go through [`crate::matrix::Slicing::cell`].
    fn get(&self, i: usize, j: usize) -> T;
}
