//! Span-based selection over any shaped, gettable container.
//!
//! The source semantics come from NumPy-style subscripting with six key
//! shapes: cell, row span, column span, block, bare outer index, and a bare
//! span. Each key shape is an explicit method here, dispatched at the call
//! site. Spanned selections resolve their endpoints against the relevant
//! axis before any cell is read, so an empty selection never touches (or
//! bounds-checks) the other axis.

use crate::core::traits::{MatShape, MatrixGet};
use crate::error::MatError;
use crate::matrix::span::Span;

/// Result of a bare outer-index lookup.
///
/// Multi-row matrices store rows in the outer dimension, so indexing them
/// yields a row. A 1-row matrix degenerates to its single row, so indexing
/// it yields a bare element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowEntry<T> {
    /// Element of a 1-row matrix.
    Element(T),
    /// Full row of a multi-row matrix.
    Row(Vec<T>),
}

/// Span-based accessors, available on anything with a shape and element access.
pub trait Slicing<T>: MatShape + MatrixGet<T> {
    /// Scalar at `(row, col)`.
    fn cell(&self, row: usize, col: usize) -> Result<T, MatError> {
        if row >= self.nrows() {
            return Err(MatError::RowOutOfRange(row, self.nrows()));
        }
        if col >= self.ncols() {
            return Err(MatError::ColOutOfRange(col, self.ncols()));
        }
        Ok(self.get(row, col))
    }

    /// Selected columns of one row, as a flat vector.
    fn row_span(&self, row: usize, cols: impl Into<Span>) -> Result<Vec<T>, MatError> {
        let idx = cols.into().indices(self.ncols())?;
        if idx.len() == 0 {
            return Ok(Vec::new());
        }
        if row >= self.nrows() {
            return Err(MatError::RowOutOfRange(row, self.nrows()));
        }
        Ok(idx.map(|j| self.get(row, j)).collect())
    }

    /// One column's value over the selected rows, as a flat vector.
    fn col_span(&self, rows: impl Into<Span>, col: usize) -> Result<Vec<T>, MatError> {
        let idx = rows.into().indices(self.nrows())?;
        if idx.len() == 0 {
            return Ok(Vec::new());
        }
        if col >= self.ncols() {
            return Err(MatError::ColOutOfRange(col, self.ncols()));
        }
        Ok(idx.map(|i| self.get(i, col)).collect())
    }

    /// Submatrix over the selected rows and columns, rows outer.
    fn block(&self, rows: impl Into<Span>, cols: impl Into<Span>) -> Result<Vec<Vec<T>>, MatError> {
        let rows = rows.into().indices(self.nrows())?;
        let cols = cols.into().indices(self.ncols())?;
        let mut out = Vec::with_capacity(rows.len());
        for i in rows {
            out.push(cols.clone().map(|j| self.get(i, j)).collect());
        }
        Ok(out)
    }

    /// Bare outer-index lookup: the stored row, or a bare element when the
    /// matrix has exactly one row.
    fn row_entry(&self, index: usize) -> Result<RowEntry<T>, MatError> {
        if self.nrows() == 1 {
            if index >= self.ncols() {
                return Err(MatError::ColOutOfRange(index, self.ncols()));
            }
            Ok(RowEntry::Element(self.get(0, index)))
        } else {
            if index >= self.nrows() {
                return Err(MatError::RowOutOfRange(index, self.nrows()));
            }
            Ok(RowEntry::Row((0..self.ncols()).map(|j| self.get(index, j)).collect()))
        }
    }

    /// First column value of each selected row.
    ///
    /// A bare span selects rows but projects only column 0, not whole rows.
    /// This mirrors the historical single-span subscript, which is
    /// asymmetric with the bare-integer key; callers wanting full rows use
    /// [`Slicing::block`] with a full column span.
    fn leading_col(&self, rows: impl Into<Span>) -> Result<Vec<T>, MatError> {
        let idx = rows.into().indices(self.nrows())?;
        if idx.len() == 0 {
            return Ok(Vec::new());
        }
        if self.ncols() == 0 {
            return Err(MatError::ColOutOfRange(0, 0));
        }
        Ok(idx.map(|i| self.get(i, 0)).collect())
    }

    /// Full row `index`. Sugar for `row_span(index, ..)`.
    fn get_row(&self, index: usize) -> Result<Vec<T>, MatError> {
        self.row_span(index, ..)
    }

    /// Full column `index`. Sugar for `col_span(.., index)`.
    fn get_col(&self, index: usize) -> Result<Vec<T>, MatError> {
        self.col_span(.., index)
    }
}

/// Blanket impl: any shaped, gettable container gets span selection.
impl<T, M: MatShape + MatrixGet<T>> Slicing<T> for M {}
