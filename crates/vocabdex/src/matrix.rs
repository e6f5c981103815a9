//! # Dense Row-Major Matrix
//!
//! A minimal 2-D container for the matrix-shaped encode/decode operations.
//! Rows are contiguous in memory, so row access is a cheap slice view.

use crate::errors::{VXResult, VocabdexError};

/// A dense row-major 2-D array.
///
/// `rows * cols == data.len()` always holds; a matrix may have zero rows
/// or zero columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy> Matrix<T> {
    /// Create a `rows x cols` matrix with every element set to `fill`.
    pub fn full(
        rows: usize,
        cols: usize,
        fill: T,
    ) -> Self {
        Self {
            rows,
            cols,
            data: vec![fill; rows * cols],
        }
    }

    /// Create a matrix from equal-length rows.
    ///
    /// ## Arguments
    /// * `rows` - A slice of row slices; all rows must share one length.
    ///
    /// ## Returns
    /// A `Result<Matrix<T>>`, with [`VocabdexError::RaggedRows`] if the row
    /// lengths differ. Zero rows produce a `0 x 0` matrix.
    pub fn from_rows<S>(rows: &[S]) -> VXResult<Self>
    where
        S: AsRef<[T]>,
    {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(VocabdexError::RaggedRows {
                    row: i,
                    len: row.len(),
                    expected: cols,
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }
}

impl<T> Matrix<T> {
    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// View row `i` as a slice.
    ///
    /// ## Panics
    /// If `i >= self.rows()`.
    pub fn row(
        &self,
        i: usize,
    ) -> &[T] {
        assert!(i < self.rows, "row {i} out of range ({} rows)", self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Mutable view of row `i`.
    ///
    /// ## Panics
    /// If `i >= self.rows()`.
    pub fn row_mut(
        &mut self,
        i: usize,
    ) -> &mut [T] {
        assert!(i < self.rows, "row {i} out of range ({} rows)", self.rows);
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Get the element at `(row, col)`, or `None` when out of range.
    pub fn get(
        &self,
        row: usize,
        col: usize,
    ) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Iterate over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // Not `chunks(cols)`: cols may be 0.
        (0..self.rows).map(move |i| &self.data[i * self.cols..(i + 1) * self.cols])
    }

    /// The backing row-major element slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}
