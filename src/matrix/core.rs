//! Core Matrix type: construction, accessors, and structural edits

use crate::element::Element;
use crate::error::{Error, Result};
use crate::profile;
use crate::row::RowVector;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Dense 2-D numeric grid with row-major storage
///
/// A `Matrix` owns an ordered sequence of [`RowVector`] rows, all of the
/// same length. Every mutating operation maintains that invariant, and the
/// stored row/column counts always agree with the actual row sequence.
///
/// Matrices never share storage: `clone` produces a fully independent deep
/// copy, and the operations that need a snapshot (transpose, reshape, the
/// determinant recursion) copy rather than alias.
///
/// A fully constructed matrix is safe to read from multiple threads;
/// concurrent mutation is not supported.
///
/// # Example
///
/// ```ignore
/// use densemat::prelude::*;
///
/// let m = Matrix::from_nested(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
/// assert_eq!(m.determinant(), -2.0);
/// ```
pub struct Matrix<T: Element> {
    pub(super) rows: usize,
    pub(super) cols: usize,
    pub(super) data: Vec<RowVector<T>>,
}

impl<T: Element> Matrix<T> {
    /// Create an empty 0x0 matrix
    pub fn new() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }

    /// Create a matrix with every cell zero-initialized
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: (0..rows).map(|_| RowVector::with_len(cols)).collect(),
        }
    }

    /// Create the n-by-n identity matrix
    pub fn identity(dim: usize) -> Self {
        let mut m = Self::zeros(dim, dim);
        for i in 0..dim {
            m.data[i][i] = T::one();
        }
        m
    }

    /// Create a matrix from nested cell sequences
    ///
    /// Row count is the outer length; column count is the length of the
    /// first row.
    ///
    /// # Panics
    ///
    /// Panics if a later row differs in length from the first. For a
    /// fallible alternative, use [`Self::try_from_nested`].
    pub fn from_nested(nested: Vec<Vec<T>>) -> Self {
        Self::try_from_nested(nested).expect("Matrix::from_nested failed")
    }

    /// Create a matrix from nested cell sequences (fallible version)
    ///
    /// Returns [`Error::RaggedRows`] if any row differs in length from the
    /// first.
    pub fn try_from_nested(nested: Vec<Vec<T>>) -> Result<Self> {
        Self::try_from_rows(nested.into_iter().map(RowVector::from).collect())
    }

    /// Create a matrix from an existing sequence of rows
    ///
    /// # Panics
    ///
    /// Panics if a later row differs in length from the first. For a
    /// fallible alternative, use [`Self::try_from_rows`].
    pub fn from_rows(rows: Vec<RowVector<T>>) -> Self {
        Self::try_from_rows(rows).expect("Matrix::from_rows failed")
    }

    /// Create a matrix from an existing sequence of rows (fallible version)
    ///
    /// Returns [`Error::RaggedRows`] if any row differs in length from the
    /// first.
    pub fn try_from_rows(rows: Vec<RowVector<T>>) -> Result<Self> {
        let cols = rows.first().map(|row| row.len()).unwrap_or(0);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::ragged_rows(i, cols, row.len()));
            }
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data: rows,
        })
    }

    // ===== Accessors =====

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix holds no cells
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether the row and column counts are equal
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Iterate over the rows in order
    pub fn iter_rows(&self) -> impl Iterator<Item = &RowVector<T>> {
        self.data.iter()
    }

    // ===== Structural edits =====

    /// Drop all rows and reset both counts to zero
    pub fn clear(&mut self) {
        self.data.clear();
        self.rows = 0;
        self.cols = 0;
    }

    /// Replace row `idx` with the given cells
    ///
    /// # Panics
    ///
    /// Panics if `idx >= rows()`. The new row is trusted to match the
    /// column count.
    pub fn set_row(&mut self, idx: usize, row: impl Into<RowVector<T>>) {
        let row = row.into();
        debug_assert_eq!(row.len(), self.cols, "set_row: row length mismatch");
        self.data[idx] = row;
    }

    /// Replace column `idx` with the given cells
    ///
    /// The walk covers one entry per *column*: on a square matrix this
    /// replaces the whole column, while on a rectangular matrix only the
    /// first `cols()` rows are touched (and the walk panics when
    /// `cols() > rows()`).
    ///
    /// # Panics
    ///
    /// Panics if `idx >= cols()` or when the walk steps past the last row.
    pub fn set_column(&mut self, idx: usize, column: &[T]) {
        assert!(
            idx < self.cols,
            "set_column: column {} out of range for {} columns",
            idx,
            self.cols
        );
        for i in 0..self.cols {
            self.data[i][idx] = column[i];
        }
    }

    /// Return the transpose: cell `(j, i)` of the result equals cell
    /// `(i, j)` of the source
    ///
    /// Always builds a freshly allocated grid of the swapped dimensions.
    pub fn transpose(&self) -> Self {
        let _scope = profile::scope("transpose");
        let mut out = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.data[j][i] = self.data[i][j];
            }
        }
        out
    }

    /// Remove row `row` entirely; the row count shrinks by one
    ///
    /// Trimming an out-of-range row is a recoverable no-op: a diagnostic is
    /// logged, the matrix is left untouched, and `false` is returned.
    pub fn trim_row(&mut self, row: usize) -> bool {
        if row >= self.data.len() {
            log::warn!("trim_row: row {} doesn't exist ({} rows)", row, self.rows);
            return false;
        }
        self.data.remove(row);
        self.rows -= 1;
        true
    }

    /// Remove column `column` from every row; the column count shrinks by one
    ///
    /// Trimming an out-of-range column is a recoverable no-op: a diagnostic
    /// is logged, the matrix is left untouched, and `false` is returned.
    pub fn trim_column(&mut self, column: usize) -> bool {
        if column >= self.cols {
            log::warn!(
                "trim_column: column {} doesn't exist ({} columns)",
                column,
                self.cols
            );
            return false;
        }
        for row in &mut self.data {
            row.erase(column);
        }
        self.cols -= 1;
        true
    }

    /// Remove row `row`, then column `column` from the shortened matrix
    ///
    /// Both trims are attempted; each no-ops independently when its index
    /// is out of range. Returns `true` only when both succeeded.
    pub fn trim(&mut self, row: usize, column: usize) -> bool {
        let row_removed = self.trim_row(row);
        let column_removed = self.trim_column(column);
        row_removed && column_removed
    }

    /// Copy of this matrix with row `row` and column `column` removed
    pub fn trimmed(&self, row: usize, column: usize) -> Self {
        let mut out = self.clone();
        out.trim(row, column);
        out
    }

    /// Re-linearize all cells in row-major order into a new grid shape
    ///
    /// # Panics
    ///
    /// Panics if `new_rows * new_cols` differs from the current cell count.
    pub fn reshape(&mut self, new_rows: usize, new_cols: usize) {
        assert_eq!(
            self.rows * self.cols,
            new_rows * new_cols,
            "reshape: cell count must not change ({}x{} -> {}x{})",
            self.rows,
            self.cols,
            new_rows,
            new_cols
        );
        let _scope = profile::scope("reshape");
        let snapshot = std::mem::replace(self, Self::zeros(new_rows, new_cols));
        let mut r = 0;
        let mut c = 0;
        for row in &snapshot.data {
            for &cell in row.iter() {
                self.data[r][c] = cell;
                c += 1;
                if c == new_cols {
                    c = 0;
                    r += 1;
                }
            }
        }
    }

    /// Replace row `idx` with `row`, which must match the column count
    ///
    /// # Panics
    ///
    /// Panics if `row.len() != cols()` or if `idx > rows()`. The
    /// precondition admits `idx == rows()`, but the row write itself still
    /// panics there.
    pub fn replace_row(&mut self, idx: usize, row: impl Into<RowVector<T>>) {
        let row = row.into();
        assert_eq!(
            row.len(),
            self.cols,
            "replace_row: row length {} != column count {}",
            row.len(),
            self.cols
        );
        assert!(
            idx <= self.rows,
            "replace_row: row {} out of range for {} rows",
            idx,
            self.rows
        );
        self.data[idx] = row;
    }

    /// Replace column `idx` across all rows with `column`, which must match
    /// the row count
    ///
    /// # Panics
    ///
    /// Panics if `column.len() != rows()` or if `idx >= cols()`.
    pub fn replace_column(&mut self, idx: usize, column: &[T]) {
        assert_eq!(
            column.len(),
            self.rows,
            "replace_column: column length {} != row count {}",
            column.len(),
            self.rows
        );
        assert!(
            idx < self.cols,
            "replace_column: column {} out of range for {} columns",
            idx,
            self.cols
        );
        for (row, &value) in self.data.iter_mut().zip(column.iter()) {
            row[idx] = value;
        }
    }

    // ===== Shape predicates =====

    /// Whether every off-diagonal cell is zero
    ///
    /// Non-square matrices log a diagnostic and return `false`.
    pub fn is_diagonal(&self) -> bool {
        if !self.check_square("is_diagonal") {
            return false;
        }
        self.scan_cells(|i, j, cell| i == j || cell == T::zero())
    }

    /// Whether every cell below the diagonal is zero
    ///
    /// Non-square matrices log a diagnostic and return `false`.
    pub fn is_upper_triangular(&self) -> bool {
        if !self.check_square("is_upper_triangular") {
            return false;
        }
        self.scan_cells(|i, j, cell| i <= j || cell == T::zero())
    }

    /// Whether every cell above the diagonal is zero
    ///
    /// Non-square matrices log a diagnostic and return `false`.
    pub fn is_lower_triangular(&self) -> bool {
        if !self.check_square("is_lower_triangular") {
            return false;
        }
        self.scan_cells(|i, j, cell| i >= j || cell == T::zero())
    }

    /// Whether this is the identity: ones on the diagonal, zeros elsewhere
    ///
    /// Non-square matrices log a diagnostic and return `false`.
    pub fn is_identity(&self) -> bool {
        if !self.check_square("is_identity") {
            return false;
        }
        self.scan_cells(|i, j, cell| {
            if i == j {
                cell == T::one()
            } else {
                cell == T::zero()
            }
        })
    }

    fn check_square(&self, op: &'static str) -> bool {
        if self.is_square() {
            true
        } else {
            log::warn!(
                "{}: requires a square matrix, got {}x{}",
                op,
                self.rows,
                self.cols
            );
            false
        }
    }

    fn scan_cells(&self, predicate: impl Fn(usize, usize, T) -> bool) -> bool {
        for i in 0..self.rows {
            for j in 0..self.cols {
                if !predicate(i, j, self.data[i][j]) {
                    return false;
                }
            }
        }
        true
    }
}

impl<T: Element> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.clone(),
        }
    }
}

impl<T: Element> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("data", &self.data)
            .finish()
    }
}

/// Row-major diagnostic dump: space-separated cells, one row per line
impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

impl<T: Element> Index<usize> for Matrix<T> {
    type Output = RowVector<T>;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.data[idx]
    }
}

impl<T: Element> IndexMut<usize> for Matrix<T> {
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_dimensions() {
        let m = Matrix::<f64>::zeros(2, 3);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m[1], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_identity_cells() {
        let m = Matrix::<f64>::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[i][j], if i == j { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_from_nested_counts() {
        let m = Matrix::from_nested(vec![vec![1.0f64, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m[0][2], 3.0);
        assert_eq!(m[1][0], 4.0);
    }

    #[test]
    fn test_try_from_nested_rejects_ragged_rows() {
        let err = Matrix::try_from_nested(vec![vec![1.0f64, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::RaggedRows {
                row: 1,
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_clone_is_deep() {
        let m = Matrix::from_nested(vec![vec![1.0f64, 2.0], vec![3.0, 4.0]]);
        let mut copy = m.clone();
        copy[0][0] = 9.0;
        assert_eq!(m[0][0], 1.0);
        assert_eq!(copy[0][0], 9.0);
    }

    #[test]
    fn test_clear_resets_counts() {
        let mut m = Matrix::from_nested(vec![vec![1.0f64, 2.0], vec![3.0, 4.0]]);
        m.clear();
        assert_eq!(m.rows(), 0);
        assert_eq!(m.cols(), 0);
        assert!(m.is_empty());
    }
}
