//! Algebraic core: determinant, inverse, and linear solve

use super::Matrix;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::profile;
use crate::row::RowVector;

impl<T: Element> Matrix<T> {
    /// Determinant magnitude below this is treated as zero for the
    /// singularity test in [`Self::inverse`]
    pub const SINGULAR_EPS: f64 = 0.00005;

    /// Squared-determinant threshold below which [`Self::solve`] reports
    /// that the system has no unique solution
    pub const SOLVE_EPS: f64 = 0.001;

    /// Compute the determinant by cofactor expansion along the first row
    ///
    /// Cost is factorial in the matrix size; this is a deliberate
    /// simplicity-over-performance choice, so keep matrices small.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    pub fn determinant(&self) -> T {
        assert!(
            self.is_square(),
            "determinant requires a square matrix, got {}x{}",
            self.rows,
            self.cols
        );
        let _scope = profile::scope("determinant");
        self.det_expansion()
    }

    fn det_expansion(&self) -> T {
        if self.rows == 0 {
            // Empty product convention; also makes the 1x1 adjugate work out.
            return T::one();
        }
        if self.rows == 1 {
            return self.data[0][0];
        }
        if self.rows == 2 {
            return self.data[0][0] * self.data[1][1] - self.data[0][1] * self.data[1][0];
        }

        let mut det = T::zero();
        let mut sign = T::one();
        for f in 0..self.cols {
            let minor = self.trimmed(0, f);
            det += sign * self.data[0][f] * minor.det_expansion();
            sign = -sign;
        }
        det
    }

    /// Compute the inverse via the adjugate
    ///
    /// Builds the cofactor matrix (minor determinants with checkerboard
    /// signs), transposes it, and divides every cell by the determinant.
    ///
    /// Returns `None` when the determinant magnitude is below
    /// [`Self::SINGULAR_EPS`]. Callers that need the original's
    /// leave-unchanged behavior should use [`Self::invert`].
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    pub fn inverse(&self) -> Option<Self> {
        let _scope = profile::scope("inverse");
        let det = self.determinant();
        if det.to_f64().abs() < Self::SINGULAR_EPS {
            log::warn!("inverse: matrix is singular (determinant {det})");
            return None;
        }

        let mut cofactors = Self::zeros(self.rows, self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                let mut minor_det = self.trimmed(i, j).det_expansion();
                if (i + j) % 2 == 1 {
                    minor_det = -minor_det;
                }
                cofactors.data[i][j] = minor_det;
            }
        }

        let mut adjugate = cofactors.transpose();
        adjugate /= det;
        Some(adjugate)
    }

    /// Replace this matrix with its inverse
    ///
    /// A singular matrix (determinant magnitude below
    /// [`Self::SINGULAR_EPS`]) leaves the matrix unchanged and returns
    /// `false`.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    pub fn invert(&mut self) -> bool {
        match self.inverse() {
            Some(inverse) => {
                *self = inverse;
                true
            }
            None => false,
        }
    }

    /// Solve `self * roots = rhs` by Cramer's rule
    ///
    /// For each column `j`, the determinant of the matrix with column `j`
    /// replaced by `rhs` is divided by the coefficient determinant.
    ///
    /// Returns [`Error::NoUniqueSolution`] when the squared determinant is
    /// below [`Self::SOLVE_EPS`]; no partial roots are produced.
    ///
    /// # Panics
    ///
    /// Panics if `rhs.len() != rows()` or if the matrix is not square.
    pub fn solve(&self, rhs: &[T]) -> Result<RowVector<T>> {
        assert_eq!(
            rhs.len(),
            self.rows,
            "solve: rhs length {} != row count {}",
            rhs.len(),
            self.rows
        );
        let _scope = profile::scope("solve");

        let det = self.determinant();
        let det_f = det.to_f64();
        if det_f * det_f < Self::SOLVE_EPS {
            log::debug!("solve: no unique solution (determinant {det})");
            return Err(Error::no_unique_solution(det_f));
        }

        let mut roots = RowVector::with_len(self.cols);
        for j in 0..self.cols {
            let mut replaced = self.clone();
            replaced.replace_column(j, rhs);
            roots[j] = replaced.det_expansion() / det;
        }
        Ok(roots)
    }
}
