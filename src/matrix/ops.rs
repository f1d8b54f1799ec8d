//! Arithmetic operators for Matrix
//!
//! Matrix-matrix and matrix-scalar forms of `+ - * /` plus their compound
//! assignments. Dimension mismatches are programmer errors and panic; the
//! one documented soft spot is division by a singular matrix (see
//! [`Div`]).

use super::Matrix;
use crate::element::Element;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

impl<T: Element> PartialEq for Matrix<T> {
    /// Matrices are equal iff both dimensions match and every row compares
    /// equal cell by cell
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}

// ===== Matrix + Matrix =====

impl<T: Element> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        assert!(
            self.rows == rhs.rows && self.cols == rhs.cols,
            "add: dimension mismatch ({}x{} vs {}x{})",
            self.rows,
            self.cols,
            rhs.rows,
            rhs.cols
        );
        for (row, other) in self.data.iter_mut().zip(rhs.data.iter()) {
            for (cell, &value) in row.iter_mut().zip(other.iter()) {
                *cell += value;
            }
        }
    }
}

impl<T: Element> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Self::Output {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

impl<T: Element> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn add(mut self, rhs: &Matrix<T>) -> Self::Output {
        self += rhs;
        self
    }
}

// ===== Matrix - Matrix =====

impl<T: Element> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        assert!(
            self.rows == rhs.rows && self.cols == rhs.cols,
            "sub: dimension mismatch ({}x{} vs {}x{})",
            self.rows,
            self.cols,
            rhs.rows,
            rhs.cols
        );
        for (row, other) in self.data.iter_mut().zip(rhs.data.iter()) {
            for (cell, &value) in row.iter_mut().zip(other.iter()) {
                *cell -= value;
            }
        }
    }
}

impl<T: Element> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Self::Output {
        let mut out = self.clone();
        out -= rhs;
        out
    }
}

impl<T: Element> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(mut self, rhs: &Matrix<T>) -> Self::Output {
        self -= rhs;
        self
    }
}

// ===== Matrix * Matrix =====

impl<T: Element> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// Standard matrix product: the result has `self.rows() x rhs.cols()`
    ///
    /// # Panics
    ///
    /// Panics unless `self.cols() == rhs.rows()`.
    fn mul(self, rhs: &Matrix<T>) -> Self::Output {
        assert_eq!(
            self.cols, rhs.rows,
            "mul: inner dimensions must agree ({}x{} * {}x{})",
            self.rows, self.cols, rhs.rows, rhs.cols
        );
        let mut out = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut acc = T::zero();
                for k in 0..self.cols {
                    acc += self.data[i][k] * rhs.data[k][j];
                }
                out.data[i][j] = acc;
            }
        }
        out
    }
}

impl<T: Element> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Self::Output {
        &self * rhs
    }
}

impl<T: Element> MulAssign<&Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        *self = &*self * rhs;
    }
}

// ===== Matrix / Matrix =====

impl<T: Element> Div<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// `A / B` is defined as `A * B⁻¹`
    ///
    /// When `B` is singular the inverse attempt leaves its operand
    /// unchanged, so the division silently yields `A * B`. Callers that
    /// need to detect this must check `B.determinant()` themselves.
    ///
    /// # Panics
    ///
    /// Panics if `B` is not square or the product dimensions disagree.
    fn div(self, rhs: &Matrix<T>) -> Self::Output {
        let mut divisor = rhs.clone();
        divisor.invert();
        self * &divisor
    }
}

impl<T: Element> Div<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: &Matrix<T>) -> Self::Output {
        &self / rhs
    }
}

impl<T: Element> DivAssign<&Matrix<T>> for Matrix<T> {
    fn div_assign(&mut self, rhs: &Matrix<T>) {
        *self = &*self / rhs;
    }
}

// ===== Matrix op scalar =====

impl<T: Element> AddAssign<T> for Matrix<T> {
    fn add_assign(&mut self, value: T) {
        for row in &mut self.data {
            for cell in row.iter_mut() {
                *cell += value;
            }
        }
    }
}

impl<T: Element> Add<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, value: T) -> Self::Output {
        let mut out = self.clone();
        out += value;
        out
    }
}

impl<T: Element> Add<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn add(mut self, value: T) -> Self::Output {
        self += value;
        self
    }
}

impl<T: Element> SubAssign<T> for Matrix<T> {
    fn sub_assign(&mut self, value: T) {
        for row in &mut self.data {
            for cell in row.iter_mut() {
                *cell -= value;
            }
        }
    }
}

impl<T: Element> Sub<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, value: T) -> Self::Output {
        let mut out = self.clone();
        out -= value;
        out
    }
}

impl<T: Element> Sub<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(mut self, value: T) -> Self::Output {
        self -= value;
        self
    }
}

impl<T: Element> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, value: T) {
        for row in &mut self.data {
            for cell in row.iter_mut() {
                *cell *= value;
            }
        }
    }
}

impl<T: Element> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, value: T) -> Self::Output {
        let mut out = self.clone();
        out *= value;
        out
    }
}

impl<T: Element> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(mut self, value: T) -> Self::Output {
        self *= value;
        self
    }
}

impl<T: Element> DivAssign<T> for Matrix<T> {
    /// # Panics
    ///
    /// Panics if `value` is zero.
    fn div_assign(&mut self, value: T) {
        assert!(value != T::zero(), "div: scalar divisor must be nonzero");
        for row in &mut self.data {
            for cell in row.iter_mut() {
                *cell /= value;
            }
        }
    }
}

impl<T: Element> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, value: T) -> Self::Output {
        let mut out = self.clone();
        out /= value;
        out
    }
}

impl<T: Element> Div<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn div(mut self, value: T) -> Self::Output {
        self /= value;
        self
    }
}
