//! Element trait for matrix cell types

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Trait for types that can be cells of a matrix
///
/// Implemented for the primitive float types. The algebraic operations
/// (determinant, inverse, solve) divide by computed determinants, so
/// integer types are deliberately not supported.
///
/// # Bounds
/// - `Copy + Clone + Send + Sync + 'static` - Basic trait requirements
/// - `Add + Sub + Mul + Div + Neg` - Arithmetic operations (Output = Self)
/// - `*Assign` - Compound assignment, used by the in-place operators
/// - `PartialOrd + PartialEq` - Comparison for the shape predicates
/// - `Debug + Display` - Diagnostics and the text dump
pub trait Element:
    Copy
    + Clone
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + PartialOrd
    + PartialEq
    + fmt::Debug
    + fmt::Display
{
    /// Convert to f64 for threshold comparisons
    fn to_f64(self) -> f64;

    /// Convert from f64 to this type
    fn from_f64(v: f64) -> Self;

    /// Zero value
    fn zero() -> Self;

    /// One value
    fn one() -> Self;
}

impl Element for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }
}

impl Element for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }
}
