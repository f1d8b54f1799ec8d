//! # densemat
//!
//! **Small dense-matrix algebra for Rust.**
//!
//! densemat provides a heap-allocated, row-major dense matrix with
//! structural editing (transpose, trim, reshape, row/column replacement),
//! a cofactor-expansion determinant, an adjugate-based inverse, linear
//! solving via Cramer's rule, and the full set of elementwise and matrix
//! arithmetic operators.
//!
//! ## Why densemat?
//!
//! - **Value semantics**: matrices own their rows exclusively; copies are
//!   deep, nothing aliases
//! - **Two-tier failures**: precondition violations panic at the call
//!   site; expected conditions (out-of-range trims, singular matrices,
//!   unsolvable systems) report status and leave state untouched
//! - **Pure Rust**: no BLAS/LAPACK bindings, single small dependency set
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use densemat::prelude::*;
//!
//! let a = Matrix::from_nested(vec![vec![2.0, 1.0], vec![1.0, 3.0]]);
//!
//! let det = a.determinant();
//! let inv = a.inverse().expect("matrix is not singular");
//! let product = &a * &inv; // approximately the identity
//!
//! let roots = a.solve(&[5.0, 10.0])?;
//! ```
//!
//! ## Design notes
//!
//! - The determinant is a recursive Laplace expansion: factorial cost,
//!   intended for small matrices only
//! - Singularity testing uses a fixed epsilon threshold; there is no
//!   pivoting
//! - Single-threaded throughout; a fully constructed matrix is safe for
//!   concurrent reads, not for concurrent mutation

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod element;
pub mod error;
pub mod matrix;
pub mod profile;
pub mod row;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::element::Element;
    pub use crate::error::{Error, Result};
    pub use crate::matrix::Matrix;
    pub use crate::row::RowVector;
}
