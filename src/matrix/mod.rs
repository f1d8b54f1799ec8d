//! Matrix type and operations
//!
//! This module provides the core `Matrix` type: a dense, row-major 2-D
//! numeric grid built from [`RowVector`](crate::row::RowVector) rows.
//! Structural edits live in `core`, the algebraic operations (determinant,
//! inverse, solve) in `linalg`, and the arithmetic operators in `ops`.

mod core;
mod linalg;
mod ops;

pub use core::Matrix;
