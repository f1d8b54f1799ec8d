//! Integration tests for the algebraic core
//!
//! Tests verify:
//! - determinant base cases, cofactor expansion, det(Aᵀ) == det(A)
//! - inverse against known values and the A * A⁻¹ ≈ I property
//! - singular-matrix handling (inverse None, invert leaves state untouched)
//! - Cramer's-rule solve, including the fixed regression vector
//! - F32 and F64 cell types

use densemat::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// Assert all cells of two matrices are close within tolerance
fn assert_matrix_allclose(a: &Matrix<f64>, b: &Matrix<f64>, tol: f64, msg: &str) {
    assert_eq!(a.rows(), b.rows(), "{}: row count mismatch", msg);
    assert_eq!(a.cols(), b.cols(), "{}: column count mismatch", msg);
    for i in 0..a.rows() {
        for j in 0..a.cols() {
            let diff = (a[i][j] - b[i][j]).abs();
            assert!(
                diff <= tol,
                "{}: cell ({}, {}) differs: {} vs {} (diff={})",
                msg,
                i,
                j,
                a[i][j],
                b[i][j],
                diff
            );
        }
    }
}

/// Assert a row matches expected values within tolerance
fn assert_row_allclose(row: &RowVector<f64>, expected: &[f64], tol: f64, msg: &str) {
    assert_eq!(row.len(), expected.len(), "{}: length mismatch", msg);
    for (i, (got, want)) in row.iter().zip(expected.iter()).enumerate() {
        let diff = (got - want).abs();
        assert!(
            diff <= tol,
            "{}: root {} differs: {} vs {} (diff={})",
            msg,
            i,
            got,
            want,
            diff
        );
    }
}

fn cramer_fixture() -> Matrix<f64> {
    Matrix::from_nested(vec![
        vec![2.0f64, 1.0, 1.0],
        vec![1.0, -1.0, 0.0],
        vec![3.0, -1.0, 2.0],
    ])
}

// ============================================================================
// Determinant Tests
// ============================================================================

#[test]
fn test_determinant_1x1_is_the_sole_cell() {
    let m = Matrix::from_nested(vec![vec![7.0f64]]);
    assert_eq!(m.determinant(), 7.0);
}

#[test]
fn test_determinant_2x2() {
    let m = Matrix::from_nested(vec![vec![1.0f64, 2.0], vec![3.0, 4.0]]);
    assert_eq!(m.determinant(), -2.0);
}

#[test]
fn test_determinant_3x3_known_value() {
    assert_eq!(cramer_fixture().determinant(), -4.0);
}

#[test]
fn test_determinant_4x4_block_diagonal() {
    let m = Matrix::from_nested(vec![
        vec![1.0f64, 2.0, 0.0, 0.0],
        vec![3.0, 4.0, 0.0, 0.0],
        vec![0.0, 0.0, 5.0, 6.0],
        vec![0.0, 0.0, 7.0, 8.0],
    ]);
    // det of each 2x2 block is -2; the product is 4.
    assert_eq!(m.determinant(), 4.0);
}

#[test]
fn test_determinant_of_identity_is_one() {
    assert_eq!(Matrix::<f64>::identity(4).determinant(), 1.0);
}

#[test]
fn test_determinant_is_transpose_invariant() {
    let fixtures = [
        cramer_fixture(),
        Matrix::from_nested(vec![vec![1.0f64, 2.0], vec![3.0, 4.0]]),
        Matrix::from_nested(vec![
            vec![1.0f64, 2.0, 0.0, 0.0],
            vec![3.0, 4.0, 0.0, 0.0],
            vec![0.0, 0.0, 5.0, 6.0],
            vec![0.0, 0.0, 7.0, 8.0],
        ]),
    ];
    for m in &fixtures {
        assert_eq!(m.transpose().determinant(), m.determinant());
    }
}

#[test]
fn test_determinant_f32_cells() {
    let m = Matrix::from_nested(vec![vec![1.0f32, 2.0], vec![3.0, 4.0]]);
    assert_eq!(m.determinant(), -2.0f32);
}

#[test]
#[should_panic(expected = "square")]
fn test_determinant_non_square_panics() {
    let m = Matrix::from_nested(vec![vec![1.0f64, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    let _ = m.determinant();
}

// ============================================================================
// Inverse Tests
// ============================================================================

#[test]
fn test_inverse_2x2_known_values() {
    let m = Matrix::from_nested(vec![vec![4.0f64, 7.0], vec![2.0, 6.0]]);
    let inv = m.inverse().expect("matrix is invertible");

    // det = 10, inverse = (1/10) * [[6, -7], [-2, 4]]
    let expected = Matrix::from_nested(vec![vec![0.6f64, -0.7], vec![-0.2, 0.4]]);
    assert_matrix_allclose(&inv, &expected, 1e-12, "inverse of 2x2");
}

#[test]
fn test_inverse_times_original_is_identity() {
    let m = cramer_fixture();
    let inv = m.inverse().expect("matrix is invertible");

    let product = &m * &inv;
    assert_matrix_allclose(
        &product,
        &Matrix::identity(3),
        1e-9,
        "A * inverse(A)",
    );
}

#[test]
fn test_inverse_1x1() {
    let m = Matrix::from_nested(vec![vec![4.0f64]]);
    let inv = m.inverse().expect("matrix is invertible");
    assert_matrix_allclose(
        &inv,
        &Matrix::from_nested(vec![vec![0.25f64]]),
        1e-12,
        "inverse of 1x1",
    );
}

#[test]
fn test_inverse_of_singular_matrix_is_none() {
    let m = Matrix::from_nested(vec![vec![1.0f64, 2.0], vec![2.0, 4.0]]);
    assert!(m.inverse().is_none());
}

#[test]
fn test_invert_leaves_singular_matrix_untouched() {
    let mut m = Matrix::from_nested(vec![vec![1.0f64, 2.0], vec![2.0, 4.0]]);
    let before = m.clone();

    assert!(!m.invert());
    assert_eq!(m, before);
}

#[test]
fn test_invert_replaces_invertible_matrix() {
    let mut m = Matrix::from_nested(vec![vec![4.0f64, 7.0], vec![2.0, 6.0]]);
    assert!(m.invert());

    let expected = Matrix::from_nested(vec![vec![0.6f64, -0.7], vec![-0.2, 0.4]]);
    assert_matrix_allclose(&m, &expected, 1e-12, "invert in place");
}

// ============================================================================
// Solve (Cramer) Tests
// ============================================================================

#[test]
fn test_solve_regression_vector() {
    let m = cramer_fixture();
    let roots = m.solve(&[2.0, -2.0, 2.0]).expect("system is solvable");

    // det = -4, column-replaced determinants 4, -4, -12
    assert_row_allclose(&roots, &[-1.0, 1.0, 3.0], 1e-12, "Cramer regression");
}

#[test]
fn test_solve_2x2() {
    let m = Matrix::from_nested(vec![vec![2.0f64, 1.0], vec![1.0, 3.0]]);
    let roots = m.solve(&[5.0, 10.0]).expect("system is solvable");
    assert_row_allclose(&roots, &[1.0, 3.0], 1e-12, "2x2 solve");
}

#[test]
fn test_solve_singular_system_reports_failure() {
    let m = Matrix::from_nested(vec![vec![1.0f64, 2.0], vec![2.0, 4.0]]);
    let err = m.solve(&[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, Error::NoUniqueSolution { .. }));
}

#[test]
fn test_solve_leaves_coefficients_untouched() {
    let m = cramer_fixture();
    let _ = m.solve(&[2.0, -2.0, 2.0]).expect("system is solvable");
    assert_eq!(m, cramer_fixture());
}

#[test]
#[should_panic(expected = "rhs length")]
fn test_solve_rhs_length_mismatch_panics() {
    let m = cramer_fixture();
    let _ = m.solve(&[1.0, 2.0]);
}
