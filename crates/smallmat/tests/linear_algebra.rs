//! Integration tests for trace, determinant, inverse, transpose and the
//! arithmetic operations, including their shape errors.

use smallmat::{identity, zero, Matrix, MatrixError, ShapeError, Tolerance, UnsupportedSizeError};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn m(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows).expect("test grid should be rectangular")
}

// ---------------------------------------------------------------------------
// Trace / determinant
// ---------------------------------------------------------------------------

#[test]
fn trace_of_two_by_two() {
    assert_eq!(m(&[&[1.0, 2.0], &[3.0, 4.0]]).trace().unwrap(), 5.0);
}

#[test]
fn trace_of_non_square_is_shape_error() {
    let err = zero(2, 3).trace().unwrap_err();
    assert_eq!(
        err,
        MatrixError::Shape(ShapeError::NotSquare {
            op: "trace",
            shape: (2, 3),
        })
    );
}

#[test]
fn trace_works_for_larger_square_matrices() {
    assert_eq!(identity(4).trace().unwrap(), 4.0);
}

#[test]
fn determinant_of_one_by_one() {
    assert_eq!(m(&[&[-7.5]]).determinant().unwrap(), -7.5);
}

#[test]
fn determinant_of_two_by_two() {
    assert_eq!(m(&[&[1.0, 2.0], &[3.0, 4.0]]).determinant().unwrap(), -2.0);
}

#[test]
fn determinant_of_three_by_three_is_unsupported() {
    init_logger();
    let err = identity(3).determinant().unwrap_err();
    assert_eq!(
        err,
        MatrixError::UnsupportedSize(UnsupportedSizeError {
            op: "determinant",
            size: 3,
        })
    );
}

#[test]
fn determinant_of_non_square_is_shape_error_even_when_large() {
    assert!(zero(3, 4).determinant().unwrap_err().is_shape());
}

// ---------------------------------------------------------------------------
// Inverse
// ---------------------------------------------------------------------------

#[test]
fn inverse_of_one_by_one() {
    let inv = m(&[&[4.0]]).inverse().unwrap();
    assert_eq!(inv, m(&[&[0.25]]));
}

#[test]
fn inverse_of_two_by_two() {
    let a = m(&[&[4.0, 7.0], &[2.0, 6.0]]);
    let inv = a.inverse().unwrap();
    let expected = m(&[&[0.6, -0.7], &[-0.2, 0.4]]);
    assert!(inv.approx_eq(&expected, &Tolerance::default()), "{}", inv);

    let product = a.multiply(&inv).unwrap();
    assert!(product.approx_eq(&identity(2), &Tolerance::default()));
}

#[test]
fn inverse_of_singular_matrix_is_not_finite() {
    let singular = m(&[&[1.0, 2.0], &[2.0, 4.0]]);
    let inv = singular.inverse().unwrap();
    assert!(inv.as_slice().iter().all(|v| !v.is_finite()));
}

#[test]
fn inverse_of_zero_scalar_is_infinite() {
    let inv = m(&[&[0.0]]).inverse().unwrap();
    assert_eq!(inv[0][0], f64::INFINITY);
}

#[test]
fn inverse_errors() {
    assert!(zero(1, 2).inverse().unwrap_err().is_shape());
    assert!(identity(3).inverse().unwrap_err().is_unsupported_size());
}

// ---------------------------------------------------------------------------
// Transpose
// ---------------------------------------------------------------------------

#[test]
fn transpose_swaps_shape_and_indices() {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    let t = a.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t, m(&[&[1.0, 4.0], &[2.0, 5.0], &[3.0, 6.0]]));
    assert_eq!(t.transpose(), a);
}

// ---------------------------------------------------------------------------
// Add / negate / subtract
// ---------------------------------------------------------------------------

#[test]
fn add_is_elementwise() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = m(&[&[10.0, 20.0], &[30.0, 40.0]]);
    assert_eq!(a.add(&b).unwrap(), m(&[&[11.0, 22.0], &[33.0, 44.0]]));
}

#[test]
fn add_with_mismatched_shapes_is_shape_error() {
    init_logger();
    let err = zero(2, 2).add(&zero(3, 2)).unwrap_err();
    assert_eq!(
        err,
        MatrixError::Shape(ShapeError::Mismatch {
            op: "add",
            lhs: (2, 2),
            rhs: (3, 2),
        })
    );
}

#[test]
fn negate_flips_every_sign_and_leaves_operand_alone() {
    let a = m(&[&[1.0, -2.0]]);
    let neg = a.negate();
    assert_eq!(neg, m(&[&[-1.0, 2.0]]));
    assert_eq!(a, m(&[&[1.0, -2.0]]));
}

#[test]
fn subtract_is_add_of_negation() {
    let a = m(&[&[5.0, 5.0], &[5.0, 5.0]]);
    let b = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    assert_eq!(a.subtract(&b).unwrap(), m(&[&[4.0, 3.0], &[2.0, 1.0]]));
    assert!(a.subtract(&zero(1, 2)).unwrap_err().is_shape());
}

// ---------------------------------------------------------------------------
// Multiply / scalar multiply
// ---------------------------------------------------------------------------

#[test]
fn multiply_two_by_three_by_three_by_two() {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    let b = m(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]]);
    let product = a.multiply(&b).unwrap();
    assert_eq!(product.shape(), (2, 2));
    assert_eq!(product, m(&[&[58.0, 64.0], &[139.0, 154.0]]));
}

#[test]
fn multiply_incompatible_shapes_is_shape_error() {
    let a = zero(2, 3);
    let err = a.multiply(&zero(2, 3)).unwrap_err();
    assert_eq!(
        err,
        MatrixError::Shape(ShapeError::InnerDimension {
            lhs: (2, 3),
            rhs: (2, 3),
        })
    );
}

#[test]
fn multiply_row_by_column_gives_one_by_one() {
    let row = m(&[&[1.0, 2.0, 3.0]]);
    let dot = row.multiply(&row.transpose()).unwrap();
    assert_eq!(dot, m(&[&[14.0]]));
}

#[test]
fn scalar_times_identity() {
    let doubled = 2.0 * &identity(2);
    assert_eq!(doubled, m(&[&[2.0, 0.0], &[0.0, 2.0]]));
    assert_eq!(identity(2) * 2.0, doubled);
    assert_eq!(identity(2).scalar_multiply(2.0), doubled);
}

#[test]
fn operations_do_not_mutate_operands() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let snapshot = a.clone();
    let _ = a.add(&a);
    let _ = a.multiply(&a);
    let _ = a.inverse();
    let _ = a.transpose();
    let _ = a.scalar_multiply(9.0);
    assert_eq!(a, snapshot);
}
