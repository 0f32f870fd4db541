//! Operator sugar over the named `Matrix` methods.
//!
//! Binary matrix operators can fail on a shape mismatch, so `+`, `-` and
//! matrix `*` produce `Result<Matrix, MatrixError>`. Unary `-` and scalar `*`
//! always succeed and produce a `Matrix` directly.

use std::ops;

use crate::error::MatrixError;
use crate::math::matrix::Matrix;

/// Forwards the owned/borrowed combinations of a fallible binary operator to
/// the `&Matrix op &Matrix` impl.
macro_rules! forward_fallible_binop {
    ($trait:ident, $method:ident) => {
        impl ops::$trait<Matrix> for Matrix {
            type Output = Result<Matrix, MatrixError>;

            fn $method(self, rhs: Matrix) -> Self::Output {
                ops::$trait::$method(&self, &rhs)
            }
        }

        impl ops::$trait<&Matrix> for Matrix {
            type Output = Result<Matrix, MatrixError>;

            fn $method(self, rhs: &Matrix) -> Self::Output {
                ops::$trait::$method(&self, rhs)
            }
        }

        impl ops::$trait<Matrix> for &Matrix {
            type Output = Result<Matrix, MatrixError>;

            fn $method(self, rhs: Matrix) -> Self::Output {
                ops::$trait::$method(self, &rhs)
            }
        }
    };
}

impl ops::Add<&Matrix> for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn add(self, rhs: &Matrix) -> Self::Output {
        Matrix::add(self, rhs)
    }
}

impl ops::Sub<&Matrix> for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn sub(self, rhs: &Matrix) -> Self::Output {
        Matrix::subtract(self, rhs)
    }
}

impl ops::Mul<&Matrix> for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        Matrix::multiply(self, rhs)
    }
}

forward_fallible_binop!(Add, add);
forward_fallible_binop!(Sub, sub);
forward_fallible_binop!(Mul, mul);

impl ops::Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.negate()
    }
}

impl ops::Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.negate()
    }
}

impl ops::Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.scalar_multiply(scalar)
    }
}

impl ops::Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.scalar_multiply(scalar)
    }
}

// Scalar on the left is the same operation as scalar on the right.
impl ops::Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, matrix: &Matrix) -> Matrix {
        matrix.scalar_multiply(self)
    }
}

impl ops::Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, matrix: Matrix) -> Matrix {
        matrix.scalar_multiply(self)
    }
}
