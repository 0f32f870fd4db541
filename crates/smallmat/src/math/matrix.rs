use std::fmt;
use std::ops::Index;
use std::slice::Chunks;

use serde::{Deserialize, Serialize};

use crate::config::Tolerance;
use crate::error::{MatrixError, ShapeError, UnsupportedSizeError};

/// A dense, row-major matrix of `f64` values.
///
/// A `Matrix` always has at least one row and one column, and every row has
/// the same width. Operations never mutate their operands; each one returns a
/// freshly allocated matrix.
///
/// ```
/// use smallmat::Matrix;
///
/// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(m.determinant().unwrap(), -2.0);
/// assert_eq!(m[1][0], 3.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

/// Creates a `height x width` matrix filled with `0.0`.
///
/// # Panics
///
/// Panics if either dimension is zero.
pub fn zero(height: usize, width: usize) -> Matrix {
    Matrix::zero(height, width)
}

/// Creates an `n x n` identity matrix.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn identity(n: usize) -> Matrix {
    Matrix::identity(n)
}

#[allow(clippy::should_implement_trait)]
impl Matrix {
    /// Builds a matrix from a grid of rows.
    ///
    /// The grid must be non-empty and rectangular.
    pub fn new(grid: Vec<Vec<f64>>) -> Result<Self, ShapeError> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(ShapeError::Empty);
        }
        if let Some((row, found)) = grid
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(ShapeError::Ragged {
                row,
                expected: cols,
                found,
            });
        }

        let mut data = Vec::with_capacity(rows * cols);
        for row in grid {
            data.extend(row);
        }
        log::trace!("Constructed {}x{} matrix", rows, cols);
        Ok(Self { data, rows, cols })
    }

    /// Copying constructor from anything that looks like a list of rows.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, ShapeError> {
        Self::new(rows.iter().map(|r| r.as_ref().to_vec()).collect())
    }

    /// Builds a matrix from a flat row-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self, ShapeError> {
        let (rows, cols) = shape;
        if rows == 0 || cols == 0 {
            return Err(ShapeError::Empty);
        }
        if data.len() != rows * cols {
            return Err(ShapeError::Length {
                shape,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn zero(height: usize, width: usize) -> Self {
        assert!(
            height >= 1 && width >= 1,
            "matrix dimensions must be at least 1x1, got {}x{}",
            height,
            width
        );
        Self {
            data: vec![0.0; height * width],
            rows: height,
            cols: width,
        }
    }

    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn identity(n: usize) -> Self {
        let mut eye = Self::zero(n, n);
        for i in 0..n {
            let offset = eye.offset(i, i);
            eye.data[offset] = 1.0;
        }
        eye
    }

    pub fn height(&self) -> usize {
        self.rows
    }

    pub fn width(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= height`.
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(
            i < self.rows,
            "row index {} out of bounds for {} rows",
            i,
            self.rows
        );
        let start = self.offset(i, 0);
        &self.data[start..start + self.cols]
    }

    pub fn rows(&self) -> Chunks<'_, f64> {
        self.data.chunks(self.cols)
    }

    /// Column `j` copied out.
    ///
    /// # Panics
    ///
    /// Panics if `j >= width`.
    pub fn column(&self, j: usize) -> Vec<f64> {
        assert!(
            j < self.cols,
            "column index {} out of bounds for {} columns",
            j,
            self.cols
        );
        self.rows().map(|row| row[j]).collect()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            Some(self.data[self.offset(i, j)])
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_grid(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    pub fn into_grid(self) -> Vec<Vec<f64>> {
        self.to_grid()
    }

    /// Applies `f` to every entry, producing a matrix of the same shape.
    pub fn map<F>(&self, f: F) -> Matrix
    where
        F: FnMut(&f64) -> f64,
    {
        Matrix {
            data: self.data.iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Same shape and every pair of entries is close under `tol`.
    pub fn approx_eq(&self, other: &Matrix, tol: &Tolerance) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| tol.close(a, b))
    }

    fn require_square(&self, op: &'static str) -> Result<(), ShapeError> {
        if self.is_square() {
            Ok(())
        } else {
            log::debug!(
                "Rejecting {} of non-square {}x{} matrix",
                op,
                self.rows,
                self.cols
            );
            Err(ShapeError::NotSquare {
                op,
                shape: self.shape(),
            })
        }
    }

    fn unsupported(&self, op: &'static str) -> MatrixError {
        log::debug!("{} requested for {}x{} matrix", op, self.rows, self.cols);
        UnsupportedSizeError {
            op,
            size: self.rows,
        }
        .into()
    }

    /// Sum of the diagonal entries.
    pub fn trace(&self) -> Result<f64, MatrixError> {
        self.require_square("trace")?;
        Ok((0..self.rows).map(|i| self.data[self.offset(i, i)]).sum())
    }

    /// Determinant of a 1x1 or 2x2 matrix.
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        self.require_square("determinant")?;
        match self.rows {
            1 => Ok(self.data[0]),
            2 => {
                let (a, b, c, d) = (self.data[0], self.data[1], self.data[2], self.data[3]);
                Ok(a * d - b * c)
            }
            _ => Err(self.unsupported("determinant")),
        }
    }

    /// Inverse of a 1x1 or 2x2 matrix.
    ///
    /// The 2x2 case uses `A^-1 = (tr(A) * I - A) / det(A)`. A singular input
    /// is not rejected: the division by zero yields non-finite entries.
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        self.require_square("inverse")?;
        match self.rows {
            1 => Ok(self.map(|a| 1.0 / a)),
            2 => {
                let det = self.determinant()?;
                let tr = self.trace()?;
                if det == 0.0 {
                    log::debug!("Inverting singular 2x2 matrix, result will not be finite");
                }
                let eye = Matrix::identity(2);
                let data = eye
                    .data
                    .iter()
                    .zip(self.data.iter())
                    .map(|(i, a)| (tr * i - a) / det)
                    .collect();
                log::trace!("Inverted 2x2 matrix with determinant {}", det);
                Ok(Matrix {
                    data,
                    rows: 2,
                    cols: 2,
                })
            }
            _ => Err(self.unsupported("inverse")),
        }
    }

    /// `result[i][j] = self[j][i]`, shape `width x height`.
    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[self.offset(i, j)]);
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Elementwise sum. Both operands must have the same shape.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.shape() != other.shape() {
            log::debug!(
                "Rejecting add of {:?} and {:?} matrices",
                self.shape(),
                other.shape()
            );
            return Err(ShapeError::Mismatch {
                op: "add",
                lhs: self.shape(),
                rhs: other.shape(),
            }
            .into());
        }
        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a + b)
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Unary minus: every entry negated.
    pub fn negate(&self) -> Matrix {
        self.map(|v| -v)
    }

    /// `self + (-other)`.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.add(&other.negate()).map_err(|e| match e {
            MatrixError::Shape(ShapeError::Mismatch { lhs, rhs, .. }) => ShapeError::Mismatch {
                op: "subtract",
                lhs,
                rhs,
            }
            .into(),
            other => other,
        })
    }

    /// Matrix product, `(h x n) * (n x w) -> (h x w)`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != other.rows {
            log::debug!(
                "Rejecting multiply of {:?} by {:?}",
                self.shape(),
                other.shape()
            );
            return Err(ShapeError::InnerDimension {
                lhs: self.shape(),
                rhs: other.shape(),
            }
            .into());
        }

        let mut data = Vec::with_capacity(self.rows * other.cols);
        for i in 0..self.rows {
            let lhs_row = self.row(i);
            for j in 0..other.cols {
                let mut total = 0.0;
                for (k, a) in lhs_row.iter().enumerate() {
                    total += a * other.data[other.offset(k, j)];
                }
                data.push(total);
            }
        }
        log::trace!(
            "Multiplied {:?} by {:?}",
            self.shape(),
            other.shape()
        );
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Every entry multiplied by `scalar`.
    pub fn scalar_multiply(&self, scalar: f64) -> Matrix {
        self.map(|v| scalar * v)
    }
}

impl Index<usize> for Matrix {
    type Output = [f64];

    fn index(&self, index: usize) -> &Self::Output {
        self.row(index)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.row(index.0)[index.1]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = ShapeError;

    fn try_from(value: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Matrix::new(value)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(value: Matrix) -> Self {
        value.into_grid()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (idx, value) in row.iter().enumerate() {
                if idx > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
