use std::error::Error;
use std::fmt;

/// A dimensional precondition was violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The grid has no rows, or its rows have no columns.
    Empty,
    /// Row `row` has `found` entries where the first row has `expected`.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A flat buffer of `len` entries cannot fill `shape`.
    Length { shape: (usize, usize), len: usize },
    /// `op` requires a square matrix.
    NotSquare {
        op: &'static str,
        shape: (usize, usize),
    },
    /// Elementwise `op` on matrices of different shape.
    Mismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// Matrix product where `lhs.width != rhs.height`.
    InnerDimension {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Empty => write!(f, "matrix must have at least one row and one column"),
            ShapeError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} entries, expected {} like row 0",
                row, found, expected
            ),
            ShapeError::Length { shape, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                shape.0, shape.1, len
            ),
            ShapeError::NotSquare { op, shape } => write!(
                f,
                "cannot compute {} of non-square {}x{} matrix",
                op, shape.0, shape.1
            ),
            ShapeError::Mismatch { op, lhs, rhs } => write!(
                f,
                "cannot {} {}x{} and {}x{} matrices: dimensions must be the same",
                op, lhs.0, lhs.1, rhs.0, rhs.1
            ),
            ShapeError::InnerDimension { lhs, rhs } => write!(
                f,
                "cannot multiply {}x{} by {}x{}: inner dimensions differ ({} != {})",
                lhs.0, lhs.1, rhs.0, rhs.1, lhs.1, rhs.0
            ),
        }
    }
}

impl Error for ShapeError {}

/// Closed forms are only provided up to 2x2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedSizeError {
    pub op: &'static str,
    pub size: usize,
}

impl fmt::Display for UnsupportedSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} not implemented for matrices larger than 2x2 (got {}x{})",
            self.op, self.size, self.size
        )
    }
}

impl Error for UnsupportedSizeError {}

/// Any failure a matrix operation can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    Shape(ShapeError),
    UnsupportedSize(UnsupportedSizeError),
}

impl MatrixError {
    pub fn is_shape(&self) -> bool {
        matches!(self, MatrixError::Shape(_))
    }

    pub fn is_unsupported_size(&self) -> bool {
        matches!(self, MatrixError::UnsupportedSize(_))
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Shape(e) => write!(f, "shape error: {}", e),
            MatrixError::UnsupportedSize(e) => write!(f, "unsupported size: {}", e),
        }
    }
}

impl Error for MatrixError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MatrixError::Shape(e) => Some(e),
            MatrixError::UnsupportedSize(e) => Some(e),
        }
    }
}

impl From<ShapeError> for MatrixError {
    fn from(value: ShapeError) -> Self {
        MatrixError::Shape(value)
    }
}

impl From<UnsupportedSizeError> for MatrixError {
    fn from(value: UnsupportedSizeError) -> Self {
        MatrixError::UnsupportedSize(value)
    }
}
