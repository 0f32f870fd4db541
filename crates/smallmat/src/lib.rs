//! smallmat: a small dense-matrix value type.
//!
//! This crate provides an immutable `Matrix` of `f64` values with elementwise
//! and linear-algebra operations (add, negate, subtract, scalar and matrix
//! products, transpose) and closed-form trace, determinant and inverse for
//! 1x1 and 2x2 matrices.
//!
//! Every operation returns a new matrix; operands are never mutated, so a
//! `Matrix` can be shared across threads for reading without synchronisation.
//! The named methods are the contract, and the operators in `math::ops` are
//! thin wrappers around them.
pub mod config;
pub mod error;
pub mod math;

pub use config::Tolerance;
pub use error::{MatrixError, ShapeError, UnsupportedSizeError};
pub use math::{identity, zero, Matrix};
