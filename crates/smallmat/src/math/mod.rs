//! The dense `Matrix` type and its operator sugar.
//!
//! `matrix` holds the type, its constructors and the named operations;
//! `ops` layers `+`, `-`, `*` and unary `-` on top of those methods.
pub mod matrix;
pub mod ops;

pub use matrix::{identity, zero, Matrix};
