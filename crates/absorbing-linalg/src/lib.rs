//! # absorbing-linalg
//!
//! Dense exact-rational linear algebra for absorbing-chain analysis.
//!
//! This crate provides:
//! - `RationalMatrix`, a row-major dense matrix of `Rational` entries
//! - Element-wise addition and subtraction, matrix products
//! - Gauss-Jordan inversion carried out entirely in exact arithmetic
//!
//! Every operation takes its operands by reference and returns a new matrix.
//! Shape errors and singular pivots are reported as [`LinalgError`] values
//! rather than panics.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod rational_matrix;

pub use error::LinalgError;
pub use rational_matrix::RationalMatrix;
