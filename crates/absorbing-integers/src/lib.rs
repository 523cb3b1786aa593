//! # absorbing-integers
//!
//! Arbitrary precision integer and rational arithmetic for exact
//! absorbing-chain analysis.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals kept in lowest terms (`Rational`)
//!
//! Nothing here ever converts to floating point. Transition probabilities
//! are rational by construction and every step of the solver stays exact.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::ArithmeticError;
pub use integer::Integer;
pub use rational::Rational;
