//! # absorbing-chain
//!
//! Exact long-run absorption probabilities for absorbing Markov chains.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌──────────────────┐     ┌──────────────────┐
//!  │   classify   │────▶│      solver      │────▶│     solution     │
//!  │  (Q, R)      │     │  F = (I - Q)^-1  │     │  (lcm normalize) │
//!  └──────────────┘     └──────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use absorbing_chain::solve_absorption;
//!
//! let weights = vec![
//!     vec![0, 1, 0, 0, 0, 1],
//!     vec![4, 0, 0, 3, 2, 0],
//!     vec![0, 0, 0, 0, 0, 0],
//!     vec![0, 0, 0, 0, 0, 0],
//!     vec![0, 0, 0, 0, 0, 0],
//!     vec![0, 0, 0, 0, 0, 0],
//! ];
//!
//! let solution = solve_absorption(&weights).unwrap();
//! assert_eq!(solution.to_string(), "[0, 3, 2, 9, 14]");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod classify;
pub mod config;
pub mod error;
pub mod solution;
pub mod solver;

pub use classify::{classify, ChainPartition};
pub use config::SolverConfig;
pub use error::ChainError;
pub use solution::Solution;
pub use solver::{solve_absorption, AbsorptionAnalysis, AbsorptionSolver};

#[cfg(test)]
mod proptests;

#[cfg(test)]
mod tests;
