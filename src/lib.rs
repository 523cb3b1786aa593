//! # absorbing
//!
//! Exact absorption probabilities for absorbing Markov chains.
//!
//! Given integer transition weights, the solver finds, for every absorbing
//! state, the exact probability of ending there. Results are fractions over
//! a single common denominator; nothing is ever rounded.
//!
//! ## Crates
//!
//! - [`integers`]: arbitrary precision `Integer` and `Rational`
//! - [`linalg`]: `RationalMatrix` with exact Gauss-Jordan inversion
//! - [`chain`]: classification, fundamental matrix, normalization
//!
//! ## Quick Start
//!
//! ```rust
//! use absorbing::prelude::*;
//!
//! let weights = vec![
//!     vec![0, 2, 1, 0, 0],
//!     vec![0, 0, 0, 3, 4],
//!     vec![0, 0, 0, 0, 0],
//!     vec![0, 0, 0, 0, 0],
//!     vec![0, 0, 0, 0, 0],
//! ];
//! let solution = solve_absorption(&weights).unwrap();
//! assert_eq!(solution.to_string(), "[7, 6, 8, 21]");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use absorbing_chain as chain;
pub use absorbing_integers as integers;
pub use absorbing_linalg as linalg;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use absorbing_chain::{
        solve_absorption, AbsorptionAnalysis, AbsorptionSolver, ChainError, Solution,
        SolverConfig,
    };
    pub use absorbing_integers::{Integer, Rational};
    pub use absorbing_linalg::RationalMatrix;
}
