//! State classification and canonical-form partitioning.
//!
//! A state is *absorbing* when it carries no weight to any other state: its
//! row is all zeros, or its only nonzero weight is a self-loop. Every other
//! state is *transient*. Transient rows are normalized into exact
//! probabilities and split into the canonical blocks
//!
//! ```text
//!          T   A
//!   P = [  Q   R  ]  T
//!       [  0   I  ]  A
//! ```
//!
//! where `Q` holds transient-to-transient and `R` transient-to-absorbing
//! probabilities.

use num_traits::Zero;
use tracing::debug;

use absorbing_integers::{Integer, Rational};
use absorbing_linalg::RationalMatrix;

use crate::error::ChainError;

/// The canonical-form partition of a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainPartition {
    num_states: usize,
    absorbing: Vec<usize>,
    transient: Vec<usize>,
    q: RationalMatrix,
    r: RationalMatrix,
}

impl ChainPartition {
    /// Total number of states in the chain.
    #[must_use]
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// Original indices of the absorbing states, ascending.
    #[must_use]
    pub fn absorbing(&self) -> &[usize] {
        &self.absorbing
    }

    /// Original indices of the transient states, ascending.
    #[must_use]
    pub fn transient(&self) -> &[usize] {
        &self.transient
    }

    /// Transient-to-transient probabilities (`T x T`).
    #[must_use]
    pub fn q(&self) -> &RationalMatrix {
        &self.q
    }

    /// Transient-to-absorbing probabilities (`T x A`).
    #[must_use]
    pub fn r(&self) -> &RationalMatrix {
        &self.r
    }

    /// Position of `state` among the absorbing states, if it is absorbing.
    #[must_use]
    pub fn absorbing_position(&self, state: usize) -> Option<usize> {
        self.absorbing.binary_search(&state).ok()
    }

    /// Position of `state` among the transient states, if it is transient.
    #[must_use]
    pub fn transient_position(&self, state: usize) -> Option<usize> {
        self.transient.binary_search(&state).ok()
    }
}

/// Returns true if `row` (the weights out of `state`) makes `state` absorbing.
#[must_use]
pub fn is_absorbing(state: usize, row: &[u64]) -> bool {
    row.iter()
        .enumerate()
        .all(|(target, &weight)| target == state || weight == 0)
}

/// Classifies the states of a weight grid and builds `Q` and `R`.
///
/// `weights[i][j]` is the relative weight of moving from state `i` to state
/// `j`. Each transient row is divided by its own sum, exactly.
///
/// # Errors
///
/// Returns [`ChainError::MalformedChain`] if the grid is empty, not square,
/// or a transient row sums to zero.
pub fn classify(weights: &[Vec<u64>]) -> Result<ChainPartition, ChainError> {
    let n = weights.len();
    if n == 0 {
        return Err(ChainError::malformed("chain has no states"));
    }
    if let Some((state, row)) = weights
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != n)
    {
        return Err(ChainError::malformed(format!(
            "row {state} has {} weights, expected {n}",
            row.len()
        )));
    }

    let (absorbing, transient): (Vec<usize>, Vec<usize>) =
        (0..n).partition(|&state| is_absorbing(state, &weights[state]));

    let mut q_rows = Vec::with_capacity(transient.len());
    let mut r_rows = Vec::with_capacity(transient.len());
    for &state in &transient {
        let row = &weights[state];
        let row_sum: Integer = row.iter().map(|&w| Integer::from(w)).sum();
        if row_sum.is_zero() {
            return Err(ChainError::malformed(format!(
                "transient state {state} has no outgoing weight"
            )));
        }
        let probabilities = |targets: &[usize]| -> Result<Vec<Rational>, ChainError> {
            targets
                .iter()
                .map(|&target| -> Result<Rational, ChainError> {
                    Ok(Rational::new(Integer::from(row[target]), row_sum.clone())?)
                })
                .collect()
        };
        q_rows.push(probabilities(&transient)?);
        r_rows.push(probabilities(&absorbing)?);
    }

    let (q, r) = if transient.is_empty() {
        (
            RationalMatrix::zeros(0, 0),
            RationalMatrix::zeros(0, absorbing.len()),
        )
    } else {
        (
            RationalMatrix::from_rows(q_rows)?,
            RationalMatrix::from_rows(r_rows)?,
        )
    };

    debug!(
        states = n,
        absorbing = absorbing.len(),
        transient = transient.len(),
        "classified chain"
    );

    Ok(ChainPartition {
        num_states: n,
        absorbing,
        transient,
        q,
        r,
    })
}
