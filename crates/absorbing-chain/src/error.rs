//! Error types for the absorbing-chain crate.

use absorbing_integers::ArithmeticError;
use absorbing_linalg::LinalgError;

/// Error type for all fallible operations in the absorbing-chain crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    /// The weight grid does not describe a usable chain.
    #[error("malformed chain: {reason}")]
    MalformedChain {
        /// Description of the problem.
        reason: String,
    },

    /// The configured start state is not a state of the chain.
    #[error("start state {state} is out of range for a chain of {num_states} states")]
    InvalidStartState {
        /// The requested start state.
        state: usize,
        /// Number of states in the chain.
        num_states: usize,
    },

    /// A matrix operation failed, most often because `I - Q` is singular.
    #[error(transparent)]
    Linalg(#[from] LinalgError),

    /// Exact arithmetic failed. Only reachable through a broken invariant.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

impl ChainError {
    /// Returns true if the chain was rejected because `I - Q` is singular,
    /// i.e. some transient state cannot reach any absorbing state.
    #[must_use]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::Linalg(LinalgError::SingularMatrix { .. }))
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedChain {
            reason: reason.into(),
        }
    }
}
