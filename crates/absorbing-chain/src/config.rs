//! Solver configuration.

use crate::error::ChainError;

/// Configuration for [`AbsorptionSolver`](crate::AbsorptionSolver).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use absorbing_chain::SolverConfig;
///
/// let config = SolverConfig::new().with_start_state(2);
/// assert_eq!(config.start_state(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolverConfig {
    start_state: usize,
}

impl SolverConfig {
    /// Creates a new configuration with defaults (start state 0).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the state the process starts in.
    #[must_use]
    pub fn with_start_state(mut self, state: usize) -> Self {
        self.start_state = state;
        self
    }

    /// Returns the configured start state.
    #[must_use]
    pub fn start_state(&self) -> usize {
        self.start_state
    }

    /// Checks the configuration against a chain of `num_states` states.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidStartState`] if the start state is out of
    /// range.
    pub fn validate(&self, num_states: usize) -> Result<(), ChainError> {
        if self.start_state >= num_states {
            return Err(ChainError::InvalidStartState {
                state: self.start_state,
                num_states,
            });
        }
        Ok(())
    }
}
