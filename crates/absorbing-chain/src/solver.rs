//! Absorption probabilities via the fundamental matrix.
//!
//! With the chain in canonical form (see [`classify`](crate::classify)),
//! the fundamental matrix `F = (I - Q)^-1` counts expected visits to each
//! transient state, and `B = F * R` gives the probability of ending in each
//! absorbing state from each transient start.

use num_traits::Zero;
use tracing::debug;

use absorbing_integers::Rational;
use absorbing_linalg::RationalMatrix;

use crate::classify::{classify, ChainPartition};
use crate::config::SolverConfig;
use crate::error::ChainError;
use crate::solution::Solution;

/// Solves absorbing chains given as integer weight grids.
#[derive(Clone, Debug, Default)]
pub struct AbsorptionSolver {
    config: SolverConfig,
}

impl AbsorptionSolver {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Computes the absorption probabilities from the configured start state.
    ///
    /// An absorbing start state is absorbed immediately: the result is 1 for
    /// that state and 0 for every other absorbing state, and no inversion is
    /// attempted.
    ///
    /// # Errors
    ///
    /// - [`ChainError::MalformedChain`] if the grid is empty or not square.
    /// - [`ChainError::InvalidStartState`] if the start state is out of range.
    /// - [`ChainError::Linalg`] wrapping `SingularMatrix` if some transient
    ///   state cannot reach any absorbing state.
    pub fn solve(&self, weights: &[Vec<u64>]) -> Result<Solution, ChainError> {
        let partition = classify(weights)?;
        self.config.validate(partition.num_states())?;

        let start = self.config.start_state();
        if let Some(position) = partition.absorbing_position(start) {
            debug!(start, "start state is absorbing");
            return Ok(Solution::certain(partition.absorbing().to_vec(), position));
        }

        AbsorptionAnalysis::from_partition(partition)?.probabilities_from(start)
    }

    /// Runs the full analysis: partition, fundamental matrix and absorption
    /// matrix for every transient state.
    ///
    /// # Errors
    ///
    /// - [`ChainError::MalformedChain`] if the grid is empty or not square.
    /// - [`ChainError::Linalg`] wrapping `SingularMatrix` if some transient
    ///   state cannot reach any absorbing state.
    pub fn analyze(&self, weights: &[Vec<u64>]) -> Result<AbsorptionAnalysis, ChainError> {
        AbsorptionAnalysis::from_partition(classify(weights)?)
    }
}

/// Solves `weights` starting from state 0.
///
/// # Errors
///
/// See [`AbsorptionSolver::solve`].
///
/// # Example
///
/// ```
/// use absorbing_chain::solve_absorption;
///
/// let weights = vec![
///     vec![0, 2, 1, 0, 0],
///     vec![0, 0, 0, 3, 4],
///     vec![0, 0, 0, 0, 0],
///     vec![0, 0, 0, 0, 0],
///     vec![0, 0, 0, 0, 0],
/// ];
/// let solution = solve_absorption(&weights).unwrap();
/// assert_eq!(solution.to_u64_flat(), Some(vec![7, 6, 8, 21]));
/// ```
pub fn solve_absorption(weights: &[Vec<u64>]) -> Result<Solution, ChainError> {
    AbsorptionSolver::default().solve(weights)
}

/// The fundamental and absorption matrices of a chain.
#[derive(Debug, Clone)]
pub struct AbsorptionAnalysis {
    partition: ChainPartition,
    fundamental: RationalMatrix,
    absorption: RationalMatrix,
}

impl AbsorptionAnalysis {
    /// Computes `F = (I - Q)^-1` and `B = F * R` for a partitioned chain.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Linalg`] if `I - Q` is singular.
    pub fn from_partition(partition: ChainPartition) -> Result<Self, ChainError> {
        let t = partition.transient().len();
        debug!(transient = t, "inverting I - Q");

        let fundamental = RationalMatrix::identity(t)
            .subtract(partition.q())?
            .invert()?;
        let absorption = fundamental.multiply(partition.r())?;

        Ok(Self {
            partition,
            fundamental,
            absorption,
        })
    }

    /// The canonical-form partition the analysis was built from.
    #[must_use]
    pub fn partition(&self) -> &ChainPartition {
        &self.partition
    }

    /// The fundamental matrix `F`, indexed by transient positions.
    #[must_use]
    pub fn fundamental_matrix(&self) -> &RationalMatrix {
        &self.fundamental
    }

    /// The absorption matrix `B = F * R` (transient x absorbing positions).
    #[must_use]
    pub fn absorption_matrix(&self) -> &RationalMatrix {
        &self.absorption
    }

    /// Absorption probabilities starting from original state `state`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidStartState`] if `state` is out of range.
    pub fn probabilities_from(&self, state: usize) -> Result<Solution, ChainError> {
        let absorbing = self.partition.absorbing().to_vec();
        if let Some(position) = self.partition.absorbing_position(state) {
            return Ok(Solution::certain(absorbing, position));
        }
        let row = self.transient_row(state)?;
        Solution::from_probabilities(absorbing, self.absorption.row(row))
    }

    /// Expected number of transitions before absorption, starting from
    /// original state `state`. Zero for absorbing states.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidStartState`] if `state` is out of range.
    pub fn expected_steps_from(&self, state: usize) -> Result<Rational, ChainError> {
        if self.partition.absorbing_position(state).is_some() {
            return Ok(Rational::zero());
        }
        let row = self.transient_row(state)?;
        Ok(self.fundamental.row(row).iter().sum())
    }

    fn transient_row(&self, state: usize) -> Result<usize, ChainError> {
        self.partition
            .transient_position(state)
            .ok_or(ChainError::InvalidStartState {
                state,
                num_states: self.partition.num_states(),
            })
    }
}
