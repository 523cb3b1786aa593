//! Absorption results over a common denominator.

use std::fmt;

use num_traits::{One, Zero};

use absorbing_integers::{Integer, Rational};

use crate::error::ChainError;

/// Exact absorption probabilities sharing one denominator.
///
/// `numerators()[i] / denominator()` is the probability of ending in
/// `absorbing_states()[i]`. The denominator is the least common multiple of
/// the reduced probabilities' denominators, so it is as small as possible.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    absorbing_states: Vec<usize>,
    numerators: Vec<Integer>,
    denominator: Integer,
}

impl Solution {
    /// Puts `probabilities` (aligned with `absorbing_states`) over their
    /// least common denominator.
    pub(crate) fn from_probabilities(
        absorbing_states: Vec<usize>,
        probabilities: &[Rational],
    ) -> Result<Self, ChainError> {
        let denominator = probabilities
            .iter()
            .fold(Integer::one(), |acc, p| acc.lcm(&p.denominator()));
        let numerators = probabilities
            .iter()
            .map(|p| -> Result<Integer, ChainError> {
                Ok(p.numerator() * denominator.checked_div(&p.denominator())?)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            absorbing_states,
            numerators,
            denominator,
        })
    }

    /// Certain absorption into the state at `position`.
    pub(crate) fn certain(absorbing_states: Vec<usize>, position: usize) -> Self {
        let numerators = (0..absorbing_states.len())
            .map(|i| {
                if i == position {
                    Integer::one()
                } else {
                    Integer::zero()
                }
            })
            .collect();
        Self {
            absorbing_states,
            numerators,
            denominator: Integer::one(),
        }
    }

    /// Original indices of the absorbing states, ascending.
    #[must_use]
    pub fn absorbing_states(&self) -> &[usize] {
        &self.absorbing_states
    }

    /// One numerator per absorbing state.
    #[must_use]
    pub fn numerators(&self) -> &[Integer] {
        &self.numerators
    }

    /// The shared positive denominator.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// The exact probability of absorption at `position`, reduced.
    #[must_use]
    pub fn probability(&self, position: usize) -> Option<Rational> {
        let numerator = self.numerators.get(position)?.clone();
        Rational::new(numerator, self.denominator.clone()).ok()
    }

    /// Numerators followed by the denominator, the conventional flat answer
    /// format `[n_1, ..., n_k, d]`.
    #[must_use]
    pub fn to_flat(&self) -> Vec<Integer> {
        let mut flat = self.numerators.clone();
        flat.push(self.denominator.clone());
        flat
    }

    /// Like [`to_flat`](Self::to_flat), but as machine integers.
    ///
    /// Returns `None` if any value does not fit in a `u64`.
    #[must_use]
    pub fn to_u64_flat(&self) -> Option<Vec<u64>> {
        self.to_flat().iter().map(Integer::to_u64).collect()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.to_flat().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
