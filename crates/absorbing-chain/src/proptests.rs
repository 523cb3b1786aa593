//! Property-based tests over randomly generated absorbing chains.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use absorbing_integers::{Integer, Rational};

    use crate::{solve_absorption, AbsorptionSolver};

    /// Chains whose first `t` states are transient and whose remaining states
    /// absorb. Transient state `i` always has weight toward `i + 1`, so every
    /// transient state can reach the first absorbing state.
    fn absorbing_chain() -> impl Strategy<Value = Vec<Vec<u64>>> {
        (2usize..=7)
            .prop_flat_map(|n| {
                (
                    1..n,
                    prop::collection::vec(prop::collection::vec(0u64..=4, n), n),
                )
            })
            .prop_map(|(t, mut weights)| {
                for (i, row) in weights.iter_mut().enumerate() {
                    if i < t {
                        row[i + 1] += 1;
                    } else {
                        row.iter_mut().for_each(|w| *w = 0);
                    }
                }
                weights
            })
    }

    fn transient_states(weights: &[Vec<u64>]) -> Vec<usize> {
        (0..weights.len())
            .filter(|&i| !crate::classify::is_absorbing(i, &weights[i]))
            .collect()
    }

    proptest! {
        #[test]
        fn numerators_sum_to_denominator(weights in absorbing_chain()) {
            let s = solve_absorption(&weights).unwrap();
            let total: Integer = s.numerators().iter().cloned().sum();
            prop_assert_eq!(&total, s.denominator());
        }

        #[test]
        fn numerators_are_bounded(weights in absorbing_chain()) {
            let s = solve_absorption(&weights).unwrap();
            prop_assert!(!s.denominator().is_negative() && !s.denominator().is_zero());
            for n in s.numerators() {
                prop_assert!(!n.is_negative());
                prop_assert!(n <= s.denominator());
            }
        }

        #[test]
        fn denominator_is_minimal(weights in absorbing_chain()) {
            let s = solve_absorption(&weights).unwrap();
            let g = s
                .numerators()
                .iter()
                .fold(s.denominator().clone(), |acc, n| acc.gcd(n));
            prop_assert!(g.is_one());
        }

        #[test]
        fn solving_is_deterministic(weights in absorbing_chain()) {
            prop_assert_eq!(solve_absorption(&weights), solve_absorption(&weights));
        }

        #[test]
        fn scaling_a_row_preserves_answer(weights in absorbing_chain(), k in 2u64..=5) {
            let mut scaled = weights.clone();
            for w in &mut scaled[0] {
                *w *= k;
            }
            prop_assert_eq!(solve_absorption(&weights), solve_absorption(&scaled));
        }

        #[test]
        fn transient_self_loops_preserve_answer(weights in absorbing_chain(), extra in 1u64..=6) {
            let mut looped = weights.clone();
            for i in transient_states(&weights) {
                looped[i][i] += extra;
            }
            prop_assert_eq!(solve_absorption(&weights), solve_absorption(&looped));
        }

        #[test]
        fn absorption_rows_are_distributions(weights in absorbing_chain()) {
            let analysis = AbsorptionSolver::default().analyze(&weights).unwrap();
            let b = analysis.absorption_matrix();
            for i in 0..b.num_rows() {
                let total: Rational = b.row(i).iter().sum();
                prop_assert!(total.is_one());
                prop_assert!(b.row(i).iter().all(|p| *p >= Rational::zero()));
            }
            for i in 0..weights.len() {
                let steps = analysis.expected_steps_from(i).unwrap();
                prop_assert!(steps >= Rational::zero());
                prop_assert_eq!(steps.is_zero(), analysis.partition().absorbing_position(i).is_some());
            }
        }
    }
}
