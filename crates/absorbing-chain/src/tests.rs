//! End-to-end scenarios for absorbing-chain.

#[cfg(test)]
mod integration_tests {
    use absorbing_integers::{Integer, Rational};

    use crate::{solve_absorption, AbsorptionSolver, ChainError, SolverConfig};

    fn flat(weights: &[Vec<u64>]) -> Vec<u64> {
        solve_absorption(weights).unwrap().to_u64_flat().unwrap()
    }

    #[test]
    fn test_six_state_chain() {
        let weights = vec![
            vec![0, 1, 0, 0, 0, 1],
            vec![4, 0, 0, 3, 2, 0],
            vec![0, 0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 0],
        ];
        assert_eq!(flat(&weights), vec![0, 3, 2, 9, 14]);
    }

    #[test]
    fn test_five_state_chain() {
        let weights = vec![
            vec![0, 2, 1, 0, 0],
            vec![0, 0, 0, 3, 4],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
        ];
        let s = solve_absorption(&weights).unwrap();
        assert_eq!(
            s.numerators(),
            &[Integer::new(7), Integer::new(6), Integer::new(8)]
        );
        assert_eq!(s.denominator(), &Integer::new(21));
        assert_eq!(flat(&weights), vec![7, 6, 8, 21]);
    }

    #[test]
    fn test_denominator_reduced_to_two() {
        // Every path has probability 1/4, but the totals collapse to halves.
        let weights = vec![
            vec![0, 1, 1, 0, 0],
            vec![0, 0, 0, 3, 3],
            vec![0, 0, 0, 1, 1],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
        ];
        assert_eq!(flat(&weights), vec![1, 1, 2]);
    }

    #[test]
    fn test_single_absorbing_state() {
        assert_eq!(flat(&[vec![0]]), vec![1, 1]);
    }

    #[test]
    fn test_start_absorbing_with_other_states() {
        let weights = vec![
            vec![0, 0, 0, 0],
            vec![1, 0, 1, 1],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ];
        assert_eq!(flat(&weights), vec![1, 0, 0, 1]);
    }

    #[test]
    fn test_self_loop_start_is_absorbing() {
        assert_eq!(flat(&[vec![5, 0], vec![1, 1]]), vec![1, 1]);
    }

    #[test]
    fn test_transient_self_loops_do_not_change_answer() {
        let plain = vec![vec![0, 1, 1], vec![0, 0, 0], vec![0, 0, 0]];
        let looped = vec![vec![7, 1, 1], vec![0, 0, 0], vec![0, 0, 0]];
        assert_eq!(flat(&plain), flat(&looped));
        assert_eq!(flat(&plain), vec![1, 1, 2]);
    }

    #[test]
    fn test_long_corridor() {
        // Fair walk over states 1..=3 between walls 4 (left) and 5 (right).
        // State 0 steps straight to 1.
        let weights = vec![
            vec![0, 1, 0, 0, 0, 0],
            vec![0, 0, 1, 0, 1, 0],
            vec![0, 1, 0, 1, 0, 0],
            vec![0, 0, 1, 0, 0, 1],
            vec![0, 0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 0],
        ];
        // One cell from the left wall of a four-cell corridor: 3/4 vs 1/4.
        assert_eq!(flat(&weights), vec![3, 1, 4]);
    }

    #[test]
    fn test_unreachable_cycle_is_singular() {
        // Transient states 1 and 2 only feed each other.
        let weights = vec![
            vec![0, 1, 0, 1],
            vec![0, 0, 1, 0],
            vec![0, 1, 0, 0],
            vec![0, 0, 0, 0],
        ];
        let err = solve_absorption(&weights).unwrap_err();
        assert!(err.is_singular(), "unexpected error: {err}");
    }

    #[test]
    fn test_no_absorbing_states_is_singular() {
        let err = solve_absorption(&[vec![0, 1], vec![1, 0]]).unwrap_err();
        assert!(err.is_singular());
    }

    #[test]
    fn test_malformed_inputs() {
        assert!(matches!(
            solve_absorption(&[]),
            Err(ChainError::MalformedChain { .. })
        ));
        assert!(matches!(
            solve_absorption(&[vec![0, 1, 0], vec![0, 0, 0]]),
            Err(ChainError::MalformedChain { .. })
        ));
    }

    #[test]
    fn test_deterministic() {
        let weights = vec![
            vec![0, 3, 1, 1, 0],
            vec![2, 0, 5, 0, 1],
            vec![1, 1, 0, 0, 1],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
        ];
        assert_eq!(
            solve_absorption(&weights).unwrap(),
            solve_absorption(&weights).unwrap()
        );
    }

    #[test]
    fn test_huge_weights_stay_exact() {
        let big = u64::MAX - 1;
        let weights = vec![vec![0, big, 1], vec![0, 0, 0], vec![0, 0, 0]];
        let s = solve_absorption(&weights).unwrap();
        assert_eq!(s.denominator(), &Integer::from(u64::MAX));
        assert_eq!(
            s.probability(1),
            Some(Rational::new(Integer::new(1), Integer::from(u64::MAX)).unwrap())
        );
    }

    #[test]
    fn test_start_state_config() {
        let weights = vec![
            vec![0, 1, 0, 0, 0, 1],
            vec![4, 0, 0, 3, 2, 0],
            vec![0, 0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 0],
        ];
        let from_five = AbsorptionSolver::new(SolverConfig::new().with_start_state(5))
            .solve(&weights)
            .unwrap();
        assert_eq!(from_five.to_u64_flat(), Some(vec![0, 0, 0, 1, 1]));
    }
}
