//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational(num: i64, den: i64) -> Rational {
        Rational::new(num.into(), den.into()).unwrap()
    }

    proptest! {
        // GCD / LCM properties

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            prop_assert_eq!(a.checked_div(&g).unwrap() * g.clone(), a);
            prop_assert_eq!(b.checked_div(&g).unwrap() * g, b);
        }

        #[test]
        fn lcm_is_multiple_of_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let l = a.lcm(&b);

            prop_assert!(!l.is_negative());
            prop_assert_eq!(l.checked_div(&a).unwrap() * a, l.clone());
            prop_assert_eq!(l.checked_div(&b).unwrap() * b, l);
        }

        #[test]
        fn gcd_times_lcm_is_product(a in 1i64..1000i64, b in 1i64..1000i64) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.gcd(&b) * a.lcm(&b), a * b);
        }

        // Canonical form

        #[test]
        fn rational_is_reduced(num in small_int(), den in non_zero_int()) {
            let r = rational(num, den);
            prop_assert!(!r.denominator().is_negative());
            prop_assert!(!r.denominator().is_zero());
            prop_assert!(r.numerator().gcd(&r.denominator()).is_one());
        }

        #[test]
        fn reduction_is_idempotent(num in small_int(), den in non_zero_int()) {
            let r = rational(num, den);
            let again = Rational::new(r.numerator(), r.denominator()).unwrap();
            prop_assert_eq!(again, r);
        }

        #[test]
        fn scaled_fractions_are_equal(
            num in small_int(),
            den in non_zero_int(),
            k in non_zero_int()
        ) {
            prop_assert_eq!(rational(num * k, den * k), rational(num, den));
        }

        #[test]
        fn ordering_matches_cross_multiplication(
            num_a in small_int(),
            den_a in 1i64..1000i64,
            num_b in small_int(),
            den_b in 1i64..1000i64
        ) {
            let a = rational(num_a, den_a);
            let b = rational(num_b, den_b);
            prop_assert_eq!(a.cmp(&b), (num_a * den_b).cmp(&(num_b * den_a)));
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = rational(num_a, den_a);
            let b = rational(num_b, den_b);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_mul_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = rational(num_a, den_a);
            let b = rational(num_b, den_b);
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn rational_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = rational(num_a, den_a);
            let b = rational(num_b, den_b);
            let c = rational(num_c, den_c);
            prop_assert_eq!(
                &a * &(&b + &c),
                &a * &b + &a * &c
            );
        }

        #[test]
        fn rational_sub_is_add_neg(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = rational(num_a, den_a);
            let b = rational(num_b, den_b);
            prop_assert_eq!(&a - &b, a + &(-&b));
        }

        #[test]
        fn rational_multiplicative_inverse(
            num in non_zero_int(),
            den in non_zero_int()
        ) {
            let a = rational(num, den);
            let inv = a.recip().unwrap();
            let product = &a * &inv;
            prop_assert!(product.is_one());
        }
    }
}
