//! Property-based checks of the algebraic identities the kernels promise.

use calcpad::algebra::{solve_quadratic, solve_system, LinearSystem2x2};
use calcpad::number_theory::{factorize, gcd, is_prime, lcm};
use calcpad::rational::{div, mul, Fraction};
use proptest::prelude::*;

proptest! {
    #[test]
    fn gcd_is_symmetric(a in -10_000i64..10_000, b in -10_000i64..10_000) {
        prop_assert_eq!(gcd(&a, &b), gcd(&b, &a));
        prop_assert!(gcd(&a, &b) >= 0);
    }

    #[test]
    fn gcd_lcm_product_identity(a in -10_000i64..10_000, b in -10_000i64..10_000) {
        prop_assume!(a != 0 && b != 0);
        prop_assert_eq!(gcd(&a, &b) * lcm(&a, &b), (a * b).abs());
    }

    #[test]
    fn lcm_of_zero_is_zero(a in -10_000i64..10_000) {
        prop_assert_eq!(lcm(&a, &0), 0);
        prop_assert_eq!(lcm(&0, &a), 0);
    }

    #[test]
    fn factorization_reconstructs_input(n in 2i64..20_000) {
        let f = factorize(&n).unwrap();
        prop_assert_eq!(f.product(), n);
        for (p, e) in f.factors() {
            prop_assert!(is_prime(p));
            prop_assert!(*e >= 1);
        }
        // primes strictly increasing
        for w in f.factors().windows(2) {
            prop_assert!(w[0].0 < w[1].0);
        }
    }

    #[test]
    fn rational_round_trip(
        an in -100i64..100, ad in 1i64..100,
        bn in -100i64..100, bd in 1i64..100,
    ) {
        prop_assume!(bn != 0);
        let a = Fraction::new(an, ad);
        let b = Fraction::new(bn, bd);
        prop_assert_eq!(div(mul(a, b), b).unwrap(), a);
    }

    #[test]
    fn solvers_are_idempotent(
        a in -50.0f64..50.0, b in -50.0f64..50.0, c in -50.0f64..50.0,
    ) {
        prop_assume!(a != 0.0);
        prop_assert_eq!(
            solve_quadratic(a, b, c).unwrap(),
            solve_quadratic(a, b, c).unwrap()
        );

        let sys = LinearSystem2x2::new(a, b, c, b, a, c);
        prop_assert_eq!(solve_system(&sys), solve_system(&sys));
    }
}
