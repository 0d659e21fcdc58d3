//! Property-based tests for fractions and polynomial division.

use proptest::prelude::*;

use crate::math::{gcd, poly_gcd, Fp, Fraction, Polynomial};

type F101 = Fp<101>;

fn small_fraction() -> impl Strategy<Value = Fraction> {
    (-20i64..20, 1i64..20).prop_map(|(n, d)| Fraction::new(n, d))
}

// Integer coefficients keep repeated division by leading coefficients within `i64`.
fn small_poly(max_len: usize) -> impl Strategy<Value = Polynomial<Fraction>> {
    proptest::collection::vec((-9i64..10).prop_map(Fraction::from), 1..=max_len)
        .prop_map(Polynomial::new)
}

fn nonzero_poly(max_len: usize) -> impl Strategy<Value = Polynomial<Fraction>> {
    small_poly(max_len).prop_filter("polynomial must be non-zero", |p| !p.is_zero())
}

fn f101_poly(max_len: usize) -> impl Strategy<Value = Polynomial<F101>> {
    proptest::collection::vec((0u64..101).prop_map(F101::new), 1..=max_len)
        .prop_map(Polynomial::new)
}

fn nonzero_f101_poly(max_len: usize) -> impl Strategy<Value = Polynomial<F101>> {
    f101_poly(max_len).prop_filter("polynomial must be non-zero", |p| !p.is_zero())
}

proptest! {
    #[test]
    fn fraction_is_reduced(n in (i64::MIN + 1)..=i64::MAX, d in (i64::MIN + 1)..=i64::MAX) {
        prop_assume!(d != 0);
        let f = Fraction::new(n, d);
        prop_assert!(f.denom() > 0);
        prop_assert_eq!(gcd(f.numer().unsigned_abs(), f.denom().unsigned_abs()), 1);
    }

    #[test]
    fn fraction_ops_stay_reduced(a in small_fraction(), b in small_fraction()) {
        for f in &[a + b, a - b, a * b] {
            prop_assert!(f.denom() > 0);
            prop_assert_eq!(gcd(f.numer().unsigned_abs(), f.denom().unsigned_abs()), 1);
        }
    }

    #[test]
    fn fraction_parse_matches_arithmetic(a in -1000i64..1000, b in 1i64..1000, c in -1000i64..1000) {
        let text = format!("{} / {} + {}", a, b, c);
        let parsed = text.parse::<Fraction>().map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(parsed, Fraction::new(a, b) + c);
    }

    #[test]
    fn normalization_is_idempotent(a in small_poly(5)) {
        let renormalized = Polynomial::new(a.coeffs().to_vec());
        prop_assert_eq!(&renormalized, &a);
        if a.is_zero() {
            prop_assert_eq!(a.degree(), -1);
            prop_assert_eq!(a.coeffs().len(), 1);
        }
    }

    #[test]
    fn division_identity(a in small_poly(5), b in nonzero_poly(3)) {
        let (quo, rem) = a.div_rem(&b);
        prop_assert!(rem.degree() < b.degree());
        prop_assert_eq!(&quo * &b + rem, a);
    }

    #[test]
    fn division_identity_over_finite_field(a in f101_poly(8), b in nonzero_f101_poly(5)) {
        let quo = &a / &b;
        let rem = &a % &b;
        prop_assert!(rem.degree() < b.degree());
        prop_assert_eq!(quo * b + rem, a);
    }

    #[test]
    fn gcd_with_zero_is_monic(a in small_poly(4)) {
        prop_assert_eq!(poly_gcd(&a, &Polynomial::zero()), a.monic());
        prop_assert_eq!(poly_gcd(&Polynomial::zero(), &a), a.monic());
    }

    #[test]
    fn gcd_with_self_is_monic(a in small_poly(3)) {
        prop_assert_eq!(a.gcd(&a), a.monic());
    }

    #[test]
    fn gcd_divides_both(a in nonzero_f101_poly(6), b in nonzero_f101_poly(6)) {
        let g = poly_gcd(&a, &b);
        prop_assert!(g.leading_coeff().value() == 1);
        prop_assert!((&a % &g).is_zero());
        prop_assert!((&b % &g).is_zero());
    }

    #[test]
    fn gcd_finds_common_factor(a in nonzero_f101_poly(4), b in nonzero_f101_poly(4), c in nonzero_f101_poly(3)) {
        let g = poly_gcd(&(&a * &c), &(&b * &c));
        prop_assert!((&g % &c.monic()).is_zero());
    }

    #[test]
    fn gcd_over_fractions_divides_both(a in nonzero_poly(3), b in nonzero_poly(3)) {
        let g = poly_gcd(&a, &b);
        prop_assert!((&a % &g).is_zero());
        prop_assert!((&b % &g).is_zero());
    }
}
