//! Property-based tests for the algebraic laws of quantity arithmetic.
//!
//! Exact laws use integer representations so that equality is meaningful;
//! laws that only hold up to rounding use `f64` with a relative tolerance.

use std::cmp::Ordering;

use proptest::prelude::*;

use mesi::si::*;
use mesi::unit::{DivUnit, Inverse, Meter, MulUnit, Radical, Scaled, TenToThe};
use mesi::Quantity;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
}

fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected == 0.0 {
        actual.abs()
    } else {
        ((actual - expected) / expected).abs()
    }
}

type RootTwoMeter = Scaled<Meter, Radical<2, 1, 2>>;
type RootTenMeter = Scaled<Meter, TenToThe<1, 2>>;
type OddRootMeter = Scaled<Meter, Radical<3, 7, 3>>;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn addition_commutes(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let (qa, qb) = (Meters::<i64>::new(a), Meters::<i64>::new(b));
        prop_assert_eq!(qa + qb, qb + qa);
    }

    #[test]
    fn addition_associates(
        a in -1_000_000i64..1_000_000,
        b in -1_000_000i64..1_000_000,
        c in -1_000_000i64..1_000_000,
    ) {
        let (a, b, c) = (
            Seconds::<i64>::new(a),
            Seconds::<i64>::new(b),
            Seconds::<i64>::new(c),
        );
        prop_assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn zero_and_negation(a in -1_000_000i64..1_000_000) {
        let q = Kilograms::<i64>::new(a);
        let zero = Kilograms::<i64>::default();
        prop_assert_eq!(q + zero, q);
        prop_assert_eq!(q - q, zero);
        prop_assert_eq!(q + (-q), zero);
        prop_assert_eq!(q - zero, q);
    }

    #[test]
    fn scalar_laws(
        a in -10_000i64..10_000,
        b in -10_000i64..10_000,
        j in 1i64..100,
        k in 1i64..100,
    ) {
        let (qa, qb) = (Meters::<i64>::new(a), Meters::<i64>::new(b));
        prop_assert_eq!(k * qa, qa * k);
        prop_assert_eq!((k * qa) / k, qa);
        prop_assert_eq!(k * (qa + qb), k * qa + k * qb);
        prop_assert_eq!((j * k) * qa, j * (k * qa));
        prop_assert_eq!((j + k) * qa, j * qa + k * qa);
    }

    #[test]
    fn products_commute_across_dimensions(
        a in -1000i64..1000,
        b in -1000i64..1000,
        c in -1000i64..1000,
    ) {
        let m = Meters::<i64>::new(a);
        let s = Seconds::<i64>::new(b);
        let kg = Kilograms::<i64>::new(c);
        prop_assert_eq!(m * s, s * m);
        prop_assert_eq!((m * s) * kg, m * (s * kg));
        prop_assert_eq!((m * s) * kg, (kg * m) * s);
    }

    #[test]
    fn division_laws(a in 1e-3f64..1e6, b in 1e-3f64..1e6) {
        let (qa, qb) = (Meters::new(a), Seconds::new(b));
        prop_assert!(close(((qa / qb) * qb).value(), a));
        prop_assert_eq!((qa / qa).into_number(), 1.0);
        prop_assert!(close((qa / qb).recip().value(), (qb / qa).value()));
    }

    #[test]
    fn inversion_laws(a in 1e-3f64..1e6) {
        let q = Meters::new(a);
        let inverse: Quantity<Inverse<Meter>> = 1.0 / q;

        prop_assert!(close((inverse * q).into_number(), 1.0));
        prop_assert_eq!(q / q, Scalar::new(1.0));
        let nested: Quantity<DivUnit<DivUnit<Meter, Meter>, Meter>> = q / q / q;
        prop_assert_eq!(inverse, nested);
        prop_assert_eq!(q.recip(), inverse);
    }

    #[test]
    fn scale_round_trip_is_exact_for_integers(a in -1_000_000i64..1_000_000) {
        let km = Kilometers::<i64>::new(a);
        let m: Meters<i64> = km.convert();
        prop_assert_eq!(m.value(), a * 1000);
        let back: Kilometers<i64> = m.convert();
        prop_assert_eq!(back, km);
    }

    #[test]
    fn scale_round_trip_for_floats(a in -1e9f64..1e9) {
        let q = Hours::new(a);
        let s: Seconds = q.convert();
        let back: Hours = s.convert();
        prop_assert!(close(back.value(), a));

        let mm: Millimeters = Meters::new(a).convert();
        prop_assert!(close(mm.value(), a * 1000.0));
    }

    #[test]
    fn inexact_scale_round_trip_has_bounded_error(a in -1e12f64..1e12) {
        let there: Quantity<RootTwoMeter> = Meters::new(a).convert();
        let back: Meters = there.convert();
        prop_assert!(relative_error(back.value(), a) <= 1e-12);
        prop_assert!(relative_error(there.value() * std::f64::consts::SQRT_2, a) <= 1e-12);

        let there: Quantity<RootTenMeter> = Kilometers::new(a).convert();
        let back: Kilometers = there.convert();
        prop_assert!(relative_error(back.value(), a) <= 1e-12);

        let there: Quantity<OddRootMeter> = Quantity::<RootTwoMeter>::new(a).convert();
        let back: Quantity<RootTwoMeter> = there.convert();
        prop_assert!(relative_error(back.value(), a) <= 1e-12);
        prop_assert!(relative_error(there.into_base_value(), back.into_base_value()) <= 1e-12);
    }

    #[test]
    fn base_value_is_independent_of_unit(a in 0i64..1_000_000) {
        let km = Kilometers::<i64>::new(a);
        let m: Meters<i64> = km.convert();
        prop_assert_eq!(km.into_base_value(), m.into_base_value());
    }

    #[test]
    fn ordering_is_consistent(a in -1e6f64..1e6, b in -1e6f64..1e6) {
        let (t1, t2) = (Seconds::new(a), Seconds::new(b));
        prop_assert_eq!(t1.partial_cmp(&t2), a.partial_cmp(&b));
        match a.partial_cmp(&b) {
            Some(Ordering::Less) => prop_assert!(t1 < t2 && t1 <= t2 && t1 != t2),
            Some(Ordering::Greater) => prop_assert!(t1 > t2 && t1 >= t2 && t1 != t2),
            Some(Ordering::Equal) => prop_assert!(t1 == t2 && t1 <= t2 && t1 >= t2),
            None => prop_assert!(false, "finite inputs are always ordered"),
        }
    }

    #[test]
    fn scalar_multiplication_matches_value(sp in 0.0f64..10.0, s in 0.0f64..100.0) {
        type Product = MulUnit<Meter, Meter>;
        let speed = Quantity::<Product>::new(sp);
        prop_assert!(((speed * s) - Quantity::<Product>::new(sp * s)).value().abs() < 0.01);
    }
}
