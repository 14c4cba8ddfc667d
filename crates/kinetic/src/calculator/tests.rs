use super::*;
use num_rational::{BigRational, Rational64};
use proptest::prelude::*;

#[test]
fn float_sign_respects_tolerance() {
    let calc = DoubleCalculator::new(1e-6);
    assert_eq!(calc.sign(&5e-7), Sign::Zero);
    assert_eq!(calc.sign(&-5e-7), Sign::Zero);
    assert_eq!(calc.sign(&2e-6), Sign::Positive);
    assert_eq!(calc.sign(&-2e-6), Sign::Negative);
    assert!(calc.are_equal(&1.0, &(1.0 + 1e-7)));
    assert!(!calc.are_equal(&1.0, &(1.0 + 1e-5)));

    let exact = DoubleCalculator::exact();
    assert_eq!(exact.sign(&1e-300), Sign::Positive);
}

#[test]
fn float_domain_errors() {
    let calc = DoubleCalculator::default();
    assert_eq!(calc.inverse(&0.0), Err(DomainError::ZeroInverse));
    assert_eq!(calc.inverse(&1e-12), Err(DomainError::ZeroInverse));
    assert_eq!(calc.divide(&1.0, &0.0), Err(DomainError::ZeroInverse));
    assert_eq!(calc.square_root(&-1.0), Err(DomainError::NegativeSquareRoot));
    // within tolerance of zero the root is zero, not an error
    assert_eq!(calc.square_root(&-1e-12), Ok(0.0));
    assert!((calc.square_root(&9.0).unwrap() - 3.0).abs() < 1e-12);
    assert!((calc.divide(&1.0, &4.0).unwrap() - 0.25).abs() < 1e-12);
}

#[test]
fn f32_backend_has_its_own_default() {
    let calc = FloatCalculator::<f32>::default();
    assert_eq!(calc.sign(&1e-6_f32), Sign::Zero);
    assert_eq!(calc.from_i64(-3), -3.0_f32);
}

#[test]
fn derived_predicates_follow_sign() {
    let calc = DoubleCalculator::default();
    assert!(calc.is_zero(&0.0));
    assert!(calc.is_positive(&0.0) && calc.is_negative(&0.0));
    assert!(!calc.is_strictly_positive(&0.0) && !calc.is_strictly_negative(&0.0));
    assert!(calc.is_strictly_positive(&1.0));
    assert!(calc.is_strictly_negative(&-1.0));
    assert_eq!(calc.absolute(&-2.5), 2.5);
    assert_eq!(Sign::Negative.as_i8(), -1);
    assert_eq!(Sign::Positive.flipped(), Sign::Negative);
}

#[test]
fn rational_is_exact() {
    let calc = RationalCalculator::new();
    let third = calc.ratio(1, 3).unwrap();
    let sum = calc.add(&calc.add(&third, &third), &third);
    assert_eq!(sum, calc.one());
    assert_eq!(calc.sign(&calc.subtract(&sum, &calc.one())), Sign::Zero);
    assert_eq!(calc.inverse(&calc.zero()), Err(DomainError::ZeroInverse));
    assert_eq!(calc.ratio(1, 0), Err(DomainError::ZeroInverse));
    assert_eq!(calc.from_ratio(Rational64::new(3, 4)), calc.ratio(3, 4));
}

#[test]
fn from_ratio_reports_a_denominator_lost_in_tolerance() {
    let fine = DoubleCalculator::default();
    assert_eq!(fine.from_ratio(Rational64::new(1, 2)), Ok(0.5));
    let coarse = DoubleCalculator::new(2.0);
    assert_eq!(
        coarse.from_ratio(Rational64::new(1, 2)),
        Err(DomainError::ZeroInverse)
    );
}

#[test]
fn rational_square_roots() {
    let calc = RationalCalculator::new();
    let nine_quarters = calc.ratio(9, 4).unwrap();
    assert_eq!(calc.square_root(&nine_quarters), calc.ratio(3, 2));
    assert_eq!(
        calc.square_root(&calc.from_i64(-4)),
        Err(DomainError::NegativeSquareRoot)
    );
    assert!(matches!(
        calc.square_root(&calc.from_i64(2)),
        Err(DomainError::Unrepresentable { .. })
    ));
    assert_eq!(calc.square_root(&calc.zero()), Ok(BigRational::from_integer(0.into())));
}

proptest! {
    #[test]
    fn rational_inverse_roundtrips(n in -1000i64..1000, d in 1i64..1000) {
        prop_assume!(n != 0);
        let calc = RationalCalculator::new();
        let x = calc.ratio(n, d).unwrap();
        let inv = calc.inverse(&x).unwrap();
        prop_assert_eq!(calc.multiply(&x, &inv), calc.one());
    }

    #[test]
    fn float_sign_matches_exact_sign_outside_tolerance(x in -1e3f64..1e3) {
        let calc = DoubleCalculator::default();
        prop_assume!(x.abs() > 1e-9);
        let expected = if x > 0.0 { Sign::Positive } else { Sign::Negative };
        prop_assert_eq!(calc.sign(&x), expected);
        prop_assert_eq!(calc.sign(&calc.opposite(&x)), expected.flipped());
    }
}
