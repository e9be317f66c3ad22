use std::collections::hash_map::DefaultHasher;
use std::f64::consts::PI;
use std::hash::{Hash, Hasher};

use num::{One, ToPrimitive, Zero};

use crate::error::ArithmeticError;
use crate::number::Fraction;
use crate::F;

#[test]
fn test_new_reduces() {
    let fraction = Fraction::new(6, 8).unwrap();
    assert_eq!(fraction.numerator(), 3);
    assert_eq!(fraction.denominator(), 4);

    let fraction = Fraction::new(0, 17).unwrap();
    assert_eq!(fraction.numerator(), 0);
    assert_eq!(fraction.denominator(), 1);

    assert_eq!(F!(12, 4), F!(3));
}

#[test]
fn test_new_normalizes_sign() {
    let fraction = Fraction::new(3, -4).unwrap();
    assert_eq!(fraction.numerator(), -3);
    assert_eq!(fraction.denominator(), 4);

    let fraction = Fraction::new(-3, -4).unwrap();
    assert_eq!(fraction.numerator(), 3);
    assert_eq!(fraction.denominator(), 4);
}

#[test]
fn test_new_zero_denominator() {
    assert_eq!(Fraction::new(1, 0), Err(ArithmeticError::DivisionByZero));
}

#[test]
fn test_invariant_holds_after_arithmetic() {
    let values = [F!(3, 4), F!(-7, 3), F!(5), F!(0), F!(-1, 6)];
    for &left in &values {
        for &right in &values {
            for result in [left + right, left - right, left * right] {
                assert!(result.denominator() > 0);
                assert_eq!(
                    num::integer::gcd(result.numerator().abs(), result.denominator()),
                    1,
                );
            }
        }
    }
}

#[test]
fn test_addition() {
    assert_eq!(F!(3, 4) + F!(2, 5), F!(23, 20));
    assert_eq!(F!(1, 6) + F!(1, 3), F!(1, 2));
    assert_eq!(F!(3, 4) + 2, F!(11, 4));
    assert_eq!(2 + F!(3, 4), F!(11, 4));
}

#[test]
fn test_subtraction() {
    assert_eq!(F!(3, 4) - F!(2, 5), F!(7, 20));
    assert_eq!(F!(1, 2) - F!(1, 2), Fraction::zero());
    assert_eq!(3 - F!(3, 4), F!(9, 4));
    assert_eq!(F!(3, 4) - 1, F!(-1, 4));
}

#[test]
fn test_multiplication() {
    assert_eq!(F!(3, 4) * F!(2, 5), F!(3, 10));
    assert_eq!(F!(2, 3) * F!(3, 2), Fraction::one());
    assert_eq!(2 * F!(3, 4), F!(3, 2));
    assert_eq!(F!(3, 4) * 0, Fraction::zero());
}

#[test]
fn test_division() {
    assert_eq!(F!(3, 4) / F!(2, 5), F!(15, 8));
    assert_eq!(F!(3, 4) / 3, F!(1, 4));
    assert_eq!(3 / F!(3, 4), F!(4));

    assert_eq!(F!(3, 4).checked_div(Fraction::zero()), None);
    assert_eq!(F!(3, 4).checked_div(F!(1, 2)), Some(F!(3, 2)));
}

#[test]
#[should_panic]
fn test_division_by_zero_panics() {
    let _ = F!(3, 4) / Fraction::zero();
}

#[test]
fn test_division_multiplication_round_trip() {
    let values = [F!(3, 4), F!(-7, 3), F!(5), F!(-1, 6)];
    for &f in &values {
        for &g in &values {
            assert_eq!((f / g) * g, f);
        }
    }
}

#[test]
fn test_floor_div_rounds_toward_negative_infinity() {
    assert_eq!(F!(7, 2).floor_div(F!(2)), Ok(1));
    assert_eq!(F!(-7, 2).floor_div(F!(2)), Ok(-2));
    assert_eq!(F!(7, 2).floor_div(F!(-2)), Ok(-2));
    assert_eq!(F!(-7, 2).floor_div(F!(-2)), Ok(1));
    assert_eq!(F!(6).floor_div(F!(3)), Ok(2));

    assert_eq!(F!(1).floor_div(Fraction::zero()), Err(ArithmeticError::DivisionByZero));
}

#[test]
fn test_modulo() {
    assert_eq!(F!(7, 2) % F!(2), F!(3, 2));
    // `-7/2 = -2 * 2 + 1/2` under the floor convention.
    assert_eq!(F!(-7, 2) % F!(2), F!(1, 2));
    assert_eq!(F!(7, 2) % F!(-2), F!(-1, 2));
    assert_eq!(F!(7, 3) % 1, F!(1, 3));
}

#[test]
fn test_pow() {
    assert_eq!(F!(3, 4).pow(2), Ok(F!(9, 16)));
    assert_eq!(F!(3, 4).pow(0), Ok(Fraction::one()));
    assert_eq!(F!(3, 4).pow(-1), Ok(F!(4, 3)));
    assert_eq!(F!(-2, 3).pow(2), Ok(F!(4, 9)));
    assert_eq!(F!(-2, 3).pow(3), Ok(F!(-8, 27)));
    assert_eq!(F!(2).pow(-2), Ok(F!(1, 4)));

    assert_eq!(Fraction::zero().pow(-1), Err(ArithmeticError::DivisionByZero));
    assert_eq!(Fraction::zero().pow(2), Ok(Fraction::zero()));
}

#[test]
fn test_unary() {
    assert_eq!(-F!(3, 4), F!(-3, 4));
    assert_eq!(-F!(-3, 4), F!(3, 4));
    assert_eq!(F!(-3, 4).abs(), F!(3, 4));
    assert_eq!(F!(3, 4).abs(), F!(3, 4));
    assert_eq!(-Fraction::zero(), Fraction::zero());
}

#[test]
fn test_ordering() {
    assert!(F!(2, 5) < F!(3, 4));
    assert!(F!(3, 4) > F!(2, 5));
    assert!(F!(-3, 4) < F!(-2, 5));
    assert!(F!(1, 2) <= F!(2, 4));
    assert!(F!(1, 2) >= F!(2, 4));

    assert!(F!(3, 4) < 1);
    assert!(F!(5, 4) > 1);
    assert!(2 > F!(7, 4));
    assert_eq!(F!(8, 4), 2);
    assert_eq!(2, F!(8, 4));
}

#[test]
fn test_equality_is_by_reduced_value() {
    assert_eq!(F!(6, 8), F!(3, 4));
    assert_ne!(F!(3, 4), F!(4, 3));
}

#[test]
fn test_hash_agrees_with_equality() {
    let hash = |fraction: &Fraction| {
        let mut hasher = DefaultHasher::new();
        fraction.hash(&mut hasher);
        hasher.finish()
    };

    assert_eq!(hash(&F!(6, 8)), hash(&F!(3, 4)));
    assert_eq!(hash(&F!(-10, 5)), hash(&F!(-2)));
}

#[test]
fn test_conversions() {
    assert_eq!(F!(3, 4).to_f64(), Some(0.75));
    assert_eq!(F!(1, 3).to_f64(), Some(1.0 / 3.0));

    assert_eq!(F!(7, 2).to_i64(), Some(3));
    assert_eq!(F!(-7, 2).to_i64(), Some(-4));
    assert_eq!(F!(7, 2).floor(), 3);
    assert_eq!(F!(-7, 2).floor(), -4);

    assert_eq!(F!(-1, 2).to_u64(), None);
    assert_eq!(F!(5, 2).to_u64(), Some(2));
}

#[test]
fn test_display() {
    assert_eq!(F!(3, 4).to_string(), "3/4");
    assert_eq!(F!(-3, 4).to_string(), "-3/4");
    assert_eq!(F!(8, 4).to_string(), "2");
    assert_eq!(Fraction::zero().to_string(), "0");
}

#[test]
fn test_simplify_is_identity() {
    let fraction = F!(3, 4);
    assert_eq!(fraction.simplify(), fraction);
    assert_eq!(fraction.simplify().simplify(), fraction.simplify());
}

#[test]
fn test_reciprocal() {
    assert_eq!(F!(3, 4).reciprocal(), Ok(F!(4, 3)));
    assert_eq!(F!(-3, 4).reciprocal(), Ok(F!(-4, 3)));
    assert_eq!(Fraction::zero().reciprocal(), Err(ArithmeticError::DivisionByZero));
}

#[test]
fn test_mixed_numbers() {
    assert_eq!(F!(7, 3).as_mixed_number(), (2, 1, 3));
    assert_eq!(F!(3, 4).as_mixed_number(), (0, 3, 4));
    // Floor convention: `-7/3` is `-3` plus a positive remainder part.
    assert_eq!(F!(-7, 3).as_mixed_number(), (-3, 1, 3));

    assert_eq!(Fraction::from_mixed(2, 1, 3), Ok(F!(7, 3)));
    assert_eq!(Fraction::from_mixed(0, 3, 4), Ok(F!(3, 4)));
    assert_eq!(Fraction::from_mixed(1, 0, 0), Err(ArithmeticError::DivisionByZero));
}

#[test]
fn test_mixed_number_round_trip() {
    for &fraction in &[F!(7, 3), F!(3, 4), F!(5), F!(0), F!(22, 7)] {
        let (whole, remainder, denominator) = fraction.as_mixed_number();
        assert_eq!(Fraction::from_mixed(whole, remainder, denominator), Ok(fraction));
    }
}

#[test]
fn test_proper() {
    assert!(F!(3, 4).is_proper());
    assert!(F!(-3, 4).is_proper());
    assert!(F!(7, 3).is_improper());
    assert!(F!(-7, 3).is_improper());
    assert!(F!(1).is_improper());
    assert!(Fraction::zero().is_proper());
}

#[test]
fn test_from_float() {
    assert_eq!(Fraction::from_float(0.75, 10_000), Ok(F!(3, 4)));
    assert_eq!(Fraction::from_float(0.5, 10_000), Ok(F!(1, 2)));
    assert_eq!(Fraction::from_float(3.0, 10_000), Ok(F!(3)));
    assert_eq!(Fraction::from_float(0.0, 10_000), Ok(Fraction::zero()));
    assert_eq!(Fraction::from_float(-0.75, 10_000), Ok(F!(-3, 4)));

    // Best approximations under a small denominator bound.
    assert_eq!(Fraction::from_float(1.0 / 3.0, 10), Ok(F!(1, 3)));
    assert_eq!(Fraction::from_float(PI, 1_000), Ok(F!(355, 113)));
    assert_eq!(Fraction::from_float(PI, 10), Ok(F!(22, 7)));
}

#[test]
fn test_from_float_rejects_non_finite() {
    assert!(matches!(
        Fraction::from_float(f64::NAN, 10_000),
        Err(ArithmeticError::NonFinite(_)),
    ));
    assert_eq!(
        Fraction::from_float(f64::INFINITY, 10_000),
        Err(ArithmeticError::NonFinite(f64::INFINITY)),
    );
}

#[test]
fn test_from_float_overflow() {
    assert_eq!(Fraction::from_float(1e300, 10_000), Err(ArithmeticError::Overflow));
}

#[test]
#[should_panic]
fn test_from_float_zero_bound_panics() {
    let _ = Fraction::from_float(0.5, 0);
}
