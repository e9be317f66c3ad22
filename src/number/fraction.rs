//! # Fractions
//!
//! An exact rational number as a pair of native integers. The canonical form invariant
//! is restored after every operation, so two fractions represent the same value exactly
//! when their fields are equal.
use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use num::{Integer, One, ToPrimitive, Zero};
use num::integer::gcd;

use crate::error::ArithmeticError;

/// An exact rational number.
///
/// Kept in reduced canonical form at all times: the denominator is strictly positive,
/// numerator and denominator are coprime, and zero is stored as `0/1`. Because the form
/// is canonical, the derived `Eq` and `Hash` are exact and agree with value equality.
///
/// Integers mix into arithmetic on either side by passing through [`Fraction::from`]
/// first, so `f + 2` and `2 + f` both mean `f + 2/1`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Fraction {
    /// Carries the sign of the value.
    numerator: i64,
    /// Invariant: strictly positive and coprime with the numerator.
    denominator: i64,
}

impl Fraction {
    /// Create a fraction from a numerator and denominator.
    ///
    /// The sign moves to the numerator and both parts are divided by their greatest
    /// common divisor, so `Fraction::new(6, 8)` and `Fraction::new(-3, -4)` both yield
    /// `3/4`.
    ///
    /// # Errors
    ///
    /// `ArithmeticError::DivisionByZero` when `denominator` is zero.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, ArithmeticError> {
        if denominator == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }

        Ok(Self::reduced(numerator, denominator))
    }

    /// Restore the canonical form for a denominator already known to be nonzero.
    fn reduced(numerator: i64, denominator: i64) -> Self {
        debug_assert_ne!(denominator, 0);

        let (numerator, denominator) = if denominator < 0 {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };
        // gcd(0, denominator) equals the denominator, which normalizes zero to `0/1`.
        let divisor = gcd(numerator.abs(), denominator);

        Self {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
        }
    }

    /// The numerator of the reduced form. Carries the sign.
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// The denominator of the reduced form. Strictly positive.
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Division that signals a zero divisor instead of panicking.
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.numerator == 0 {
            None
        } else {
            Some(Self::reduced(
                self.numerator * rhs.denominator,
                self.denominator * rhs.numerator,
            ))
        }
    }

    /// Floor division: the largest integer not exceeding `self / other`.
    ///
    /// Rounds toward negative infinity rather than toward zero, so
    /// `(-7/2).floor_div(2) == -2`. The [`Rem`] implementation is consistent with this
    /// convention.
    ///
    /// # Errors
    ///
    /// `ArithmeticError::DivisionByZero` when `other` is zero.
    pub fn floor_div(self, other: Self) -> Result<i64, ArithmeticError> {
        if other.numerator == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }

        Ok(Integer::div_floor(
            &(self.numerator * other.denominator),
            &(self.denominator * other.numerator),
        ))
    }

    /// Raise to an integer power. A negative exponent raises the reciprocal to the
    /// absolute exponent.
    ///
    /// # Errors
    ///
    /// `ArithmeticError::DivisionByZero` when zero is raised to a negative power.
    pub fn pow(self, exponent: i32) -> Result<Self, ArithmeticError> {
        let base = if exponent < 0 { self.reciprocal()? } else { self };
        let power = exponent.unsigned_abs();

        // Powers of a coprime pair stay coprime and the denominator stays positive, so
        // the result is already canonical.
        Ok(Self {
            numerator: base.numerator.pow(power),
            denominator: base.denominator.pow(power),
        })
    }

    /// The absolute value.
    pub fn abs(self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator,
        }
    }

    /// Return the value in reduced form.
    ///
    /// The canonical form invariant makes this the identity; it exists so that callers
    /// can state the intent explicitly. Idempotent.
    pub fn simplify(self) -> Self {
        self
    }

    /// The multiplicative inverse `denominator/numerator`.
    ///
    /// # Errors
    ///
    /// `ArithmeticError::DivisionByZero` when the value is zero.
    pub fn reciprocal(self) -> Result<Self, ArithmeticError> {
        if self.numerator == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }

        Ok(Self::reduced(self.denominator, self.numerator))
    }

    /// The largest integer not exceeding the value.
    pub fn floor(self) -> i64 {
        Integer::div_floor(&self.numerator, &self.denominator)
    }

    /// Decompose into `(whole, remainder, denominator)` where `whole` is the floor of
    /// the value and `remainder` is the nonnegative remainder `|numerator| mod
    /// denominator`.
    ///
    /// `7/3` decomposes into `(2, 1, 3)`, to be read as "2 and 1/3".
    pub fn as_mixed_number(self) -> (i64, i64, i64) {
        (self.floor(), self.numerator.abs() % self.denominator, self.denominator)
    }

    /// Whether the magnitude is below one: `|numerator| < denominator`.
    pub fn is_proper(self) -> bool {
        self.numerator.abs() < self.denominator
    }

    /// Whether the magnitude is at least one: `|numerator| >= denominator`.
    pub fn is_improper(self) -> bool {
        !self.is_proper()
    }

    /// Compose a fraction from a mixed number: `whole + numerator/denominator`,
    /// computed as `(whole * denominator + numerator) / denominator`.
    ///
    /// # Errors
    ///
    /// `ArithmeticError::DivisionByZero` when `denominator` is zero.
    pub fn from_mixed(
        whole: i64,
        numerator: i64,
        denominator: i64,
    ) -> Result<Self, ArithmeticError> {
        Self::new(whole * denominator + numerator, denominator)
    }

    /// The best rational approximation of `value` with a denominator of at most
    /// `max_denominator`.
    ///
    /// Walks the continued fraction expansion of `value` and compares the last
    /// convergent within the bound against the best semiconvergent, the standard
    /// best-approximation construction. Exactly representable values come back exact:
    /// `from_float(0.75, 10_000)` is `3/4`.
    ///
    /// # Errors
    ///
    /// `ArithmeticError::NonFinite` when `value` is NaN or infinite,
    /// `ArithmeticError::Overflow` when no approximation fits the native integer range.
    ///
    /// # Panics
    ///
    /// When `max_denominator` is smaller than one.
    pub fn from_float(value: f64, max_denominator: i64) -> Result<Self, ArithmeticError> {
        assert!(max_denominator >= 1, "max_denominator should be at least 1");

        if !value.is_finite() {
            return Err(ArithmeticError::NonFinite(value));
        }

        let magnitude = value.abs();
        let with_sign = |fraction: Self| if value < 0.0 { -fraction } else { fraction };

        // Convergents `p/q` of the continued fraction expansion of `magnitude`. The
        // previous convergent is kept for the semiconvergent below.
        let (mut p0, mut q0, mut p1, mut q1) = (0_i64, 1_i64, 1_i64, 0_i64);
        let mut x = magnitude;
        loop {
            if x >= i64::MAX as f64 {
                return Err(ArithmeticError::Overflow);
            }
            let term = x.floor() as i64;
            let p2 = checked_convergent(term, p1, p0)?;
            let q2 = checked_convergent(term, q1, q0)?;
            if q2 > max_denominator {
                break;
            }

            p0 = p1;
            q0 = q1;
            p1 = p2;
            q1 = q2;

            let fractional = x - term as f64;
            if fractional == 0.0 {
                // The expansion terminated within the bound; convergents are already in
                // lowest terms.
                return Ok(with_sign(Self { numerator: p1, denominator: q1 }));
            }
            x = fractional.recip();
        }

        // The bound was exceeded: the best approximation is either the last convergent
        // or the largest semiconvergent still within the bound.
        let steps = (max_denominator - q0) / q1;
        let semiconvergent = Self {
            numerator: checked_convergent(steps, p1, p0)?,
            denominator: checked_convergent(steps, q1, q0)?,
        };
        let convergent = Self { numerator: p1, denominator: q1 };

        let error = |candidate: &Self| {
            (candidate.numerator as f64 / candidate.denominator as f64 - magnitude).abs()
        };
        let best = if error(&convergent) <= error(&semiconvergent) {
            convergent
        } else {
            semiconvergent
        };

        Ok(with_sign(Self::reduced(best.numerator, best.denominator)))
    }
}

/// The next continued fraction convergent term: `term * current + previous`.
fn checked_convergent(term: i64, current: i64, previous: i64) -> Result<i64, ArithmeticError> {
    term.checked_mul(current)
        .and_then(|product| product.checked_add(previous))
        .ok_or(ArithmeticError::Overflow)
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Self { numerator: value, denominator: 1 }
    }
}

impl Add for Fraction {
    type Output = Self;

    /// `a/b + c/d = (ad + cb) / bd`.
    fn add(self, rhs: Self) -> Self::Output {
        Self::reduced(
            self.numerator * rhs.denominator + rhs.numerator * self.denominator,
            self.denominator * rhs.denominator,
        )
    }
}

impl Sub for Fraction {
    type Output = Self;

    /// `a/b - c/d = (ad - cb) / bd`.
    fn sub(self, rhs: Self) -> Self::Output {
        Self::reduced(
            self.numerator * rhs.denominator - rhs.numerator * self.denominator,
            self.denominator * rhs.denominator,
        )
    }
}

impl Mul for Fraction {
    type Output = Self;

    /// `(a/b)(c/d) = ac / bd`.
    fn mul(self, rhs: Self) -> Self::Output {
        Self::reduced(
            self.numerator * rhs.numerator,
            self.denominator * rhs.denominator,
        )
    }
}

impl Div for Fraction {
    type Output = Self;

    /// `(a/b) / (c/d) = ad / bc`.
    ///
    /// # Panics
    ///
    /// When the divisor is zero. Use [`Fraction::checked_div`] to handle that case.
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("division by zero fraction")
    }
}

impl Rem for Fraction {
    type Output = Self;

    /// `a mod b = a - b * floor(a / b)`, consistent with [`Fraction::floor_div`]. The
    /// result takes the sign of the divisor.
    ///
    /// # Panics
    ///
    /// When the divisor is zero.
    fn rem(self, rhs: Self) -> Self::Output {
        let quotient = self.floor_div(rhs).expect("modulo by zero fraction");

        self - rhs * quotient
    }
}

macro_rules! impl_with_integer {
    ($operation:ident, $method:ident) => {
        impl $operation<i64> for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: i64) -> Self::Output {
                self.$method(Fraction::from(rhs))
            }
        }
        impl $operation<Fraction> for i64 {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Self::Output {
                Fraction::from(self).$method(rhs)
            }
        }
    }
}

impl_with_integer!(Add, add);
impl_with_integer!(Sub, sub);
impl_with_integer!(Mul, mul);
impl_with_integer!(Div, div);
impl_with_integer!(Rem, rem);

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self { numerator: 0, denominator: 1 }
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self { numerator: 1, denominator: 1 }
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // Cross multiplication preserves the ordering because denominators are strictly
        // positive. Widened so the cross products cannot wrap.
        let left = self.numerator as i128 * other.denominator as i128;
        let right = other.numerator as i128 * self.denominator as i128;

        left.cmp(&right)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, other: &i64) -> bool {
        self.denominator == 1 && self.numerator == *other
    }
}

impl PartialEq<Fraction> for i64 {
    fn eq(&self, other: &Fraction) -> bool {
        other == self
    }
}

impl PartialOrd<i64> for Fraction {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.partial_cmp(&Fraction::from(*other))
    }
}

impl PartialOrd<Fraction> for i64 {
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        Fraction::from(*self).partial_cmp(other)
    }
}

impl ToPrimitive for Fraction {
    /// Rounds toward negative infinity, matching the floor division convention.
    fn to_i64(&self) -> Option<i64> {
        Some(self.floor())
    }

    fn to_u64(&self) -> Option<u64> {
        let floor = self.floor();

        if floor >= 0 { Some(floor as u64) } else { None }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.numerator as f64 / self.denominator as f64)
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

#[cfg(test)]
mod test;
