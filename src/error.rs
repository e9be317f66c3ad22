//! # Error types
//!
//! Degenerate inputs fail synchronously at the offending call; nothing is retried or
//! silently defaulted. Expected absences, such as the missing intersection of parallel
//! lines or the slope of a vertical line, are `Option`s on the relevant operations and
//! never appear here.
use std::error;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Failure of an exact rational operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArithmeticError {
    /// A zero denominator at construction, a zero divisor, the reciprocal of zero, or
    /// zero raised to a negative power.
    DivisionByZero,
    /// A floating point input without a rational value, such as NaN or an infinity.
    NonFinite(f64),
    /// The result does not fit the native numerator and denominator range.
    Overflow,
}

impl Display for ArithmeticError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::DivisionByZero => f.write_str("division by zero"),
            ArithmeticError::NonFinite(value) => {
                write!(f, "value {} has no rational representation", value)
            },
            ArithmeticError::Overflow => f.write_str("result exceeds the native integer range"),
        }
    }
}

impl error::Error for ArithmeticError {}

/// Degenerate geometric input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GeometryError {
    /// The zero vector has no direction, so it cannot be normalized.
    ZeroVector,
    /// Both line coefficients `A` and `B` are zero, leaving the line without a normal
    /// vector. Such coefficients describe either every point of the plane or none.
    DegenerateLine,
}

impl Display for GeometryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::ZeroVector => f.write_str("cannot normalize a zero-length vector"),
            GeometryError::DegenerateLine => {
                f.write_str("line coefficients A and B are both zero")
            },
        }
    }
}

impl error::Error for GeometryError {}
