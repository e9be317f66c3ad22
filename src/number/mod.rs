//! # Exact rational numbers
//!
//! A single value type, [`Fraction`], held permanently in reduced canonical form. All
//! arithmetic is exact within the native integer range.
pub use fraction::Fraction;

pub mod fraction;
mod macros;
