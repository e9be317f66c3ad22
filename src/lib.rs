//! # replane
//!
//! Self-contained value types for plane geometry and exact arithmetic:
//!
//! * [`geometry`] provides [`Point`], a 2D coordinate and vector type, and [`Line`], an
//!   infinite line held in implicit form `Ax + By + C = 0`, together with the geometric
//!   algorithms relating them (distance, projection, intersection, rotation).
//! * [`number`] provides [`Fraction`], an exact rational number kept permanently in
//!   reduced canonical form, with full arithmetic, ordering and conversion semantics.
//!
//! The two components are independent. All values are immutable once constructed and
//! every operation is a pure function of its inputs, so everything here can be shared
//! freely between threads.
//!
//! Floating point comparisons go through a single shared utility in [`tolerance`], so
//! that geometric predicates agree with each other on borderline inputs.
pub mod error;
pub mod geometry;
pub mod number;
pub mod tolerance;

pub use geometry::line::Line;
pub use geometry::point::Point;
pub use number::fraction::Fraction;
