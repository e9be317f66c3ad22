//! # Plane geometry
//!
//! A [`Point`] doubles as a coordinate and a vector in the Euclidean plane. A [`Line`]
//! is an infinite line in implicit form `Ax + By + C = 0`, which handles vertical lines
//! without special cases. The two compose through [`Line::from_points`],
//! [`Line::contains_point`], [`Line::project_point`] and [`Line::intersection_with`].
pub use line::Line;
pub use point::Point;

pub mod line;
pub mod point;
