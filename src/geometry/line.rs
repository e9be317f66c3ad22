//! # Lines
//!
//! An infinite line in implicit form `Ax + By + C = 0`. The implicit form has no
//! trouble with vertical lines, where a slope representation breaks down. No canonical
//! scaling is enforced: `x + y = 0` and `2x + 2y = 0` are the same line, and the
//! predicates compare cross products of coefficients rather than the coefficients
//! themselves.
//!
//! The normal vector of the line is `(A, B)`; the direction vector is `(B, -A)`.
use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::error::GeometryError;
use crate::geometry::point::Point;
use crate::tolerance::{almost_zero, is_close, COEFFICIENT_TOLERANCE, DEFAULT_TOLERANCE};

/// An infinite line `Ax + By + C = 0` in the Euclidean plane.
///
/// Construction never fails; coefficients with `A = B = 0` describe a degenerate line,
/// and the operations that need a normal vector reject it with
/// [`GeometryError::DegenerateLine`] when called.
#[derive(Clone, Copy, Debug)]
pub struct Line {
    a: f64,
    b: f64,
    c: f64,
}

impl Line {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// The line through two points.
    ///
    /// Uses `A = y1 - y2`, `B = x2 - x1`, `C = x1 * y2 - x2 * y1`, which both input
    /// points satisfy exactly up to floating point rounding. Two equal points yield a
    /// degenerate line.
    pub fn from_points(p1: &Point, p2: &Point) -> Self {
        Self::new(
            p1.y - p2.y,
            p2.x - p1.x,
            p1.x * p2.y - p2.x * p1.y,
        )
    }

    /// The coefficient of `x`. The normal vector of the line is `(A, B)`.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// The coefficient of `y`.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// The constant term.
    pub fn c(&self) -> f64 {
        self.c
    }

    /// The coefficient triple `(A, B, C)`.
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Whether the line is vertical: `B` within `1e-12` of zero.
    pub fn is_vertical(&self) -> bool {
        almost_zero(self.b, COEFFICIENT_TOLERANCE)
    }

    /// Whether the line is horizontal: `A` within `1e-12` of zero.
    pub fn is_horizontal(&self) -> bool {
        almost_zero(self.a, COEFFICIENT_TOLERANCE)
    }

    /// The slope `-A / B`, or `None` for a vertical line, which has no finite slope.
    pub fn slope(&self) -> Option<f64> {
        if self.is_vertical() {
            None
        } else {
            Some(-self.a / self.b)
        }
    }

    /// Whether the point satisfies the line equation within tolerance.
    pub fn contains_point(&self, point: &Point) -> bool {
        almost_zero(self.residual(point), DEFAULT_TOLERANCE)
    }

    /// The perpendicular distance from a point to the line:
    /// `|Ax + By + C| / hypot(A, B)`.
    ///
    /// # Errors
    ///
    /// `GeometryError::DegenerateLine` when the normal vector is zero.
    pub fn shortest_distance_to_point(&self, point: &Point) -> Result<f64, GeometryError> {
        let scale = self.normal_length()?;

        Ok(self.residual(point).abs() / scale)
    }

    /// Whether the two lines are parallel.
    ///
    /// Tests the cross proportionality `A1 * B2 = A2 * B1` with tolerance, which is
    /// insensitive to the coefficient scale and treats vertical lines uniformly, unlike
    /// a comparison of slopes.
    pub fn is_parallel(&self, other: &Self) -> bool {
        is_close(
            self.a * other.b,
            other.a * self.b,
            DEFAULT_TOLERANCE,
            COEFFICIENT_TOLERANCE,
        )
    }

    /// Whether the two lines are perpendicular: the dot product of their normals is
    /// within tolerance of zero.
    pub fn is_perpendicular(&self, other: &Self) -> bool {
        almost_zero(self.a * other.a + self.b * other.b, DEFAULT_TOLERANCE)
    }

    /// The unique intersection point of two lines, or `None` when they are parallel or
    /// identical. The absent intersection is a normal outcome, not an error.
    ///
    /// Solves the 2x2 system by Cramer's rule; the lines are considered parallel when
    /// the determinant `A1 * B2 - A2 * B1` is within `1e-12` of zero.
    pub fn intersection_with(&self, other: &Self) -> Option<Point> {
        let determinant = self.a * other.b - other.a * self.b;
        if almost_zero(determinant, COEFFICIENT_TOLERANCE) {
            return None;
        }

        Some(Point::new(
            (self.b * other.c - other.b * self.c) / determinant,
            (other.a * self.c - self.a * other.c) / determinant,
        ))
    }

    /// The orthogonal projection of a point onto the line: the residual scaled by the
    /// squared normal length is subtracted along the normal.
    ///
    /// The projected point is the closest point of the line, so its distance to the
    /// input equals [`Line::shortest_distance_to_point`].
    ///
    /// # Errors
    ///
    /// `GeometryError::DegenerateLine` when the normal vector is zero.
    pub fn project_point(&self, point: &Point) -> Result<Point, GeometryError> {
        let squared = self.a * self.a + self.b * self.b;
        if squared == 0.0 {
            return Err(GeometryError::DegenerateLine);
        }
        let factor = self.residual(point) / squared;

        Ok(Point::new(point.x - self.a * factor, point.y - self.b * factor))
    }

    /// The angle of the direction vector `(B, -A)` in radians.
    pub fn angle(&self) -> f64 {
        (-self.a).atan2(self.b)
    }

    /// The normal vector `(A, B)` scaled to unit length.
    ///
    /// # Errors
    ///
    /// `GeometryError::DegenerateLine` when the normal vector is zero.
    pub fn unit_normal(&self) -> Result<Point, GeometryError> {
        let scale = self.normal_length()?;

        Ok(Point::new(self.a / scale, self.b / scale))
    }

    /// A parallel line shifted by `distance` along the normal direction. Positive
    /// distance moves toward the normal `(A, B)`.
    ///
    /// Translating any point of the line by `distance` along the unit normal changes
    /// the constant term to `C - hypot(A, B) * distance`.
    ///
    /// # Errors
    ///
    /// `GeometryError::DegenerateLine` when the normal vector is zero.
    pub fn offset(&self, distance: f64) -> Result<Self, GeometryError> {
        let scale = self.normal_length()?;

        Ok(Self::new(self.a, self.b, self.c - scale * distance))
    }

    /// The line parallel to this one through `point`: same normal, with the constant
    /// term solved so `point` satisfies the equation.
    pub fn parallel_through(&self, point: &Point) -> Self {
        Self::new(self.a, self.b, -(self.a * point.x + self.b * point.y))
    }

    /// The line perpendicular to this one through `point`. The perpendicular normal is
    /// the direction vector `(B, -A)`.
    pub fn perpendicular_through(&self, point: &Point) -> Self {
        let (a, b) = (self.b, -self.a);

        Self::new(a, b, -(a * point.x + b * point.y))
    }

    /// The left-hand side `Ax + By + C` evaluated at a point. Zero exactly when the
    /// point lies on the line.
    fn residual(&self, point: &Point) -> f64 {
        self.a * point.x + self.b * point.y + self.c
    }

    /// The length of the normal vector `(A, B)`.
    ///
    /// # Errors
    ///
    /// `GeometryError::DegenerateLine` when both coefficients are exactly zero.
    fn normal_length(&self) -> Result<f64, GeometryError> {
        let length = self.a.hypot(self.b);
        if length == 0.0 {
            return Err(GeometryError::DegenerateLine);
        }

        Ok(length)
    }
}

impl Display for Line {
    /// Render as a human-readable equation, such as `3x + 4y - 12 = 0`.
    ///
    /// Zero-coefficient terms are elided, unit coefficients render the bare variable,
    /// and the first term carries no leading `+`. The all-zero line renders as `0 = 0`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut terms = Vec::new();
        for &(coefficient, variable) in &[(self.a, "x"), (self.b, "y"), (self.c, "")] {
            if coefficient != 0.0 {
                terms.push(format_term(coefficient, variable, terms.is_empty()));
            }
        }

        if terms.is_empty() {
            f.write_str("0 = 0")
        } else {
            write!(f, "{} = 0", terms.iter().join(" "))
        }
    }
}

/// A single rendered term of the equation, sign included.
fn format_term(coefficient: f64, variable: &str, is_first: bool) -> String {
    let sign = if coefficient >= 0.0 {
        if is_first { "" } else { "+" }
    } else {
        "-"
    };
    let magnitude = coefficient.abs();

    let rendered = if magnitude == 1.0 && !variable.is_empty() {
        format!("{} {}", sign, variable)
    } else {
        format!("{} {}{}", sign, magnitude, variable)
    };
    rendered.trim_start().to_string()
}
