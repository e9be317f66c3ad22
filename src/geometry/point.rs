//! # Points
//!
//! A 2D coordinate with vector semantics: componentwise addition and scaling, dot and
//! cross products, rotation and normalization. Operations return new values; nothing is
//! mutated in place.
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::GeometryError;
use crate::tolerance::almost_equal;

/// A point in the Euclidean plane, also used as a 2D vector.
///
/// Equality is tolerance based: both coordinates must match within a combined relative
/// and absolute tolerance of `1e-9`. Geometric computations accumulate floating point
/// error, and derived points (rotated, projected, intersected) would otherwise compare
/// unequal to their exact counterparts. Note that this makes equality non-transitive,
/// so `Eq` is deliberately not implemented.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The coordinate origin `(0, 0)`.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The Euclidean distance to another point.
    ///
    /// Computed with `f64::hypot`, which is more stable than the naive
    /// `sqrt(dx * dx + dy * dy)` for extreme coordinate values.
    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// The distance to the coordinate origin.
    pub fn distance_from_origin(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// The length of the vector. Alias of [`Point::distance_from_origin`].
    pub fn magnitude(&self) -> f64 {
        self.distance_from_origin()
    }

    /// The unit vector in the same direction. Idempotent within tolerance.
    ///
    /// # Errors
    ///
    /// `GeometryError::ZeroVector` when the magnitude is exactly zero.
    pub fn normalize(&self) -> Result<Self, GeometryError> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(GeometryError::ZeroVector);
        }

        Ok(Self::new(self.x / magnitude, self.y / magnitude))
    }

    /// The dot product `x1 * x2 + y1 * y2`.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The scalar cross product `x1 * y2 - y1 * x2`, the z-component of the 3D cross
    /// product of the two vectors lifted into space.
    pub fn cross(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// The signed angle from `self` to `other` in radians, in `(-pi, pi]`.
    /// Counterclockwise is positive.
    pub fn angle_between(&self, other: &Self) -> f64 {
        self.cross(other).atan2(self.dot(other))
    }

    /// Rotate by `angle` radians about the coordinate origin. Counterclockwise is
    /// positive, following the mathematical convention.
    pub fn rotate(&self, angle: f64) -> Self {
        self.rotate_about(angle, Self::ORIGIN)
    }

    /// Rotate by `angle` radians about an arbitrary origin, by translating that origin
    /// onto the coordinate origin, rotating, and translating back.
    pub fn rotate_about(&self, angle: f64, origin: Self) -> Self {
        let x = self.x - origin.x;
        let y = self.y - origin.y;
        let (sin, cos) = angle.sin_cos();

        Self::new(
            x * cos - y * sin + origin.x,
            x * sin + y * cos + origin.y,
        )
    }

    /// The point halfway between `self` and `other`.
    pub fn midpoint(&self, other: &Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        almost_equal(self.x, other.x) && almost_equal(self.y, other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

/// Scalar multiplication is commutative: `2.0 * point` equals `point * 2.0`.
impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, point: Point) -> Self::Output {
        point * self
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
