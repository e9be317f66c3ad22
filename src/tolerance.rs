//! # Tolerant floating-point comparison
//!
//! Geometric computations accumulate rounding error, so derived values (intersections,
//! projections, rotated points) are compared through the helpers in this module rather
//! than with `==`. Keeping a single comparison utility makes the predicates consistent
//! with each other: `Line::is_parallel` and `Line::contains_point` judge borderline
//! inputs through the same code path.

/// Combined relative and absolute tolerance used for coordinate comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Tighter, absolute-only tolerance used to detect degenerate coefficients, such as a
/// vanishing determinant or a vertical line's `B` coefficient.
pub const COEFFICIENT_TOLERANCE: f64 = 1e-12;

/// Whether two values are equal within a combined relative and absolute tolerance.
///
/// The relative part scales with the larger magnitude of the two operands; the absolute
/// part takes over for comparisons near zero, where a relative bound would collapse.
///
/// # Arguments
///
/// * `relative`: Maximum allowed difference relative to the larger operand magnitude.
/// * `absolute`: Maximum allowed difference regardless of magnitude.
pub fn is_close(a: f64, b: f64, relative: f64, absolute: f64) -> bool {
    let difference = (a - b).abs();

    difference <= relative * a.abs().max(b.abs()) || difference <= absolute
}

/// `is_close` with both tolerances at [`DEFAULT_TOLERANCE`].
pub fn almost_equal(a: f64, b: f64) -> bool {
    is_close(a, b, DEFAULT_TOLERANCE, DEFAULT_TOLERANCE)
}

/// Whether a value lies within `absolute` of zero.
pub fn almost_zero(value: f64, absolute: f64) -> bool {
    value.abs() <= absolute
}
