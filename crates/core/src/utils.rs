//! Geometry primitives shared across the text layer.
//!
//! Provides the tuple-based geometric types (Point, Rect, Matrix) used to
//! describe glyph transforms and viewport mappings, plus the rotation
//! helpers that decide whether glyph advance runs along the horizontal or
//! vertical screen axis.

/// A 2D point (x, y).
pub type Point = (f64, f64);

/// A rectangle defined by (x0, y0, x1, y1) where (x0, y0) is bottom-left
/// and (x1, y1) is top-right in PDF user space.
pub type Rect = (f64, f64, f64, f64);

/// A 6-element affine transformation matrix (a, b, c, d, e, f).
/// Transforms point (x, y) to (ax + cy + e, bx + dy + f).
pub type Matrix = (f64, f64, f64, f64, f64, f64);

/// Identity transformation matrix.
pub const MATRIX_IDENTITY: Matrix = (1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

/// Small epsilon for floating-point comparisons.
pub const EPSILON: f64 = 1e-9;

/// Compares two floats for approximate equality.
#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Multiplies two matrices: result = m1 * m0.
/// This applies m0 first, then m1.
pub fn mult_matrix(m1: Matrix, m0: Matrix) -> Matrix {
    let (a1, b1, c1, d1, e1, f1) = m1;
    let (a0, b0, c0, d0, e0, f0) = m0;
    (
        a0 * a1 + c0 * b1,
        b0 * a1 + d0 * b1,
        a0 * c1 + c0 * d1,
        b0 * c1 + d0 * d1,
        a0 * e1 + c0 * f1 + e0,
        b0 * e1 + d0 * f1 + f0,
    )
}

/// Applies a matrix to a point.
pub fn apply_matrix_pt(m: Matrix, v: Point) -> Point {
    let (a, b, c, d, e, f) = m;
    let (x, y) = v;
    (a * x + c * y + e, b * x + d * y + f)
}

/// Folds an arbitrary integer rotation into the range [0, 360).
///
/// Page dictionaries and viewer requests both express rotation in degrees
/// and neither is obliged to keep it in range.
#[inline]
pub fn normalize_rotation(degrees: i32) -> i32 {
    degrees.rem_euclid(360)
}

/// Returns true when a rotation is an odd multiple of 90 degrees, i.e.
/// glyph advance runs along the vertical screen axis.
///
/// Plain `% 180` is deliberate: a negative remainder is still nonzero for
/// every sideways input, so negative and >360 rotations need no folding.
#[inline]
pub fn is_sideways(degrees: i32) -> bool {
    degrees % 180 != 0
}
