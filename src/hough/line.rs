//! Line representations produced by the transform.

use serde::{Deserialize, Serialize};

/// A line in Hough normal form: `rho = x*cos(theta) + y*sin(theta)`.
///
/// Same quantization as the accumulator buckets the line came from: whole
/// degrees for `theta`, whole signed pixels from the image origin for `rho`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalLine {
    /// Direction of the line normal, in degrees.
    pub theta: u16,
    /// Signed perpendicular distance from the origin, in pixels.
    pub rho: i32,
}

/// A line resolved to a drawable segment with both endpoints inside the
/// image it was resolved against.
///
/// Ephemeral by design: it is derived from a [`NormalLine`] plus image
/// dimensions whenever something needs to draw, and not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLine {
    pub x1: u16,
    pub y1: u16,
    pub x2: u16,
    pub y2: u16,
}
