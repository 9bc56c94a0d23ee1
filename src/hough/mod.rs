//! Classical Hough transform over edge images.
//!
//! Coordinate conventions
//! - Image origin is the top-left corner, x to the right, y downwards.
//! - A line is the set of points satisfying `rho = x*cos(theta) +
//!   y*sin(theta)`; `theta` is the direction of the line normal in degrees
//!   and `rho` the signed perpendicular distance from the origin in pixels.
//! - The accumulator quantizes to 1 degree by 1 pixel buckets.

pub mod line;
pub mod space;

pub use self::line::{NormalLine, ResolvedLine};
pub use self::space::{AngleRange, HoughSpace};
