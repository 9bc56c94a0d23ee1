#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod codec;
pub mod config;
pub mod detector;
pub mod error;
pub mod image;

// Stage-level modules – still public, so callers can run a partial pipeline
// or feed the Hough engine edge images produced elsewhere.
pub mod angle;
pub mod cluster;
pub mod filters;
pub mod hough;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{EdgeFilter, LaneDetector, LaneParams, LaneReport};

// Error taxonomy.
pub use crate::error::{DecodeError, Error};

// Line representations used across the crate.
pub use crate::hough::{NormalLine, ResolvedLine};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use lane_detector::prelude::*;
///
/// let mut image = Image::new(320, 240);
/// image.fill_solid(Pixel::splat(32));
/// image.draw_line(Pixel::splat(230), 100, 0, 100, 239);
///
/// let detector = LaneDetector::new(LaneParams {
///     vote_threshold: 60,
///     clusters: 1,
///     ..Default::default()
/// });
/// let report = detector.process(&image).unwrap();
/// println!("lanes={} total_ms={:.3}", report.lanes.len(), report.timing.total_ms);
/// ```
pub mod prelude {
    pub use crate::image::{Image, Pixel};
    pub use crate::{LaneDetector, LaneParams, LaneReport, NormalLine, ResolvedLine};
}
