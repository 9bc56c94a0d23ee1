//! Lane detector orchestrating the fixed image pipeline.
//!
//! Stages run strictly in sequence, each consuming its predecessor's output:
//!
//! 1. grayscale reduction (in place on a working copy)
//! 2. Gaussian blur
//! 3. Sobel or Laplace edge magnitude
//! 4. band threshold, erasing weak responses
//! 5. Hough accumulation over the configured angle range
//! 6. candidate extraction at the vote threshold
//! 7. k-medoids clustering of the candidates
//! 8. resolution of the medoids and overlay rendering
//!
//! A failing stage aborts the rest of the run for that image; nothing is
//! retried. Each run allocates fresh buffers, so a detector can be reused
//! across images (and is cheap enough to rebuild per image too).
//!
//! Modules
//! - [`params`] – the per-invocation configuration surface.
//! - [`report`] – result and timing types.

pub mod params;
pub mod report;

pub use params::{EdgeFilter, LaneParams};
pub use report::{LaneReport, StageTiming, TimingBreakdown};

use log::{debug, info};
use std::time::Instant;

use crate::cluster::cluster_lines;
use crate::error::Error;
use crate::filters::{gaussian, grayscale, laplace, sobel, threshold};
use crate::hough::{AngleRange, HoughSpace};
use crate::image::{Image, Pixel};

fn elapsed_ms(since: Instant) -> f64 {
    since.elapsed().as_secs_f64() * 1000.0
}

/// Lane detector running the full pipeline over single still images.
///
/// ```no_run
/// use lane_detector::{LaneDetector, LaneParams};
/// use lane_detector::image::Image;
///
/// # fn example(road: Image) -> Result<(), lane_detector::Error> {
/// let detector = LaneDetector::new(LaneParams::default());
/// let report = detector.process(&road)?;
/// println!("{} lanes in {:.3} ms", report.lanes.len(), report.timing.total_ms);
/// # Ok(())
/// # }
/// ```
pub struct LaneDetector {
    params: LaneParams,
}

impl LaneDetector {
    /// Creates a detector with the supplied parameters.
    pub fn new(params: LaneParams) -> Self {
        Self { params }
    }

    /// The parameters this detector runs with.
    pub fn params(&self) -> &LaneParams {
        &self.params
    }

    /// Runs the pipeline over `input` and assembles a [`LaneReport`].
    ///
    /// The input is never mutated; every stage works on fresh buffers.
    /// Parameters are validated up front, so no work happens on bad input.
    /// An image without edge evidence produces an empty but successful
    /// report.
    pub fn process(&self, input: &Image) -> Result<LaneReport, Error> {
        self.params.validate()?;
        let p = &self.params;
        let range = AngleRange::new(p.angle_min, p.angle_max)?;

        let total = Instant::now();
        let mut timing = TimingBreakdown::default();
        debug!(
            "processing {}x{} image, angles [{}, {}) at {} votes",
            input.width(),
            input.height(),
            p.angle_min,
            p.angle_max,
            p.vote_threshold
        );

        let stage = Instant::now();
        let mut work = input.clone();
        grayscale(&mut work);
        timing.push("grayscale", elapsed_ms(stage));

        let stage = Instant::now();
        let work = gaussian(&work, p.blur_size, p.blur_variance)?;
        timing.push("blur", elapsed_ms(stage));

        let stage = Instant::now();
        let mut work = match p.edge_filter {
            EdgeFilter::Sobel => sobel(&work),
            EdgeFilter::Laplace => laplace(&work),
        };
        timing.push("edges", elapsed_ms(stage));

        let stage = Instant::now();
        threshold(
            &mut work,
            p.threshold_lower,
            p.threshold_upper,
            p.threshold_value,
        );
        timing.push("threshold", elapsed_ms(stage));

        let stage = Instant::now();
        let mut space = HoughSpace::new(input.width(), input.height(), range);
        space.accumulate(&work);
        timing.push("hough_accumulate", elapsed_ms(stage));

        let stage = Instant::now();
        let candidates = space.extract(p.vote_threshold)?;
        timing.push("hough_extract", elapsed_ms(stage));

        let stage = Instant::now();
        let medoids = cluster_lines(&candidates, p.clusters, p.iterations)?;
        timing.push("cluster", elapsed_ms(stage));

        let stage = Instant::now();
        let mut overlay = input.clone();
        let mut lanes = Vec::with_capacity(medoids.len());
        for medoid in &medoids {
            match space.resolve(medoid.line) {
                Some(lane) => {
                    overlay.draw_line(Pixel::RED, lane.x1, lane.y1, lane.x2, lane.y2);
                    lanes.push(lane);
                }
                None => debug!("medoid {:?} does not cross the image", medoid.line),
            }
        }
        let accumulator = p.render_accumulator.then(|| space.render());
        timing.push("render", elapsed_ms(stage));

        timing.total_ms = elapsed_ms(total);
        info!(
            "{} lanes from {} candidates in {:.3} ms",
            lanes.len(),
            candidates.len(),
            timing.total_ms
        );

        Ok(LaneReport {
            candidates: candidates.len(),
            medoids,
            lanes,
            overlay,
            accumulator,
            timing,
        })
    }
}
