//! Parameter types configuring the detector stages.
//!
//! Everything the pipeline recognizes is a field here; there is no persisted
//! configuration state. Defaults follow the values the pipeline was tuned
//! with on 640x480 road scenes: a 5x5 blur, Sobel edges binarized at 210,
//! the full `[0, 180)` orientation band and two lane clusters.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Gradient operator for the edge stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeFilter {
    /// 3x3 Sobel kernel pair combined by magnitude.
    #[default]
    Sobel,
    /// Four-neighbor Laplacian.
    Laplace,
}

/// Knobs for one pipeline invocation.
///
/// The threshold stage replaces every pixel inside
/// `[threshold_lower, threshold_upper]` with `threshold_value`; the default
/// band `[0, 209] -> 0` erases weak edge responses and keeps everything from
/// 210 up as voting evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LaneParams {
    /// Gaussian kernel edge length; odd, at least 1.
    pub blur_size: u8,
    /// Gaussian variance; positive and finite.
    pub blur_variance: f64,
    /// Gradient operator producing the edge-magnitude image.
    pub edge_filter: EdgeFilter,
    /// Inclusive lower bound of the threshold band.
    pub threshold_lower: u8,
    /// Inclusive upper bound of the threshold band.
    pub threshold_upper: u8,
    /// Replacement value for pixels inside the band.
    pub threshold_value: u8,
    /// Lower bound of the Hough angle range, in degrees.
    pub angle_min: u16,
    /// Upper bound (exclusive) of the Hough angle range, in degrees.
    pub angle_max: u16,
    /// Minimum votes for an accumulator cell to become a candidate.
    pub vote_threshold: u32,
    /// Number of lane lines to keep after clustering.
    pub clusters: u16,
    /// Fixed number of clustering rounds.
    pub iterations: u16,
    /// Also render the accumulator as a diagnostic image into the report.
    pub render_accumulator: bool,
}

impl Default for LaneParams {
    fn default() -> Self {
        Self {
            blur_size: 5,
            blur_variance: 2.0,
            edge_filter: EdgeFilter::default(),
            threshold_lower: 0,
            threshold_upper: 209,
            threshold_value: 0,
            angle_min: 0,
            angle_max: 180,
            vote_threshold: 150,
            clusters: 2,
            iterations: 16,
            render_accumulator: false,
        }
    }
}

impl LaneParams {
    /// Rejects parameter combinations the stages cannot run with.
    ///
    /// An empty threshold band (`threshold_lower > threshold_upper`) is not
    /// rejected: it is defined to match nothing and leaves the edge image
    /// untouched.
    pub fn validate(&self) -> Result<(), Error> {
        if self.blur_size == 0 || self.blur_size % 2 == 0 {
            return Err(Error::KernelSize(self.blur_size));
        }
        if !self.blur_variance.is_finite() || self.blur_variance <= 0.0 {
            return Err(Error::Variance(self.blur_variance));
        }
        if self.angle_min >= self.angle_max {
            return Err(Error::AngleRange {
                min: self.angle_min,
                max: self.angle_max,
            });
        }
        if self.vote_threshold == 0 {
            return Err(Error::VoteThreshold);
        }
        if self.clusters == 0 || self.iterations == 0 {
            return Err(Error::ClusterParams);
        }
        Ok(())
    }
}
