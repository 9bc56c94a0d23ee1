//! Report types assembled by the detector.

use serde::{Deserialize, Serialize};

use crate::cluster::Medoid;
use crate::hough::ResolvedLine;
use crate::image::Image;

/// Wall-clock cost of a single pipeline stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one detector run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// Everything one pipeline invocation produced.
///
/// The serializable part (counts, medoids, lanes, timings) feeds JSON
/// tooling; the image buffers are skipped during serialization and stay
/// available to callers that want to write them out as PPM.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneReport {
    /// Raw Hough candidates that went into clustering.
    pub candidates: usize,
    /// One representative line per cluster.
    pub medoids: Vec<Medoid>,
    /// Medoids resolved to drawable segments. A medoid whose line misses
    /// the image entirely has no segment here.
    pub lanes: Vec<ResolvedLine>,
    /// Copy of the input with the detected lanes drawn in red.
    #[serde(skip)]
    pub overlay: Image,
    /// Accumulator rendering, when the parameters requested one.
    #[serde(skip)]
    pub accumulator: Option<Image>,
    /// Per-stage and total wall-clock timings.
    pub timing: TimingBreakdown,
}
