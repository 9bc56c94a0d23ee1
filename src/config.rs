//! JSON run configuration for the demo binary.
//!
//! One invocation is fully described by a small JSON file: which PPM to
//! read, the [`LaneParams`] to run with (anything omitted falls back to the
//! defaults) and where to write the results. Nothing here is persisted
//! between runs.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::detector::LaneParams;

#[derive(Debug, Deserialize)]
pub struct RunConfig {
    /// PPM image to run the detector on.
    pub input: PathBuf,
    #[serde(default)]
    pub params: LaneParams,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Overlay image with the detected lanes drawn in red.
    pub overlay: PathBuf,
    /// Accumulator rendering; requesting it turns the rendering on even
    /// when `params.renderAccumulator` was left false.
    #[serde(default)]
    pub accumulator: Option<PathBuf>,
    /// Serialized lane report (candidates, medoids, lanes, timings).
    #[serde(default)]
    pub report: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<RunConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
