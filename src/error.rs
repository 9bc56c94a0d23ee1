//! Error types for pipeline configuration and image decoding.

use thiserror::Error;

/// Rejected caller input, reported synchronously by the stage that checks it.
///
/// Every variant is a parameter problem: stages themselves are total over
/// valid inputs (an image with no edge evidence yields an empty result, not
/// an error).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// Gaussian kernel sizes must be odd so the kernel has a center pixel.
    #[error("gaussian kernel size must be odd and at least 1, got {0}")]
    KernelSize(u8),
    /// Gaussian variance must be a positive finite number.
    #[error("gaussian variance must be positive and finite, got {0}")]
    Variance(f64),
    /// Angle ranges are half-open `[min, max)`; `min >= max` holds no bucket.
    #[error("empty angle range: min {min} is not below max {max}")]
    AngleRange { min: u16, max: u16 },
    /// A vote threshold of zero would extract every accumulator cell.
    #[error("vote threshold must be at least 1")]
    VoteThreshold,
    /// Clustering needs at least one cluster and one iteration.
    #[error("cluster count and iteration count must be at least 1")]
    ClusterParams,
}

/// Malformed PPM input, reported before any image buffer is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The stream does not start with a supported magic number.
    #[error("not a PPM stream: expected P6 or P3 magic")]
    Magic,
    /// A header field is missing or not a decimal number.
    #[error("malformed or missing {0} in header")]
    Header(&'static str),
    /// Width or height exceeds the 16-bit dimension bound.
    #[error("dimensions {width}x{height} exceed the 16-bit pixmap bound")]
    Dimensions { width: u32, height: u32 },
    /// Only 8-bit channels are supported.
    #[error("unsupported max value {0}: channels wider than 8 bits")]
    MaxValue(u32),
    /// An ASCII sample is not a decimal number.
    #[error("malformed ASCII sample at index {0}")]
    Sample(usize),
    /// An ASCII sample exceeds the declared max value.
    #[error("pixel sample {value} exceeds max value {max}")]
    SampleRange { value: u32, max: u32 },
    /// The raster holds fewer samples than the header promises.
    #[error("pixel data truncated: expected {expected} samples, found {found}")]
    Truncated { expected: usize, found: usize },
}
