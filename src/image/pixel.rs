//! RGB pixel type shared by every stage.

use serde::{Deserialize, Serialize};

/// One RGB sample with 8-bit channels.
///
/// Grayscale stages keep `r == g == b`, so the red channel doubles as the
/// single-channel view the convolution filters and the Hough engine read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::splat(0);
    pub const WHITE: Pixel = Pixel::splat(255);
    /// Overlay color for detected lane lines.
    pub const RED: Pixel = Pixel { r: 255, g: 0, b: 0 };

    /// Gray pixel with all channels set to `v`.
    #[inline]
    pub const fn splat(v: u8) -> Self {
        Pixel { r: v, g: v, b: v }
    }

    /// BT.601-7 luma of the pixel, truncated to 8 bits.
    #[inline]
    pub fn luma(&self) -> u8 {
        (0.2989 * self.r as f64 + 0.5870 * self.g as f64 + 0.1140 * self.b as f64) as u8
    }
}
