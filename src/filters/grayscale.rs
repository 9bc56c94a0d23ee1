//! RGB to grayscale point filter.

use crate::image::{Image, Pixel};

/// Converts `image` to grayscale in place.
///
/// Each pixel becomes its BT.601-7 luma `0.2989*R + 0.5870*G + 0.1140*B`,
/// truncated and written to all three channels. The four-digit weights sum
/// to 0.9999, so pure white lands on 254, not 255.
pub fn grayscale(image: &mut Image) {
    for px in image.pixels_mut() {
        *px = Pixel::splat(px.luma());
    }
}
