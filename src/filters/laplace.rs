//! Laplace operator filter.

use crate::image::{Image, Pixel};

use super::{convolve3_at, fill_rows, Kernel3};

/// Four-neighbor discrete Laplacian.
const LAPLACE: Kernel3 = [
    [0.0, -1.0, 0.0],
    [-1.0, 4.0, -1.0],
    [0.0, -1.0, 0.0],
];

/// Computes the Laplace edge response of `src` into a new image.
///
/// The raw response is clamped to `0..=255`: negative lobes are dropped
/// rather than mirrored, so only one side of each edge lights up. Output is
/// gray and the same size as the input.
pub fn laplace(src: &Image) -> Image {
    let mut out = Image::new(src.width(), src.height());
    fill_rows(&mut out, |y, row| laplace_row(src, y, row));
    out
}

fn laplace_row(src: &Image, y: usize, dst: &mut [Pixel]) {
    for (x, out) in dst.iter_mut().enumerate() {
        let response = convolve3_at(src, x, y, &LAPLACE).clamp(0.0, 255.0);
        *out = Pixel::splat(response as u8);
    }
}
