//! Point and convolution filters feeding the detection pipeline.
//!
//! Point filters ([`grayscale`], [`threshold`]) rewrite pixels in place.
//! Convolution filters ([`gaussian`], [`sobel`], [`laplace`]) read a source
//! image and fill a freshly allocated destination of the same size; border
//! samples clamp to the nearest edge pixel (replicate), so no pass reads out
//! of bounds and the source is never mutated.
//!
//! The gradient filters read the red channel only. Upstream stages keep the
//! image gray, so that is the whole signal.

mod gaussian;
mod grayscale;
mod laplace;
mod sobel;
mod threshold;

pub use self::gaussian::gaussian;
pub use self::grayscale::grayscale;
pub use self::laplace::laplace;
pub use self::sobel::sobel;
pub use self::threshold::threshold;

use crate::image::{Image, Pixel};

/// Fixed 3x3 convolution kernel.
pub(crate) type Kernel3 = [[f32; 3]; 3];

/// Clamps a signed sample coordinate into `[0, len)`.
#[inline]
pub(crate) fn clamp_idx(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}

/// Convolves `kernel` with the red channel around (x, y), clamping sample
/// coordinates to the image borders.
#[inline]
pub(crate) fn convolve3_at(src: &Image, x: usize, y: usize, kernel: &Kernel3) -> f32 {
    let xs = [
        clamp_idx(x as isize - 1, src.w()),
        x,
        clamp_idx(x as isize + 1, src.w()),
    ];
    let ys = [
        clamp_idx(y as isize - 1, src.h()),
        y,
        clamp_idx(y as isize + 1, src.h()),
    ];
    let mut sum = 0.0f32;
    for (ky, &sy) in ys.iter().enumerate() {
        let row = src.row(sy);
        for (kx, &sx) in xs.iter().enumerate() {
            sum += row[sx].r as f32 * kernel[ky][kx];
        }
    }
    sum
}

/// Fills `out` row by row with `f(y, row)`, in parallel when the `parallel`
/// feature is enabled.
pub(crate) fn fill_rows<F>(out: &mut Image, f: F)
where
    F: Fn(usize, &mut [Pixel]) + Send + Sync,
{
    let w = out.w();
    if w == 0 {
        return;
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        out.pixels_mut()
            .par_chunks_mut(w)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (y, row) in out.pixels_mut().chunks_mut(w).enumerate() {
            f(y, row);
        }
    }
}
