//! Gaussian blur with a caller-sized kernel.

use crate::error::Error;
use crate::image::{Image, Pixel};

use super::{clamp_idx, fill_rows};

/// Builds the normalized `size * size` kernel for `variance`.
///
/// Each weight is `exp(-(dx^2 + dy^2) / (2 * variance^2))`; the kernel is
/// scaled to sum to 1 so flat regions keep their level.
fn build_kernel(size: usize, variance: f64) -> Vec<f64> {
    let radius = (size as isize - 1) / 2;
    let mut kernel = Vec::with_capacity(size * size);
    let mut total = 0.0;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let d2 = (dx * dx + dy * dy) as f64;
            let w = (-d2 / (2.0 * variance * variance)).exp();
            kernel.push(w);
            total += w;
        }
    }
    for w in &mut kernel {
        *w /= total;
    }
    kernel
}

/// Blurs `src` with a `size * size` Gaussian kernel into a new image.
///
/// `size` must be odd and at least 1 (a size of 1 is the identity kernel);
/// `variance` must be positive and finite. All three channels are filtered;
/// border samples clamp to the image edge.
pub fn gaussian(src: &Image, size: u8, variance: f64) -> Result<Image, Error> {
    if size == 0 || size % 2 == 0 {
        return Err(Error::KernelSize(size));
    }
    if !variance.is_finite() || variance <= 0.0 {
        return Err(Error::Variance(variance));
    }

    let kernel = build_kernel(size as usize, variance);
    let mut out = Image::new(src.width(), src.height());
    fill_rows(&mut out, |y, row| {
        blur_row(src, &kernel, size as usize, y, row);
    });
    Ok(out)
}

/// Convolves one destination row. Weights sum to 1, so each channel stays a
/// convex combination of 8-bit samples and the truncating cast cannot wrap.
fn blur_row(src: &Image, kernel: &[f64], size: usize, y: usize, dst: &mut [Pixel]) {
    let radius = (size as isize - 1) / 2;
    for (x, out) in dst.iter_mut().enumerate() {
        let (mut r, mut g, mut b) = (0.0f64, 0.0f64, 0.0f64);
        let mut k = 0;
        for dy in -radius..=radius {
            let row = src.row(clamp_idx(y as isize + dy, src.h()));
            for dx in -radius..=radius {
                let px = row[clamp_idx(x as isize + dx, src.w())];
                let w = kernel[k];
                k += 1;
                r += px.r as f64 * w;
                g += px.g as f64 * w;
                b += px.b as f64 * w;
            }
        }
        *out = Pixel {
            r: r as u8,
            g: g as u8,
            b: b as u8,
        };
    }
}
