//! Sobel gradient magnitude filter.

use crate::image::{Image, Pixel};

use super::{convolve3_at, fill_rows, Kernel3};

const SOBEL_X: Kernel3 = [
    [-1.0, 0.0, 1.0],
    [-2.0, 0.0, 2.0],
    [-1.0, 0.0, 1.0],
];

const SOBEL_Y: Kernel3 = [
    [-1.0, -2.0, -1.0],
    [0.0, 0.0, 0.0],
    [1.0, 2.0, 1.0],
];

/// Computes the Sobel gradient magnitude of `src` into a new image.
///
/// The magnitude `sqrt(gx^2 + gy^2)` is clamped to `0..=255` and written to
/// all three channels, so the result is gray regardless of the input.
pub fn sobel(src: &Image) -> Image {
    let mut out = Image::new(src.width(), src.height());
    fill_rows(&mut out, |y, row| sobel_row(src, y, row));
    out
}

fn sobel_row(src: &Image, y: usize, dst: &mut [Pixel]) {
    for (x, out) in dst.iter_mut().enumerate() {
        let gx = convolve3_at(src, x, y, &SOBEL_X);
        let gy = convolve3_at(src, x, y, &SOBEL_Y);
        let mag = (gx * gx + gy * gy).sqrt().clamp(0.0, 255.0);
        *out = Pixel::splat(mag as u8);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_image() -> Image {
        // Left half dark, right half bright, step between x=3 and x=4.
        let mut img = Image::new(8, 6);
        for y in 0..6 {
            for x in 4..8 {
                img.set(x, y, Pixel::splat(200));
            }
        }
        img
    }

    #[test]
    fn flat_regions_respond_with_zero() {
        let mut img = Image::new(6, 6);
        img.fill_solid(Pixel::splat(123));
        let out = sobel(&img);
        assert!(out.pixels().iter().all(|&p| p == Pixel::BLACK));
    }

    #[test]
    fn vertical_step_peaks_at_the_boundary() {
        let out = sobel(&step_image());
        // Columns next to the step saturate, interior columns stay silent.
        assert_eq!(out.get(3, 2).r, 255);
        assert_eq!(out.get(4, 2).r, 255);
        assert_eq!(out.get(1, 2).r, 0);
        assert_eq!(out.get(6, 2).r, 0);
    }

    #[test]
    fn output_is_gray_and_same_size() {
        let out = sobel(&step_image());
        assert_eq!((out.width(), out.height()), (8, 6));
        for &px in out.pixels() {
            assert_eq!(px.r, px.g);
            assert_eq!(px.g, px.b);
        }
    }

    #[test]
    fn empty_image_yields_empty_output() {
        let out = sobel(&Image::new(0, 0));
        assert_eq!((out.width(), out.height()), (0, 0));
    }
}
