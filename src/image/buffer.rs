//! Image buffer with row-major pixel storage.

use log::warn;

use super::pixel::Pixel;

/// Owned RGB image.
///
/// Dimensions are bounded to the unsigned 16-bit range by construction and
/// the backing buffer always holds exactly `width * height` pixels; both are
/// upheld by keeping the fields private. Indexing is row-major with the
/// origin at the top-left corner and y growing downwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u16,
    height: u16,
    data: Vec<Pixel>,
}

impl Image {
    /// Allocates a black image of `width * height` pixels.
    pub fn new(width: u16, height: u16) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![Pixel::BLACK; len],
        }
    }

    /// Wraps row-major pixel data that is already the right length.
    pub(crate) fn from_raw(width: u16, height: u16, data: Vec<Pixel>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Width as a usize index bound.
    #[inline]
    pub(crate) fn w(&self) -> usize {
        self.width as usize
    }

    /// Height as a usize index bound.
    #[inline]
    pub(crate) fn h(&self) -> usize {
        self.height as usize
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.w() && y < self.h());
        y * self.w() + x
    }

    /// Pixel at (x, y). Panics when out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Pixel {
        self.data[self.idx(x, y)]
    }

    /// Overwrites the pixel at (x, y). Panics when out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, px: Pixel) {
        let i = self.idx(x, y);
        self.data[i] = px;
    }

    /// Row `y` as a pixel slice.
    #[inline]
    pub fn row(&self, y: usize) -> &[Pixel] {
        let w = self.w();
        &self.data[y * w..(y + 1) * w]
    }

    /// Mutable view of row `y`.
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [Pixel] {
        let w = self.w();
        &mut self.data[y * w..(y + 1) * w]
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.data
    }

    /// Mutable view of all pixels in row-major order.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.data
    }

    /// Sets every pixel to `color`.
    pub fn fill_solid(&mut self, color: Pixel) {
        self.data.fill(color);
    }

    /// Draws the segment from (x1, y1) to (x2, y2) with Bresenham's
    /// algorithm.
    ///
    /// Both endpoints must lie inside the image; otherwise the call logs a
    /// warning and leaves the buffer untouched. Coincident endpoints paint a
    /// single pixel.
    pub fn draw_line(&mut self, color: Pixel, x1: u16, y1: u16, x2: u16, y2: u16) {
        if x1 >= self.width || x2 >= self.width || y1 >= self.height || y2 >= self.height {
            warn!(
                "segment ({x1},{y1})-({x2},{y2}) leaves the {}x{} image, skipping",
                self.width, self.height
            );
            return;
        }

        let (mut x, mut y) = (x1 as i32, y1 as i32);
        let (x2, y2) = (x2 as i32, y2 as i32);
        let dx = (x2 - x).abs();
        let dy = (y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = (if dx > dy { dx } else { -dy }) / 2;

        loop {
            let i = self.idx(x as usize, y as usize);
            self.data[i] = color;
            if x == x2 && y == y2 {
                break;
            }
            let e = err;
            if e > -dx {
                err -= dy;
                x += sx;
            }
            if e < dy {
                err += dx;
                y += sy;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_image_is_black_and_sized() {
        let img = Image::new(4, 3);
        assert_eq!(img.pixels().len(), 12);
        assert!(img.pixels().iter().all(|&p| p == Pixel::BLACK));
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut img = Image::new(4, 3);
        img.set(2, 1, Pixel::RED);
        assert_eq!(img.get(2, 1), Pixel::RED);
        assert_eq!(img.get(1, 2), Pixel::BLACK);
    }

    #[test]
    fn row_and_row_mut_view_the_same_pixels() {
        let mut img = Image::new(4, 3);
        img.row_mut(1).fill(Pixel::splat(50));
        img.row_mut(1)[2] = Pixel::RED;
        assert_eq!(img.row(1), [
            Pixel::splat(50),
            Pixel::splat(50),
            Pixel::RED,
            Pixel::splat(50)
        ]);
        assert_eq!(img.row(0), [Pixel::BLACK; 4]);
        assert_eq!(img.row(2), [Pixel::BLACK; 4]);
        assert_eq!(img.get(2, 1), Pixel::RED);
    }

    #[test]
    fn draw_line_paints_both_endpoints() {
        let mut img = Image::new(8, 8);
        img.draw_line(Pixel::WHITE, 1, 1, 6, 4);
        assert_eq!(img.get(1, 1), Pixel::WHITE);
        assert_eq!(img.get(6, 4), Pixel::WHITE);
    }

    #[test]
    fn draw_line_diagonal_is_exact() {
        let mut img = Image::new(5, 5);
        img.draw_line(Pixel::WHITE, 0, 0, 4, 4);
        for i in 0..5 {
            assert_eq!(img.get(i, i), Pixel::WHITE);
        }
        assert_eq!(
            img.pixels().iter().filter(|&&p| p == Pixel::WHITE).count(),
            5
        );
    }

    #[test]
    fn draw_line_degenerate_paints_one_pixel() {
        let mut img = Image::new(5, 5);
        img.draw_line(Pixel::WHITE, 3, 2, 3, 2);
        assert_eq!(img.get(3, 2), Pixel::WHITE);
        assert_eq!(
            img.pixels().iter().filter(|&&p| p == Pixel::WHITE).count(),
            1
        );
    }

    #[test]
    fn draw_line_out_of_bounds_is_a_noop() {
        let mut img = Image::new(5, 5);
        let before = img.clone();
        img.draw_line(Pixel::WHITE, 0, 0, 5, 4);
        img.draw_line(Pixel::WHITE, 0, 0, 4, 5);
        img.draw_line(Pixel::WHITE, 600, 600, 700, 700);
        assert_eq!(img, before);
    }

    #[test]
    fn draw_line_steep_segments_stay_connected() {
        let mut img = Image::new(8, 8);
        img.draw_line(Pixel::WHITE, 2, 0, 3, 7);
        for y in 0..8 {
            let painted = (0..8).any(|x| img.get(x, y) == Pixel::WHITE);
            assert!(painted, "row {y} left empty");
        }
    }
}
