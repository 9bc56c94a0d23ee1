//! Band threshold point filter.

use crate::image::{Image, Pixel};

/// Replaces every pixel whose channels all lie inside `[lower, upper]`
/// (inclusive) with the gray value `value`; pixels outside the band are left
/// untouched. An empty band (`lower > upper`) matches nothing.
///
/// Re-running with the same arguments changes nothing: matched pixels were
/// rewritten to a constant, which either still matches (and is rewritten to
/// itself) or no longer matches.
pub fn threshold(image: &mut Image, lower: u8, upper: u8, value: u8) {
    if lower > upper {
        return;
    }
    let fill = Pixel::splat(value);
    let inside = |v: u8| lower <= v && v <= upper;
    for px in image.pixels_mut() {
        if inside(px.r) && inside(px.g) && inside(px.b) {
            *px = fill;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_inside_band_only() {
        let mut img = Image::new(3, 1);
        img.set(0, 0, Pixel::splat(10));
        img.set(1, 0, Pixel::splat(100));
        img.set(2, 0, Pixel::splat(200));
        threshold(&mut img, 50, 150, 0);
        assert_eq!(img.get(0, 0), Pixel::splat(10));
        assert_eq!(img.get(1, 0), Pixel::BLACK);
        assert_eq!(img.get(2, 0), Pixel::splat(200));
    }

    #[test]
    fn band_bounds_are_inclusive() {
        let mut img = Image::new(2, 1);
        img.set(0, 0, Pixel::splat(50));
        img.set(1, 0, Pixel::splat(150));
        threshold(&mut img, 50, 150, 7);
        assert_eq!(img.get(0, 0), Pixel::splat(7));
        assert_eq!(img.get(1, 0), Pixel::splat(7));
    }

    #[test]
    fn mixed_pixels_must_match_on_every_channel() {
        let mut img = Image::new(1, 1);
        img.set(0, 0, Pixel { r: 100, g: 100, b: 200 });
        threshold(&mut img, 50, 150, 0);
        assert_eq!(img.get(0, 0), Pixel { r: 100, g: 100, b: 200 });
    }

    #[test]
    fn empty_band_changes_nothing() {
        let mut img = Image::new(2, 2);
        img.fill_solid(Pixel::splat(90));
        let before = img.clone();
        threshold(&mut img, 150, 50, 0);
        assert_eq!(img, before);
    }

    #[test]
    fn rerunning_is_idempotent() {
        let mut img = Image::new(4, 1);
        for (x, v) in [(0usize, 40u8), (1, 90), (2, 140), (3, 240)] {
            img.set(x, 0, Pixel::splat(v));
        }
        threshold(&mut img, 80, 200, 80);
        let once = img.clone();
        threshold(&mut img, 80, 200, 80);
        assert_eq!(img, once);
    }

    #[test]
    fn whole_range_band_floods_the_image() {
        let mut img = Image::new(2, 1);
        img.set(0, 0, Pixel { r: 1, g: 2, b: 3 });
        img.set(1, 0, Pixel::WHITE);
        threshold(&mut img, 0, 255, 33);
        assert!(img.pixels().iter().all(|&p| p == Pixel::splat(33)));
    }
}
