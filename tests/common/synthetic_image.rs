use lane_detector::image::{Image, Pixel};

/// Generates a dark road scene with bright lane markings.
///
/// Each marking is a 3 px wide stripe from `(bottom_x, height-1)` up to
/// `(top_x, 0)`, painted over uniform asphalt.
pub fn road_scene(width: u16, height: u16, markings: &[(u16, u16)]) -> Image {
    assert!(width > 4 && height > 0, "image dimensions too small");

    let mut img = Image::new(width, height);
    img.fill_solid(Pixel::splat(40));
    for &(bottom_x, top_x) in markings {
        for dx in 0..3 {
            img.draw_line(
                Pixel::splat(235),
                (bottom_x + dx).min(width - 1),
                height - 1,
                (top_x + dx).min(width - 1),
                0,
            );
        }
    }
    img
}
