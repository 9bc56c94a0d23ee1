//! Owned RGB image buffer and drawing primitives.

pub mod buffer;
pub mod pixel;

pub use self::buffer::Image;
pub use self::pixel::Pixel;
