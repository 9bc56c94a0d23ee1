//! Serialization boundary for raster images.

pub mod ppm;

pub use self::ppm::{decode, encode};
