//! PPM (portable pixmap) decode and encode.
//!
//! Binary `P6` and ASCII `P3` streams decode to an [`Image`]; encoding
//! always emits binary `P6` with a max value of 255. Samples pass through
//! verbatim with no rescaling by the declared max value (they already fit
//! an 8-bit channel, since max values above 255 are rejected), so a decode
//! followed by an encode preserves the pixel data exactly and normalizes
//! only the header. Malformed input fails with a [`DecodeError`] before any
//! image is built; a partially populated buffer never escapes.

use crate::error::DecodeError;
use crate::image::{Image, Pixel};

/// Decodes a P6 or P3 stream into an image.
pub fn decode(bytes: &[u8]) -> Result<Image, DecodeError> {
    let mut tok = Tokenizer::new(bytes);
    let binary = match tok.token() {
        Some(b"P6") => true,
        Some(b"P3") => false,
        _ => return Err(DecodeError::Magic),
    };

    let width = tok.number("width")?;
    let height = tok.number("height")?;
    if width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err(DecodeError::Dimensions { width, height });
    }
    let max = tok.number("max value")?;
    if max == 0 || max > 255 {
        return Err(DecodeError::MaxValue(max));
    }

    let samples = width as usize * height as usize * 3;
    let data = if binary {
        read_raster(&mut tok, samples)?
    } else {
        read_ascii(&mut tok, samples, max)?
    };

    let pixels = data
        .chunks_exact(3)
        .map(|c| Pixel {
            r: c[0],
            g: c[1],
            b: c[2],
        })
        .collect();
    Ok(Image::from_raw(width as u16, height as u16, pixels))
}

/// Encodes `image` as binary P6 with max value 255.
pub fn encode(image: &Image) -> Vec<u8> {
    let header = format!("P6\n{} {}\n255\n", image.width(), image.height());
    let mut out = Vec::with_capacity(header.len() + image.pixels().len() * 3);
    out.extend_from_slice(header.as_bytes());
    for px in image.pixels() {
        out.extend_from_slice(&[px.r, px.g, px.b]);
    }
    out
}

fn read_raster(tok: &mut Tokenizer, samples: usize) -> Result<Vec<u8>, DecodeError> {
    let raster = tok.raster();
    if raster.len() < samples {
        return Err(DecodeError::Truncated {
            expected: samples,
            found: raster.len(),
        });
    }
    Ok(raster[..samples].to_vec())
}

fn read_ascii(tok: &mut Tokenizer, samples: usize, max: u32) -> Result<Vec<u8>, DecodeError> {
    let mut data = Vec::with_capacity(samples);
    for found in 0..samples {
        let token = tok.token().ok_or(DecodeError::Truncated {
            expected: samples,
            found,
        })?;
        let value = parse_decimal(token).ok_or(DecodeError::Sample(found))?;
        if value > max {
            return Err(DecodeError::SampleRange { value, max });
        }
        data.push(value as u8);
    }
    Ok(data)
}

/// Parses an all-digit token. Values beyond `u32` saturate, which still
/// lands them in the right out-of-range error downstream.
fn parse_decimal(token: &[u8]) -> Option<u32> {
    if token.is_empty() {
        return None;
    }
    let mut value: u32 = 0;
    for &b in token {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value
            .saturating_mul(10)
            .saturating_add((b - b'0') as u32);
    }
    Some(value)
}

/// Splits a PPM header into whitespace-delimited tokens, skipping `#`
/// comments (which run to the end of their line).
struct Tokenizer<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn skip_separators(&mut self) {
        loop {
            while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos < self.bytes.len() && self.bytes[self.pos] == b'#' {
                while self.pos < self.bytes.len() && self.bytes[self.pos] != b'\n' {
                    self.pos += 1;
                }
            } else {
                return;
            }
        }
    }

    /// Next token, or `None` at the end of the input.
    fn token(&mut self) -> Option<&'a [u8]> {
        self.skip_separators();
        let start = self.pos;
        while self.pos < self.bytes.len()
            && !self.bytes[self.pos].is_ascii_whitespace()
            && self.bytes[self.pos] != b'#'
        {
            self.pos += 1;
        }
        (self.pos > start).then(|| &self.bytes[start..self.pos])
    }

    /// Next token parsed as a decimal header field.
    fn number(&mut self, field: &'static str) -> Result<u32, DecodeError> {
        let token = self.token().ok_or(DecodeError::Header(field))?;
        parse_decimal(token).ok_or(DecodeError::Header(field))
    }

    /// Remaining bytes after the single whitespace byte that separates the
    /// header from a binary raster.
    fn raster(&mut self) -> &'a [u8] {
        if self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        &self.bytes[self.pos..]
    }
}
