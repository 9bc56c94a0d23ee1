//! Parameter-space accumulator, candidate extraction and line resolution.

use log::{debug, info};

use crate::error::Error;
use crate::image::{Image, Pixel};

use super::line::{NormalLine, ResolvedLine};

/// Below this magnitude a bucket's sin or cos is treated as exactly zero and
/// the resolver takes the axis-aligned branch instead of dividing.
const TRIG_EPS: f64 = 1e-9;

/// Slack for border intersections that land marginally outside the image
/// through floating-point error.
const BORDER_EPS: f64 = 1e-6;

/// Half-open range of accumulator angles `[min, max)` in whole degrees.
///
/// The range bounds detection to an expected orientation band; a forward
/// facing lane camera would typically exclude near-horizontal normals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AngleRange {
    min: u16,
    max: u16,
}

impl AngleRange {
    /// Validates and builds a range. `min >= max` holds no bucket and is
    /// rejected.
    pub fn new(min: u16, max: u16) -> Result<Self, Error> {
        if min >= max {
            return Err(Error::AngleRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn min(&self) -> u16 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> u16 {
        self.max
    }

    /// Number of one-degree buckets in the range.
    #[inline]
    pub fn buckets(&self) -> usize {
        (self.max - self.min) as usize
    }

    /// Angle of bucket `i` in degrees.
    #[inline]
    fn angle(&self, i: usize) -> u16 {
        self.min + i as u16
    }
}

/// Vote accumulator over (angle, distance) buckets.
///
/// Buckets are one degree by one pixel. The distance axis spans
/// `[-rho_max, rho_max]` where `rho_max` is the image diagonal rounded up,
/// so every `rho = x*cos(theta) + y*sin(theta)` an in-bounds pixel can
/// produce has a bucket. The space remembers the source image dimensions,
/// which lets lines detected here (or cluster medoids derived from them) be
/// resolved back to drawable segments later.
pub struct HoughSpace {
    range: AngleRange,
    width: u16,
    height: u16,
    rho_max: i32,
    rho_bins: usize,
    /// Distance-major cells: `acc[rho_idx * buckets + angle_idx]`.
    acc: Vec<u32>,
    sin: Vec<f64>,
    cos: Vec<f64>,
}

impl HoughSpace {
    /// Allocates a zeroed accumulator for a `width * height` image with
    /// trig tables precomputed per angle bucket.
    pub fn new(width: u16, height: u16, range: AngleRange) -> Self {
        let w = width as f64;
        let h = height as f64;
        let rho_max = (w * w + h * h).sqrt().ceil() as i32;
        let rho_bins = 2 * rho_max as usize + 1;

        let buckets = range.buckets();
        let mut sin = Vec::with_capacity(buckets);
        let mut cos = Vec::with_capacity(buckets);
        for i in 0..buckets {
            let rad = (range.angle(i) as f64).to_radians();
            sin.push(rad.sin());
            cos.push(rad.cos());
        }

        Self {
            range,
            width,
            height,
            rho_max,
            rho_bins,
            acc: vec![0; rho_bins * buckets],
            sin,
            cos,
        }
    }

    #[inline]
    pub fn range(&self) -> AngleRange {
        self.range
    }

    /// Width of the image the space was built for.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height of the image the space was built for.
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Maps a signed distance to its bucket, clamping the rare half-pixel of
    /// rounding spill at the extremes into the outermost bucket.
    #[inline]
    fn rho_index(&self, rho: f64) -> usize {
        let idx = rho.round() as i64 + self.rho_max as i64;
        idx.clamp(0, self.rho_bins as i64 - 1) as usize
    }

    /// Vote count for a line's exact bucket, or `None` when the line falls
    /// outside the accumulator.
    pub fn votes_for(&self, line: NormalLine) -> Option<u32> {
        if line.theta < self.range.min || line.theta >= self.range.max {
            return None;
        }
        if line.rho < -self.rho_max || line.rho > self.rho_max {
            return None;
        }
        let angle_idx = (line.theta - self.range.min) as usize;
        let rho_idx = (line.rho + self.rho_max) as usize;
        Some(self.acc[rho_idx * self.range.buckets() + angle_idx])
    }

    /// Casts one vote per angle bucket for every edge pixel of `edges` (a
    /// pixel is edge evidence when its red channel is non-zero).
    ///
    /// Cell values only ever grow; calling this repeatedly stacks votes.
    /// `edges` must have the dimensions the space was built for.
    ///
    /// A cell cannot overflow: each edge pixel contributes at most one vote
    /// per cell and a u16-bounded image holds fewer than `u32::MAX` pixels.
    pub fn accumulate(&mut self, edges: &Image) {
        debug_assert_eq!(
            (edges.width(), edges.height()),
            (self.width, self.height),
            "edge image does not match the dimensions the space was built for"
        );

        let mut acc = std::mem::take(&mut self.acc);

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            let cells = acc.len();
            let partial = (0..edges.h())
                .into_par_iter()
                .fold(
                    || vec![0u32; cells],
                    |mut part, y| {
                        self.vote_row(edges, y, &mut part);
                        part
                    },
                )
                .reduce(
                    || vec![0u32; cells],
                    |mut a, b| {
                        for (dst, src) in a.iter_mut().zip(b) {
                            *dst += src;
                        }
                        a
                    },
                );
            for (dst, src) in acc.iter_mut().zip(partial) {
                *dst += src;
            }
        }

        #[cfg(not(feature = "parallel"))]
        for y in 0..edges.h() {
            self.vote_row(edges, y, &mut acc);
        }

        self.acc = acc;
    }

    fn vote_row(&self, edges: &Image, y: usize, acc: &mut [u32]) {
        let buckets = self.range.buckets();
        for (x, px) in edges.row(y).iter().enumerate() {
            if px.r == 0 {
                continue;
            }
            for i in 0..buckets {
                let rho = x as f64 * self.cos[i] + y as f64 * self.sin[i];
                acc[self.rho_index(rho) * buckets + i] += 1;
            }
        }
    }

    /// Returns every cell with at least `thres` votes as a normal-form line.
    ///
    /// The threshold is inclusive and there is no local-maxima suppression;
    /// adjacent qualifying cells all come out and deduplication is the
    /// clustering stage's job. Scan order is distance-major, angle-minor, so
    /// equal-vote candidates appear in deterministic (rho, theta) order. An
    /// accumulator that never saw an edge pixel yields an empty set.
    pub fn extract(&self, thres: u32) -> Result<Vec<NormalLine>, Error> {
        if thres == 0 {
            return Err(Error::VoteThreshold);
        }
        let buckets = self.range.buckets();
        let mut lines = Vec::new();
        for (rho_idx, row) in self.acc.chunks_exact(buckets).enumerate() {
            for (angle_idx, &votes) in row.iter().enumerate() {
                if votes >= thres {
                    let line = NormalLine {
                        theta: self.range.angle(angle_idx),
                        rho: rho_idx as i32 - self.rho_max,
                    };
                    debug!(
                        "candidate theta={} rho={} votes={}",
                        line.theta, line.rho, votes
                    );
                    lines.push(line);
                }
            }
        }
        info!(
            "extracted {} candidates with {} or more votes",
            lines.len(),
            thres
        );
        Ok(lines)
    }

    /// Resolves a normal-form line to a drawable segment by intersecting it
    /// with the four image borders and keeping the two distinct
    /// intersections that fall inside the image.
    ///
    /// Near-vertical and near-horizontal buckets are handled by explicit
    /// branches so no division by a vanishing sin or cos happens. Returns
    /// `None` when the line misses the image (or grazes a single corner).
    pub fn resolve(&self, line: NormalLine) -> Option<ResolvedLine> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let w = (self.width - 1) as f64;
        let h = (self.height - 1) as f64;
        let rad = (line.theta as f64).to_radians();
        let (s, c) = rad.sin_cos();
        let rho = line.rho as f64;

        let inside = |v: f64, hi: f64| v >= -BORDER_EPS && v <= hi + BORDER_EPS;
        let snap = |v: f64, hi: f64| v.round().clamp(0.0, hi) as u16;

        if s.abs() < TRIG_EPS {
            // Vertical line x = rho / cos(theta).
            let x = rho / c;
            if !inside(x, w) {
                return None;
            }
            let x = snap(x, w);
            return Some(ResolvedLine {
                x1: x,
                y1: 0,
                x2: x,
                y2: self.height - 1,
            });
        }
        if c.abs() < TRIG_EPS {
            // Horizontal line y = rho / sin(theta).
            let y = rho / s;
            if !inside(y, h) {
                return None;
            }
            let y = snap(y, h);
            return Some(ResolvedLine {
                x1: 0,
                y1: y,
                x2: self.width - 1,
                y2: y,
            });
        }

        // Left, right, top, bottom border intersections, checked in that
        // fixed order; the first two distinct in-bounds hits win. A corner
        // hit shows up once because of the half-pixel dedupe.
        let candidates = [
            (0.0, rho / s),
            (w, (rho - w * c) / s),
            (rho / c, 0.0),
            ((rho - h * s) / c, h),
        ];
        let mut points: [(f64, f64); 2] = [(0.0, 0.0); 2];
        let mut count = 0;
        for (x, y) in candidates {
            if !inside(x, w) || !inside(y, h) {
                continue;
            }
            let duplicate = points[..count]
                .iter()
                .any(|&(px, py)| (px - x).abs() < 0.5 && (py - y).abs() < 0.5);
            if duplicate {
                continue;
            }
            points[count] = (x, y);
            count += 1;
            if count == 2 {
                break;
            }
        }
        if count < 2 {
            return None;
        }
        Some(ResolvedLine {
            x1: snap(points[0].0, w),
            y1: snap(points[0].1, h),
            x2: snap(points[1].0, w),
            y2: snap(points[1].1, h),
        })
    }

    /// Renders the accumulator as a grayscale diagnostic image with vote
    /// count as brightness, angle buckets on x and distance buckets on y.
    ///
    /// Counts above 255 saturate to white; peaks read as bright spots.
    /// Distance rows beyond the u16 image bound are dropped, which only
    /// matters for absurdly large source diagonals.
    pub fn render(&self) -> Image {
        let buckets = self.range.buckets();
        let w = buckets.min(u16::MAX as usize);
        let h = self.rho_bins.min(u16::MAX as usize);
        let mut img = Image::new(w as u16, h as u16);
        for y in 0..h {
            let votes = &self.acc[y * buckets..y * buckets + w];
            for (px, &v) in img.row_mut(y).iter_mut().zip(votes) {
                *px = Pixel::splat(v.min(255) as u8);
            }
        }
        img
    }
}
