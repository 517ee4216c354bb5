//! Restrict primitives to a rectangular window.
//!
//! Lines are clipped geometrically with either [Cohen-Sutherland](cohen_sutherland)
//! or [Liang-Barsky](liang_barsky). Circles are not clipped at all, instead the pixels
//! of the full outline are [filtered](filter_pixels) against the window.

pub mod cohen_sutherland;
pub mod liang_barsky;

use math::{Rectangle, Vec2D};

use crate::{Line, Point};

/// The clipping window. Its bounds are inclusive and it may have zero width or height.
pub type Window = Rectangle<f64>;

/// Denominators smaller than this are treated as zero
pub(crate) const EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClipAlgorithm {
    #[default]
    CohenSutherland,
    LiangBarsky,
}

/// A line segment with real-valued endpoints
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Vec2D,
    pub to: Vec2D,
}

impl Segment {
    #[must_use]
    pub const fn new(from: Vec2D, to: Vec2D) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub fn round_to_grid(&self) -> (Point, Point) {
        (self.from.round_to_grid(), self.to.round_to_grid())
    }
}

impl From<&Line> for Segment {
    fn from(line: &Line) -> Self {
        Self::new(line.from.into(), line.to.into())
    }
}

/// Compute the part of `line` that is visible inside `window`.
///
/// Returns `None` if no part of the line is visible.
#[must_use]
pub fn clip_line(line: &Line, window: &Window, method: ClipAlgorithm) -> Option<Segment> {
    let segment = Segment::from(line);
    let visible = match method {
        ClipAlgorithm::CohenSutherland => cohen_sutherland::clip(segment, window),
        ClipAlgorithm::LiangBarsky => liang_barsky::clip(segment, window),
    };

    if visible.is_none() {
        log::trace!("{line:?} lies outside of {window:?}");
    }
    visible
}

/// Keep only the pixels that lie inside the window
#[must_use]
pub fn filter_pixels(mut pixels: Vec<Point>, window: &Window) -> Vec<Point> {
    pixels.retain(|&pixel| window.contains_point(pixel.into()));
    pixels
}
