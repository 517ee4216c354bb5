use math::Vec2D;

use crate::{
    bresenham_circle, bresenham_line,
    clip::{self, ClipAlgorithm, Window},
    dda_line, Point,
};

/// The algorithm used to rasterize a [Line]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineAlgorithm {
    /// Digital differential analyzer, see [dda_line]
    Dda,

    /// See [bresenham_line]
    #[default]
    Bresenham,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
    pub algorithm: LineAlgorithm,
}

impl Line {
    #[must_use]
    pub const fn new(from: Point, to: Point, algorithm: LineAlgorithm) -> Self {
        Self {
            from,
            to,
            algorithm,
        }
    }

    /// The midpoint between both endpoints, used as the pivot for scaling and rotation
    #[must_use]
    pub fn midpoint(&self) -> Vec2D {
        Vec2D::middle(self.from.into(), self.to.into())
    }

    #[must_use]
    pub fn rasterize(&self) -> Vec<Point> {
        match self.algorithm {
            LineAlgorithm::Dda => dda_line(self.from, self.to),
            LineAlgorithm::Bresenham => bresenham_line(self.from, self.to),
        }
    }

    /// Rasterize only the part of the line that lies inside the window.
    ///
    /// The visible segment is computed with real coordinates and its endpoints are
    /// rounded to pixels before rasterizing it with the line's own algorithm.
    #[must_use]
    pub fn clip(&self, window: &Window, method: ClipAlgorithm) -> Vec<Point> {
        let Some(visible) = clip::clip_line(self, window, method) else {
            return vec![];
        };

        let (from, to) = visible.round_to_grid();
        Self { from, to, ..*self }.rasterize()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
}

impl Circle {
    #[must_use]
    pub const fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }

    #[must_use]
    pub fn rasterize(&self) -> Vec<Point> {
        bresenham_circle(self.center, self.radius)
    }

    /// Rasterize the circle, keeping only the pixels inside the window.
    ///
    /// This filters the finished outline instead of computing the arcs that
    /// cross the window.
    #[must_use]
    pub fn clip(&self, window: &Window) -> Vec<Point> {
        clip::filter_pixels(self.rasterize(), window)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    Line(Line),
    Circle(Circle),
}

impl Primitive {
    #[must_use]
    pub fn rasterize(&self) -> Vec<Point> {
        match self {
            Self::Line(line) => line.rasterize(),
            Self::Circle(circle) => circle.rasterize(),
        }
    }

    /// Rasterize the visible part of the primitive.
    ///
    /// `method` only applies to lines, circles are always filtered pixel by pixel.
    #[must_use]
    pub fn clip(&self, window: &Window, method: ClipAlgorithm) -> Vec<Point> {
        match self {
            Self::Line(line) => line.clip(window, method),
            Self::Circle(circle) => circle.clip(window),
        }
    }
}

impl From<Line> for Primitive {
    fn from(value: Line) -> Self {
        Self::Line(value)
    }
}

impl From<Circle> for Primitive {
    fn from(value: Circle) -> Self {
        Self::Circle(value)
    }
}
