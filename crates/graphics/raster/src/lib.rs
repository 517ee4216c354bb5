//! Turns lines and circles into pixels.
//!
//! Everything in here is a pure function of its arguments: primitives can be
//! [transformed](Primitive::transformed), [clipped](Primitive::clip) against a
//! [Window] and finally [rasterized](Primitive::rasterize) into a list of [Point]s.

mod circle;
pub mod clip;
mod line;
mod primitive;
mod transform;

pub use circle::bresenham_circle;
pub use clip::{ClipAlgorithm, Segment, Window};
pub use line::{bresenham_line, dda_line};
pub use primitive::{Circle, Line, LineAlgorithm, Primitive};
pub use transform::{Axis, Transformation};

/// A single pixel
pub type Point = math::Vec2D<i32>;
