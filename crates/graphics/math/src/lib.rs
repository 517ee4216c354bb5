//! Vectors, angles, rectangles and affine transforms for 2D geometry

mod angle;
mod rect;
mod transform;
mod vec2d;

pub use angle::Angle;
pub use rect::Rectangle;
pub use transform::AffineTransform;
pub use vec2d::Vec2D;
