use super::Vec2D;

/// An axis-aligned rectangle spanning from `min` to `max`, both inclusive.
///
/// The rectangle may be degenerate, ie. have a width or height of zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rectangle<T = f64> {
    min: Vec2D<T>,
    max: Vec2D<T>,
}

impl<T> Rectangle<T>
where
    T: PartialOrd + Copy,
{
    /// Create a rectangle from two opposite corners.
    ///
    /// The corners are sorted per axis, so passing them in any order
    /// produces the same rectangle.
    pub fn from_corners(a: Vec2D<T>, b: Vec2D<T>) -> Self {
        let (min_x, max_x) = if b.x < a.x { (b.x, a.x) } else { (a.x, b.x) };
        let (min_y, max_y) = if b.y < a.y { (b.y, a.y) } else { (a.y, b.y) };

        Self {
            min: Vec2D::new(min_x, min_y),
            max: Vec2D::new(max_x, max_y),
        }
    }

    pub const fn min(&self) -> Vec2D<T> {
        self.min
    }

    pub const fn max(&self) -> Vec2D<T> {
        self.max
    }

    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Vec2D<T>) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
    }
}
