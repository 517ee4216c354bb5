use std::ops::{Add, Div, Mul, Neg, Sub};

/// Generate a trait impl for an operation involving two [Vec2D]s, like [Add] or [Sub]
macro_rules! impl_bin_op {
    ($trait: ident, $fn: ident, $op: tt) => {
        impl<T: $trait<T, Output = T>> $trait for Vec2D<T> {
            type Output = Vec2D<T>;

            #[must_use]
            fn $fn(self, rhs: Self) -> Self::Output {
                Self {
                    x: self.x $op rhs.x,
                    y: self.y $op rhs.y,
                }
            }
        }
    };
}

/// Generate a trait impl for an operation involving a [Vec2D] and a scalar value of unknown type
macro_rules! impl_scalar_op {
    ($trait: ident, $fn: ident, $op: tt, $rhs: ident) => {
        impl<T: $trait<$rhs, Output = T>> $trait<$rhs> for Vec2D<T> {
            type Output = Vec2D<T>;

            #[must_use]
            fn $fn(self, rhs: $rhs) -> Self::Output {
                Self {
                    x: self.x $op rhs,
                    y: self.y $op rhs,
                }
            }
        }
    };
}

/// A two dimensional vector.
///
/// With `T = i32` this doubles as a pixel coordinate. Ordering is lexicographic,
/// first by `x` and then by `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2D<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vec2D<T> {
    #[inline]
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline]
    #[must_use]
    pub fn map<U, F: Fn(T) -> U>(self, f: F) -> Vec2D<U> {
        Vec2D {
            x: f(self.x),
            y: f(self.y),
        }
    }
}

impl Vec2D<f64> {
    #[inline]
    #[must_use]
    pub fn middle(a: Self, b: Self) -> Self {
        (a + b) / 2.
    }

    #[inline]
    #[must_use]
    pub fn lerp(&self, other: Self, t: f64) -> Self {
        debug_assert!(0. <= t);
        debug_assert!(t <= 1.);

        *self + (other - *self) * t
    }

    /// Snap to the nearest pixel.
    ///
    /// Halfway cases are rounded away from zero, so `(0.5, -0.5)` becomes `(1, -1)`.
    #[inline]
    #[must_use]
    pub fn round_to_grid(&self) -> Vec2D<i32> {
        Vec2D {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
        }
    }

    /// Like [Self::round_to_grid], but returns `None` instead of saturating when the
    /// point lies outside of the `i32` range
    #[must_use]
    pub fn try_round_to_grid(&self) -> Option<Vec2D<i32>> {
        Some(Vec2D {
            x: round_to_i32(self.x)?,
            y: round_to_i32(self.y)?,
        })
    }
}

fn round_to_i32(value: f64) -> Option<i32> {
    let rounded = value.round();
    (f64::from(i32::MIN)..=f64::from(i32::MAX))
        .contains(&rounded)
        .then_some(rounded as i32)
}

impl From<Vec2D<i32>> for Vec2D<f64> {
    #[inline]
    fn from(value: Vec2D<i32>) -> Self {
        value.map(f64::from)
    }
}

impl<T: Neg<Output = T>> Neg for Vec2D<T> {
    type Output = Self;

    #[must_use]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl_bin_op!(Add, add, +);
impl_bin_op!(Sub, sub, -);

impl_scalar_op!(Mul, mul, *, f64);

impl_scalar_op!(Div, div, /, f64);
