use math::{AffineTransform, Angle, Vec2D};

use crate::{Circle, Line, Primitive};

/// The axis to mirror a primitive across.
///
/// All reflections are relative to the coordinate system, not to the
/// primitive itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Negates the y coordinate
    X,

    /// Negates the x coordinate
    Y,

    /// Negates both coordinates
    Origin,
}

impl Axis {
    fn reflection(self) -> AffineTransform {
        match self {
            Self::X => AffineTransform::scale(1., -1.),
            Self::Y => AffineTransform::scale(-1., 1.),
            Self::Origin => AffineTransform::scale(-1., -1.),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transformation {
    Translation { offset: Vec2D },

    /// Scale relative to the center of the primitive
    Scale { x: f64, y: f64 },

    /// Counterclockwise rotation around the center of the primitive,
    /// assuming the y axis points up
    Rotation(Angle),

    Reflection(Axis),
}

impl Line {
    /// Apply a transformation to both endpoints.
    ///
    /// The new endpoints are rounded to the nearest pixel. Returns `None` if they
    /// don't fit into the coordinate range of a [Point](crate::Point).
    #[must_use]
    pub fn transformed(&self, transformation: Transformation) -> Option<Self> {
        let matrix = match transformation {
            Transformation::Translation { offset } => AffineTransform::translate(offset),
            Transformation::Scale { x, y } => {
                AffineTransform::scale(x, y).around(self.midpoint())
            },
            Transformation::Rotation(angle) => {
                AffineTransform::rotate(angle).around(self.midpoint())
            },
            Transformation::Reflection(axis) => axis.reflection(),
        };

        Some(Self {
            from: matrix.apply_to(self.from.into()).try_round_to_grid()?,
            to: matrix.apply_to(self.to.into()).try_round_to_grid()?,
            algorithm: self.algorithm,
        })
    }
}

impl Circle {
    /// Apply a transformation to the circle.
    ///
    /// Circles can't be scaled non-uniformly, so the radius is scaled by the mean of
    /// both factors instead. Rotating a circle around its own center has no effect.
    ///
    /// Returns `None` if the new center or radius doesn't fit into an `i32`.
    #[must_use]
    pub fn transformed(&self, transformation: Transformation) -> Option<Self> {
        let circle = match transformation {
            Transformation::Translation { offset } => Self {
                center: AffineTransform::translate(offset)
                    .apply_to(self.center.into())
                    .try_round_to_grid()?,
                radius: self.radius,
            },
            Transformation::Scale { x, y } => {
                let factor = (x + y) / 2.;
                let radius = (f64::from(self.radius) * factor).round().abs();
                if radius.is_nan() || radius > f64::from(i32::MAX) {
                    return None;
                }

                Self {
                    center: self.center,
                    radius: radius as i32,
                }
            },
            Transformation::Rotation(_) => *self,
            Transformation::Reflection(axis) => Self {
                center: axis
                    .reflection()
                    .apply_to(self.center.into())
                    .try_round_to_grid()?,
                radius: self.radius,
            },
        };

        Some(circle)
    }
}

impl Primitive {
    #[must_use]
    pub fn transformed(&self, transformation: Transformation) -> Option<Self> {
        match self {
            Self::Line(line) => line.transformed(transformation).map(Self::Line),
            Self::Circle(circle) => circle.transformed(transformation).map(Self::Circle),
        }
    }
}
