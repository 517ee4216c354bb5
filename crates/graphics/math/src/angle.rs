/// Zero cost wrapper type for an `f64`, measured in radians.
///
/// This type exists since coordinates are also `f64`'s.
/// It should enforce type safety to prevent coordinates from accidentally being
/// used as angles, and degrees from accidentally being used as radians.
#[derive(Clone, Copy, Debug, Default)]
pub struct Angle(f64);

impl Angle {
    /// Angles with a difference below this value (in radians) are considered equal
    const MAX_ERROR: f64 = 0.01;

    #[inline]
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees.to_radians())
    }

    /// The smallest angle between `self` and `other`, in `[0, PI]`
    fn diff(&self, other: &Self) -> Self {
        let mut difference_in_radians = (self.0 - other.0).rem_euclid(std::f64::consts::TAU);

        if std::f64::consts::PI < difference_in_radians {
            difference_in_radians = std::f64::consts::TAU - difference_in_radians;
        }

        Self(difference_in_radians)
    }

    #[inline]
    #[must_use]
    pub fn sin(&self) -> f64 {
        self.0.sin()
    }

    #[inline]
    #[must_use]
    pub fn cos(&self) -> f64 {
        self.0.cos()
    }
}

impl PartialEq for Angle {
    #[must_use]
    fn eq(&self, other: &Self) -> bool {
        self.diff(other).0 < Self::MAX_ERROR
    }
}
