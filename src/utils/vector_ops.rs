//! Vector operations that nalgebra does not provide directly.

use crate::math::{Real, Vector, Vector3};

/// A rotation direction used to pick one of the two normals of a vector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Clockwise: rotates a vector by -90°.
    #[default]
    Cw,
    /// Counter-clockwise: rotates a vector by +90°.
    Ccw,
}

impl Orientation {
    /// The opposite rotation direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Cw => Orientation::Ccw,
            Orientation::Ccw => Orientation::Cw,
        }
    }

    /// `1.0` for [`Orientation::Ccw`], `-1.0` for [`Orientation::Cw`].
    pub fn signum(self) -> Real {
        match self {
            Orientation::Cw => -1.0,
            Orientation::Ccw => 1.0,
        }
    }
}

/// Extra operations on 2D vectors.
///
/// Degenerate inputs never panic: normalizing (or taking the normal of) the zero vector
/// yields the zero vector.
pub trait VectorOps: Sized {
    /// Component-wise product of `self` and `rhs`.
    fn multiply_vector(&self, rhs: &Self) -> Self;

    /// The 2D cross product lifted to 3D: `(0, 0, self.x * rhs.y - self.y * rhs.x)`.
    fn cross3(&self, rhs: &Self) -> Vector3<Real>;

    /// The unit vector with the direction of `self`, or zero if `self` has a zero length.
    fn normalize_or_zero(&self) -> Self;

    /// The unit normal of `self`, rotated in the given direction.
    ///
    /// `Ccw` gives `(-y, x) / len`, `Cw` gives `(y, -x) / len`.
    fn normal(&self, orientation: Orientation) -> Self;

    /// Mirrors `self` across the vertical axis: `(-x, y)`.
    fn mirror(&self) -> Self;

    /// Flips `self` across the horizontal axis: `(x, -y)`.
    fn flip(&self) -> Self;

    /// Points `self` the other way: `(-x, -y)`.
    fn invert(&self) -> Self;

    /// The angle between `self` and the positive `x` axis, in radians.
    fn theta(&self) -> Real;

    /// Does any component of `self` hold NaN?
    fn is_nan(&self) -> bool;
}

impl VectorOps for Vector {
    #[inline]
    fn multiply_vector(&self, rhs: &Self) -> Self {
        self.component_mul(rhs)
    }

    #[inline]
    fn cross3(&self, rhs: &Self) -> Vector3<Real> {
        Vector3::new(0.0, 0.0, self.perp(rhs))
    }

    #[inline]
    fn normalize_or_zero(&self) -> Self {
        let len = self.norm();

        if len == 0.0 {
            Vector::zeros()
        } else {
            self / len
        }
    }

    #[inline]
    fn normal(&self, orientation: Orientation) -> Self {
        let len = self.norm();

        if len == 0.0 {
            return Vector::zeros();
        }

        match orientation {
            Orientation::Ccw => Vector::new(-self.y / len, self.x / len),
            Orientation::Cw => Vector::new(self.y / len, -self.x / len),
        }
    }

    #[inline]
    fn mirror(&self) -> Self {
        Vector::new(-self.x, self.y)
    }

    #[inline]
    fn flip(&self) -> Self {
        Vector::new(self.x, -self.y)
    }

    #[inline]
    fn invert(&self) -> Self {
        -self
    }

    #[inline]
    fn theta(&self) -> Real {
        self.y.atan2(self.x)
    }

    #[inline]
    fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}
