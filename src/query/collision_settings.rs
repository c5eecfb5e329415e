use crate::math::Real;

/// Handedness of the coordinate system the shapes live in.
///
/// Only the sign of rotation angles depends on it; collision detection itself does not.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum CoordinateSystem {
    /// Right-handed: positive angles rotate from `+x` toward `+y`.
    #[default]
    Rhs,
    /// Left-handed: positive angles rotate from `+x` toward `-y`.
    Lhs,
}

impl CoordinateSystem {
    /// The angle to feed a right-handed rotation matrix to rotate by `angle` in this system.
    #[inline]
    pub fn signed_angle(self, angle: Real) -> Real {
        match self {
            CoordinateSystem::Rhs => angle,
            CoordinateSystem::Lhs => -angle,
        }
    }
}

/// Tunables read by collision queries.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(default))]
pub struct CollisionSettings {
    /// Penetration depths below this threshold are reported as no collision at all.
    ///
    /// This prevents the rounding noise of SAT projections from producing tiny corrections
    /// that oscillate from one frame to the next.
    pub floor: Real,
    /// Suggested number of correction passes for callers resolving several bodies at once.
    ///
    /// This is advisory: no query of this crate reads it.
    pub limit: u32,
    /// Handedness used by shape rotations.
    pub coordinate_system: CoordinateSystem,
}

impl CollisionSettings {
    /// The default noise-suppression threshold.
    pub const DEFAULT_FLOOR: Real = 0.01;
    /// The default number of suggested correction passes.
    pub const DEFAULT_LIMIT: u32 = 3;

    /// Returns these settings with the given noise-suppression threshold.
    #[must_use]
    pub fn with_floor(mut self, floor: Real) -> Self {
        self.floor = floor;
        self
    }

    /// Returns these settings with the given number of suggested correction passes.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Returns these settings with the given coordinate system.
    #[must_use]
    pub fn with_coordinate_system(mut self, coordinate_system: CoordinateSystem) -> Self {
        self.coordinate_system = coordinate_system;
        self
    }

    /// Applies the noise-suppression threshold to a penetration depth.
    #[inline]
    pub fn clamp_depth(&self, depth: Real) -> Real {
        if depth < self.floor {
            0.0
        } else {
            depth
        }
    }
}

impl Default for CollisionSettings {
    fn default() -> Self {
        Self {
            floor: Self::DEFAULT_FLOOR,
            limit: Self::DEFAULT_LIMIT,
            coordinate_system: CoordinateSystem::Rhs,
        }
    }
}
