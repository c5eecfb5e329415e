//! Definition of the one-sided line segment shape.

use crate::math::{Point, Real, Rotation, Vector};
use crate::query::{self, CollisionError, CollisionSettings, CoordinateSystem};
use crate::shape::{Rect, SatShape, SeparatingAxes, Shape};
use crate::utils::{Interval, Orientation, VectorOps};
use core::mem;
use smallvec::smallvec;

/// A one-sided line segment, usable as a wall, floor or one-way platform.
///
/// A segment is a boundary rather than a solid: any shape overlapping it is pushed out along
/// the segment's own [normal](LineSegment::normal), whatever the geometry of that shape.
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct LineSegment {
    /// The segment first point.
    pub a: Point,
    /// The segment second point.
    pub b: Point,
    /// The rotation applied to the direction `b - a` to obtain the normal.
    pub normal_orientation: Orientation,
}

impl LineSegment {
    /// Creates a new segment from two points and the side its normal points to.
    #[inline]
    pub fn new(a: Point, b: Point, normal_orientation: Orientation) -> Self {
        Self {
            a,
            b,
            normal_orientation,
        }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    #[inline]
    pub fn scaled_direction(&self) -> Vector {
        self.b - self.a
    }

    /// The unit direction of this segment, or zero if both points are equal.
    #[inline]
    pub fn direction(&self) -> Vector {
        self.scaled_direction().normalize_or_zero()
    }

    /// The length of this segment.
    #[inline]
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// The unit normal shapes are pushed out along, or zero if both points are equal.
    #[inline]
    pub fn normal(&self) -> Vector {
        self.scaled_direction().normal(self.normal_orientation)
    }

    /// The axis the segment projects onto as a single point.
    ///
    /// This is the clockwise normal of the direction, whatever `normal_orientation` is; it
    /// is equal to [`LineSegment::normal`] for clockwise segments and opposite to it for
    /// counter-clockwise ones.
    #[inline]
    pub fn projection_axis(&self) -> Vector {
        self.scaled_direction().normal(Orientation::Cw)
    }

    /// Swaps both endpoints and the normal orientation, so the normal is unchanged.
    pub fn reverse(&mut self) {
        mem::swap(&mut self.a, &mut self.b);
        self.normal_orientation = self.normal_orientation.reversed();
    }

    /// Returns a copy of this segment with swapped endpoints and the same normal.
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.reverse();
        self
    }

    /// The axis-aligned bounding rectangle of this segment.
    pub fn aabb(&self) -> Rect {
        Rect::from_corners(self.a.inf(&self.b), self.a.sup(&self.b))
    }

    /// Computes the translation to apply to `other` to push it out of this segment.
    ///
    /// See [`query::details::collision_segment_shape`].
    pub fn collision(
        &self,
        other: &Shape,
        settings: &CollisionSettings,
    ) -> Result<Vector, CollisionError> {
        query::details::collision_segment_shape(self, other, settings)
    }

    /// Returns a copy of this segment moved by `shift`.
    #[must_use]
    pub fn translated(&self, shift: &Vector) -> Self {
        Self::new(self.a + shift, self.b + shift, self.normal_orientation)
    }

    /// Returns a copy of this segment with its endpoints scaled by `scale` relative to the
    /// origin.
    #[must_use]
    pub fn scaled(&self, scale: &Vector) -> Self {
        Self::new(
            Point::from(self.a.coords.component_mul(scale)),
            Point::from(self.b.coords.component_mul(scale)),
            self.normal_orientation,
        )
    }

    /// Returns a copy of this segment rotated by `angle` radians around `center`.
    #[must_use]
    pub fn rotated(&self, angle: Real, center: &Point, system: CoordinateSystem) -> Self {
        let rot = Rotation::new(system.signed_angle(angle));
        Self::new(
            center + rot * (self.a - center),
            center + rot * (self.b - center),
            self.normal_orientation,
        )
    }
}

impl From<[Point; 2]> for LineSegment {
    fn from(arr: [Point; 2]) -> Self {
        LineSegment::new(arr[0], arr[1], Orientation::default())
    }
}

impl SatShape for LineSegment {
    #[inline]
    fn project(&self, axis: &Vector) -> Interval {
        Interval::from_projection(axis, [&self.a, &self.b])
    }

    fn separating_axes(&self) -> SeparatingAxes {
        let axis = self.projection_axis();

        if axis == Vector::zeros() {
            SeparatingAxes::new()
        } else {
            smallvec![axis]
        }
    }
}
