//! Definition of the axis-aligned rectangle shape.

use crate::math::{Point, Real, Vector};
use crate::query::{self, CollisionError, CollisionSettings, CoordinateSystem};
use crate::shape::{Polygon, SatShape, SeparatingAxes, Shape};
use crate::utils::Interval;
use smallvec::smallvec;

/// An axis-aligned rectangle given by its top-left corner and its size.
#[derive(PartialEq, Debug, Copy, Clone, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Rect {
    /// The `x` coordinate of the left edge.
    pub x: Real,
    /// The `y` coordinate of the top edge.
    pub y: Real,
    /// The extent along `x`.
    pub width: Real,
    /// The extent along `y`.
    pub height: Real,
}

impl Rect {
    /// Creates a new rectangle.
    #[inline]
    pub const fn new(x: Real, y: Real, width: Real, height: Real) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates the rectangle spanning from `mins` to `maxs`.
    #[inline]
    pub fn from_corners(mins: Point, maxs: Point) -> Self {
        Self::new(mins.x, mins.y, maxs.x - mins.x, maxs.y - mins.y)
    }

    /// The `x` coordinate of the right edge.
    #[inline]
    pub fn right(&self) -> Real {
        self.x + self.width
    }

    /// The `y` coordinate of the bottom edge.
    #[inline]
    pub fn bottom(&self) -> Real {
        self.y + self.height
    }

    /// The top-left corner.
    #[inline]
    pub fn mins(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The bottom-right corner.
    #[inline]
    pub fn maxs(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// The `(width, height)` vector.
    #[inline]
    pub fn size(&self) -> Vector {
        Vector::new(self.width, self.height)
    }

    /// The center of this rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// The four corners, in the order `(x, y)`, `(right, y)`, `(right, bottom)`, `(x, bottom)`.
    pub fn vertices(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.right(), self.bottom()),
            Point::new(self.x, self.bottom()),
        ]
    }

    /// Converts this rectangle to a four-vertex polygon.
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.vertices().to_vec())
    }

    /// Does this rectangle contain `pt`, borders included?
    #[inline]
    pub fn contains_point(&self, pt: &Point) -> bool {
        pt.x >= self.x && pt.x <= self.right() && pt.y >= self.y && pt.y <= self.bottom()
    }

    /// Does this rectangle contain `other` entirely, borders included?
    #[inline]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.right() <= self.right()
            && other.y >= self.y
            && other.bottom() <= self.bottom()
    }

    /// Do both rectangles overlap, borders included?
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }

    /// The smallest rectangle containing both `self` and `other`.
    #[must_use]
    pub fn merged(&self, other: &Rect) -> Rect {
        Rect::from_corners(self.mins().inf(&other.mins()), self.maxs().sup(&other.maxs()))
    }

    /// Tells on which side `inner`, moved by `position`, pokes out of this rectangle.
    ///
    /// Each component of the result is `-1` if the moved rectangle crosses the left (resp.
    /// top) edge, `1` if it crosses the right (resp. bottom) edge, and `0` if it stays
    /// inside along that axis. The zero vector means `inner` is fully contained.
    pub fn containment(&self, position: &Vector, inner: &Rect) -> Vector {
        let inner = inner.translated(position);

        let x = if inner.x < self.x {
            -1.0
        } else if inner.right() > self.right() {
            1.0
        } else {
            0.0
        };

        let y = if inner.y < self.y {
            -1.0
        } else if inner.bottom() > self.bottom() {
            1.0
        } else {
            0.0
        };

        Vector::new(x, y)
    }

    /// Computes the translation to apply to `self` to separate it from `other`.
    ///
    /// See [`query::details::collision_rect_rect`].
    pub fn collision_rect(
        &self,
        other: &Rect,
        direction: &Vector,
        settings: &CollisionSettings,
    ) -> Vector {
        query::details::collision_rect_rect(self, other, direction, settings)
    }

    /// Computes the translation separating `self` from any other shape.
    ///
    /// See [`query::collision`].
    pub fn collision(
        &self,
        other: &Shape,
        direction: &Vector,
        settings: &CollisionSettings,
    ) -> Result<Vector, CollisionError> {
        query::details::collision_rect_shape(self, other, direction, settings)
    }

    /// Returns a copy of this rectangle moved by `shift`.
    #[must_use]
    pub fn translated(&self, shift: &Vector) -> Self {
        Self::new(self.x + shift.x, self.y + shift.y, self.width, self.height)
    }

    /// Returns a copy of this rectangle with its corners scaled by `scale` relative to the
    /// origin.
    ///
    /// Negative factors are supported: the result is re-normalized to a positive size.
    #[must_use]
    pub fn scaled(&self, scale: &Vector) -> Self {
        let a = self.mins().coords.component_mul(scale);
        let b = self.maxs().coords.component_mul(scale);
        Rect::from_corners(Point::from(a.inf(&b)), Point::from(a.sup(&b)))
    }

    /// Returns a polygon equal to this rectangle rotated by `angle` radians around `center`.
    #[must_use]
    pub fn rotated(&self, angle: Real, center: &Point, system: CoordinateSystem) -> Polygon {
        self.to_polygon().rotated(angle, center, system)
    }
}

impl SatShape for Rect {
    #[inline]
    fn project(&self, axis: &Vector) -> Interval {
        Interval::from_projection(axis, &self.vertices())
    }

    #[inline]
    fn separating_axes(&self) -> SeparatingAxes {
        smallvec![Vector::x(), Vector::y()]
    }
}
