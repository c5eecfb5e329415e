use crate::math::{Point, Real, Vector};
use crate::query::{self, CollisionError, CollisionSettings, CoordinateSystem};
use crate::shape::{LineSegment, PolyChain, Polygon, Rect};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// Enum representing the type of a shape.
pub enum ShapeType {
    /// An axis-aligned rectangle.
    Rect,
    /// A closed polygon.
    Polygon,
    /// A one-sided line segment.
    LineSegment,
    /// A chain of one-sided line segments.
    PolyChain,
}

impl ShapeType {
    /// Does this kind of shape only push other shapes out, instead of being pushed out?
    #[inline]
    pub fn is_boundary(self) -> bool {
        matches!(self, ShapeType::LineSegment | ShapeType::PolyChain)
    }
}

/// Any of the shapes supported by the collision queries.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Shape {
    /// An axis-aligned rectangle.
    Rect(Rect),
    /// A closed polygon.
    Polygon(Polygon),
    /// A one-sided line segment.
    LineSegment(LineSegment),
    /// A chain of one-sided line segments.
    PolyChain(PolyChain),
}

impl Shape {
    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Rect(_) => ShapeType::Rect,
            Shape::Polygon(_) => ShapeType::Polygon,
            Shape::LineSegment(_) => ShapeType::LineSegment,
            Shape::PolyChain(_) => ShapeType::PolyChain,
        }
    }

    /// Is this shape a line segment or a poly-chain?
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.shape_type().is_boundary()
    }

    /// Converts this shape to a rectangle, if it is one.
    pub fn as_rect(&self) -> Option<&Rect> {
        match self {
            Shape::Rect(r) => Some(r),
            _ => None,
        }
    }

    /// Converts this shape to a polygon, if it is one.
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Polygon(p) => Some(p),
            _ => None,
        }
    }

    /// Converts this shape to a line segment, if it is one.
    pub fn as_line_segment(&self) -> Option<&LineSegment> {
        match self {
            Shape::LineSegment(s) => Some(s),
            _ => None,
        }
    }

    /// Converts this shape to a poly-chain, if it is one.
    pub fn as_polychain(&self) -> Option<&PolyChain> {
        match self {
            Shape::PolyChain(c) => Some(c),
            _ => None,
        }
    }

    /// The axis-aligned bounding rectangle of this shape.
    ///
    /// An empty polygon or poly-chain has a NaN rectangle.
    pub fn aabb(&self) -> Rect {
        match self {
            Shape::Rect(r) => *r,
            Shape::Polygon(p) => p.aabb(),
            Shape::LineSegment(s) => s.aabb(),
            Shape::PolyChain(c) => c
                .aabb()
                .unwrap_or(Rect::new(Real::NAN, Real::NAN, Real::NAN, Real::NAN)),
        }
    }

    /// The center of the bounding rectangle of this shape.
    pub fn center(&self) -> Point {
        self.aabb().center()
    }

    /// Computes the translation separating `self` from `other`.
    ///
    /// See [`query::collision`].
    pub fn collision(
        &self,
        other: &Shape,
        direction: &Vector,
        settings: &CollisionSettings,
    ) -> Result<Vector, CollisionError> {
        query::collision(self, other, direction, settings)
    }

    /// Returns a copy of this shape moved by `shift`.
    #[must_use]
    pub fn translated(&self, shift: &Vector) -> Self {
        match self {
            Shape::Rect(r) => Shape::Rect(r.translated(shift)),
            Shape::Polygon(p) => Shape::Polygon(p.translated(shift)),
            Shape::LineSegment(s) => Shape::LineSegment(s.translated(shift)),
            Shape::PolyChain(c) => Shape::PolyChain(c.translated(shift)),
        }
    }

    /// Returns a copy of this shape scaled by `scale` relative to the origin.
    #[must_use]
    pub fn scaled(&self, scale: &Vector) -> Self {
        match self {
            Shape::Rect(r) => Shape::Rect(r.scaled(scale)),
            Shape::Polygon(p) => Shape::Polygon(p.scaled(scale)),
            Shape::LineSegment(s) => Shape::LineSegment(s.scaled(scale)),
            Shape::PolyChain(c) => Shape::PolyChain(c.scaled(scale)),
        }
    }

    /// Returns a copy of this shape rotated by `angle` radians around `center`.
    ///
    /// A rotated rectangle is no longer axis-aligned and becomes a polygon.
    #[must_use]
    pub fn rotated(&self, angle: Real, center: &Point, system: CoordinateSystem) -> Self {
        match self {
            Shape::Rect(r) => Shape::Polygon(r.rotated(angle, center, system)),
            Shape::Polygon(p) => Shape::Polygon(p.rotated(angle, center, system)),
            Shape::LineSegment(s) => Shape::LineSegment(s.rotated(angle, center, system)),
            Shape::PolyChain(c) => Shape::PolyChain(c.rotated(angle, center, system)),
        }
    }
}

impl From<Rect> for Shape {
    fn from(r: Rect) -> Self {
        Shape::Rect(r)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}

impl From<LineSegment> for Shape {
    fn from(s: LineSegment) -> Self {
        Shape::LineSegment(s)
    }
}

impl From<PolyChain> for Shape {
    fn from(c: PolyChain) -> Self {
        Shape::PolyChain(c)
    }
}
