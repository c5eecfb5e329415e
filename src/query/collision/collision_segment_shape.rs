use crate::math::{Real, Vector};
use crate::query::{sat, CollisionError, CollisionSettings};
use crate::shape::{LineSegment, Polygon, SatShape, Shape, ShapeType};

/// Translation to apply to `other` to push it out of the back side of `segment`.
///
/// The result is always parallel to [`LineSegment::normal`]. A concave polygon is tested
/// piece by piece (see [`Polygon::convex_parts`]) and the deepest piece sets the depth.
/// Fails with [`CollisionError::Unsupported`] if `other` is a line segment or a poly-chain.
pub fn collision_segment_shape(
    segment: &LineSegment,
    other: &Shape,
    settings: &CollisionSettings,
) -> Result<Vector, CollisionError> {
    match other {
        Shape::Rect(rect) => Ok(collision_segment_sat_shape(segment, rect, settings)),
        Shape::Polygon(polygon) => Ok(collision_segment_polygon(segment, polygon, settings)),
        Shape::LineSegment(_) | Shape::PolyChain(_) => Err(CollisionError::Unsupported(
            ShapeType::LineSegment,
            other.shape_type(),
        )),
    }
}

/// Segment against any polygon, decomposing it first if it is concave.
pub(crate) fn collision_segment_polygon(
    segment: &LineSegment,
    polygon: &Polygon,
    settings: &CollisionSettings,
) -> Vector {
    if polygon.is_convex() {
        collision_segment_sat_shape(segment, polygon, settings)
    } else {
        collision_segment_convex_parts(segment, &polygon.convex_parts(), settings)
    }
}

/// Segment against the convex pieces of a polygon: the deepest piece wins.
pub(crate) fn collision_segment_convex_parts(
    segment: &LineSegment,
    parts: &[Polygon],
    settings: &CollisionSettings,
) -> Vector {
    let deepest = parts
        .iter()
        .filter_map(|part| sat::segment_shape_penetration(segment, part))
        .fold(None, |best: Option<Real>, depth| {
            Some(best.map_or(depth, |best| best.max(depth)))
        });

    match deepest {
        Some(depth) => segment.normal() * settings.clamp_depth(depth),
        None => Vector::zeros(),
    }
}

/// Segment against a convex shape.
pub(crate) fn collision_segment_sat_shape<S>(
    segment: &LineSegment,
    shape: &S,
    settings: &CollisionSettings,
) -> Vector
where
    S: ?Sized + SatShape,
{
    match sat::segment_shape_penetration(segment, shape) {
        Some(depth) => segment.normal() * settings.clamp_depth(depth),
        None => Vector::zeros(),
    }
}
