use crate::math::Vector;
use crate::query::details::{collision_segment_convex_parts, collision_segment_sat_shape};
use crate::query::{CollisionError, CollisionSettings};
use crate::shape::{PolyChain, Polygon, SatShape, Shape, ShapeType};

/// Translation to apply to `other` to push it out of every segment of `chain`.
///
/// Each segment contributes its own correction (see
/// [`collision_segment_shape`](crate::query::details::collision_segment_shape)) and the
/// corrections are summed. Fails with [`CollisionError::Unsupported`] if `other` is a line
/// segment or a poly-chain.
pub fn collision_polychain_shape(
    chain: &PolyChain,
    other: &Shape,
    settings: &CollisionSettings,
) -> Result<Vector, CollisionError> {
    match other {
        Shape::Rect(rect) => Ok(collision_polychain_sat_shape(chain, rect, settings)),
        Shape::Polygon(polygon) => Ok(collision_polychain_polygon(chain, polygon, settings)),
        Shape::LineSegment(_) | Shape::PolyChain(_) => Err(CollisionError::Unsupported(
            ShapeType::PolyChain,
            other.shape_type(),
        )),
    }
}

/// Chain against any polygon. A concave polygon is decomposed once for all the segments.
pub(crate) fn collision_polychain_polygon(
    chain: &PolyChain,
    polygon: &Polygon,
    settings: &CollisionSettings,
) -> Vector {
    if polygon.is_convex() {
        return collision_polychain_sat_shape(chain, polygon, settings);
    }

    let parts = polygon.convex_parts();
    chain.segments().fold(Vector::zeros(), |total, segment| {
        total + collision_segment_convex_parts(&segment, &parts, settings)
    })
}

/// Chain against a convex shape.
pub(crate) fn collision_polychain_sat_shape<S>(
    chain: &PolyChain,
    shape: &S,
    settings: &CollisionSettings,
) -> Vector
where
    S: ?Sized + SatShape,
{
    chain.segments().fold(Vector::zeros(), |total, segment| {
        total + collision_segment_sat_shape(&segment, shape, settings)
    })
}
