use crate::math::{Real, Vector};
use crate::query::details::{collision_polychain_polygon, collision_segment_polygon};
use crate::query::{collision::oriented_mtv, sat, CollisionError, CollisionSettings};
use crate::shape::{Polygon, Shape, ShapeType};

/// Translation to apply to `polygon1` to separate it from `polygon2`.
///
/// The edge normals of `polygon2` are tested first, then those of `polygon1`, and the axis
/// of minimum penetration is kept. Concave polygons are tested piece by piece (see
/// [`Polygon::convex_parts`]) and the deepest piece penetration is kept.
///
/// `direction` is the position of `polygon2` relative to `polygon1`: the result never points
/// along it. Returns the zero vector if the polygons do not overlap by at least
/// `settings.floor`.
pub fn collision_polygon_polygon(
    polygon1: &Polygon,
    polygon2: &Polygon,
    direction: &Vector,
    settings: &CollisionSettings,
) -> Vector {
    let penetration = if polygon1.is_convex() && polygon2.is_convex() {
        sat::shape_shape_find_min_penetration(polygon1, polygon2)
    } else {
        deepest_parts_penetration(polygon1, polygon2)
    };

    oriented_mtv(penetration, direction, settings)
}

fn deepest_parts_penetration(polygon1: &Polygon, polygon2: &Polygon) -> Option<(Real, Vector)> {
    let parts1 = polygon1.convex_parts();
    let parts2 = polygon2.convex_parts();
    let mut deepest: Option<(Real, Vector)> = None;

    for part1 in &parts1 {
        for part2 in &parts2 {
            if let Some((depth, axis)) = sat::shape_shape_find_min_penetration(part1, part2) {
                if deepest.map_or(true, |(best, _)| depth > best) {
                    deepest = Some((depth, axis));
                }
            }
        }
    }

    deepest
}

/// Translation separating a polygon from any other shape.
///
/// If `other` is a rectangle, it is converted to a polygon first and keeps its role: the
/// polygon stays the first shape, so the rectangle axes are tested before the polygon ones
/// and, on ties between equally deep axes, a rectangle axis is picked. If `other` is a line
/// segment or a poly-chain, the result applies to the polygon and follows the segment
/// normals, ignoring `direction`. Concave polygons are tested piece by piece.
pub fn collision_polygon_shape(
    polygon: &Polygon,
    other: &Shape,
    direction: &Vector,
    settings: &CollisionSettings,
) -> Result<Vector, CollisionError> {
    let mtv = match other {
        Shape::Rect(other) => {
            collision_polygon_polygon(polygon, &other.to_polygon(), direction, settings)
        }
        Shape::Polygon(other) => collision_polygon_polygon(polygon, other, direction, settings),
        Shape::LineSegment(segment) => collision_segment_polygon(segment, polygon, settings),
        Shape::PolyChain(chain) => collision_polychain_polygon(chain, polygon, settings),
    };

    Ok(mtv)
}

/// Translation separating two polygons, failing if `other` is not a polygon.
pub fn collision_polygon(
    polygon: &Polygon,
    other: &Shape,
    direction: &Vector,
    settings: &CollisionSettings,
) -> Result<Vector, CollisionError> {
    match other {
        Shape::Polygon(other) => Ok(collision_polygon_polygon(
            polygon, other, direction, settings,
        )),
        _ => {
            log::warn!(
                "Polygon collision requested against a {:?}.",
                other.shape_type()
            );
            Err(CollisionError::ShapeMismatch {
                expected: ShapeType::Polygon,
                found: other.shape_type(),
            })
        }
    }
}
