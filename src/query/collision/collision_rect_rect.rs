use crate::math::Vector;
use crate::query::details::{
    collision_polychain_sat_shape, collision_polygon_polygon, collision_segment_sat_shape,
};
use crate::query::{collision::oriented_mtv, sat, CollisionError, CollisionSettings};
use crate::shape::{Rect, Shape, ShapeType};

/// Translation to apply to `rect1` to separate it from `rect2`.
///
/// Only the `x` and `y` axes are tested. `direction` is the position of `rect2` relative to
/// `rect1`: the result never points along it. Returns the zero vector if the rectangles
/// do not overlap by at least `settings.floor`.
pub fn collision_rect_rect(
    rect1: &Rect,
    rect2: &Rect,
    direction: &Vector,
    settings: &CollisionSettings,
) -> Vector {
    oriented_mtv(
        sat::rect_rect_find_min_penetration(rect1, rect2),
        direction,
        settings,
    )
}

/// Translation separating a rectangle from any other shape.
///
/// If `other` is a polygon, the rectangle is converted to a polygon first. If it is a line
/// segment or a poly-chain, the result applies to the rectangle and follows the segment
/// normals, ignoring `direction`.
pub fn collision_rect_shape(
    rect: &Rect,
    other: &Shape,
    direction: &Vector,
    settings: &CollisionSettings,
) -> Result<Vector, CollisionError> {
    let mtv = match other {
        Shape::Rect(other) => collision_rect_rect(rect, other, direction, settings),
        Shape::Polygon(other) => {
            collision_polygon_polygon(&rect.to_polygon(), other, direction, settings)
        }
        Shape::LineSegment(segment) => collision_segment_sat_shape(segment, rect, settings),
        Shape::PolyChain(chain) => collision_polychain_sat_shape(chain, rect, settings),
    };

    Ok(mtv)
}

/// Translation separating two rectangles, failing if `other` is not a rectangle.
pub fn collision_rect(
    rect: &Rect,
    other: &Shape,
    direction: &Vector,
    settings: &CollisionSettings,
) -> Result<Vector, CollisionError> {
    match other {
        Shape::Rect(other) => Ok(collision_rect_rect(rect, other, direction, settings)),
        _ => {
            log::warn!(
                "Rectangle collision requested against a {:?}.",
                other.shape_type()
            );
            Err(CollisionError::ShapeMismatch {
                expected: ShapeType::Rect,
                found: other.shape_type(),
            })
        }
    }
}
