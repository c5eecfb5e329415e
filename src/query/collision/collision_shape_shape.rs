use crate::math::Vector;
use crate::query::details::{
    collision_polychain_shape, collision_polygon_shape, collision_rect_shape,
    collision_segment_shape,
};
use crate::query::{CollisionError, CollisionSettings};
use crate::shape::Shape;

/// Computes the minimum translation vector separating two shapes.
///
/// Returns the zero vector if the shapes do not overlap.
///
/// Between two solids (rectangles and polygons), the result applies to `shape1` and
/// `direction`, the position of `shape2` relative to `shape1`, decides its sign: the result
/// never points along `direction`.
///
/// If one of the shapes is a line segment or a poly-chain, the result applies to the other
/// shape, whatever the argument order, and follows the segment normals; `direction` is
/// ignored. Two boundary shapes cannot collide with each other and yield
/// [`CollisionError::Unsupported`].
pub fn collision(
    shape1: &Shape,
    shape2: &Shape,
    direction: &Vector,
    settings: &CollisionSettings,
) -> Result<Vector, CollisionError> {
    match shape1 {
        Shape::Rect(rect) => collision_rect_shape(rect, shape2, direction, settings),
        Shape::Polygon(polygon) => collision_polygon_shape(polygon, shape2, direction, settings),
        Shape::LineSegment(segment) => collision_segment_shape(segment, shape2, settings),
        Shape::PolyChain(chain) => collision_polychain_shape(chain, shape2, settings),
    }
}

/// Do both shapes overlap by at least `settings.floor`?
pub fn intersects(
    shape1: &Shape,
    shape2: &Shape,
    settings: &CollisionSettings,
) -> Result<bool, CollisionError> {
    collision(shape1, shape2, &Vector::zeros(), settings).map(|mtv| mtv != Vector::zeros())
}
