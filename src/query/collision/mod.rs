//! Implementation details of the `collision` function.

pub use self::collision_polychain_shape::collision_polychain_shape;
pub use self::collision_polygon_polygon::{
    collision_polygon, collision_polygon_polygon, collision_polygon_shape,
};
pub use self::collision_rect_rect::{collision_rect, collision_rect_rect, collision_rect_shape};
pub use self::collision_segment_shape::collision_segment_shape;
pub use self::collision_shape_shape::{collision, intersects};

pub(crate) use self::collision_polychain_shape::{
    collision_polychain_polygon, collision_polychain_sat_shape,
};
pub(crate) use self::collision_segment_shape::{
    collision_segment_convex_parts, collision_segment_polygon, collision_segment_sat_shape,
};

use crate::math::{Real, Vector};
use crate::query::CollisionSettings;

mod collision_polychain_shape;
mod collision_polygon_polygon;
mod collision_rect_rect;
mod collision_segment_shape;
mod collision_shape_shape;

/// Turns the result of a SAT search between two solids into the translation to apply to the
/// first one.
///
/// Depths below the settings floor vanish. The vector is flipped if needed so that it never
/// points along `direction`, the position of the second shape relative to the first.
pub(crate) fn oriented_mtv(
    penetration: Option<(Real, Vector)>,
    direction: &Vector,
    settings: &CollisionSettings,
) -> Vector {
    let Some((depth, axis)) = penetration else {
        return Vector::zeros();
    };

    let depth = settings.clamp_depth(depth);

    if depth == 0.0 {
        return Vector::zeros();
    }

    let mtv = axis * depth;

    if mtv.dot(direction) >= 0.0 {
        -mtv
    } else {
        mtv
    }
}
