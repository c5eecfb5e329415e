use crate::math::{Real, Vector};
use crate::query::sat::shape_shape_penetration_along_axis;
use crate::shape::Rect;

/// Finds the axis of minimum penetration between two axis-aligned rectangles.
///
/// Only the `x` and `y` axes are tested, in this order. Returns `None` if the rectangles
/// are separated along either axis.
pub fn rect_rect_find_min_penetration(rect1: &Rect, rect2: &Rect) -> Option<(Real, Vector)> {
    let depth_x = shape_shape_penetration_along_axis(rect1, rect2, &Vector::x())?;
    let depth_y = shape_shape_penetration_along_axis(rect1, rect2, &Vector::y())?;

    if depth_y < depth_x {
        Some((depth_y, Vector::y()))
    } else {
        Some((depth_x, Vector::x()))
    }
}
