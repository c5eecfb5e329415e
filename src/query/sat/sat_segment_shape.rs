use crate::math::Real;
use crate::shape::{LineSegment, SatShape};
use crate::utils::Interval;

/// How far `shape` must move along the segment normal to leave the back side of `segment`.
///
/// The axes of `shape` are tested first and reject shapes that do not reach the segment at
/// all. The segment axis is then tested: the segment projects on it as a single value and
/// the depth is the distance from that value to the bound of the shape projection lying on
/// the back side of the segment.
///
/// Returns `None` if the shapes do not overlap or if the segment is degenerate.
pub fn segment_shape_penetration<S>(segment: &LineSegment, shape: &S) -> Option<Real>
where
    S: ?Sized + SatShape,
{
    for axis in shape.separating_axes() {
        if !segment
            .project(&axis)
            .overlap(&shape.project(&axis))
            .is_line()
        {
            return None;
        }
    }

    let axis = segment.projection_axis();

    if axis.x == 0.0 && axis.y == 0.0 {
        return None;
    }

    // Both endpoints project on the same value up to rounding errors.
    let point = Interval::point(axis.dot(&segment.a.coords));
    let line = shape.project(&axis);

    if !point.overlap(&line).is_line() {
        return None;
    }

    Some(point.point_distance(&line, segment.normal_orientation.signum()))
}
