use crate::math::{Real, Vector};
use crate::shape::SatShape;

/// Penetration depth of two shapes projected on `axis`, or `None` if `axis` separates them.
///
/// The depth includes the containment penalty of [`Interval::penetration`].
///
/// [`Interval::penetration`]: crate::utils::Interval::penetration
#[inline]
pub fn shape_shape_penetration_along_axis<S1, S2>(
    shape1: &S1,
    shape2: &S2,
    axis: &Vector,
) -> Option<Real>
where
    S1: ?Sized + SatShape,
    S2: ?Sized + SatShape,
{
    shape1.project(axis).penetration(&shape2.project(axis))
}

/// Finds the axis of minimum penetration between two convex shapes.
///
/// The axes of `shape2` are tested first, then those of `shape1`; on ties the first axis
/// found is kept. Returns `None` as soon as a separating axis is found, or if neither shape
/// has any axis to test.
///
/// The returned axis is not oriented: it may point from `shape1` toward `shape2` or the other
/// way around.
pub fn shape_shape_find_min_penetration<S1, S2>(
    shape1: &S1,
    shape2: &S2,
) -> Option<(Real, Vector)>
where
    S1: ?Sized + SatShape,
    S2: ?Sized + SatShape,
{
    let mut best: Option<(Real, Vector)> = None;

    for axis in shape2
        .separating_axes()
        .into_iter()
        .chain(shape1.separating_axes())
    {
        let depth = shape_shape_penetration_along_axis(shape1, shape2, &axis)?;

        if best.map_or(true, |(best_depth, _)| depth < best_depth) {
            best = Some((depth, axis));
        }
    }

    best
}
