//! Traits for shapes usable by the separating-axis test.

use crate::math::Vector;
use crate::utils::Interval;
use smallvec::SmallVec;

/// Axes returned by [`SatShape::separating_axes`].
pub type SeparatingAxes = SmallVec<[Vector; 4]>;

/// A shape that can be projected onto an axis and that knows its candidate separating axes.
pub trait SatShape {
    /// Projects this shape onto `axis`.
    ///
    /// The axis is expected to be a unit vector; the projection of each point is its dot
    /// product with `axis`.
    fn project(&self, axis: &Vector) -> Interval;

    /// The axes to test to prove that this shape does not overlap another one.
    ///
    /// Degenerate (zero-length) axes are never returned.
    fn separating_axes(&self) -> SeparatingAxes;
}
