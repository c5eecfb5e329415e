//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! # What is the Separating Axis Theorem?
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto which
//! the projections of the two shapes do not overlap.
//!
//! # How is it applied here?
//!
//! 1. **Select candidate axes**: the edge normals of both shapes (see
//!    [`SatShape::separating_axes`](crate::shape::SatShape::separating_axes)).
//! 2. **Project both shapes onto each axis**, giving one [`Interval`](crate::utils::Interval)
//!    per shape.
//! 3. **Check for overlap**: if the projections are disjoint on any axis the shapes do not
//!    collide and the search stops immediately.
//! 4. **Find the minimum penetration**: the axis with the smallest overlap gives the
//!    direction of the minimum translation vector, and the overlap length its magnitude.
//!    When one projection contains the other, the distance to the nearest bound is added
//!    to the overlap so that a deeply nested shape is pushed out on the correct side.
//!
//! The functions of this module return raw depths and axes. The noise-suppression floor and
//! the orientation of the final vector are applied by the [`query`](crate::query) functions.
//!
//! # Boundary shapes
//!
//! Line segments are not solids: [`segment_shape_penetration`] only measures how far a shape
//! must move along the segment normal to end up on its front side.

pub use self::sat_rect_rect::rect_rect_find_min_penetration;
pub use self::sat_segment_shape::segment_shape_penetration;
pub use self::sat_shape_shape::{
    shape_shape_find_min_penetration, shape_shape_penetration_along_axis,
};

mod sat_rect_rect;
mod sat_segment_shape;
mod sat_shape_shape;
