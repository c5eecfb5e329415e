//! Non-persistent collision queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::collision()`](collision) to compute the minimum translation vector separating
//!   two shapes.
//! * [`query::intersects()`](intersects) to determine if two shapes are overlapping or not.
//! * [`query::pairwise_collisions()`](pairwise_collisions) to test every pair of a set of
//!   shapes.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are more specific versions of the ones
//! described above. For example `collision_rect_rect` computes the translation separating
//! two shapes known at compile-time to be rectangles. The specific functions have the form
//! `collision_[shape1]_[shape2]()`.
//!
//! The strict variants [`collision_rect`] and [`collision_polygon`] take their second
//! argument as a [`Shape`](crate::shape::Shape) and fail with
//! [`CollisionError::ShapeMismatch`] if it is not of the expected kind.

pub use self::collision::{collision, collision_polygon, collision_rect, intersects};
pub use self::collision_settings::{CollisionSettings, CoordinateSystem};
pub use self::error::CollisionError;
pub use self::pairwise_collisions::{pairwise_collisions, PairwiseCollision};

mod collision;
mod collision_settings;
mod error;
mod pairwise_collisions;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::collision::{
        collision_polychain_shape, collision_polygon_polygon, collision_polygon_shape,
        collision_rect_rect, collision_rect_shape, collision_segment_shape,
    };

    pub(crate) use super::collision::{
        collision_polychain_polygon, collision_polychain_sat_shape,
        collision_segment_convex_parts, collision_segment_polygon, collision_segment_sat_shape,
    };
}
