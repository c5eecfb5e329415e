use crate::shape::ShapeType;

/// Error returned by collision queries that received arguments they cannot handle.
///
/// Degenerate geometry (zero-length edges, coincident points, empty polygons) is never an
/// error: such shapes simply do not collide with anything.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CollisionError {
    /// A query dedicated to one kind of shape was given another kind.
    #[error("expected a {expected:?} shape, found a {found:?}")]
    ShapeMismatch {
        /// The kind of shape the query works with.
        expected: ShapeType,
        /// The kind of shape that was actually given.
        found: ShapeType,
    },
    /// The pair of shapes has no penetration semantics.
    ///
    /// This is the case of two boundary shapes (line segments or poly-chains): both only
    /// push other shapes out, so neither can be pushed out of the other.
    #[error("collision between a {0:?} and a {1:?} is not supported")]
    Unsupported(ShapeType, ShapeType),
}
