//! Various unsorted geometrical and logical operators.

pub use self::interval::Interval;
pub use self::point_in_poly2d::point_in_poly2d;
pub use self::vector_ops::{Orientation, VectorOps};

mod interval;
mod point_in_poly2d;
mod vector_ops;
