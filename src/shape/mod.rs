//! Shapes supported by mtv2d.

pub use self::polychain::PolyChain;
pub use self::polygon::{Convexity, Polygon};
pub use self::rect::Rect;
pub use self::sat_shape::{SatShape, SeparatingAxes};
pub use self::segment::LineSegment;
#[doc(inline)]
pub use self::shape::{Shape, ShapeType};

mod ear_clipping;
mod polychain;
mod polygon;
mod rect;
mod sat_shape;
mod segment;
mod shape;
