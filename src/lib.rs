/*!
mtv2d
========

**mtv2d** is a 2-dimensional collision library written with the rust programming language.

It answers one question for pairs of rectangles, polygons, one-sided line segments and
poly-chains: do they overlap, and if they do, what is the smallest translation that
separates them? The answer is a Minimum Translation Vector (MTV) computed with the
Separating Axis Theorem.

```
use mtv2d::math::Vector;
use mtv2d::query::{self, CollisionSettings};
use mtv2d::shape::{Rect, Shape};

let a = Shape::Rect(Rect::new(0.0, 0.0, 10.0, 10.0));
let b = Shape::Rect(Rect::new(5.0, 0.0, 10.0, 10.0));
let direction = Vector::new(5.0, 0.0);

let mtv = query::collision(&a, &b, &direction, &CollisionSettings::default()).unwrap();
assert_eq!(mtv, Vector::new(-5.0, 0.0));
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(not(feature = "f32"))]
    pub use f64 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point2, Rotation2, Vector2, Vector3};

    /// The point type.
    pub type Point = Point2<Real>;

    /// The vector type.
    ///
    /// Every vector operation returns a new value.
    pub type Vector = Vector2<Real>;

    /// The rotation matrix type.
    pub type Rotation = Rotation2<Real>;
}
