use mtv2d::math::{Point, Vector};
use mtv2d::query::{self, CollisionSettings};
use mtv2d::shape::{Polygon, Rect, Shape};

fn main() {
    let settings = CollisionSettings::default();
    let l_shape = Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(6.0, 0.0),
        Point::new(6.0, 2.0),
        Point::new(2.0, 2.0),
        Point::new(2.0, 6.0),
        Point::new(0.0, 6.0),
    ]);
    assert!(!l_shape.is_convex());

    // In the inner corner of the L: no collision, although the bounds overlap.
    let box_in_corner = Rect::new(3.0, 3.0, 2.0, 2.0);
    let direction = box_in_corner.center() - l_shape.center();
    let mtv = query::collision(
        &Shape::from(box_in_corner),
        &Shape::from(l_shape.clone()),
        &-direction,
        &settings,
    );
    assert!(mtv == Ok(Vector::zeros()));

    // Sinking into the horizontal arm, which lies below the box.
    let sinking = box_in_corner.translated(&Vector::new(0.0, -1.5));
    let mtv = sinking
        .collision(&Shape::from(l_shape), &Vector::new(0.0, -1.0), &settings)
        .expect("Solid shapes always collide.");
    assert!(mtv.y > 0.0);
}
