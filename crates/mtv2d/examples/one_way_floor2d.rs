use mtv2d::math::{Point, Vector};
use mtv2d::query::CollisionSettings;
use mtv2d::shape::{LineSegment, PolyChain, Rect, Shape};
use mtv2d::utils::Orientation;

fn main() {
    let settings = CollisionSettings::default();
    // With `y` pointing down, a clockwise normal of a left-to-right segment points up.
    let platform = LineSegment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), Orientation::Cw);
    assert!(platform.normal() == Vector::new(0.0, -1.0));

    // A falling body that sunk 2 units through the platform is pushed back on top of it.
    let body = Shape::from(Rect::new(2.0, -8.0, 4.0, 10.0));
    let mtv = platform
        .collision(&body, &settings)
        .expect("Segments collide with solids.");
    assert!(mtv == Vector::new(0.0, -2.0));

    // Slopes are poly-chains: the corrections of every segment add up.
    let ground = PolyChain::from_vertices(
        vec![
            Point::new(-10.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, -5.0),
        ],
        Orientation::Cw,
    );
    let mtv = ground
        .collision(&body.translated(&mtv), &settings)
        .expect("Chains collide with solids.");
    assert!(mtv.y < 0.0);
}
