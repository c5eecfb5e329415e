use mtv2d::math::{Point, Vector};
use mtv2d::query::{self, details, CollisionSettings};
use mtv2d::shape::{LineSegment, PolyChain, Polygon, Rect, Shape};
use mtv2d::utils::Orientation;

fn floor(orientation: Orientation) -> LineSegment {
    LineSegment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), orientation)
}

fn dented_square() -> Polygon {
    Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(2.0, 2.0),
        Point::new(4.0, 4.0),
        Point::new(0.0, 4.0),
    ])
}

#[test]
fn mtv_follows_the_segment_normal() {
    let floor = floor(Orientation::Cw);
    let rect = Shape::from(Rect::new(2.0, -8.0, 4.0, 10.0));
    let settings = CollisionSettings::default();

    let mtv = floor.collision(&rect, &settings).unwrap();
    assert_eq!(mtv, Vector::new(0.0, -2.0));
    // Parallel to the normal, never along the rectangle axes picked by SAT.
    assert_eq!(mtv.perp(&floor.normal()), 0.0);
    assert!(mtv.dot(&floor.normal()) > 0.0);
}

#[test]
fn argument_order_and_direction_do_not_matter() {
    let floor = Shape::from(floor(Orientation::Cw));
    let rect = Shape::from(Rect::new(2.0, -8.0, 4.0, 10.0));
    let settings = CollisionSettings::default();

    let expected = Vector::new(0.0, -2.0);
    for direction in [Vector::x(), Vector::y(), -Vector::y(), Vector::zeros()] {
        assert_eq!(query::collision(&rect, &floor, &direction, &settings), Ok(expected));
        assert_eq!(query::collision(&floor, &rect, &direction, &settings), Ok(expected));
    }
}

#[test]
fn counter_clockwise_segments_push_the_other_way() {
    let ceiling = floor(Orientation::Ccw);
    let rect = Shape::from(Rect::new(2.0, -8.0, 4.0, 10.0));

    let mtv = ceiling.collision(&rect, &CollisionSettings::default()).unwrap();
    assert_eq!(mtv, Vector::new(0.0, 8.0));
}

#[test]
fn shapes_on_the_front_side_are_left_alone() {
    let floor = floor(Orientation::Cw);
    let settings = CollisionSettings::default();

    // Resting exactly on the segment.
    let resting = Shape::from(Rect::new(2.0, -4.0, 4.0, 4.0));
    assert_eq!(floor.collision(&resting, &settings), Ok(Vector::zeros()));

    // Barely crossing it.
    let grazing = Shape::from(Rect::new(2.0, -4.0, 4.0, 4.005));
    assert_eq!(floor.collision(&grazing, &settings), Ok(Vector::zeros()));
}

#[test]
fn shapes_beyond_the_endpoints_are_left_alone() {
    let floor = floor(Orientation::Cw);
    let rect = Shape::from(Rect::new(12.0, -1.0, 4.0, 2.0));
    assert_eq!(floor.collision(&rect, &CollisionSettings::default()), Ok(Vector::zeros()));
}

#[test]
fn polygons_are_pushed_out_too() {
    let floor = floor(Orientation::Cw);
    let diamond = Polygon::new(vec![
        Point::new(5.0, -3.0),
        Point::new(7.0, -1.0),
        Point::new(5.0, 1.0),
        Point::new(3.0, -1.0),
    ]);

    let mtv = diamond
        .collision(&Shape::from(floor), &Vector::zeros(), &CollisionSettings::default())
        .unwrap();
    assert_eq!(mtv, Vector::new(0.0, -1.0));

    let moved = diamond.translated(&mtv);
    assert_eq!(
        details::collision_segment_shape(&floor, &Shape::from(moved), &CollisionSettings::default()),
        Ok(Vector::zeros())
    );
}

#[test]
fn slanted_walls() {
    let wall = LineSegment::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0), Orientation::Cw);
    let rect = Shape::from(Rect::new(4.0, 3.0, 2.0, 2.0));

    let mtv = wall.collision(&rect, &CollisionSettings::default()).unwrap();
    assert!(mtv.norm() > 0.0);
    approx::assert_relative_eq!(mtv.normalize(), wall.normal(), epsilon = 1.0e-6);
}

#[test]
fn segments_in_the_dent_of_a_concave_polygon_do_not_collide() {
    let poly = dented_square();
    let in_dent = LineSegment::new(Point::new(3.5, 1.5), Point::new(3.5, 2.5), Orientation::Cw);
    let settings = CollisionSettings::default();

    // The convex hull of the polygon would be pushed out.
    assert!(poly.aabb().contains_rect(&in_dent.aabb()));

    let shape = Shape::from(poly.clone());
    assert_eq!(in_dent.collision(&shape, &settings), Ok(Vector::zeros()));

    let chain = PolyChain::from_segments([in_dent]);
    assert_eq!(chain.collision(&shape, &settings), Ok(Vector::zeros()));

    for direction in [Vector::x(), -Vector::x(), Vector::zeros()] {
        assert_eq!(
            poly.collision(&Shape::from(in_dent), &direction, &settings),
            Ok(Vector::zeros())
        );
        assert_eq!(
            poly.collision(&Shape::from(chain.clone()), &direction, &settings),
            Ok(Vector::zeros())
        );
    }
}

#[test]
fn segments_crossing_the_body_of_a_concave_polygon_collide() {
    let poly = Shape::from(dented_square());
    let floor = LineSegment::new(Point::new(0.0, 1.0), Point::new(1.0, 1.0), Orientation::Cw);
    let settings = CollisionSettings::default();

    let mtv = floor.collision(&poly, &settings).unwrap();
    assert_eq!(mtv.x, 0.0);
    assert!(mtv.y < 0.0);

    let chain = PolyChain::from_segments([floor]);
    assert_eq!(chain.collision(&poly, &settings), Ok(mtv));
}
