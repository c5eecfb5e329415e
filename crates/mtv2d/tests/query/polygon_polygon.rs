use approx::assert_relative_eq;
use mtv2d::math::{Point, Real, Vector};
use mtv2d::query::{self, CollisionSettings};
use mtv2d::shape::{Polygon, Rect, SatShape, Shape};

fn regular_polygon(center: Point, radius: Real, n: usize, phase: Real) -> Polygon {
    Polygon::new(
        (0..n)
            .map(|k| {
                let angle = phase + k as Real * 2.0 * core::f64::consts::PI as Real / n as Real;
                center + Vector::new(angle.cos(), angle.sin()) * radius
            })
            .collect(),
    )
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
fn disjoint_bounds_never_collide() {
    let mut rng = oorandom::Rand64::new(7);
    let settings = CollisionSettings::default();

    for _ in 0..200 {
        let n1 = rng.rand_range(3..9) as usize;
        let n2 = rng.rand_range(3..9) as usize;
        let r1 = 1.0 + rng.rand_float() as Real * 5.0;
        let r2 = 1.0 + rng.rand_float() as Real * 5.0;
        let a = regular_polygon(Point::origin(), r1, n1, rng.rand_float() as Real);
        let gap = 0.1 + rng.rand_float() as Real;
        let angle = rng.rand_float() as Real * 6.0;
        // Far enough for the bounding boxes to be disjoint whatever the angle.
        let offset = Vector::new(angle.cos(), angle.sin()) * (r1 + r2) * 1.5 + Vector::repeat(gap);
        let b = regular_polygon(Point::from(offset), r2, n2, rng.rand_float() as Real);

        if a.aabb().intersects(&b.aabb()) {
            continue;
        }

        assert_eq!(
            a.collision_polygon(&b, &offset, &settings),
            Vector::zeros()
        );
    }
}

#[test]
fn overlapping_squares() {
    let a = Rect::new(0.0, 0.0, 4.0, 4.0).to_polygon();
    let b = Rect::new(3.0, 1.0, 4.0, 2.0).to_polygon();
    let direction = b.center() - a.center();

    let mtv = a.collision_polygon(&b, &direction, &CollisionSettings::default());
    assert_relative_eq!(mtv, Vector::new(-1.0, 0.0));
    assert!(mtv.dot(&direction) < 0.0);
}

#[test]
fn rotated_squares() {
    let a = Rect::new(-1.0, -1.0, 2.0, 2.0).to_polygon();
    let b = regular_polygon(Point::new(2.0, 0.0), (2.0 as Real).sqrt(), 4, 0.0);
    // `b` is a diamond whose left corner is at `(2 - sqrt(2), 0)`.
    let mtv = a.collision_polygon(&b, &Vector::x(), &CollisionSettings::default());

    assert!(mtv.x < 0.0);
    assert!(mtv.norm() > 0.0 && mtv.norm() <= 1.0);
}

#[test]
fn polygons_inside_polygons_are_pushed_all_the_way_out() {
    let big = regular_polygon(Point::origin(), 10.0, 6, 0.0);
    let small = regular_polygon(Point::new(1.0, 0.5), 1.0, 3, 0.0);
    let settings = CollisionSettings::default();
    let direction = small.center() - big.center();

    let mtv = big.collision_polygon(&small, &direction, &settings);
    assert_ne!(mtv, Vector::zeros());
    // The overlap alone would only be the width of the small polygon.
    assert!(mtv.norm() > small.project(&mtv.normalize()).length());

    let swapped = small.collision_polygon(&big, &-direction, &settings);
    assert_relative_eq!(swapped.norm(), mtv.norm(), epsilon = 1.0e-6);
}

#[test]
fn shapes_in_the_dent_of_a_concave_polygon_do_not_collide() {
    let poly = dented_square();
    let in_dent = Rect::new(3.2, 1.9, 0.6, 0.2);
    let settings = CollisionSettings::default();

    // The convex hull of the polygon would overlap it.
    assert!(poly.aabb().contains_rect(&in_dent));

    let direction = in_dent.center() - poly.center();
    let mtv = poly
        .collision(&Shape::from(in_dent), &direction, &settings)
        .unwrap();
    assert_eq!(mtv, Vector::zeros());

    let mtv = in_dent
        .collision(&Shape::from(poly), &-direction, &settings)
        .unwrap();
    assert_eq!(mtv, Vector::zeros());
}

#[test]
fn concave_polygons_still_collide() {
    let poly = dented_square();
    let rect = Shape::from(Rect::new(-1.0, 1.0, 2.0, 1.0));
    let direction = rect.center() - poly.center();

    let mtv = query::collision(&Shape::from(poly), &rect, &direction, &CollisionSettings::default())
        .unwrap();
    assert_ne!(mtv, Vector::zeros());
    assert!(mtv.dot(&direction) < 0.0);
}

#[test]
fn degenerate_polygons_never_collide() {
    let settings = CollisionSettings::default();
    let square = Rect::new(0.0, 0.0, 4.0, 4.0).to_polygon();
    let empty = Polygon::new(vec![]);
    let single = Polygon::new(vec![Point::new(1.0, 1.0)]);

    assert_eq!(square.collision_polygon(&empty, &Vector::x(), &settings), Vector::zeros());
    assert_eq!(empty.collision_polygon(&square, &Vector::x(), &settings), Vector::zeros());
    assert_eq!(single.collision_polygon(&single, &Vector::x(), &settings), Vector::zeros());
}
