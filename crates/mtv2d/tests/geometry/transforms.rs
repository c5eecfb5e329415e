use approx::assert_relative_eq;
use mtv2d::math::{Point, Real, Vector};
use mtv2d::query::CoordinateSystem;
use mtv2d::shape::{LineSegment, PolyChain, Polygon, Rect, Shape, ShapeType};
use mtv2d::utils::Orientation;

fn random_polygon(rng: &mut oorandom::Rand64) -> Polygon {
    let n = rng.rand_range(3..10) as usize;
    let center = Point::new(rng.rand_float() as Real * 100.0, rng.rand_float() as Real * 100.0);
    let radius = 1.0 + rng.rand_float() as Real * 10.0;
    let phase = rng.rand_float() as Real;

    Polygon::new(
        (0..n)
            .map(|k| {
                let angle = phase + k as Real * 2.0 * core::f64::consts::PI as Real / n as Real;
                center + Vector::new(angle.cos(), angle.sin()) * radius
            })
            .collect(),
    )
}

#[test]
fn translation_round_trip() {
    let mut rng = oorandom::Rand64::new(42);

    for _ in 0..100 {
        let poly = random_polygon(&mut rng);
        let original = poly.clone();
        let shift = Vector::new(
            rng.rand_float() as Real * 50.0 - 25.0,
            rng.rand_float() as Real * 50.0 - 25.0,
        );

        let moved = poly.translated(&shift);
        // The original polygon does not share its vertex buffer with the copy.
        assert_eq!(poly, original);

        let back = moved.translated(&-shift);
        for (a, b) in back.vertices().iter().zip(original.vertices()) {
            assert_relative_eq!(a, b, epsilon = 1.0e-9);
        }
        assert_relative_eq!(back.center(), original.center(), epsilon = 1.0e-9);
    }
}

#[test]
fn shapes_translate_as_a_whole() {
    let shift = Vector::new(3.0, -4.0);
    let shapes = [
        Shape::from(Rect::new(0.0, 0.0, 1.0, 1.0)),
        Shape::from(Rect::new(0.0, 0.0, 2.0, 1.0).to_polygon()),
        Shape::from(LineSegment::new(Point::origin(), Point::new(1.0, 1.0), Orientation::Cw)),
        Shape::from(PolyChain::from_vertices(
            vec![Point::origin(), Point::new(1.0, 0.0), Point::new(1.0, 1.0)],
            Orientation::Cw,
        )),
    ];

    for shape in &shapes {
        let moved = shape.translated(&shift);
        assert_eq!(moved.shape_type(), shape.shape_type());
        assert_relative_eq!(moved.center(), shape.center() + shift);
    }
}

#[test]
fn rotating_a_rect_gives_a_polygon() {
    let rect = Shape::from(Rect::new(-1.0, -1.0, 2.0, 2.0));
    let rotated = rect.rotated(
        core::f64::consts::FRAC_PI_4 as Real,
        &Point::origin(),
        CoordinateSystem::Rhs,
    );

    assert_eq!(rotated.shape_type(), ShapeType::Polygon);
    let aabb = rotated.aabb();
    assert_relative_eq!(aabb.width, (8.0 as Real).sqrt(), epsilon = 1.0e-6);
    assert_relative_eq!(aabb.center(), Point::origin(), epsilon = 1.0e-6);
}

#[test]
fn rotating_a_segment_rotates_its_normal() {
    let seg = LineSegment::new(Point::new(0.0, 0.0), Point::new(2.0, 0.0), Orientation::Ccw);
    let half_turn = core::f64::consts::PI as Real;

    let rotated = seg.rotated(half_turn, &Point::new(1.0, 0.0), CoordinateSystem::Rhs);
    assert_relative_eq!(rotated.a, Point::new(2.0, 0.0), epsilon = 1.0e-6);
    assert_relative_eq!(rotated.normal(), -seg.normal(), epsilon = 1.0e-6);
}

#[test]
fn scaling() {
    let poly = Rect::new(1.0, 1.0, 1.0, 1.0).to_polygon();
    let scaled = poly.scaled(&Vector::new(2.0, 3.0));
    assert_eq!(scaled.aabb(), Rect::new(2.0, 3.0, 2.0, 3.0));

    let rect = Shape::from(Rect::new(1.0, 1.0, 1.0, 1.0)).scaled(&Vector::new(2.0, 3.0));
    assert_eq!(rect, Shape::from(Rect::new(2.0, 3.0, 2.0, 3.0)));
}
