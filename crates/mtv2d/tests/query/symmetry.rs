use approx::assert_relative_eq;
use mtv2d::math::{Point, Real, Vector};
use mtv2d::query::{self, CollisionSettings};
use mtv2d::shape::{Polygon, Rect, Shape};

fn random_shape(rng: &mut oorandom::Rand64) -> Shape {
    let center = Point::new(rng.rand_float() as Real * 20.0, rng.rand_float() as Real * 20.0);
    let size = 1.0 + rng.rand_float() as Real * 8.0;

    if rng.rand_range(0..2) == 0 {
        let height = 1.0 + rng.rand_float() as Real * 8.0;
        Shape::from(Rect::new(center.x, center.y, size, height))
    } else {
        let n = rng.rand_range(3..8) as usize;
        let phase = rng.rand_float() as Real;
        Shape::from(Polygon::new(
            (0..n)
                .map(|k| {
                    let angle =
                        phase + k as Real * 2.0 * core::f64::consts::PI as Real / n as Real;
                    center + Vector::new(angle.cos(), angle.sin()) * size
                })
                .collect(),
        ))
    }
}

#[test]
fn detection_is_symmetric() {
    let mut rng = oorandom::Rand64::new(1234);
    let settings = CollisionSettings::default();
    let mut num_collisions = 0;

    for _ in 0..500 {
        let a = random_shape(&mut rng);
        let b = random_shape(&mut rng);
        let direction = b.center() - a.center();

        let ab = query::collision(&a, &b, &direction, &settings).unwrap();
        let ba = query::collision(&b, &a, &-direction, &settings).unwrap();

        assert_eq!(ab == Vector::zeros(), ba == Vector::zeros());
        assert_relative_eq!(ab.norm(), ba.norm(), epsilon = 1.0e-6);

        if ab != Vector::zeros() {
            num_collisions += 1;
        }
    }

    // Make sure the shapes are dense enough for the test to be meaningful.
    assert!(num_collisions > 50);
}
