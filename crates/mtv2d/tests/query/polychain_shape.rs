use mtv2d::math::{Point, Vector};
use mtv2d::query::{self, CollisionSettings};
use mtv2d::shape::{PolyChain, Rect, Shape};
use mtv2d::utils::Orientation;

fn corner() -> PolyChain {
    // A floor and a wall meeting at `(10, 0)`, both pushing toward the bottom-left.
    PolyChain::from_vertices(
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, -10.0),
        ],
        Orientation::Cw,
    )
}

#[test]
fn corrections_of_all_segments_add_up() {
    let chain = corner();
    let rect = Shape::from(Rect::new(8.0, -3.0, 4.0, 4.0));

    let mtv = chain.collision(&rect, &CollisionSettings::default()).unwrap();
    assert_eq!(mtv, Vector::new(-2.0, -1.0));
}

#[test]
fn only_touched_segments_contribute() {
    let chain = corner();
    let rect = Shape::from(Rect::new(2.0, -3.0, 2.0, 4.0));

    let mtv = query::collision(&rect, &Shape::from(chain), &Vector::x(), &CollisionSettings::default())
        .unwrap();
    assert_eq!(mtv, Vector::new(0.0, -1.0));
}

#[test]
fn empty_chains_never_collide() {
    let rect = Shape::from(Rect::new(0.0, 0.0, 4.0, 4.0));
    assert_eq!(
        PolyChain::new().collision(&rect, &CollisionSettings::default()),
        Ok(Vector::zeros())
    );
}

#[test]
fn reversed_chains_push_the_same_way() {
    let mut chain = corner();
    chain.reverse();
    let rect = Shape::from(Rect::new(8.0, -3.0, 4.0, 4.0));

    let mtv = chain.collision(&rect, &CollisionSettings::default()).unwrap();
    approx::assert_relative_eq!(mtv, Vector::new(-2.0, -1.0));
}
