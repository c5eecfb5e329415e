use mtv2d::math::{Point, Vector};
use mtv2d::shape::{LineSegment, PolyChain, Rect};
use mtv2d::utils::Orientation;

fn staircase() -> PolyChain {
    PolyChain::from_vertices(
        vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(4.0, 2.0),
        ],
        Orientation::Ccw,
    )
}

#[test]
fn segments_follow_the_vertices() {
    let chain = staircase();
    assert_eq!(chain.num_segments(), 3);

    let segments: Vec<_> = chain.segments().collect();
    assert_eq!(segments[0].a, Point::new(0.0, 0.0));
    assert_eq!(segments[2].b, Point::new(4.0, 2.0));
    assert_eq!(segments[0].normal(), Vector::new(0.0, 1.0));
    assert_eq!(segments[1].normal(), Vector::new(-1.0, 0.0));
    assert!(chain.segment(3).is_none());
}

#[test]
fn disconnected_segments_are_bridged() {
    let chain = PolyChain::from_segments([
        LineSegment::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), Orientation::Cw),
        LineSegment::new(Point::new(1.0, 1.0), Point::new(2.0, 1.0), Orientation::Cw),
    ]);

    assert_eq!(chain.num_segments(), 3);
    let bridge = chain.segment(1).unwrap();
    assert_eq!(bridge.a, Point::new(1.0, 0.0));
    assert_eq!(bridge.b, Point::new(1.0, 1.0));
    assert_eq!(bridge.normal_orientation, Orientation::Cw);
}

#[test]
fn aabb_of_chains() {
    assert_eq!(staircase().aabb(), Some(Rect::new(0.0, 0.0, 4.0, 2.0)));
    assert_eq!(PolyChain::new().aabb(), None);
}

#[test]
fn closing_a_chain_twice_is_a_no_op() {
    let mut chain = staircase();
    chain.close(Orientation::Ccw);
    chain.close(Orientation::Ccw);
    assert_eq!(chain.num_segments(), 4);
    assert_eq!(chain.segment(3).unwrap().b, Point::new(0.0, 0.0));
}
