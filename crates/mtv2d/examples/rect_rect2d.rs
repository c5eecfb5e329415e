use mtv2d::math::Vector;
use mtv2d::query::CollisionSettings;
use mtv2d::shape::Rect;

fn main() {
    let settings = CollisionSettings::default();
    let player = Rect::new(0.0, 0.0, 10.0, 10.0);
    let crate_ = Rect::new(5.0, 0.0, 10.0, 10.0);
    let direction = crate_.center() - player.center();

    let mtv = player.collision_rect(&crate_, &direction, &settings);
    assert!(mtv == Vector::new(-5.0, 0.0));

    let resolved = player.translated(&mtv);
    assert!(resolved.collision_rect(&crate_, &direction, &settings) == Vector::zeros());
}
