use mtv2d::math::Vector;
use mtv2d::shape::Rect;

fn main() {
    let room = Rect::new(0.0, 0.0, 320.0, 240.0);
    let player = Rect::new(0.0, 0.0, 16.0, 16.0);
    let mut position = Vector::new(300.0, 100.0);
    let velocity = Vector::new(8.0, -4.0);

    for _ in 0..10 {
        let next = position + velocity;
        let hint = room.containment(&next, &player);

        // Cancel the motion along the axes on which the player would leave the room.
        position += Vector::new(
            if hint.x == 0.0 { velocity.x } else { 0.0 },
            if hint.y == 0.0 { velocity.y } else { 0.0 },
        );
    }

    assert!(room.contains_rect(&player.translated(&position)));
}
