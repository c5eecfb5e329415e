use crate::math::Point;

/// Tests if `pt` lies inside the closed vertex loop `poly`, with an even-odd crossing count.
///
/// Works for convex and concave loops of either winding. The last vertex is implicitly
/// connected to the first one.
pub fn point_in_poly2d(pt: &Point, poly: &[Point]) -> bool {
    let mut inside = false;

    for (i, a) in poly.iter().enumerate() {
        let b = &poly[(i + 1) % poly.len()];

        if (a.y > pt.y) != (b.y > pt.y) {
            let x_at_y = a.x + (pt.y - a.y) * (b.x - a.x) / (b.y - a.y);

            if pt.x < x_at_y {
                inside = !inside;
            }
        }
    }

    inside
}
