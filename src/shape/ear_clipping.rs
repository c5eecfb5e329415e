use crate::math::{Point, Real};

/// How a path turns at a corner.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Turn {
    /// Counter-clockwise.
    Left,
    /// Clockwise.
    Right,
    /// Neither (a straight line).
    Straight,
}

/// Returns how the path `p1 -> p2 -> p3` turns at `p2`, or `None` if a coordinate is NaN.
fn turn(p1: &Point, p2: &Point, p3: &Point) -> Option<Turn> {
    let cross = (p2 - p1).perp(&(p3 - p2));

    if cross > 0.0 {
        Some(Turn::Left)
    } else if cross < 0.0 {
        Some(Turn::Right)
    } else if cross == 0.0 {
        Some(Turn::Straight)
    } else {
        None
    }
}

/// Is `p` inside the counter-clockwise triangle `(a, b, c)`, borders included?
fn in_ccw_triangle(p: &Point, a: &Point, b: &Point, c: &Point) -> bool {
    (b - a).perp(&(p - a)) >= 0.0 && (c - b).perp(&(p - b)) >= 0.0 && (a - c).perp(&(p - c)) >= 0.0
}

/// Twice the signed area of the vertex loop: positive for counter-clockwise loops.
pub(crate) fn signed_area2(vertices: &[Point]) -> Real {
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(a, b)| a.coords.perp(&b.coords))
        .sum()
}

/// Ear clipping triangulation of a simple counter-clockwise vertex loop.
///
/// Returns `None` if the loop has less than three vertices, is not counter-clockwise, or is
/// self-intersecting: in all these cases there is a step where no ear can be found.
pub(crate) fn triangulate_ear_clipping(vertices: &[Point]) -> Option<Vec<[u32; 3]>> {
    if vertices.len() < 3 {
        return None;
    }

    let mut remaining: Vec<usize> = (0..vertices.len()).collect();
    let mut triangles = Vec::with_capacity(vertices.len() - 2);

    while remaining.len() > 3 {
        let n = remaining.len();
        // Clip the pointiest ear first, it gives better-shaped triangles.
        let mut best_ear: Option<(usize, Real)> = None;

        for k in 0..n {
            let i_prev = remaining[(k + n - 1) % n];
            let i = remaining[k];
            let i_next = remaining[(k + 1) % n];
            let (p1, p2, p3) = (&vertices[i_prev], &vertices[i], &vertices[i_next]);

            if turn(p1, p2, p3)? != Turn::Left {
                continue;
            }

            let blocked = remaining
                .iter()
                .filter(|&&j| j != i_prev && j != i && j != i_next)
                .any(|&j| in_ccw_triangle(&vertices[j], p1, p2, p3));

            if blocked {
                continue;
            }

            let pointiness = (p1 - p2).normalize().dot(&(p3 - p2).normalize());

            if !pointiness.is_nan() && best_ear.map_or(true, |(_, best)| pointiness > best) {
                best_ear = Some((k, pointiness));
            }
        }

        let (k, _) = best_ear?;
        let i_prev = remaining[(k + n - 1) % n];
        let i_next = remaining[(k + 1) % n];
        triangles.push([i_prev as u32, remaining[k] as u32, i_next as u32]);
        let _ = remaining.remove(k);
    }

    if turn(
        &vertices[remaining[0]],
        &vertices[remaining[1]],
        &vertices[remaining[2]],
    )? == Turn::Left
    {
        triangles.push([remaining[0] as u32, remaining[1] as u32, remaining[2] as u32]);
    }

    Some(triangles)
}
