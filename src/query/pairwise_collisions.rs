use crate::math::Vector;
use crate::query::{collision, CollisionSettings};
use crate::shape::Shape;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A collision found by [`pairwise_collisions`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PairwiseCollision {
    /// Index of the shape to move.
    pub first: usize,
    /// Index of the shape it collides with.
    pub second: usize,
    /// The translation to apply to the shape at index `first`.
    pub mtv: Vector,
}

/// Tests every pair of `shapes` and returns the colliding ones.
///
/// Each pair is tested once. The direction hint of each test is the vector between the
/// centers of the bounding rectangles of both shapes. When a solid collides with a line
/// segment or a poly-chain, the solid is always the `first` shape of the pair. Pairs of
/// boundary shapes are skipped.
///
/// With the `parallel` feature, the pairs are tested on the rayon thread pool. The order of
/// the results does not depend on it.
pub fn pairwise_collisions(
    shapes: &[Shape],
    settings: &CollisionSettings,
) -> Vec<PairwiseCollision> {
    #[cfg(feature = "parallel")]
    let result = (0..shapes.len())
        .into_par_iter()
        .flat_map_iter(|i| collisions_with_followers(shapes, i, settings))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let result = (0..shapes.len())
        .flat_map(|i| collisions_with_followers(shapes, i, settings))
        .collect();

    result
}

fn collisions_with_followers<'a>(
    shapes: &'a [Shape],
    i: usize,
    settings: &'a CollisionSettings,
) -> impl Iterator<Item = PairwiseCollision> + 'a {
    (i + 1..shapes.len()).filter_map(move |j| pair_collision(shapes, i, j, settings))
}

fn pair_collision(
    shapes: &[Shape],
    i: usize,
    j: usize,
    settings: &CollisionSettings,
) -> Option<PairwiseCollision> {
    let (first, second) = if shapes[i].is_boundary() && !shapes[j].is_boundary() {
        (j, i)
    } else {
        (i, j)
    };

    let direction = shapes[second].center() - shapes[first].center();

    match collision(&shapes[first], &shapes[second], &direction, settings) {
        Ok(mtv) if mtv != Vector::zeros() => Some(PairwiseCollision {
            first,
            second,
            mtv,
        }),
        Ok(_) => None,
        Err(err) => {
            log::trace!("Skipping shapes {} and {}: {}", first, second, err);
            None
        }
    }
}
