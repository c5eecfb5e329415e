use crate::math::{Point, Real, Rotation, Vector};
use crate::query::{self, CollisionError, CollisionSettings, CoordinateSystem};
use crate::shape::{LineSegment, Rect, Shape};
use crate::utils::Orientation;

/// One link of a poly-chain: two indices into the vertex buffer and the normal side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
struct Link {
    ids: [u32; 2],
    normal_orientation: Orientation,
}

/// A chain of connected one-sided line segments.
///
/// All the segments share a single vertex buffer: the end of a segment is the start of the
/// next one and is stored only once. The chain may be open or closed.
///
/// Like a single [`LineSegment`], a poly-chain is a boundary: each of its segments
/// independently pushes other shapes out along its own normal, and the corrections of all
/// the segments add up.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PolyChain {
    vertices: Vec<Point>,
    links: Vec<Link>,
}

impl PolyChain {
    /// Creates an empty poly-chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an open chain through all the given points.
    ///
    /// All the segments have normals rotated toward `normal_orientation`.
    pub fn from_vertices(vertices: Vec<Point>, normal_orientation: Orientation) -> Self {
        let links = (1..vertices.len() as u32)
            .map(|i| Link {
                ids: [i - 1, i],
                normal_orientation,
            })
            .collect();

        Self { vertices, links }
    }

    /// Creates a chain from a sequence of segments, bridging the gaps between them.
    ///
    /// See [`PolyChain::push_segment`].
    pub fn from_segments(segments: impl IntoIterator<Item = LineSegment>) -> Self {
        let mut result = Self::new();

        for segment in segments {
            result.push_segment(segment);
        }

        result
    }

    /// The number of segments forming this chain.
    #[inline]
    pub fn num_segments(&self) -> usize {
        self.links.len()
    }

    /// Is this chain free of any segment?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// The vertex buffer of this chain.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The index buffer of this chain: one pair of vertex indices per segment.
    pub fn indices(&self) -> impl ExactSizeIterator<Item = [u32; 2]> + '_ {
        self.links.iter().map(|link| link.ids)
    }

    /// Get the `i`-th segment of this chain.
    pub fn segment(&self, i: usize) -> Option<LineSegment> {
        self.links.get(i).map(|link| self.link_segment(link))
    }

    /// An iterator through all the segments of this chain.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = LineSegment> + '_ {
        self.links.iter().map(move |link| self.link_segment(link))
    }

    fn link_segment(&self, link: &Link) -> LineSegment {
        LineSegment::new(
            self.vertices[link.ids[0] as usize],
            self.vertices[link.ids[1] as usize],
            link.normal_orientation,
        )
    }

    fn last_vertex_id(&self) -> Option<u32> {
        match self.links.last() {
            Some(link) => Some(link.ids[1]),
            None => self.vertices.len().checked_sub(1).map(|i| i as u32),
        }
    }

    fn push_link(&mut self, from: u32, to: Point, normal_orientation: Orientation) -> u32 {
        let id = self.vertices.len() as u32;
        self.vertices.push(to);
        self.links.push(Link {
            ids: [from, id],
            normal_orientation,
        });
        id
    }

    /// Extends the chain with a segment from its last vertex to `pt`.
    ///
    /// If the chain has no vertex yet, `pt` becomes its starting point.
    pub fn push_point(&mut self, pt: Point, normal_orientation: Orientation) {
        match self.last_vertex_id() {
            Some(last) => {
                let _ = self.push_link(last, pt, normal_orientation);
            }
            None => self.vertices.push(pt),
        }
    }

    /// Appends a segment to the chain.
    ///
    /// If `segment.a` is not the current end of the chain, a bridging segment from the end of
    /// the chain to `segment.a` is inserted first, with the same normal orientation as
    /// `segment`.
    pub fn push_segment(&mut self, segment: LineSegment) {
        let orientation = segment.normal_orientation;

        let start = match self.last_vertex_id() {
            Some(last) if self.vertices[last as usize] == segment.a => last,
            Some(last) => {
                log::trace!(
                    "Bridging a poly-chain gap from {:?} to {:?}.",
                    self.vertices[last as usize],
                    segment.a
                );
                self.push_link(last, segment.a, orientation)
            }
            None => {
                self.vertices.push(segment.a);
                0
            }
        };

        let _ = self.push_link(start, segment.b, orientation);
    }

    /// Closes the chain with a segment from its last vertex back to its first one.
    ///
    /// Does nothing if the chain is already closed or has less than two vertices.
    pub fn close(&mut self, normal_orientation: Orientation) {
        let Some(last) = self.last_vertex_id() else {
            return;
        };

        if last != 0 && self.vertices[last as usize] != self.vertices[0] {
            self.links.push(Link {
                ids: [last, 0],
                normal_orientation,
            });
        }
    }

    /// Reverses the order of the segments and of their endpoints, keeping all the normals
    /// on the same side.
    pub fn reverse(&mut self) {
        for link in &mut self.links {
            link.ids.swap(0, 1);
            link.normal_orientation = link.normal_orientation.reversed();
        }

        self.links.reverse();
    }

    /// The axis-aligned bounding rectangle of this chain, or `None` if it has no vertex.
    pub fn aabb(&self) -> Option<Rect> {
        let (first, rest) = self.vertices.split_first()?;
        let (mins, maxs) = rest
            .iter()
            .fold((*first, *first), |(mins, maxs), pt| (mins.inf(pt), maxs.sup(pt)));
        Some(Rect::from_corners(mins, maxs))
    }

    /// Computes the translation to apply to `other` to push it out of every segment.
    ///
    /// See [`query::details::collision_polychain_shape`].
    pub fn collision(
        &self,
        other: &Shape,
        settings: &CollisionSettings,
    ) -> Result<Vector, CollisionError> {
        query::details::collision_polychain_shape(self, other, settings)
    }

    /// Returns a copy of this chain moved by `shift`.
    #[must_use]
    pub fn translated(&self, shift: &Vector) -> Self {
        self.map_vertices(|pt| pt + shift)
    }

    /// Returns a copy of this chain with its vertices scaled by `scale` relative to the
    /// origin.
    #[must_use]
    pub fn scaled(&self, scale: &Vector) -> Self {
        self.map_vertices(|pt| Point::from(pt.coords.component_mul(scale)))
    }

    /// Returns a copy of this chain rotated by `angle` radians around `center`.
    #[must_use]
    pub fn rotated(&self, angle: Real, center: &Point, system: CoordinateSystem) -> Self {
        let rot = Rotation::new(system.signed_angle(angle));
        self.map_vertices(|pt| center + rot * (pt - center))
    }

    fn map_vertices(&self, f: impl Fn(&Point) -> Point) -> Self {
        Self {
            vertices: self.vertices.iter().map(f).collect(),
            links: self.links.clone(),
        }
    }
}
