//! Definition of the polygon shape.

use crate::math::{Point, Real, Rotation, Vector};
use crate::query::{self, CollisionError, CollisionSettings, CoordinateSystem};
use crate::shape::ear_clipping::{signed_area2, triangulate_ear_clipping};
use crate::shape::{Rect, SatShape, SeparatingAxes, Shape};
use crate::utils::{self, Interval, Orientation, VectorOps};

/// Whether a polygon is convex.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Convexity {
    /// All the corners turn the same way.
    Convex,
    /// At least one corner turns the other way.
    Concave,
}

/// The axis-aligned bounds of a polygon, and the vertices attaining them.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
struct Bounds {
    mins: Point,
    maxs: Point,
    min_vertex: usize,
    max_vertex: usize,
}

/// A closed polygon: the last vertex is implicitly connected to the first one.
///
/// Edges, normals, bounds, convexity and the convex decomposition are derived from the
/// vertex list. They are recomputed every time the vertex list changes so reading them is
/// always cheap, and a `Polygon` has no interior mutability.
///
/// The separating-axis test is only exact for convex polygons. Concave polygons are split
/// into triangles with ear clipping and each triangle is tested on its own.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Polygon {
    vertices: Vec<Point>,
    edges: Vec<Vector>,
    normals: Vec<Vector>,
    bounds: Option<Bounds>,
    convexity: Convexity,
    convex_parts: Vec<[u32; 3]>,
}

impl Polygon {
    /// Builds a new polygon from its vertices.
    ///
    /// `vertices[i]` and `vertices[i + 1]` form the `i`-th edge, and the last edge goes from
    /// the last vertex back to the first. Both windings are accepted, and degenerate inputs
    /// (less than three vertices, duplicate vertices) are accepted too: they just yield
    /// polygons that collide with nothing, or with fewer separating axes.
    pub fn new(vertices: Vec<Point>) -> Self {
        let mut result = Self {
            vertices,
            edges: Vec::new(),
            normals: Vec::new(),
            bounds: None,
            convexity: Convexity::Convex,
            convex_parts: Vec::new(),
        };
        result.update_derived_data();
        result
    }

    /// Appends a vertex at the end of the loop.
    pub fn push_vertex(&mut self, vertex: Point) {
        self.vertices.push(vertex);
        self.update_derived_data();
    }

    /// Appends several vertices at the end of the loop.
    pub fn extend_vertices(&mut self, vertices: impl IntoIterator<Item = Point>) {
        self.vertices.extend(vertices);
        self.update_derived_data();
    }

    fn update_derived_data(&mut self) {
        let n = self.vertices.len();

        self.edges = (0..n)
            .map(|i| self.vertices[(i + 1) % n] - self.vertices[i])
            .collect();
        self.normals = self.edges.iter().map(|e| e.normal(Orientation::Cw)).collect();
        self.bounds = compute_bounds(&self.vertices);
        self.convexity = compute_convexity(&self.edges);
        self.convex_parts = match self.convexity {
            Convexity::Convex => Vec::new(),
            Convexity::Concave => decompose(&self.vertices),
        };
    }

    /// The vertices of this polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The edge vectors: `edges()[i]` goes from `vertices()[i]` to the next vertex.
    #[inline]
    pub fn edges(&self) -> &[Vector] {
        &self.edges
    }

    /// The unit edge normals, obtained by rotating each edge clockwise.
    ///
    /// Zero-length edges have a zero normal.
    #[inline]
    pub fn normals(&self) -> &[Vector] {
        &self.normals
    }

    /// The component-wise minimum of the vertices, or NaN if the polygon is empty.
    #[inline]
    pub fn mins(&self) -> Point {
        self.bounds
            .map(|b| b.mins)
            .unwrap_or_else(|| Point::new(Real::NAN, Real::NAN))
    }

    /// The component-wise maximum of the vertices, or NaN if the polygon is empty.
    #[inline]
    pub fn maxs(&self) -> Point {
        self.bounds
            .map(|b| b.maxs)
            .unwrap_or_else(|| Point::new(Real::NAN, Real::NAN))
    }

    /// The center of the bounds of this polygon.
    #[inline]
    pub fn center(&self) -> Point {
        na::center(&self.mins(), &self.maxs())
    }

    /// The vertex with the smallest `x` (then smallest `y`).
    #[inline]
    pub fn min_vertex(&self) -> Option<Point> {
        self.bounds.map(|b| self.vertices[b.min_vertex])
    }

    /// The vertex with the greatest `x` (then greatest `y`).
    #[inline]
    pub fn max_vertex(&self) -> Option<Point> {
        self.bounds.map(|b| self.vertices[b.max_vertex])
    }

    /// The axis-aligned bounding rectangle of this polygon.
    pub fn aabb(&self) -> Rect {
        Rect::from_corners(self.mins(), self.maxs())
    }

    /// Whether this polygon is convex.
    #[inline]
    pub fn convexity(&self) -> Convexity {
        self.convexity
    }

    /// Is this polygon convex?
    #[inline]
    pub fn is_convex(&self) -> bool {
        self.convexity == Convexity::Convex
    }

    /// Convex pieces covering this polygon.
    ///
    /// A convex polygon is its own single piece. A concave polygon is split into triangles;
    /// if it cannot be triangulated (e.g. it self-intersects) it is returned whole.
    pub fn convex_parts(&self) -> Vec<Polygon> {
        if self.convex_parts.is_empty() {
            vec![self.clone()]
        } else {
            self.convex_parts
                .iter()
                .map(|tri| Polygon::new(tri.iter().map(|i| self.vertices[*i as usize]).collect()))
                .collect()
        }
    }

    /// Does this polygon contain `pt`?
    pub fn contains_point(&self, pt: &Point) -> bool {
        utils::point_in_poly2d(pt, &self.vertices)
    }

    /// Computes the translation to apply to `self` to separate it from `other`.
    ///
    /// See [`query::details::collision_polygon_polygon`].
    pub fn collision_polygon(
        &self,
        other: &Polygon,
        direction: &Vector,
        settings: &CollisionSettings,
    ) -> Vector {
        query::details::collision_polygon_polygon(self, other, direction, settings)
    }

    /// Computes the translation separating `self` from any other shape.
    ///
    /// See [`query::collision`].
    pub fn collision(
        &self,
        other: &Shape,
        direction: &Vector,
        settings: &CollisionSettings,
    ) -> Result<Vector, CollisionError> {
        query::details::collision_polygon_shape(self, other, direction, settings)
    }

    /// Returns a copy of this polygon moved by `shift`.
    #[must_use]
    pub fn translated(&self, shift: &Vector) -> Self {
        self.map_vertices(|pt| pt + shift)
    }

    /// Returns a copy of this polygon with its vertices scaled by `scale` relative to the
    /// origin.
    #[must_use]
    pub fn scaled(&self, scale: &Vector) -> Self {
        self.map_vertices(|pt| Point::from(pt.coords.component_mul(scale)))
    }

    /// Returns a copy of this polygon rotated by `angle` radians around `center`.
    #[must_use]
    pub fn rotated(&self, angle: Real, center: &Point, system: CoordinateSystem) -> Self {
        let rot = Rotation::new(system.signed_angle(angle));
        self.map_vertices(|pt| center + rot * (pt - center))
    }

    fn map_vertices(&self, f: impl Fn(&Point) -> Point) -> Self {
        Self::new(self.vertices.iter().map(f).collect())
    }
}

impl From<Rect> for Polygon {
    fn from(rect: Rect) -> Self {
        rect.to_polygon()
    }
}

impl SatShape for Polygon {
    #[inline]
    fn project(&self, axis: &Vector) -> Interval {
        Interval::from_projection(axis, &self.vertices)
    }

    fn separating_axes(&self) -> SeparatingAxes {
        self.normals
            .iter()
            .filter(|n| n.x != 0.0 || n.y != 0.0)
            .copied()
            .collect()
    }
}

fn compute_bounds(vertices: &[Point]) -> Option<Bounds> {
    let first = vertices.first()?;
    let mut bounds = Bounds {
        mins: *first,
        maxs: *first,
        min_vertex: 0,
        max_vertex: 0,
    };

    for (i, pt) in vertices.iter().enumerate().skip(1) {
        bounds.mins = bounds.mins.inf(pt);
        bounds.maxs = bounds.maxs.sup(pt);

        let lowest = &vertices[bounds.min_vertex];
        if pt.x < lowest.x || (pt.x == lowest.x && pt.y < lowest.y) {
            bounds.min_vertex = i;
        }

        let greatest = &vertices[bounds.max_vertex];
        if pt.x > greatest.x || (pt.x == greatest.x && pt.y > greatest.y) {
            bounds.max_vertex = i;
        }
    }

    Some(bounds)
}

/// A polygon is convex if the cross products of consecutive edges never change sign.
/// Collinear edges are ignored.
fn compute_convexity(edges: &[Vector]) -> Convexity {
    let n = edges.len();
    let mut sign = 0.0;

    for i in 0..n {
        let cross = edges[i].perp(&edges[(i + 1) % n]);

        if cross == 0.0 || cross.is_nan() {
            continue;
        }

        if sign == 0.0 {
            sign = cross.signum();
        } else if sign != cross.signum() {
            return Convexity::Concave;
        }
    }

    Convexity::Convex
}

fn decompose(vertices: &[Point]) -> Vec<[u32; 3]> {
    let triangles = if signed_area2(vertices) >= 0.0 {
        triangulate_ear_clipping(vertices)
    } else {
        // Ear clipping wants a counter-clockwise loop: triangulate the reversed loop and map
        // the indices back.
        let last = vertices.len() as u32 - 1;
        let reversed: Vec<_> = vertices.iter().rev().copied().collect();
        triangulate_ear_clipping(&reversed)
            .map(|tris| tris.into_iter().map(|t| t.map(|i| last - i)).collect())
    };

    triangles.unwrap_or_else(|| {
        log::debug!(
            "Failed to triangulate a concave polygon with {} vertices, using its vertex loop as is.",
            vertices.len()
        );
        Vec::new()
    })
}
