use crate::math::{Point, Real, Vector};
use approx::{AbsDiffEq, RelativeEq};

/// The projection `[min, max]` of a shape onto an axis.
///
/// An interval is a *line* when neither bound is NaN, and a *point* when it is a line with
/// `min == max`. An interval with a NaN bound represents "no range at all" and is returned
/// by [`Interval::overlap`] when two projections do not overlap.
///
/// Bounds are not required to be ordered: [`Interval::length`] and
/// [`Interval::mid_point`] are symmetric, and [`Interval::overlap`] does not rely on the
/// ordering either.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Interval {
    /// The first bound of the interval.
    pub min: Real,
    /// The second bound of the interval.
    pub max: Real,
}

impl Interval {
    /// Creates the interval `[min, max]`.
    #[inline]
    pub const fn new(min: Real, max: Real) -> Self {
        Self { min, max }
    }

    /// Creates the single-value interval `[value, value]`.
    #[inline]
    pub const fn point(value: Real) -> Self {
        Self::new(value, value)
    }

    /// The `[NaN, NaN]` interval.
    #[inline]
    pub const fn invalid() -> Self {
        Self::new(Real::NAN, Real::NAN)
    }

    /// Projects a cloud of points onto `axis`.
    ///
    /// Returns [`Interval::invalid`] if `points` is empty.
    pub fn from_projection<'a>(axis: &Vector, points: impl IntoIterator<Item = &'a Point>) -> Self {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return Self::invalid();
        };

        let first = axis.dot(&first.coords);
        points.fold(Self::point(first), |acc, pt| {
            let dot = axis.dot(&pt.coords);
            Self::new(acc.min.min(dot), acc.max.max(dot))
        })
    }

    /// Are both bounds valid numbers?
    #[inline]
    pub fn is_line(&self) -> bool {
        !self.min.is_nan() && !self.max.is_nan()
    }

    /// Is this a valid interval reduced to a single value?
    #[inline]
    pub fn is_point(&self) -> bool {
        self.is_line() && self.min == self.max
    }

    /// The absolute distance between both bounds.
    #[inline]
    pub fn length(&self) -> Real {
        (self.max - self.min).abs()
    }

    /// The value halfway between both bounds.
    #[inline]
    pub fn mid_point(&self) -> Real {
        (self.min + self.max) / 2.0
    }

    /// The lowest of both bounds.
    #[inline]
    pub fn lower(&self) -> Real {
        self.min.min(self.max)
    }

    /// The greatest of both bounds.
    #[inline]
    pub fn upper(&self) -> Real {
        self.min.max(self.max)
    }

    /// Does `value` lie between both bounds, inclusively?
    #[inline]
    pub fn contains_value(&self, value: Real) -> bool {
        value >= self.lower() && value <= self.upper()
    }

    /// Computes the overlap of two projections.
    ///
    /// The result is not a line (see [`Interval::is_line`]) if the projections do not
    /// overlap:
    /// - two points overlap as `[0, 0]` if they are equal;
    /// - a point and a line overlap as the sub-interval going from the line bound closest to
    ///   the point to the point itself (ties go to the `max` bound);
    /// - two lines overlap as the range covered by both.
    pub fn overlap(&self, other: &Self) -> Self {
        if !self.is_line() || !other.is_line() {
            return Self::invalid();
        }

        match (self.is_point(), other.is_point()) {
            (true, true) => {
                if self.min == other.min {
                    Self::point(0.0)
                } else {
                    Self::invalid()
                }
            }
            (true, false) => self.point_line_overlap(other),
            (false, true) => other.point_line_overlap(self),
            (false, false) => {
                let min = if other.contains_value(self.min) {
                    self.min
                } else if self.contains_value(other.min) {
                    other.min
                } else {
                    Real::NAN
                };

                let max = if other.contains_value(self.max) {
                    self.max
                } else if self.contains_value(other.max) {
                    other.max
                } else {
                    Real::NAN
                };

                Self::new(min, max)
            }
        }
    }

    fn point_line_overlap(&self, line: &Self) -> Self {
        let value = self.min;

        if !line.contains_value(value) {
            return Self::invalid();
        }

        if (value - line.min).abs() < (line.max - value).abs() {
            Self::new(line.min, value)
        } else {
            Self::new(value, line.max)
        }
    }

    /// Does `self` contain `other` entirely?
    ///
    /// Unlike the other queries, this one assumes that both intervals are ordered.
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        other.min >= self.min && other.max <= self.max
    }

    /// The smallest of the distances between the two `min` bounds and the two `max` bounds.
    #[inline]
    pub fn minimum_distance(&self, other: &Self) -> Real {
        (self.min - other.min).abs().min((self.max - other.max).abs())
    }

    /// The greatest of the distances between the two `min` bounds and the two `max` bounds.
    #[inline]
    pub fn maximum_distance(&self, other: &Self) -> Real {
        (self.min - other.min).abs().max((self.max - other.max).abs())
    }

    /// The sign of `other.mid_point() - self.mid_point()`, or `0.0` if both are equal.
    #[inline]
    pub fn orientation(&self, other: &Self) -> Real {
        let delta = other.mid_point() - self.mid_point();

        if delta > 0.0 {
            1.0
        } else if delta < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    /// Signed distance from this point projection to the far bound of `line`.
    ///
    /// Returns `line.max - self.max` if `direction` is positive, `self.max - line.min`
    /// otherwise.
    #[inline]
    pub fn point_distance(&self, line: &Self, direction: Real) -> Real {
        if direction > 0.0 {
            line.max - self.max
        } else {
            self.max - line.min
        }
    }

    /// The penetration depth of two projections on the same axis.
    ///
    /// This is the length of their overlap, plus [`Interval::minimum_distance`] if one of
    /// them contains the other, so that a fully enclosed projection is never mistaken for a
    /// shallow contact. Returns `None` if the projections do not overlap.
    pub fn penetration(&self, other: &Self) -> Option<Real> {
        let overlap = self.overlap(other);

        if !overlap.is_line() {
            return None;
        }

        let mut depth = overlap.length();

        if self.contains(other) || other.contains(self) {
            depth += self.minimum_distance(other);
        }

        Some(depth)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::point(0.0)
    }
}

impl AbsDiffEq for Interval {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.min.abs_diff_eq(&other.min, epsilon) && self.max.abs_diff_eq(&other.max, epsilon)
    }
}

impl RelativeEq for Interval {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.min.relative_eq(&other.min, epsilon, max_relative)
            && self.max.relative_eq(&other.max, epsilon, max_relative)
    }
}
