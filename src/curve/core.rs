//! Core curve type and basic operations.

use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// An open polyline represented as an ordered sequence of points.
///
/// Unlike a polygon there is no implicit closing edge: the curve runs from
/// the first point to the last and stops there.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve<F> {
    /// The points of the curve in traversal order.
    pub points: Vec<Point2<F>>,
}

impl<F: Float> Curve<F> {
    /// Creates a new curve from points.
    #[inline]
    pub fn new(points: Vec<Point2<F>>) -> Self {
        Self { points }
    }

    /// Creates a curve from `(x, y)` coordinate pairs.
    #[inline]
    pub fn from_coords(coords: &[(F, F)]) -> Self {
        Self {
            points: coords.iter().map(|&(x, y)| Point2::new(x, y)).collect(),
        }
    }

    /// Creates an empty curve.
    #[inline]
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Returns true if the curve has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns the total arc length of the curve.
    ///
    /// Curves with fewer than two points have zero length.
    pub fn length(&self) -> F {
        let mut total = F::zero();
        for w in self.points.windows(2) {
            total = total + w[0].distance(w[1]);
        }
        total
    }

    /// Returns the arithmetic mean of the points, or None for an empty curve.
    pub fn centroid(&self) -> Option<Point2<F>> {
        if self.points.is_empty() {
            return None;
        }

        let mut sum = Vec2::zero();
        for p in &self.points {
            sum = sum + p.to_vec();
        }
        let n = F::from(self.points.len()).unwrap();

        Some(Point2::from(sum / n))
    }

    /// Rotates every point about the origin by `theta` radians.
    ///
    /// The rotation is clockwise-positive in a standard x-right, y-up frame:
    /// `rotate(PI / 2)` maps `(1, 0)` to `(0, -1)`. Two rotations compose by
    /// adding their angles, and `rotate(-theta)` undoes `rotate(theta)` up to
    /// floating-point rounding.
    pub fn rotate(&self, theta: F) -> Self {
        let cos_t = (-theta).cos();
        let sin_t = (-theta).sin();

        let points = self
            .points
            .iter()
            .map(|p| Point2::new(cos_t * p.x - sin_t * p.y, sin_t * p.x + cos_t * p.y))
            .collect();

        Self { points }
    }
}
