//! 2D point type.

use super::Vec2;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Converts this point to a vector from the origin.
    #[inline]
    pub fn to_vec(self) -> Vec2<F> {
        Vec2::new(self.x, self.y)
    }

    /// Returns the point on the infinite line through `a` and `b` that lies
    /// at signed distance `dist` from `b`, measured along the `a`→`b`
    /// direction.
    ///
    /// A positive `dist` continues past `b` away from `a`; a negative `dist`
    /// moves back toward (and possibly past) `a`.
    ///
    /// `a` and `b` must be distinct: a zero-length direction has no unit
    /// vector and the result degenerates to NaN/infinity.
    ///
    /// # Example
    ///
    /// ```
    /// use curvematch::Point2;
    ///
    /// let a = Point2::new(0.0_f64, 0.0);
    /// let b = Point2::new(8.0, 6.0);
    ///
    /// // 5 units past b along the a→b direction
    /// let p = Point2::extend_on_line(a, b, 5.0);
    /// assert_eq!(p, Point2::new(12.0, 9.0));
    ///
    /// // negative distances walk back toward a
    /// let q = Point2::extend_on_line(a, b, -5.0);
    /// assert_eq!(q, Point2::new(4.0, 3.0));
    /// ```
    #[inline]
    pub fn extend_on_line(a: Self, b: Self, dist: F) -> Self {
        let dir = b - a;
        let t = dist / dir.magnitude();
        b + dir * t
    }
}

// Point - Point = Vec2
impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

// Point + Vec2 = Point
impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

// Point - Vec2 = Point
impl<F: Float> Sub<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x - v.x,
            y: self.y - v.y,
        }
    }
}

impl<F: Float> From<Vec2<F>> for Point2<F> {
    fn from(v: Vec2<F>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new() {
        let p: Point2<f64> = Point2::new(1.0, 2.0);
        assert_eq!(p.x, 1.0);
        assert_eq!(p.y, 2.0);
    }

    #[test]
    fn test_origin() {
        let p: Point2<f64> = Point2::origin();
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn test_distance() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn test_point_sub_point() {
        let a: Point2<f64> = Point2::new(1.0, 2.0);
        let b = Point2::new(4.0, 6.0);
        let v: Vec2<f64> = b - a;
        assert_eq!(v.x, 3.0);
        assert_eq!(v.y, 4.0);
    }

    #[test]
    fn test_point_add_vec() {
        let p: Point2<f64> = Point2::new(1.0, 2.0);
        let v = Vec2::new(3.0, 4.0);
        let result = p + v;
        assert_eq!(result.x, 4.0);
        assert_eq!(result.y, 6.0);
    }

    #[test]
    fn test_point_sub_vec() {
        let p: Point2<f64> = Point2::new(4.0, 6.0);
        let v = Vec2::new(3.0, 4.0);
        let result = p - v;
        assert_eq!(result.x, 1.0);
        assert_eq!(result.y, 2.0);
    }

    #[test]
    fn test_to_vec() {
        let p: Point2<f64> = Point2::new(3.0, 4.0);
        let v = p.to_vec();
        assert_eq!(v.x, 3.0);
        assert_eq!(v.y, 4.0);
    }

    #[test]
    fn test_extend_returns_point_dist_beyond_end() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(8.0, 6.0);
        assert_eq!(Point2::extend_on_line(a, b, 5.0), Point2::new(12.0, 9.0));
    }

    #[test]
    fn test_extend_negative_dist() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(8.0, 6.0);
        assert_eq!(Point2::extend_on_line(a, b, -5.0), Point2::new(4.0, 3.0));
    }

    #[test]
    fn test_extend_with_end_before_start() {
        let a: Point2<f64> = Point2::new(12.0, 9.0);
        let b = Point2::new(8.0, 6.0);
        assert_eq!(Point2::extend_on_line(a, b, 10.0), Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_extend_vertical_line() {
        let a: Point2<f64> = Point2::new(2.0, 4.0);
        let b = Point2::new(2.0, 6.0);
        assert_eq!(Point2::extend_on_line(a, b, 7.0), Point2::new(2.0, 13.0));
    }

    #[test]
    fn test_extend_vertical_line_downward() {
        let a: Point2<f64> = Point2::new(2.0, 6.0);
        let b = Point2::new(2.0, 4.0);
        assert_eq!(Point2::extend_on_line(a, b, 7.0), Point2::new(2.0, -3.0));
    }

    #[test]
    fn test_extend_zero_dist_is_end_point() {
        let a: Point2<f64> = Point2::new(1.5, -2.25);
        let b = Point2::new(3.75, 0.5);
        assert_eq!(Point2::extend_on_line(a, b, 0.0), b);
    }

    #[test]
    fn test_extend_lands_at_requested_distance() {
        let a: Point2<f64> = Point2::new(1.5, -2.25);
        let b = Point2::new(3.75, 0.5);

        for dist in [2.5, -1.25, 0.75, 10.0] {
            let p = Point2::extend_on_line(a, b, dist);
            assert_relative_eq!(p.distance(b), dist.abs(), epsilon = 1e-12);
        }
    }
}
