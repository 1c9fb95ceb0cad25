//! Arc-length resampling of curves.
//!
//! Two complementary densification strategies: [`subdivide`] caps the length
//! of every segment without moving existing points, while [`rebalance`]
//! redistributes a fixed number of points at uniform arc-length spacing.
//! Both run in O(n) over the input points.

use crate::curve::Curve;
use crate::error::MatchError;
use crate::primitives::Point2;
use num_traits::Float;

/// Default segment-length cap used by [`subdivide`].
pub const DEFAULT_MAX_SEGMENT_LEN: f64 = 0.05;

/// Default sample count used by [`rebalance`] and curve normalization.
pub const DEFAULT_ESTIMATION_POINTS: usize = 50;

/// Splits every segment longer than `max_len` into equal parts.
///
/// Existing points are never moved; each over-long segment is replaced by
/// the smallest number of equal steps that brings every step within
/// `max_len`. Segments already within the limit pass through untouched, so
/// a sufficiently dense curve comes back unchanged.
///
/// # Arguments
///
/// * `curve` - The input curve, at least 2 points
/// * `max_len` - Upper bound on output segment length, must be positive
///
/// # Returns
///
/// A new curve whose segments are all within `max_len`, or an error if the
/// curve has fewer than 2 points or `max_len` is not a positive number.
///
/// # Example
///
/// ```
/// use curvematch::{subdivide, Curve};
///
/// let curve = Curve::from_coords(&[(0.0_f64, 0.0), (0.0, 0.1)]);
/// let dense = subdivide(&curve, 0.05).unwrap();
/// assert_eq!(dense.len(), 3);
/// ```
pub fn subdivide<F: Float>(curve: &Curve<F>, max_len: F) -> Result<Curve<F>, MatchError> {
    if curve.len() < 2 {
        return Err(MatchError::TooFewPoints {
            needed: 2,
            got: curve.len(),
        });
    }
    // Comparison written so NaN fails validation as well.
    if !(max_len > F::zero()) {
        return Err(MatchError::InvalidSegmentLimit(
            max_len.to_f64().unwrap_or(f64::NAN),
        ));
    }

    let mut out = Vec::with_capacity(curve.len());
    out.push(curve.points[0]);

    for &point in &curve.points[1..] {
        let prev = out[out.len() - 1];
        let seg_len = point.distance(prev);

        if seg_len > max_len {
            let steps = (seg_len / max_len).ceil();
            let step_len = seg_len / steps;

            // Walk from prev toward point in equal steps; the final step
            // lands on point itself.
            let mut i = F::one();
            while i <= steps {
                out.push(Point2::extend_on_line(point, prev, -(step_len * i)));
                i = i + F::one();
            }
        } else {
            out.push(point);
        }
    }

    Ok(Curve::new(out))
}

/// Resamples a curve to exactly `num_points` points at uniform arc-length
/// spacing.
///
/// The first and last input points are preserved; interior samples are
/// placed every `length / (num_points - 1)` units of arc length along the
/// original polyline. A single forward pass with an index cursor and a
/// remaining-distance budget visits each input point at most once, so the
/// cost is O(n + num_points) regardless of how the samples fall.
///
/// # Arguments
///
/// * `curve` - The input curve, at least 2 points with positive length
/// * `num_points` - Number of output samples, at least 2
///
/// # Returns
///
/// A new curve with exactly `num_points` points, or an error if the input
/// has fewer than 2 points, zero length, or `num_points < 2`.
///
/// # Example
///
/// ```
/// use curvematch::{rebalance, Curve, Point2};
///
/// let curve = Curve::from_coords(&[(0.0_f64, 0.0), (4.0, 6.0)]);
/// let resampled = rebalance(&curve, 3).unwrap();
/// assert_eq!(resampled.points[1], Point2::new(2.0, 3.0));
/// ```
pub fn rebalance<F: Float>(curve: &Curve<F>, num_points: usize) -> Result<Curve<F>, MatchError> {
    if curve.len() < 2 {
        return Err(MatchError::TooFewPoints {
            needed: 2,
            got: curve.len(),
        });
    }
    if num_points < 2 {
        return Err(MatchError::InvalidSampleCount(num_points));
    }

    let total_len = curve.length();
    // A zero-length curve has no arc to walk; NaN lengths fail here too.
    if !(total_len > F::zero()) {
        return Err(MatchError::DegenerateCurve);
    }

    let seg_len = total_len / F::from(num_points - 1).unwrap();
    let pts = &curve.points;

    let mut out = Vec::with_capacity(num_points);
    out.push(pts[0]);

    // Forward cursor into the source points; never rewinds.
    let mut cursor = 1;
    let mut last = pts[0];

    for _ in 0..num_points - 2 {
        let mut remaining = seg_len;

        loop {
            if cursor >= pts.len() {
                // Accumulated rounding exhausted the source early; clamp
                // the remaining samples to the end point.
                last = pts[pts.len() - 1];
                out.push(last);
                break;
            }

            let next_dist = last.distance(pts[cursor]);
            if next_dist < remaining {
                remaining = remaining - next_dist;
                last = pts[cursor];
                cursor += 1;
            } else {
                let sample = Point2::extend_on_line(last, pts[cursor], remaining - next_dist);
                out.push(sample);
                last = sample;
                break;
            }
        }
    }

    out.push(pts[pts.len() - 1]);
    Ok(Curve::new(out))
}
