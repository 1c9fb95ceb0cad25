//! Discrete Fréchet distance between curves.
//!
//! The Fréchet distance is the "dog walking" metric: a person walks one
//! curve and a dog the other, connected by a leash, neither ever backing
//! up. The distance is the shortest leash that lets both reach the end.
//! Unlike Hausdorff it respects point ordering, which makes it the right
//! dissimilarity measure for paths and gestures.
//!
//! This module implements the discrete variant over curve vertices with
//! dynamic programming. Only two rows of the DP table are kept alive, so
//! long curves cost O(min(n, m)) memory and never touch the call stack.

use crate::curve::Curve;
use crate::error::MatchError;
use num_traits::Float;
use std::mem;

/// Computes the discrete Fréchet distance between two curves.
///
/// The result is symmetric and does not depend on argument order: the
/// curve with greater arc length always drives the outer loop, and equal
/// lengths fall back to the given order, which produces the same table
/// either way.
///
/// # Arguments
///
/// * `a` - First curve, at least 2 points
/// * `b` - Second curve, at least 2 points
///
/// # Returns
///
/// The discrete Fréchet distance, or an error if either curve has fewer
/// than 2 points.
///
/// # Complexity
///
/// O(nm) time and O(min(n, m)) space, where n = |a| and m = |b|.
///
/// # Example
///
/// ```
/// use curvematch::{frechet_distance, Curve};
///
/// let a = Curve::from_coords(&[(0.0_f64, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// let b = Curve::from_coords(&[(0.0_f64, 1.0), (1.0, 1.0), (2.0, 1.0)]);
///
/// // Parallel paths 1 unit apart
/// let dist = frechet_distance(&a, &b).unwrap();
/// assert!((dist - 1.0).abs() < 1e-10);
/// ```
pub fn frechet_distance<F: Float>(a: &Curve<F>, b: &Curve<F>) -> Result<F, MatchError> {
    if a.len() < 2 {
        return Err(MatchError::TooFewPoints {
            needed: 2,
            got: a.len(),
        });
    }
    if b.len() < 2 {
        return Err(MatchError::TooFewPoints {
            needed: 2,
            got: b.len(),
        });
    }

    let (long, short) = if a.length() >= b.length() {
        (a, b)
    } else {
        (b, a)
    };
    let p = &long.points;
    let q = &short.points;
    let m = q.len();

    // Two reusable rows over the short curve.
    let mut prev = vec![F::neg_infinity(); m];
    let mut curr = vec![F::neg_infinity(); m];

    // First row: can only come from the left.
    prev[0] = p[0].distance(q[0]);
    for j in 1..m {
        prev[j] = prev[j - 1].max(p[0].distance(q[j]));
    }

    for p_point in p.iter().skip(1) {
        curr[0] = prev[0].max(p_point.distance(q[0]));

        for j in 1..m {
            let dist = p_point.distance(q[j]);
            let prev_min = prev[j].min(curr[j - 1]).min(prev[j - 1]);
            curr[j] = dist.max(prev_min);
        }

        mem::swap(&mut prev, &mut curr);
    }

    Ok(prev[m - 1])
}
