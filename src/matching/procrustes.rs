//! Curve normalization and closed-form rotation alignment.
//!
//! Shape comparison wants curves stripped of position and size first:
//! [`normalize_curve`] resamples to a fixed point count, moves the centroid
//! to the origin, and scales the root-mean-square radius to 1. On two
//! curves prepared that way, [`rotation_angle`] gives the Procrustes
//! rotation, the closed-form angle minimizing the summed squared distance
//! between index-paired points.

use crate::curve::{rebalance, Curve};
use crate::error::MatchError;
use crate::primitives::Point2;
use num_traits::Float;

/// Translates a curve so its centroid sits at the origin and scales it to
/// unit root-mean-square radius.
///
/// The point count is unchanged. Use [`normalize_curve`] when the curve
/// should also be resampled to a fixed density first.
///
/// # Arguments
///
/// * `curve` - The input curve, at least 2 points, not all coincident
///
/// # Returns
///
/// The centered, unit-scale curve, or an error if the curve has fewer
/// than 2 points or zero spread (scale = 0).
pub fn center_and_scale<F: Float>(curve: &Curve<F>) -> Result<Curve<F>, MatchError> {
    if curve.len() < 2 {
        return Err(MatchError::TooFewPoints {
            needed: 2,
            got: curve.len(),
        });
    }

    let mean = curve.centroid().ok_or(MatchError::DegenerateCurve)?;
    let translated: Vec<Point2<F>> =
        curve.points.iter().map(|&p| p - mean.to_vec()).collect();

    let mut sum_sq = F::zero();
    for p in &translated {
        sum_sq = sum_sq + (p.x * p.x + p.y * p.y);
    }
    let scale = (sum_sq / F::from(translated.len()).unwrap()).sqrt();

    // Coincident points leave nothing to scale; NaN input fails here too.
    if !(scale > F::zero()) {
        return Err(MatchError::DegenerateCurve);
    }

    let points = translated
        .iter()
        .map(|p| Point2::new(p.x / scale, p.y / scale))
        .collect();

    Ok(Curve::new(points))
}

/// Normalizes a curve for shape comparison: resamples to
/// `estimation_points` at uniform arc-length spacing, then centers and
/// scales via [`center_and_scale`].
///
/// Resampling first makes the result independent of how densely the input
/// was captured, so two traces of the same shape normalize to matching
/// point sets.
///
/// # Arguments
///
/// * `curve` - The input curve, at least 2 points with positive length
/// * `estimation_points` - Sample count for resampling, at least 2
///
/// # Example
///
/// ```
/// use curvematch::{normalize_curve, Curve};
///
/// let curve = Curve::from_coords(&[(0.0_f64, 0.0), (4.0, 4.0)]);
/// let normalized = normalize_curve(&curve, 3).unwrap();
///
/// // Symmetric about the origin at unit RMS radius
/// let mid = normalized.points[1];
/// assert!(mid.x.abs() < 1e-9 && mid.y.abs() < 1e-9);
/// ```
pub fn normalize_curve<F: Float>(
    curve: &Curve<F>,
    estimation_points: usize,
) -> Result<Curve<F>, MatchError> {
    let resampled = rebalance(curve, estimation_points)?;
    center_and_scale(&resampled)
}

/// Computes the rotation angle that best aligns `curve` onto `target`.
///
/// This is the Procrustes solution restricted to pure rotation: the angle
/// minimizing the sum of squared distances between index-paired points,
///
/// `theta = atan2(Σ(yᵢ·target.xᵢ − xᵢ·target.yᵢ), Σ(xᵢ·target.xᵢ + yᵢ·target.yᵢ))`
///
/// Index pairing only means anything when both curves sample the same
/// arc-length positions, so both must hold the same number of points,
/// typically after [`normalize_curve`] with a shared `estimation_points`.
/// Rotating `curve` by the returned angle (see [`Curve::rotate`]) brings
/// it onto `target`.
///
/// # Example
///
/// ```
/// use curvematch::{rotation_angle, Curve};
/// use std::f64::consts::FRAC_PI_2;
///
/// let along_x = Curve::from_coords(&[(0.0_f64, 0.0), (1.0, 0.0)]);
/// let along_y = Curve::from_coords(&[(0.0_f64, 0.0), (0.0, 1.0)]);
///
/// let theta = rotation_angle(&along_x, &along_y).unwrap();
/// assert!((theta + FRAC_PI_2).abs() < 1e-9);
/// ```
pub fn rotation_angle<F: Float>(curve: &Curve<F>, target: &Curve<F>) -> Result<F, MatchError> {
    if curve.len() != target.len() {
        return Err(MatchError::PointCountMismatch {
            left: curve.len(),
            right: target.len(),
        });
    }

    let mut num = F::zero();
    let mut den = F::zero();
    for (p, q) in curve.points.iter().zip(&target.points) {
        let (pv, qv) = (p.to_vec(), q.to_vec());
        num = num + qv.cross(pv);
        den = den + pv.dot(qv);
    }

    Ok(num.atan2(den))
}

/// Rotates `curve` by its Procrustes angle relative to `target`.
///
/// Convenience for `curve.rotate(rotation_angle(curve, target)?)`; the
/// same point-count requirement applies.
pub fn align_rotation<F: Float>(curve: &Curve<F>, target: &Curve<F>) -> Result<Curve<F>, MatchError> {
    let theta = rotation_angle(curve, target)?;
    Ok(curve.rotate(theta))
}
