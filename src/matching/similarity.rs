//! Shape similarity scoring.
//!
//! Compares two curves regardless of where, how large, or at what angle
//! they were drawn. Both are normalized to a canonical position and scale,
//! then a set of candidate rotations is searched for the one minimizing
//! the Fréchet distance, and the best distance is mapped into a [0, 1]
//! score.
//!
//! The candidate set always contains 0. When rotation search is enabled it
//! adds the closed-form Procrustes angle as a seed plus an evenly spaced
//! fan across the allowed range. The seed minimizes squared point
//! distance, which is a good but not always optimal proxy for the
//! max-based Fréchet distance, so the fan acts as a safety net.

use crate::curve::{Curve, DEFAULT_ESTIMATION_POINTS};
use crate::error::MatchError;
use crate::matching::frechet::frechet_distance;
use crate::matching::procrustes::{normalize_curve, rotation_angle};
use num_traits::Float;

/// Tuning knobs for [`shape_similarity`].
///
/// The defaults trade accuracy against cost evenly; `estimation_points`
/// and `rotations` scale the work as O(rotations · estimation_points²).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityParams<F> {
    /// Sample count both curves are resampled to before comparison.
    pub estimation_points: usize,
    /// Whether to search rotations at all. When false only the identity
    /// rotation is scored, making the result rotation-sensitive.
    pub check_rotations: bool,
    /// Number of evenly spaced angles tried across the allowed range.
    pub rotations: usize,
    /// Half-width of the allowed rotation range in radians, at most π in
    /// magnitude. Curves differing by a larger rotation score low.
    pub restrict_rotation_angle: F,
}

impl<F: Float> Default for SimilarityParams<F> {
    fn default() -> Self {
        Self {
            estimation_points: DEFAULT_ESTIMATION_POINTS,
            check_rotations: true,
            rotations: 10,
            restrict_rotation_angle: F::from(std::f64::consts::PI).unwrap(),
        }
    }
}

/// Scores how similar two curves are in shape, in [0, 1].
///
/// The score is invariant to translation, uniform scale, and (with
/// rotation search enabled) rotation: identical shapes score 1 no matter
/// how they were placed, sized, or turned. Restricting
/// `restrict_rotation_angle` narrows the rotations that can still score
/// high.
///
/// Both curves are normalized with `params.estimation_points`, candidate
/// rotations are scored by Fréchet distance, and the minimum distance is
/// mapped through `1 - dist / (geo_mean_len / sqrt(2))`, clamped at 0.
///
/// # Arguments
///
/// * `a` - First curve, at least 2 points with positive length
/// * `b` - Second curve, at least 2 points with positive length
/// * `params` - Search configuration; `SimilarityParams::default()` for
///   the standard behavior
///
/// # Returns
///
/// The similarity score, or an error if either curve cannot be
/// normalized or `|restrict_rotation_angle| > π`.
///
/// # Example
///
/// ```
/// use curvematch::{shape_similarity, Curve, SimilarityParams};
///
/// let a = Curve::from_coords(&[(0.0_f64, 0.0), (2.0, 4.0), (18.0, -3.0)]);
/// // The same shape, half the size, shifted by (10, 10)
/// let b = Curve::from_coords(&[(10.0_f64, 10.0), (11.0, 12.0), (19.0, 8.5)]);
///
/// let score = shape_similarity(&a, &b, SimilarityParams::default()).unwrap();
/// assert!(score > 0.99);
/// ```
pub fn shape_similarity<F: Float>(
    a: &Curve<F>,
    b: &Curve<F>,
    params: SimilarityParams<F>,
) -> Result<F, MatchError> {
    let pi = F::from(std::f64::consts::PI).unwrap();
    let two = F::from(2.0).unwrap();

    let restrict = params.restrict_rotation_angle;
    // NaN fails this check as well.
    if !(restrict.abs() <= pi) {
        return Err(MatchError::RotationRestrictionOutOfRange(
            restrict.to_f64().unwrap_or(f64::NAN),
        ));
    }

    let norm_a = normalize_curve(a, params.estimation_points)?;
    let norm_b = normalize_curve(b, params.estimation_points)?;

    let geo_avg_len = (norm_a.length() * norm_b.length()).sqrt();

    let mut candidates = vec![F::zero()];
    if params.check_rotations {
        let restrict_abs = restrict.abs();

        let mut seed = rotation_angle(&norm_a, &norm_b)?;
        // Prefer a small negative rotation over a large positive one.
        if seed > pi {
            seed = seed - two * pi;
        }
        if seed != F::zero() && seed.abs() < restrict_abs {
            candidates.push(seed);
        }

        // Evenly spaced fan across [-restrict, restrict]; 0 and pi are
        // covered already (pi through its alias -pi at the low end).
        if params.rotations > 1 {
            let span = F::from(params.rotations - 1).unwrap();
            for i in 0..params.rotations {
                let theta = -restrict_abs + two * F::from(i).unwrap() * restrict_abs / span;
                if theta != F::zero() && theta != pi {
                    candidates.push(theta);
                }
            }
        }
    }

    let mut min_dist = F::infinity();
    for theta in candidates {
        let dist = frechet_distance(&norm_a.rotate(theta), &norm_b)?;
        if dist < min_dist {
            min_dist = dist;
        }
    }

    let score = F::one() - min_dist / (geo_avg_len / two.sqrt());
    Ok(score.max(F::zero()))
}
