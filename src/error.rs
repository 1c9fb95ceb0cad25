//! Error types for curve matching operations.

use thiserror::Error;

/// Errors that can occur while resampling, normalizing, or comparing curves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    /// A curve had fewer points than the operation requires.
    #[error("curve has {got} points but at least {needed} are required")]
    TooFewPoints {
        /// Minimum number of points the operation needs.
        needed: usize,
        /// Number of points actually present.
        got: usize,
    },

    /// All points of the curve coincide, so it has no length or spread
    /// to resample or scale against.
    #[error("degenerate curve: all points coincide")]
    DegenerateCurve,

    /// Index-paired operations require both curves to have the same
    /// number of points.
    #[error("point count mismatch: {left} vs {right}")]
    PointCountMismatch {
        /// Point count of the first curve.
        left: usize,
        /// Point count of the second curve.
        right: usize,
    },

    /// The maximum segment length for subdivision must be positive.
    #[error("segment length limit must be positive, got {0}")]
    InvalidSegmentLimit(f64),

    /// Resampling must produce at least two points (the two endpoints).
    #[error("cannot resample to {0} points; at least 2 are required")]
    InvalidSampleCount(usize),

    /// The rotation search window must stay within [-pi, pi].
    #[error("rotation restriction {0} lies outside [-pi, pi]")]
    RotationRestrictionOutOfRange(f64),
}
