//! curvematch - Shape similarity for 2D curves
//!
//! Where a curve was drawn should not decide whether it matches. This library
//! scores how alike two polylines are in shape, invariant to translation,
//! uniform scale, and (optionally) rotation. Typical uses are gesture and
//! signature recognition against reference curves.

pub mod curve;
pub mod error;
pub mod matching;
pub mod primitives;

pub use curve::{rebalance, subdivide, Curve, DEFAULT_ESTIMATION_POINTS, DEFAULT_MAX_SEGMENT_LEN};
pub use error::MatchError;
pub use matching::{
    align_rotation, center_and_scale, frechet_distance, normalize_curve, rotation_angle,
    shape_similarity, SimilarityParams,
};
pub use primitives::{Point2, Vec2};
