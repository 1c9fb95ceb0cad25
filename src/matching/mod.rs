//! Curve matching: Fréchet distance, normalization, and similarity scoring.

mod frechet;
mod procrustes;
mod similarity;

pub use frechet::frechet_distance;
pub use procrustes::{align_rotation, center_and_scale, normalize_curve, rotation_angle};
pub use similarity::{shape_similarity, SimilarityParams};
