//! Open polylines and arc-length resampling.

mod core;
mod resample;

pub use core::Curve;
pub use resample::{rebalance, subdivide, DEFAULT_ESTIMATION_POINTS, DEFAULT_MAX_SEGMENT_LEN};
