//! Distribution estimator
//!
//! Generates `N` independent meal totals and derives the gift/cash split
//! from their percentiles.
//!
//! See `engine.rs` for the run loop and `sample_set.rs` for order statistics.

pub mod engine;
pub mod sample_set;

// Re-export main types for convenience
pub use engine::{gift_split, run, Estimate, Estimator, EstimatorConfig, GiftPolicy};
pub use sample_set::{HistogramBin, SampleSet, MAX_HISTOGRAM_BINS};
