//! Meal Price Simulator Core - Rust Engine
//!
//! Monte Carlo estimate of a two-diner restaurant bill, used to size a gift
//! card (median meal price) plus a cash top-up (up to the 90th percentile).
//!
//! # Architecture
//!
//! - **models**: Menu and tip configuration types, realized meal samples
//! - **sampler**: Course sampler (quantity draw, then priced items)
//! - **aggregator**: Meal aggregator (all courses, tip, tax)
//! - **estimator**: Distribution estimator (run loop, percentiles, gift split)
//! - **config**: JSON loading, config hashing, built-in menus
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. Configuration is validated before any sampling happens
//! 2. All randomness is deterministic (seeded RNG passed explicitly)
//! 3. FFI boundary is minimal and safe

// Module declarations
pub mod aggregator;
pub mod config;
pub mod error;
pub mod estimator;
pub mod models;
pub mod rng;
pub mod sampler;

// Re-exports for convenience
pub use aggregator::{simulate_meal, simulate_one_meal};
pub use config::presets;
pub use error::{ConfigurationError, EstimatorError};
pub use estimator::{
    gift_split, run, Estimate, Estimator, EstimatorConfig, GiftPolicy, HistogramBin, SampleSet,
};
pub use models::{CourseSpec, DrinkSpec, MealConfig, MealSample, QuantityDistribution, TipPolicy};
pub use rng::RngManager;
pub use sampler::{draw_priced_items, sample_course, sample_drinks};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn meal_price_simulator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::estimator::py_run_estimate, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::estimator::py_edibles_dinner_config, m)?)?;
    Ok(())
}
