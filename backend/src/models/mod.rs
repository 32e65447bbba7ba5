//! Domain models for the meal price simulator

pub mod course;
pub mod distribution;
pub mod meal;
pub mod tip;

// Re-exports
pub use course::{CourseSpec, DrinkSpec};
pub use distribution::QuantityDistribution;
pub use meal::{MealConfig, MealSample};
pub use tip::TipPolicy;
