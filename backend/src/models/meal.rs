//! Meal configuration and realized meal samples

use serde::{Deserialize, Serialize};

use super::course::{CourseSpec, DrinkSpec};
use super::tip::TipPolicy;
use crate::error::EstimatorError;

/// Everything needed to simulate one two-diner meal.
///
/// Immutable once validated; passed by reference into every sampling call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealConfig {
    /// First diner's drinks
    pub diner_a: DrinkSpec,

    /// Second diner's drinks
    pub diner_b: DrinkSpec,

    pub appetizers: CourseSpec,
    pub entrees: CourseSpec,
    pub sides: CourseSpec,
    pub desserts: CourseSpec,

    /// Tip distribution and tax rate
    pub tip: TipPolicy,
}

impl MealConfig {
    /// Validate every course, both diners and the tip policy.
    ///
    /// Returns the first problem found, in sampling order.
    pub fn validate(&self) -> Result<(), EstimatorError> {
        self.diner_a.validate("diner_a")?;
        self.diner_b.validate("diner_b")?;
        self.appetizers.validate("appetizers")?;
        self.entrees.validate("entrees")?;
        self.sides.validate("sides")?;
        self.desserts.validate("desserts")?;
        self.tip.validate("tip")
    }
}

/// One realized meal.
///
/// Produced per sample and discarded once its total has been recorded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MealSample {
    pub diner_a_drinks: f64,
    pub diner_b_drinks: f64,
    pub appetizers: f64,
    pub entrees: f64,
    pub sides: f64,
    pub desserts: f64,

    /// Drawn tip fraction
    pub tip_percentage: f64,

    pub pre_tax: f64,
    pub tip: f64,
    pub tax: f64,
}

impl MealSample {
    /// Pre-tax total plus tip plus tax.
    pub fn total(&self) -> f64 {
        self.pre_tax + self.tip + self.tax
    }
}
