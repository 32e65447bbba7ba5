//! Course and drink specifications
//!
//! A course pairs a [`QuantityDistribution`] with the list of item prices a
//! unit is drawn from (uniformly, with replacement). Drinks add a per-unit
//! cocktail-vs-beer choice, each branch with its own price list.

use serde::{Deserialize, Serialize};

use super::distribution::QuantityDistribution;
use crate::error::ConfigurationError;

/// One course category (appetizers, entrees, sides, desserts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSpec {
    /// Probability of ordering 0, 1, 2, ... items
    pub quantity: QuantityDistribution,

    /// Item prices; each ordered unit draws one uniformly
    pub prices: Vec<f64>,
}

impl CourseSpec {
    pub fn new(quantity: impl Into<QuantityDistribution>, prices: Vec<f64>) -> Self {
        Self {
            quantity: quantity.into(),
            prices,
        }
    }

    /// Course that is never ordered.
    pub fn skipped(prices: Vec<f64>) -> Self {
        Self::new(QuantityDistribution::never(), prices)
    }

    pub fn validate(&self, field: &str) -> Result<(), ConfigurationError> {
        self.quantity.validate(&format!("{field}.quantity"))?;
        validate_prices(&format!("{field}.prices"), &self.prices)
    }
}

/// One diner's drinks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrinkSpec {
    /// Probability of ordering 0, 1, 2, ... drinks
    pub quantity: QuantityDistribution,

    /// Probability that any single drink is a cocktail rather than a beer
    pub cocktail_probability: f64,

    pub cocktail_prices: Vec<f64>,

    pub beer_prices: Vec<f64>,
}

impl DrinkSpec {
    pub fn validate(&self, field: &str) -> Result<(), ConfigurationError> {
        self.quantity.validate(&format!("{field}.quantity"))?;

        let p = self.cocktail_probability;
        if !(0.0..=1.0).contains(&p) {
            // NaN also lands here
            return Err(ConfigurationError::InvalidCocktailProbability {
                field: format!("{field}.cocktail_probability"),
                value: p,
            });
        }

        validate_prices(&format!("{field}.cocktail_prices"), &self.cocktail_prices)?;
        validate_prices(&format!("{field}.beer_prices"), &self.beer_prices)
    }
}

/// Check that a price list is non-empty and every price is positive and finite.
pub(crate) fn validate_prices(field: &str, prices: &[f64]) -> Result<(), ConfigurationError> {
    if prices.is_empty() {
        return Err(ConfigurationError::EmptyPriceList {
            field: field.to_string(),
        });
    }

    match prices
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.is_finite() && **p > 0.0))
    {
        Some((index, &value)) => Err(ConfigurationError::InvalidPrice {
            field: field.to_string(),
            index,
            value,
        }),
        None => Ok(()),
    }
}
