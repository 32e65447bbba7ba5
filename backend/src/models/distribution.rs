//! Quantity distribution
//!
//! A discrete probability vector over quantities `{0, 1, ..., k-1}`:
//! entry `i` is the probability that exactly `i` items of a course are
//! ordered. The same shape is reused for tip-percentage weights.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, PROBABILITY_SUM_TOLERANCE};
use crate::rng::RngManager;

/// Probability of ordering 0, 1, 2, ... units of a course.
///
/// # Example
/// ```
/// use meal_price_simulator_core_rs::QuantityDistribution;
///
/// // 50% skip dessert, 30% share one, 20% order two
/// let dessert = QuantityDistribution::new(vec![0.5, 0.3, 0.2]);
/// assert!(dessert.validate("desserts.quantity").is_ok());
/// assert_eq!(dessert.max_quantity(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuantityDistribution(Vec<f64>);

impl QuantityDistribution {
    pub fn new(probabilities: Vec<f64>) -> Self {
        Self(probabilities)
    }

    /// Distribution that always yields `quantity`.
    pub fn exactly(quantity: usize) -> Self {
        let mut probabilities = vec![0.0; quantity + 1];
        probabilities[quantity] = 1.0;
        Self(probabilities)
    }

    /// Distribution that always yields zero (course skipped).
    pub fn never() -> Self {
        Self::exactly(0)
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.0
    }

    /// Largest quantity in the support (`k - 1`).
    pub fn max_quantity(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Probability that at least one unit is ordered.
    pub fn probability_any(&self) -> f64 {
        self.0.iter().skip(1).sum()
    }

    pub fn validate(&self, field: &str) -> Result<(), ConfigurationError> {
        validate_probabilities(field, &self.0)
    }

    /// Categorical draw of a quantity. Assumes a validated distribution.
    pub fn sample(&self, rng: &mut RngManager) -> usize {
        rng.weighted_index(&self.0)
    }
}

impl From<Vec<f64>> for QuantityDistribution {
    fn from(probabilities: Vec<f64>) -> Self {
        Self(probabilities)
    }
}

/// Check that `probabilities` is non-empty, finite, non-negative and sums
/// to 1 within [`PROBABILITY_SUM_TOLERANCE`].
pub(crate) fn validate_probabilities(
    field: &str,
    probabilities: &[f64],
) -> Result<(), ConfigurationError> {
    if probabilities.is_empty() {
        return Err(ConfigurationError::EmptyDistribution {
            field: field.to_string(),
        });
    }

    for (index, &value) in probabilities.iter().enumerate() {
        if !value.is_finite() {
            return Err(ConfigurationError::NonFiniteProbability {
                field: field.to_string(),
                index,
            });
        }
        if value < 0.0 {
            return Err(ConfigurationError::NegativeProbability {
                field: field.to_string(),
                index,
                value,
            });
        }
    }

    let sum: f64 = probabilities.iter().sum();
    if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
        return Err(ConfigurationError::ProbabilitySum {
            field: field.to_string(),
            sum,
        });
    }

    Ok(())
}
