//! Tip policy
//!
//! Tip percentage is drawn per meal from a discrete distribution; tax is a
//! fixed fraction of the pre-tax total.

use serde::{Deserialize, Serialize};

use super::distribution::validate_probabilities;
use crate::error::{ConfigurationError, EstimatorError};
use crate::rng::RngManager;

/// Tip and tax applied to a pre-tax total.
///
/// # Example
/// ```
/// use meal_price_simulator_core_rs::TipPolicy;
///
/// let policy = TipPolicy {
///     percentages: vec![0.15, 0.18, 0.20],
///     probabilities: vec![0.1, 0.3, 0.6],
///     tax_rate: 0.08,
/// };
/// assert!(policy.validate("tip").is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipPolicy {
    /// Tip options as fractions of the pre-tax total (0.18 = 18%)
    pub percentages: Vec<f64>,

    /// Probability of each tip option
    pub probabilities: Vec<f64>,

    /// Fixed tax rate as a fraction, in [0, 1)
    pub tax_rate: f64,
}

impl TipPolicy {
    /// No tip, no tax.
    pub fn none() -> Self {
        Self {
            percentages: vec![0.0],
            probabilities: vec![1.0],
            tax_rate: 0.0,
        }
    }

    pub fn validate(&self, field: &str) -> Result<(), EstimatorError> {
        let probabilities_field = format!("{field}.probabilities");
        validate_probabilities(&probabilities_field, &self.probabilities)?;

        if self.probabilities.len() != self.percentages.len() {
            return Err(ConfigurationError::LengthMismatch {
                field: probabilities_field,
                probabilities: self.probabilities.len(),
                options: self.percentages.len(),
            }
            .into());
        }

        if let Some((index, &value)) = self
            .percentages
            .iter()
            .enumerate()
            .find(|(_, p)| !(p.is_finite() && **p >= 0.0))
        {
            return Err(ConfigurationError::InvalidTipPercentage {
                field: format!("{field}.percentages"),
                index,
                value,
            }
            .into());
        }

        if !(0.0..1.0).contains(&self.tax_rate) {
            return Err(EstimatorError::InvalidInput(format!(
                "{field}.tax_rate must be in [0, 1), got {}",
                self.tax_rate
            )));
        }

        Ok(())
    }

    /// Draw a tip percentage. Assumes a validated policy.
    pub fn sample_percentage(&self, rng: &mut RngManager) -> f64 {
        self.percentages[rng.weighted_index(&self.probabilities)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_valid_and_zero() {
        let policy = TipPolicy::none();
        assert!(policy.validate("tip").is_ok());
        let mut rng = RngManager::new(3);
        assert_eq!(policy.sample_percentage(&mut rng), 0.0);
    }

    #[test]
    fn test_length_mismatch() {
        let policy = TipPolicy {
            percentages: vec![0.15, 0.18],
            probabilities: vec![0.1, 0.3, 0.6],
            tax_rate: 0.08,
        };
        assert_eq!(
            policy.validate("tip").unwrap_err(),
            EstimatorError::Configuration(ConfigurationError::LengthMismatch {
                field: "tip.probabilities".to_string(),
                probabilities: 3,
                options: 2,
            })
        );
    }

    #[test]
    fn test_tax_rate_bounds() {
        let mut policy = TipPolicy::none();
        policy.tax_rate = -0.01;
        assert!(matches!(
            policy.validate("tip"),
            Err(EstimatorError::InvalidInput(_))
        ));
        policy.tax_rate = 1.0;
        assert!(matches!(
            policy.validate("tip"),
            Err(EstimatorError::InvalidInput(_))
        ));
        policy.tax_rate = 0.0;
        assert!(policy.validate("tip").is_ok());
    }

    #[test]
    fn test_negative_tip_rejected() {
        let policy = TipPolicy {
            percentages: vec![-0.1],
            probabilities: vec![1.0],
            tax_rate: 0.0,
        };
        assert!(matches!(
            policy.validate("tip"),
            Err(EstimatorError::Configuration(
                ConfigurationError::InvalidTipPercentage { index: 0, .. }
            ))
        ));
    }
}
