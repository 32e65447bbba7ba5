//! Error taxonomy
//!
//! Every error is fatal and detected before sampling begins:
//! - [`ConfigurationError`]: malformed probability vector, price list or tip table
//! - [`EstimatorError`]: run-level input problems, plus wrapped configuration errors

use thiserror::Error;

/// Tolerance used when checking that a probability vector sums to 1.
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

/// Malformed menu or tip configuration.
///
/// `field` names the configuration entry at fault (e.g. `"entrees.quantity"`).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("{field}: probability vector is empty")]
    EmptyDistribution { field: String },

    #[error("{field}: probability at index {index} is negative ({value})")]
    NegativeProbability {
        field: String,
        index: usize,
        value: f64,
    },

    #[error("{field}: probability at index {index} is not finite")]
    NonFiniteProbability { field: String, index: usize },

    #[error("{field}: probabilities sum to {sum}, expected 1.0")]
    ProbabilitySum { field: String, sum: f64 },

    #[error("{field}: price list is empty")]
    EmptyPriceList { field: String },

    #[error("{field}: price at index {index} must be positive and finite ({value})")]
    InvalidPrice {
        field: String,
        index: usize,
        value: f64,
    },

    #[error("{field}: cocktail probability {value} outside [0, 1]")]
    InvalidCocktailProbability { field: String, value: f64 },

    #[error("{field}: {probabilities} probabilities for {options} options")]
    LengthMismatch {
        field: String,
        probabilities: usize,
        options: usize,
    },

    #[error("{field}: tip percentage at index {index} must be non-negative and finite ({value})")]
    InvalidTipPercentage {
        field: String,
        index: usize,
        value: f64,
    },
}

/// Errors surfaced by the meal aggregator and distribution estimator.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EstimatorError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
