//! Configuration loading and provenance
//!
//! Menus and run settings are static input: either built in Rust, taken from
//! [`presets`], or loaded from JSON. Every estimate records the SHA-256 of
//! the canonical JSON of its meal config so results can be matched back to
//! the menu that produced them.

pub mod presets;

use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::EstimatorError;
use crate::estimator::EstimatorConfig;

/// Parse any config type from a JSON string.
pub fn from_json_str<T: DeserializeOwned>(json: &str) -> Result<T, EstimatorError> {
    serde_json::from_str(json)
        .map_err(|e| EstimatorError::Serialization(format!("Config parsing failed: {}", e)))
}

/// Parse and validate an [`EstimatorConfig`] in one step.
///
/// # Example
/// ```
/// use meal_price_simulator_core_rs::config;
///
/// let json = config::to_json_string(&config::presets::edibles_run()).unwrap();
/// let parsed = config::load_estimator_config(&json).unwrap();
/// assert_eq!(parsed.n_runs, 100_000);
/// ```
pub fn load_estimator_config(json: &str) -> Result<EstimatorConfig, EstimatorError> {
    let config: EstimatorConfig = from_json_str(json)?;
    config.validate()?;
    Ok(config)
}

pub fn to_json_string<T: Serialize>(config: &T) -> Result<String, EstimatorError> {
    serde_json::to_string_pretty(config)
        .map_err(|e| EstimatorError::Serialization(format!("Config serialization failed: {}", e)))
}

/// SHA-256 (lowercase hex) of a config's content.
///
/// The config goes through `serde_json::Value` first. Its objects are
/// `BTreeMap`-backed (no `preserve_order` feature), so keys come out sorted
/// and the digest does not depend on field declaration or input key order.
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, EstimatorError> {
    let hash_error =
        |e: serde_json::Error| EstimatorError::Serialization(format!("Config hashing failed: {}", e));

    let canonical = serde_json::to_value(config).map_err(hash_error)?;
    let bytes = serde_json::to_vec(&canonical).map_err(hash_error)?;

    Ok(Sha256::digest(&bytes)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect())
}
