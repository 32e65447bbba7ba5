//! Type conversion utilities for FFI boundary
//!
//! Converts Python dicts into estimator configs and estimates back into dicts.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::estimator::{Estimate, EstimatorConfig, GiftPolicy};
use crate::models::{CourseSpec, DrinkSpec, MealConfig, QuantityDistribution, TipPolicy};

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Extract a required field from a Python dict with clear error messages.
///
/// # Errors
/// Returns PyValueError if the field is missing, or the conversion error
/// if its type is wrong
fn extract_required<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    dict.get_item(key)?
        .ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Missing required field '{}'",
                key
            ))
        })?
        .extract()
}

/// Extract a field, falling back to `default` when it is missing.
fn extract_with_default<'py, T>(dict: &Bound<'py, PyDict>, key: &str, default: T) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) => value.extract(),
        None => Ok(default),
    }
}

/// Extract a nested dict.
fn extract_dict<'py>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<Bound<'py, PyDict>> {
    let value = dict.get_item(key)?.ok_or_else(|| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "Missing required field '{}'",
            key
        ))
    })?;
    Ok(value.downcast::<PyDict>()?.clone())
}

// ========================================================================
// Config Parsing
// ========================================================================

fn parse_course(dict: &Bound<'_, PyDict>) -> PyResult<CourseSpec> {
    Ok(CourseSpec {
        quantity: QuantityDistribution::new(extract_required(dict, "quantity")?),
        prices: extract_required(dict, "prices")?,
    })
}

fn parse_drinks(dict: &Bound<'_, PyDict>) -> PyResult<DrinkSpec> {
    Ok(DrinkSpec {
        quantity: QuantityDistribution::new(extract_required(dict, "quantity")?),
        cocktail_probability: extract_required(dict, "cocktail_probability")?,
        cocktail_prices: extract_required(dict, "cocktail_prices")?,
        beer_prices: extract_required(dict, "beer_prices")?,
    })
}

fn parse_tip(dict: &Bound<'_, PyDict>) -> PyResult<TipPolicy> {
    Ok(TipPolicy {
        percentages: extract_required(dict, "percentages")?,
        probabilities: extract_required(dict, "probabilities")?,
        tax_rate: extract_required(dict, "tax_rate")?,
    })
}

/// Parse a meal config dict (`diner_a`, `diner_b`, the four courses, `tip`).
pub fn parse_meal_config(dict: &Bound<'_, PyDict>) -> PyResult<MealConfig> {
    Ok(MealConfig {
        diner_a: parse_drinks(&extract_dict(dict, "diner_a")?)?,
        diner_b: parse_drinks(&extract_dict(dict, "diner_b")?)?,
        appetizers: parse_course(&extract_dict(dict, "appetizers")?)?,
        entrees: parse_course(&extract_dict(dict, "entrees")?)?,
        sides: parse_course(&extract_dict(dict, "sides")?)?,
        desserts: parse_course(&extract_dict(dict, "desserts")?)?,
        tip: parse_tip(&extract_dict(dict, "tip")?)?,
    })
}

/// Parse a run config dict: the meal fields plus `n_runs`, `rng_seed` and
/// optional `streams`, `gift_percentile`, `coverage_percentile`.
pub fn parse_estimator_config(dict: &Bound<'_, PyDict>) -> PyResult<EstimatorConfig> {
    let defaults = GiftPolicy::default();
    Ok(EstimatorConfig {
        meal: parse_meal_config(dict)?,
        n_runs: extract_required(dict, "n_runs")?,
        rng_seed: extract_required(dict, "rng_seed")?,
        streams: extract_with_default(dict, "streams", 1)?,
        gift_policy: GiftPolicy {
            gift_percentile: extract_with_default(
                dict,
                "gift_percentile",
                defaults.gift_percentile,
            )?,
            coverage_percentile: extract_with_default(
                dict,
                "coverage_percentile",
                defaults.coverage_percentile,
            )?,
        },
    })
}

// ========================================================================
// Result Conversion
// ========================================================================

/// Convert an estimate into a dict with `gift_value`, `cash_value`,
/// `total_value`, `samples` (list, generation order) and `config_hash`.
pub fn estimate_to_py(py: Python<'_>, estimate: &Estimate) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("gift_value", estimate.gift_value)?;
    dict.set_item("cash_value", estimate.cash_value)?;
    dict.set_item("total_value", estimate.total_value())?;
    dict.set_item("samples", PyList::new_bound(py, estimate.samples.values()))?;
    dict.set_item("config_hash", &estimate.config_hash)?;
    Ok(dict.unbind())
}
