//! PyO3 entry points for the estimator
//!
//! # Example (from Python)
//!
//! ```python
//! import json
//! from meal_price_simulator import _core
//!
//! config = json.loads(_core.edibles_dinner_config())
//! config.update({"n_runs": 100_000, "rng_seed": 42})
//!
//! result = _core.run_estimate(config)
//! print(f"  Gift Card: ${result['gift_value']:.2f}")
//! print(f" Cash Value: ${result['cash_value']:.2f}")
//! ```

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{estimate_to_py, parse_estimator_config};
use crate::config::{presets, to_json_string};
use crate::estimator::Estimator;

fn to_value_error(e: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
}

/// Run the simulation described by `config` and return the estimate.
///
/// # Errors
///
/// Raises ValueError if fields are missing, have the wrong type, or fail
/// validation (bad probability vectors, empty price lists, `n_runs < 1`,
/// tax rate outside [0, 1)).
#[pyfunction]
#[pyo3(name = "run_estimate")]
pub fn py_run_estimate(py: Python<'_>, config: &Bound<'_, PyDict>) -> PyResult<Py<PyDict>> {
    let rust_config = parse_estimator_config(config)?;
    let estimator = Estimator::new(rust_config).map_err(to_value_error)?;

    // Sampling is CPU-only; let other Python threads run meanwhile
    let estimate = py
        .allow_threads(|| estimator.run())
        .map_err(to_value_error)?;

    estimate_to_py(py, &estimate)
}

/// The built-in Edibles dinner menu as a JSON string.
#[pyfunction]
#[pyo3(name = "edibles_dinner_config")]
pub fn py_edibles_dinner_config() -> PyResult<String> {
    to_json_string(&presets::edibles_dinner()).map_err(to_value_error)
}
