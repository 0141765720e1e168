//! Rule bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::Choice;
use crate::rules;

/// Parse a choice name, raising `ValueError` on anything unrecognized.
pub(crate) fn parse_choice(name: &str) -> PyResult<Choice> {
    name.parse::<Choice>()
        .map_err(|err| PyValueError::new_err(err.to_string()))
}

/// Decide a round from the player's perspective.
///
/// Returns "win", "lose" or "draw".
#[pyfunction]
#[pyo3(name = "resolve")]
pub fn py_resolve(player: &str, computer: &str) -> PyResult<String> {
    let outcome = rules::resolve(parse_choice(player)?, parse_choice(computer)?);
    Ok(outcome.to_string())
}

/// Draw a uniformly random choice name.
#[pyfunction]
#[pyo3(name = "random_choice")]
pub fn py_random_choice() -> &'static str {
    rules::random_choice().label()
}
