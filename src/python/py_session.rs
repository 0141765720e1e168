//! Session bindings for Python.
//!
//! Python drives the round lifecycle itself, so the binding wraps the
//! synchronous `SessionState`; there is no timer on this side.

use pyo3::prelude::*;

use crate::session::SessionState;

use super::py_core::parse_choice;

/// Python wrapper for a game session.
#[pyclass(name = "Session")]
pub struct PySession {
    inner: SessionState,
}

#[pymethods]
impl PySession {
    /// Start a session. Omit `seed` for an entropy-seeded computer.
    #[new]
    #[pyo3(signature = (seed = None))]
    fn new(seed: Option<u64>) -> Self {
        Self {
            inner: SessionState::with_seed(seed),
        }
    }

    /// Submit the player's choice.
    ///
    /// Returns False (and does nothing) unless the session is idle.
    fn choose(&mut self, choice: &str) -> PyResult<bool> {
        let choice = parse_choice(choice)?;
        Ok(self.inner.submit(choice).is_accepted())
    }

    /// Finish the resolving round, returning its outcome.
    fn resolve(&mut self) -> Option<String> {
        self.inner.resolve().map(|round| round.outcome.to_string())
    }

    /// Clear the last round. Returns False unless a round has resolved.
    fn play_again(&mut self) -> bool {
        self.inner.play_again()
    }

    /// "idle", "resolving" or "resolved".
    #[getter]
    fn phase(&self) -> &'static str {
        self.inner.phase().name()
    }

    /// The computer's choice in the last round, if one is showing.
    #[getter]
    fn computer_choice(&self) -> Option<&'static str> {
        self.inner.last_round().map(|round| round.computer.label())
    }

    #[getter]
    fn wins(&self) -> u64 {
        self.inner.tally().wins
    }

    #[getter]
    fn losses(&self) -> u64 {
        self.inner.tally().losses
    }

    #[getter]
    fn ties(&self) -> u64 {
        self.inner.tally().ties
    }

    /// Percentage of rounds won.
    #[getter]
    fn win_rate(&self) -> f64 {
        self.inner.tally().win_rate()
    }

    fn __repr__(&self) -> String {
        let tally = self.inner.tally();
        format!(
            "Session(phase={}, wins={}, losses={}, ties={})",
            self.inner.phase(),
            tally.wins,
            tally.losses,
            tally.ties
        )
    }
}
