//! Python bindings for the rust-rps session engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_rps as rps
//!
//! rps.resolve("rock", "scissors")   # "win"
//!
//! session = rps.Session(seed=42)
//! session.choose("paper")           # True
//! session.resolve()                 # "win", "lose" or "draw"
//! session.play_again()              # True
//! session.wins + session.losses + session.ties   # 1
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

/// rust-rps: Rock-Paper-Scissors rules and session state.
#[pymodule]
fn rust_rps(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_resolve, m)?)?;
    m.add_function(wrap_pyfunction!(py_random_choice, m)?)?;
    m.add_class::<PySession>()?;
    Ok(())
}
