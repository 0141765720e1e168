//! Game rules.
//!
//! Pure functions only: no timing, no session state. The session layer
//! calls into these once per round.

pub mod engine;

pub use engine::{play_round, random_choice, resolve};
