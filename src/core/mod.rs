//! Core game types: choices, outcomes, score, RNG, configuration.
//!
//! Everything here is plain data with no timing or I/O. The session layer
//! builds the round lifecycle on top of these.

pub mod choice;
pub mod outcome;
pub mod score;
pub mod rng;
pub mod config;

pub use choice::Choice;
pub use outcome::{Outcome, RoundResult};
pub use score::ScoreTally;
pub use rng::{uniform_choice, ChoiceSource, GameRng, ScriptedChoices};
pub use config::{SessionConfig, SoundConfig, DEFAULT_RESOLVE_DELAY_MS};
