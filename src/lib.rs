//! # rust-rps
//!
//! Rock-Paper-Scissors against the computer, one round at a time, with a
//! running score for the session.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: The outcome of a round is a total function of the two
//!    choices. No hidden state feeds into it.
//!
//! 2. **Injected Randomness**: Computer choices come from a `ChoiceSource`,
//!    so tests can script them and seeded sessions replay exactly.
//!
//! 3. **One Round In Flight**: A choice is only accepted while idle.
//!    Input during resolution is ignored, never queued.
//!
//! ## Architecture
//!
//! - **State machine**: `SessionState` moves idle -> resolving -> resolved
//!   -> idle and bumps exactly one tally counter per resolved round.
//!
//! - **Timer**: `RoundController` resolves rounds after a fixed delay on a
//!   tokio task that is cancelled when the controller goes away.
//!
//! - **Feedback**: Outcome cues go through the `Notifier` trait; delivery
//!   failures are logged and dropped.
//!
//! ## Modules
//!
//! - `core`: Choices, outcomes, score tally, RNG, configuration
//! - `rules`: Outcome rule and computer move generation
//! - `session`: Round lifecycle state machine and timer-driven controller
//! - `notify`: Outcome cues (sound, log, recording)
//! - `ui`: Terminal rendering and input parsing
//! - `logging`: Logger setup
//! - `error`: Crate error type

pub mod core;
pub mod error;
pub mod logging;
pub mod notify;
pub mod rules;
pub mod session;
pub mod ui;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Choice, ChoiceSource, GameRng, Outcome, RoundResult, ScoreTally, ScriptedChoices,
    SessionConfig, SoundConfig,
};

pub use crate::error::{Result, RpsError};

pub use crate::notify::{
    Cue, LogNotifier, Notifier, NotifyError, RecordingNotifier, SilentNotifier, SoundNotifier,
};

pub use crate::rules::{play_round, random_choice, resolve};

pub use crate::session::{
    Rejection, RoundController, RoundPhase, SessionSnapshot, SessionState, Submission,
};
