//! Session lifecycle.
//!
//! A session is one running game: it starts with an empty tally and plays
//! any number of rounds, one at a time.
//!
//! - [`SessionState`]: the synchronous state machine (idle, resolving,
//!   resolved) plus the running tally
//! - [`RoundController`]: drives a `SessionState` with a cancellable
//!   resolution timer and fires outcome cues
//!
//! ## Example Usage
//!
//! ```
//! use rust_rps::core::{Choice, Outcome, ScriptedChoices};
//! use rust_rps::session::{SessionState, Submission};
//!
//! let mut session = SessionState::new(ScriptedChoices::always(Choice::Scissors));
//!
//! assert_eq!(session.submit(Choice::Rock), Submission::Accepted);
//! let round = session.resolve().unwrap();
//! assert_eq!(round.outcome, Outcome::Win);
//! assert_eq!(session.tally().wins, 1);
//!
//! assert!(session.play_again());
//! assert!(session.last_round().is_none());
//! ```

mod controller;
mod phase;
mod state;

pub use controller::RoundController;
pub use phase::{Rejection, RoundPhase, Submission};
pub use state::{SessionSnapshot, SessionState};
