//! Outcome feedback.
//!
//! Every resolved round fires exactly one cue: win, lose, or tie. How the
//! cue is delivered (a sound file, a log line, nothing) is up to the
//! [`Notifier`] the session was built with.
//!
//! ## Failure Policy
//!
//! Cue delivery is fire-and-forget. A notifier may report a
//! [`NotifyError`], but the session only logs it at debug level via
//! [`deliver`]; it never changes state or reaches the player.

mod sound;

pub use sound::SoundNotifier;

use log::{debug, info};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::core::Outcome;

/// Feedback cue for one outcome kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cue {
    Win,
    Lose,
    Tie,
}

impl Cue {
    /// Asset file played for this cue.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Cue::Win => "win.mp3",
            Cue::Lose => "lose.mp3",
            Cue::Tie => "tie.mp3",
        }
    }
}

impl From<Outcome> for Cue {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => Cue::Win,
            Outcome::Lose => Cue::Lose,
            Outcome::Draw => Cue::Tie,
        }
    }
}

impl std::fmt::Display for Cue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Cue::Win => "win",
            Cue::Lose => "lose",
            Cue::Tie => "tie",
        })
    }
}

/// Why a cue could not be delivered.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("cue asset {} not found", .0.display())]
    MissingAsset(PathBuf),

    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cue playback failed: {0}")]
    Playback(String),
}

/// Receives one call per resolved round.
///
/// Implementations must be cheap and non-blocking; the session calls them
/// right after a round resolves.
pub trait Notifier: Send + Sync {
    /// The player won the round.
    fn on_win(&self) -> Result<(), NotifyError>;

    /// The player lost the round.
    fn on_lose(&self) -> Result<(), NotifyError>;

    /// The round was a tie.
    fn on_draw(&self) -> Result<(), NotifyError>;

    /// Dispatch to the method matching `outcome`.
    fn notify(&self, outcome: Outcome) -> Result<(), NotifyError> {
        match outcome {
            Outcome::Win => self.on_win(),
            Outcome::Lose => self.on_lose(),
            Outcome::Draw => self.on_draw(),
        }
    }
}

/// Notify and swallow any failure.
pub fn deliver(notifier: &dyn Notifier, outcome: Outcome) {
    if let Err(err) = notifier.notify(outcome) {
        debug!("Ignoring {} cue failure: {}", Cue::from(outcome), err);
    }
}

/// Does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn on_win(&self) -> Result<(), NotifyError> {
        Ok(())
    }

    fn on_lose(&self) -> Result<(), NotifyError> {
        Ok(())
    }

    fn on_draw(&self) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// Writes each cue to the log at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl LogNotifier {
    fn emit(&self, cue: Cue) -> Result<(), NotifyError> {
        info!("Cue: {}", cue);
        Ok(())
    }
}

impl Notifier for LogNotifier {
    fn on_win(&self) -> Result<(), NotifyError> {
        self.emit(Cue::Win)
    }

    fn on_lose(&self) -> Result<(), NotifyError> {
        self.emit(Cue::Lose)
    }

    fn on_draw(&self) -> Result<(), NotifyError> {
        self.emit(Cue::Tie)
    }
}

/// Remembers every cue it receives.
///
/// Optionally fails every call after recording it, to exercise the
/// swallow-on-failure path.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    cues: Mutex<Vec<Cue>>,
    fail: bool,
}

impl RecordingNotifier {
    /// A recorder that always succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder whose every call returns an error.
    pub fn failing() -> Self {
        Self {
            cues: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Cues received so far, oldest first.
    #[must_use]
    pub fn cues(&self) -> Vec<Cue> {
        self.cues.lock().clone()
    }

    fn record(&self, cue: Cue) -> Result<(), NotifyError> {
        self.cues.lock().push(cue);
        if self.fail {
            return Err(NotifyError::Playback(format!("{} cue unavailable", cue)));
        }
        Ok(())
    }
}

impl Notifier for RecordingNotifier {
    fn on_win(&self) -> Result<(), NotifyError> {
        self.record(Cue::Win)
    }

    fn on_lose(&self) -> Result<(), NotifyError> {
        self.record(Cue::Lose)
    }

    fn on_draw(&self) -> Result<(), NotifyError> {
        self.record(Cue::Tie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_from_outcome() {
        assert_eq!(Cue::from(Outcome::Win), Cue::Win);
        assert_eq!(Cue::from(Outcome::Lose), Cue::Lose);
        assert_eq!(Cue::from(Outcome::Draw), Cue::Tie);
    }

    #[test]
    fn test_cue_files_are_distinct() {
        assert_eq!(Cue::Win.file_name(), "win.mp3");
        assert_eq!(Cue::Lose.file_name(), "lose.mp3");
        assert_eq!(Cue::Tie.file_name(), "tie.mp3");
    }

    #[test]
    fn test_notify_dispatches() {
        let recorder = RecordingNotifier::new();
        recorder.notify(Outcome::Lose).unwrap();
        recorder.notify(Outcome::Draw).unwrap();
        recorder.notify(Outcome::Win).unwrap();
        assert_eq!(recorder.cues(), vec![Cue::Lose, Cue::Tie, Cue::Win]);
    }

    #[test]
    fn test_failing_recorder_still_records() {
        let recorder = RecordingNotifier::failing();
        assert!(recorder.notify(Outcome::Win).is_err());
        assert_eq!(recorder.cues(), vec![Cue::Win]);
    }

    #[test]
    fn test_deliver_swallows_errors() {
        let recorder = RecordingNotifier::failing();
        deliver(&recorder, Outcome::Draw);
        assert_eq!(recorder.cues(), vec![Cue::Tie]);
    }

    #[test]
    fn test_silent_and_log_never_fail() {
        for outcome in [Outcome::Win, Outcome::Lose, Outcome::Draw] {
            assert!(SilentNotifier.notify(outcome).is_ok());
            assert!(LogNotifier.notify(outcome).is_ok());
        }
    }
}
