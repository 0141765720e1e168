//! Running score for a session.

use serde::{Deserialize, Serialize};

use super::Outcome;

/// Win/loss/tie counters for one session.
///
/// Counters only ever grow. Each completed round bumps exactly one of them,
/// so `total()` is always the number of rounds played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    pub wins: u64,
    pub losses: u64,
    pub ties: u64,
}

impl ScoreTally {
    /// A fresh tally with every counter at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            wins: 0,
            losses: 0,
            ties: 0,
        }
    }

    /// Bump the counter matching `outcome`.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Draw => self.ties += 1,
        }
    }

    /// Number of rounds recorded.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.wins + self.losses + self.ties
    }

    /// Counter for a single outcome kind.
    #[must_use]
    pub fn count(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::Win => self.wins,
            Outcome::Lose => self.losses,
            Outcome::Draw => self.ties,
        }
    }

    /// Percentage of rounds won, 0 when nothing has been played.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.wins as f64 / total as f64 * 100.0,
        }
    }

    /// Win rate rounded half-up to one decimal, without a trailing `.0`.
    ///
    /// ```
    /// use rust_rps::core::{Outcome, ScoreTally};
    ///
    /// let mut tally = ScoreTally::new();
    /// assert_eq!(tally.win_rate_label(), "0");
    ///
    /// tally.record(Outcome::Win);
    /// tally.record(Outcome::Lose);
    /// assert_eq!(tally.win_rate_label(), "50");
    ///
    /// tally.record(Outcome::Draw);
    /// assert_eq!(tally.win_rate_label(), "33.3");
    /// ```
    #[must_use]
    pub fn win_rate_label(&self) -> String {
        if self.total() == 0 {
            return "0".to_owned();
        }
        let rate = (self.win_rate() * 10.0).round() / 10.0;
        let label = format!("{:.1}", rate);
        match label.strip_suffix(".0") {
            Some(whole) => whole.to_owned(),
            None => label,
        }
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} wins, {} losses, {} ties",
            self.wins, self.losses, self.ties
        )
    }
}
