//! Round outcomes, always from the player's point of view.

use serde::{Deserialize, Serialize};

use super::Choice;

/// Result of one round for the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Banner shown under the round result.
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Outcome::Win => "You win!",
            Outcome::Lose => "You lose!",
            Outcome::Draw => "It's a tie!",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Draw => "draw",
        })
    }
}

/// The choices and outcome of the most recently completed round.
///
/// Replaced wholesale every round; sessions never keep a history of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub player: Choice,
    pub computer: Choice,
    pub outcome: Outcome,
}
