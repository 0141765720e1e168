//! The three hand shapes a player (or the computer) can throw.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RpsError;

/// One of rock, paper, or scissors.
///
/// Choices carry no identity beyond their value and are freely copied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// All choices, in display order.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// The choice this one defeats.
    ///
    /// ```
    /// use rust_rps::core::Choice;
    ///
    /// assert_eq!(Choice::Rock.beats(), Choice::Scissors);
    /// assert_eq!(Choice::Paper.beats(), Choice::Rock);
    /// assert_eq!(Choice::Scissors.beats(), Choice::Paper);
    /// ```
    #[must_use]
    pub const fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }

    /// Position in [`Choice::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Choice::Rock => 0,
            Choice::Paper => 1,
            Choice::Scissors => 2,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }

    /// Symbol shown on the choice button.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Choice::Rock => "🪨",
            Choice::Paper => "📄",
            Choice::Scissors => "✂️",
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses a full label or its initial letter, ignoring case and surrounding
/// whitespace.
impl FromStr for Choice {
    type Err = RpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "rock" => Ok(Choice::Rock),
            "p" | "paper" => Ok(Choice::Paper),
            "s" | "scissors" => Ok(Choice::Scissors),
            _ => Err(RpsError::ParseChoice(s.to_owned())),
        }
    }
}
