//! Round lifecycle phases.

use serde::{Deserialize, Serialize};

use crate::core::{Choice, RoundResult};

/// Where the current round stands.
///
/// ```text
/// Idle --submit--> Resolving --resolve--> Resolved --play_again--> Idle
/// ```
///
/// No other transitions exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum RoundPhase {
    /// Waiting for the player to choose.
    #[default]
    Idle,

    /// The player has chosen; the computer's choice is pending.
    Resolving { player: Choice },

    /// Both choices are known and the tally has been updated.
    Resolved { round: RoundResult },
}

impl RoundPhase {
    /// Short lowercase name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            RoundPhase::Idle => "idle",
            RoundPhase::Resolving { .. } => "resolving",
            RoundPhase::Resolved { .. } => "resolved",
        }
    }

    /// The player's choice for the current round, if one has been made.
    #[must_use]
    pub const fn player_choice(&self) -> Option<Choice> {
        match self {
            RoundPhase::Idle => None,
            RoundPhase::Resolving { player } => Some(*player),
            RoundPhase::Resolved { round } => Some(round.player),
        }
    }

    /// The completed round, while in `Resolved`.
    #[must_use]
    pub const fn round(&self) -> Option<&RoundResult> {
        match self {
            RoundPhase::Resolved { round } => Some(round),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, RoundPhase::Idle)
    }

    #[must_use]
    pub const fn is_resolving(&self) -> bool {
        matches!(self, RoundPhase::Resolving { .. })
    }
}

impl std::fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a submitted choice was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// A round is already resolving; moves are never queued.
    RoundInFlight,
    /// The last round's result is still showing; play again first.
    AwaitingPlayAgain,
}

/// What happened to a submitted choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Submission {
    /// The round started resolving.
    Accepted,
    /// Nothing changed.
    Ignored(Rejection),
}

impl Submission {
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Submission::Accepted)
    }
}
