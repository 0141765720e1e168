//! Synchronous session state machine.
//!
//! `SessionState` owns everything one running game needs: the phase of
//! the current round, the running tally, and the source of computer
//! choices. It has no notion of time; the caller decides when a
//! resolving round resolves (see [`RoundController`](super::RoundController)
//! for the timer-driven version).

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::phase::{Rejection, RoundPhase, Submission};
use crate::core::{Choice, ChoiceSource, GameRng, RoundResult, ScoreTally};
use crate::rules::play_round;

/// State for one running session.
pub struct SessionState {
    phase: RoundPhase,
    tally: ScoreTally,
    source: Box<dyn ChoiceSource>,
}

impl SessionState {
    /// Start a session drawing computer choices from `source`.
    pub fn new(source: impl ChoiceSource + 'static) -> Self {
        Self {
            phase: RoundPhase::Idle,
            tally: ScoreTally::new(),
            source: Box::new(source),
        }
    }

    /// Start a session with a seeded (or entropy-seeded) generator.
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self::new(GameRng::from_seed(seed))
    }

    #[must_use]
    pub fn phase(&self) -> &RoundPhase {
        &self.phase
    }

    #[must_use]
    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    /// The last completed round, until play-again clears it.
    #[must_use]
    pub fn last_round(&self) -> Option<&RoundResult> {
        self.phase.round()
    }

    /// Number of completed rounds, read off the tally.
    #[must_use]
    pub fn rounds_played(&self) -> u64 {
        self.tally.total()
    }

    /// Player picks a choice. Only accepted while idle.
    pub fn submit(&mut self, choice: Choice) -> Submission {
        let rejection = match self.phase {
            RoundPhase::Idle => {
                self.phase = RoundPhase::Resolving { player: choice };
                debug!("Player chose {}, resolving", choice);
                return Submission::Accepted;
            }
            RoundPhase::Resolving { .. } => Rejection::RoundInFlight,
            RoundPhase::Resolved { .. } => Rejection::AwaitingPlayAgain,
        };
        debug!("Ignoring {} while {}: {:?}", choice, self.phase, rejection);
        Submission::Ignored(rejection)
    }

    /// Draw the computer's choice and finish the resolving round.
    ///
    /// Updates the tally exactly once. Returns `None` (and changes
    /// nothing) unless a round is resolving.
    pub fn resolve(&mut self) -> Option<RoundResult> {
        let RoundPhase::Resolving { player } = self.phase else {
            debug!("Nothing to resolve while {}", self.phase);
            return None;
        };

        let round = play_round(player, self.source.as_mut());
        self.tally.record(round.outcome);
        self.phase = RoundPhase::Resolved { round };

        info!(
            "Round {}: {} vs {} -> {} ({})",
            self.rounds_played(), round.player, round.computer, round.outcome, self.tally
        );
        Some(round)
    }

    /// Clear the last round and go back to idle. The tally is kept.
    ///
    /// Returns `false` (and changes nothing) unless a round has resolved.
    pub fn play_again(&mut self) -> bool {
        if !matches!(self.phase, RoundPhase::Resolved { .. }) {
            debug!("Ignoring play again while {}", self.phase);
            return false;
        }
        self.phase = RoundPhase::Idle;
        true
    }

    /// Serializable view of the session for rendering.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            tally: self.tally,
        }
    }
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionState")
            .field("phase", &self.phase)
            .field("tally", &self.tally)
            .field("rounds_played", &self.rounds_played())
            .finish_non_exhaustive()
    }
}

/// Point-in-time copy of a session, as handed to renderers and observers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: RoundPhase,
    pub tally: ScoreTally,
}

impl SessionSnapshot {
    #[must_use]
    pub fn rounds_played(&self) -> u64 {
        self.tally.total()
    }

    /// The player's highlighted choice, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Choice> {
        self.phase.player_choice()
    }

    /// The round whose result is on display, if any.
    #[must_use]
    pub fn last_round(&self) -> Option<&RoundResult> {
        self.phase.round()
    }
}
