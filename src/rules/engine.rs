//! Outcome rule and computer move generation.
//!
//! The whole game reduces to two pure pieces:
//! - [`resolve`]: a total function over the nine (player, computer) pairs
//! - [`random_choice`]: a uniform draw over the three choices
//!
//! [`play_round`] glues them together for a single round.

use crate::core::{uniform_choice, Choice, ChoiceSource, Outcome, RoundResult};

/// Decide a round from the player's perspective.
///
/// Equal choices draw. Otherwise the player wins when their choice beats
/// the computer's (rock > scissors, paper > rock, scissors > paper).
#[must_use]
pub fn resolve(player: Choice, computer: Choice) -> Outcome {
    if player == computer {
        Outcome::Draw
    } else if player.beats() == computer {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// Draw a computer choice from the thread-local generator.
#[must_use]
pub fn random_choice() -> Choice {
    uniform_choice(&mut rand::thread_rng())
}

/// Draw the computer's choice from `source` and decide the round.
pub fn play_round(player: Choice, source: &mut dyn ChoiceSource) -> RoundResult {
    let computer = source.next_choice();
    RoundResult {
        player,
        computer,
        outcome: resolve(player, computer),
    }
}
