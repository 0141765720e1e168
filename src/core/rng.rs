//! Sources of computer choices.
//!
//! ## Key Features
//!
//! - **Injectable**: Sessions draw through the [`ChoiceSource`] trait, never
//!   from a global generator
//! - **Deterministic when seeded**: Same seed produces the same sequence
//! - **Scriptable**: [`ScriptedChoices`] replays a fixed sequence for tests
//!
//! ## Usage
//!
//! ```
//! use rust_rps::core::{ChoiceSource, GameRng};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! // Seeded generators agree draw for draw
//! for _ in 0..10 {
//!     assert_eq!(rng1.next_choice(), rng2.next_choice());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::Choice;

/// Anything that can produce the computer's next choice.
///
/// `Send` so a session can be resolved from a timer task.
pub trait ChoiceSource: Send {
    /// Draw the next choice.
    fn next_choice(&mut self) -> Choice;
}

/// Draw a choice uniformly from any `rand` generator.
pub fn uniform_choice<R: Rng + ?Sized>(rng: &mut R) -> Choice {
    Choice::ALL[rng.gen_range(0..Choice::ALL.len())]
}

/// General-purpose generator for computer choices.
///
/// Uses ChaCha8 so a seeded session replays exactly. No unpredictability
/// guarantee is made beyond a uniform draw over the three choices.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Seeded when `Some`, entropy otherwise.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }
}

impl ChoiceSource for GameRng {
    fn next_choice(&mut self) -> Choice {
        uniform_choice(&mut self.inner)
    }
}

/// Replays a fixed sequence of choices, cycling when exhausted.
///
/// ```
/// use rust_rps::core::{Choice, ChoiceSource, ScriptedChoices};
///
/// let mut source = ScriptedChoices::new([Choice::Scissors, Choice::Paper]);
/// assert_eq!(source.next_choice(), Choice::Scissors);
/// assert_eq!(source.next_choice(), Choice::Paper);
/// assert_eq!(source.next_choice(), Choice::Scissors);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedChoices {
    script: Vec<Choice>,
    cursor: usize,
}

impl ScriptedChoices {
    /// Build from a sequence. An empty sequence always yields rock.
    pub fn new(script: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: 0,
        }
    }

    /// A source that always returns `choice`.
    #[must_use]
    pub fn always(choice: Choice) -> Self {
        Self::new([choice])
    }

    /// How many choices have been drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl ChoiceSource for ScriptedChoices {
    fn next_choice(&mut self) -> Choice {
        let choice = match self.script.len() {
            0 => Choice::Rock,
            len => self.script[self.cursor % len],
        };
        self.cursor += 1;
        choice
    }
}

impl<S: ChoiceSource + ?Sized> ChoiceSource for Box<S> {
    fn next_choice(&mut self) -> Choice {
        (**self).next_choice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_choice(), rng2.next_choice());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..32).map(|_| rng1.next_choice()).collect();
        let seq2: Vec<_> = (0..32).map(|_| rng2.next_choice()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_roughly_uniform() {
        let mut rng = GameRng::new(7);
        let mut counts = [0usize; 3];
        let draws = 30_000;

        for _ in 0..draws {
            counts[rng.next_choice().index()] += 1;
        }

        // Expected 10_000 each; allow 5% either way.
        for count in counts {
            assert!((9_500..=10_500).contains(&count), "counts: {:?}", counts);
        }
    }

    #[test]
    fn test_from_seed_matches_new() {
        let mut a = GameRng::from_seed(Some(3));
        let mut b = GameRng::new(3);
        for _ in 0..50 {
            assert_eq!(a.next_choice(), b.next_choice());
        }
    }

    #[test]
    fn test_scripted_cycles() {
        let mut source = ScriptedChoices::new([Choice::Paper, Choice::Rock, Choice::Scissors]);
        let drawn: Vec<_> = (0..6).map(|_| source.next_choice()).collect();
        assert_eq!(
            drawn,
            vec![
                Choice::Paper,
                Choice::Rock,
                Choice::Scissors,
                Choice::Paper,
                Choice::Rock,
                Choice::Scissors
            ]
        );
        assert_eq!(source.drawn(), 6);
    }

    #[test]
    fn test_scripted_empty_falls_back_to_rock() {
        let mut source = ScriptedChoices::new(Vec::new());
        assert_eq!(source.next_choice(), Choice::Rock);
    }

    #[test]
    fn test_boxed_source() {
        let mut source: Box<dyn ChoiceSource> = Box::new(ScriptedChoices::always(Choice::Paper));
        assert_eq!(source.next_choice(), Choice::Paper);
    }
}
