//! Session integration tests: full rounds through the synchronous state machine.

use proptest::prelude::*;
use rust_rps::core::{Choice, GameRng, Outcome, ScoreTally, ScriptedChoices};
use rust_rps::rules::resolve;
use rust_rps::session::{Rejection, RoundPhase, SessionState, Submission};

fn play(state: &mut SessionState, choice: Choice) -> Outcome {
    assert_eq!(state.submit(choice), Submission::Accepted);
    let round = state.resolve().expect("round should resolve");
    assert!(state.play_again());
    round.outcome
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_rock_beats_forced_scissors() {
    let mut state = SessionState::new(ScriptedChoices::always(Choice::Scissors));
    assert_eq!(*state.tally(), ScoreTally { wins: 0, losses: 0, ties: 0 });

    state.submit(Choice::Rock);
    let round = state.resolve().unwrap();

    assert_eq!(round.player, Choice::Rock);
    assert_eq!(round.computer, Choice::Scissors);
    assert_eq!(round.outcome, Outcome::Win);
    assert_eq!(*state.tally(), ScoreTally { wins: 1, losses: 0, ties: 0 });
}

#[test]
fn test_paper_against_forced_paper_is_a_tie() {
    let mut state = SessionState::new(ScriptedChoices::always(Choice::Paper));

    state.submit(Choice::Paper);
    let round = state.resolve().unwrap();

    assert_eq!(round.outcome, Outcome::Draw);
    assert_eq!(*state.tally(), ScoreTally { wins: 0, losses: 0, ties: 1 });
}

#[test]
fn test_scripted_session() {
    let mut state = SessionState::new(ScriptedChoices::new([
        Choice::Scissors,
        Choice::Scissors,
        Choice::Rock,
        Choice::Paper,
    ]));

    assert_eq!(play(&mut state, Choice::Rock), Outcome::Win);
    assert_eq!(play(&mut state, Choice::Paper), Outcome::Lose);
    assert_eq!(play(&mut state, Choice::Rock), Outcome::Draw);
    assert_eq!(play(&mut state, Choice::Scissors), Outcome::Win);

    assert_eq!(*state.tally(), ScoreTally { wins: 2, losses: 1, ties: 1 });
    assert_eq!(state.rounds_played(), 4);
    assert_eq!(state.tally().win_rate_label(), "50");
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_ignored_submission_leaves_round_untouched() {
    let mut state = SessionState::new(ScriptedChoices::always(Choice::Rock));
    state.submit(Choice::Paper);
    let before = state.snapshot();

    for choice in Choice::ALL {
        assert_eq!(
            state.submit(choice),
            Submission::Ignored(Rejection::RoundInFlight)
        );
    }
    assert_eq!(state.snapshot(), before);

    // The first choice is the one that resolves.
    let round = state.resolve().unwrap();
    assert_eq!(round.player, Choice::Paper);
    assert_eq!(round.outcome, Outcome::Win);
}

#[test]
fn test_play_again_keeps_tally() {
    let mut state = SessionState::new(ScriptedChoices::always(Choice::Paper));
    state.submit(Choice::Rock);
    state.resolve();
    let tally = *state.tally();

    assert!(state.play_again());
    assert_eq!(*state.phase(), RoundPhase::Idle);
    assert!(state.last_round().is_none());
    assert_eq!(*state.tally(), tally);
}

#[test]
fn test_seeded_sessions_replay() {
    let mut a = SessionState::with_seed(Some(99));
    let mut b = SessionState::new(GameRng::new(99));

    for choice in Choice::ALL.iter().cycle().take(30) {
        assert_eq!(play(&mut a, *choice), play(&mut b, *choice));
    }
    assert_eq!(a.tally(), b.tally());
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Clone, Debug)]
enum Op {
    Submit(Choice),
    Resolve,
    PlayAgain,
}

fn choice_strategy() -> impl Strategy<Value = Choice> {
    prop_oneof![Just(Choice::Rock), Just(Choice::Paper), Just(Choice::Scissors)]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        choice_strategy().prop_map(Op::Submit),
        Just(Op::Resolve),
        Just(Op::PlayAgain),
    ]
}

proptest! {
    #[test]
    fn prop_tally_counts_completed_rounds(
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(), 0..200),
    ) {
        let mut state = SessionState::with_seed(Some(seed));
        let mut completed = 0u64;

        for op in ops {
            let before = *state.tally();
            match op {
                Op::Submit(choice) => {
                    let was_idle = state.phase().is_idle();
                    let submission = state.submit(choice);
                    prop_assert_eq!(submission.is_accepted(), was_idle);
                    prop_assert_eq!(*state.tally(), before);
                }
                Op::Resolve => {
                    if let Some(round) = state.resolve() {
                        completed += 1;
                        prop_assert_eq!(round.outcome, resolve(round.player, round.computer));
                        prop_assert_eq!(state.tally().count(round.outcome), before.count(round.outcome) + 1);
                    } else {
                        prop_assert_eq!(*state.tally(), before);
                    }
                }
                Op::PlayAgain => {
                    state.play_again();
                    prop_assert_eq!(*state.tally(), before);
                }
            }

            prop_assert_eq!(state.tally().total(), completed);
            prop_assert_eq!(state.rounds_played(), completed);
        }
    }
}
