//! Text rendering of a session snapshot.

use colored::{Color, Colorize};
use std::fmt;

use crate::core::{Choice, Outcome, RoundResult, ScoreTally};
use crate::session::{RoundPhase, SessionSnapshot};

const TITLE: &str = "Rock Paper Scissors";
const THINKING: &str = "🤔 thinking...";

fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.color(color).bold().to_string()
    } else {
        text.to_owned()
    }
}

fn outcome_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Win => Color::Green,
        Outcome::Lose => Color::Red,
        Outcome::Draw => Color::Yellow,
    }
}

struct ScorePanel<'a> {
    tally: &'a ScoreTally,
    color: bool,
}

impl fmt::Display for ScorePanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tally = self.tally;
        writeln!(f, "Score")?;
        writeln!(
            f,
            "  {}  {}  {}",
            paint(&format!("{:>3} Wins", tally.wins), Color::Green, self.color),
            paint(&format!("{:>3} Losses", tally.losses), Color::Red, self.color),
            paint(&format!("{:>3} Ties", tally.ties), Color::Yellow, self.color),
        )?;
        writeln!(
            f,
            "  Win Rate: {}",
            paint(&format!("{}%", tally.win_rate_label()), Color::Green, self.color)
        )
    }
}

struct RoundPanel<'a> {
    round: &'a RoundResult,
    color: bool,
}

impl fmt::Display for RoundPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let round = self.round;
        writeln!(
            f,
            "You chose {} {}    Computer chose {} {}",
            round.player.symbol(),
            round.player.label(),
            round.computer.symbol(),
            round.computer.label(),
        )?;
        writeln!(
            f,
            "{}",
            paint(round.outcome.headline(), outcome_color(round.outcome), self.color)
        )
    }
}

struct Screen<'a> {
    snapshot: &'a SessionSnapshot,
    color: bool,
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot;
        writeln!(f, "{}", TITLE)?;
        writeln!(f)?;
        let score = ScorePanel {
            tally: &snapshot.tally,
            color: self.color,
        };
        writeln!(f, "{}", score)?;
        writeln!(f, "{}", render_choices(snapshot.selected()))?;
        writeln!(f)?;

        match &snapshot.phase {
            RoundPhase::Idle => {}
            RoundPhase::Resolving { .. } => writeln!(f, "{}\n", THINKING)?,
            RoundPhase::Resolved { round } => {
                let panel = RoundPanel {
                    round,
                    color: self.color,
                };
                writeln!(f, "{}", panel)?;
            }
        }

        writeln!(f, "{}", render_prompt(&snapshot.phase))
    }
}

/// Score panel: the three counters and the win rate.
#[must_use]
pub fn render_score(tally: &ScoreTally, color: bool) -> String {
    ScorePanel { tally, color }.to_string()
}

/// The three choice buttons, with the player's pick marked.
#[must_use]
pub fn render_choices(selected: Option<Choice>) -> String {
    Choice::ALL
        .iter()
        .map(|&choice| {
            let button = format!("{} {}", choice.symbol(), choice.label());
            if selected == Some(choice) {
                format!(">[{}]<", button)
            } else {
                format!(" [{}] ", button)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Result panel for a completed round.
#[must_use]
pub fn render_round(round: &RoundResult, color: bool) -> String {
    RoundPanel { round, color }.to_string()
}

/// Input hint for the current phase.
#[must_use]
pub fn render_prompt(phase: &RoundPhase) -> &'static str {
    match phase {
        RoundPhase::Idle => "Choose: [r]ock, [p]aper, [s]cissors, or [q]uit",
        RoundPhase::Resolving { .. } => "Waiting for the computer...",
        RoundPhase::Resolved { .. } => "[a] Play Again, or [q]uit",
    }
}

/// Full screen for one snapshot.
#[must_use]
pub fn render(snapshot: &SessionSnapshot, color: bool) -> String {
    Screen { snapshot, color }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_panel() {
        let tally = ScoreTally { wins: 2, losses: 1, ties: 0 };
        let panel = render_score(&tally, false);
        assert!(panel.contains("2 Wins"));
        assert!(panel.contains("1 Losses"));
        assert!(panel.contains("0 Ties"));
        assert!(panel.contains("Win Rate: 66.7%"));
    }

    #[test]
    fn test_round_panel() {
        let round = RoundResult {
            player: Choice::Rock,
            computer: Choice::Scissors,
            outcome: Outcome::Win,
        };
        assert_eq!(
            render_round(&round, false),
            "You chose 🪨 rock    Computer chose ✂️ scissors\nYou win!\n"
        );
    }

    #[test]
    fn test_choices_mark_selection() {
        let plain = render_choices(None);
        assert!(!plain.contains(">["));

        let marked = render_choices(Some(Choice::Paper));
        assert!(marked.contains(">[📄 paper]<"));
        assert!(marked.contains(" [🪨 rock] "));
    }

    #[test]
    fn test_idle_screen() {
        let screen = render(&SessionSnapshot::default(), false);
        assert!(screen.starts_with(TITLE));
        assert!(screen.contains("Win Rate: 0%"));
        assert!(!screen.contains(THINKING));
        assert!(screen.contains("[r]ock"));
    }

    #[test]
    fn test_resolving_screen() {
        let snapshot = SessionSnapshot {
            phase: RoundPhase::Resolving { player: Choice::Rock },
            ..SessionSnapshot::default()
        };
        let screen = render(&snapshot, false);
        assert!(screen.contains(THINKING));
        assert!(screen.contains(">[🪨 rock]<"));
        assert!(!screen.contains("Computer chose"));
    }

    #[test]
    fn test_resolved_screen() {
        let round = RoundResult {
            player: Choice::Paper,
            computer: Choice::Paper,
            outcome: Outcome::Draw,
        };
        let snapshot = SessionSnapshot {
            phase: RoundPhase::Resolved { round },
            tally: ScoreTally { wins: 0, losses: 0, ties: 1 },
        };
        let screen = render(&snapshot, false);
        assert!(screen.contains("You chose 📄 paper"));
        assert!(screen.contains("Computer chose 📄 paper"));
        assert!(screen.contains("It's a tie!"));
        assert!(screen.contains("1 Ties"));
        assert!(screen.contains("Play Again"));
        assert!(!screen.contains(THINKING));
    }
}
