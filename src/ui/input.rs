//! Player input parsing for the terminal host.

use crate::core::Choice;

/// One line of player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Choose(Choice),
    PlayAgain,
    Quit,
    /// Blank line; nothing to do.
    Empty,
    Unknown(String),
}

impl Command {
    /// Parse a line. Case and surrounding whitespace are ignored.
    ///
    /// ```
    /// use rust_rps::core::Choice;
    /// use rust_rps::ui::Command;
    ///
    /// assert_eq!(Command::parse("R"), Command::Choose(Choice::Rock));
    /// assert_eq!(Command::parse("again"), Command::PlayAgain);
    /// assert_eq!(Command::parse("q"), Command::Quit);
    /// ```
    pub fn parse(line: &str) -> Self {
        let word = line.trim().to_ascii_lowercase();
        match word.as_str() {
            "" => Command::Empty,
            "a" | "again" | "play again" => Command::PlayAgain,
            "q" | "quit" | "exit" => Command::Quit,
            other => other
                .parse::<Choice>()
                .map(Command::Choose)
                .unwrap_or_else(|_| Command::Unknown(line.trim().to_owned())),
        }
    }
}
