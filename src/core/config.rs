//! Session configuration.
//!
//! The game component itself takes no configuration; these values
//! parameterize whatever hosts it (timer length, random seed, sound output).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default pause between a player's choice and the reveal.
pub const DEFAULT_RESOLVE_DELAY_MS: u64 = 1_000;

/// Where outcome cues come from and how they are played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundConfig {
    /// External command used to play a cue file (e.g. `aplay`, `afplay`).
    /// The cue's path is passed as the last argument. `None` disables sound.
    pub command: Option<String>,

    /// Directory holding `win.mp3`, `lose.mp3` and `tie.mp3`.
    pub asset_dir: PathBuf,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            command: None,
            asset_dir: PathBuf::from("sounds"),
        }
    }
}

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Milliseconds spent in the resolving ("thinking") state.
    pub resolve_delay_ms: u64,

    /// Seed for the computer's choices.
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Whether rendered output uses terminal colors.
    pub color: bool,

    /// Outcome cue playback.
    pub sound: SoundConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            resolve_delay_ms: DEFAULT_RESOLVE_DELAY_MS,
            seed: None,
            color: true,
            sound: SoundConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resolving delay in milliseconds.
    pub fn with_resolve_delay_ms(mut self, millis: u64) -> Self {
        self.resolve_delay_ms = millis;
        self
    }

    /// Seed the computer's choices.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable colored output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Set the command used to play cue files.
    pub fn with_sound_command(mut self, command: impl Into<String>) -> Self {
        self.sound.command = Some(command.into());
        self
    }

    /// Set the directory cue files are loaded from.
    pub fn with_sound_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.sound.asset_dir = dir.into();
        self
    }

    /// The resolving delay as a `Duration`.
    #[must_use]
    pub fn resolve_delay(&self) -> Duration {
        Duration::from_millis(self.resolve_delay_ms)
    }
}
