//! Cue playback through an external audio player.

use log::trace;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

use super::{Cue, Notifier, NotifyError};
use crate::core::SoundConfig;

/// Plays `win.mp3` / `lose.mp3` / `tie.mp3` by spawning a player command.
///
/// Playback is never awaited. The child handle is dropped right after the
/// spawn and the tokio runtime reaps it, so this must be called from inside
/// a runtime.
#[derive(Clone, Debug)]
pub struct SoundNotifier {
    command: String,
    asset_dir: PathBuf,
}

impl SoundNotifier {
    /// Create a notifier running `command <asset_dir>/<cue file>`.
    pub fn new(command: impl Into<String>, asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            asset_dir: asset_dir.into(),
        }
    }

    /// Build from config. Returns `None` when no player command is set.
    #[must_use]
    pub fn from_config(config: &SoundConfig) -> Option<Self> {
        config
            .command
            .as_ref()
            .map(|command| Self::new(command.clone(), config.asset_dir.clone()))
    }

    /// Path of the asset for `cue`.
    #[must_use]
    pub fn asset_path(&self, cue: Cue) -> PathBuf {
        self.asset_dir.join(cue.file_name())
    }

    fn play(&self, cue: Cue) -> Result<(), NotifyError> {
        let path = self.asset_path(cue);
        if !path.is_file() {
            return Err(NotifyError::MissingAsset(path));
        }
        self.spawn(&path)
    }

    fn spawn(&self, path: &Path) -> Result<(), NotifyError> {
        let child = Command::new(&self.command)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(false)
            .spawn()
            .map_err(|source| NotifyError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        trace!(
            "Spawned `{}` (pid {:?}) for {}",
            self.command,
            child.id(),
            path.display()
        );
        drop(child);
        Ok(())
    }
}

impl Notifier for SoundNotifier {
    fn on_win(&self) -> Result<(), NotifyError> {
        self.play(Cue::Win)
    }

    fn on_lose(&self) -> Result<(), NotifyError> {
        self.play(Cue::Lose)
    }

    fn on_draw(&self) -> Result<(), NotifyError> {
        self.play(Cue::Tie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;

    #[test]
    fn test_from_config_requires_command() {
        assert!(SoundNotifier::from_config(&SoundConfig::default()).is_none());

        let config = SoundConfig {
            command: Some("aplay".to_owned()),
            asset_dir: PathBuf::from("assets"),
        };
        let notifier = SoundNotifier::from_config(&config).unwrap();
        assert_eq!(notifier.asset_path(Cue::Tie), PathBuf::from("assets/tie.mp3"));
    }

    #[test]
    fn test_missing_asset_is_an_error() {
        let notifier = SoundNotifier::new("true", "/nonexistent/rps-sounds");
        let err = notifier.notify(Outcome::Win).unwrap_err();
        assert!(matches!(err, NotifyError::MissingAsset(_)));
    }

    fn asset_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("rps-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_missing_command_is_an_error() {
        let dir = asset_dir("no-player");
        std::fs::write(dir.join("lose.mp3"), b"").unwrap();

        let notifier = SoundNotifier::new("rps-no-such-player-binary", &dir);
        let err = notifier.notify(Outcome::Lose).unwrap_err();
        assert!(matches!(err, NotifyError::Spawn { .. }));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_spawns_player_for_existing_asset() {
        let dir = asset_dir("player");
        std::fs::write(dir.join("win.mp3"), b"").unwrap();

        let notifier = SoundNotifier::new("true", &dir);
        notifier.notify(Outcome::Win).unwrap();

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
