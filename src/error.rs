//! Crate-level error type.

use thiserror::Error;

/// Errors surfaced by the library and the terminal host.
///
/// Game logic itself cannot fail; these cover parsing user input and
/// setting up the host environment.
#[derive(Debug, Error)]
pub enum RpsError {
    /// Input was not a recognizable choice.
    #[error("unrecognized choice {0:?} (expected rock, paper or scissors)")]
    ParseChoice(String),

    /// A global logger was already installed.
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = RpsError> = std::result::Result<T, E>;
