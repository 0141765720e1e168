//! Logger setup for the terminal host.
//!
//! Logs go to stderr so they never interleave with the rendered screen on
//! stdout.

use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

use crate::error::Result;

/// Install a terminal logger at `level`. Fails if a logger is already set.
pub fn init(level: LevelFilter) -> Result<()> {
    CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])?;
    Ok(())
}
