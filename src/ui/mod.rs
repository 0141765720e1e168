//! Terminal presentation.
//!
//! Pure functions from a [`SessionSnapshot`](crate::session::SessionSnapshot)
//! to text, plus parsing of the player's typed commands. Nothing here
//! touches session state; hosts call [`render`] whenever a new snapshot
//! arrives.

mod input;
mod render;

pub use input::Command;
pub use render::{render, render_choices, render_prompt, render_round, render_score};
