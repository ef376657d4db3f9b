//! Terminal front-end for the `rolo` contact directory.
//!
//! The state machines live in `rolo-core`; this crate adds the ratatui
//! session, its themes and the directory and logging plumbing the binary
//! shares with embedders.

pub mod app_dirs;
pub mod logging;
pub mod tui;

pub use tui::{App, AppConfig, Screen, SearchInput, Selection, SessionOutcome, run};
pub use tui::theme::{Theme, builtin_themes, default_theme};
