//! Interactive terminal session for `rolo`.
//!
//! [`App`] holds the session state, [`run`] drives it against a real
//! terminal. The submodules split key handling, drawing and the shared
//! widgets.

mod actions;
mod app;
pub mod components;
mod config;
pub mod input;
mod outcome;
mod render;
mod runtime;
pub mod theme;

#[cfg(test)]
mod tests;

pub use app::App;
pub use config::AppConfig;
pub use input::SearchInput;
pub use outcome::{Screen, Selection, SessionOutcome};
pub use runtime::run;
pub use theme::Theme;
