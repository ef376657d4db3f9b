//! Widgets shared by the screen renderers.

pub mod chips;
pub mod prompt;
pub mod tables;
pub mod tabs;

pub use chips::{render_chips, render_tag_strip};
pub use prompt::{InputContext, ProgressState, render_input_with_tabs};
pub use tables::{HEADER_AND_DIVIDER_HEIGHT, TableSpec, clamp_selection, render_table};
pub use tabs::render_tabs;
