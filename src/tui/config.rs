use rolo_core::{ImagePolicy, SearchSettings};

use super::outcome::Screen;
use super::theme::Theme;

/// Everything the interactive session needs to start.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
	/// Screen shown first.
	pub screen: Screen,
	/// Text placed in the input of the first screen.
	pub initial_query: String,
	pub theme: Theme,
	pub search: SearchSettings,
	/// Seed for reproducible synthetic search results.
	pub seed: Option<u64>,
	pub images: ImagePolicy,
}
