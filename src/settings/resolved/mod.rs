use std::time::Duration;

use rolo_core::{ImagePolicy, SearchSettings};
use rolo::tui::Screen;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub view: Screen,
	pub initial_query: String,
	/// Normalised theme name, checked against the built-in themes.
	pub theme: String,
	pub search: SearchOptions,
	pub images: ImagePolicy,
}

/// Search timing and batch settings in their configured units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
	pub tick_ms: u64,
	pub step: u32,
	pub stage_every: u32,
	pub stages: Vec<String>,
	pub min_results: usize,
	pub max_results: usize,
	pub retry_backoff_ms: u64,
	pub max_retries: u8,
	pub seed: Option<u64>,
}

impl SearchOptions {
	/// Convert to the directory's settings. Call after validation.
	pub fn to_settings(&self) -> SearchSettings {
		SearchSettings {
			tick: Duration::from_millis(self.tick_ms),
			step: u8::try_from(self.step).unwrap_or(u8::MAX),
			stage_every: u8::try_from(self.stage_every).unwrap_or(u8::MAX),
			stages: self.stages.clone(),
			min_results: self.min_results,
			max_results: self.max_results,
			retry_backoff: Duration::from_millis(self.retry_backoff_ms),
			max_retries: self.max_retries,
		}
	}
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		for line in summary::summary_lines(self) {
			println!("{line}");
		}
	}
}
