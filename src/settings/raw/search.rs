use std::time::Duration;

use rolo_core::SearchSettings;
use serde::Deserialize;

use super::super::resolved::SearchOptions;
use super::super::util::sanitize_stages;
use crate::cli::CliArgs;

/// `[search]` values as read from files and the environment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) tick_ms: Option<u64>,
	pub(super) step: Option<u32>,
	pub(super) stage_every: Option<u32>,
	pub(super) stages: Option<Vec<String>>,
	pub(super) min_results: Option<usize>,
	pub(super) max_results: Option<usize>,
	pub(super) retry_backoff_ms: Option<u64>,
	pub(super) max_retries: Option<u8>,
	pub(super) seed: Option<u64>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(tick_ms) = cli.tick_ms {
			self.tick_ms = Some(tick_ms);
		}
		if let Some(min) = cli.min_results {
			self.min_results = Some(min);
		}
		if let Some(max) = cli.max_results {
			self.max_results = Some(max);
		}
		if let Some(seed) = cli.seed {
			self.seed = Some(seed);
		}
	}

	/// Fill unset values from [`SearchSettings::default`].
	pub(super) fn finalize(self) -> SearchOptions {
		let defaults = SearchSettings::default();
		let millis =
			|duration: Duration| u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
		SearchOptions {
			tick_ms: self.tick_ms.unwrap_or_else(|| millis(defaults.tick)),
			step: self.step.unwrap_or(u32::from(defaults.step)),
			stage_every: self.stage_every.unwrap_or(u32::from(defaults.stage_every)),
			stages: self.stages.map(sanitize_stages).unwrap_or(defaults.stages),
			min_results: self.min_results.unwrap_or(defaults.min_results),
			max_results: self.max_results.unwrap_or(defaults.max_results),
			retry_backoff_ms: self
				.retry_backoff_ms
				.unwrap_or_else(|| millis(defaults.retry_backoff)),
			max_retries: self.max_retries.unwrap_or(defaults.max_retries),
			seed: self.seed,
		}
	}
}
