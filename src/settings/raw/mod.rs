use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod images;
mod search;
mod ui;

use images::ImagesSection;
use search::SearchSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	ui: UiSection,
	search: SearchSection,
	images: ImagesSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.ui.apply_cli_overrides(cli);
		self.search.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			view: detect_source(
				cli.view.is_some(),
				self.ui.view.is_some(),
				"ROLO__UI__VIEW",
				Some("--view"),
				"ui.view",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"ROLO__UI__THEME",
				Some("--theme"),
				"ui.theme",
			),
			tick_ms: detect_source(
				cli.tick_ms.is_some(),
				self.search.tick_ms.is_some(),
				"ROLO__SEARCH__TICK_MS",
				Some("--tick-ms"),
				"search.tick_ms",
			),
			step: detect_source(
				false,
				self.search.step.is_some(),
				"ROLO__SEARCH__STEP",
				None,
				"search.step",
			),
			stage_every: detect_source(
				false,
				self.search.stage_every.is_some(),
				"ROLO__SEARCH__STAGE_EVERY",
				None,
				"search.stage_every",
			),
			stages: detect_source(
				false,
				self.search.stages.is_some(),
				"ROLO__SEARCH__STAGES",
				None,
				"search.stages",
			),
			min_results: detect_source(
				cli.min_results.is_some(),
				self.search.min_results.is_some(),
				"ROLO__SEARCH__MIN_RESULTS",
				Some("--min-results"),
				"search.min_results",
			),
			max_results: detect_source(
				cli.max_results.is_some(),
				self.search.max_results.is_some(),
				"ROLO__SEARCH__MAX_RESULTS",
				Some("--max-results"),
				"search.max_results",
			),
		};

		let ui = self.ui.finalize(&sources)?;
		let config = ResolvedConfig {
			view: ui.view,
			initial_query: ui.initial_query,
			theme: ui.theme,
			search: self.search.finalize(),
			images: self.images.finalize(),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

/// Work out which layer a value came from. `None` when nothing set it.
fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: Option<&'static str>,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present && let Some(flag) = cli_flag {
		return Some(SettingSource::CliFlag(flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
