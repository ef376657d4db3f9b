use rolo::tui::theme;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let search = &config.search;

	if search.tick_ms == 0 {
		return Err(ConfigError::invalid(
			"search.tick_ms",
			search.tick_ms.to_string(),
			sources.source_for_tick_ms(),
			"must be greater than zero",
		));
	}

	if !(1..=100).contains(&search.step) {
		return Err(ConfigError::invalid(
			"search.step",
			search.step.to_string(),
			sources.source_for_step(),
			"must be between 1 and 100",
		));
	}

	if search.stage_every == 0 {
		return Err(ConfigError::invalid(
			"search.stage_every",
			search.stage_every.to_string(),
			sources.source_for_stage_every(),
			"must be greater than zero",
		));
	}

	if search.stages.is_empty() {
		return Err(ConfigError::invalid(
			"search.stages",
			"[]",
			sources.source_for_stages(),
			"must name at least one stage",
		));
	}

	if search.min_results == 0 {
		return Err(ConfigError::invalid(
			"search.min_results",
			search.min_results.to_string(),
			sources.source_for_min_results(),
			"must be at least 1",
		));
	}

	if search.min_results > search.max_results {
		return Err(ConfigError::invalid(
			"search.max_results",
			search.max_results.to_string(),
			sources.source_for_max_results(),
			format!("must not be below search.min_results ({})", search.min_results),
		));
	}

	if theme::by_name(&config.theme).is_none() {
		let known: Vec<&str> = theme::names().collect();
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme.clone(),
			sources.source_for_theme(),
			format!("unknown theme (expected one of: {})", known.join(", ")),
		));
	}

	Ok(())
}
