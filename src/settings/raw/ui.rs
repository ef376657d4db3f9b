use rolo::tui::Screen;
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources};
use super::super::util::normalize_name;
use crate::cli::CliArgs;

/// Default theme when nothing selects one.
const DEFAULT_THEME: &str = "slate";

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) view: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) view: Screen,
	pub(super) initial_query: String,
	pub(super) theme: String,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(view) = cli.view {
			self.view = Some(view.as_str().to_string());
		}
		if let Some(query) = cli.query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}

	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<UiResolution, ConfigError> {
		let view = match self.view {
			Some(raw) => raw.parse::<Screen>().map_err(|reason| {
				ConfigError::invalid("ui.view", raw, sources.source_for_view(), reason)
			})?,
			None => Screen::default(),
		};
		let theme = self
			.theme
			.map(|name| normalize_name(&name))
			.filter(|name| !name.is_empty())
			.unwrap_or_else(|| DEFAULT_THEME.to_string());

		Ok(UiResolution {
			view,
			initial_query: self.initial_query.unwrap_or_default(),
			theme,
		})
	}
}
