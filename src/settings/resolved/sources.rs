use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting was set, when it was set at all.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) view: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) tick_ms: Option<SettingSource>,
	pub(crate) step: Option<SettingSource>,
	pub(crate) stage_every: Option<SettingSource>,
	pub(crate) stages: Option<SettingSource>,
	pub(crate) min_results: Option<SettingSource>,
	pub(crate) max_results: Option<SettingSource>,
}

fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
	source.clone().unwrap_or(SettingSource::ConfigKey(key))
}

impl ConfigSources {
	pub(crate) fn source_for_view(&self) -> SettingSource {
		or_key(&self.view, "ui.view")
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		or_key(&self.theme, "ui.theme")
	}

	pub(crate) fn source_for_tick_ms(&self) -> SettingSource {
		or_key(&self.tick_ms, "search.tick_ms")
	}

	pub(crate) fn source_for_step(&self) -> SettingSource {
		or_key(&self.step, "search.step")
	}

	pub(crate) fn source_for_stage_every(&self) -> SettingSource {
		or_key(&self.stage_every, "search.stage_every")
	}

	pub(crate) fn source_for_stages(&self) -> SettingSource {
		or_key(&self.stages, "search.stages")
	}

	pub(crate) fn source_for_min_results(&self) -> SettingSource {
		or_key(&self.min_results, "search.min_results")
	}

	pub(crate) fn source_for_max_results(&self) -> SettingSource {
		or_key(&self.max_results, "search.max_results")
	}
}
