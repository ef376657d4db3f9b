use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};
use rolo::app_dirs;

use crate::cli::CliArgs;

/// Prefix of environment overrides, e.g. `ROLO__SEARCH__TICK_MS`.
pub(super) const ENV_PREFIX: &str = "rolo";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix(ENV_PREFIX)
			.prefix_separator("__")
			.separator("__")
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("search.stages"),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Default configuration locations, lowest precedence first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".rolo.toml"));
		files.push(current_dir.join("rolo.toml"));
	}

	files
}
