//! Where `rolo` looks for configuration and writes its log.
//!
//! Each location can be pinned with an environment variable; otherwise the
//! platform layout from `directories` is used.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

/// Directories the application uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppDir {
	Config,
	Data,
}

impl AppDir {
	fn override_var(self) -> &'static str {
		match self {
			Self::Config => "ROLO_CONFIG_DIR",
			Self::Data => "ROLO_DATA_DIR",
		}
	}

	fn from_project(self, dirs: &ProjectDirs) -> PathBuf {
		match self {
			Self::Config => dirs.config_local_dir().to_path_buf(),
			Self::Data => dirs.data_local_dir().to_path_buf(),
		}
	}
}

/// An empty override counts as unset.
fn non_empty(value: Option<OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

fn resolve(dir: AppDir) -> Result<PathBuf> {
	if let Some(path) = non_empty(env::var_os(dir.override_var())) {
		return Ok(path);
	}
	let project = ProjectDirs::from("io", "albo", "rolo")
		.ok_or_else(|| anyhow!("no home directory to place rolo's {dir:?} directory in"))?;
	Ok(dir.from_project(&project))
}

/// Directory searched for `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	resolve(AppDir::Config)
}

/// Directory holding `rolo.log`.
pub fn get_data_dir() -> Result<PathBuf> {
	resolve(AppDir::Data)
}
