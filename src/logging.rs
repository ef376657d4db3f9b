//! File-backed logger setup.
//!
//! The terminal belongs to the UI while it runs, so records go to `rolo.log`
//! in the data directory instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::app_dirs;

/// File name of the log inside the data directory.
pub const LOG_FILE_NAME: &str = "rolo.log";
const FILTER_ENV: &str = "ROLO_LOG";
const DEFAULT_FILTER: &str = "info";

/// Install the global logger writing to the data directory.
///
/// Failure to resolve or open the log file leaves logging disabled; the
/// returned path is `None` in that case.
pub fn initialize() -> Option<PathBuf> {
	let dir = app_dirs::get_data_dir().ok()?;
	match install(&dir) {
		Ok(path) => {
			log::info!("rolo {} started", env!("CARGO_PKG_VERSION"));
			Some(path)
		}
		Err(_) => None,
	}
}

fn install(dir: &Path) -> Result<PathBuf> {
	let (path, file) = open_log_file(dir)?;
	Builder::from_env(Env::new().filter_or(FILTER_ENV, DEFAULT_FILTER))
		.format_timestamp_millis()
		.target(Target::Pipe(Box::new(file)))
		.try_init()
		.context("a logger is already installed")?;
	Ok(path)
}

fn open_log_file(dir: &Path) -> Result<(PathBuf, File)> {
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE_NAME);
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;
	Ok((path, file))
}
