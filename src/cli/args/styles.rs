use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use rolo::app_dirs;

/// Version banner listing where configuration, data and logs live.
pub(super) fn long_version() -> &'static str {
	let mut details = format!("rolo {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	match app_dirs::get_config_dir() {
		Ok(path) => {
			let _ = writeln!(details, "config directory: {}", path.display());
		}
		Err(err) => {
			let _ = writeln!(details, "config directory: unavailable ({err})");
		}
	}
	match app_dirs::get_data_dir() {
		Ok(path) => {
			let _ = writeln!(details, "data directory: {}", path.display());
			let _ = writeln!(
				details,
				"log file: {}",
				path.join(rolo::logging::LOG_FILE_NAME).display()
			);
		}
		Err(err) => {
			let _ = writeln!(details, "data directory: unavailable ({err})");
		}
	}

	Box::leak(details.into_boxed_str())
}

/// Help colours: green headings, cyan literals, yellow placeholders.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}
