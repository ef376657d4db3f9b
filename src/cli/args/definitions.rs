use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, ViewArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `rolo` binary.
#[derive(Parser, Debug)]
#[command(
	name = "rolo",
	version,
	long_version = long_version(),
	about = "Terminal contact directory with a simulated multi-source search",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "ROLO_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'v',
		long,
		value_enum,
		help = "Screen shown at startup (default: contacts)"
	)]
	pub(crate) view: Option<ViewArg>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Text placed in the input of the first screen (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "tick-ms",
		value_name = "MS",
		help = "Milliseconds between search progress steps (default: 50)"
	)]
	pub(crate) tick_ms: Option<u64>,
	#[arg(
		long = "min-results",
		value_name = "NUM",
		help = "Fewest synthetic results a search returns (default: 3)"
	)]
	pub(crate) min_results: Option<usize>,
	#[arg(
		long = "max-results",
		value_name = "NUM",
		help = "Most synthetic results a search returns (default: 8)"
	)]
	pub(crate) max_results: Option<usize>,
	#[arg(
		short = 's',
		long,
		value_name = "SEED",
		help = "Seed synthetic results for reproducible runs (default: random)"
	)]
	pub(crate) seed: Option<u64>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
