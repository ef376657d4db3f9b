use clap::ValueEnum;

/// Screens that can be opened first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ViewArg {
	Contacts,
	Search,
	Listings,
}

impl ViewArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			ViewArg::Contacts => "contacts",
			ViewArg::Search => "search",
			ViewArg::Listings => "listings",
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
