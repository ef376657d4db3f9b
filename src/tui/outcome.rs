use std::fmt;
use std::str::FromStr;

use rolo_core::{Contact, ContactId, DirectoryView, Listing};
use serde::{Deserialize, Serialize};

/// Top-level screens reachable with `Tab`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
	#[default]
	Contacts,
	Search,
	Listings,
}

impl Screen {
	pub const ALL: [Screen; 3] = [Self::Contacts, Self::Search, Self::Listings];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Contacts => "contacts",
			Self::Search => "search",
			Self::Listings => "listings",
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Contacts => "Contacts",
			Self::Search => "Search",
			Self::Listings => "Listings",
		}
	}

	#[must_use]
	pub fn next(self) -> Self {
		match self {
			Self::Contacts => Self::Search,
			Self::Search => Self::Listings,
			Self::Listings => Self::Contacts,
		}
	}

	#[must_use]
	pub fn index(self) -> usize {
		Self::ALL.iter().position(|screen| *screen == self).unwrap_or(0)
	}

	/// Directory view backing this screen, if it is a directory screen.
	#[must_use]
	pub fn directory_view(self) -> Option<DirectoryView> {
		match self {
			Self::Contacts => Some(DirectoryView::Contacts),
			Self::Search => Some(DirectoryView::Search),
			Self::Listings => None,
		}
	}
}

impl From<DirectoryView> for Screen {
	fn from(view: DirectoryView) -> Self {
		match view {
			DirectoryView::Contacts => Self::Contacts,
			DirectoryView::Search => Self::Search,
		}
	}
}

impl fmt::Display for Screen {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Screen {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|screen| screen.as_str().eq_ignore_ascii_case(value.trim()))
			.ok_or_else(|| format!("unknown view `{value}` (expected contacts, search or listings)"))
	}
}

/// Record highlighted when the session was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Selection {
	Contact(Contact),
	Listing(Listing),
}

/// Result of running the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
	/// `false` when the user left with `Esc` or `Ctrl+C`.
	pub accepted: bool,
	pub view: Screen,
	pub selection: Option<Selection>,
	/// Ids assigned to every contact imported during the session.
	pub imported: Vec<ContactId>,
}
