//! Apartment listings and their client-side filter.

mod browser;
mod chips;
mod filter;
mod notifications;
mod seed;

use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

pub use browser::ListingBrowser;
pub use chips::FilterChip;
pub use filter::{FilterState, LocationFilter, PriceBucket, apply_filters, matches};
pub use notifications::Notifications;
pub use seed::{KNOWN_LOCATIONS, seed_listings};

/// Market segment of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
	Luxury,
	Regular,
}

impl fmt::Display for ListingKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Luxury => f.write_str("Luxury"),
			Self::Regular => f.write_str("Regular"),
		}
	}
}

/// A rentable apartment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
	pub id: u32,
	pub title: String,
	/// Monthly rent in whole euros.
	pub price: u32,
	pub location: String,
	pub kind: ListingKind,
	pub is_new: bool,
	pub image: String,
	pub tags: IndexSet<String>,
}

impl Listing {
	#[must_use]
	pub fn has_tag(&self, tag: &str) -> bool {
		self.tags.contains(tag)
	}
}
