use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::Listing;

/// Monthly rent bands offered by the price filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBucket {
	#[default]
	All,
	/// Below 1200.
	Low,
	/// 1200 to 1400 inclusive.
	Medium,
	/// Above 1400.
	High,
}

impl PriceBucket {
	pub const ALL: [PriceBucket; 4] = [Self::All, Self::Low, Self::Medium, Self::High];

	#[must_use]
	pub fn contains(self, price: u32) -> bool {
		match self {
			Self::All => true,
			Self::Low => price < 1200,
			Self::Medium => (1200..=1400).contains(&price),
			Self::High => price > 1400,
		}
	}

	#[must_use]
	pub fn next(self) -> Self {
		let index = Self::ALL.iter().position(|b| *b == self).unwrap_or(0);
		Self::ALL[(index + 1) % Self::ALL.len()]
	}

	/// Short range description, `None` for [`PriceBucket::All`].
	#[must_use]
	pub fn range_label(self) -> Option<&'static str> {
		match self {
			Self::All => None,
			Self::Low => Some("< 1200€"),
			Self::Medium => Some("1200€ - 1400€"),
			Self::High => Some("> 1400€"),
		}
	}
}

impl fmt::Display for PriceBucket {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.range_label().unwrap_or("All prices"))
	}
}

/// District filter: any district, or one matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationFilter {
	#[default]
	All,
	Exact(String),
}

impl LocationFilter {
	pub fn exact(location: impl Into<String>) -> Self {
		Self::Exact(location.into())
	}

	#[must_use]
	pub fn accepts(&self, location: &str) -> bool {
		match self {
			Self::All => true,
			Self::Exact(wanted) => wanted.to_lowercase() == location.to_lowercase(),
		}
	}

	#[must_use]
	pub fn is_all(&self) -> bool {
		matches!(self, Self::All)
	}
}

impl fmt::Display for LocationFilter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::All => f.write_str("All districts"),
			Self::Exact(location) => f.write_str(location),
		}
	}
}

/// Every criterion of the listing filter.
///
/// [`FilterState::default`] is the identity filter that accepts every listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
	pub text: String,
	pub price: PriceBucket,
	pub location: LocationFilter,
	/// Tags a listing must all carry, in the order they were toggled on.
	pub required_tags: IndexSet<String>,
}

impl FilterState {
	#[must_use]
	pub fn is_identity(&self) -> bool {
		self == &Self::default()
	}

	/// Add `tag` when absent, remove it when present.
	pub fn toggle_tag(&mut self, tag: &str) {
		if !self.required_tags.shift_remove(tag) {
			self.required_tags.insert(tag.to_string());
		}
	}

	pub fn reset(&mut self) {
		*self = Self::default();
	}
}

/// Conjunction of the text, price, location and tag predicates.
#[must_use]
pub fn matches(listing: &Listing, filter: &FilterState) -> bool {
	let text = filter.text.to_lowercase();
	listing.title.to_lowercase().contains(&text)
		&& filter.price.contains(listing.price)
		&& filter.location.accepts(&listing.location)
		&& filter.required_tags.iter().all(|tag| listing.has_tag(tag))
}

/// Listings accepted by `filter`, in seed order.
#[must_use]
pub fn apply_filters<'a>(listings: &'a [Listing], filter: &FilterState) -> Vec<&'a Listing> {
	listings
		.iter()
		.filter(|listing| matches(listing, filter))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::listings::seed_listings;

	fn ids(listings: &[&Listing]) -> Vec<u32> {
		listings.iter().map(|listing| listing.id).collect()
	}

	#[test]
	fn identity_filter_accepts_everything() {
		let seed = seed_listings();
		assert_eq!(ids(&apply_filters(&seed, &FilterState::default())), vec![1, 2, 3, 4]);
	}

	#[test]
	fn price_buckets_partition_the_range() {
		assert!(PriceBucket::Low.contains(1199));
		assert!(!PriceBucket::Low.contains(1200));
		assert!(PriceBucket::Medium.contains(1200));
		assert!(PriceBucket::Medium.contains(1400));
		assert!(!PriceBucket::Medium.contains(1401));
		assert!(PriceBucket::High.contains(1401));
		assert!(!PriceBucket::High.contains(1400));
	}

	#[test]
	fn text_matches_title_case_insensitively() {
		let seed = seed_listings();
		let filter = FilterState {
			text: "WOHNZIMMER".into(),
			..FilterState::default()
		};
		assert_eq!(ids(&apply_filters(&seed, &filter)), vec![1, 3]);
	}

	#[test]
	fn location_matches_case_insensitively() {
		let seed = seed_listings();
		let filter = FilterState {
			location: LocationFilter::exact("altstadt"),
			..FilterState::default()
		};
		assert_eq!(ids(&apply_filters(&seed, &filter)), vec![2]);

		let empty = FilterState {
			location: LocationFilter::exact("Ostend"),
			..FilterState::default()
		};
		assert!(apply_filters(&seed, &empty).is_empty());
	}

	#[test]
	fn required_tags_must_all_be_present() {
		let seed = seed_listings();
		let mut filter = FilterState::default();
		filter.toggle_tag("Ziegelwand");
		assert_eq!(ids(&apply_filters(&seed, &filter)), vec![2]);
		filter.toggle_tag("Holzboden");
		assert!(apply_filters(&seed, &filter).is_empty());
	}

	#[test]
	fn toggle_tag_is_an_involution() {
		let mut filter = FilterState::default();
		filter.toggle_tag("Stehlampe");
		let before = filter.clone();
		filter.toggle_tag("Holzboden");
		filter.toggle_tag("Holzboden");
		assert_eq!(filter, before);
	}

	#[test]
	fn tightening_never_grows_the_result() {
		let seed = seed_listings();
		let mut filter = FilterState::default();
		let mut previous = apply_filters(&seed, &filter).len();

		filter.price = PriceBucket::Medium;
		let next = apply_filters(&seed, &filter).len();
		assert!(next <= previous);
		previous = next;

		filter.toggle_tag("Holzesstisch");
		let next = apply_filters(&seed, &filter).len();
		assert!(next <= previous);
		previous = next;

		filter.text = "esszimmer".into();
		let next = apply_filters(&seed, &filter).len();
		assert!(next <= previous);
		assert_eq!(next, 1);
	}

	#[test]
	fn filtering_is_deterministic() {
		let seed = seed_listings();
		let filter = FilterState {
			text: "modern".into(),
			price: PriceBucket::High,
			..FilterState::default()
		};
		assert_eq!(
			ids(&apply_filters(&seed, &filter)),
			ids(&apply_filters(&seed, &filter))
		);
		assert_eq!(ids(&apply_filters(&seed, &filter)), vec![1]);
	}

	#[test]
	fn price_bucket_cycles_back_to_all() {
		let mut bucket = PriceBucket::All;
		for _ in 0..PriceBucket::ALL.len() {
			bucket = bucket.next();
		}
		assert_eq!(bucket, PriceBucket::All);
	}
}
