use indexmap::IndexSet;

use super::chips::FilterChip;
use super::filter::{FilterState, LocationFilter, PriceBucket, matches};
use super::notifications::Notifications;
use super::seed::{KNOWN_LOCATIONS, seed_listings};
use super::Listing;

/// Immutable listing seed plus the filter state driving the visible subset.
///
/// Every mutator re-runs the filter over the full seed, so the visible view is
/// always `apply_filters(seed, filter)`.
#[derive(Debug, Clone)]
pub struct ListingBrowser {
	seed: Vec<Listing>,
	filter: FilterState,
	visible: Vec<usize>,
	locations: Vec<String>,
	all_tags: IndexSet<String>,
	notifications: Notifications,
}

impl Default for ListingBrowser {
	fn default() -> Self {
		Self::new(seed_listings(), KNOWN_LOCATIONS, Notifications::default())
	}
}

impl ListingBrowser {
	pub fn new<L, S>(seed: Vec<Listing>, locations: L, notifications: Notifications) -> Self
	where
		L: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let all_tags = seed
			.iter()
			.flat_map(|listing| listing.tags.iter().cloned())
			.collect();
		let mut browser = Self {
			seed,
			filter: FilterState::default(),
			visible: Vec::new(),
			locations: locations.into_iter().map(Into::into).collect(),
			all_tags,
			notifications,
		};
		browser.recompute();
		browser
	}

	fn recompute(&mut self) {
		self.visible = self
			.seed
			.iter()
			.enumerate()
			.filter(|(_, listing)| matches(listing, &self.filter))
			.map(|(index, _)| index)
			.collect();
		log::debug!(
			"listing filter {:?} kept {} of {}",
			self.filter,
			self.visible.len(),
			self.seed.len()
		);
	}

	#[must_use]
	pub fn filter(&self) -> &FilterState {
		&self.filter
	}

	/// Listings accepted by the current filter, in seed order.
	#[must_use]
	pub fn visible(&self) -> Vec<&Listing> {
		self.visible
			.iter()
			.filter_map(|index| self.seed.get(*index))
			.collect()
	}

	#[must_use]
	pub fn seed(&self) -> &[Listing] {
		&self.seed
	}

	/// Every tag present in the seed, in first-seen order.
	#[must_use]
	pub fn all_tags(&self) -> &IndexSet<String> {
		&self.all_tags
	}

	#[must_use]
	pub fn locations(&self) -> &[String] {
		&self.locations
	}

	#[must_use]
	pub fn notifications(&self) -> &Notifications {
		&self.notifications
	}

	#[must_use]
	pub fn chips(&self) -> Vec<FilterChip> {
		self.filter.chips()
	}

	pub fn set_text(&mut self, text: impl Into<String>) {
		let text = text.into();
		if self.filter.text != text {
			self.filter.text = text;
			self.recompute();
		}
	}

	pub fn set_price(&mut self, price: PriceBucket) {
		self.filter.price = price;
		self.recompute();
	}

	/// Move to the next price bucket, wrapping back to `All`.
	pub fn cycle_price(&mut self) {
		self.set_price(self.filter.price.next());
	}

	pub fn set_location(&mut self, location: LocationFilter) {
		self.filter.location = location;
		self.recompute();
	}

	/// Step `All`, then each known location in order, then back to `All`.
	pub fn cycle_location(&mut self) {
		let next = match &self.filter.location {
			LocationFilter::All => self.locations.first().cloned(),
			LocationFilter::Exact(current) => self
				.locations
				.iter()
				.position(|location| location.eq_ignore_ascii_case(current))
				.and_then(|index| self.locations.get(index + 1))
				.cloned(),
		};
		self.set_location(next.map_or(LocationFilter::All, LocationFilter::Exact));
	}

	pub fn toggle_tag(&mut self, tag: &str) {
		self.filter.toggle_tag(tag);
		self.recompute();
	}

	/// Restore the identity filter, including the free-text field.
	pub fn reset_filters(&mut self) {
		self.filter.reset();
		self.recompute();
	}

	/// Reset the field `chip` stands for. Returns `false` for a stale chip.
	pub fn remove_chip(&mut self, chip: &FilterChip) -> bool {
		let removed = self.filter.remove_chip(chip);
		if removed {
			self.recompute();
		}
		removed
	}

	/// Remove the most recently listed chip, if any.
	pub fn remove_last_chip(&mut self) -> Option<FilterChip> {
		let chip = self.chips().pop()?;
		self.remove_chip(&chip).then_some(chip)
	}
}
