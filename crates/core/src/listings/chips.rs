use std::fmt;

use super::filter::{FilterState, LocationFilter, PriceBucket};

/// One active, non-default filter criterion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterChip {
	Price(PriceBucket),
	Location(String),
	Tag(String),
}

impl FilterChip {
	#[must_use]
	pub fn label(&self) -> String {
		match self {
			Self::Price(bucket) => format!("Price: {bucket}"),
			Self::Location(location) => location.clone(),
			Self::Tag(tag) => tag.clone(),
		}
	}
}

impl fmt::Display for FilterChip {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.label())
	}
}

impl FilterState {
	/// Chips for every non-default field: price, then location, then tags in
	/// toggle order. The free-text field never produces a chip.
	#[must_use]
	pub fn chips(&self) -> Vec<FilterChip> {
		let mut chips = Vec::with_capacity(self.required_tags.len() + 2);
		if self.price != PriceBucket::All {
			chips.push(FilterChip::Price(self.price));
		}
		if let LocationFilter::Exact(location) = &self.location {
			chips.push(FilterChip::Location(location.clone()));
		}
		chips.extend(self.required_tags.iter().cloned().map(FilterChip::Tag));
		chips
	}

	/// Reset the single field `chip` stands for.
	///
	/// Returns `false` when the chip no longer matches the current state.
	pub fn remove_chip(&mut self, chip: &FilterChip) -> bool {
		match chip {
			FilterChip::Price(bucket) if *bucket == self.price && *bucket != PriceBucket::All => {
				self.price = PriceBucket::All;
				true
			}
			FilterChip::Location(location)
				if matches!(&self.location, LocationFilter::Exact(current) if current == location) =>
			{
				self.location = LocationFilter::All;
				true
			}
			FilterChip::Tag(tag) => self.required_tags.shift_remove(tag),
			_ => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn busy_filter() -> FilterState {
		let mut filter = FilterState {
			text: "zimmer".into(),
			price: PriceBucket::Medium,
			location: LocationFilter::exact("Altstadt"),
			..FilterState::default()
		};
		filter.toggle_tag("Stehlampe");
		filter.toggle_tag("Ziegelwand");
		filter
	}

	#[test]
	fn identity_filter_has_no_chips() {
		assert!(FilterState::default().chips().is_empty());
	}

	#[test]
	fn chips_follow_field_then_toggle_order() {
		let labels: Vec<_> = busy_filter().chips().iter().map(FilterChip::label).collect();
		insta::assert_debug_snapshot!(labels, @r###"
		[
		    "Price: 1200€ - 1400€",
		    "Altstadt",
		    "Stehlampe",
		    "Ziegelwand",
		]
		"###);
	}

	#[test]
	fn removing_a_tag_chip_equals_toggling_it_off() {
		let mut by_chip = busy_filter();
		let mut by_toggle = busy_filter();
		assert!(by_chip.remove_chip(&FilterChip::Tag("Stehlampe".into())));
		by_toggle.toggle_tag("Stehlampe");
		assert_eq!(by_chip, by_toggle);
	}

	#[test]
	fn removing_a_chip_resets_only_its_field() {
		let mut filter = busy_filter();
		assert!(filter.remove_chip(&FilterChip::Price(PriceBucket::Medium)));
		assert_eq!(filter.price, PriceBucket::All);
		assert_eq!(filter.location, LocationFilter::exact("Altstadt"));
		assert_eq!(filter.required_tags.len(), 2);
		assert_eq!(filter.text, "zimmer");

		assert!(filter.remove_chip(&FilterChip::Location("Altstadt".into())));
		assert!(filter.location.is_all());
	}

	#[test]
	fn stale_chips_are_rejected() {
		let mut filter = busy_filter();
		let before = filter.clone();
		assert!(!filter.remove_chip(&FilterChip::Price(PriceBucket::High)));
		assert!(!filter.remove_chip(&FilterChip::Location("Westend".into())));
		assert!(!filter.remove_chip(&FilterChip::Tag("Holzboden".into())));
		assert_eq!(filter, before);
	}

	#[test]
	fn price_labels() {
		assert_eq!(FilterChip::Price(PriceBucket::Low).label(), "Price: < 1200€");
		assert_eq!(FilterChip::Price(PriceBucket::High).label(), "Price: > 1400€");
	}
}
