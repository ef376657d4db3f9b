use std::ops::RangeInclusive;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::contacts::ContactId;
use crate::error::ProviderError;

use super::{SearchCategory, SearchRequest, SearchResult};

const FIRST_NAMES: [&str; 5] = ["John", "Emma", "David", "Sarah", "Michael"];
const LEGAL_SUFFIXES: [&str; 4] = ["Ltd", "PLC", "Inc", "Co"];

/// Source of search results for the contact directory.
///
/// The directory calls the provider once per attempt when the progress
/// animation completes.
pub trait SearchProvider {
	fn search(&mut self, request: &SearchRequest) -> Result<Vec<SearchResult>, ProviderError>;
}

/// Provider producing random records built around the search term.
#[derive(Debug, Clone)]
pub struct SyntheticProvider<R = StdRng> {
	rng: R,
	batch: RangeInclusive<usize>,
}

impl SyntheticProvider<StdRng> {
	/// Provider seeded from operating system entropy.
	#[must_use]
	pub fn from_entropy(min: usize, max: usize) -> Self {
		Self::new(StdRng::from_entropy(), min, max)
	}

	/// Provider with a reproducible sequence of batches.
	#[must_use]
	pub fn seeded(seed: u64, min: usize, max: usize) -> Self {
		Self::new(StdRng::seed_from_u64(seed), min, max)
	}
}

impl<R: Rng> SyntheticProvider<R> {
	pub fn new(rng: R, min: usize, max: usize) -> Self {
		let low = min.min(max);
		let high = min.max(max);
		Self {
			rng,
			batch: low..=high,
		}
	}
}

impl<R: Rng> SearchProvider for SyntheticProvider<R> {
	fn search(&mut self, request: &SearchRequest) -> Result<Vec<SearchResult>, ProviderError> {
		let count = self.rng.gen_range(self.batch.clone());
		Ok(generate_synthetic_results(
			&request.term,
			request.category,
			count,
			&mut self.rng,
		))
	}
}

/// Build `count` random records around `term`, with ids `1..=count`.
///
/// The category is accepted for every value but does not shape the output.
pub fn generate_synthetic_results<R: Rng + ?Sized>(
	term: &str,
	category: SearchCategory,
	count: usize,
	rng: &mut R,
) -> Vec<SearchResult> {
	log::trace!("generating {count} synthetic results for {term:?} ({category})");
	let handle: String = term.to_lowercase().split_whitespace().collect();

	(1..=count)
		.map(|index| {
			let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
			let suffix = LEGAL_SUFFIXES[rng.gen_range(0..LEGAL_SUFFIXES.len())];
			SearchResult {
				id: ContactId::try_from(index).unwrap_or(ContactId::MAX),
				name: format!("{first} {term}"),
				company: format!("{term} {suffix}"),
				email: format!("{handle}{}@example.com", rng.gen_range(0..1000)),
				phone: format!(
					"+44 {} {}",
					rng.gen_range(100..=999),
					rng.gen_range(1_000_000..=9_999_999)
				),
			}
		})
		.collect()
}
