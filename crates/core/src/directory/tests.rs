use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use super::*;
use crate::error::ProviderError;

/// Ticks needed to run a search with default settings to completion.
const FULL_RUN: u32 = 101;

fn directory() -> ContactDirectory {
	ContactDirectory::synthetic(ContactBook::seeded(), SearchSettings::default(), Some(11))
}

/// Provider that fails a fixed number of times before answering.
struct FlakyProvider {
	failures_left: u32,
	calls: Rc<Cell<u32>>,
}

impl SearchProvider for FlakyProvider {
	fn search(&mut self, request: &SearchRequest) -> Result<Vec<SearchResult>, ProviderError> {
		self.calls.set(self.calls.get() + 1);
		if self.failures_left > 0 {
			self.failures_left -= 1;
			return Err(ProviderError::Timeout);
		}
		let mut rng = <rand::rngs::StdRng as rand::SeedableRng>::seed_from_u64(5);
		Ok(generate_synthetic_results(
			&request.term,
			request.category,
			3,
			&mut rng,
		))
	}
}

fn flaky_directory(failures: u32) -> (ContactDirectory, Rc<Cell<u32>>) {
	let calls = Rc::new(Cell::new(0));
	let provider = FlakyProvider {
		failures_left: failures,
		calls: Rc::clone(&calls),
	};
	let directory = ContactDirectory::new(
		ContactBook::seeded(),
		SearchSettings::default(),
		Box::new(provider),
	);
	(directory, calls)
}

#[test]
fn empty_or_blank_terms_are_rejected() {
	let mut directory = directory();
	assert_eq!(
		directory.start_search("", SearchCategory::Name),
		Err(DirectoryError::EmptyTerm)
	);
	assert_eq!(
		directory.start_search("   ", SearchCategory::Name),
		Err(DirectoryError::EmptyTerm)
	);
	assert!(!directory.is_searching());
}

#[test]
fn second_start_while_running_is_a_no_op() {
	let mut directory = directory();
	directory
		.start_search("Acme", SearchCategory::Company)
		.expect("first search starts");
	directory.advance(10);
	assert_eq!(
		directory.start_search("Other", SearchCategory::Name),
		Err(DirectoryError::SearchInProgress)
	);

	let SearchPhase::Running(run) = directory.phase() else {
		panic!("search should still be running");
	};
	assert_eq!(run.request().term, "Acme");
	assert_eq!(directory.status().progress, 10);
}

#[test]
fn progress_runs_to_completion_and_returns_to_idle() {
	let mut directory = directory();
	directory
		.start_search("Acme", SearchCategory::Company)
		.expect("search starts");
	assert_eq!(directory.status().stage_label, Some("Searching apollo.io"));

	directory.advance(33);
	assert_eq!(
		directory.status().stage_label,
		Some("Searching Companies House")
	);

	directory.advance(FULL_RUN - 34);
	assert!(directory.is_searching());
	assert_eq!(directory.status().progress, PROGRESS_COMPLETE);
	assert!(directory.results().is_empty());

	directory.advance(1);
	assert!(!directory.is_searching());
	assert_eq!(directory.status().kind, PhaseKind::Idle);
	let len = directory.results().len();
	assert!((3..=8).contains(&len), "batch of {len}");
}

#[test]
fn batch_ids_are_unique_and_titles_carry_the_term() {
	let mut directory = directory();
	for _ in 0..20 {
		directory
			.start_search("Acme", SearchCategory::Company)
			.expect("search starts");
		directory.advance(FULL_RUN);
		let ids: BTreeSet<_> = directory.results().iter().map(|result| result.id).collect();
		assert_eq!(ids.len(), directory.results().len());
		assert!(directory.results().iter().all(|result| result.name.contains("Acme")));
	}
}

#[test]
fn extra_ticks_after_completion_do_nothing() {
	let mut directory = directory();
	directory
		.start_search("Acme", SearchCategory::Company)
		.expect("search starts");
	directory.advance(FULL_RUN + 50);
	let first_batch = directory.results().to_vec();
	directory.advance(500);
	assert_eq!(directory.results(), first_batch.as_slice());
}

#[test]
fn tick_converts_elapsed_time_into_progress() {
	let mut directory = directory();
	let start = Instant::now();
	directory
		.start_search_at("Acme", SearchCategory::Name, start)
		.expect("search starts");

	directory.tick(start + Duration::from_millis(20));
	assert_eq!(directory.status().progress, 0);

	directory.tick(start + Duration::from_millis(500));
	assert_eq!(directory.status().progress, 10);

	directory.tick(start + Duration::from_secs(60));
	assert!(!directory.is_searching());
	assert!(!directory.results().is_empty());
}

#[test]
fn new_search_clears_results_and_selection() {
	let mut directory = directory();
	directory
		.start_search("Acme", SearchCategory::Company)
		.expect("search starts");
	directory.advance(FULL_RUN);
	assert_eq!(directory.toggle_selection(1), SelectionToggle::Selected);

	directory
		.start_search("Globex", SearchCategory::Company)
		.expect("second search starts");
	assert!(directory.results().is_empty());
	assert!(directory.selection().is_empty());
}

#[test]
fn toggling_twice_restores_the_selection() {
	let mut directory = directory();
	directory
		.start_search("Acme", SearchCategory::Company)
		.expect("search starts");
	directory.advance(FULL_RUN);

	assert_eq!(directory.toggle_selection(2), SelectionToggle::Selected);
	assert!(directory.is_selected(2));
	assert_eq!(directory.toggle_selection(2), SelectionToggle::Deselected);
	assert!(directory.selection().is_empty());
}

#[test]
fn unknown_ids_are_ignored() {
	let mut directory = directory();
	assert_eq!(directory.toggle_selection(1), SelectionToggle::Ignored);
	directory
		.start_search("Acme", SearchCategory::Company)
		.expect("search starts");
	directory.advance(FULL_RUN);
	assert_eq!(directory.toggle_selection(99), SelectionToggle::Ignored);
	assert!(directory.selection().is_empty());
}

#[test]
fn importing_nothing_is_rejected_without_side_effects() {
	let mut directory = directory();
	directory.set_view(DirectoryView::Search);
	assert_eq!(
		directory.import_selected(),
		Err(DirectoryError::NothingSelected)
	);
	assert_eq!(directory.contacts().len(), 5);
	assert_eq!(directory.view(), DirectoryView::Search);
}

#[test]
fn import_rekeys_and_returns_to_contacts() {
	let mut directory = directory();
	directory.set_view(DirectoryView::Search);
	directory
		.start_search("Acme", SearchCategory::Company)
		.expect("search starts");
	directory.advance(FULL_RUN);
	directory.toggle_selection(1);
	directory.toggle_selection(3);

	let summary = directory.import_selected().expect("import succeeds");
	assert_eq!(summary.imported, vec![6, 7]);
	assert_eq!(summary.view, DirectoryView::Contacts);
	assert_eq!(directory.view(), DirectoryView::Contacts);
	assert!(directory.selection().is_empty());
	assert_eq!(directory.contacts().len(), 7);

	let imported_names: Vec<_> = summary
		.imported
		.iter()
		.filter_map(|id| directory.contacts().get(*id))
		.map(|contact| contact.name.clone())
		.collect();
	let expected: Vec<_> = [1, 3]
		.iter()
		.filter_map(|id| directory.results().iter().find(|result| result.id == *id))
		.map(|result| result.name.clone())
		.collect();
	assert_eq!(imported_names, expected);
}

#[test]
fn cancel_drops_the_running_search() {
	let mut directory = directory();
	assert!(!directory.cancel_search());
	directory
		.start_search("Acme", SearchCategory::Company)
		.expect("search starts");
	directory.advance(40);
	assert!(directory.cancel_search());
	assert_eq!(directory.status().kind, PhaseKind::Idle);

	directory.advance(FULL_RUN);
	assert!(directory.results().is_empty());
	directory
		.start_search("Acme", SearchCategory::Company)
		.expect("search can restart after cancel");
}

#[test]
fn provider_failure_is_retried_once() {
	let (mut directory, calls) = flaky_directory(1);
	directory
		.start_search("Acme", SearchCategory::Company)
		.expect("search starts");
	directory.advance(FULL_RUN);
	assert_eq!(calls.get(), 1);
	assert_eq!(directory.status().kind, PhaseKind::Retrying);
	assert_eq!(directory.status().stage_label, Some(RETRY_STAGE_LABEL));

	let backoff = directory.settings().backoff_ticks();
	directory.advance(backoff - 1);
	assert_eq!(calls.get(), 1);
	directory.advance(1);
	assert_eq!(calls.get(), 2);
	assert_eq!(directory.status().kind, PhaseKind::Idle);
	assert_eq!(directory.results().len(), 3);
}

#[test]
fn repeated_failure_ends_in_failed_state() {
	let (mut directory, calls) = flaky_directory(5);
	directory
		.start_search("Acme", SearchCategory::Company)
		.expect("search starts");
	directory.advance(FULL_RUN + directory.settings().backoff_ticks());
	assert_eq!(calls.get(), 2);

	let status = directory.status();
	assert_eq!(status.kind, PhaseKind::Failed);
	assert_eq!(status.error, Some(&ProviderError::Timeout));
	assert!(directory.results().is_empty());
	assert!(!directory.is_searching());

	directory
		.start_search("Acme", SearchCategory::Company)
		.expect("a failed search can be restarted");
}

#[test]
fn category_cycles_in_both_directions() {
	assert_eq!(SearchCategory::Phone.next(), SearchCategory::Name);
	assert_eq!(SearchCategory::Name.previous(), SearchCategory::Phone);
	assert_eq!(SearchCategory::Company.to_string(), "company");
}
