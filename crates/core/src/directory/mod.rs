//! Contact directory: live filtering, simulated search and result import.
//!
//! The directory owns the [`ContactBook`] and a single search lifecycle. A
//! search is started with [`ContactDirectory::start_search`], driven by timer
//! ticks ([`ContactDirectory::tick`] or [`ContactDirectory::advance`]) and
//! completes with one batch of [`SearchResult`]s. Results can be selected and
//! imported, at which point they are re-keyed into the book.

mod lifecycle;
mod provider;

use std::collections::BTreeSet;
use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::contacts::{Contact, ContactBook, ContactId};
use crate::error::DirectoryError;

pub use lifecycle::{
	PROGRESS_COMPLETE, PhaseKind, RETRY_STAGE_LABEL, RunningSearch, SearchPhase, SearchSettings,
	SearchStatus, SearchTimer,
};
pub use provider::{SearchProvider, SyntheticProvider, generate_synthetic_results};

/// Data category a search is aimed at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchCategory {
	#[default]
	Name,
	Company,
	Email,
	Phone,
}

impl SearchCategory {
	pub const ALL: [SearchCategory; 4] = [Self::Name, Self::Company, Self::Email, Self::Phone];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Company => "company",
			Self::Email => "email",
			Self::Phone => "phone",
		}
	}

	#[must_use]
	pub fn next(self) -> Self {
		let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
		Self::ALL[(index + 1) % Self::ALL.len()]
	}

	#[must_use]
	pub fn previous(self) -> Self {
		let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
		Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
	}
}

impl fmt::Display for SearchCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Parameters of one accepted search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
	pub term: String,
	pub category: SearchCategory,
}

impl SearchRequest {
	pub fn new(term: impl Into<String>, category: SearchCategory) -> Self {
		Self {
			term: term.into(),
			category,
		}
	}
}

/// A record produced by a search. Ids are only unique within one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
	pub id: ContactId,
	pub name: String,
	pub company: String,
	pub email: String,
	pub phone: String,
}

impl SearchResult {
	/// Convert into a contact carrying the batch-local id.
	#[must_use]
	pub fn to_contact(&self) -> Contact {
		Contact::new(
			self.id,
			self.name.clone(),
			self.company.clone(),
			self.email.clone(),
			self.phone.clone(),
		)
	}
}

/// Which screen of the directory is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryView {
	#[default]
	Contacts,
	Search,
}

/// Effect of [`ContactDirectory::toggle_selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionToggle {
	Selected,
	Deselected,
	/// The id is not part of the current result batch.
	Ignored,
}

/// Outcome of a successful import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
	/// Ids assigned to the imported contacts, in batch order.
	pub imported: Vec<ContactId>,
	/// View the directory switched to.
	pub view: DirectoryView,
}

/// Contact book plus the search/import state machine.
pub struct ContactDirectory {
	book: ContactBook,
	settings: SearchSettings,
	provider: Box<dyn SearchProvider>,
	phase: SearchPhase,
	results: Vec<SearchResult>,
	selection: BTreeSet<ContactId>,
	view: DirectoryView,
}

impl ContactDirectory {
	pub fn new(
		book: ContactBook,
		settings: SearchSettings,
		provider: Box<dyn SearchProvider>,
	) -> Self {
		Self {
			book,
			settings,
			provider,
			phase: SearchPhase::Idle,
			results: Vec::new(),
			selection: BTreeSet::new(),
			view: DirectoryView::Contacts,
		}
	}

	/// Directory backed by a [`SyntheticProvider`] sized from `settings`.
	#[must_use]
	pub fn synthetic(book: ContactBook, settings: SearchSettings, seed: Option<u64>) -> Self {
		let provider = match seed {
			Some(seed) => SyntheticProvider::seeded(seed, settings.min_results, settings.max_results),
			None => SyntheticProvider::from_entropy(settings.min_results, settings.max_results),
		};
		Self::new(book, settings, Box::new(provider))
	}

	#[must_use]
	pub fn contacts(&self) -> &ContactBook {
		&self.book
	}

	/// Contacts matching `term`, see [`crate::filter_contacts`].
	#[must_use]
	pub fn filter_contacts(&self, term: &str) -> Vec<&Contact> {
		self.book.filter(term)
	}

	#[must_use]
	pub fn settings(&self) -> &SearchSettings {
		&self.settings
	}

	#[must_use]
	pub fn view(&self) -> DirectoryView {
		self.view
	}

	pub fn set_view(&mut self, view: DirectoryView) {
		self.view = view;
	}

	#[must_use]
	pub fn phase(&self) -> &SearchPhase {
		&self.phase
	}

	#[must_use]
	pub fn status(&self) -> SearchStatus<'_> {
		self.phase.status(&self.settings)
	}

	#[must_use]
	pub fn is_searching(&self) -> bool {
		matches!(self.phase, SearchPhase::Running(_))
	}

	/// Results of the last completed search.
	#[must_use]
	pub fn results(&self) -> &[SearchResult] {
		&self.results
	}

	#[must_use]
	pub fn selection(&self) -> &BTreeSet<ContactId> {
		&self.selection
	}

	#[must_use]
	pub fn is_selected(&self, id: ContactId) -> bool {
		self.selection.contains(&id)
	}

	/// Start a search now. See [`ContactDirectory::start_search_at`].
	pub fn start_search(
		&mut self,
		term: &str,
		category: SearchCategory,
	) -> Result<(), DirectoryError> {
		self.start_search_at(term, category, Instant::now())
	}

	/// Start a search whose timer is anchored at `now`.
	///
	/// Rejected while a search runs or when the trimmed term is empty; a
	/// rejected call changes nothing. An accepted call discards the previous
	/// results and selection.
	pub fn start_search_at(
		&mut self,
		term: &str,
		category: SearchCategory,
		now: Instant,
	) -> Result<(), DirectoryError> {
		if self.is_searching() {
			return Err(DirectoryError::SearchInProgress);
		}
		let term = term.trim();
		if term.is_empty() {
			return Err(DirectoryError::EmptyTerm);
		}

		self.results.clear();
		self.selection.clear();
		let request = SearchRequest::new(term, category);
		log::info!("starting search for {:?} in {}", request.term, request.category);
		let timer = SearchTimer::start(now, self.settings.tick);
		self.phase = SearchPhase::Running(RunningSearch::new(request, timer));
		Ok(())
	}

	/// Stop a running search without producing results.
	///
	/// Returns `true` if a search was running.
	pub fn cancel_search(&mut self) -> bool {
		if let SearchPhase::Running(run) = &self.phase {
			log::info!("cancelled search for {:?}", run.request.term);
			self.phase = SearchPhase::Idle;
			return true;
		}
		false
	}

	/// Apply every timer period elapsed up to `now`.
	pub fn tick(&mut self, now: Instant) {
		let due = match &mut self.phase {
			SearchPhase::Running(run) => run.timer.due_ticks(now),
			_ => return,
		};
		self.advance(due);
	}

	/// Apply `ticks` timer periods, stopping early once the search leaves the
	/// running phase.
	pub fn advance(&mut self, ticks: u32) {
		for _ in 0..ticks {
			let settings = &self.settings;
			let ready = match &mut self.phase {
				SearchPhase::Running(run) => run.advance(settings),
				_ => return,
			};
			if ready {
				self.complete();
			}
		}
	}

	fn complete(&mut self) {
		let SearchPhase::Running(mut run) = std::mem::take(&mut self.phase) else {
			return;
		};

		match self.provider.search(&run.request) {
			Ok(results) => {
				log::info!(
					"search for {:?} finished with {} results",
					run.request.term,
					results.len()
				);
				self.results = results;
			}
			Err(error) if run.failures < self.settings.max_retries => {
				run.failures += 1;
				log::warn!(
					"search for {:?} failed ({error}), retry {} of {}",
					run.request.term,
					run.failures,
					self.settings.max_retries
				);
				run.retry_in = Some(self.settings.backoff_ticks());
				self.phase = SearchPhase::Running(run);
			}
			Err(error) => {
				log::warn!("search for {:?} failed: {error}", run.request.term);
				self.phase = SearchPhase::Failed {
					request: run.request,
					error,
				};
			}
		}
	}

	/// Flip the selection state of a result in the current batch.
	pub fn toggle_selection(&mut self, id: ContactId) -> SelectionToggle {
		if !self.results.iter().any(|result| result.id == id) {
			return SelectionToggle::Ignored;
		}
		if self.selection.remove(&id) {
			SelectionToggle::Deselected
		} else {
			self.selection.insert(id);
			SelectionToggle::Selected
		}
	}

	/// Append the selected results to the contact book and return to the
	/// contacts view.
	pub fn import_selected(&mut self) -> Result<ImportSummary, DirectoryError> {
		if self.selection.is_empty() {
			return Err(DirectoryError::NothingSelected);
		}

		let chosen: Vec<Contact> = self
			.results
			.iter()
			.filter(|result| self.selection.contains(&result.id))
			.map(SearchResult::to_contact)
			.collect();
		let imported = self.book.append_rekeyed(chosen)?;
		log::info!("imported {} contacts", imported.len());

		self.selection.clear();
		self.view = DirectoryView::Contacts;
		Ok(ImportSummary {
			imported,
			view: self.view,
		})
	}
}

#[cfg(test)]
mod tests;
