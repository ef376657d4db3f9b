use thiserror::Error;

/// Reasons a contact directory operation was refused.
///
/// None of these leave the directory in a modified state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryError {
	/// A search was requested without a search term.
	#[error("search term is empty")]
	EmptyTerm,

	/// A search was requested while another one is still running.
	#[error("a search is already in progress")]
	SearchInProgress,

	/// An import was requested with no results selected.
	#[error("no search results are selected for import")]
	NothingSelected,

	/// The contact book has no ids left for the records being imported.
	#[error("no contact ids are left for the import")]
	IdsExhausted,
}

/// Errors reported by a [`SearchProvider`](crate::SearchProvider).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
	/// The provider could not be reached.
	#[error("search provider unavailable: {reason}")]
	Unavailable { reason: String },

	/// The provider did not answer in time.
	#[error("search provider timed out")]
	Timeout,
}

impl ProviderError {
	pub fn unavailable(reason: impl Into<String>) -> Self {
		Self::Unavailable {
			reason: reason.into(),
		}
	}
}
