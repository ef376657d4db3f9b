//! State core for the `rolo` terminal interface.
//!
//! The crate holds everything that does not touch the terminal: the contact
//! book and its simulated search/import lifecycle, the listing browser and its
//! filter predicates, and the remote image allow-list. Front-ends drive the
//! state machines with discrete events and render the projections they expose.

pub mod contacts;
pub mod directory;
pub mod error;
pub mod images;
pub mod listings;

pub use contacts::{Contact, ContactBook, ContactId, filter_contacts};
pub use directory::{
	ContactDirectory, DirectoryView, ImportSummary, PhaseKind, SearchCategory, SearchPhase,
	SearchProvider, SearchRequest, SearchResult, SearchSettings, SearchStatus, SelectionToggle,
	SyntheticProvider, generate_synthetic_results,
};
pub use error::{DirectoryError, ProviderError};
pub use images::{DEFAULT_IMAGE_HOST, ImagePolicy, RemotePattern};
pub use listings::{
	FilterChip, FilterState, KNOWN_LOCATIONS, Listing, ListingBrowser, ListingKind, LocationFilter,
	Notifications, PriceBucket, apply_filters, matches, seed_listings,
};
