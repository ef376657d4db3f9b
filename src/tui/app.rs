//! State container for the interactive session.
//!
//! [`App`] owns the contact directory, the listing browser and every piece of
//! UI state (inputs, table cursors, the spinner). Key handling lives in
//! `actions`, drawing in `render` and the terminal loop in `runtime`.

use std::time::Instant;

use ratatui::widgets::TableState;
use rolo_core::{
	Contact, ContactBook, ContactDirectory, ContactId, DirectoryError, ImagePolicy, Listing,
	ListingBrowser, SearchCategory, SelectionToggle,
};
use throbber_widgets_tui::ThrobberState;

use super::components::clamp_selection;
use super::config::AppConfig;
use super::input::SearchInput;
use super::outcome::{Screen, Selection, SessionOutcome};
use super::theme::Theme;

/// Cursor position of each screen's table.
#[derive(Debug, Default)]
pub(crate) struct TableStates {
	pub(crate) contacts: TableState,
	pub(crate) results: TableState,
	pub(crate) listings: TableState,
}

pub struct App {
	pub(crate) screen: Screen,
	pub(crate) directory: ContactDirectory,
	pub(crate) listings: ListingBrowser,
	pub(crate) images: ImagePolicy,
	pub(crate) contact_input: SearchInput<'static>,
	pub(crate) search_input: SearchInput<'static>,
	pub(crate) listing_input: SearchInput<'static>,
	pub(crate) category: SearchCategory,
	pub(crate) tables: TableStates,
	pub(crate) tag_cursor: usize,
	pub(crate) show_notifications: bool,
	/// One-off message for the status line, cleared by the next action.
	pub(crate) status: Option<String>,
	pub(crate) imported: Vec<ContactId>,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
}

impl App {
	pub fn new(config: AppConfig) -> Self {
		let AppConfig {
			screen,
			initial_query,
			theme,
			search,
			seed,
			images,
		} = config;

		let directory = ContactDirectory::synthetic(ContactBook::seeded(), search, seed);
		let mut app = Self {
			screen: Screen::Contacts,
			directory,
			listings: ListingBrowser::default(),
			images,
			contact_input: SearchInput::default().with_placeholder("Filter contacts"),
			search_input: SearchInput::default().with_placeholder("Search term"),
			listing_input: SearchInput::default().with_placeholder("Search listings"),
			category: SearchCategory::default(),
			tables: TableStates::default(),
			tag_cursor: 0,
			show_notifications: false,
			status: None,
			imported: Vec::new(),
			theme,
			throbber_state: ThrobberState::default(),
		};
		app.set_screen(screen);
		if !initial_query.is_empty() {
			app.current_input_mut().set_text(initial_query);
			app.sync_listing_text();
		}
		app.clamp_tables();
		app
	}

	#[must_use]
	pub fn screen(&self) -> Screen {
		self.screen
	}

	#[must_use]
	pub fn directory(&self) -> &ContactDirectory {
		&self.directory
	}

	#[must_use]
	pub fn listings(&self) -> &ListingBrowser {
		&self.listings
	}

	#[must_use]
	pub fn category(&self) -> SearchCategory {
		self.category
	}

	pub(crate) fn set_screen(&mut self, screen: Screen) {
		self.screen = screen;
		if let Some(view) = screen.directory_view() {
			self.directory.set_view(view);
		}
		self.show_notifications = false;
	}

	pub(crate) fn cycle_screen(&mut self) {
		self.set_screen(self.screen.next());
		self.clamp_tables();
	}

	pub(crate) fn current_input(&self) -> &SearchInput<'static> {
		match self.screen {
			Screen::Contacts => &self.contact_input,
			Screen::Search => &self.search_input,
			Screen::Listings => &self.listing_input,
		}
	}

	pub(crate) fn current_input_mut(&mut self) -> &mut SearchInput<'static> {
		match self.screen {
			Screen::Contacts => &mut self.contact_input,
			Screen::Search => &mut self.search_input,
			Screen::Listings => &mut self.listing_input,
		}
	}

	pub(crate) fn current_table_mut(&mut self) -> &mut TableState {
		match self.screen {
			Screen::Contacts => &mut self.tables.contacts,
			Screen::Search => &mut self.tables.results,
			Screen::Listings => &mut self.tables.listings,
		}
	}

	/// Contacts accepted by the contact filter input.
	pub(crate) fn visible_contacts(&self) -> Vec<&Contact> {
		self.directory.filter_contacts(self.contact_input.text())
	}

	/// Number of rows in the active screen's table.
	pub(crate) fn row_count(&self) -> usize {
		match self.screen {
			Screen::Contacts => self.visible_contacts().len(),
			Screen::Search => self.directory.results().len(),
			Screen::Listings => self.listings.visible().len(),
		}
	}

	pub(crate) fn clamp_tables(&mut self) {
		let contacts = self.visible_contacts().len();
		let results = self.directory.results().len();
		let listings = self.listings.visible().len();
		clamp_selection(&mut self.tables.contacts, contacts);
		clamp_selection(&mut self.tables.results, results);
		clamp_selection(&mut self.tables.listings, listings);
	}

	/// Advance the search timer to `now`.
	pub fn tick(&mut self, now: Instant) {
		if self.directory.is_searching() {
			self.directory.tick(now);
			self.throbber_state.calc_next();
			self.clamp_tables();
		}
	}

	pub(crate) fn move_selection(&mut self, down: bool) {
		let len = self.row_count();
		let state = self.current_table_mut();
		match state.selected() {
			Some(selected) if down && selected + 1 < len => state.select(Some(selected + 1)),
			Some(selected) if !down && selected > 0 => state.select(Some(selected - 1)),
			_ => {}
		}
	}

	/// Record highlighted on the active screen, if any.
	pub(crate) fn current_selection(&self) -> Option<Selection> {
		match self.screen {
			Screen::Contacts => {
				let index = self.tables.contacts.selected()?;
				let contact = self.visible_contacts().get(index).copied()?;
				Some(Selection::Contact(contact.clone()))
			}
			Screen::Search => None,
			Screen::Listings => {
				let index = self.tables.listings.selected()?;
				let listing: &Listing = self.listings.visible().get(index).copied()?;
				Some(Selection::Listing(listing.clone()))
			}
		}
	}

	pub(crate) fn outcome(&self, accepted: bool) -> SessionOutcome {
		SessionOutcome {
			accepted,
			view: self.screen,
			selection: if accepted {
				self.current_selection()
			} else {
				None
			},
			imported: self.imported.clone(),
		}
	}

	pub(crate) fn report(&mut self, error: DirectoryError) {
		log::debug!("rejected directory action: {error}");
		self.status = Some(error.to_string());
	}

	pub(crate) fn start_search(&mut self) {
		let term = self.search_input.text().to_string();
		match self.directory.start_search(&term, self.category) {
			Ok(()) => {
				self.tables.results.select(None);
				self.status = None;
			}
			Err(error) => self.report(error),
		}
	}

	pub(crate) fn cancel_search(&mut self) {
		if self.directory.cancel_search() {
			self.status = Some("Search cancelled".to_string());
		}
	}

	pub(crate) fn cycle_category(&mut self, forward: bool) {
		self.category = if forward {
			self.category.next()
		} else {
			self.category.previous()
		};
	}

	/// Flip the selection of the highlighted search result.
	pub(crate) fn toggle_highlighted_result(&mut self) -> SelectionToggle {
		let id = self
			.tables
			.results
			.selected()
			.and_then(|index| self.directory.results().get(index))
			.map(|result| result.id);
		match id {
			Some(id) => self.directory.toggle_selection(id),
			None => SelectionToggle::Ignored,
		}
	}

	pub(crate) fn import_selected(&mut self) {
		match self.directory.import_selected() {
			Ok(summary) => {
				self.status = Some(format!("Imported {} contacts", summary.imported.len()));
				self.imported.extend(summary.imported);
				self.set_screen(summary.view.into());
				self.clamp_tables();
			}
			Err(error) => self.report(error),
		}
	}

	pub(crate) fn sync_listing_text(&mut self) {
		let text = self.listing_input.text().to_string();
		self.listings.set_text(text);
		self.tables.listings.select(Some(0));
		self.clamp_tables();
	}

	pub(crate) fn move_tag_cursor(&mut self, forward: bool) {
		let count = self.listings.all_tags().len();
		if count == 0 {
			return;
		}
		self.tag_cursor = if forward {
			(self.tag_cursor + 1) % count
		} else {
			(self.tag_cursor + count - 1) % count
		};
	}

	pub(crate) fn toggle_cursor_tag(&mut self) {
		if let Some(tag) = self.listings.all_tags().get_index(self.tag_cursor).cloned() {
			self.listings.toggle_tag(&tag);
			self.clamp_tables();
		}
	}

	pub(crate) fn reset_listing_filters(&mut self) {
		self.listings.reset_filters();
		self.listing_input.set_text("");
		self.clamp_tables();
	}

	/// Stop background work before the app goes away.
	pub(crate) fn shutdown(&mut self) {
		self.directory.cancel_search();
	}
}

impl Drop for App {
	fn drop(&mut self) {
		self.shutdown();
	}
}
