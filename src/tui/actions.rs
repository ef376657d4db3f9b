use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::outcome::{Screen, SessionOutcome};

impl App {
	/// Apply one key press. Returns the outcome once the session should end.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<SessionOutcome> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

		if self.show_notifications {
			if matches!(key.code, KeyCode::Esc | KeyCode::Enter)
				|| (ctrl && key.code == KeyCode::Char('n'))
			{
				self.show_notifications = false;
			}
			return None;
		}

		match key.code {
			KeyCode::Esc => return Some(self.outcome(false)),
			KeyCode::Char('c') if ctrl => return Some(self.outcome(false)),
			KeyCode::Tab => {
				self.status = None;
				self.cycle_screen();
				return None;
			}
			KeyCode::Up => {
				self.move_selection(false);
				return None;
			}
			KeyCode::Down => {
				self.move_selection(true);
				return None;
			}
			_ => {}
		}

		match self.screen {
			Screen::Contacts => self.handle_contacts_key(key),
			Screen::Search => {
				self.handle_search_key(key, ctrl);
				None
			}
			Screen::Listings => self.handle_listings_key(key, ctrl),
		}
	}

	fn handle_contacts_key(&mut self, key: KeyEvent) -> Option<SessionOutcome> {
		if key.code == KeyCode::Enter {
			return Some(self.outcome(true));
		}
		if self.contact_input.input(key) {
			self.tables.contacts.select(Some(0));
			self.clamp_tables();
		}
		None
	}

	fn handle_search_key(&mut self, key: KeyEvent, ctrl: bool) {
		match key.code {
			KeyCode::Enter => self.start_search(),
			KeyCode::Left if ctrl => self.cycle_category(false),
			KeyCode::Right if ctrl => self.cycle_category(true),
			KeyCode::Char('o') if ctrl => self.import_selected(),
			KeyCode::Char('x') if ctrl => self.cancel_search(),
			KeyCode::Char('s') if ctrl => {
				self.toggle_highlighted_result();
			}
			_ => {
				if self.search_input.input(key) {
					self.status = None;
				}
			}
		}
	}

	fn handle_listings_key(&mut self, key: KeyEvent, ctrl: bool) -> Option<SessionOutcome> {
		match key.code {
			KeyCode::Enter => return Some(self.outcome(true)),
			KeyCode::Char('p') if ctrl => self.listings.cycle_price(),
			KeyCode::Char('l') if ctrl => self.listings.cycle_location(),
			KeyCode::Left if ctrl => self.move_tag_cursor(false),
			KeyCode::Right if ctrl => self.move_tag_cursor(true),
			KeyCode::Char('t') if ctrl => self.toggle_cursor_tag(),
			KeyCode::Char('r') if ctrl => self.reset_listing_filters(),
			KeyCode::Char('n') if ctrl => self.show_notifications = true,
			KeyCode::Backspace if self.listing_input.is_empty() => {
				if let Some(chip) = self.listings.remove_last_chip() {
					self.status = Some(format!("Removed filter {chip}"));
				}
			}
			_ => {
				if self.listing_input.input(key) {
					self.sync_listing_text();
				}
			}
		}
		self.clamp_tables();
		None
	}
}
