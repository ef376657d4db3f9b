use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Row};
use rolo_core::{PhaseKind, SearchCategory};

use super::App;
use super::components::{
	HEADER_AND_DIVIDER_HEIGHT, InputContext, ProgressState, TableSpec, render_chips,
	render_input_with_tabs, render_table, render_tag_strip,
};
use super::outcome::Screen;

impl App {
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let extra_rows = match self.screen {
			Screen::Contacts => 0,
			Screen::Search => 1,
			Screen::Listings => 2,
		};
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(extra_rows),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(area);

		let (progress_text, busy) = self.progress_status();
		let input_ctx = InputContext {
			input: self.current_input(),
			prompt: self.screen.label(),
			screen: self.screen,
			area: layout[0],
			theme: &self.theme,
		};
		let progress_state = ProgressState {
			label: &progress_text,
			busy,
			throbber_state: &self.throbber_state,
		};
		render_input_with_tabs(frame, input_ctx, progress_state);

		match self.screen {
			Screen::Contacts => self.render_contacts(frame, layout[2]),
			Screen::Search => {
				self.render_categories(frame, layout[1]);
				self.render_results(frame, layout[2]);
			}
			Screen::Listings => {
				self.render_listing_filters(frame, layout[1]);
				self.render_listings(frame, layout[2]);
			}
		}

		if self.row_count() == 0
			&& let Some(message) = self.empty_message()
		{
			self.render_empty(frame, layout[2], message);
		}
		self.render_status_line(frame, layout[3]);

		if self.show_notifications {
			self.render_notifications(frame, area);
		}
	}

	/// Label for the right edge of the input and whether the spinner runs.
	pub(crate) fn progress_status(&self) -> (String, bool) {
		match self.screen {
			Screen::Contacts => (
				format!(
					"{}/{} contacts",
					self.visible_contacts().len(),
					self.directory.contacts().len()
				),
				false,
			),
			Screen::Search => {
				let status = self.directory.status();
				match status.kind {
					PhaseKind::Running | PhaseKind::Retrying => (
						format!(
							"{} {}%",
							status.stage_label.unwrap_or_default(),
							status.progress
						),
						true,
					),
					PhaseKind::Failed => match status.error {
						Some(error) => (format!("Search failed: {error}"), false),
						None => ("Search failed".to_string(), false),
					},
					PhaseKind::Idle => (
						format!(
							"{} results, {} selected",
							self.directory.results().len(),
							self.directory.selection().len()
						),
						false,
					),
				}
			}
			Screen::Listings => (
				format!(
					"{}/{} listings · {} notifications",
					self.listings.visible().len(),
					self.listings.seed().len(),
					self.listings.notifications().count()
				),
				false,
			),
		}
	}

	fn render_contacts(&mut self, frame: &mut Frame, area: Rect) {
		let rows: Vec<Row> = self
			.visible_contacts()
			.into_iter()
			.map(|contact| {
				Row::new(vec![
					contact.id.to_string(),
					contact.name.clone(),
					contact.company.clone(),
					contact.email.clone(),
					contact.phone.clone(),
				])
			})
			.collect();
		let spec = TableSpec {
			headers: vec!["Id", "Name", "Company", "Email", "Phone"],
			widths: vec![
				Constraint::Length(4),
				Constraint::Fill(2),
				Constraint::Fill(2),
				Constraint::Fill(3),
				Constraint::Fill(2),
			],
			rows,
		};
		render_table(frame, area, &mut self.tables.contacts, spec, &self.theme);
	}

	fn render_categories(&self, frame: &mut Frame, area: Rect) {
		let mut spans = vec![Span::styled("Category: ", self.theme.empty_style())];
		for category in SearchCategory::ALL {
			let style = if category == self.category {
				self.theme.chip_style()
			} else {
				self.theme.empty_style()
			};
			spans.push(Span::styled(format!(" {category} "), style));
			spans.push(Span::raw(" "));
		}
		frame.render_widget(Paragraph::new(Line::from(spans)), area);
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		let directory = &self.directory;
		let rows: Vec<Row> = directory
			.results()
			.iter()
			.map(|result| {
				let mark = if directory.is_selected(result.id) { "[x]" } else { "[ ]" };
				Row::new(vec![
					mark.to_string(),
					result.name.clone(),
					result.company.clone(),
					result.email.clone(),
					result.phone.clone(),
				])
			})
			.collect();
		let spec = TableSpec {
			headers: vec!["", "Name", "Company", "Email", "Phone"],
			widths: vec![
				Constraint::Length(3),
				Constraint::Fill(2),
				Constraint::Fill(2),
				Constraint::Fill(3),
				Constraint::Fill(2),
			],
			rows,
		};
		render_table(frame, area, &mut self.tables.results, spec, &self.theme);
	}

	fn render_listing_filters(&self, frame: &mut Frame, area: Rect) {
		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(1), Constraint::Length(1)])
			.split(area);
		render_chips(frame, rows[0], &self.listings.chips(), &self.theme);
		let filter = self.listings.filter();
		render_tag_strip(
			frame,
			rows[1],
			self.listings.all_tags().iter().map(String::as_str),
			self.tag_cursor,
			|tag| filter.required_tags.contains(tag),
			&self.theme,
		);
	}

	fn render_listings(&mut self, frame: &mut Frame, area: Rect) {
		let images = &self.images;
		let rows: Vec<Row> = self
			.listings
			.visible()
			.into_iter()
			.map(|listing| {
				let image = if images.allows(&listing.image) {
					"allowed"
				} else {
					"blocked"
				};
				Row::new(vec![
					listing.title.clone(),
					format!("{}€", listing.price),
					listing.location.clone(),
					listing.kind.to_string(),
					if listing.is_new { "new" } else { "" }.to_string(),
					image.to_string(),
				])
			})
			.collect();
		let spec = TableSpec {
			headers: vec!["Title", "Price", "District", "Kind", "", "Image"],
			widths: vec![
				Constraint::Fill(4),
				Constraint::Length(7),
				Constraint::Length(11),
				Constraint::Length(8),
				Constraint::Length(3),
				Constraint::Length(7),
			],
			rows,
		};
		render_table(frame, area, &mut self.tables.listings, spec, &self.theme);
	}

	/// Text shown over an empty table. A running search shows nothing.
	fn empty_message(&self) -> Option<&'static str> {
		if self.screen != Screen::Search {
			return Some("No results");
		}
		match self.directory.status().kind {
			PhaseKind::Idle => Some("No results"),
			PhaseKind::Running | PhaseKind::Retrying => None,
			PhaseKind::Failed => Some("Search failed, press Enter to retry"),
		}
	}

	fn render_empty(&self, frame: &mut Frame, area: Rect, message: &str) {
		if area.height <= HEADER_AND_DIVIDER_HEIGHT {
			return;
		}
		let message_area = Rect {
			y: area.y + HEADER_AND_DIVIDER_HEIGHT,
			height: area.height - HEADER_AND_DIVIDER_HEIGHT,
			..area
		};
		let empty = Paragraph::new(message)
			.alignment(Alignment::Center)
			.style(self.theme.empty_style());
		frame.render_widget(Clear, message_area);
		frame.render_widget(empty, message_area);
	}

	fn render_status_line(&self, frame: &mut Frame, area: Rect) {
		let text = match &self.status {
			Some(message) => message.clone(),
			None => key_hints(self.screen).to_string(),
		};
		frame.render_widget(Paragraph::new(text).style(self.theme.empty_style()), area);
	}

	fn render_notifications(&self, frame: &mut Frame, area: Rect) {
		let notifications = self.listings.notifications();
		let lines: Vec<Line> = if notifications.is_empty() {
			vec![Line::from("Keine neuen Benachrichtigungen.")]
		} else {
			notifications
				.iter()
				.map(|message| Line::from(format!("• {message}")))
				.collect()
		};
		let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
		let popup = centered(area, area.width.saturating_sub(4).min(60), height);
		let block = Block::default()
			.borders(Borders::ALL)
			.border_type(BorderType::Rounded)
			.border_style(self.theme.prompt_style())
			.title(" Benachrichtigungen ");
		frame.render_widget(Clear, popup);
		frame.render_widget(Paragraph::new(lines).block(block), popup);
	}
}

fn key_hints(screen: Screen) -> &'static str {
	match screen {
		Screen::Contacts => "Enter accept · Tab next screen · Esc quit",
		Screen::Search => {
			"Enter search · Ctrl+←/→ category · Ctrl+S select · Ctrl+O import · Ctrl+X cancel"
		}
		Screen::Listings => {
			"Ctrl+P price · Ctrl+L district · Ctrl+←/→ tag · Ctrl+T toggle · Ctrl+R reset · Ctrl+N notifications"
		}
	}
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
	let width = width.min(area.width);
	let height = height.min(area.height);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 2,
		width,
		height,
	}
}
