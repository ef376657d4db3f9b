//! Single-line text input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// One-line editor used for every filter and search prompt.
#[derive(Debug, Clone)]
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl Default for SearchInput<'_> {
	fn default() -> Self {
		Self::new("")
	}
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.textarea.set_placeholder_text(placeholder);
		self
	}

	/// Current text of the line.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.text().is_empty()
	}

	/// Replace the content, keeping the placeholder.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let placeholder = self.textarea.placeholder_text().to_string();
		*self = Self::new(text).with_placeholder(placeholder);
	}

	/// Feed a key to the editor. Returns `true` when the text changed.
	///
	/// Keys that would split the line are swallowed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if breaks_line(&key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn breaks_line(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}
