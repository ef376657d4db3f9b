use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use super::tabs::{render_tabs, tabs_width};
use crate::tui::input::SearchInput;
use crate::tui::outcome::Screen;
use crate::tui::theme::Theme;

/// Argument bundle for rendering the input row.
pub struct InputContext<'a> {
	pub input: &'a SearchInput<'static>,
	pub prompt: &'a str,
	pub screen: Screen,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Status shown at the right edge of the input.
pub struct ProgressState<'a> {
	pub label: &'a str,
	/// Draw the spinner in front of the label.
	pub busy: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render the prompt, the text input, its status label and the screen tabs.
pub fn render_input_with_tabs(
	frame: &mut Frame,
	input: InputContext<'_>,
	progress: ProgressState<'_>,
) {
	let InputContext {
		input,
		prompt,
		screen,
		area,
		theme,
	} = input;

	let prompt_width = calculate_prompt_width(prompt);
	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints(layout_constraints(prompt_width, tabs_width()))
		.split(area);

	if prompt_width > 0 {
		let prompt_widget = Paragraph::new(format!("{prompt} > ")).style(theme.prompt_style());
		frame.render_widget(prompt_widget, horizontal[0]);
	}

	let input_area = horizontal[horizontal.len() - 2];
	input.render_textarea(frame, input_area);
	render_progress(frame, input_area, progress, theme);
	render_tabs(frame, horizontal[horizontal.len() - 1], screen, theme);
}

fn calculate_prompt_width(prompt: &str) -> u16 {
	if prompt.is_empty() {
		0
	} else {
		u16::try_from(prompt.width()).unwrap_or(u16::MAX).saturating_add(3)
	}
}

fn layout_constraints(prompt_width: u16, tabs_width: u16) -> Vec<Constraint> {
	let mut constraints = Vec::with_capacity(3);
	if prompt_width > 0 {
		constraints.push(Constraint::Length(prompt_width));
	}
	constraints.push(Constraint::Min(1));
	constraints.push(Constraint::Length(tabs_width));
	constraints
}

/// Right-align the status inside `area`, never overlapping typed text.
fn render_progress(frame: &mut Frame, area: Rect, progress: ProgressState<'_>, theme: &Theme) {
	if area.width == 0 || area.height == 0 || progress.label.is_empty() {
		return;
	}

	let muted_style = theme.empty_style();
	let mut line = Line::default();
	if progress.busy {
		let spinner = Throbber::default()
			.style(muted_style)
			.throbber_style(muted_style);
		line.spans.push(spinner.to_symbol_span(progress.throbber_state));
	}
	line.spans
		.push(Span::styled(progress.label.to_string(), muted_style));

	let line_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
	if line_width == 0 {
		return;
	}

	let buffer = frame.buffer_mut();
	let mut start_x = area.right().saturating_sub(line_width).max(area.left());

	let input_row = area.top();
	let last_char_x = (area.left()..area.right()).rev().find(|x| {
		buffer
			.cell((*x, input_row))
			.is_some_and(|cell| !cell.symbol().trim().is_empty())
	});
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}
	if start_x >= area.right() {
		return;
	}

	let max_width = area.right().saturating_sub(start_x).min(line_width);
	buffer.set_line(start_x, input_row, &line, max_width);
}
