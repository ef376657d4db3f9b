use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, HighlightSpacing, Paragraph, Row, Table, TableState};

use crate::tui::theme::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;
/// Rows taken by the header and the separator under it.
pub const HEADER_AND_DIVIDER_HEIGHT: u16 = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	pub headers: Vec<&'static str>,
	pub widths: Vec<Constraint>,
	pub rows: Vec<Row<'a>>,
}

/// Render a table with a styled header and a separator line below it.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	let header_cells = spec.headers.into_iter().map(Cell::from).collect::<Vec<_>>();
	let header = Row::new(header_cells)
		.style(theme.header_style())
		.height(1)
		.bottom_margin(1);

	let mut widths = spec.widths;
	if widths.is_empty() {
		widths = vec![Constraint::Fill(1)];
	}

	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);

	render_header_separator(frame, area, theme, 1);
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme, header_height: u16) {
	if header_height >= area.height || area.width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: area.y + header_height,
		width: area.width,
		height: 1,
	};
	let width = usize::from(area.width);
	let base_style = Style::new().bg(theme.header_bg());
	if width <= 2 {
		frame.render_widget(Paragraph::new(" ".repeat(width)).style(base_style), sep_rect);
		return;
	}

	let middle_style = base_style.fg(theme.header_fg());
	let spans = vec![
		Span::styled(" ", base_style),
		Span::styled("─".repeat(width - 2), middle_style),
		Span::styled(" ", base_style),
	];
	frame.render_widget(Paragraph::new(Text::from(Line::from(spans))), sep_rect);
}

/// Keep `state` pointing at a valid row of a table with `len` rows.
pub fn clamp_selection(state: &mut TableState, len: usize) {
	match state.selected() {
		_ if len == 0 => state.select(None),
		None => state.select(Some(0)),
		Some(selected) if selected >= len => state.select(Some(len - 1)),
		Some(_) => {}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn selection_is_clamped_to_the_row_count() {
		let mut state = TableState::default();
		clamp_selection(&mut state, 3);
		assert_eq!(state.selected(), Some(0));

		state.select(Some(7));
		clamp_selection(&mut state, 3);
		assert_eq!(state.selected(), Some(2));

		clamp_selection(&mut state, 0);
		assert_eq!(state.selected(), None);
	}
}
