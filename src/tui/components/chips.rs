use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use rolo_core::FilterChip;
use unicode_width::UnicodeWidthStr;

use crate::tui::theme::Theme;

const SEPARATOR: &str = " ";
const OVERFLOW: &str = "…";

/// Render active filter chips on one line, eliding the ones that do not fit.
pub fn render_chips(frame: &mut Frame, area: Rect, chips: &[FilterChip], theme: &Theme) {
	if area.height == 0 {
		return;
	}
	let line = if chips.is_empty() {
		Line::from(Span::styled("No active filters", theme.empty_style()))
	} else {
		let labels: Vec<String> = chips.iter().map(|chip| format!(" {} × ", chip.label())).collect();
		fit_spans(&labels, usize::from(area.width), |_| theme.chip_style(), theme)
	};
	frame.render_widget(Paragraph::new(line), area);
}

/// Render the tag strip with the cursor tag highlighted and required tags
/// marked.
pub fn render_tag_strip<'t, I>(
	frame: &mut Frame,
	area: Rect,
	tags: I,
	cursor: usize,
	is_required: impl Fn(&str) -> bool,
	theme: &Theme,
) where
	I: IntoIterator<Item = &'t str>,
{
	if area.height == 0 {
		return;
	}
	let tags: Vec<&str> = tags.into_iter().collect();
	let labels: Vec<String> = tags
		.iter()
		.map(|tag| {
			let mark = if is_required(tag) { '✓' } else { '+' };
			format!("{mark} {tag}")
		})
		.collect();

	// Scroll so the cursor tag stays visible.
	let width = usize::from(area.width);
	let last = cursor.min(labels.len().saturating_sub(1));
	let mut first = 0;
	while first < last && used_width(&labels[first..=last]) > width {
		first += 1;
	}

	let line = fit_spans(
		&labels[first..],
		width,
		|index| {
			if index + first == cursor {
				theme.row_highlight_style().add_modifier(Modifier::BOLD)
			} else if is_required(tags[index + first]) {
				theme.highlight_style()
			} else {
				theme.empty_style()
			}
		},
		theme,
	);
	frame.render_widget(Paragraph::new(line), area);
}

fn used_width(labels: &[String]) -> usize {
	labels
		.iter()
		.map(|label| label.width() + SEPARATOR.width())
		.sum()
}

/// Lay out `labels` left to right within `width` columns.
///
/// When a label does not fit, an ellipsis is appended instead (if room
/// remains) and the rest is dropped.
fn fit_spans(
	labels: &[String],
	width: usize,
	style_for: impl Fn(usize) -> Style,
	theme: &Theme,
) -> Line<'static> {
	let mut spans = Vec::new();
	let mut used = 0;
	for (index, label) in labels.iter().enumerate() {
		let needed = label.width() + if index == 0 { 0 } else { SEPARATOR.width() };
		if used + needed > width {
			if used + OVERFLOW.width() <= width {
				spans.push(Span::styled(OVERFLOW, theme.empty_style()));
			}
			break;
		}
		if index > 0 {
			spans.push(Span::raw(SEPARATOR));
		}
		spans.push(Span::styled(label.clone(), style_for(index)));
		used += needed;
	}
	Line::from(spans)
}
