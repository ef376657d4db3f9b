use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Tabs;

use crate::tui::outcome::Screen;
use crate::tui::theme::Theme;

/// Render the screen tabs, highlighting `active`.
pub fn render_tabs(frame: &mut Frame, area: Rect, active: Screen, theme: &Theme) {
	let inner = Rect {
		x: area.x.saturating_add(1),
		width: area.width.saturating_sub(1),
		..area
	};
	let tabs = Tabs::new(build_tab_titles(theme, active))
		.select(active.index())
		.divider("")
		.padding("", " ")
		.highlight_style(theme.header_style());
	frame.render_widget(tabs, inner);
}

fn build_tab_titles(theme: &Theme, active: Screen) -> Vec<Line<'static>> {
	Screen::ALL
		.iter()
		.map(|screen| {
			let style = if *screen == active {
				theme.header_style()
			} else {
				theme.tab_inactive_style()
			};
			Line::from(format!(" {} ", screen.label())).style(style)
		})
		.collect()
}

/// Columns needed to show every tab label with its padding.
#[must_use]
pub fn tabs_width() -> u16 {
	let width = Screen::ALL.iter().fold(0u16, |width, screen| {
		let label = u16::try_from(screen.label().len()).unwrap_or(u16::MAX);
		width.saturating_add(label.saturating_add(3))
	});
	width.saturating_add(1)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn active_tab_uses_header_style() {
		let theme = Theme::default();
		let titles = build_tab_titles(&theme, Screen::Search);
		assert_eq!(titles.len(), 3);
		assert_eq!(titles[1].spans[0].content.as_ref().trim(), "Search");
		assert_eq!(titles[1].style, theme.header_style());
		assert_eq!(titles[0].style, theme.tab_inactive_style());
	}

	#[test]
	fn width_fits_all_labels() {
		assert_eq!(tabs_width(), 32);
	}
}
