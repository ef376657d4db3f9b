use ratatui::style::{Color, Modifier, Style};

use super::Theme;

/// Dark slate palette used unless another theme is configured.
pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(30, 41, 59)),
	row_highlight: Style::new()
		.bg(Color::Rgb(51, 65, 85))
		.fg(Color::Rgb(125, 211, 252)),
	prompt: Style::new().fg(Color::Rgb(56, 189, 248)),
	empty: Style::new().fg(Color::Rgb(100, 116, 139)),
	highlight: Style::new()
		.fg(Color::Rgb(251, 191, 36))
		.add_modifier(Modifier::BOLD),
};
