use ratatui::style::{Color, Modifier, Style};

use super::Theme;

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(203, 213, 225))
		.fg(Color::Rgb(30, 64, 175)),
	prompt: Style::new().fg(Color::Rgb(3, 105, 161)),
	empty: Style::new().fg(Color::Rgb(100, 116, 139)),
	highlight: Style::new()
		.fg(Color::Rgb(30, 64, 175))
		.add_modifier(Modifier::BOLD),
};
