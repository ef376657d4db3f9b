//! Colour themes for the terminal UI.

mod light;
mod slate;

use ratatui::style::{Color, Modifier, Style};

pub use light::LIGHT;
pub use slate::SLATE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub header: Style,
	pub row_highlight: Style,
	pub prompt: Style,
	pub empty: Style,
	pub highlight: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn header_bg(&self) -> Color {
		self.header.bg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn row_highlight_bg(&self) -> Color {
		self.row_highlight.bg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		Style::new()
			.fg(self.header_fg())
			.bg(self.row_highlight_bg())
	}

	/// Style for an active filter chip.
	#[must_use]
	pub fn chip_style(&self) -> Style {
		Style::new()
			.fg(self.header_fg())
			.bg(self.header_bg())
			.add_modifier(Modifier::BOLD)
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// A built-in theme and the alternative names it answers to.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

const BUILTINS: [ThemeDefinition; 2] = [
	ThemeDefinition {
		name: "slate",
		theme: SLATE,
		aliases: &["dark", "default"],
	},
	ThemeDefinition {
		name: "light",
		theme: LIGHT,
		aliases: &["day"],
	},
];

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

#[must_use]
pub fn builtin_themes() -> &'static [ThemeDefinition] {
	&BUILTINS
}

/// Canonical names of the built-in themes, in display order.
pub fn names() -> impl Iterator<Item = &'static str> {
	BUILTINS.iter().map(|definition| definition.name)
}

/// Look up a theme by name or alias, ignoring case and surrounding whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = normalize_name(name);
	BUILTINS
		.iter()
		.find(|definition| {
			definition.name == wanted || definition.aliases.iter().any(|alias| *alias == wanted)
		})
		.map(|definition| definition.theme)
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}
