use anyhow::{Result, anyhow};
use rolo::tui::{self, AppConfig, Screen, SessionOutcome, Theme};
use rolo_core::{ImagePolicy, SearchSettings};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive session.
pub(crate) struct SessionWorkflow {
	config: AppConfig,
}

impl SessionWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let config = AppConfigFactory::build(config)?;
		Ok(Self { config })
	}

	pub(crate) fn run(self) -> Result<SessionOutcome> {
		log::info!("starting session on the {} screen", self.config.screen);
		tui::run(self.config)
	}
}

/// Helper for translating resolved configuration into an [`AppConfig`].
struct AppConfigFactory {
	config: AppConfig,
}

impl AppConfigFactory {
	fn build(config: ResolvedConfig) -> Result<AppConfig> {
		let ResolvedConfig {
			view,
			initial_query,
			theme,
			search,
			images,
		} = config;

		let builder = Self::new()
			.with_screen(view)
			.with_initial_query(initial_query)
			.with_theme(&theme)?
			.with_search(search.to_settings(), search.seed)
			.with_images(images);

		Ok(builder.finish())
	}

	fn new() -> Self {
		Self {
			config: AppConfig::default(),
		}
	}

	fn with_screen(mut self, screen: Screen) -> Self {
		self.config.screen = screen;
		self
	}

	fn with_initial_query(mut self, query: String) -> Self {
		self.config.initial_query = query;
		self
	}

	fn with_theme(mut self, name: &str) -> Result<Self> {
		let theme: Theme =
			tui::theme::by_name(name).ok_or_else(|| anyhow!("unknown theme '{name}'"))?;
		self.config.theme = theme;
		Ok(self)
	}

	fn with_search(mut self, settings: SearchSettings, seed: Option<u64>) -> Self {
		self.config.search = settings;
		self.config.seed = seed;
		self
	}

	fn with_images(mut self, images: ImagePolicy) -> Self {
		self.config.images = images;
		self
	}

	fn finish(self) -> AppConfig {
		self.config
	}
}
