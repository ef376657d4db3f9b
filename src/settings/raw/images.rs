use rolo_core::{ImagePolicy, RemotePattern};
use serde::Deserialize;

/// `[images]` section. Leaving `remote_patterns` unset keeps the built-in
/// allow-list; an empty list blocks every remote image.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ImagesSection {
	pub(super) remote_patterns: Option<Vec<RemotePattern>>,
}

impl ImagesSection {
	pub(super) fn finalize(self) -> ImagePolicy {
		match self.remote_patterns {
			Some(patterns) => ImagePolicy::new(patterns),
			None => ImagePolicy::default(),
		}
	}
}
