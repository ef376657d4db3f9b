//! Allow-list for remote listing images.

use serde::{Deserialize, Serialize};
use url::Url;

/// Host the built-in listing images are served from.
pub const DEFAULT_IMAGE_HOST: &str = "hebbkx1anhila5yf.public.blob.vercel-storage.com";

/// One allowed remote location.
///
/// `port` matches any port when `None`. `pathname` matches exactly, or as a
/// prefix when it ends in `/**`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePattern {
	pub protocol: String,
	pub hostname: String,
	#[serde(default)]
	pub port: Option<u16>,
	#[serde(default = "default_pathname")]
	pub pathname: String,
}

fn default_pathname() -> String {
	"/**".to_string()
}

impl RemotePattern {
	pub fn https(hostname: impl Into<String>) -> Self {
		Self {
			protocol: "https".to_string(),
			hostname: hostname.into(),
			port: None,
			pathname: default_pathname(),
		}
	}

	#[must_use]
	pub fn matches(&self, url: &Url) -> bool {
		if !url.scheme().eq_ignore_ascii_case(self.protocol.trim_end_matches(':')) {
			return false;
		}
		if !url
			.host_str()
			.is_some_and(|host| host.eq_ignore_ascii_case(&self.hostname))
		{
			return false;
		}
		if self.port.is_some() && url.port_or_known_default() != self.port {
			return false;
		}
		let path = url.path();
		match self.pathname.strip_suffix("/**") {
			Some(prefix) => {
				path == prefix
					|| path
						.strip_prefix(prefix)
						.is_some_and(|rest| rest.starts_with('/'))
			}
			None => path == self.pathname,
		}
	}
}

/// Ordered set of [`RemotePattern`]s; a URI is allowed when any pattern
/// matches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePolicy {
	patterns: Vec<RemotePattern>,
}

impl Default for ImagePolicy {
	fn default() -> Self {
		Self::new(vec![RemotePattern::https(DEFAULT_IMAGE_HOST)])
	}
}

impl ImagePolicy {
	#[must_use]
	pub fn new(patterns: Vec<RemotePattern>) -> Self {
		Self { patterns }
	}

	#[must_use]
	pub fn patterns(&self) -> &[RemotePattern] {
		&self.patterns
	}

	/// Return `true` when `uri` parses and some pattern accepts it.
	#[must_use]
	pub fn allows(&self, uri: &str) -> bool {
		match Url::parse(uri) {
			Ok(url) => self.patterns.iter().any(|pattern| pattern.matches(&url)),
			Err(error) => {
				log::debug!("rejecting image reference {uri:?}: {error}");
				false
			}
		}
	}
}
