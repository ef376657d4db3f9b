/// Messages announced in the listing header. Only the count and the messages
/// themselves are shown; there is no read state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notifications {
	messages: Vec<String>,
}

impl Default for Notifications {
	fn default() -> Self {
		Self::new([
			"Neue Wohnung in Ihrer Wunschgegend verfügbar!",
			"Ihr Antrag für die Sozialwohnung wurde genehmigt.",
		])
	}
}

impl Notifications {
	pub fn new<I, S>(messages: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			messages: messages.into_iter().map(Into::into).collect(),
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}

	#[must_use]
	pub fn count(&self) -> usize {
		self.messages.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.messages.iter().map(String::as_str)
	}
}
