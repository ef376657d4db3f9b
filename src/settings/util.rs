/// Trim and lowercase a user supplied identifier.
pub(super) fn normalize_name(value: &str) -> String {
	value.trim().to_ascii_lowercase()
}

/// Trim stage labels and drop empty ones.
pub(super) fn sanitize_stages(stages: Vec<String>) -> Vec<String> {
	stages
		.into_iter()
		.map(|stage| stage.trim().to_string())
		.filter(|stage| !stage.is_empty())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names_are_trimmed_and_lowercased() {
		assert_eq!(normalize_name("  Light "), "light");
	}

	#[test]
	fn stages_are_trimmed_and_filtered() {
		let stages = sanitize_stages(vec![" LinkedIn ".into(), "".into(), "  ".into(), "Xing".into()]);
		assert_eq!(stages, vec!["LinkedIn", "Xing"]);
	}
}
