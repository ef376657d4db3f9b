use super::ResolvedConfig;

pub(super) fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let search = &config.search;
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  View: {}", config.view),
		format!("  Theme: {}", config.theme),
	];
	if !config.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", config.initial_query));
	}
	lines.push(format!("  Search tick: {} ms", search.tick_ms));
	lines.push(format!("  Progress step: {}%", search.step));
	lines.push(format!("  Stage change every: {}%", search.stage_every));
	lines.push(format!("  Stages: {}", search.stages.join(", ")));
	lines.push(format!(
		"  Results per search: {}-{}",
		search.min_results, search.max_results
	));
	lines.push(format!(
		"  Retries: {} (backoff {} ms)",
		search.max_retries, search.retry_backoff_ms
	));
	lines.push(match search.seed {
		Some(seed) => format!("  Seed: {seed}"),
		None => "  Seed: (random)".to_string(),
	});

	let patterns = config.images.patterns();
	if patterns.is_empty() {
		lines.push("  Image hosts: (none)".to_string());
	} else {
		let hosts: Vec<String> = patterns
			.iter()
			.map(|pattern| format!("{}://{}{}", pattern.protocol, pattern.hostname, pattern.pathname))
			.collect();
		lines.push(format!("  Image hosts: {}", hosts.join(", ")));
	}
	lines
}
