use anyhow::Result;
use rolo::tui::{Selection, SessionOutcome};
use serde_json::json;

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
	for line in format_outcome_plain(outcome) {
		println!("{line}");
	}
}

fn format_outcome_plain(outcome: &SessionOutcome) -> Vec<String> {
	let mut lines = Vec::new();
	if !outcome.imported.is_empty() {
		let ids: Vec<String> = outcome.imported.iter().map(ToString::to_string).collect();
		lines.push(format!("Imported contacts: {}", ids.join(", ")));
	}

	if !outcome.accepted {
		lines.push(format!("Session cancelled (view: {})", outcome.view));
		return lines;
	}

	lines.push(match &outcome.selection {
		Some(Selection::Contact(contact)) => format!(
			"{} <{}> ({}, {})",
			contact.name, contact.email, contact.company, contact.phone
		),
		Some(Selection::Listing(listing)) => format!(
			"{} ({}€, {})",
			listing.title, listing.price, listing.location
		),
		None => "No selection".to_string(),
	});
	lines
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"view": outcome.view,
		"selection": serde_json::to_value(&outcome.selection)?,
		"imported": outcome.imported,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
