use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use rolo_core::{
	ContactBook, ContactDirectory, ProviderError, SearchProvider, SearchRequest, SearchResult,
	SearchSettings,
};

use super::{App, AppConfig, Screen, Selection};

const FULL_RUN: u32 = 101;

fn app() -> App {
	App::new(AppConfig {
		seed: Some(7),
		..AppConfig::default()
	})
}

fn press(app: &mut App, code: KeyCode) -> Option<super::SessionOutcome> {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(app: &mut App, c: char) -> Option<super::SessionOutcome> {
	app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn type_text(app: &mut App, text: &str) {
	for c in text.chars() {
		press(app, KeyCode::Char(c));
	}
}

fn render(app: &mut App) -> String {
	let mut terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();
	terminal.draw(|frame| app.draw(frame)).unwrap();
	terminal.backend().to_string()
}

fn finish_search(app: &mut App) {
	app.directory.advance(FULL_RUN);
	app.clamp_tables();
}

#[test]
fn contacts_screen_lists_the_seeded_book() {
	let mut app = app();
	let view = render(&mut app);
	assert!(view.contains("David Brown"), "{view}");
	assert!(view.contains("5/5 contacts"), "{view}");
}

#[test]
fn typing_filters_contacts_and_enter_accepts_the_highlighted_one() {
	let mut app = app();
	type_text(&mut app, "brown");
	let view = render(&mut app);
	assert!(view.contains("1/5 contacts"), "{view}");
	assert!(!view.contains("John Smith"), "{view}");

	let outcome = press(&mut app, KeyCode::Enter).expect("enter ends the session");
	assert!(outcome.accepted);
	match outcome.selection {
		Some(Selection::Contact(contact)) => assert_eq!(contact.name, "David Brown"),
		other => panic!("unexpected selection: {other:?}"),
	}
}

#[test]
fn escape_cancels_without_selection() {
	let mut app = app();
	let outcome = press(&mut app, KeyCode::Esc).expect("escape ends the session");
	assert!(!outcome.accepted);
	assert_eq!(outcome.selection, None);
	assert_eq!(outcome.view, Screen::Contacts);
}

#[test]
fn empty_search_term_is_reported_on_the_status_line() {
	let mut app = app();
	press(&mut app, KeyCode::Tab);
	assert_eq!(app.screen(), Screen::Search);

	press(&mut app, KeyCode::Enter);
	assert!(!app.directory().is_searching());
	let view = render(&mut app);
	assert!(view.contains("search term is empty"), "{view}");
}

#[test]
fn search_select_and_import_returns_to_contacts() {
	let mut app = app();
	press(&mut app, KeyCode::Tab);
	type_text(&mut app, "Acme");
	press(&mut app, KeyCode::Enter);
	assert!(app.directory().is_searching());
	assert!(render(&mut app).contains('%'));

	finish_search(&mut app);
	assert!(!app.directory().results().is_empty());

	ctrl(&mut app, 's');
	press(&mut app, KeyCode::Down);
	ctrl(&mut app, 's');
	let view = render(&mut app);
	assert!(view.contains("2 selected"), "{view}");
	assert!(view.contains("[x]"), "{view}");

	ctrl(&mut app, 'o');
	assert_eq!(app.screen(), Screen::Contacts);
	let view = render(&mut app);
	assert!(view.contains("Imported 2 contacts"), "{view}");
	assert!(view.contains("7/7 contacts"), "{view}");

	let outcome = press(&mut app, KeyCode::Esc).expect("escape ends the session");
	assert_eq!(outcome.imported, vec![6, 7]);
}

#[test]
fn space_types_into_the_search_input_before_results_exist() {
	let mut app = app();
	press(&mut app, KeyCode::Tab);
	type_text(&mut app, "Acme Ltd");
	assert_eq!(app.search_input.text(), "Acme Ltd");
}

#[test]
fn multi_word_term_can_be_typed_after_a_completed_search() {
	let mut app = app();
	press(&mut app, KeyCode::Tab);
	type_text(&mut app, "Acme");
	press(&mut app, KeyCode::Enter);
	finish_search(&mut app);
	assert!(!app.directory().results().is_empty());

	for _ in 0.."Acme".len() {
		press(&mut app, KeyCode::Backspace);
	}
	type_text(&mut app, "Big Corp");
	assert_eq!(app.search_input.text(), "Big Corp");
	assert!(app.directory().selection().is_empty());
}

#[test]
fn running_search_does_not_claim_there_are_no_results() {
	let mut app = app();
	press(&mut app, KeyCode::Tab);
	type_text(&mut app, "Acme");
	press(&mut app, KeyCode::Enter);
	let view = render(&mut app);
	assert!(!view.contains("No results"), "{view}");
}

struct OfflineProvider;

impl SearchProvider for OfflineProvider {
	fn search(&mut self, _request: &SearchRequest) -> Result<Vec<SearchResult>, ProviderError> {
		Err(ProviderError::unavailable("offline"))
	}
}

#[test]
fn failed_search_is_shown_instead_of_no_results() {
	let mut app = app();
	app.directory = ContactDirectory::new(
		ContactBook::seeded(),
		SearchSettings::default(),
		Box::new(OfflineProvider),
	);
	press(&mut app, KeyCode::Tab);
	type_text(&mut app, "Acme");
	press(&mut app, KeyCode::Enter);
	app.directory.advance(u32::MAX);

	assert!(!app.directory().is_searching());
	let view = render(&mut app);
	assert!(view.contains("Search failed"), "{view}");
	assert!(!view.contains("No results"), "{view}");
}

#[test]
fn cancelling_a_running_search_keeps_the_term() {
	let mut app = app();
	press(&mut app, KeyCode::Tab);
	type_text(&mut app, "Acme");
	press(&mut app, KeyCode::Enter);
	ctrl(&mut app, 'x');
	assert!(!app.directory().is_searching());
	assert_eq!(app.search_input.text(), "Acme");
	assert!(render(&mut app).contains("Search cancelled"));
}

#[test]
fn dropping_the_app_mid_search_is_clean() {
	let mut app = app();
	press(&mut app, KeyCode::Tab);
	type_text(&mut app, "Acme");
	press(&mut app, KeyCode::Enter);
	app.shutdown();
	assert!(!app.directory().is_searching());
	drop(app);
}

#[test]
fn category_cycles_with_control_arrows() {
	let mut app = app();
	press(&mut app, KeyCode::Tab);
	let start = app.category();
	app.handle_key(KeyEvent::new(KeyCode::Right, KeyModifiers::CONTROL));
	assert_eq!(app.category(), start.next());
	app.handle_key(KeyEvent::new(KeyCode::Left, KeyModifiers::CONTROL));
	assert_eq!(app.category(), start);
}

fn listings_app() -> App {
	App::new(AppConfig {
		screen: Screen::Listings,
		..AppConfig::default()
	})
}

#[test]
fn listing_screen_shows_chips_and_image_policy() {
	let mut app = listings_app();
	let view = render(&mut app);
	assert!(view.contains("No active filters"), "{view}");
	assert!(view.contains("4/4 listings"), "{view}");
	assert!(view.contains("blocked"), "{view}");
	assert!(view.contains("allowed"), "{view}");
}

#[test]
fn price_cycle_then_reset_restores_everything() {
	let mut app = listings_app();
	ctrl(&mut app, 'p');
	let view = render(&mut app);
	assert!(view.contains("1/4 listings"), "{view}");
	assert!(view.contains("Price: "), "{view}");

	type_text(&mut app, "zzz");
	assert!(app.listings().visible().is_empty());
	assert!(render(&mut app).contains("No results"));

	ctrl(&mut app, 'r');
	assert_eq!(app.listings().visible().len(), 4);
	assert!(app.listing_input.is_empty());
	assert!(app.listings().chips().is_empty());
}

#[test]
fn backspace_on_empty_input_removes_the_last_chip() {
	let mut app = listings_app();
	ctrl(&mut app, 'l');
	ctrl(&mut app, 't');
	assert_eq!(app.listings().chips().len(), 2);

	press(&mut app, KeyCode::Backspace);
	assert_eq!(app.listings().chips().len(), 1);
	assert!(app.status.as_deref().is_some_and(|status| status.starts_with("Removed filter")));
}

#[test]
fn notifications_popup_swallows_keys_until_closed() {
	let mut app = listings_app();
	ctrl(&mut app, 'n');
	let view = render(&mut app);
	assert!(view.contains("Benachrichtigungen"), "{view}");

	assert_eq!(press(&mut app, KeyCode::Char('x')), None);
	assert!(app.listing_input.is_empty());

	assert_eq!(press(&mut app, KeyCode::Esc), None);
	assert!(!render(&mut app).contains("Benachrichtigungen"));
}

#[test]
fn accepting_a_listing_reports_it() {
	let mut app = listings_app();
	press(&mut app, KeyCode::Down);
	let outcome = press(&mut app, KeyCode::Enter).expect("enter ends the session");
	match outcome.selection {
		Some(Selection::Listing(listing)) => assert_eq!(listing.id, 2),
		other => panic!("unexpected selection: {other:?}"),
	}
}
