//! Contact records and the append-only contact book.

mod seed;

use serde::{Deserialize, Serialize};

use crate::error::DirectoryError;

pub use seed::seed_contacts;

/// Identifier of a contact inside a [`ContactBook`].
pub type ContactId = u32;

/// A single entry in the contact book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
	pub id: ContactId,
	pub name: String,
	pub company: String,
	pub email: String,
	pub phone: String,
}

impl Contact {
	pub fn new(
		id: ContactId,
		name: impl Into<String>,
		company: impl Into<String>,
		email: impl Into<String>,
		phone: impl Into<String>,
	) -> Self {
		Self {
			id,
			name: name.into(),
			company: company.into(),
			email: email.into(),
			phone: phone.into(),
		}
	}

	/// Return `true` when any field contains `needle`.
	///
	/// `needle` must already be lowercased. The id takes part in the match as
	/// its decimal representation.
	#[must_use]
	pub fn contains_lowercase(&self, needle: &str) -> bool {
		if needle.is_empty() {
			return true;
		}
		self.id.to_string().contains(needle)
			|| [&self.name, &self.company, &self.email, &self.phone]
				.iter()
				.any(|field| field.to_lowercase().contains(needle))
	}
}

/// Case-insensitive substring filter across every contact field.
///
/// The result keeps the input order; an empty term returns every contact.
#[must_use]
pub fn filter_contacts<'a>(contacts: &'a [Contact], term: &str) -> Vec<&'a Contact> {
	let needle = term.to_lowercase();
	contacts
		.iter()
		.filter(|contact| contact.contains_lowercase(&needle))
		.collect()
}

/// Append-only collection of contacts with unique ids.
#[derive(Debug, Clone, Default)]
pub struct ContactBook {
	contacts: Vec<Contact>,
}

impl ContactBook {
	/// Build a book from existing records.
	///
	/// Records whose id is already present are dropped so the id invariant
	/// holds from the start.
	pub fn new(contacts: impl IntoIterator<Item = Contact>) -> Self {
		let mut book = Self::default();
		for contact in contacts {
			if book.get(contact.id).is_some() {
				log::warn!("dropping contact with duplicate id {}", contact.id);
				continue;
			}
			book.contacts.push(contact);
		}
		book
	}

	/// Book pre-filled with the built-in seed contacts.
	#[must_use]
	pub fn seeded() -> Self {
		Self::new(seed_contacts())
	}

	#[must_use]
	pub fn as_slice(&self) -> &[Contact] {
		&self.contacts
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.contacts.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.contacts.is_empty()
	}

	#[must_use]
	pub fn get(&self, id: ContactId) -> Option<&Contact> {
		self.contacts.iter().find(|contact| contact.id == id)
	}

	/// See [`filter_contacts`].
	#[must_use]
	pub fn filter(&self, term: &str) -> Vec<&Contact> {
		filter_contacts(&self.contacts, term)
	}

	/// The id the next appended contact will receive, or `None` once the id
	/// space is used up.
	#[must_use]
	pub fn next_id(&self) -> Option<ContactId> {
		match self.contacts.iter().map(|contact| contact.id).max() {
			Some(max) => max.checked_add(1),
			None => Some(1),
		}
	}

	/// Append records, assigning each a fresh id regardless of the id it
	/// carried. Returns the assigned ids in insertion order.
	///
	/// Either every record is appended or, when the remaining ids cannot
	/// cover the batch, none is.
	pub fn append_rekeyed(
		&mut self,
		incoming: impl IntoIterator<Item = Contact>,
	) -> Result<Vec<ContactId>, DirectoryError> {
		let incoming: Vec<Contact> = incoming.into_iter().collect();
		let Some(last_offset) = incoming.len().checked_sub(1) else {
			return Ok(Vec::new());
		};
		let first = self.next_id().ok_or(DirectoryError::IdsExhausted)?;
		u32::try_from(last_offset)
			.ok()
			.and_then(|offset| first.checked_add(offset))
			.ok_or(DirectoryError::IdsExhausted)?;

		let mut assigned = Vec::with_capacity(incoming.len());
		for (id, mut contact) in (first..).zip(incoming) {
			contact.id = id;
			assigned.push(id);
			self.contacts.push(contact);
		}
		Ok(assigned)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_term_matches_everything_in_order() {
		let book = ContactBook::seeded();
		let ids: Vec<_> = book.filter("").iter().map(|contact| contact.id).collect();
		assert_eq!(ids, vec![1, 2, 3, 4, 5]);
	}

	#[test]
	fn filter_is_case_insensitive_across_fields() {
		let book = ContactBook::seeded();
		let by_email = book.filter("GREENENERGY");
		assert_eq!(by_email.len(), 1);
		assert_eq!(by_email[0].name, "Emma Johnson");

		let by_phone = book.filter("555 6666");
		assert_eq!(by_phone.len(), 1);
		assert_eq!(by_phone[0].name, "Michael Wilson");
	}

	#[test]
	fn filter_results_are_a_stable_idempotent_subset() {
		let book = ContactBook::seeded();
		for term in ["", "o", "solutions", "+44", "zzz", "1"] {
			let first = book.filter(term);
			let second = book.filter(term);
			assert_eq!(first, second, "filter must be idempotent for {term:?}");

			let positions: Vec<_> = first
				.iter()
				.map(|contact| {
					book.as_slice()
						.iter()
						.position(|candidate| candidate == *contact)
						.expect("result must come from the book")
				})
				.collect();
			assert!(
				positions.windows(2).all(|pair| pair[0] < pair[1]),
				"results for {term:?} must keep insertion order"
			);
		}
	}

	#[test]
	fn duplicate_ids_are_dropped_on_construction() {
		let book = ContactBook::new([
			Contact::new(1, "A", "", "", ""),
			Contact::new(1, "B", "", "", ""),
		]);
		assert_eq!(book.len(), 1);
		assert_eq!(book.as_slice()[0].name, "A");
	}

	#[test]
	fn rekeyed_appends_never_collide() {
		let mut book = ContactBook::seeded();
		let assigned = book
			.append_rekeyed([
				Contact::new(1, "First", "", "", ""),
				Contact::new(1, "Second", "", "", ""),
			])
			.expect("ids available");
		assert_eq!(assigned, vec![6, 7]);
		assert_eq!(book.next_id(), Some(8));
		assert_eq!(book.get(7).map(|contact| contact.name.as_str()), Some("Second"));
	}

	#[test]
	fn empty_book_starts_ids_at_one() {
		assert_eq!(ContactBook::default().next_id(), Some(1));
	}

	#[test]
	fn rekeying_stops_at_the_end_of_the_id_space() {
		let mut book = ContactBook::new([Contact::new(ContactId::MAX - 1, "Last", "", "", "")]);
		assert_eq!(
			book.append_rekeyed([
				Contact::new(0, "A", "", "", ""),
				Contact::new(0, "B", "", "", ""),
			]),
			Err(DirectoryError::IdsExhausted)
		);
		assert_eq!(book.len(), 1);

		let assigned = book
			.append_rekeyed([Contact::new(0, "A", "", "", "")])
			.expect("one id left");
		assert_eq!(assigned, vec![ContactId::MAX]);
		assert_eq!(book.next_id(), None);
		assert_eq!(
			book.append_rekeyed([Contact::new(0, "B", "", "", "")]),
			Err(DirectoryError::IdsExhausted)
		);
		assert_eq!(book.len(), 2);
	}
}
