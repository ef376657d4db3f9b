use super::Contact;

/// Contacts present when the application starts.
#[must_use]
pub fn seed_contacts() -> Vec<Contact> {
	vec![
		Contact::new(
			1,
			"John Smith",
			"Tech Solutions Ltd",
			"john@techsolutions.com",
			"+44 20 1234 5678",
		),
		Contact::new(
			2,
			"Emma Johnson",
			"Green Energy PLC",
			"emma@greenenergy.co.uk",
			"+44 161 876 5432",
		),
		Contact::new(
			3,
			"David Brown",
			"Brown & Co",
			"david@brownco.com",
			"+44 121 111 2222",
		),
		Contact::new(
			4,
			"Sarah Taylor",
			"Taylor Logistics",
			"sarah@taylorlogistics.co.uk",
			"+44 151 333 4444",
		),
		Contact::new(
			5,
			"Michael Wilson",
			"Wilson IT Solutions",
			"michael@wilsonit.com",
			"+44 1223 555 6666",
		),
	]
}
