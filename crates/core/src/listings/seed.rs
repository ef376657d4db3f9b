use super::{Listing, ListingKind};

/// Districts offered by the location filter, including ones without listings.
pub const KNOWN_LOCATIONS: [&str; 5] = ["Stadtmitte", "Altstadt", "Westend", "Nordend", "Ostend"];

const IMAGE_HOST: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com";

#[allow(clippy::too_many_arguments)]
fn listing(
	id: u32,
	title: &str,
	price: u32,
	location: &str,
	kind: ListingKind,
	is_new: bool,
	image: String,
	tags: &[&str],
) -> Listing {
	Listing {
		id,
		title: title.to_string(),
		price,
		location: location.to_string(),
		kind,
		is_new,
		image,
		tags: tags.iter().map(|tag| tag.to_string()).collect(),
	}
}

/// The fixed set of listings shown by the browser.
#[must_use]
pub fn seed_listings() -> Vec<Listing> {
	vec![
		listing(
			1,
			"Modernes Wohnzimmer mit Kunstgalerie",
			1500,
			"Stadtmitte",
			ListingKind::Luxury,
			true,
			"https://drive.google.com/file/d/1U8Vyz0dvbLz-NFcq2ntqItXEUn0tKsDE/view?usp=drive_link"
				.to_string(),
			&[
				"Große Fenster",
				"Kunstgalerie",
				"Graues Sofa",
				"Holzmöbel",
				"Winterblick",
			],
		),
		listing(
			2,
			"Stilvolles Schlafzimmer im Industrial-Chic",
			1300,
			"Altstadt",
			ListingKind::Regular,
			true,
			format!("{IMAGE_HOST}/modern-wohnen-teaser-6OkpXT8Isi5BoFuLPjMpVtv9iC6o3G.jpg"),
			&[
				"Ziegelwand",
				"Stehlampe",
				"Metallregal",
				"Botanische Drucke",
				"Grau-Weiß-Farbschema",
			],
		),
		listing(
			3,
			"Helles Wohnzimmer mit pastellblauen Wänden",
			1100,
			"Westend",
			ListingKind::Regular,
			false,
			format!(
				"{IMAGE_HOST}/wohnstil-fritz-hansen-jpg--72140--hamhBu3MB6DSvpK5PKsbmwZwCLczOR.jpg"
			),
			&[
				"Pastellblaue Wände",
				"Weißes Sofa",
				"Holzboden",
				"Vintage-Elemente",
			],
		),
		listing(
			4,
			"Modernes Esszimmer mit blauer Akzentwand",
			1200,
			"Nordend",
			ListingKind::Regular,
			false,
			format!(
				"{IMAGE_HOST}/schoener-wohnen-kollektion-esszimmer-jpg--71457--Ufohj0sxEE9w7HavXuiAMcdDILM7Zo.jpg"
			),
			&[
				"Blaue Akzentwand",
				"Holzesstisch",
				"Beleuchtete Regale",
				"Moderne Einrichtung",
			],
		),
	]
}
