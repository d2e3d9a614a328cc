//! Typed subtags and record classification.
//!
//! A record's `Type` is inspected exactly once, in [`Subtag::from_record`];
//! everything downstream works with the closed [`Subtag`] union.

use serde::Serialize;

use crate::error::{RegistryError, Result};
use crate::record::{FIELD_SEPARATOR, RegistryRecord};

/// Marker the registry uses for reserved private-use ranges.
const PRIVATE_USE: &str = "Private use";

/// The registry record types that yield a subtag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubtagKind {
	Language,
	Region,
	Script,
	Variant,
}

impl SubtagKind {
	/// Maps a registry `Type` value. Types such as `extlang`, `grandfathered`
	/// and `redundant` have no kind.
	pub fn from_type(ty: &str) -> Option<Self> {
		match ty {
			"language" => Some(Self::Language),
			"region" => Some(Self::Region),
			"script" => Some(Self::Script),
			"variant" => Some(Self::Variant),
			_ => None,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Language => "language",
			Self::Region => "region",
			Self::Script => "script",
			Self::Variant => "variant",
		}
	}

	/// Whether records of this kind drop "Private use" entries.
	fn excludes_private_use(self) -> bool {
		matches!(self, Self::Language | Self::Region)
	}
}

/// A primary language subtag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageSubtag {
	/// Lowercase code, e.g. `en`.
	pub code: String,
	/// Display name; the first registered alternative.
	pub description: String,
	/// Script that is implied and must not be written out, e.g. `Latn` for `en`.
	pub suppressed_script: Option<String>,
}

impl LanguageSubtag {
	/// Whether `script` (titlecased) is this language's suppressed script.
	pub fn suppresses(&self, script: &str) -> bool {
		self.suppressed_script.as_deref() == Some(script)
	}
}

/// A region subtag: ISO 3166-1 alpha-2 or UN M.49 numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionSubtag {
	/// Uppercase code, e.g. `MX` or `419`.
	pub code: String,
	pub description: String,
}

/// A script subtag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptSubtag {
	/// Titlecase code, e.g. `Hant`.
	pub code: String,
	/// Description with parentheses replaced by square brackets.
	pub description: String,
}

/// A variant subtag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantSubtag {
	/// Lowercase code, e.g. `rozaj`.
	pub code: String,
	/// Description with parentheses replaced by square brackets.
	pub description: String,
	/// Registered prefix; several are joined with `" | "`. Empty when none.
	pub prefix: String,
}

impl VariantSubtag {
	/// Iterates the registered prefixes.
	pub fn prefixes(&self) -> impl Iterator<Item = &str> {
		self.prefix
			.split(FIELD_SEPARATOR)
			.map(str::trim)
			.filter(|p| !p.is_empty())
	}

	/// Whether this variant may follow `language` (a lowercase code).
	///
	/// Each `Prefix` is matched on its own rather than the joined field, so
	/// `ekavsk` (`sr`, `sr-Latn`, `sr-Cyrl`) follows `sr`. A prefix longer
	/// than a bare language, like `ja-Latn` for `hepburn`, never matches.
	pub fn allows(&self, language: &str) -> bool {
		self.prefixes().any(|p| p == language)
	}
}

/// A classified registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subtag {
	Language(LanguageSubtag),
	Region(RegionSubtag),
	Script(ScriptSubtag),
	Variant(VariantSubtag),
}

impl Subtag {
	/// Classifies record number `index`.
	///
	/// Returns `Ok(None)` for records whose type yields no subtag and for
	/// private-use languages and regions. A classified record without a
	/// `Description` or `Subtag` is a [`RegistryError::Format`].
	pub fn from_record(index: usize, record: &RegistryRecord) -> Result<Option<Self>> {
		let Some(kind) = record.kind().and_then(SubtagKind::from_type) else {
			return Ok(None);
		};

		let missing = |field| RegistryError::Format {
			record: index,
			subtag: record.subtag().map(String::from),
			field,
		};

		let description = record.description().ok_or_else(|| missing("Description"))?;
		if kind.excludes_private_use() && description.contains(PRIVATE_USE) {
			return Ok(None);
		}
		let code = record.subtag().ok_or_else(|| missing("Subtag"))?;

		let subtag = match kind {
			SubtagKind::Language => Subtag::Language(LanguageSubtag {
				code: code.to_ascii_lowercase(),
				description: language_description(code, description),
				suppressed_script: record.get("Suppress-Script").map(titlecase),
			}),
			SubtagKind::Region => Subtag::Region(RegionSubtag {
				code: code.to_ascii_uppercase(),
				description: description.trim().to_string(),
			}),
			SubtagKind::Script => Subtag::Script(ScriptSubtag {
				code: titlecase(code),
				description: bracketed(description),
			}),
			SubtagKind::Variant => Subtag::Variant(VariantSubtag {
				code: code.to_ascii_lowercase(),
				description: bracketed(description),
				prefix: record.get("Prefix").unwrap_or_default().to_string(),
			}),
		};

		Ok(Some(subtag))
	}

	pub fn kind(&self) -> SubtagKind {
		match self {
			Subtag::Language(_) => SubtagKind::Language,
			Subtag::Region(_) => SubtagKind::Region,
			Subtag::Script(_) => SubtagKind::Script,
			Subtag::Variant(_) => SubtagKind::Variant,
		}
	}

	pub fn code(&self) -> &str {
		match self {
			Subtag::Language(l) => &l.code,
			Subtag::Region(r) => &r.code,
			Subtag::Script(s) => &s.code,
			Subtag::Variant(v) => &v.code,
		}
	}
}

/// Display name for a language: the first alternative, without dated
/// annotations such as `(1453-)`. `el` is special-cased to "Greek".
fn language_description(code: &str, description: &str) -> String {
	if code.eq_ignore_ascii_case("el") {
		return "Greek".to_string();
	}
	let first = description.split('|').next().unwrap_or(description);
	strip_dated_annotations(first)
}

/// Removes parenthesized groups that contain a digit, e.g. "Old English (ca. 450-1100)".
fn strip_dated_annotations(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	let mut rest = text;

	while let Some(open) = rest.find('(') {
		let Some(close) = rest[open..].find(')').map(|c| open + c) else {
			break;
		};
		let group = &rest[open + 1..close];
		if group.bytes().any(|b| b.is_ascii_digit()) {
			out.push_str(rest[..open].trim_end());
		} else {
			out.push_str(&rest[..=close]);
		}
		rest = &rest[close + 1..];
	}
	out.push_str(rest);

	out.trim().to_string()
}

fn bracketed(description: &str) -> String {
	description.replace('(', "[").replace(')', "]").trim().to_string()
}

/// Uppercases the first character and lowercases the rest.
pub(crate) fn titlecase(text: &str) -> String {
	let mut chars = text.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn record(lines: &[&str]) -> RegistryRecord {
		RegistryRecord::from_lines(lines.iter().copied())
	}

	#[test]
	fn language_takes_first_alternative() {
		let subtag = Subtag::from_record(
			0,
			&record(&[
				"Type: language",
				"Subtag: es",
				"Description: Spanish",
				"Description: Castilian",
				"Suppress-Script: Latn",
			]),
		)
		.unwrap();

		assert_eq!(
			subtag,
			Some(Subtag::Language(LanguageSubtag {
				code: "es".into(),
				description: "Spanish".into(),
				suppressed_script: Some("Latn".into()),
			}))
		);
	}

	#[test]
	fn greek_is_renamed() {
		let Some(Subtag::Language(el)) = Subtag::from_record(
			0,
			&record(&["Type: language", "Subtag: el", "Description: Modern Greek (1453-)"]),
		)
		.unwrap() else {
			panic!("expected a language");
		};
		assert_eq!(el.description, "Greek");
	}

	#[test]
	fn dated_annotations_are_stripped() {
		assert_eq!(strip_dated_annotations("Old English (ca. 450-1100)"), "Old English");
		assert_eq!(strip_dated_annotations("Middle English (1100-1500)"), "Middle English");
		assert_eq!(strip_dated_annotations("Ainu (Japan)"), "Ainu (Japan)");
		assert_eq!(strip_dated_annotations("Broken (paren"), "Broken (paren");
		assert_eq!(
			strip_dated_annotations("A (1000-) and B (Japan)"),
			"A and B (Japan)"
		);
	}

	#[test]
	fn private_use_filter_is_limited_to_languages_and_regions() {
		let language = record(&["Type: language", "Subtag: qaa..qtz", "Description: Private use"]);
		let region = record(&["Type: region", "Subtag: AA", "Description: Private use"]);
		let script = record(&["Type: script", "Subtag: Qaaa..Qabx", "Description: Private use"]);

		assert_eq!(Subtag::from_record(0, &language).unwrap(), None);
		assert_eq!(Subtag::from_record(1, &region).unwrap(), None);
		assert!(matches!(
			Subtag::from_record(2, &script).unwrap(),
			Some(Subtag::Script(_))
		));
	}

	#[test]
	fn script_and_variant_descriptions_use_brackets() {
		let Some(Subtag::Script(hant)) = Subtag::from_record(
			0,
			&record(&["Type: script", "Subtag: hant", "Description: Han (Traditional variant)"]),
		)
		.unwrap() else {
			panic!("expected a script");
		};
		assert_eq!(hant.code, "Hant");
		assert_eq!(hant.description, "Han [Traditional variant]");
	}

	#[test]
	fn variant_prefixes() {
		let Some(Subtag::Variant(ekavsk)) = Subtag::from_record(
			0,
			&record(&[
				"Type: variant",
				"Subtag: ekavsk",
				"Description: Serbian with Ekavian pronunciation",
				"Prefix: sr",
				"Prefix: sr-Latn",
				"Prefix: sr-Cyrl",
			]),
		)
		.unwrap() else {
			panic!("expected a variant");
		};
		assert_eq!(ekavsk.prefix, "sr | sr-Latn | sr-Cyrl");
		assert_eq!(ekavsk.prefixes().collect::<Vec<_>>(), vec!["sr", "sr-Latn", "sr-Cyrl"]);
		assert!(ekavsk.allows("sr"));
		assert!(!ekavsk.allows("hr"));

		let Some(Subtag::Variant(fonipa)) = Subtag::from_record(
			0,
			&record(&["Type: variant", "Subtag: fonipa", "Description: International Phonetic Alphabet"]),
		)
		.unwrap() else {
			panic!("expected a variant");
		};
		assert_eq!(fonipa.prefix, "");
		assert!(!fonipa.allows("en"));
	}

	#[test]
	fn missing_fields_are_format_errors() {
		let err = Subtag::from_record(7, &record(&["Type: region", "Subtag: US"])).unwrap_err();
		assert!(matches!(
			err,
			RegistryError::Format { record: 7, field: "Description", ref subtag } if subtag.as_deref() == Some("US")
		));
		assert_eq!(
			err.to_string(),
			"malformed registry record #7 (US): missing 'Description'"
		);

		let err = Subtag::from_record(3, &record(&["Type: script", "Description: Latin"])).unwrap_err();
		assert!(matches!(err, RegistryError::Format { field: "Subtag", subtag: None, .. }));
	}

	#[test]
	fn unclassified_types_yield_nothing() {
		let extlang = record(&["Type: extlang", "Subtag: cmn", "Description: Mandarin Chinese"]);
		let grandfathered = record(&["Type: grandfathered", "Tag: i-klingon"]);
		assert_eq!(Subtag::from_record(0, &extlang).unwrap(), None);
		assert_eq!(Subtag::from_record(0, &grandfathered).unwrap(), None);
	}

	#[test]
	fn titlecase_handles_any_case() {
		assert_eq!(titlecase("HANT"), "Hant");
		assert_eq!(titlecase("latn"), "Latn");
		assert_eq!(titlecase(""), "");
	}
}
