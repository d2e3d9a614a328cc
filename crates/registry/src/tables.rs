//! Subtag tables built from the registry.

use langtag_config::AssetLocator;
use rustc_hash::FxHashMap;

use crate::error::{RegistryError, Result};
use crate::record::{RegistryRecord, parse_records};
use crate::subtag::{LanguageSubtag, RegionSubtag, ScriptSubtag, Subtag, VariantSubtag, titlecase};

/// The four typed subtag tables plus the registry's `File-Date`.
///
/// Built once and read-only afterwards. Lookups canonicalize the case of
/// their argument, so `language("EN")` finds `en`.
#[derive(Debug, Default)]
pub struct SubtagTables {
	languages: FxHashMap<String, LanguageSubtag>,
	regions: FxHashMap<String, RegionSubtag>,
	scripts: FxHashMap<String, ScriptSubtag>,
	variants: FxHashMap<String, VariantSubtag>,
	file_date: Option<String>,
}

impl SubtagTables {
	/// Loads the registry asset through `locator`.
	pub fn load(locator: &AssetLocator) -> Result<Self> {
		let asset = locator.locate(langtag_runtime::REGISTRY_FILE)?;
		tracing::debug!(origin = ?asset.origin, "loading subtag registry");
		Self::parse(&asset.contents)
	}

	/// Builds the tables from the registry compiled into the binary.
	pub fn embedded() -> Result<Self> {
		Self::load(&AssetLocator::embedded_only())
	}

	/// Builds the tables from registry text.
	pub fn parse(text: &str) -> Result<Self> {
		Self::from_records(&parse_records(text))
	}

	/// Classifies `records` into tables.
	///
	/// A record without `Type` is accepted only as the header (it carries
	/// `File-Date`); any other untyped record means the data is corrupt.
	pub fn from_records(records: &[RegistryRecord]) -> Result<Self> {
		let mut tables = Self::default();
		let mut skipped = 0usize;

		for (index, record) in records.iter().enumerate() {
			if let Some(date) = record.get("File-Date") {
				if let Some(first) = tables.file_date.as_deref() {
					tracing::warn!(first, ignored = date, "registry has more than one File-Date");
				} else {
					tables.file_date = Some(date.to_string());
				}
			}

			if record.kind().is_none() {
				if record.get("File-Date").is_some() {
					continue;
				}
				return Err(RegistryError::Format {
					record: index,
					subtag: record.subtag().map(String::from),
					field: "Type",
				});
			}

			match Subtag::from_record(index, record)? {
				Some(subtag) => tables.insert(subtag),
				None => skipped += 1,
			}
		}

		tracing::debug!(
			languages = tables.languages.len(),
			regions = tables.regions.len(),
			scripts = tables.scripts.len(),
			variants = tables.variants.len(),
			skipped,
			"built subtag tables"
		);

		Ok(tables)
	}

	/// Adds a subtag, replacing any entry with the same code.
	pub fn insert(&mut self, subtag: Subtag) {
		let kind = subtag.kind();
		let code = subtag.code().to_string();
		let replaced = match subtag {
			Subtag::Language(l) => self.languages.insert(code.clone(), l).is_some(),
			Subtag::Region(r) => self.regions.insert(code.clone(), r).is_some(),
			Subtag::Script(s) => self.scripts.insert(code.clone(), s).is_some(),
			Subtag::Variant(v) => self.variants.insert(code.clone(), v).is_some(),
		};
		if replaced {
			tracing::warn!(kind = kind.as_str(), code = %code, "duplicate subtag replaced");
		}
	}

	/// The registry's `File-Date`, if present.
	pub fn file_date(&self) -> Option<&str> {
		self.file_date.as_deref()
	}

	pub fn language(&self, code: &str) -> Option<&LanguageSubtag> {
		self.languages.get(&code.to_ascii_lowercase())
	}

	pub fn region(&self, code: &str) -> Option<&RegionSubtag> {
		self.regions.get(&code.to_ascii_uppercase())
	}

	pub fn script(&self, code: &str) -> Option<&ScriptSubtag> {
		self.scripts.get(&titlecase(code))
	}

	pub fn variant(&self, code: &str) -> Option<&VariantSubtag> {
		self.variants.get(&code.to_ascii_lowercase())
	}

	pub fn languages(&self) -> impl Iterator<Item = &LanguageSubtag> {
		self.languages.values()
	}

	pub fn regions(&self) -> impl Iterator<Item = &RegionSubtag> {
		self.regions.values()
	}

	pub fn scripts(&self) -> impl Iterator<Item = &ScriptSubtag> {
		self.scripts.values()
	}

	pub fn variants(&self) -> impl Iterator<Item = &VariantSubtag> {
		self.variants.values()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	const FIXTURE: &str = "\
File-Date: 2025-08-25
%%
Type: language
Subtag: en
Description: English
Suppress-Script: Latn
%%
Type: language
Subtag: qaa..qtz
Description: Private use
%%
Type: region
Subtag: US
Description: United States
%%
Type: script
Subtag: Latn
Description: Latin
%%
Type: variant
Subtag: oxendict
Description: Oxford English Dictionary spelling
Prefix: en
%%
Type: redundant
Tag: en-GB-oed
Description: English, Oxford English Dictionary spelling
";

	#[test]
	fn classifies_records() {
		let tables = SubtagTables::parse(FIXTURE).unwrap();

		assert_eq!(tables.file_date(), Some("2025-08-25"));
		assert_eq!(tables.languages().count(), 1);
		assert_eq!(tables.regions().count(), 1);
		assert_eq!(tables.scripts().count(), 1);
		assert_eq!(tables.variants().count(), 1);

		let en = tables.language("EN").unwrap();
		assert_eq!(en.description, "English");
		assert_eq!(en.suppressed_script.as_deref(), Some("Latn"));
		assert_eq!(tables.region("us").unwrap().description, "United States");
		assert_eq!(tables.script("LATN").unwrap().code, "Latn");
		assert_eq!(tables.variant("OXENDICT").unwrap().prefix, "en");
		assert!(tables.language("qaa..qtz").is_none());
	}

	#[test]
	fn untyped_record_after_header_is_corrupt() {
		let text = "File-Date: 2025-08-25\n%%\nSubtag: xx\nDescription: Nothing\n";
		let err = SubtagTables::parse(text).unwrap_err();
		assert!(matches!(err, RegistryError::Format { record: 1, field: "Type", .. }));
	}

	#[test]
	fn missing_description_fails_fast() {
		let text = "File-Date: 2025-08-25\n%%\nType: language\nSubtag: en\n%%\nType: region\nSubtag: US\nDescription: United States\n";
		let err = SubtagTables::parse(text).unwrap_err();
		assert!(matches!(err, RegistryError::Format { record: 1, field: "Description", .. }));
	}

	#[test]
	fn duplicates_overwrite() {
		let text = "\
Type: region
Subtag: DE
Description: West Germany
%%
Type: region
Subtag: DE
Description: Germany
";
		let tables = SubtagTables::parse(text).unwrap();
		assert_eq!(tables.regions().count(), 1);
		assert_eq!(tables.region("DE").unwrap().description, "Germany");
		assert_eq!(tables.file_date(), None);
	}

	#[test]
	fn first_file_date_wins() {
		let text = "File-Date: 2025-01-01\n%%\nFile-Date: 2024-01-01\n";
		let tables = SubtagTables::parse(text).unwrap();
		assert_eq!(tables.file_date(), Some("2025-01-01"));
	}

	#[test]
	fn embedded_registry_builds() {
		let tables = SubtagTables::embedded().unwrap();
		assert!(tables.file_date().is_some());
		assert!(tables.language("zh").is_some());
		assert!(tables.region("419").is_some());
		assert!(tables.script("Hant").is_some());
		assert!(tables.variant("rozaj").is_some());
	}
}
