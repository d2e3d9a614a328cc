//! Embedded runtime assets.
//!
//! The registry text and the per-locale display lists are compiled into the
//! binary from `assets/`. Files found on disk through the configured search
//! paths take precedence over these (see `langtag-config`).

use include_dir::{Dir, include_dir};

/// Embedded files from `assets/`.
static ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// File name of the IANA Language Subtag Registry asset.
pub const REGISTRY_FILE: &str = "language-subtag-registry.txt";

/// Returns the file name of the common display list for `locale`.
pub fn common_list_file(locale: &str) -> String {
	format!("languageList_{locale}.xml")
}

/// Returns the file name of the extended display list for `locale`.
pub fn extended_list_file(locale: &str) -> String {
	format!("extendedLanguageList_{locale}.xml")
}

/// Returns the embedded asset with the given file name, if any.
pub fn get(name: &str) -> Option<&'static str> {
	ASSETS.get_file(name).and_then(|f| f.contents_utf8())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn registry_is_embedded() {
		let text = get(REGISTRY_FILE).expect("registry asset");
		assert!(text.starts_with("File-Date:"));
		assert_eq!(text.matches("File-Date:").count(), 1);
	}

	#[test]
	fn every_record_type_present() {
		let text = get(REGISTRY_FILE).unwrap();
		for ty in ["language", "region", "script", "variant"] {
			assert!(
				text.contains(&format!("Type: {ty}\n")),
				"missing records of type {ty}"
			);
		}
	}

	#[test]
	fn locale_lists_embedded() {
		for locale in ["en", "es"] {
			assert!(get(&common_list_file(locale)).is_some());
			assert!(get(&extended_list_file(locale)).is_some());
		}
		assert!(get(&common_list_file("xx")).is_none());
	}
}
