#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Per-locale display language lists.
//!
//! A [`Catalog`] pairs the subtag registry with per-locale XML lists of
//! language names. Lists come in two kinds (see [`ListKind`]): a short
//! common list and an extended list that also flags right-to-left codes.
//! Each is loaded on first use, sorted for its locale, and cached.
//!
//! ```
//! use langtag_catalog::Catalog;
//!
//! let catalog = Catalog::embedded()?;
//! let english = catalog.languages("en")?;
//! assert!(english.iter().any(|l| l.code == "es-MX" && l.description == "Spanish (Mexico)"));
//!
//! let hit = catalog.language("ES-mx", "es")?.unwrap();
//! assert_eq!(hit.description, "Español (México)");
//! assert!(catalog.is_bidi("ar")?);
//! # Ok::<(), langtag_catalog::CatalogError>(())
//! ```

mod catalog;
pub mod collate;
pub mod error;
pub mod list;

pub use catalog::Catalog;
pub use collate::Collator;
pub use error::{CatalogError, Result};
pub use list::{DisplayLanguage, LanguageList, ListKind};

/// Language code prefixes written with CJK-style scripts or line breaking.
pub const CJK_PREFIXES: &[&str] = &["zh", "ja", "ko", "vi", "ain", "aib"];

/// Whether `code` starts with one of [`CJK_PREFIXES`], ignoring ASCII case.
///
/// Purely lexical: `code` need not be a valid tag.
pub fn is_cjk(code: &str) -> bool {
	CJK_PREFIXES.iter().any(|prefix| {
		code.get(..prefix.len())
			.is_some_and(|head| head.eq_ignore_ascii_case(prefix))
	})
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::is_cjk;

	#[rstest]
	#[case("zh", true)]
	#[case("zh-Hant-TW", true)]
	#[case("ja-JP", true)]
	#[case("KO", true)]
	#[case("vi-VN", true)]
	#[case("ain", true)]
	#[case("aib", true)]
	#[case("en-US", false)]
	#[case("ai", false)]
	#[case("", false)]
	#[case("z", false)]
	#[case("é", false)]
	fn cjk_prefixes(#[case] code: &str, #[case] expected: bool) {
		assert_eq!(is_cjk(code), expected);
	}
}
