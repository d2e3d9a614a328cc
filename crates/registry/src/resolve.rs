//! Tag decomposition and validation.
//!
//! A tag is split on `-` into at most three components, which are matched
//! positionally:
//!
//! * `language`
//! * `language-REGION`, `language-Script` or `language-variant`
//! * `language-Script-REGION`, `language-Script-variant` or `language-REGION-variant`
//!
//! Spelling out a language's suppressed script (`en-Latn`) is rejected, and a
//! variant only follows a language it is registered for. Anything that does
//! not fit resolves to `None`; resolution never fails.

use std::fmt;

use crate::subtag::{LanguageSubtag, RegionSubtag, ScriptSubtag, VariantSubtag, titlecase};
use crate::tables::SubtagTables;

/// What follows the language in a resolved tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagTail<'a> {
	None,
	Region(&'a RegionSubtag),
	Script(&'a ScriptSubtag),
	Variant(&'a VariantSubtag),
	ScriptRegion(&'a ScriptSubtag, &'a RegionSubtag),
	ScriptVariant(&'a ScriptSubtag, &'a VariantSubtag),
	RegionVariant(&'a RegionSubtag, &'a VariantSubtag),
}

/// A tag whose components were all found and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTag<'a> {
	pub language: &'a LanguageSubtag,
	pub tail: TagTail<'a>,
}

impl ResolvedTag<'_> {
	/// Canonical spelling, e.g. `zh-Hant-TW`.
	pub fn canonical(&self) -> String {
		self.to_string()
	}

	/// Display description, e.g. `Spanish (Mexico)`.
	pub fn description(&self) -> String {
		let lang = &self.language.description;
		match self.tail {
			TagTail::None => lang.clone(),
			TagTail::Region(r) => format!("{lang} ({})", r.description),
			TagTail::Script(s) => format!("{lang} ({})", s.description),
			TagTail::Variant(v) => format!("{lang} ({})", v.description),
			TagTail::ScriptRegion(s, r) => format!("{lang} ({}, {})", s.description, r.description),
			TagTail::ScriptVariant(s, v) => format!("{lang} ({}, {})", s.description, v.description),
			TagTail::RegionVariant(r, v) => format!("{lang} ({} - {})", r.description, v.description),
		}
	}
}

impl fmt::Display for ResolvedTag<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.language.code)?;
		match self.tail {
			TagTail::None => Ok(()),
			TagTail::Region(r) => write!(f, "-{}", r.code),
			TagTail::Script(s) => write!(f, "-{}", s.code),
			TagTail::Variant(v) => write!(f, "-{}", v.code),
			TagTail::ScriptRegion(s, r) => write!(f, "-{}-{}", s.code, r.code),
			TagTail::ScriptVariant(s, v) => write!(f, "-{}-{}", s.code, v.code),
			TagTail::RegionVariant(r, v) => write!(f, "-{}-{}", r.code, v.code),
		}
	}
}

impl SubtagTables {
	/// Decomposes and validates `tag`.
	pub fn resolve(&self, tag: &str) -> Option<ResolvedTag<'_>> {
		let parts: Vec<&str> = tag.split('-').collect();
		let (first, rest) = parts.split_first()?;
		let language = self.language(first)?;

		let tail = match rest {
			[] => TagTail::None,
			[second] => self.resolve_second(language, second)?,
			[second, third] => self.resolve_pair(language, second, third)?,
			_ => return None,
		};

		Some(ResolvedTag { language, tail })
	}

	/// Human-readable description of `tag`, e.g. `Chinese (Han [Traditional
	/// variant], Taiwan, Province of China)` for `zh-Hant-TW`.
	pub fn describe(&self, tag: &str) -> Option<String> {
		self.resolve(tag).map(|t| t.description())
	}

	/// Canonical spelling of `tag`, e.g. `es-MX` for `ES-mx`.
	pub fn normalize(&self, tag: &str) -> Option<String> {
		self.resolve(tag).map(|t| t.canonical())
	}

	/// `language-X`: region, then script, then variant.
	fn resolve_second<'a>(&'a self, language: &LanguageSubtag, second: &str) -> Option<TagTail<'a>> {
		match second.chars().count() {
			2 | 3 => {
				if let Some(region) = self.region(second) {
					return Some(TagTail::Region(region));
				}
			}
			4 => {
				let script = titlecase(second);
				if language.suppresses(&script) {
					return None;
				}
				if let Some(script) = self.script(&script) {
					return Some(TagTail::Script(script));
				}
			}
			_ => {}
		}

		self.variant_for(language, second).map(TagTail::Variant)
	}

	/// `language-X-Y`: script followed by region or variant, or region
	/// followed by variant.
	fn resolve_pair<'a>(&'a self, language: &LanguageSubtag, second: &str, third: &str) -> Option<TagTail<'a>> {
		match second.chars().count() {
			4 => {
				let script = titlecase(second);
				if language.suppresses(&script) {
					return None;
				}
				let script = self.script(&script)?;
				if let Some(region) = self.region(third) {
					return Some(TagTail::ScriptRegion(script, region));
				}
				self.variant_for(language, third)
					.map(|variant| TagTail::ScriptVariant(script, variant))
			}
			2 | 3 => {
				let region = self.region(second)?;
				self.variant_for(language, third)
					.map(|variant| TagTail::RegionVariant(region, variant))
			}
			_ => None,
		}
	}

	fn variant_for(&self, language: &LanguageSubtag, code: &str) -> Option<&VariantSubtag> {
		self.variant(code).filter(|v| v.allows(&language.code))
	}
}
