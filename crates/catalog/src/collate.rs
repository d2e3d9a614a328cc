//! Locale-aware ordering of display names.
//!
//! Names compare by a primary key: canonical decomposition with combining
//! marks dropped, then lowercased. "Árabe" therefore sorts with "Arabe", not
//! after "Zulu". Ties fall back to the raw text and then the code, so the
//! order is total and stable across runs.
//!
//! Spanish locales keep `ñ` as its own letter between `n` and `o`.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::list::DisplayLanguage;

/// Sorts above every letter at the same position.
const AFTER_BASE_LETTER: char = '\u{10FFFF}';

/// Ordering rules for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collator {
	/// Accent- and case-insensitive primary ordering.
	Root,
	/// Root ordering with `ñ` sorted after `n`.
	Spanish,
}

impl Collator {
	pub fn for_locale(locale: &str) -> Self {
		let language = locale.split(['-', '_']).next().unwrap_or(locale);
		if language.eq_ignore_ascii_case("es") {
			Collator::Spanish
		} else {
			Collator::Root
		}
	}

	/// Primary collation key for `text`.
	pub fn key(self, text: &str) -> String {
		let mut key = String::with_capacity(text.len());
		for c in text.chars() {
			if self == Collator::Spanish && matches!(c, 'ñ' | 'Ñ') {
				key.push('n');
				key.push(AFTER_BASE_LETTER);
				continue;
			}
			key.extend(
				c.to_string()
					.nfd()
					.filter(|c| !is_combining_mark(*c))
					.flat_map(char::to_lowercase),
			);
		}
		key
	}

	pub fn compare(self, a: &str, b: &str) -> Ordering {
		self.key(a).cmp(&self.key(b)).then_with(|| a.cmp(b))
	}

	/// Sorts `languages` by description.
	pub fn sort(self, languages: &mut [DisplayLanguage]) {
		languages.sort_by_cached_key(|l| (self.key(&l.description), l.description.clone(), l.code.clone()));
	}
}
