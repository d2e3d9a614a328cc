//! Display language list reader.
//!
//! A list is an XML document whose root element holds one child per language:
//!
//! ```xml
//! <languages>
//!   <lang code="ar" bidi="true">Arabic</lang>
//!   <lang code="en">English</lang>
//! </languages>
//! ```
//!
//! The child's text is the description. `bidi="true"` marks codes written
//! right to left; any other value, or no attribute, means left to right.

use std::sync::Arc;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// A language code with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayLanguage {
	pub code: String,
	pub description: String,
}

impl DisplayLanguage {
	pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			code: code.into(),
			description: description.into(),
		}
	}
}

/// Which of the two per-locale lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
	/// The short list of commonly used languages.
	Common,
	/// The full list, which also flags bidirectional codes.
	Extended,
}

impl ListKind {
	/// Asset file name for `locale`.
	pub fn file_name(self, locale: &str) -> String {
		match self {
			ListKind::Common => langtag_runtime::common_list_file(locale),
			ListKind::Extended => langtag_runtime::extended_list_file(locale),
		}
	}
}

/// A parsed list: entries in collation order plus the bidi codes.
#[derive(Debug, Clone)]
pub struct LanguageList {
	pub(crate) languages: Arc<[DisplayLanguage]>,
	pub(crate) bidi: FxHashSet<String>,
}

impl LanguageList {
	/// Parses a list document. `asset` names the source in errors.
	///
	/// Entries keep document order; sorting is the caller's concern.
	pub fn parse(xml: &str, asset: &str) -> Result<Self> {
		let xml_err = |source| CatalogError::Xml {
			asset: asset.to_string(),
			source,
		};

		let mut reader = Reader::from_str(xml);
		reader.config_mut().trim_text(true);

		let mut languages = Vec::new();
		let mut bidi = FxHashSet::default();
		let mut depth = 0usize;
		let mut current: Option<(String, String)> = None;

		loop {
			match reader.read_event().map_err(xml_err)? {
				Event::Start(element) => {
					depth += 1;
					if depth == 2 {
						let (code, is_bidi) = entry_attributes(&element, asset, languages.len())?;
						if is_bidi {
							bidi.insert(code.clone());
						}
						current = Some((code, String::new()));
					}
				}
				Event::Empty(element) if depth == 1 => {
					let (code, is_bidi) = entry_attributes(&element, asset, languages.len())?;
					if is_bidi {
						bidi.insert(code.clone());
					}
					languages.push(DisplayLanguage::new(code, ""));
				}
				Event::Text(text) => {
					if let Some((_, description)) = current.as_mut() {
						description.push_str(&text.unescape().map_err(xml_err)?);
					}
				}
				Event::CData(data) => {
					if let Some((_, description)) = current.as_mut() {
						description.push_str(&String::from_utf8_lossy(&data));
					}
				}
				Event::End(_) => {
					if depth == 2 {
						if let Some((code, description)) = current.take() {
							languages.push(DisplayLanguage::new(code, description.trim()));
						}
					}
					depth = depth.saturating_sub(1);
				}
				Event::Eof => break,
				_ => {}
			}
		}

		Ok(Self {
			languages: languages.into(),
			bidi,
		})
	}

	pub fn languages(&self) -> &[DisplayLanguage] {
		&self.languages
	}

	pub fn is_bidi(&self, code: &str) -> bool {
		self.bidi.contains(code)
	}

	pub fn len(&self) -> usize {
		self.languages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.languages.is_empty()
	}
}

/// Reads `code` and `bidi` from entry number `index`.
fn entry_attributes(element: &BytesStart<'_>, asset: &str, index: usize) -> Result<(String, bool)> {
	let attr = |name: &str| -> Result<Option<String>> {
		let value = element
			.try_get_attribute(name)
			.map_err(|e| CatalogError::Xml {
				asset: asset.to_string(),
				source: e.into(),
			})?;
		value
			.map(|a| a.unescape_value().map(|v| v.into_owned()))
			.transpose()
			.map_err(|source| CatalogError::Xml {
				asset: asset.to_string(),
				source,
			})
	};

	let code = attr("code")?.ok_or_else(|| CatalogError::MissingCode {
		asset: asset.to_string(),
		entry: index,
	})?;
	let bidi = attr("bidi")?.as_deref() == Some("true");
	Ok((code, bidi))
}
