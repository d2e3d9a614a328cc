//! The per-locale display catalog.

use std::sync::Arc;

use langtag_config::{AssetLocator, Config, DEFAULT_LOCALE, is_valid_locale};
use langtag_registry::SubtagTables;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::collate::Collator;
use crate::error::{CatalogError, Result};
use crate::list::{DisplayLanguage, LanguageList, ListKind};

type ListSlot = Arc<OnceCell<Arc<LanguageList>>>;

/// Display language lists for any locale, plus tag description through the
/// subtag registry.
///
/// Lists are loaded on first request and cached for the catalog's lifetime.
/// Concurrent first requests for the same list load it once; a failed load
/// is not cached, so a later request tries again.
#[derive(Debug)]
pub struct Catalog {
	tables: Arc<SubtagTables>,
	locator: AssetLocator,
	default_locale: String,
	lists: Mutex<FxHashMap<(ListKind, String), ListSlot>>,
}

impl Catalog {
	pub fn new(tables: Arc<SubtagTables>, locator: AssetLocator) -> Self {
		Self {
			tables,
			locator,
			default_locale: DEFAULT_LOCALE.to_string(),
			lists: Mutex::new(FxHashMap::default()),
		}
	}

	/// Sets the locale [`is_bidi`](Self::is_bidi) consults.
	pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
		self.default_locale = locale.into();
		self
	}

	/// Builds a catalog from configuration, loading the registry eagerly.
	pub fn from_config(config: &Config) -> Result<Self> {
		let locator = config.locator();
		let tables = SubtagTables::load(&locator)?;
		Ok(Self::new(Arc::new(tables), locator).with_default_locale(config.default_locale()))
	}

	/// A catalog that reads only the assets compiled into the binary.
	pub fn embedded() -> Result<Self> {
		let tables = SubtagTables::embedded()?;
		Ok(Self::new(Arc::new(tables), AssetLocator::embedded_only()))
	}

	pub fn registry(&self) -> &SubtagTables {
		&self.tables
	}

	pub fn default_locale(&self) -> &str {
		&self.default_locale
	}

	/// English description of `tag`, or `None` if it is not a valid tag.
	pub fn describe_tag(&self, tag: &str) -> Option<String> {
		self.tables.describe(tag)
	}

	/// Canonical casing of `tag`, or `None` if it is not a valid tag.
	pub fn normalize_tag(&self, tag: &str) -> Option<String> {
		self.tables.normalize(tag)
	}

	/// Every language in `locale`'s extended list, in collation order.
	pub fn languages(&self, locale: &str) -> Result<Arc<[DisplayLanguage]>> {
		Ok(self.list(ListKind::Extended, locale)?.languages.clone())
	}

	/// The commonly used languages for `locale`, in collation order.
	pub fn common_languages(&self, locale: &str) -> Result<Arc<[DisplayLanguage]>> {
		Ok(self.list(ListKind::Common, locale)?.languages.clone())
	}

	/// Looks `code` up in `locale`'s extended list.
	///
	/// The code is normalized first. A valid tag missing from the list gets
	/// its English registry description. Returns `Ok(None)` for codes that
	/// do not resolve; a missing locale is an error either way.
	pub fn language(&self, code: &str, locale: &str) -> Result<Option<DisplayLanguage>> {
		let list = self.list(ListKind::Extended, locale)?;
		let Some(resolved) = self.tables.resolve(code) else {
			return Ok(None);
		};
		let canonical = resolved.canonical();
		if let Some(hit) = list.languages().iter().find(|l| l.code == canonical) {
			return Ok(Some(hit.clone()));
		}
		tracing::trace!(code = %canonical, locale, "not in display list, using registry description");
		Ok(Some(DisplayLanguage::new(canonical, resolved.description())))
	}

	/// Whether `code` is marked right-to-left in the default locale's list.
	pub fn is_bidi(&self, code: &str) -> Result<bool> {
		let list = self.list(ListKind::Extended, &self.default_locale)?;
		Ok(list.is_bidi(code))
	}

	pub fn is_cjk(&self, code: &str) -> bool {
		crate::is_cjk(code)
	}

	fn list(&self, kind: ListKind, locale: &str) -> Result<Arc<LanguageList>> {
		if !is_valid_locale(locale) {
			return Err(CatalogError::AssetNotFound {
				locale: locale.to_string(),
				asset: kind.file_name(locale),
				searched: Vec::new(),
			});
		}

		let slot = self
			.lists
			.lock()
			.entry((kind, locale.to_string()))
			.or_default()
			.clone();
		slot.get_or_try_init(|| self.load_list(kind, locale)).cloned()
	}

	fn load_list(&self, kind: ListKind, locale: &str) -> Result<Arc<LanguageList>> {
		let name = kind.file_name(locale);
		let asset = self
			.locator
			.locate(&name)
			.map_err(|e| CatalogError::from_locate(locale, e))?;

		let mut languages = LanguageList::parse(&asset.contents, &name)?;
		let mut sorted = languages.languages.to_vec();
		Collator::for_locale(locale).sort(&mut sorted);
		languages.languages = sorted.into();

		tracing::debug!(
			asset = %name,
			origin = ?asset.origin,
			entries = languages.len(),
			bidi = languages.bidi.len(),
			"loaded display list"
		);
		Ok(Arc::new(languages))
	}
}
