//! Catalog errors.

use std::path::PathBuf;

use langtag_config::LocateError;
use langtag_registry::RegistryError;
use thiserror::Error;

/// Errors from loading display lists or the registry behind them.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// No asset exists for the requested locale.
	#[error("no asset '{asset}' for locale '{locale}' (searched {} path(s))", searched.len())]
	AssetNotFound {
		/// The requested locale.
		locale: String,
		/// File name that was looked up.
		asset: String,
		/// Directories that were searched.
		searched: Vec<PathBuf>,
	},

	/// The asset exists but could not be read.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path of the unreadable file.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The asset is not well-formed XML.
	#[error("invalid XML in '{asset}': {source}")]
	Xml {
		/// File name of the list.
		asset: String,
		/// The parser error.
		#[source]
		source: quick_xml::Error,
	},

	/// A list entry has no `code` attribute.
	#[error("entry #{entry} in '{asset}' has no code attribute")]
	MissingCode {
		/// File name of the list.
		asset: String,
		/// Zero-based index of the entry.
		entry: usize,
	},

	/// The subtag registry could not be built.
	#[error(transparent)]
	Registry(#[from] RegistryError),
}

impl CatalogError {
	pub(crate) fn from_locate(locale: &str, err: LocateError) -> Self {
		match err {
			LocateError::NotFound { name, searched, .. } => CatalogError::AssetNotFound {
				locale: locale.to_string(),
				asset: name,
				searched,
			},
			LocateError::Io { path, error } => CatalogError::Io { path, error },
		}
	}
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
