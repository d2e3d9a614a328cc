//! Registry loading errors.

use std::path::PathBuf;

use langtag_config::LocateError;
use thiserror::Error;

/// Errors that abort building the subtag tables.
#[derive(Debug, Error)]
pub enum RegistryError {
	/// The registry asset is missing from every search location.
	#[error("subtag registry not found: {0}")]
	NotFound(#[source] LocateError),

	/// The registry asset exists but could not be read.
	#[error("I/O error reading subtag registry {path}: {error}")]
	Io {
		/// Path of the unreadable file.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A record is missing a field its type requires.
	#[error("malformed registry record #{record}{}: missing '{field}'", subtag.as_ref().map(|s| format!(" ({s})")).unwrap_or_default())]
	Format {
		/// Zero-based index of the record in the registry.
		record: usize,
		/// The record's subtag, when it has one.
		subtag: Option<String>,
		/// The missing field.
		field: &'static str,
	},
}

impl From<LocateError> for RegistryError {
	fn from(err: LocateError) -> Self {
		match err {
			LocateError::Io { path, error } => RegistryError::Io { path, error },
			not_found @ LocateError::NotFound { .. } => RegistryError::NotFound(not_found),
		}
	}
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
