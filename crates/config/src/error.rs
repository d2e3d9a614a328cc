//! Error types for configuration parsing and asset location.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing KDL syntax.
	#[error("KDL parse error: {0}")]
	Kdl(#[from] kdl::KdlError),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A node carried a value of the wrong shape.
	#[error("invalid value for '{field}': expected {expected}")]
	InvalidValue {
		/// The KDL node name.
		field: String,
		/// Description of what was expected.
		expected: &'static str,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Non-fatal warning during configuration parsing.
///
/// Collected in [`crate::Config::warnings`]; the rest of the file still loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
	/// A node name that is not part of the schema.
	UnknownNode {
		/// The unrecognized node name.
		name: String,
		/// Where the node was found (e.g., "runtime block").
		found_in: &'static str,
	},
}

impl std::fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ConfigWarning::UnknownNode { name, found_in } => {
				write!(f, "unknown node '{name}' in {found_in} will be ignored")
			}
		}
	}
}

/// Errors from locating a runtime asset.
#[derive(Debug, Error)]
pub enum LocateError {
	/// The asset exists neither in a search path nor in the embedded runtime.
	#[error("asset '{name}' not found (searched {} path(s){})", searched.len(), if *embedded { " and embedded runtime" } else { "" })]
	NotFound {
		/// File name of the asset.
		name: String,
		/// Directories that were searched, in order.
		searched: Vec<PathBuf>,
		/// Whether the embedded runtime was consulted.
		embedded: bool,
	},

	/// The asset exists on disk but could not be read.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}
