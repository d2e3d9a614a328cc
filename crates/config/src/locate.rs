//! Runtime asset location.
//!
//! Assets (the subtag registry and the per-locale display lists) are looked up
//! by file name in a list of directories, falling back to the copies embedded
//! in `langtag-runtime`. A file on disk always wins over the embedded copy.

use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};

use crate::Config;
use crate::error::LocateError;

/// Environment variable naming an extra runtime directory, searched first.
pub const RUNTIME_ENV: &str = "LANGTAG_RUNTIME";

/// Where a located asset came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetOrigin {
	/// Read from this file.
	Disk(PathBuf),
	/// Compiled into the binary.
	Embedded,
}

/// A located asset and its text.
#[derive(Debug, Clone)]
pub struct Asset {
	/// File name that was requested.
	pub name: String,
	/// Where the text came from.
	pub origin: AssetOrigin,
	/// UTF-8 contents.
	pub contents: Cow<'static, str>,
}

/// Finds assets by file name.
#[derive(Debug, Clone)]
pub struct AssetLocator {
	search_paths: Vec<PathBuf>,
	embedded: bool,
}

impl Default for AssetLocator {
	fn default() -> Self {
		Self {
			search_paths: default_search_paths(),
			embedded: true,
		}
	}
}

impl AssetLocator {
	/// Creates a locator over exactly these directories, with the embedded
	/// fallback enabled.
	pub fn new<I, P>(search_paths: I) -> Self
	where
		I: IntoIterator<Item = P>,
		P: Into<PathBuf>,
	{
		Self {
			search_paths: search_paths.into_iter().map(Into::into).collect(),
			embedded: true,
		}
	}

	/// Creates a locator that only serves embedded assets.
	pub fn embedded_only() -> Self {
		Self {
			search_paths: Vec::new(),
			embedded: true,
		}
	}

	/// Builds a locator from configuration: configured paths first, then the
	/// default search paths.
	pub fn from_config(config: &Config) -> Self {
		let mut search_paths = config.search_paths.clone();
		search_paths.extend(default_search_paths());
		Self {
			search_paths,
			embedded: config.embedded.unwrap_or(true),
		}
	}

	/// Enables or disables the embedded fallback.
	pub fn with_embedded(mut self, embedded: bool) -> Self {
		self.embedded = embedded;
		self
	}

	/// Returns the directories searched, in order.
	pub fn search_paths(&self) -> &[PathBuf] {
		&self.search_paths
	}

	/// Whether embedded assets are consulted after the search paths.
	pub fn uses_embedded(&self) -> bool {
		self.embedded
	}

	/// Locates `name` and returns its contents.
	pub fn locate(&self, name: &str) -> Result<Asset, LocateError> {
		for dir in &self.search_paths {
			let path = dir.join(name);
			match read_asset(&path) {
				Ok(Some(contents)) => {
					tracing::debug!(asset = name, path = %path.display(), "located asset on disk");
					return Ok(Asset {
						name: name.to_string(),
						origin: AssetOrigin::Disk(path),
						contents: Cow::Owned(contents),
					});
				}
				Ok(None) => continue,
				Err(error) => return Err(LocateError::Io { path, error }),
			}
		}

		if self.embedded {
			if let Some(contents) = langtag_runtime::get(name) {
				tracing::debug!(asset = name, "using embedded asset");
				return Ok(Asset {
					name: name.to_string(),
					origin: AssetOrigin::Embedded,
					contents: Cow::Borrowed(contents),
				});
			}
		}

		Err(LocateError::NotFound {
			name: name.to_string(),
			searched: self.search_paths.clone(),
			embedded: self.embedded,
		})
	}
}

/// Reads a file, mapping "does not exist" to `None`.
fn read_asset(path: &Path) -> io::Result<Option<String>> {
	match std::fs::read_to_string(path) {
		Ok(contents) => Ok(Some(contents)),
		Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => Ok(None),
		Err(e) => Err(e),
	}
}

/// Returns the directories searched for assets when nothing is configured.
/// Order: `LANGTAG_RUNTIME` env, user data dir, next to the executable, installed share dir.
pub fn default_search_paths() -> Vec<PathBuf> {
	let mut dirs = Vec::new();

	if let Some(runtime) = std::env::var_os(RUNTIME_ENV) {
		dirs.push(PathBuf::from(runtime));
	}

	if let Some(data_dir) = dirs::data_local_dir() {
		dirs.push(data_dir.join("langtag"));
	}

	if let Ok(exe_path) = std::env::current_exe() {
		if let Some(exe_dir) = exe_path.parent() {
			dirs.push(exe_dir.join("assets"));
			dirs.push(exe_dir.join("..").join("share").join("langtag"));
		}
	}

	dirs
}
