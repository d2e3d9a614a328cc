#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Configuration for langtag.
//!
//! Configuration is written in KDL (v2) and controls where runtime assets are
//! looked up and which locale backs locale-less queries such as bidi checks.
//!
//! ```kdl
//! default-locale "en"
//!
//! runtime {
//!     search-path "/usr/share/langtag"
//!     search-path "~/langtag-assets"
//!     embedded #true
//! }
//! ```
//!
//! Unknown nodes are not fatal; they are collected in [`Config::warnings`].

pub mod error;
pub mod locate;

use std::path::{Path, PathBuf};

pub use error::{ConfigError, ConfigWarning, LocateError, Result};
use kdl::{KdlDocument, KdlNode};
pub use locate::{Asset, AssetLocator, AssetOrigin, RUNTIME_ENV, default_search_paths};

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en";

/// Parsed configuration from a KDL file.
#[derive(Debug, Clone, Default)]
pub struct Config {
	/// Locale for queries that take none (e.g., bidi checks).
	pub default_locale: Option<String>,
	/// Extra asset directories, searched before the defaults.
	pub search_paths: Vec<PathBuf>,
	/// Whether embedded assets back up the search paths.
	pub embedded: Option<bool>,
	/// Non-fatal warnings encountered during parsing.
	pub warnings: Vec<ConfigWarning>,
}

impl Config {
	/// Parse a KDL string into a [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		let doc: KdlDocument = input.parse()?;
		let mut config = Config::default();

		for node in doc.nodes() {
			match node.name().value() {
				"default-locale" => {
					let locale = string_arg(node)?;
					if !is_valid_locale(locale) {
						return Err(ConfigError::InvalidValue {
							field: "default-locale".into(),
							expected: "a locale name of ASCII letters, digits, '-' or '_'",
						});
					}
					config.default_locale = Some(locale.to_string());
				}
				"runtime" => {
					if let Some(children) = node.children() {
						config.parse_runtime(children)?;
					}
				}
				other => config.warnings.push(ConfigWarning::UnknownNode {
					name: other.to_string(),
					found_in: "top level",
				}),
			}
		}

		Ok(config)
	}

	fn parse_runtime(&mut self, block: &KdlDocument) -> Result<()> {
		for node in block.nodes() {
			match node.name().value() {
				"search-path" => {
					let paths: Vec<&str> = node
						.entries()
						.iter()
						.filter(|e| e.name().is_none())
						.filter_map(|e| e.value().as_string())
						.collect();
					if paths.is_empty() {
						return Err(ConfigError::InvalidValue {
							field: "search-path".into(),
							expected: "one or more path strings",
						});
					}
					self.search_paths.extend(paths.into_iter().map(expand_home));
				}
				"embedded" => {
					let enabled = node.get(0).and_then(|v| v.as_bool()).ok_or_else(|| {
						ConfigError::InvalidValue {
							field: "embedded".into(),
							expected: "#true or #false",
						}
					})?;
					self.embedded = Some(enabled);
				}
				other => self.warnings.push(ConfigWarning::UnknownNode {
					name: other.to_string(),
					found_in: "runtime block",
				}),
			}
		}
		Ok(())
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Merge another config into this one.
	///
	/// Scalar values from `other` override; search paths from `other` are
	/// searched first.
	pub fn merge(&mut self, other: Config) {
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.embedded.is_some() {
			self.embedded = other.embedded;
		}
		let mut search_paths = other.search_paths;
		search_paths.append(&mut self.search_paths);
		self.search_paths = search_paths;
		self.warnings.extend(other.warnings);
	}

	/// Returns the configured default locale or [`DEFAULT_LOCALE`].
	pub fn default_locale(&self) -> &str {
		self.default_locale.as_deref().unwrap_or(DEFAULT_LOCALE)
	}

	/// Builds the asset locator described by this configuration.
	pub fn locator(&self) -> AssetLocator {
		AssetLocator::from_config(self)
	}
}

/// Whether `locale` is safe to splice into an asset file name.
pub fn is_valid_locale(locale: &str) -> bool {
	!locale.is_empty()
		&& locale
			.bytes()
			.all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

fn string_arg(node: &KdlNode) -> Result<&str> {
	node.get(0)
		.and_then(|v| v.as_string())
		.ok_or_else(|| ConfigError::InvalidValue {
			field: node.name().value().to_string(),
			expected: "a string argument",
		})
}

fn expand_home(path: &str) -> PathBuf {
	match path.strip_prefix("~/") {
		Some(rest) => match dirs::home_dir() {
			Some(home) => home.join(rest),
			None => PathBuf::from(path),
		},
		None => PathBuf::from(path),
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn parse_full_config() {
		let kdl = r#"
default-locale "es"
runtime {
    search-path "/usr/share/langtag" "/opt/langtag"
    search-path "/srv/assets"
    embedded #false
}
"#;
		let config = Config::parse(kdl).unwrap();
		assert_eq!(config.default_locale(), "es");
		assert_eq!(
			config.search_paths,
			vec![
				PathBuf::from("/usr/share/langtag"),
				PathBuf::from("/opt/langtag"),
				PathBuf::from("/srv/assets"),
			]
		);
		assert_eq!(config.embedded, Some(false));
		assert!(config.warnings.is_empty());
	}

	#[test]
	fn empty_config_uses_defaults() {
		let config = Config::parse("").unwrap();
		assert_eq!(config.default_locale(), DEFAULT_LOCALE);
		let locator = config.locator();
		assert!(locator.uses_embedded());
		assert_eq!(locator.search_paths(), default_search_paths().as_slice());
	}

	#[test]
	fn configured_paths_precede_defaults() {
		let config = Config::parse(r#"runtime { search-path "/first"; }"#).unwrap();
		let locator = config.locator();
		assert_eq!(locator.search_paths()[0], PathBuf::from("/first"));
		assert_eq!(locator.search_paths().len(), default_search_paths().len() + 1);
	}

	#[test]
	fn unknown_nodes_warn() {
		let config = Config::parse(
			r#"
colour "blue"
runtime {
    cache-size 10
}
"#,
		)
		.unwrap();
		assert_eq!(
			config.warnings,
			vec![
				ConfigWarning::UnknownNode {
					name: "colour".into(),
					found_in: "top level",
				},
				ConfigWarning::UnknownNode {
					name: "cache-size".into(),
					found_in: "runtime block",
				},
			]
		);
		assert_eq!(
			config.warnings[1].to_string(),
			"unknown node 'cache-size' in runtime block will be ignored"
		);
	}

	#[test]
	fn invalid_values_are_errors() {
		assert!(matches!(
			Config::parse("default-locale 3"),
			Err(ConfigError::InvalidValue { .. })
		));
		assert!(matches!(
			Config::parse(r#"default-locale "../etc""#),
			Err(ConfigError::InvalidValue { .. })
		));
		assert!(matches!(
			Config::parse(r#"runtime { embedded "yes"; }"#),
			Err(ConfigError::InvalidValue { .. })
		));
		assert!(matches!(
			Config::parse("runtime { search-path; }"),
			Err(ConfigError::InvalidValue { .. })
		));
	}

	#[test]
	fn kdl_syntax_error() {
		assert!(matches!(Config::parse("runtime {"), Err(ConfigError::Kdl(_))));
	}

	#[test]
	fn merge_overrides_and_prepends() {
		let mut base = Config::parse(
			r#"
default-locale "en"
runtime { search-path "/base"; }
"#,
		)
		.unwrap();
		let overlay = Config::parse(
			r#"
default-locale "es"
runtime {
    search-path "/overlay"
    embedded #false
}
"#,
		)
		.unwrap();
		base.merge(overlay);

		assert_eq!(base.default_locale(), "es");
		assert_eq!(base.embedded, Some(false));
		assert_eq!(
			base.search_paths,
			vec![PathBuf::from("/overlay"), PathBuf::from("/base")]
		);
	}

	#[test]
	fn load_from_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("langtag.kdl");
		std::fs::write(&path, r#"default-locale "es""#).unwrap();
		assert_eq!(Config::load(&path).unwrap().default_locale(), "es");

		let missing = Config::load(dir.path().join("missing.kdl"));
		assert!(matches!(missing, Err(ConfigError::Io { .. })));
	}

	#[test]
	fn home_expansion() {
		if let Some(home) = dirs::home_dir() {
			assert_eq!(expand_home("~/assets"), home.join("assets"));
		}
		assert_eq!(expand_home("/abs"), PathBuf::from("/abs"));
	}

	#[test]
	fn locale_names() {
		assert!(is_valid_locale("en"));
		assert!(is_valid_locale("pt_BR"));
		assert!(is_valid_locale("zh-Hant"));
		assert!(!is_valid_locale(""));
		assert!(!is_valid_locale("../en"));
		assert!(!is_valid_locale("en/x"));
	}
}
