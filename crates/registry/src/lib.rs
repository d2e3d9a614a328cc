#![cfg_attr(test, allow(unused_crate_dependencies))]
//! IANA Language Subtag Registry ingestion and BCP 47 tag resolution.
//!
//! # Architecture
//!
//! * [`record`]: splits the registry text into field maps
//! * [`subtag`]: classifies records into typed language/region/script/variant subtags
//! * [`tables`]: the subtag tables, built once and immutable
//! * [`resolve`]: tag decomposition, validation, description and normalization
//!
//! ```
//! use langtag_registry::SubtagTables;
//!
//! let tables = SubtagTables::embedded()?;
//! assert_eq!(tables.normalize("es-mx").as_deref(), Some("es-MX"));
//! assert_eq!(tables.describe("es-MX").as_deref(), Some("Spanish (Mexico)"));
//! assert_eq!(tables.normalize("en-Latn"), None);
//! # Ok::<(), langtag_registry::RegistryError>(())
//! ```

pub mod error;
pub mod record;
pub mod resolve;
pub mod subtag;
pub mod tables;

pub use error::{RegistryError, Result};
pub use record::{FIELD_SEPARATOR, RegistryRecord, parse_records};
pub use resolve::{ResolvedTag, TagTail};
pub use subtag::{LanguageSubtag, RegionSubtag, ScriptSubtag, Subtag, SubtagKind, VariantSubtag};
pub use tables::SubtagTables;
