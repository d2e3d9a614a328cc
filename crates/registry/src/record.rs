//! Registry record store.
//!
//! The registry is a flat sequence of records separated by `%%` lines. Each
//! record is a list of `Field-Name: value` lines. A field that repeats within a
//! record is joined onto the first occurrence with [`FIELD_SEPARATOR`], and a
//! line that starts with whitespace continues the previous field.
//!
//! ```text
//! Type: language
//! Subtag: es
//! Description: Spanish
//! Description: Castilian
//! %%
//! ```

use indexmap::IndexMap;

/// Separator placed between repeated values of one field.
pub const FIELD_SEPARATOR: &str = " | ";

/// One registry record: an insertion-ordered map from field name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryRecord {
	fields: IndexMap<String, String>,
}

impl RegistryRecord {
	/// Builds a record from its lines.
	///
	/// Blank lines and lines without a `:` are skipped.
	pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
		let mut record = Self::default();
		let mut last_field: Option<String> = None;

		for line in lines {
			if line.trim().is_empty() {
				continue;
			}

			if line.starts_with(char::is_whitespace) {
				if let Some(field) = last_field.as_deref() {
					record.continue_field(field, line.trim());
					continue;
				}
			}

			let Some((name, value)) = line.split_once(':') else {
				tracing::trace!(line, "skipping registry line without a field name");
				continue;
			};
			let name = name.trim();
			record.append(name, value.trim());
			last_field = Some(name.to_string());
		}

		record
	}

	/// Appends `value` to `field`, joining with [`FIELD_SEPARATOR`] if the field
	/// is already present.
	pub fn append(&mut self, field: &str, value: &str) {
		match self.fields.get_mut(field) {
			Some(existing) => {
				existing.push_str(FIELD_SEPARATOR);
				existing.push_str(value);
			}
			None => {
				self.fields.insert(field.to_string(), value.to_string());
			}
		}
	}

	fn continue_field(&mut self, field: &str, text: &str) {
		if let Some(existing) = self.fields.get_mut(field) {
			existing.push(' ');
			existing.push_str(text);
		}
	}

	/// Returns the value of `field`.
	pub fn get(&self, field: &str) -> Option<&str> {
		self.fields.get(field).map(String::as_str)
	}

	/// The raw `Type` field.
	pub fn kind(&self) -> Option<&str> {
		self.get("Type")
	}

	/// The `Subtag` field.
	pub fn subtag(&self) -> Option<&str> {
		self.get("Subtag")
	}

	/// The `Description` field, repeated values joined.
	pub fn description(&self) -> Option<&str> {
		self.get("Description")
	}

	/// Iterates fields in first-seen order.
	pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
		self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

/// Splits registry text into records, in file order.
///
/// Records with no fields (for example between two adjacent `%%` lines) are
/// dropped. Text after the last separator forms the final record.
pub fn parse_records(text: &str) -> Vec<RegistryRecord> {
	let mut records = Vec::new();
	let mut block: Vec<&str> = Vec::new();

	for line in text.lines() {
		if line.trim() == "%%" {
			push_record(&mut records, &mut block);
		} else {
			block.push(line);
		}
	}
	push_record(&mut records, &mut block);

	records
}

fn push_record(records: &mut Vec<RegistryRecord>, block: &mut Vec<&str>) {
	let record = RegistryRecord::from_lines(block.drain(..));
	if !record.is_empty() {
		records.push(record);
	}
}
