//! Config for building entries out of objects.
use serde::{Deserialize, Serialize};

/// Configuration for which variant of ISO8601 to use for parsing time
/// values. Configured according the syntax definition
/// `( 1.3.6.1.4.1.1466.115.121.1.24 DESC 'Generalized Time' )` described in
/// RFC4517 section 3.1.13
pub const TIME_FORMAT: &[time::format_description::FormatItem] =
	time::macros::format_description!("[year][month][day][hour][minute][second]Z");

/// Controls how [`Object::entry_with`](crate::Object::entry_with) flattens an
/// object.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct EntryConfig {
	/// Whether empty values are kept in the produced entry. When false, empty
	/// values are dropped, and attributes left without values are omitted.
	pub keep_empty: bool,
	/// Which spelling of the attribute names the entry is keyed by
	pub attribute_names: AttributeNames,
}

impl Default for EntryConfig {
	fn default() -> Self {
		Self { keep_empty: true, attribute_names: AttributeNames::default() }
	}
}

impl EntryConfig {
	/// The default configuration with the given `keep_empty` setting.
	#[must_use]
	pub fn keep_empty(keep_empty: bool) -> Self {
		Self { keep_empty, ..Self::default() }
	}
}

/// Spelling of attribute names in produced entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeNames {
	/// Use the lower-cased key the attribute is stored under
	#[default]
	Normalized,
	/// Use the name the attribute was created with, case preserved
	Original,
}
