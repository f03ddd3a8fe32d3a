//! Flat entry representation exchanged with the `ldap3` transport.
use std::collections::HashMap;

use ldap3::SearchEntry;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::object::Object;

/// An entry as expected by directory write operations: attribute names mapped
/// to either a single value or a list of values.
pub type Entry = HashMap<String, EntryValue>;

/// The value(s) of an attribute in an [`Entry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryValue {
	/// Exactly one value
	Single(String),
	/// Any number of values
	Multiple(Vec<String>),
}

impl EntryValue {
	/// The contained values as a slice, regardless of variant.
	#[must_use]
	pub fn values(&self) -> &[String] {
		match self {
			EntryValue::Single(value) => std::slice::from_ref(value),
			EntryValue::Multiple(values) => values,
		}
	}

	/// Consume into the contained values.
	#[must_use]
	pub fn into_values(self) -> Vec<String> {
		match self {
			EntryValue::Single(value) => vec![value],
			EntryValue::Multiple(values) => values,
		}
	}

	/// The value if this is a [`EntryValue::Single`].
	#[must_use]
	pub fn as_single(&self) -> Option<&str> {
		match self {
			EntryValue::Single(value) => Some(value),
			EntryValue::Multiple(_) => None,
		}
	}
}

impl From<String> for EntryValue {
	fn from(value: String) -> Self {
		EntryValue::Single(value)
	}
}

impl From<&str> for EntryValue {
	fn from(value: &str) -> Self {
		EntryValue::Single(value.to_owned())
	}
}

impl From<Vec<String>> for EntryValue {
	fn from(values: Vec<String>) -> Self {
		EntryValue::Multiple(values)
	}
}

impl From<Vec<&str>> for EntryValue {
	fn from(values: Vec<&str>) -> Self {
		EntryValue::Multiple(values.into_iter().map(str::to_owned).collect())
	}
}

impl<const N: usize> From<[&str; N]> for EntryValue {
	fn from(values: [&str; N]) -> Self {
		EntryValue::Multiple(values.into_iter().map(str::to_owned).collect())
	}
}

impl From<SearchEntry> for Object {
	/// Build an object out of a search result. Binary values are imported if
	/// they happen to be valid UTF-8 and skipped otherwise.
	fn from(entry: SearchEntry) -> Self {
		let mut object = Object::from_attributes(Some(entry.dn), entry.attrs);
		for (name, values) in entry.bin_attrs {
			let mut text = Vec::with_capacity(values.len());
			for value in values {
				match String::from_utf8(value) {
					Ok(value) => text.push(value),
					Err(_) => warn!("Skipping binary value of attribute {name}"),
				}
			}
			if !text.is_empty() {
				object.get_or_create(&name).extend(text);
			}
		}
		object
	}
}
