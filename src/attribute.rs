//! A single named, multi-valued directory attribute.
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::{config::TIME_FORMAT, entry::EntryValue, error::Error};

/// A named attribute holding an ordered list of string values.
///
/// The name keeps the casing it was created with. Objects compare attribute
/// names case-insensitively, see [`Object`](crate::Object).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
	/// The attribute name, case preserved
	name: String,
	/// The values in insertion order
	values: Vec<String>,
}

impl Attribute {
	/// Create an attribute with the given values. A single value becomes a
	/// one-element value list.
	#[must_use]
	pub fn new(name: impl Into<String>, values: impl Into<EntryValue>) -> Self {
		Self { name: name.into(), values: values.into().into_values() }
	}

	/// Create an attribute without any values.
	#[must_use]
	pub fn empty(name: impl Into<String>) -> Self {
		Self { name: name.into(), values: Vec::new() }
	}

	/// The name of the attribute, as it was given on creation.
	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// All values of the attribute, in insertion order.
	#[must_use]
	pub fn values(&self) -> &[String] {
		&self.values
	}

	/// Mutable access to the value list.
	pub fn values_mut(&mut self) -> &mut Vec<String> {
		&mut self.values
	}

	/// Get the first value of the attribute.
	#[must_use]
	pub fn first(&self) -> Option<&str> {
		self.values.first().map(String::as_str)
	}

	/// Number of values.
	#[must_use]
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Whether the attribute holds no values at all.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Append a value.
	pub fn add(&mut self, value: impl Into<String>) -> &mut Self {
		self.values.push(value.into());
		self
	}

	/// Replace all values.
	pub fn set_values(&mut self, values: impl Into<EntryValue>) -> &mut Self {
		self.values = values.into().into_values();
		self
	}

	/// Remove every occurrence of `value`. Returns whether anything was
	/// removed.
	pub fn remove_value(&mut self, value: &str) -> bool {
		let before = self.values.len();
		self.values.retain(|existing| existing != value);
		self.values.len() != before
	}

	/// Drop all values, keeping the attribute itself.
	pub fn clear(&mut self) -> &mut Self {
		self.values.clear();
		self
	}

	/// Get the first value of the attribute, interpreted as a directory
	/// boolean (`TRUE` or `FALSE`).
	#[must_use]
	pub fn first_bool(&self) -> Option<Result<bool, Error>> {
		match self.first() {
			Some("TRUE") => Some(Ok(true)),
			Some("FALSE") => Some(Ok(false)),
			Some(_) => Some(Err(Error::Invalid(self.name.clone()))),
			None => None,
		}
	}

	/// Get the first value of the attribute, interpreted as a generalized
	/// time in UTC.
	#[must_use]
	pub fn first_time(&self) -> Option<Result<OffsetDateTime, Error>> {
		let value = self.first()?;
		Some(
			PrimitiveDateTime::parse(value, &TIME_FORMAT)
				.map(PrimitiveDateTime::assume_utc)
				.map_err(|_| Error::Invalid(self.name.clone())),
		)
	}
}

impl AsRef<str> for Attribute {
	fn as_ref(&self) -> &str {
		&self.name
	}
}

impl Extend<String> for Attribute {
	fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
		self.values.extend(iter);
	}
}

/// Values accepted where an object expects an attribute: either a complete
/// [`Attribute`], or raw values which get wrapped under the given name.
pub trait IntoAttribute {
	/// Turn `self` into an attribute. Raw values are named `name`, an
	/// existing [`Attribute`] keeps its own name.
	fn into_attribute(self, name: String) -> Attribute;
}

impl IntoAttribute for Attribute {
	fn into_attribute(self, _name: String) -> Attribute {
		self
	}
}

impl IntoAttribute for EntryValue {
	fn into_attribute(self, name: String) -> Attribute {
		Attribute::new(name, self)
	}
}

impl IntoAttribute for String {
	fn into_attribute(self, name: String) -> Attribute {
		Attribute::new(name, self)
	}
}

impl IntoAttribute for &str {
	fn into_attribute(self, name: String) -> Attribute {
		Attribute::new(name, self)
	}
}

impl IntoAttribute for Vec<String> {
	fn into_attribute(self, name: String) -> Attribute {
		Attribute::new(name, self)
	}
}

impl IntoAttribute for Vec<&str> {
	fn into_attribute(self, name: String) -> Attribute {
		Attribute::new(name, self)
	}
}

impl<const N: usize> IntoAttribute for [&str; N] {
	fn into_attribute(self, name: String) -> Attribute {
		Attribute::new(name, self)
	}
}
