//! A directory entry: a distinguished name plus case-insensitively keyed
//! attributes.
use std::collections::{hash_map, HashMap, HashSet};

use ldap3::Mod;
use tracing::debug;

use crate::{
	attribute::{Attribute, IntoAttribute},
	config::{AttributeNames, EntryConfig},
	dn::{DnSplitter, Rfc4514},
	entry::{Entry, EntryValue},
	error::{Error, Result},
};

/// A single directory object.
///
/// Attributes are stored under their lower-cased name while each
/// [`Attribute`] keeps its original spelling, so lookups ignore case and at
/// most one attribute exists per case-insensitive name.
///
/// The mutators return `&mut Self` for chaining. Attributes handed out by
/// [`Object::get_mut`] and [`Object::get_or_create`] are the stored ones,
/// changes made through them are visible on the object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Object {
	/// The distinguished name, if one was assigned
	distinguished_name: Option<String>,
	/// Attributes keyed by their lower-cased name
	attributes: HashMap<String, Attribute>,
}

/// The storage key for an attribute name.
fn key(name: &str) -> String {
	name.to_lowercase()
}

impl Object {
	/// Create an object without a DN or attributes.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an object with the given DN and no attributes.
	#[must_use]
	pub fn with_dn(dn: impl Into<String>) -> Self {
		Self { distinguished_name: Some(dn.into()), attributes: HashMap::new() }
	}

	/// Create an object from a DN and a set of attributes. Each attribute may
	/// be given as raw value(s), which get wrapped in an [`Attribute`] named
	/// after the key, or as a ready [`Attribute`], which keeps its own name.
	///
	/// Names colliding case-insensitively replace each other in iteration
	/// order.
	#[must_use]
	pub fn from_attributes<I, K, V>(dn: Option<String>, attributes: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: IntoAttribute,
	{
		let mut object = Self { distinguished_name: dn, attributes: HashMap::new() };
		for (name, attribute) in attributes {
			object.set(attribute.into_attribute(name.into()));
		}
		object
	}

	/// The distinguished name of the object.
	#[must_use]
	pub fn distinguished_name(&self) -> Option<&str> {
		self.distinguished_name.as_deref()
	}

	/// Assign a new distinguished name. The DN is not checked.
	pub fn set_distinguished_name(&mut self, dn: impl Into<String>) -> &mut Self {
		self.distinguished_name = Some(dn.into());
		self
	}

	/// The DN of the parent entry, i.e. the DN without its leftmost RDN. An
	/// entry directly below the root has the empty string as parent.
	///
	/// # Errors
	/// [`Error::MissingDn`] if no DN is set, [`Error::MalformedDn`] if it can't
	/// be split.
	pub fn parent_dn(&self) -> Result<String> {
		self.parent_dn_with(&Rfc4514)
	}

	/// Like [`Object::parent_dn`], splitting the DN with `splitter`.
	///
	/// # Errors
	/// [`Error::MissingDn`] if no DN is set, otherwise whatever the splitter
	/// fails with.
	pub fn parent_dn_with(&self, splitter: &impl DnSplitter) -> Result<String> {
		let dn = self.distinguished_name.as_deref().ok_or(Error::MissingDn)?;
		let components = splitter.split(dn)?;
		Ok(components.get(1..).unwrap_or_default().join(","))
	}

	/// The leftmost RDN of the DN, `None` for the empty DN.
	///
	/// # Errors
	/// Same as [`Object::parent_dn`].
	pub fn rdn(&self) -> Result<Option<String>> {
		let dn = self.distinguished_name.as_deref().ok_or(Error::MissingDn)?;
		Ok(Rfc4514.split(dn)?.into_iter().next())
	}

	/// Whether an attribute with the given name exists, ignoring case.
	#[must_use]
	pub fn has(&self, name: &str) -> bool {
		self.attributes.contains_key(&key(name))
	}

	/// Look up an attribute, ignoring case.
	///
	/// # Errors
	/// [`Error::AttributeNotFound`] if there is no such attribute. The object is
	/// left untouched.
	pub fn get(&self, name: &str) -> Result<&Attribute> {
		self.attributes.get(&key(name)).ok_or_else(|| Error::AttributeNotFound(name.to_owned()))
	}

	/// Mutable lookup of an attribute, ignoring case.
	///
	/// # Errors
	/// [`Error::AttributeNotFound`] if there is no such attribute.
	pub fn get_mut(&mut self, name: &str) -> Result<&mut Attribute> {
		self.attributes
			.get_mut(&key(name))
			.ok_or_else(|| Error::AttributeNotFound(name.to_owned()))
	}

	/// Look up an attribute, inserting an empty one named `name` if it is
	/// missing. The inserted attribute stays on the object even if no values
	/// are ever added to it.
	pub fn get_or_create(&mut self, name: &str) -> &mut Attribute {
		self.attributes.entry(key(name)).or_insert_with(|| {
			debug!("Creating empty attribute {name}");
			Attribute::empty(name)
		})
	}

	/// Store an attribute, replacing any existing one whose name matches
	/// ignoring case.
	pub fn set(&mut self, attribute: Attribute) -> &mut Self {
		if let Some(previous) = self.attributes.insert(key(attribute.name()), attribute) {
			debug!("Replaced attribute {}", previous.name());
		}
		self
	}

	/// Remove an attribute, given either by name or as an [`Attribute`]
	/// carrying the name. Removing a missing attribute does nothing.
	pub fn remove(&mut self, attribute: impl AsRef<str>) -> &mut Self {
		self.attributes.remove(&key(attribute.as_ref()));
		self
	}

	/// Number of attributes.
	#[must_use]
	pub fn len(&self) -> usize {
		self.attributes.len()
	}

	/// Whether the object has no attributes.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.attributes.is_empty()
	}

	/// Iterate over all attributes, in no particular order.
	#[must_use]
	pub fn attributes(&self) -> hash_map::Values<'_, String, Attribute> {
		self.attributes.values()
	}

	/// The names of all attributes, case preserved, in no particular order.
	pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
		self.attributes.values().map(Attribute::name)
	}

	/// Iterate over all attributes together with the lower-cased key they are
	/// stored under, in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Attribute)> + '_ {
		self.attributes.iter().map(|(key, attribute)| (key.as_str(), attribute))
	}

	/// Flatten the object into an [`Entry`] keyed by lower-cased attribute
	/// names. See [`Object::entry_with`].
	#[must_use]
	pub fn entry(&self, keep_empty: bool) -> Entry {
		self.entry_with(&EntryConfig::keep_empty(keep_empty))
	}

	/// Flatten the object into an [`Entry`] as expected by directory write
	/// operations.
	///
	/// Attributes with more than one value become [`EntryValue::Multiple`],
	/// others [`EntryValue::Single`]; an attribute without values counts as
	/// having a single empty value. Unless `keep_empty` is set, empty values
	/// are dropped and attributes left without any are omitted.
	#[must_use]
	pub fn entry_with(&self, config: &EntryConfig) -> Entry {
		let mut entry = Entry::with_capacity(self.attributes.len());
		for (key, attribute) in &self.attributes {
			let name = match config.attribute_names {
				AttributeNames::Normalized => key.clone(),
				AttributeNames::Original => attribute.name().to_owned(),
			};

			let values = attribute.values();
			if values.len() > 1 {
				let kept: Vec<String> = values
					.iter()
					.filter(|value| config.keep_empty || !value.is_empty())
					.cloned()
					.collect();
				if !kept.is_empty() {
					entry.insert(name, EntryValue::Multiple(kept));
				}
			} else {
				let value = values.first().map_or("", String::as_str);
				if config.keep_empty || !value.is_empty() {
					entry.insert(name, EntryValue::Single(value.to_owned()));
				}
			}
		}
		entry
	}

	/// Attributes in the shape taken by [`ldap3::Ldap::add`].
	#[must_use]
	pub fn add_attrs(&self, keep_empty: bool) -> Vec<(String, HashSet<String>)> {
		self.entry(keep_empty)
			.into_iter()
			.map(|(name, value)| (name, value.into_values().into_iter().collect()))
			.collect()
	}

	/// Modifications replacing every attribute of the stored entry with the
	/// values of this object, for [`ldap3::Ldap::modify`].
	#[must_use]
	pub fn replace_mods(&self, keep_empty: bool) -> Vec<Mod<String>> {
		self.add_attrs(keep_empty)
			.into_iter()
			.map(|(name, values)| Mod::Replace(name, values))
			.collect()
	}
}
