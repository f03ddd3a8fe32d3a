//! An in-memory model of a single LDAP directory entry.
//!
//! An [`Object`] is a distinguished name plus a set of multi-valued
//! [`Attribute`]s. Attribute names are matched case-insensitively, the way
//! directory servers treat attribute descriptions, while the attributes
//! themselves keep the spelling they were created with.
//!
//! Objects are typically built from an [`ldap3::SearchEntry`] returned by a
//! search, edited, and then flattened back into the shape expected by the
//! directory write operations with [`Object::entry`], [`Object::add_attrs`] or
//! [`Object::replace_mods`]. Talking to the server is left to `ldap3`.
//!
//! For a general primer on LDAP, the [introduction] in the `ldap3` crate is an
//! excellent resource.
//!
//! [introduction]: https://github.com/inejge/ldap3/blob/master/LDAP-primer.md
//!
//! # Getting started
//! ```
//! # fn main() -> Result<(), ldap_object::Error> {
//! use ldap_object::{Attribute, EntryValue, Object};
//!
//! let mut object = Object::from_attributes(
//!     Some("cn=Bob,ou=People,dc=example,dc=com".to_owned()),
//!     [("objectClass", vec!["top", "person"])],
//! );
//! object.set(Attribute::new("cn", "Bob")).set(Attribute::new("sn", "Smith"));
//! object.get_or_create("mail").add("bob@example.com");
//!
//! assert!(object.has("OBJECTCLASS"));
//! assert_eq!(object.parent_dn()?, "ou=People,dc=example,dc=com");
//!
//! let entry = object.entry(true);
//! assert_eq!(entry["objectclass"], EntryValue::from(["top", "person"]));
//! assert_eq!(entry["mail"], EntryValue::from("bob@example.com"));
//! # Ok(())
//! # }
//! ```
//!
//! # Limitations
//! * DNs are only split structurally, neither attribute types nor values are
//!   normalized or checked against a schema.
//! * Binary attribute values are only kept if they are valid UTF-8.
//! * An [`Object`] is a plain value without any synchronization. Wrap it in a
//!   lock if it has to be shared between threads.

mod attribute;
pub mod config;
pub mod dn;
pub mod entry;
mod error;
mod object;

pub use ldap3::{self, SearchEntry};

pub use crate::{
	attribute::{Attribute, IntoAttribute},
	config::{AttributeNames, EntryConfig},
	dn::{explode_dn, DnSplitter, Rfc4514},
	entry::{Entry, EntryValue},
	error::{Error, Result},
	object::Object,
};
