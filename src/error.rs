//! Error codes

/// Errors that can occur when using this library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// The requested attribute is not present on the object and creating it
	/// was not requested.
	#[error("Attribute not found: {0}")]
	AttributeNotFound(String),
	/// The object has no distinguished name assigned.
	#[error("Missing distinguished name")]
	MissingDn,
	/// The distinguished name could not be split into its components.
	#[error("Malformed distinguished name `{dn}`: {reason}")]
	MalformedDn {
		/// The offending distinguished name.
		dn: String,
		/// What the splitter choked on.
		reason: &'static str,
	},
	/// The contents of an attribute did not conform to the expected syntax.
	#[error("Malformed data in attribute {0}")]
	Invalid(String),
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
