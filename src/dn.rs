//! Splitting distinguished names into their relative components.
//!
//! Only the structure of a DN is checked here: RDNs separated by `,` (or `;`,
//! which RFC 2253 parsers accept), each consisting of one or more
//! `type=value` pairs joined by `+`. Values may contain backslash escapes,
//! be quoted, or be given as `#` prefixed hex strings; `"`, `<` and `>` must
//! be escaped outside of quotes. Attribute types and values are not validated
//! against any schema.
use std::{iter::Peekable, str::CharIndices};

use crate::error::{Error, Result};

/// Characters that may follow a backslash in a DN value.
const ESCAPABLE: &[char] = &[' ', '"', '#', '+', ',', ';', '<', '=', '>', '\\'];

/// Something that can split a distinguished name into its ordered RDNs.
pub trait DnSplitter {
	/// Split `dn` into its RDNs, leftmost (the entry's own RDN) first.
	///
	/// # Errors
	/// Fails with [`Error::MalformedDn`] if the DN can't be split.
	fn split(&self, dn: &str) -> Result<Vec<String>>;
}

/// The default splitter, implementing the string representation of
/// RFC 4514.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rfc4514;

impl DnSplitter for Rfc4514 {
	fn split(&self, dn: &str) -> Result<Vec<String>> {
		explode_dn(dn)
	}
}

impl<F> DnSplitter for F
where
	F: Fn(&str) -> Result<Vec<String>>,
{
	fn split(&self, dn: &str) -> Result<Vec<String>> {
		self(dn)
	}
}

/// Split a distinguished name into its RDNs, leftmost first.
///
/// Components are returned as written, minus the whitespace surrounding
/// separators. Multi-valued RDNs stay a single component. The empty DN has no
/// components.
///
/// ```
/// # fn main() -> Result<(), ldap_object::Error> {
/// let rdns = ldap_object::dn::explode_dn(r"cn=Smith\, John+uid=42, dc=com")?;
/// assert_eq!(rdns, [r"cn=Smith\, John+uid=42", "dc=com"]);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// Fails with [`Error::MalformedDn`] on dangling or invalid escapes,
/// unterminated quotes, empty components and components without a
/// `type=value` structure.
pub fn explode_dn(dn: &str) -> Result<Vec<String>> {
	let mut parser = Parser { input: dn, chars: dn.char_indices().peekable() };
	let mut components = Vec::new();

	parser.skip_spaces();
	if parser.peek().is_none() {
		return Ok(components);
	}

	loop {
		parser.skip_spaces();
		let start = parser.position();
		let mut end = parser.attribute_value_assertion()?;
		while parser.peek() == Some('+') {
			parser.bump();
			end = parser.attribute_value_assertion()?;
		}
		components.push(dn[start..end].to_owned());

		parser.skip_spaces();
		match parser.bump() {
			None => break,
			Some(',' | ';') => {}
			Some(_) => return Err(parser.malformed("unexpected character after value")),
		}
	}

	Ok(components)
}

/// Cursor over a DN string.
struct Parser<'a> {
	/// The complete DN, used for slicing and error messages
	input: &'a str,
	/// Remaining characters with their byte offsets
	chars: Peekable<CharIndices<'a>>,
}

impl Parser<'_> {
	/// The next character, without consuming it.
	fn peek(&mut self) -> Option<char> {
		self.chars.peek().map(|&(_, ch)| ch)
	}

	/// Consume the next character.
	fn bump(&mut self) -> Option<char> {
		self.chars.next().map(|(_, ch)| ch)
	}

	/// Byte offset of the next character.
	fn position(&mut self) -> usize {
		self.chars.peek().map_or(self.input.len(), |&(index, _)| index)
	}

	/// Skip insignificant spaces.
	fn skip_spaces(&mut self) {
		while self.peek() == Some(' ') {
			self.bump();
		}
	}

	/// Whether the next character ends the current value.
	fn at_value_end(&mut self) -> bool {
		matches!(self.peek(), None | Some(',' | ';' | '+'))
	}

	/// Build the error for the DN being parsed.
	fn malformed(&self, reason: &'static str) -> Error {
		Error::MalformedDn { dn: self.input.to_owned(), reason }
	}

	/// Parse a single `type=value` pair. Returns the byte offset right after
	/// its last significant character.
	fn attribute_value_assertion(&mut self) -> Result<usize> {
		self.skip_spaces();
		let mut attribute_type = false;
		while matches!(self.peek(), Some(ch) if ch.is_ascii_alphanumeric() || ch == '-' || ch == '.')
		{
			self.bump();
			attribute_type = true;
		}
		if !attribute_type {
			return Err(self.malformed("missing attribute type"));
		}

		self.skip_spaces();
		if self.bump() != Some('=') {
			return Err(self.malformed("expected `=` after attribute type"));
		}
		self.skip_spaces();

		match self.peek() {
			Some('"') => self.quoted_value(),
			Some('#') => self.hex_value(),
			_ => self.string_value(),
		}
	}

	/// Parse a legacy quoted value, including the quotes.
	fn quoted_value(&mut self) -> Result<usize> {
		self.bump();
		loop {
			match self.bump() {
				None => return Err(self.malformed("unterminated quoted value")),
				Some('\\') => {
					if self.bump().is_none() {
						return Err(self.malformed("unterminated escape sequence"));
					}
				}
				Some('"') => break,
				Some(_) => {}
			}
		}
		let end = self.position();
		self.skip_spaces();
		if !self.at_value_end() {
			return Err(self.malformed("unexpected text after quoted value"));
		}
		Ok(end)
	}

	/// Parse a `#` prefixed BER encoded value.
	fn hex_value(&mut self) -> Result<usize> {
		self.bump();
		let mut digits = 0_usize;
		while matches!(self.peek(), Some(ch) if ch.is_ascii_hexdigit()) {
			self.bump();
			digits += 1;
		}
		if digits == 0 || digits % 2 != 0 {
			return Err(self.malformed("invalid hex string value"));
		}
		let end = self.position();
		self.skip_spaces();
		if !self.at_value_end() {
			return Err(self.malformed("invalid hex string value"));
		}
		Ok(end)
	}

	/// Parse a plain string value with backslash escapes.
	fn string_value(&mut self) -> Result<usize> {
		let mut end = self.position();
		while !self.at_value_end() {
			match self.bump() {
				Some('\\') => match self.bump() {
					None => return Err(self.malformed("unterminated escape sequence")),
					Some(ch) if ESCAPABLE.contains(&ch) => {}
					Some(ch) if ch.is_ascii_hexdigit() => {
						if !matches!(self.bump(), Some(ch) if ch.is_ascii_hexdigit()) {
							return Err(self.malformed("invalid hex escape"));
						}
					}
					Some(_) => return Err(self.malformed("invalid escape sequence")),
				},
				Some('"') => return Err(self.malformed("unescaped quote in value")),
				Some('<' | '>') => return Err(self.malformed("unescaped angle bracket in value")),
				Some(' ') => continue,
				_ => {}
			}
			end = self.position();
		}
		Ok(end)
	}
}
