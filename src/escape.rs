//! Escapers for text that ends up inside an inline `<script>` element.
//!
//! None of the outputs here can contain `<` or `>` verbatim (outside of HTML entities in [`escape_html`]),
//! so they can't form a closing `</script>` tag.

use serde::{ser::Error as _, Serialize};
use serde_json::ser::{Formatter, Serializer};
use std::io;
use unicode_general_category::{get_general_category, GeneralCategory};

mod canonical;

use canonical::Canonical;

const UPPER_HEX: &[u8; 16] = b"0123456789ABCDEF";
const LOWER_HEX: &[u8; 16] = b"0123456789abcdef";

/// Formats one UTF-16 code unit as a six-byte `\uXXXX` escape.
fn unicode_escape(unit: u16, digits: &[u8; 16]) -> [u8; 6] {
	let digit = |shift: u16| digits[usize::from(unit >> shift & 0xF)];
	[b'\\', b'u', digit(12), digit(8), digit(4), digit(0)]
}

fn push_unicode_escape(escaped: &mut String, c: char) {
	let mut units = [0; 2];
	for &unit in c.encode_utf16(&mut units).iter() {
		escaped.extend(unicode_escape(unit, UPPER_HEX).iter().copied().map(char::from));
	}
}

/// Whether a non-ASCII code point is visible text.
/// Separators, controls, format characters, private use and unassigned code points aren't.
fn is_printable(c: char) -> bool {
	!matches!(
		get_general_category(c),
		GeneralCategory::SpaceSeparator
			| GeneralCategory::LineSeparator
			| GeneralCategory::ParagraphSeparator
			| GeneralCategory::Control
			| GeneralCategory::Format
			| GeneralCategory::Surrogate
			| GeneralCategory::PrivateUse
			| GeneralCategory::Unassigned
	)
}

/// Escapes `value` for use between the quotes of a JavaScript string literal.
///
/// Backslashes and both quote characters are backslash-escaped.
/// `<`, `>`, `&`, `=`, ASCII control characters and non-printable non-ASCII code points are written as `\uXXXX` escapes
/// (as surrogate pairs outside the Basic Multilingual Plane).
#[must_use]
pub fn escape_js_string(value: &str) -> String {
	let mut escaped = String::with_capacity(value.len());
	for c in value.chars() {
		match c {
			'\\' => escaped.push_str(r"\\"),
			'\'' => escaped.push_str(r"\'"),
			'"' => escaped.push_str(r#"\""#),
			'<' | '>' | '&' | '=' => push_unicode_escape(&mut escaped, c),
			c if c < ' ' => push_unicode_escape(&mut escaped, c),
			c if !c.is_ascii() && !is_printable(c) => push_unicode_escape(&mut escaped, c),
			c => escaped.push(c),
		}
	}
	escaped
}

/// Escapes `&`, `'`, `<`, `>` and `"` as HTML character references.
#[must_use]
pub fn escape_html(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'\'' => escaped.push_str("&#39;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&#34;"),
			c => escaped.push(c),
		}
	}
	escaped
}

/// A compact [`Formatter`] that additionally escapes `<`, `>`, `&`, U+2028 and U+2029 inside strings and object keys.
///
/// The output is still plain JSON and evaluates to the same value when embedded in JavaScript.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlSafeFormatter;
impl Formatter for HtmlSafeFormatter {
	fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
	where
		W: ?Sized + io::Write,
	{
		let mut start = 0;
		for (i, c) in fragment.char_indices() {
			let unit = match c {
				'<' => 0x3C,
				'>' => 0x3E,
				'&' => 0x26,
				'\u{2028}' => 0x2028,
				'\u{2029}' => 0x2029,
				_ => continue,
			};
			writer.write_all(fragment[start..i].as_bytes())?;
			writer.write_all(&unicode_escape(unit, LOWER_HEX))?;
			start = i + c.len_utf8();
		}
		writer.write_all(fragment[start..].as_bytes())
	}
}

/// Serializes `value` as compact JSON through [`HtmlSafeFormatter`].
///
/// Map entries are written sorted by key, so equal maps always render the same text regardless of their iteration order.
/// Struct fields keep their declaration order.
///
/// # Errors
///
/// Iff `value`'s [`Serialize`] implementation fails or it can't be represented as JSON,
/// e.g. a map with non-string keys or a `NaN` or infinite float.
pub fn to_html_safe_json<T>(value: &T) -> serde_json::Result<String>
where
	T: ?Sized + Serialize,
{
	let canonical = value.serialize(Canonical)?;
	let mut buffer = Vec::with_capacity(128);
	canonical.serialize(&mut Serializer::with_formatter(&mut buffer, HtmlSafeFormatter))?;
	String::from_utf8(buffer).map_err(serde_json::Error::custom)
}
