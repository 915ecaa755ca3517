//! Rendering of `let`/`const` declarations and assignments.
//!
//! # Invalid names
//!
//! The string, integer and boolean renderers never fail.
//! If the binding name isn't valid, it's replaced with `</script> add By <origin>: <escaped name>`,
//! which closes the surrounding [***script***](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/script) element
//! and leaves visibly broken, inert text behind. Such statements are [`Statement::Fallback`].
//!
//! The JSON renderers instead return an [`Error`], both for invalid names and for failed serialization.

use crate::{
	escape::{escape_html, escape_js_string, to_html_safe_json},
	identifier::{is_identifier, is_property_path},
	Error,
};
use core::{
	fmt::{self, Display, Formatter},
	ops::Deref,
};
use num_traits::PrimInt;
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Path of a renderer as it appears in fallback output, e.g. `script_literal::let_string`.
macro_rules! origin {
	($function:literal) => {
		concat!(env!("CARGO_CRATE_NAME"), "::", $function)
	};
}

/// A rendered JavaScript statement, terminated with `;`.
///
/// Both variants hold the complete statement text. Use [`Statement::is_fallback`] to find out whether the binding name was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub enum Statement {
	Valid(String),
	/// The binding name was invalid and replaced with an inert, script-closing marker.
	Fallback(String),
}
impl Statement {
	#[must_use]
	pub fn as_str(&self) -> &str {
		match self {
			Statement::Valid(text) | Statement::Fallback(text) => text,
		}
	}

	#[must_use]
	pub fn into_string(self) -> String {
		match self {
			Statement::Valid(text) | Statement::Fallback(text) => text,
		}
	}

	#[must_use]
	pub fn is_fallback(&self) -> bool {
		matches!(self, Statement::Fallback(_))
	}
}
impl Display for Statement {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
impl Deref for Statement {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		self.as_str()
	}
}
impl AsRef<str> for Statement {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}
impl From<Statement> for String {
	fn from(statement: Statement) -> Self {
		statement.into_string()
	}
}
impl PartialEq<str> for Statement {
	fn eq(&self, other: &str) -> bool {
		self.as_str() == other
	}
}
impl PartialEq<&str> for Statement {
	fn eq(&self, other: &&str) -> bool {
		self.as_str() == *other
	}
}
impl PartialEq<String> for Statement {
	fn eq(&self, other: &String) -> bool {
		self.as_str() == other
	}
}

/// The keyword a declaration starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Declaration {
	Let,
	Const,
}
impl Declaration {
	#[must_use]
	pub fn keyword(self) -> &'static str {
		match self {
			Declaration::Let => "let",
			Declaration::Const => "const",
		}
	}

	/// Renders `<keyword> name = "value";` with `value` escaped as a JavaScript string.
	pub fn string(self, name: &str, value: &str) -> Statement {
		let origin = match self {
			Declaration::Let => origin!("let_string"),
			Declaration::Const => origin!("const_string"),
		};
		self.declare(origin, name, string_literal(value))
	}

	/// Renders `<keyword> name = value;` with `value` in decimal.
	pub fn int<T: PrimInt + Display>(self, name: &str, value: T) -> Statement {
		let origin = match self {
			Declaration::Let => origin!("let_int"),
			Declaration::Const => origin!("const_int"),
		};
		self.declare(origin, name, value)
	}

	pub fn bool(self, name: &str, value: bool) -> Statement {
		let origin = match self {
			Declaration::Let => origin!("let_bool"),
			Declaration::Const => origin!("const_bool"),
		};
		self.declare(origin, name, value)
	}

	/// Renders `<keyword> name = <json>;` with `value` serialized as compact, HTML-safe JSON.
	///
	/// # Errors
	///
	/// - [`Error::InvalidIdentifier`] iff `name` isn't an [identifier](`is_identifier`),
	/// - [`Error::Serialization`] iff `value` can't be serialized as JSON.
	#[instrument(level = "trace", skip_all, fields(declaration = self.keyword()))]
	pub fn json<T: ?Sized + Serialize>(self, name: &str, value: &T) -> Result<Statement, Error> {
		if !is_identifier(name) {
			return Err(rejected(Error::InvalidIdentifier(name.to_owned())));
		}
		let json = to_html_safe_json(value).map_err(|error| rejected(error.into()))?;
		Ok(Statement::Valid(format!("{} {} = {};", self, name, json)))
	}

	#[instrument(level = "trace", skip_all, fields(origin = origin))]
	fn declare(self, origin: &'static str, name: &str, literal: impl Display) -> Statement {
		if is_identifier(name) {
			Statement::Valid(format!("{} {} = {};", self, name, literal))
		} else {
			Statement::Fallback(format!("{} {} = {};", self, fallback_name(origin, name), literal))
		}
	}
}
impl Display for Declaration {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.keyword())
	}
}

fn string_literal(value: &str) -> String {
	format!("\"{}\"", escape_js_string(value))
}

fn fallback_name(origin: &'static str, name: &str) -> String {
	if cfg!(feature = "dangerous-logging") {
		warn!(origin, name, "Invalid binding name. Rendering an inert `</script>` fallback instead.");
	} else {
		warn!(origin, "Invalid binding name. Rendering an inert `</script>` fallback instead.");
	}
	format!("</script> add By {}: {}", origin, escape_html(name))
}

fn rejected(error: Error) -> Error {
	match &error {
		Error::InvalidIdentifier(name) if cfg!(feature = "dangerous-logging") => debug!(name = name.as_str(), "Invalid binding name for JSON value."),
		Error::InvalidIdentifier(_) => debug!("Invalid binding name for JSON value."),
		Error::Serialization(source) => debug!(%source, "JSON serialization failed."),
	}
	error
}

#[instrument(level = "trace", skip_all, fields(origin = origin))]
fn assign(origin: &'static str, path: &str, literal: impl Display) -> Statement {
	if is_property_path(path) {
		Statement::Valid(format!("{} = {};", path, literal))
	} else {
		Statement::Fallback(format!("{} = {};", fallback_name(origin, path), literal))
	}
}

/// `let name = "value";`
pub fn let_string(name: &str, value: &str) -> Statement {
	Declaration::Let.string(name, value)
}

/// `let name = value;`
pub fn let_int<T: PrimInt + Display>(name: &str, value: T) -> Statement {
	Declaration::Let.int(name, value)
}

/// `let name = true;` or `let name = false;`
pub fn let_bool(name: &str, value: bool) -> Statement {
	Declaration::Let.bool(name, value)
}

/// `let name = <json>;`
///
/// # Errors
///
/// See [`Declaration::json`].
pub fn let_json<T: ?Sized + Serialize>(name: &str, value: &T) -> Result<Statement, Error> {
	Declaration::Let.json(name, value)
}

/// `const name = "value";`
pub fn const_string(name: &str, value: &str) -> Statement {
	Declaration::Const.string(name, value)
}

/// `const name = value;`
pub fn const_int<T: PrimInt + Display>(name: &str, value: T) -> Statement {
	Declaration::Const.int(name, value)
}

/// `const name = true;` or `const name = false;`
pub fn const_bool(name: &str, value: bool) -> Statement {
	Declaration::Const.bool(name, value)
}

/// `const name = <json>;`
///
/// # Errors
///
/// See [`Declaration::json`].
pub fn const_json<T: ?Sized + Serialize>(name: &str, value: &T) -> Result<Statement, Error> {
	Declaration::Const.json(name, value)
}

/// `path = "value";`, where `path` may be a dotted [property path](`is_property_path`) like `app.config.title`.
pub fn assign_string(path: &str, value: &str) -> Statement {
	assign(origin!("assign_string"), path, string_literal(value))
}

/// `path = value;`
pub fn assign_int<T: PrimInt + Display>(path: &str, value: T) -> Statement {
	assign(origin!("assign_int"), path, value)
}

/// `path = true;` or `path = false;`
pub fn assign_bool(path: &str, value: bool) -> Statement {
	assign(origin!("assign_bool"), path, value)
}

/// `path = <json>;`
///
/// # Errors
///
/// - [`Error::InvalidIdentifier`] iff `path` isn't a valid [property path](`is_property_path`),
/// - [`Error::Serialization`] iff `value` can't be serialized as JSON.
#[instrument(level = "trace", skip_all)]
pub fn assign_json<T: ?Sized + Serialize>(path: &str, value: &T) -> Result<Statement, Error> {
	if !is_property_path(path) {
		return Err(rejected(Error::InvalidIdentifier(path.to_owned())));
	}
	let json = to_html_safe_json(value).map_err(|error| rejected(error.into()))?;
	Ok(Statement::Valid(format!("{} = {};", path, json)))
}
