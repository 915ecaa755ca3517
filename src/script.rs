use crate::Statement;
use core::{
	fmt::{self, Display, Formatter},
	iter::FromIterator,
	slice,
};
use tracing::{trace, warn};

/// An ordered list of [`Statement`]s that make up the text of one inline [***script***](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/script) element.
///
/// ```
/// use script_literal::{const_int, let_json, let_string, Script};
///
/// let mut script = Script::new();
/// script
/// 	.push(let_string("title", "Hello </script>"))
/// 	.push(const_int("retries", 3))
/// 	.push(let_json("tags", &["a", "b"])?);
///
/// assert!(!script.has_fallback());
/// assert!(!script.text().contains("</script>"));
/// # Ok::<(), script_literal::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
	statements: Vec<Statement>,
}
impl Script {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, statement: Statement) -> &mut Self {
		self.statements.push(statement);
		self
	}

	/// Whether any statement was rendered with a rejected binding name.
	#[must_use]
	pub fn has_fallback(&self) -> bool {
		self.statements.iter().any(Statement::is_fallback)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.statements.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.statements.is_empty()
	}

	pub fn iter(&self) -> slice::Iter<'_, Statement> {
		self.statements.iter()
	}

	/// The statements, one per line.
	#[must_use]
	pub fn text(&self) -> String {
		let mut text = String::with_capacity(self.statements.iter().map(|statement| statement.len() + 1).sum());
		for (i, statement) in self.statements.iter().enumerate() {
			if i > 0 {
				text.push('\n');
			}
			text.push_str(statement);
		}
		text
	}

	/// Wraps [`Script::text`] in `<script>` tags.
	///
	/// The text needs no further escaping, since no statement can contain a closing tag
	/// unless it's a [fallback](`Statement::Fallback`), which is meant to break out.
	#[must_use]
	pub fn to_element(&self) -> String {
		let fallback_count = self.statements.iter().filter(|statement| statement.is_fallback()).count();
		if fallback_count > 0 {
			warn!("Script element contains {} inert fallback statement(s).", fallback_count);
		}
		trace!("Rendering script element with {} statement(s).", self.statements.len());
		format!("<script>\n{}\n</script>", self.text())
	}
}
impl Display for Script {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.text())
	}
}
impl Extend<Statement> for Script {
	fn extend<T: IntoIterator<Item = Statement>>(&mut self, iter: T) {
		self.statements.extend(iter);
	}
}
impl FromIterator<Statement> for Script {
	fn from_iter<T: IntoIterator<Item = Statement>>(iter: T) -> Self {
		Self {
			statements: iter.into_iter().collect(),
		}
	}
}
impl<'a> IntoIterator for &'a Script {
	type Item = &'a Statement;
	type IntoIter = slice::Iter<'a, Statement>;

	fn into_iter(self) -> Self::IntoIter {
		self.statements.iter()
	}
}
