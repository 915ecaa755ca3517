#![doc(html_root_url = "https://docs.rs/script-literal/0.0.1")]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Renders JavaScript `let`/`const` declarations and assignments that can be pasted into the text of an inline
//! [***script***](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/script) element as-is.
//!
//! Values are encoded so that they can never close the surrounding element.
//! Binding names are checked against an approximation of the ECMAScript identifier grammar, see [`identifier`].
//!
//! ```
//! use script_literal::{assign_bool, let_string};
//!
//! assert_eq!(let_string("greeting", "Hi!"), r#"let greeting = "Hi!";"#);
//! assert_eq!(assign_bool("app.ready", true), "app.ready = true;");
//!
//! let broken = let_string("not-a-name", "");
//! assert!(broken.is_fallback());
//! assert!(broken.starts_with("let </script> add By script_literal::let_string: "));
//! ```
//!
//! # Features
//!
//! ## `"dangerous-logging"`
//!
//! Includes rejected binding names in [`tracing`] events.
//! Without it, warnings only name the rendering function.

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

mod error;
pub mod escape;
pub mod identifier;
mod script;
mod statement;

pub use error::Error;
pub use script::Script;
pub use statement::{
	assign_bool, assign_int, assign_json, assign_string,
	const_bool, const_int, const_json, const_string,
	let_bool, let_int, let_json, let_string,
	Declaration, Statement,
};
