//! Lexical validation of JavaScript binding names.
//!
//! This approximates the [***IdentifierName***](https://tc39.es/ecma262/#prod-IdentifierName) production
//! in terms of Unicode general categories and binary properties.
//! It's purely lexical: Reserved words like `let` or `class` are accepted.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Whether `c` may start an identifier.
///
/// That's `_`, `$` and letters (including letter numbers and [***Other_ID_Start***](https://www.unicode.org/reports/tr31/#Backward_Compatibility))
/// that are neither [***Pattern_Syntax***](https://www.unicode.org/reports/tr31/#Pattern_Syntax) nor [***Pattern_White_Space***](https://www.unicode.org/reports/tr31/#Pattern_White_Space).
#[must_use]
pub fn is_id_start(c: char) -> bool {
	c == '_' || c == '$' || ((is_letter(c) || is_other_id_start(c)) && !is_pattern(c))
}

/// Whether `c` may appear after the first code point of an identifier.
#[must_use]
pub fn is_id_continue(c: char) -> bool {
	c == '$'
		|| ((is_letter(c)
			|| is_other_id_start(c)
			|| matches!(
				get_general_category(c),
				GeneralCategory::NonspacingMark | GeneralCategory::SpacingMark | GeneralCategory::DecimalNumber | GeneralCategory::ConnectorPunctuation
			) || is_other_id_continue(c)
			// ZERO WIDTH NON-JOINER, ZERO WIDTH JOINER, KATAKANA MIDDLE DOT, HALFWIDTH KATAKANA MIDDLE DOT
			|| matches!(c, '\u{200C}' | '\u{200D}' | '\u{30FB}' | '\u{FF65}'))
			&& !is_pattern(c))
}

/// Checks whether `name` can be used as a binding name, e.g. on the left of `let name = …;`.
///
/// ```
/// use script_literal::identifier::is_identifier;
///
/// assert!(is_identifier("myVar"));
/// assert!(is_identifier("$"));
/// assert!(is_identifier("変数"));
/// assert!(is_identifier("let"));
///
/// assert!(!is_identifier(""));
/// assert!(!is_identifier("1myVar"));
/// assert!(!is_identifier("my-var"));
/// ```
#[must_use]
pub fn is_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) => is_id_start(first) && chars.all(is_id_continue),
		None => false,
	}
}

/// Checks whether `path` is a dotted property access like `a.b.c` where each segment is an [identifier](`is_identifier`).
///
/// Empty segments (as in `a..b` or `.a`) make the whole path invalid.
///
/// ```
/// use script_literal::identifier::is_property_path;
///
/// assert!(is_property_path("window.app.state"));
/// assert!(!is_property_path("a.1b.c"));
/// assert!(!is_property_path("a."));
/// ```
#[must_use]
pub fn is_property_path(path: &str) -> bool {
	path.split('.').all(is_identifier)
}

fn is_letter(c: char) -> bool {
	matches!(
		get_general_category(c),
		GeneralCategory::UppercaseLetter
			| GeneralCategory::LowercaseLetter
			| GeneralCategory::TitlecaseLetter
			| GeneralCategory::ModifierLetter
			| GeneralCategory::OtherLetter
			| GeneralCategory::LetterNumber
	)
}

fn is_pattern(c: char) -> bool {
	is_pattern_syntax(c) || is_pattern_white_space(c)
}

// Binary property tables below are from Unicode 15.0 PropList.txt.

fn is_other_id_start(c: char) -> bool {
	matches!(c, '\u{1885}'..='\u{1886}' | '\u{2118}' | '\u{212E}' | '\u{309B}'..='\u{309C}')
}

fn is_other_id_continue(c: char) -> bool {
	matches!(c, '\u{B7}' | '\u{387}' | '\u{1369}'..='\u{1371}' | '\u{19DA}')
}

fn is_pattern_white_space(c: char) -> bool {
	matches!(c, '\u{9}'..='\u{D}' | ' ' | '\u{85}' | '\u{200E}'..='\u{200F}' | '\u{2028}'..='\u{2029}')
}

fn is_pattern_syntax(c: char) -> bool {
	matches!(
		c,
		'\u{21}'..='\u{2F}'
			| '\u{3A}'..='\u{40}'
			| '\u{5B}'..='\u{5E}'
			| '\u{60}'
			| '\u{7B}'..='\u{7E}'
			| '\u{A1}'..='\u{A7}'
			| '\u{A9}'
			| '\u{AB}'..='\u{AC}'
			| '\u{AE}'
			| '\u{B0}'..='\u{B1}'
			| '\u{B6}'
			| '\u{BB}'
			| '\u{BF}'
			| '\u{D7}'
			| '\u{F7}'
			| '\u{2010}'..='\u{2027}'
			| '\u{2030}'..='\u{203E}'
			| '\u{2041}'..='\u{2053}'
			| '\u{2055}'..='\u{205E}'
			| '\u{2190}'..='\u{245F}'
			| '\u{2500}'..='\u{2775}'
			| '\u{2794}'..='\u{2BFF}'
			| '\u{2E00}'..='\u{2E7F}'
			| '\u{3001}'..='\u{3003}'
			| '\u{3008}'..='\u{3020}'
			| '\u{3030}'
			| '\u{FD3E}'..='\u{FD3F}'
			| '\u{FE45}'..='\u{FE46}'
	)
}
