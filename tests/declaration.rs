use script_literal::{const_bool, const_int, const_string, let_bool, let_int, let_string, Declaration, Statement};

fn assert_rendered(got: &Statement, expected: &str, fallback: bool) {
	assert_eq!(got, &expected);
	assert_eq!(got.is_fallback(), fallback, "is_fallback() of {:?}", got);
}

#[test]
fn let_string_values() {
	assert_rendered(&let_string("myVar", "hello"), r#"let myVar = "hello";"#, false);
	assert_rendered(&let_string("myVar", r#"he"llo"#), r#"let myVar = "he\"llo";"#, false);
	assert_rendered(&let_string("myVar", r"he\llo"), r#"let myVar = "he\\llo";"#, false);
	assert_rendered(&let_string("myVar", "</script>"), r#"let myVar = "\u003C/script\u003E";"#, false);
	assert_rendered(&let_string("myVar", ""), r#"let myVar = "";"#, false);
}

#[test]
fn let_string_invalid_names() {
	assert_rendered(&let_string("1-invalid", "hello"), r#"let </script> add By script_literal::let_string: 1-invalid = "hello";"#, true);
	assert_rendered(&let_string("1<invalid", "hello"), r#"let </script> add By script_literal::let_string: 1&lt;invalid = "hello";"#, true);
	assert_rendered(&let_string("", "hello"), r#"let </script> add By script_literal::let_string:  = "hello";"#, true);
}

#[test]
fn let_int_values() {
	assert_rendered(&let_int("myVar", 123), "let myVar = 123;", false);
	assert_rendered(&let_int("myVar", -123), "let myVar = -123;", false);
	assert_rendered(&let_int("myVar", 0), "let myVar = 0;", false);
	assert_rendered(&let_int("myVar", i64::MIN), "let myVar = -9223372036854775808;", false);
	assert_rendered(&let_int("myVar", u64::MAX), "let myVar = 18446744073709551615;", false);
	assert_rendered(&let_int("myVar", 7_u8), "let myVar = 7;", false);
	assert_rendered(&let_int("1-invalid", 42), "let </script> add By script_literal::let_int: 1-invalid = 42;", true);
	assert_rendered(&let_int("1<invalid", 42), "let </script> add By script_literal::let_int: 1&lt;invalid = 42;", true);
}

#[test]
fn let_bool_values() {
	assert_rendered(&let_bool("myVar", true), "let myVar = true;", false);
	assert_rendered(&let_bool("myVar", false), "let myVar = false;", false);
	assert_rendered(&let_bool("1-invalid", true), "let </script> add By script_literal::let_bool: 1-invalid = true;", true);
	assert_rendered(&let_bool("1<invalid", false), "let </script> add By script_literal::let_bool: 1&lt;invalid = false;", true);
}

#[test]
fn const_values() {
	assert_rendered(&const_string("myVar", "hello"), r#"const myVar = "hello";"#, false);
	assert_rendered(&const_string("1-invalid", "hello"), r#"const </script> add By script_literal::const_string: 1-invalid = "hello";"#, true);
	assert_rendered(&const_int("myVar", 123), "const myVar = 123;", false);
	assert_rendered(&const_int("1-invalid", 42), "const </script> add By script_literal::const_int: 1-invalid = 42;", true);
	assert_rendered(&const_bool("myVar", true), "const myVar = true;", false);
	assert_rendered(&const_bool("1-invalid", true), "const </script> add By script_literal::const_bool: 1-invalid = true;", true);
}

#[test]
fn declaration_methods_match_functions() {
	assert_eq!(Declaration::Let.string("a", "b"), let_string("a", "b"));
	assert_eq!(Declaration::Const.int("a-", 1), const_int("a-", 1));
	assert_eq!(Declaration::Const.bool("a", false), const_bool("a", false));
	assert_eq!(Declaration::Let.to_string(), "let");
	assert_eq!(Declaration::Const.keyword(), "const");
}

#[test]
fn fallback_names_are_html_escaped() {
	let statement = let_string(r#"<img src=x onerror="alert('x')">"#, "");
	assert!(statement.is_fallback());
	assert_eq!(
		statement,
		r#"let </script> add By script_literal::let_string: &lt;img src=x onerror=&#34;alert(&#39;x&#39;)&#34;&gt; = "";"#
	);
}

/// The part between `= "` and the final `";` must never let the string literal end early or close the script element.
fn assert_contained(value: &str) {
	let statement = let_string("value", value).into_string();
	let literal = statement.strip_prefix("let value = \"").and_then(|rest| rest.strip_suffix("\";")).unwrap();
	assert!(!literal.contains("</script"), "{:?}", literal);
	assert!(!literal.contains('<') && !literal.contains('>'), "{:?}", literal);

	let mut chars = literal.chars();
	while let Some(c) = chars.next() {
		match c {
			'\\' => assert!(chars.next().is_some(), "dangling backslash in {:?}", literal),
			'"' => panic!("unescaped quote in {:?}", literal),
			'\n' | '\r' | '\u{2028}' | '\u{2029}' => panic!("raw line terminator in {:?}", literal),
			_ => (),
		}
	}
}

#[test]
fn string_values_stay_contained() {
	for value in &[
		"\"",
		"\\",
		"\\\"",
		"</script>",
		"</SCRIPT >",
		"<!-- <script>",
		"\"; alert(1); //",
		"line\nbreak\r\n",
		"separators \u{2028} \u{2029}",
		"trailing backslash \\",
		"ＡＢＣ ✓ 😀",
	] {
		assert_contained(value);
	}
}

#[test]
fn rendering_is_deterministic() {
	assert_eq!(let_string("x", "</script> ü"), let_string("x", "</script> ü"));
	assert_eq!(let_string("1x", "y"), let_string("1x", "y"));
	assert_eq!(const_int("x", 5), const_int("x", 5));
}

#[test]
fn rendering_from_many_threads() {
	let handles: Vec<_> = (0..8)
		.map(|i| std::thread::spawn(move || (0..100).map(|j| let_int("n", i * 100 + j).into_string()).collect::<Vec<_>>()))
		.collect();
	for (i, handle) in handles.into_iter().enumerate() {
		let rendered = handle.join().unwrap();
		assert_eq!(rendered[0], format!("let n = {};", i * 100));
		assert_eq!(rendered.len(), 100);
	}
}
