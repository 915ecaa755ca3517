use script_literal::{assign_bool, assign_int, assign_string};

#[test]
fn simple_names() {
	assert_eq!(assign_string("myVar", "hello"), r#"myVar = "hello";"#);
	assert_eq!(assign_int("myVar", -1), "myVar = -1;");
	assert_eq!(assign_bool("myVar", true), "myVar = true;");
}

#[test]
fn property_paths() {
	let statement = assign_string("app.config.title", "</script>");
	assert!(!statement.is_fallback());
	assert_eq!(statement, r#"app.config.title = "\u003C/script\u003E";"#);

	assert_eq!(assign_int("window.$state._count", 3), "window.$state._count = 3;");
	assert_eq!(assign_bool("a.let", false), "a.let = false;");
}

#[test]
fn invalid_paths() {
	let statement = assign_string("a.1b.c", "x");
	assert!(statement.is_fallback());
	assert_eq!(statement, r#"</script> add By script_literal::assign_string: a.1b.c = "x";"#);

	assert_eq!(assign_int("a..b", 1), "</script> add By script_literal::assign_int: a..b = 1;");
	assert_eq!(assign_bool("a.b-c", true), "</script> add By script_literal::assign_bool: a.b-c = true;");
	assert_eq!(assign_bool(r#"x"y"#, true), "</script> add By script_literal::assign_bool: x&#34;y = true;");
	assert_eq!(assign_int("", 0), "</script> add By script_literal::assign_int:  = 0;");
}
