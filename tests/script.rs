use script_literal::{assign_bool, const_string, let_int, let_json, let_string, Script, Statement};

#[test]
fn empty() {
	let script = Script::new();
	assert!(script.is_empty());
	assert_eq!(script.text(), "");
	assert_eq!(script.to_element(), "<script>\n\n</script>");
	assert!(!script.has_fallback());
}

#[test]
fn statements_one_per_line() {
	let mut script = Script::new();
	script.push(let_string("a", "x")).push(let_int("b", 2)).push(assign_bool("c.d", true));

	assert_eq!(script.len(), 3);
	assert_eq!(script.text(), "let a = \"x\";\nlet b = 2;\nc.d = true;");
	assert_eq!(script.to_string(), script.text());
	assert_eq!(script.to_element(), "<script>\nlet a = \"x\";\nlet b = 2;\nc.d = true;\n</script>");
}

#[test]
fn tracks_fallbacks() {
	let mut script: Script = vec![let_string("a", "x")].into_iter().collect();
	assert!(!script.has_fallback());

	script.extend(vec![const_string("not valid", "y")]);
	assert!(script.has_fallback());
	assert_eq!(script.iter().filter(|statement| statement.is_fallback()).count(), 1);
	assert_eq!(script.to_element().matches("</script>").count(), 2);
}

#[test]
fn with_json() -> Result<(), script_literal::Error> {
	let mut script = Script::new();
	script.push(let_json("items", &["</script>"])?);
	let statements: Vec<&Statement> = (&script).into_iter().collect();
	assert_eq!(statements.len(), 1);
	assert_eq!(script.to_element().matches("</script>").count(), 1);
	Ok(())
}
