use crate::cmd::test_support::{fixture_path, run_showmejson, run_showmejson_stdin, stdout_of};

#[test]
fn tree_prints_indented_fixture() {
	let fixture = fixture_path("sample.json");
	let stdout = stdout_of(&run_showmejson(&["tree", &fixture, "--no-color", "--max-depth", "2"]));

	let expected = "\
▾ [Object]
  name: \"showmejson\"
  version: 3
  ratio: 0.5
  published: true
  license: null
  notes: \"first line\\n
         second line\"
  ▸ tags
    0: \"inspector\"
    1: \"tree\"
  ▸ owner
    handle: \"<maintainer>\"
    address: Object {...}
";
	assert_eq!(stdout, expected);
}

#[test]
fn negative_depth_collapses_root() {
	let stdout = stdout_of(&run_showmejson_stdin(&["tree", "--no-color", "--max-depth", "-3"], r#"{"a": 1}"#));
	assert_eq!(stdout, "Object {...}\n");
}

#[test]
fn indent_flag_changes_nesting_width() {
	let stdout = stdout_of(&run_showmejson_stdin(&["tree", "--no-color", "--indent", "4"], r#"{"a": [true]}"#));
	assert_eq!(stdout, "▾ [Object]\n    ▸ a\n        0: true\n");
}
