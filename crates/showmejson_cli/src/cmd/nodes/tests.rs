use crate::cmd::test_support::{fixture_path, run_showmejson_json};

#[test]
fn nodes_json_includes_resolved_options_and_tree() {
	let fixture = fixture_path("sample.json");
	let json = run_showmejson_json(&["nodes", &fixture, "--max-depth", "1"]);

	assert_eq!(json["options"]["maxDepth"], 1);
	assert_eq!(json["options"]["includeStyles"], true);
	assert_eq!(json["tree"]["kind"], "container");
	assert_eq!(json["tree"]["expanded_by_default"], true);

	let children = json["tree"]["children"].as_array().expect("children array");
	let names: Vec<&str> = children.iter().filter_map(|child| child["name"].as_str()).collect();
	assert_eq!(names, ["name", "version", "ratio", "published", "license", "notes", "tags", "owner"]);
	assert_eq!(children[7]["kind"], "leaf");
	assert_eq!(children[7]["text"], "Object {...}");
	assert_eq!(children[4]["style"], "nothing");
}

#[test]
fn nodes_pretty_output_is_still_valid_json() {
	let fixture = fixture_path("options.json");
	let json = run_showmejson_json(&["nodes", &fixture, "--pretty"]);

	assert_eq!(json["tree"]["type_name"], "Object");
	assert_eq!(json["tree"]["children"][2]["name"], "theme");
}
