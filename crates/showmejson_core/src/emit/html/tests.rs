use serde_json::json;

use super::{DEFAULT_STYLES, HtmlEmitter, escape_html};
use crate::emit::{Emitter, to_html};
use crate::inspect::{RenderOptions, Value, render};

fn plain() -> RenderOptions {
	RenderOptions {
		include_styles: false,
		add_color: false,
		..RenderOptions::default()
	}
}

#[test]
fn root_leaf_is_a_single_item_row() {
	let html = to_html(&Value::I64(42), &plain());
	assert_eq!(
		html,
		concat!(
			r#"<div class="showmejson">"#,
			r#"<div class="showmejson__single-item"><span class="showmejson__label"></span><span class="showmejson__value">42</span></div>"#,
			"</div>"
		)
	);
}

#[test]
fn object_renders_open_details_with_labeled_rows() {
	let html = to_html(&Value::from(json!({ "a": 1, "b": "x" })), &plain());
	assert_eq!(
		html,
		concat!(
			r#"<div class="showmejson"><details open><summary>[Object]</summary>"#,
			r#"<div class="showmejson__single-item"><span class="showmejson__label">a:</span><span class="showmejson__value">1</span></div>"#,
			r#"<div class="showmejson__single-item"><span class="showmejson__label">b:</span><span class="showmejson__value">&quot;x&quot;</span></div>"#,
			"</details></div>"
		)
	);
}

#[test]
fn named_containers_start_closed() {
	let html = to_html(&Value::from(json!({ "inner": [] })), &plain());
	assert!(html.contains("<details open><summary>[Object]</summary><details><summary>inner</summary></details></details>"));
}

#[test]
fn color_option_tags_values_and_container() {
	let options = RenderOptions {
		include_styles: false,
		..RenderOptions::default()
	};
	let html = to_html(&Value::from(json!([null, true])), &options);

	assert!(html.starts_with(r#"<div class="showmejson showmejson--color">"#));
	assert!(html.contains(r#"<span class="showmejson__value showmejson__value--nothing">null</span>"#));
	assert!(html.contains(r#"<span class="showmejson__value showmejson__value--boolean">true</span>"#));
}

#[test]
fn styles_are_injected_only_when_requested() {
	let with_styles = to_html(&Value::Null, &RenderOptions::default());
	assert!(with_styles.contains(&format!("<style>{DEFAULT_STYLES}</style>")));

	let without = to_html(&Value::Null, &plain());
	assert!(!without.contains("<style>"));
}

#[test]
fn text_content_is_escaped() {
	let html = to_html(&Value::from(json!({ "<b>": "a & b" })), &plain());
	assert!(html.contains("&lt;b&gt;:"));
	assert!(html.contains("&quot;a &amp; b&quot;"));
	assert!(!html.contains("<b>"));
}

#[test]
fn emitter_preserves_child_order() {
	let value = Value::from(json!({ "z": 1, "y": 2, "x": 3 }));
	let options = plain();
	let html = HtmlEmitter.emit(&render(&value, &options), &options);

	let z = html.find("z:").expect("z row");
	let y = html.find("y:").expect("y row");
	let x = html.find("x:").expect("x row");
	assert!(z < y && y < x);
}

#[test]
fn escape_covers_quotes() {
	assert_eq!(escape_html(r#"'"&<>"#), "&#39;&quot;&amp;&lt;&gt;");
}
