use crate::emit::Emitter;
use crate::inspect::{RenderNode, RenderOptions};

/// Stylesheet injected when `include_styles` is set. Color rules key off the leaf style categories.
pub const DEFAULT_STYLES: &str = r#"
.showmejson {
	--smj-border-color: #CCCCCC;
	--smj-border-radius: 4px;
	--smj-spacing: 0.5rem;
	display: block;
	padding: var(--smj-spacing);
	margin: var(--smj-spacing);
	border: 1px solid var(--smj-border-color);
	border-radius: var(--smj-border-radius);
}
.showmejson > details {
	margin: 0;
}
.showmejson details {
	border: 1px solid #aaa;
	border-radius: 4px;
	padding: var(--smj-spacing);
	margin: var(--smj-spacing) 0;
}
.showmejson summary {
	margin: calc(-1 * var(--smj-spacing));
	padding: 0;
	cursor: pointer;
}
.showmejson .showmejson__single-item {
	display: flex;
	gap: 1rem;
	margin: 0.5em 0px;
	font-family: monospace, monospace;
	white-space: pre;
}
.showmejson .showmejson__value--text {
	color: #080;
}
.showmejson .showmejson__value--number,
.showmejson .showmejson__value--boolean {
	color: #FF4488;
}
.showmejson .showmejson__value--date {
	color: #0033FF;
}
.showmejson .showmejson__value--nothing {
	color: #6B548C;
	font-style: oblique;
}
.showmejson .showmejson__value--symbol,
.showmejson .showmejson__value--object {
	color: #804040;
}
"#;

/// Emits an HTML fragment: `<details>` per container, a label/value row per leaf.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEmitter;

impl Emitter for HtmlEmitter {
	type Output = String;

	fn emit(&self, tree: &RenderNode, options: &RenderOptions) -> String {
		let mut out = String::new();
		if options.add_color {
			out.push_str(r#"<div class="showmejson showmejson--color">"#);
		} else {
			out.push_str(r#"<div class="showmejson">"#);
		}
		if options.include_styles {
			out.push_str("<style>");
			out.push_str(DEFAULT_STYLES);
			out.push_str("</style>");
		}
		write_node(&mut out, tree, options.add_color);
		out.push_str("</div>");
		out
	}
}

fn write_node(out: &mut String, node: &RenderNode, add_color: bool) {
	match node {
		RenderNode::Leaf { style, text, .. } => {
			out.push_str(r#"<div class="showmejson__single-item"><span class="showmejson__label">"#);
			out.push_str(&escape_html(&node.label()));
			out.push_str("</span>");
			if add_color {
				out.push_str(&format!(r#"<span class="showmejson__value showmejson__value--{}">"#, style.as_str()));
			} else {
				out.push_str(r#"<span class="showmejson__value">"#);
			}
			out.push_str(&escape_html(text));
			out.push_str("</span></div>");
		}
		RenderNode::Container {
			expanded_by_default,
			children,
			..
		} => {
			out.push_str(if *expanded_by_default { "<details open>" } else { "<details>" });
			out.push_str("<summary>");
			out.push_str(&escape_html(&node.header()));
			out.push_str("</summary>");
			for child in children {
				write_node(out, child, add_color);
			}
			out.push_str("</details>");
		}
	}
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for ch in input.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			c => out.push(c),
		}
	}
	out
}

#[cfg(test)]
mod tests;
