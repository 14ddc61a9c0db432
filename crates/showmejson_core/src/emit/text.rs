use owo_colors::{OwoColorize, Style};

use crate::emit::Emitter;
use crate::inspect::{RenderNode, RenderOptions, StyleCategory};

/// Emits an indented tree, one line per node.
///
/// Containers show `▾` when expanded by default and `▸` otherwise; every subtree is printed.
#[derive(Debug, Clone, Copy)]
pub struct TextEmitter {
	/// Spaces added per nesting level.
	pub indent_width: usize,
}

impl Default for TextEmitter {
	fn default() -> Self {
		Self { indent_width: 2 }
	}
}

impl Emitter for TextEmitter {
	type Output = String;

	fn emit(&self, tree: &RenderNode, options: &RenderOptions) -> String {
		let mut out = String::new();
		self.write_node(&mut out, tree, 0, options.add_color);
		out
	}
}

impl TextEmitter {
	fn write_node(&self, out: &mut String, node: &RenderNode, indent: usize, add_color: bool) {
		let pad = " ".repeat(indent);
		match node {
			RenderNode::Leaf { style, text, .. } => {
				let label = node.label();
				// Continuation lines of multi-line strings stay under the value column.
				let continuation = format!("\n{pad}{}", " ".repeat(if label.is_empty() { 0 } else { label.chars().count() + 1 }));
				let text = text.replace('\n', &continuation);
				let text = if add_color {
					text.style(category_style(*style)).to_string()
				} else {
					text
				};
				if label.is_empty() {
					out.push_str(&format!("{pad}{text}\n"));
				} else {
					out.push_str(&format!("{pad}{label} {text}\n"));
				}
			}
			RenderNode::Container {
				expanded_by_default,
				children,
				..
			} => {
				let marker = if *expanded_by_default { '▾' } else { '▸' };
				out.push_str(&format!("{pad}{marker} {}\n", node.header()));
				for child in children {
					self.write_node(out, child, indent + self.indent_width, add_color);
				}
			}
		}
	}
}

fn category_style(category: StyleCategory) -> Style {
	match category {
		StyleCategory::Text => Style::new().green(),
		StyleCategory::Number | StyleCategory::Boolean => Style::new().magenta(),
		StyleCategory::Date => Style::new().blue(),
		StyleCategory::Nothing => Style::new().purple().italic(),
		StyleCategory::Symbol | StyleCategory::Object => Style::new().red(),
	}
}
