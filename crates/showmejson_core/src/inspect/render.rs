use crate::inspect::classify::{TypeTag, classify, display_type_name, own_entries};
use crate::inspect::format::{format_date, format_number, format_string};
use crate::inspect::node::{RenderNode, StyleCategory};
use crate::inspect::options::RenderOptions;
use crate::inspect::value::Value;

/// Build the render tree for `value`, starting un-named with the full depth budget.
///
/// Recursion is bounded by `options.max_depth`; values are owned trees, so no cycle tracking is needed.
pub fn render(value: &Value, options: &RenderOptions) -> RenderNode {
	tracing::debug!(max_depth = options.max_depth, type_tag = classify(value).as_str(), "render value tree");
	render_item(value, options.max_depth, None)
}

/// Render one value with `remaining_depth` container levels left.
///
/// Depth zero renders any value as a leaf. An empty name counts as absent.
pub fn render_item(value: &Value, remaining_depth: u32, name: Option<&str>) -> RenderNode {
	let name = name.filter(|item| !item.is_empty());
	let tag = classify(value);

	if tag.is_primitive() || remaining_depth == 0 {
		return render_leaf(value, tag, name);
	}

	let children = own_entries(value)
		.into_iter()
		.map(|(prop, child)| render_item(child, remaining_depth - 1, Some(&*prop)))
		.collect();

	RenderNode::Container {
		name: name.map(Box::from),
		type_tag: tag,
		type_name: display_type_name(value).into(),
		expanded_by_default: name.is_none(),
		children,
	}
}

fn render_leaf(value: &Value, tag: TypeTag, name: Option<&str>) -> RenderNode {
	let text = match value {
		Value::String(v) => format_string(v),
		Value::I64(_) | Value::U64(_) | Value::F64(_) => format_number(value).unwrap_or_default(),
		Value::Bool(v) => v.to_string(),
		Value::Null => "null".to_owned(),
		Value::Undefined => "undefined".to_owned(),
		Value::Symbol(v) => v.to_string(),
		Value::Date(v) => format_date(v),
		Value::Array(_) | Value::Object(_) => {
			tracing::trace!(name = name.unwrap_or(""), "depth exhausted, collapsing container");
			format!("{} {{...}}", display_type_name(value))
		}
	};

	RenderNode::Leaf {
		name: name.map(Box::from),
		type_tag: tag,
		style: StyleCategory::for_tag(tag),
		text,
	}
}
