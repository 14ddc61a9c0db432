use serde::Serialize;

use crate::inspect::classify::TypeTag;

/// Semantic style class attached to leaves for optional coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleCategory {
	/// String values.
	Text,
	/// Numeric values.
	Number,
	/// Boolean values.
	Boolean,
	/// Null and undefined.
	Nothing,
	/// Symbol values.
	Symbol,
	/// Timestamps.
	Date,
	/// Depth-exhausted containers.
	Object,
}

impl StyleCategory {
	/// Category used for leaves of the given tag.
	pub fn for_tag(tag: TypeTag) -> Self {
		match tag {
			TypeTag::String => StyleCategory::Text,
			TypeTag::Number => StyleCategory::Number,
			TypeTag::Boolean => StyleCategory::Boolean,
			TypeTag::Null | TypeTag::Undefined => StyleCategory::Nothing,
			TypeTag::Symbol => StyleCategory::Symbol,
			TypeTag::Date => StyleCategory::Date,
			TypeTag::Object => StyleCategory::Object,
		}
	}

	/// Stable lower-case class suffix.
	pub fn as_str(self) -> &'static str {
		match self {
			StyleCategory::Text => "text",
			StyleCategory::Number => "number",
			StyleCategory::Boolean => "boolean",
			StyleCategory::Nothing => "nothing",
			StyleCategory::Symbol => "symbol",
			StyleCategory::Date => "date",
			StyleCategory::Object => "object",
		}
	}
}

/// Immutable abstract render-tree node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderNode {
	/// Terminal value already formatted as display text.
	Leaf {
		/// Property name, absent for the root and unlabeled elements.
		name: Option<Box<str>>,
		/// Classification of the rendered value.
		type_tag: TypeTag,
		/// Style class for optional coloring.
		style: StyleCategory,
		/// Display text.
		text: String,
	},
	/// Structured value with nested entries.
	Container {
		/// Property name, absent for the root and unlabeled elements.
		name: Option<Box<str>>,
		/// Always [`TypeTag::Object`] for values produced by the renderer.
		type_tag: TypeTag,
		/// Most specific type name of the value.
		type_name: Box<str>,
		/// Initial disclosure state; true exactly when `name` is absent.
		expanded_by_default: bool,
		/// Children in own-property order.
		children: Vec<RenderNode>,
	},
}

impl RenderNode {
	/// Property name, if any.
	pub fn name(&self) -> Option<&str> {
		match self {
			RenderNode::Leaf { name, .. } | RenderNode::Container { name, .. } => name.as_deref(),
		}
	}

	/// Classification of the rendered value.
	pub fn type_tag(&self) -> TypeTag {
		match self {
			RenderNode::Leaf { type_tag, .. } | RenderNode::Container { type_tag, .. } => *type_tag,
		}
	}

	/// `name:` for named nodes, empty otherwise.
	pub fn label(&self) -> String {
		match self.name() {
			Some(name) if !name.is_empty() => format!("{name}:"),
			_ => String::new(),
		}
	}

	/// Container summary text: the name, or `[TypeName]` when unnamed. Leaves return their text.
	pub fn header(&self) -> String {
		match self {
			RenderNode::Leaf { text, .. } => text.clone(),
			RenderNode::Container { name, type_name, .. } => match name.as_deref() {
				Some(name) if !name.is_empty() => name.to_owned(),
				_ => format!("[{type_name}]"),
			},
		}
	}

	/// Children of a container; empty for leaves.
	pub fn children(&self) -> &[RenderNode] {
		match self {
			RenderNode::Leaf { .. } => &[],
			RenderNode::Container { children, .. } => children,
		}
	}

	/// Whether this node is a leaf.
	pub fn is_leaf(&self) -> bool {
		matches!(self, RenderNode::Leaf { .. })
	}

	/// Number of container levels in this subtree; zero for a leaf.
	pub fn container_depth(&self) -> u32 {
		match self {
			RenderNode::Leaf { .. } => 0,
			RenderNode::Container { children, .. } => 1 + children.iter().map(RenderNode::container_depth).max().unwrap_or(0),
		}
	}
}
