use std::borrow::Cow;

use serde::Serialize;

use crate::inspect::value::Value;

/// Semantic display category of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TypeTag {
	/// Textual value.
	String,
	/// Any numeric scalar.
	Number,
	/// Boolean scalar.
	Boolean,
	/// Explicit null.
	Null,
	/// Absent value.
	Undefined,
	/// Unique atom.
	Symbol,
	/// Calendar timestamp.
	Date,
	/// Any structured value, arrays and named types included.
	Object,
}

impl TypeTag {
	/// Stable lower-case label.
	pub fn as_str(self) -> &'static str {
		match self {
			TypeTag::String => "string",
			TypeTag::Number => "number",
			TypeTag::Boolean => "boolean",
			TypeTag::Null => "null",
			TypeTag::Undefined => "undefined",
			TypeTag::Symbol => "symbol",
			TypeTag::Date => "date",
			TypeTag::Object => "object",
		}
	}

	/// Whether values of this tag always render as leaves.
	pub fn is_primitive(self) -> bool {
		!matches!(self, TypeTag::Object)
	}
}

/// Classify a value into its display category.
pub fn classify(value: &Value) -> TypeTag {
	match value {
		Value::Null => TypeTag::Null,
		Value::Undefined => TypeTag::Undefined,
		Value::String(_) => TypeTag::String,
		Value::I64(_) | Value::U64(_) | Value::F64(_) => TypeTag::Number,
		Value::Bool(_) => TypeTag::Boolean,
		Value::Symbol(_) => TypeTag::Symbol,
		Value::Date(_) => TypeTag::Date,
		Value::Array(_) | Value::Object(_) => TypeTag::Object,
	}
}

/// Most specific type name available for a value.
///
/// Arrays report `Array`, objects their type name, and anything unnamed falls back to `object`.
pub fn display_type_name(value: &Value) -> &str {
	match value {
		Value::Array(_) => "Array",
		Value::Object(object) => object.type_name.as_deref().unwrap_or("object"),
		other => classify(other).as_str(),
	}
}

/// Own property names in enumeration order: ascending indices for arrays, insertion order for objects.
pub fn own_properties(value: &Value) -> Vec<Cow<'_, str>> {
	own_entries(value).into_iter().map(|(name, _)| name).collect()
}

/// Own properties paired with their values, in the same order as [`own_properties`].
pub fn own_entries(value: &Value) -> Vec<(Cow<'_, str>, &Value)> {
	match value {
		Value::Array(items) => items.iter().enumerate().map(|(index, item)| (Cow::Owned(index.to_string()), item)).collect(),
		Value::Object(object) => object.fields.iter().map(|field| (Cow::Borrowed(field.name.as_ref()), &field.value)).collect(),
		_ => Vec::new(),
	}
}
