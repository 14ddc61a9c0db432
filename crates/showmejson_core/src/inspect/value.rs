use chrono::{DateTime, Utc};

/// Runtime value accepted by the inspector.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Explicit null marker.
	Null,
	/// Absent value, distinct from null.
	Undefined,
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	I64(i64),
	/// Unsigned integer scalar.
	U64(u64),
	/// 64-bit float scalar.
	F64(f64),
	/// UTF-8 string.
	String(Box<str>),
	/// Unique atom with an optional description.
	Symbol(Symbol),
	/// Calendar timestamp.
	Date(DateTime<Utc>),
	/// Index-addressed sequence.
	Array(Vec<Value>),
	/// Structured value with named fields.
	Object(ObjectValue),
}

/// Atom value shown by its description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
	/// Optional human-readable description.
	pub description: Option<Box<str>>,
}

impl Symbol {
	/// Create a described symbol.
	pub fn new(description: impl Into<Box<str>>) -> Self {
		Self {
			description: Some(description.into()),
		}
	}

	/// Create a symbol without description.
	pub fn anonymous() -> Self {
		Self { description: None }
	}
}

impl std::fmt::Display for Symbol {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match &self.description {
			Some(description) => write!(f, "Symbol({description})"),
			None => f.write_str("Symbol()"),
		}
	}
}

/// Structured value with field names preserved in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectValue {
	/// Most specific known type name, if any.
	pub type_name: Option<Box<str>>,
	/// Fields in insertion order.
	pub fields: Vec<FieldValue>,
}

impl ObjectValue {
	/// Type name given to plain key/value maps.
	pub const PLAIN_TYPE_NAME: &'static str = "Object";

	/// Create an empty plain map object.
	pub fn plain() -> Self {
		Self {
			type_name: Some(Self::PLAIN_TYPE_NAME.into()),
			fields: Vec::new(),
		}
	}

	/// Create an empty object of a named type.
	pub fn named(type_name: impl Into<Box<str>>) -> Self {
		Self {
			type_name: Some(type_name.into()),
			fields: Vec::new(),
		}
	}

	/// Set a field, keeping the original position when the name already exists.
	pub fn insert(&mut self, name: impl Into<Box<str>>, value: impl Into<Value>) {
		let name = name.into();
		let value = value.into();
		match self.fields.iter_mut().find(|field| field.name == name) {
			Some(field) => field.value = value,
			None => self.fields.push(FieldValue { name, value }),
		}
	}

	/// Builder form of [`ObjectValue::insert`].
	pub fn with(mut self, name: impl Into<Box<str>>, value: impl Into<Value>) -> Self {
		self.insert(name, value);
		self
	}

	/// Look up a field by name.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|field| field.name.as_ref() == name).map(|field| &field.value)
	}
}

/// Named object field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field identifier.
	pub name: Box<str>,
	/// Field payload.
	pub value: Value,
}

impl Value {
	/// Look up one own property: a decimal index for arrays, a field name for objects.
	pub fn get(&self, name: &str) -> Option<&Value> {
		match self {
			Value::Array(items) => name.parse::<usize>().ok().and_then(|index| items.get(index)),
			Value::Object(object) => object.get(name),
			_ => None,
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

macro_rules! impl_from_signed {
	($($ty:ty),*) => {
		$(impl From<$ty> for Value {
			fn from(value: $ty) -> Self {
				Value::I64(i64::from(value))
			}
		})*
	};
}

macro_rules! impl_from_unsigned {
	($($ty:ty),*) => {
		$(impl From<$ty> for Value {
			fn from(value: $ty) -> Self {
				Value::U64(u64::from(value))
			}
		})*
	};
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<f32> for Value {
	fn from(value: f32) -> Self {
		Value::F64(f64::from(value))
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::F64(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.into())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::String(value.into_boxed_str())
	}
}

impl From<Symbol> for Value {
	fn from(value: Symbol) -> Self {
		Value::Symbol(value)
	}
}

impl From<DateTime<Utc>> for Value {
	fn from(value: DateTime<Utc>) -> Self {
		Value::Date(value)
	}
}

impl From<ObjectValue> for Value {
	fn from(value: ObjectValue) -> Self {
		Value::Object(value)
	}
}

impl<T: Into<Value>> From<Vec<T>> for Value {
	fn from(items: Vec<T>) -> Self {
		Value::Array(items.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Value::Null, Into::into)
	}
}

impl From<()> for Value {
	fn from(_: ()) -> Self {
		Value::Undefined
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(v) => Value::Bool(v),
			serde_json::Value::Number(n) => {
				if let Some(v) = n.as_u64() {
					Value::U64(v)
				} else if let Some(v) = n.as_i64() {
					Value::I64(v)
				} else {
					Value::F64(n.as_f64().unwrap_or(f64::NAN))
				}
			}
			serde_json::Value::String(v) => Value::String(v.into_boxed_str()),
			serde_json::Value::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
			serde_json::Value::Object(map) => {
				let fields = map
					.into_iter()
					.map(|(name, value)| FieldValue {
						name: name.into_boxed_str(),
						value: Value::from(value),
					})
					.collect();
				Value::Object(ObjectValue {
					type_name: Some(ObjectValue::PLAIN_TYPE_NAME.into()),
					fields,
				})
			}
		}
	}
}
