use serde::Serialize;
use serde::ser::{self, Impossible};

use crate::inspect::value::{ObjectValue, Symbol, Value};
use crate::inspect::{InspectError, Result};

/// Convert any `Serialize` type into an inspectable [`Value`].
///
/// Named structs keep their type name, unit enum variants become symbols, `()` becomes
/// `undefined` and `None` becomes `null`. Newtype structs are transparent.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
	value.serialize(ValueSerializer)
}

struct ValueSerializer;

fn variant_name(name: &str, variant: &str) -> String {
	format!("{name}::{variant}")
}

impl ser::Serializer for ValueSerializer {
	type Ok = Value;
	type Error = InspectError;
	type SerializeSeq = SeqBuilder;
	type SerializeTuple = SeqBuilder;
	type SerializeTupleStruct = ObjectBuilder;
	type SerializeTupleVariant = ObjectBuilder;
	type SerializeMap = MapBuilder;
	type SerializeStruct = ObjectBuilder;
	type SerializeStructVariant = ObjectBuilder;

	fn serialize_bool(self, v: bool) -> Result<Value> {
		Ok(Value::Bool(v))
	}

	fn serialize_i8(self, v: i8) -> Result<Value> {
		Ok(Value::from(v))
	}

	fn serialize_i16(self, v: i16) -> Result<Value> {
		Ok(Value::from(v))
	}

	fn serialize_i32(self, v: i32) -> Result<Value> {
		Ok(Value::from(v))
	}

	fn serialize_i64(self, v: i64) -> Result<Value> {
		Ok(Value::I64(v))
	}

	fn serialize_i128(self, v: i128) -> Result<Value> {
		if let Ok(v) = i64::try_from(v) {
			Ok(Value::I64(v))
		} else if let Ok(v) = u64::try_from(v) {
			Ok(Value::U64(v))
		} else {
			Ok(Value::F64(v as f64))
		}
	}

	fn serialize_u8(self, v: u8) -> Result<Value> {
		Ok(Value::from(v))
	}

	fn serialize_u16(self, v: u16) -> Result<Value> {
		Ok(Value::from(v))
	}

	fn serialize_u32(self, v: u32) -> Result<Value> {
		Ok(Value::from(v))
	}

	fn serialize_u64(self, v: u64) -> Result<Value> {
		Ok(Value::U64(v))
	}

	fn serialize_u128(self, v: u128) -> Result<Value> {
		match u64::try_from(v) {
			Ok(v) => Ok(Value::U64(v)),
			Err(_) => Ok(Value::F64(v as f64)),
		}
	}

	fn serialize_f32(self, v: f32) -> Result<Value> {
		Ok(Value::from(v))
	}

	fn serialize_f64(self, v: f64) -> Result<Value> {
		Ok(Value::F64(v))
	}

	fn serialize_char(self, v: char) -> Result<Value> {
		Ok(Value::String(v.to_string().into_boxed_str()))
	}

	fn serialize_str(self, v: &str) -> Result<Value> {
		Ok(Value::from(v))
	}

	fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
		Ok(Value::Array(v.iter().copied().map(Value::from).collect()))
	}

	fn serialize_none(self) -> Result<Value> {
		Ok(Value::Null)
	}

	fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Value> {
		value.serialize(self)
	}

	fn serialize_unit(self) -> Result<Value> {
		Ok(Value::Undefined)
	}

	fn serialize_unit_struct(self, name: &'static str) -> Result<Value> {
		Ok(Value::Object(ObjectValue::named(name)))
	}

	fn serialize_unit_variant(self, name: &'static str, _variant_index: u32, variant: &'static str) -> Result<Value> {
		Ok(Value::Symbol(Symbol::new(variant_name(name, variant))))
	}

	fn serialize_newtype_struct<T: Serialize + ?Sized>(self, _name: &'static str, value: &T) -> Result<Value> {
		value.serialize(self)
	}

	fn serialize_newtype_variant<T: Serialize + ?Sized>(self, name: &'static str, _variant_index: u32, variant: &'static str, value: &T) -> Result<Value> {
		let inner = value.serialize(ValueSerializer)?;
		Ok(Value::Object(ObjectValue::named(variant_name(name, variant)).with("0", inner)))
	}

	fn serialize_seq(self, len: Option<usize>) -> Result<SeqBuilder> {
		Ok(SeqBuilder {
			items: Vec::with_capacity(len.unwrap_or(0)),
		})
	}

	fn serialize_tuple(self, len: usize) -> Result<SeqBuilder> {
		self.serialize_seq(Some(len))
	}

	fn serialize_tuple_struct(self, name: &'static str, len: usize) -> Result<ObjectBuilder> {
		Ok(ObjectBuilder::new(name.to_owned(), len))
	}

	fn serialize_tuple_variant(self, name: &'static str, _variant_index: u32, variant: &'static str, len: usize) -> Result<ObjectBuilder> {
		Ok(ObjectBuilder::new(variant_name(name, variant), len))
	}

	fn serialize_map(self, _len: Option<usize>) -> Result<MapBuilder> {
		Ok(MapBuilder {
			object: ObjectValue::plain(),
			pending_key: None,
		})
	}

	fn serialize_struct(self, name: &'static str, len: usize) -> Result<ObjectBuilder> {
		Ok(ObjectBuilder::new(name.to_owned(), len))
	}

	fn serialize_struct_variant(self, name: &'static str, _variant_index: u32, variant: &'static str, len: usize) -> Result<ObjectBuilder> {
		Ok(ObjectBuilder::new(variant_name(name, variant), len))
	}
}

struct SeqBuilder {
	items: Vec<Value>,
}

impl ser::SerializeSeq for SeqBuilder {
	type Ok = Value;
	type Error = InspectError;

	fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
		self.items.push(value.serialize(ValueSerializer)?);
		Ok(())
	}

	fn end(self) -> Result<Value> {
		Ok(Value::Array(self.items))
	}
}

impl ser::SerializeTuple for SeqBuilder {
	type Ok = Value;
	type Error = InspectError;

	fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
		ser::SerializeSeq::serialize_element(self, value)
	}

	fn end(self) -> Result<Value> {
		ser::SerializeSeq::end(self)
	}
}

/// Collects struct fields, or positional fields named by index.
struct ObjectBuilder {
	object: ObjectValue,
}

impl ObjectBuilder {
	fn new(type_name: String, len: usize) -> Self {
		Self {
			object: ObjectValue {
				type_name: Some(type_name.into_boxed_str()),
				fields: Vec::with_capacity(len),
			},
		}
	}

	fn push_positional<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
		let index = self.object.fields.len().to_string();
		self.object.insert(index, value.serialize(ValueSerializer)?);
		Ok(())
	}

	fn push_named<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> Result<()> {
		self.object.insert(key, value.serialize(ValueSerializer)?);
		Ok(())
	}

	fn finish(self) -> Result<Value> {
		Ok(Value::Object(self.object))
	}
}

impl ser::SerializeTupleStruct for ObjectBuilder {
	type Ok = Value;
	type Error = InspectError;

	fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
		self.push_positional(value)
	}

	fn end(self) -> Result<Value> {
		self.finish()
	}
}

impl ser::SerializeTupleVariant for ObjectBuilder {
	type Ok = Value;
	type Error = InspectError;

	fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
		self.push_positional(value)
	}

	fn end(self) -> Result<Value> {
		self.finish()
	}
}

impl ser::SerializeStruct for ObjectBuilder {
	type Ok = Value;
	type Error = InspectError;

	fn serialize_field<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> Result<()> {
		self.push_named(key, value)
	}

	fn end(self) -> Result<Value> {
		self.finish()
	}
}

impl ser::SerializeStructVariant for ObjectBuilder {
	type Ok = Value;
	type Error = InspectError;

	fn serialize_field<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> Result<()> {
		self.push_named(key, value)
	}

	fn end(self) -> Result<Value> {
		self.finish()
	}
}

struct MapBuilder {
	object: ObjectValue,
	pending_key: Option<String>,
}

impl ser::SerializeMap for MapBuilder {
	type Ok = Value;
	type Error = InspectError;

	fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<()> {
		self.pending_key = Some(key.serialize(KeySerializer)?);
		Ok(())
	}

	fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
		let key = self.pending_key.take().ok_or_else(|| InspectError::Serialize {
			message: "map value serialized before its key".to_owned(),
		})?;
		self.object.insert(key, value.serialize(ValueSerializer)?);
		Ok(())
	}

	fn end(self) -> Result<Value> {
		Ok(Value::Object(self.object))
	}
}

/// Turns scalar map keys into property names.
struct KeySerializer;

impl ser::Serializer for KeySerializer {
	type Ok = String;
	type Error = InspectError;
	type SerializeSeq = Impossible<String, InspectError>;
	type SerializeTuple = Impossible<String, InspectError>;
	type SerializeTupleStruct = Impossible<String, InspectError>;
	type SerializeTupleVariant = Impossible<String, InspectError>;
	type SerializeMap = Impossible<String, InspectError>;
	type SerializeStruct = Impossible<String, InspectError>;
	type SerializeStructVariant = Impossible<String, InspectError>;

	fn serialize_bool(self, v: bool) -> Result<String> {
		Ok(v.to_string())
	}

	fn serialize_i8(self, v: i8) -> Result<String> {
		Ok(v.to_string())
	}

	fn serialize_i16(self, v: i16) -> Result<String> {
		Ok(v.to_string())
	}

	fn serialize_i32(self, v: i32) -> Result<String> {
		Ok(v.to_string())
	}

	fn serialize_i64(self, v: i64) -> Result<String> {
		Ok(v.to_string())
	}

	fn serialize_i128(self, v: i128) -> Result<String> {
		Ok(v.to_string())
	}

	fn serialize_u8(self, v: u8) -> Result<String> {
		Ok(v.to_string())
	}

	fn serialize_u16(self, v: u16) -> Result<String> {
		Ok(v.to_string())
	}

	fn serialize_u32(self, v: u32) -> Result<String> {
		Ok(v.to_string())
	}

	fn serialize_u64(self, v: u64) -> Result<String> {
		Ok(v.to_string())
	}

	fn serialize_u128(self, v: u128) -> Result<String> {
		Ok(v.to_string())
	}

	fn serialize_f32(self, v: f32) -> Result<String> {
		Ok(v.to_string())
	}

	fn serialize_f64(self, v: f64) -> Result<String> {
		Ok(v.to_string())
	}

	fn serialize_char(self, v: char) -> Result<String> {
		Ok(v.to_string())
	}

	fn serialize_str(self, v: &str) -> Result<String> {
		Ok(v.to_owned())
	}

	fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
		Err(InspectError::KeyMustBeString { kind: "bytes" })
	}

	fn serialize_none(self) -> Result<String> {
		Err(InspectError::KeyMustBeString { kind: "none" })
	}

	fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<String> {
		value.serialize(self)
	}

	fn serialize_unit(self) -> Result<String> {
		Err(InspectError::KeyMustBeString { kind: "unit" })
	}

	fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
		Err(InspectError::KeyMustBeString { kind: "unit struct" })
	}

	fn serialize_unit_variant(self, _name: &'static str, _variant_index: u32, variant: &'static str) -> Result<String> {
		Ok(variant.to_owned())
	}

	fn serialize_newtype_struct<T: Serialize + ?Sized>(self, _name: &'static str, value: &T) -> Result<String> {
		value.serialize(self)
	}

	fn serialize_newtype_variant<T: Serialize + ?Sized>(self, _name: &'static str, _variant_index: u32, _variant: &'static str, _value: &T) -> Result<String> {
		Err(InspectError::KeyMustBeString { kind: "newtype variant" })
	}

	fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
		Err(InspectError::KeyMustBeString { kind: "sequence" })
	}

	fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
		Err(InspectError::KeyMustBeString { kind: "tuple" })
	}

	fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeTupleStruct> {
		Err(InspectError::KeyMustBeString { kind: "tuple struct" })
	}

	fn serialize_tuple_variant(self, _name: &'static str, _variant_index: u32, _variant: &'static str, _len: usize) -> Result<Self::SerializeTupleVariant> {
		Err(InspectError::KeyMustBeString { kind: "tuple variant" })
	}

	fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
		Err(InspectError::KeyMustBeString { kind: "map" })
	}

	fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
		Err(InspectError::KeyMustBeString { kind: "struct" })
	}

	fn serialize_struct_variant(self, _name: &'static str, _variant_index: u32, _variant: &'static str, _len: usize) -> Result<Self::SerializeStructVariant> {
		Err(InspectError::KeyMustBeString { kind: "struct variant" })
	}
}

#[cfg(test)]
mod tests;
