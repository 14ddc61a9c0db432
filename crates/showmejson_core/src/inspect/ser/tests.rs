use std::collections::BTreeMap;

use serde::Serialize;

use super::to_value;
use crate::inspect::{InspectError, ObjectValue, RenderOptions, Symbol, Value, display_type_name, render};

#[derive(Serialize)]
struct Camera {
	name: String,
	lens: f32,
	clip: (f64, f64),
	parent: Option<Box<Camera>>,
}

#[derive(Serialize)]
enum Shape {
	Point,
	Circle(f64),
	Rect { w: u32, h: u32 },
	Segment(i32, i32),
}

#[derive(Serialize)]
struct Meters(f64);

#[derive(Serialize)]
struct Marker;

#[test]
fn named_structs_keep_type_name_and_field_order() {
	let camera = Camera {
		name: "main".to_owned(),
		lens: 50.0,
		clip: (0.1, 100.0),
		parent: None,
	};
	let value = to_value(&camera).expect("camera converts");

	let Value::Object(object) = &value else {
		panic!("expected object");
	};
	assert_eq!(display_type_name(&value), "Camera");
	let names: Vec<&str> = object.fields.iter().map(|field| field.name.as_ref()).collect();
	assert_eq!(names, ["name", "lens", "clip", "parent"]);
	assert_eq!(object.get("clip"), Some(&Value::Array(vec![Value::F64(0.1), Value::F64(100.0)])));
	assert_eq!(object.get("parent"), Some(&Value::Null));
}

#[test]
fn enum_variants_map_to_symbols_and_named_objects() {
	assert_eq!(to_value(&Shape::Point).expect("unit variant"), Value::Symbol(Symbol::new("Shape::Point")));
	assert_eq!(
		to_value(&Shape::Circle(2.0)).expect("newtype variant"),
		Value::Object(ObjectValue::named("Shape::Circle").with("0", 2.0_f64))
	);
	assert_eq!(
		to_value(&Shape::Rect { w: 3, h: 4 }).expect("struct variant"),
		Value::Object(ObjectValue::named("Shape::Rect").with("w", 3_u32).with("h", 4_u32))
	);
	assert_eq!(
		to_value(&Shape::Segment(-1, 1)).expect("tuple variant"),
		Value::Object(ObjectValue::named("Shape::Segment").with("0", -1_i32).with("1", 1_i32))
	);
}

#[test]
fn newtypes_are_transparent_and_unit_structs_are_empty_objects() {
	assert_eq!(to_value(&Meters(3.5)).expect("newtype"), Value::F64(3.5));
	assert_eq!(to_value(&Marker).expect("unit struct"), Value::Object(ObjectValue::named("Marker")));
	assert_eq!(to_value(&()).expect("unit"), Value::Undefined);
}

#[test]
fn maps_become_plain_objects_with_stringified_keys() {
	let mut map = BTreeMap::new();
	map.insert(2_u8, "two");
	map.insert(1_u8, "one");

	let value = to_value(&map).expect("map converts");
	assert_eq!(value, Value::Object(ObjectValue::plain().with("1", "one").with("2", "two")));
}

#[test]
fn composite_map_keys_are_rejected() {
	let mut map = BTreeMap::new();
	map.insert(vec![1_u8], true);

	let err = to_value(&map).expect_err("sequence key fails");
	assert!(matches!(err, InspectError::KeyMustBeString { kind: "sequence" }));
}

#[test]
fn wide_integers_fit_the_narrowest_variant() {
	assert_eq!(to_value(&-5_i128).expect("i128"), Value::I64(-5));
	assert_eq!(to_value(&u128::from(u64::MAX)).expect("u128"), Value::U64(u64::MAX));
	assert_eq!(to_value(&'c').expect("char"), Value::from("c"));
}

#[test]
fn converted_structs_render_with_type_headers() {
	let camera = Camera {
		name: "child".to_owned(),
		lens: 35.0,
		clip: (1.0, 2.0),
		parent: Some(Box::new(Camera {
			name: "root".to_owned(),
			lens: 50.0,
			clip: (1.0, 2.0),
			parent: None,
		})),
	};
	let value = to_value(&camera).expect("camera converts");
	let node = render(
		&value,
		&RenderOptions {
			max_depth: 1,
			..RenderOptions::default()
		},
	);

	assert_eq!(node.header(), "[Camera]");
	let parent = &node.children()[3];
	assert_eq!(parent.header(), "Camera {...}");
	assert_eq!(parent.label(), "parent:");
}
