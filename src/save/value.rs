use serde::{Deserialize, Serialize};

use crate::save::Tag;
use crate::save::float::{f32_text, f64_text};

/// One decoded Godot variant.
///
/// Numeric variants keep the width they were stored with, so re-encoding never has to guess
/// between the 32-bit and 64-bit wire forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Variant {
	/// Empty value.
	Nil,
	/// Boolean.
	Bool(bool),
	/// Integer stored in 4 bytes.
	Int32(i32),
	/// Integer stored in 8 bytes.
	Int64(i64),
	/// Float stored in 4 bytes.
	Float32(#[serde(with = "f32_text")] f32),
	/// Float stored in 8 bytes.
	Float64(#[serde(with = "f64_text")] f64),
	/// UTF-8 text.
	String(Box<str>),
	/// 2D vector of `f32` components.
	Vector2(Vector2),
	/// Key/value pairs in stored order.
	Dictionary(Vec<DictEntry>),
	/// Values in stored order.
	Array(Vec<Variant>),
}

/// 2D vector payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
	/// Horizontal component.
	#[serde(with = "f32_text")]
	pub x: f32,
	/// Vertical component.
	#[serde(with = "f32_text")]
	pub y: f32,
}

/// One dictionary pair. Keys may be any variant and need not be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictEntry {
	/// Entry key.
	pub key: Variant,
	/// Entry value.
	pub value: Variant,
}

impl Variant {
	/// Wire tag this value encodes with.
	pub fn tag(&self) -> Tag {
		match self {
			Self::Nil => Tag::Nil,
			Self::Bool(_) => Tag::Bool,
			Self::Int32(_) => Tag::Int32,
			Self::Int64(_) => Tag::Int64,
			Self::Float32(_) => Tag::Float32,
			Self::Float64(_) => Tag::Float64,
			Self::String(_) => Tag::String,
			Self::Vector2(_) => Tag::Vector2,
			Self::Dictionary(_) => Tag::Dictionary,
			Self::Array(_) => Tag::Array,
		}
	}

	/// Build a dictionary from pairs, keeping their order.
	pub fn dictionary<K: Into<Variant>, V: Into<Variant>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
		Self::Dictionary(
			pairs
				.into_iter()
				.map(|(key, value)| DictEntry {
					key: key.into(),
					value: value.into(),
				})
				.collect(),
		)
	}

	/// Look up the first dictionary value stored under a string key.
	pub fn get(&self, key: &str) -> Option<&Variant> {
		let Self::Dictionary(entries) = self else {
			return None;
		};
		entries
			.iter()
			.find(|entry| matches!(&entry.key, Self::String(name) if name.as_ref() == key))
			.map(|entry| &entry.value)
	}

	/// Integer value of either width.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Self::Int32(v) => Some(i64::from(*v)),
			Self::Int64(v) => Some(*v),
			_ => None,
		}
	}

	/// Float value of either width.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Float32(v) => Some(f64::from(*v)),
			Self::Float64(v) => Some(*v),
			_ => None,
		}
	}

	/// String contents.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(v) => Some(v),
			_ => None,
		}
	}
}

impl From<bool> for Variant {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i32> for Variant {
	fn from(value: i32) -> Self {
		Self::Int32(value)
	}
}

impl From<i64> for Variant {
	fn from(value: i64) -> Self {
		Self::Int64(value)
	}
}

impl From<f32> for Variant {
	fn from(value: f32) -> Self {
		Self::Float32(value)
	}
}

impl From<f64> for Variant {
	fn from(value: f64) -> Self {
		Self::Float64(value)
	}
}

impl From<&str> for Variant {
	fn from(value: &str) -> Self {
		Self::String(value.into())
	}
}

impl From<String> for Variant {
	fn from(value: String) -> Self {
		Self::String(value.into_boxed_str())
	}
}

impl From<Vector2> for Variant {
	fn from(value: Vector2) -> Self {
		Self::Vector2(value)
	}
}

impl From<Vec<Variant>> for Variant {
	fn from(value: Vec<Variant>) -> Self {
		Self::Array(value)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::{Variant, Vector2};

	#[test]
	fn text_form_names_every_width() {
		let value = Variant::Array(vec![
			Variant::Nil,
			Variant::Int32(5),
			Variant::Int64(5),
			Variant::Float32(1.5),
			Variant::Float64(1.5),
			Variant::Vector2(Vector2 { x: 1.0, y: -2.0 }),
		]);

		let text = serde_json::to_value(&value).expect("serializes");
		assert_eq!(
			text,
			json!({
				"type": "array",
				"value": [
					{ "type": "nil" },
					{ "type": "int32", "value": 5 },
					{ "type": "int64", "value": 5 },
					{ "type": "float32", "value": 1.5 },
					{ "type": "float64", "value": 1.5 },
					{ "type": "vector2", "value": { "x": 1.0, "y": -2.0 } },
				]
			})
		);

		let back: Variant = serde_json::from_value(text).expect("deserializes");
		assert_eq!(back, value);
	}

	#[test]
	fn dictionary_text_keeps_order_and_key_kinds() {
		let value = Variant::dictionary([(Variant::from("b"), Variant::from(1)), (Variant::Int32(7), Variant::Bool(true))]);
		let text = serde_json::to_string(&value).expect("serializes");
		assert_eq!(
			text,
			r#"{"type":"dictionary","value":[{"key":{"type":"string","value":"b"},"value":{"type":"int32","value":1}},{"key":{"type":"int32","value":7},"value":{"type":"bool","value":true}}]}"#
		);
	}

	#[test]
	fn non_finite_floats_keep_bits_in_text() {
		let payload_nan = f32::from_bits(0x7fc0_0001);
		let value = Variant::Array(vec![Variant::Float32(payload_nan), Variant::Float64(f64::NEG_INFINITY)]);

		let text = serde_json::to_value(&value).expect("serializes");
		assert_eq!(text["value"][0]["value"], "0x7fc00001");
		assert_eq!(text["value"][1]["value"], "0xfff0000000000000");

		let back: Variant = serde_json::from_value(text).expect("deserializes");
		let Variant::Array(items) = back else {
			panic!("expected array");
		};
		assert!(matches!(items[0], Variant::Float32(v) if v.to_bits() == 0x7fc0_0001));
		assert_eq!(items[1], Variant::Float64(f64::NEG_INFINITY));
	}

	#[test]
	fn named_specials_are_accepted() {
		let value: Variant = serde_json::from_str(r#"{"type":"float32","value":"inf"}"#).expect("inf parses");
		assert_eq!(value, Variant::Float32(f32::INFINITY));

		let err = serde_json::from_str::<Variant>(r#"{"type":"float64","value":"lots"}"#);
		assert!(err.is_err());
	}

	#[test]
	fn get_finds_first_string_key() {
		let value = Variant::dictionary([("level", 3), ("level", 4)]);
		assert_eq!(value.get("level"), Some(&Variant::Int32(3)));
		assert_eq!(value.get("xp"), None);
		assert_eq!(Variant::Nil.get("level"), None);
	}
}
