//! Text encoding for float payloads.
//!
//! Finite values are plain JSON numbers. Non-finite values have no JSON number form, so
//! they are written as their hex bit pattern, which also keeps NaN payloads intact.

use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum FloatText {
	Number(f64),
	Text(String),
}

fn named_special(text: &str) -> Option<f64> {
	match text {
		"nan" => Some(f64::NAN),
		"inf" => Some(f64::INFINITY),
		"-inf" => Some(f64::NEG_INFINITY),
		_ => None,
	}
}

fn hex_bits(text: &str) -> Option<&str> {
	text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))
}

pub(crate) mod f32_text {
	use serde::de::Error as _;

	use super::*;

	pub fn serialize<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
		if value.is_finite() {
			serializer.serialize_f32(*value)
		} else {
			serializer.serialize_str(&format!("0x{:08x}", value.to_bits()))
		}
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
		match FloatText::deserialize(deserializer)? {
			FloatText::Number(value) => Ok(value as f32),
			FloatText::Text(text) => {
				if let Some(value) = named_special(&text) {
					return Ok(value as f32);
				}
				hex_bits(&text)
					.and_then(|digits| u32::from_str_radix(digits, 16).ok())
					.map(f32::from_bits)
					.ok_or_else(|| D::Error::custom(format!("invalid float32 text {text:?}")))
			}
		}
	}
}

pub(crate) mod f64_text {
	use serde::de::Error as _;

	use super::*;

	pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
		if value.is_finite() {
			serializer.serialize_f64(*value)
		} else {
			serializer.serialize_str(&format!("0x{:016x}", value.to_bits()))
		}
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
		match FloatText::deserialize(deserializer)? {
			FloatText::Number(value) => Ok(value),
			FloatText::Text(text) => {
				if let Some(value) = named_special(&text) {
					return Ok(value);
				}
				hex_bits(&text)
					.and_then(|digits| u64::from_str_radix(digits, 16).ok())
					.map(f64::from_bits)
					.ok_or_else(|| D::Error::custom(format!("invalid float64 text {text:?}")))
			}
		}
	}
}
