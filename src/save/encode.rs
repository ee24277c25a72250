use crate::save::bytes::Writer;
use crate::save::{Result, Variant};

/// Encode one variant into its wire bytes.
pub fn encode(value: &Variant) -> Result<Vec<u8>> {
	let mut writer = Writer::new();
	encode_value(&mut writer, value)?;
	Ok(writer.into_bytes())
}

fn encode_value(writer: &mut Writer, value: &Variant) -> Result<()> {
	writer.write_u32_le(value.tag().code());

	let payload_start = writer.pos();
	match value {
		Variant::Nil => {}
		Variant::Bool(v) => writer.write_u32_le(u32::from(*v)),
		Variant::Int32(v) => writer.write_i32_le(*v),
		Variant::Int64(v) => writer.write_i64_le(*v),
		Variant::Float32(v) => writer.write_f32_le(*v),
		Variant::Float64(v) => writer.write_f64_le(*v),
		Variant::String(v) => {
			writer.write_len(v.len())?;
			writer.write_bytes(v.as_bytes());
		}
		Variant::Vector2(v) => {
			writer.write_f32_le(v.x);
			writer.write_f32_le(v.y);
		}
		Variant::Dictionary(entries) => {
			writer.write_len(entries.len())?;
			for entry in entries {
				encode_value(writer, &entry.key)?;
				encode_value(writer, &entry.value)?;
			}
		}
		Variant::Array(items) => {
			writer.write_len(items.len())?;
			for item in items {
				encode_value(writer, item)?;
			}
		}
	}

	writer.pad(writer.pos() - payload_start);
	Ok(())
}
