use crate::save::bytes::Cursor;
use crate::save::value::{DictEntry, Variant, Vector2};
use crate::save::{Result, SaveError, Tag};

/// Runtime limits for variant decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum container nesting depth below the root value.
	pub max_depth: u32,
	/// Maximum element count of a single dictionary or array.
	pub max_elems: usize,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 128,
			max_elems: 1 << 20,
		}
	}
}

/// Decode a buffer holding exactly one encoded variant.
pub fn decode(bytes: &[u8]) -> Result<Variant> {
	decode_with(bytes, &DecodeOptions::default())
}

/// Decode a buffer holding exactly one encoded variant, using explicit limits.
pub fn decode_with(bytes: &[u8], opt: &DecodeOptions) -> Result<Variant> {
	let mut cursor = Cursor::new(bytes);
	decode_root(&mut cursor, opt)
}

/// Decode the root value at the cursor and require the input to end right after it.
pub(crate) fn decode_root(cursor: &mut Cursor<'_>, opt: &DecodeOptions) -> Result<Variant> {
	let value = decode_value(cursor, opt, 0)?;
	if cursor.remaining() > 0 {
		return Err(SaveError::TrailingData {
			at: cursor.pos(),
			rem: cursor.remaining(),
		});
	}
	Ok(value)
}

fn decode_value(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<Variant> {
	let at = cursor.pos();
	if depth > opt.max_depth {
		return Err(SaveError::DepthExceeded {
			at,
			max_depth: opt.max_depth,
		});
	}

	let code = cursor.peek_u32_le()?;
	let tag = Tag::from_code(code).ok_or(SaveError::UnknownTag { at, code })?;
	cursor.read_exact(Tag::SIZE)?;

	let payload_start = cursor.pos();
	let value = match tag {
		Tag::Nil => Variant::Nil,
		Tag::Bool => match cursor.read_u32_le()? {
			0 => Variant::Bool(false),
			1 => Variant::Bool(true),
			raw => return Err(SaveError::InvalidBool { at: payload_start, raw }),
		},
		Tag::Int32 => Variant::Int32(cursor.read_i32_le()?),
		Tag::Int64 => Variant::Int64(cursor.read_i64_le()?),
		Tag::Float32 => Variant::Float32(cursor.read_f32_le()?),
		Tag::Float64 => Variant::Float64(cursor.read_f64_le()?),
		Tag::String => Variant::String(read_string(cursor)?),
		Tag::Vector2 => Variant::Vector2(Vector2 {
			x: cursor.read_f32_le()?,
			y: cursor.read_f32_le()?,
		}),
		Tag::Dictionary => {
			// every pair is at least two tags
			let count = read_count(cursor, opt, Tag::SIZE * 2)?;
			let mut entries = Vec::new();
			for _ in 0..count {
				let key = decode_value(cursor, opt, depth + 1)?;
				let value = decode_value(cursor, opt, depth + 1)?;
				entries.push(DictEntry { key, value });
			}
			Variant::Dictionary(entries)
		}
		Tag::Array => {
			let count = read_count(cursor, opt, Tag::SIZE)?;
			let mut items = Vec::new();
			for _ in 0..count {
				items.push(decode_value(cursor, opt, depth + 1)?);
			}
			Variant::Array(items)
		}
	};

	cursor.skip_padding(cursor.pos() - payload_start)?;
	Ok(value)
}

/// Read a container count. Storage grows with decoded children, never with the declared count.
fn read_count(cursor: &mut Cursor<'_>, opt: &DecodeOptions, min_item_size: usize) -> Result<usize> {
	let at = cursor.pos();
	let count = cursor.read_len(min_item_size)?;
	if count > opt.max_elems {
		return Err(SaveError::ContainerTooLarge {
			at,
			count,
			max: opt.max_elems,
		});
	}
	Ok(count)
}

fn read_string(cursor: &mut Cursor<'_>) -> Result<Box<str>> {
	let len = cursor.read_len(1)?;
	let at = cursor.pos();
	let raw = cursor.read_exact(len)?;
	let text = std::str::from_utf8(raw).map_err(|_| SaveError::InvalidUtf8 { at })?;
	Ok(text.into())
}
