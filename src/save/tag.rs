/// Width flag Godot sets on integer and real tags stored as 64-bit.
pub const ENCODE_FLAG_64: u32 = 1 << 16;

/// Wire kind of an encoded value, including its recorded numeric width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
	/// No payload.
	Nil,
	/// 32-bit `0`/`1` payload.
	Bool,
	/// 32-bit signed integer.
	Int32,
	/// 64-bit signed integer.
	Int64,
	/// 32-bit IEEE-754 float.
	Float32,
	/// 64-bit IEEE-754 float.
	Float64,
	/// Length-prefixed UTF-8 text.
	String,
	/// Two 32-bit floats.
	Vector2,
	/// Counted key/value pairs.
	Dictionary,
	/// Counted values.
	Array,
}

/// Supported tag codes, in Godot 3 variant order.
pub const TAG_TABLE: [(u32, Tag); 10] = [
	(0, Tag::Nil),
	(1, Tag::Bool),
	(2, Tag::Int32),
	(2 | ENCODE_FLAG_64, Tag::Int64),
	(3, Tag::Float32),
	(3 | ENCODE_FLAG_64, Tag::Float64),
	(4, Tag::String),
	(5, Tag::Vector2),
	(18, Tag::Dictionary),
	(19, Tag::Array),
];

impl Tag {
	/// Encoded tag size in bytes.
	pub const SIZE: usize = 4;

	/// Look up the tag for a raw wire code.
	pub fn from_code(code: u32) -> Option<Self> {
		TAG_TABLE.iter().find(|(known, _)| *known == code).map(|(_, tag)| *tag)
	}

	/// Raw wire code for this tag.
	pub fn code(self) -> u32 {
		match self {
			Self::Nil => 0,
			Self::Bool => 1,
			Self::Int32 => 2,
			Self::Int64 => 2 | ENCODE_FLAG_64,
			Self::Float32 => 3,
			Self::Float64 => 3 | ENCODE_FLAG_64,
			Self::String => 4,
			Self::Vector2 => 5,
			Self::Dictionary => 18,
			Self::Array => 19,
		}
	}

	/// Stable lowercase label, shared with the text form.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Nil => "nil",
			Self::Bool => "bool",
			Self::Int32 => "int32",
			Self::Int64 => "int64",
			Self::Float32 => "float32",
			Self::Float64 => "float64",
			Self::String => "string",
			Self::Vector2 => "vector2",
			Self::Dictionary => "dictionary",
			Self::Array => "array",
		}
	}
}
