use serde::{Deserialize, Serialize};

use crate::save::bytes::Cursor;
use crate::save::{Result, SaveError, Tag};

/// How the leading `u32` of a save file relates to the encoded root value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthPrefix {
	/// Prefix equals the root length, as written by Godot's `File.store_var`.
	#[default]
	Exact,
	/// Prefix also counts its own four bytes.
	Inclusive,
	/// Prefix matched neither rule and is written back unchanged.
	Verbatim(u32),
}

impl LengthPrefix {
	/// Encoded prefix size in bytes.
	pub const SIZE: usize = 4;

	/// Read the declared root length, rejecting values shorter than any encoded value.
	pub(crate) fn read_declared(cursor: &mut Cursor<'_>) -> Result<u32> {
		let declared = cursor.read_u32_le()?;
		if (declared as usize) < Tag::SIZE {
			return Err(SaveError::InvalidHeader { declared });
		}
		Ok(declared)
	}

	/// Classify a declared prefix against the root length that followed it.
	pub fn classify(declared: u32, root_len: usize) -> Self {
		let declared_len = declared as usize;
		if declared_len == root_len {
			Self::Exact
		} else if declared_len == root_len + Self::SIZE {
			Self::Inclusive
		} else {
			Self::Verbatim(declared)
		}
	}

	/// Prefix value to write before a root of `root_len` bytes.
	pub fn resolve(self, root_len: usize) -> Result<u32> {
		let len = match self {
			Self::Exact => root_len,
			Self::Inclusive => root_len + Self::SIZE,
			Self::Verbatim(declared) => return Ok(declared),
		};
		u32::try_from(len).map_err(|_| SaveError::TooLarge { len })
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Exact => "exact",
			Self::Inclusive => "inclusive",
			Self::Verbatim(_) => "verbatim",
		}
	}
}
