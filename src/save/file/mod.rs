use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::save::bytes::Cursor;
use crate::save::decode::decode_root;
use crate::save::{DecodeOptions, LengthPrefix, Result, SaveError, Variant, encode};

/// A whole `.sav` file: the `u32` length prefix followed by one root variant.
///
/// This is also the document shape of the text form, so a decoded file can be written out as
/// JSON, edited, and read back without losing the prefix convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveFile {
	/// How the prefix is derived from the root length.
	#[serde(default)]
	pub length_prefix: LengthPrefix,
	/// Root value, usually a dictionary.
	pub root: Variant,
}

impl SaveFile {
	/// Wrap a root value using Godot's own prefix convention.
	pub fn new(root: Variant) -> Self {
		Self {
			length_prefix: LengthPrefix::Exact,
			root,
		}
	}

	/// Read and decode a save file from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let bytes = fs::read(path)?;
		Self::parse(&bytes)
	}

	/// Decode a save file held in memory.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		Self::parse_with(bytes, &DecodeOptions::default())
	}

	/// Decode a save file held in memory, using explicit limits.
	pub fn parse_with(bytes: &[u8], opt: &DecodeOptions) -> Result<Self> {
		let mut cursor = Cursor::new(bytes);
		let declared = LengthPrefix::read_declared(&mut cursor)?;
		let root = decode_root(&mut cursor, opt)?;
		let root_len = bytes.len() - LengthPrefix::SIZE;

		Ok(Self {
			length_prefix: LengthPrefix::classify(declared, root_len),
			root,
		})
	}

	/// Encode the file, recomputing the prefix for the current root.
	pub fn to_bytes(&self) -> Result<Vec<u8>> {
		let root = encode(&self.root)?;
		let declared = self.length_prefix.resolve(root.len())?;

		let mut out = Vec::with_capacity(LengthPrefix::SIZE + root.len());
		out.extend_from_slice(&declared.to_le_bytes());
		out.extend_from_slice(&root);
		Ok(out)
	}

	/// Encode and write the file to disk.
	pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
		fs::write(path, self.to_bytes()?)?;
		Ok(())
	}

	/// Parse the JSON text form.
	pub fn from_text(text: &str) -> Result<Self> {
		Ok(serde_json::from_str(text)?)
	}

	/// Render the JSON text form.
	pub fn to_text(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}
}

/// Decode `bytes`, re-encode the result, and require identical output.
pub fn verify_round_trip(bytes: &[u8], opt: &DecodeOptions) -> Result<SaveFile> {
	let file = SaveFile::parse_with(bytes, opt)?;
	let emitted = file.to_bytes()?;
	if let Some(at) = first_difference(bytes, &emitted) {
		return Err(SaveError::RoundTripMismatch {
			at,
			source_len: bytes.len(),
			emitted_len: emitted.len(),
		});
	}
	Ok(file)
}

/// Offset of the first byte where `left` and `right` disagree. A strict prefix differs at its end.
fn first_difference(left: &[u8], right: &[u8]) -> Option<usize> {
	if left == right {
		return None;
	}
	let at = left
		.iter()
		.zip(right)
		.position(|(left, right)| left != right)
		.unwrap_or_else(|| left.len().min(right.len()));
	Some(at)
}

#[cfg(test)]
mod tests;
