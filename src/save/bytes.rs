use crate::save::{Result, SaveError};

/// Zero bytes needed after a payload of `size` bytes to reach a 4-byte boundary.
pub fn pad_len(size: usize) -> usize {
	(4 - size % 4) % 4
}

/// Simple bounded cursor over an immutable byte slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(SaveError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut out = [0_u8; N];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read the next little-endian `u32` without advancing.
	pub fn peek_u32_le(&self) -> Result<u32> {
		let mut probe = Cursor { bytes: self.bytes, pos: self.pos };
		probe.read_u32_le()
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32> {
		Ok(u32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i32`.
	pub fn read_i32_le(&mut self) -> Result<i32> {
		Ok(i32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i64`.
	pub fn read_i64_le(&mut self) -> Result<i64> {
		Ok(i64::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `f32`, keeping its exact bit pattern.
	pub fn read_f32_le(&mut self) -> Result<f32> {
		Ok(f32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `f64`, keeping its exact bit pattern.
	pub fn read_f64_le(&mut self) -> Result<f64> {
		Ok(f64::from_le_bytes(self.read_array()?))
	}

	/// Read a `u32` length field whose items occupy at least `min_item_size` bytes each.
	///
	/// Lengths that could not fit even in the whole buffer are rejected before the caller
	/// allocates anything; lengths that merely overrun the remaining bytes are left to
	/// surface as [`SaveError::UnexpectedEof`] on the following reads.
	pub fn read_len(&mut self, min_item_size: usize) -> Result<usize> {
		let at = self.pos;
		let len = self.read_u32_le()?;
		let limit = self.bytes.len() / min_item_size.max(1);
		let count = usize::try_from(len).map_err(|_| SaveError::MalformedLength { at, len, limit })?;
		if count > limit {
			return Err(SaveError::MalformedLength { at, len, limit });
		}
		Ok(count)
	}

	/// Consume the alignment padding that follows a payload of `payload_len` bytes.
	pub fn skip_padding(&mut self, payload_len: usize) -> Result<()> {
		let start = self.pos;
		let padding = self.read_exact(pad_len(payload_len))?;
		if let Some(offset) = padding.iter().position(|byte| *byte != 0) {
			return Err(SaveError::NonZeroPadding { at: start + offset });
		}
		Ok(())
	}
}

/// Append-only little-endian byte writer.
#[derive(Debug, Default)]
pub struct Writer {
	bytes: Vec<u8>,
}

impl Writer {
	/// Create an empty writer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Return current write offset.
	pub fn pos(&self) -> usize {
		self.bytes.len()
	}

	/// Append raw bytes.
	pub fn write_bytes(&mut self, bytes: &[u8]) {
		self.bytes.extend_from_slice(bytes);
	}

	/// Append a little-endian `u32`.
	pub fn write_u32_le(&mut self, value: u32) {
		self.write_bytes(&value.to_le_bytes());
	}

	/// Append a little-endian `i32`.
	pub fn write_i32_le(&mut self, value: i32) {
		self.write_bytes(&value.to_le_bytes());
	}

	/// Append a little-endian `i64`.
	pub fn write_i64_le(&mut self, value: i64) {
		self.write_bytes(&value.to_le_bytes());
	}

	/// Append a little-endian `f32`.
	pub fn write_f32_le(&mut self, value: f32) {
		self.write_bytes(&value.to_le_bytes());
	}

	/// Append a little-endian `f64`.
	pub fn write_f64_le(&mut self, value: f64) {
		self.write_bytes(&value.to_le_bytes());
	}

	/// Append a `u32` length field.
	pub fn write_len(&mut self, len: usize) -> Result<()> {
		let value = u32::try_from(len).map_err(|_| SaveError::TooLarge { len })?;
		self.write_u32_le(value);
		Ok(())
	}

	/// Append zero padding after a payload of `payload_len` bytes.
	pub fn pad(&mut self, payload_len: usize) {
		let new_len = self.bytes.len() + pad_len(payload_len);
		self.bytes.resize(new_len, 0);
	}

	/// Finish writing and return the buffer.
	pub fn into_bytes(self) -> Vec<u8> {
		self.bytes
	}
}

#[cfg(test)]
mod tests {
	use super::{Cursor, Writer, pad_len};
	use crate::save::SaveError;

	#[test]
	fn padding_rounds_up_to_four() {
		let expected = [0, 3, 2, 1, 0, 3];
		for (size, pad) in expected.into_iter().enumerate() {
			assert_eq!(pad_len(size), pad, "payload size {size}");
		}
	}

	#[test]
	fn read_past_end_reports_offset() {
		let mut cursor = Cursor::new(&[1, 0, 0, 0, 7]);
		assert_eq!(cursor.read_u32_le().expect("u32 reads"), 1);

		let err = cursor.read_u32_le().expect_err("short read fails");
		assert!(matches!(err, SaveError::UnexpectedEof { at: 4, need: 4, rem: 1 }));
		assert_eq!(cursor.pos(), 4, "failed read must not advance");
	}

	#[test]
	fn peek_does_not_advance() {
		let cursor = Cursor::new(&[0x12, 0x00, 0x00, 0x00]);
		assert_eq!(cursor.peek_u32_le().expect("peek"), 18);
		assert_eq!(cursor.pos(), 0);
	}

	#[test]
	fn read_len_rejects_counts_larger_than_buffer() {
		let mut cursor = Cursor::new(&[0xff, 0xff, 0xff, 0x7f, 0, 0, 0, 0]);
		let err = cursor.read_len(4).expect_err("huge count fails");
		assert!(matches!(err, SaveError::MalformedLength { at: 0, len: 0x7fff_ffff, limit: 2 }));
	}

	#[test]
	fn read_len_leaves_overruns_to_eof() {
		let mut cursor = Cursor::new(&[6, 0, 0, 0, b'a', b'b']);
		assert_eq!(cursor.read_len(1).expect("fits buffer"), 6);
		let err = cursor.read_exact(6).expect_err("overrun fails");
		assert!(matches!(err, SaveError::UnexpectedEof { at: 4, need: 6, rem: 2 }));
	}

	#[test]
	fn padding_must_be_zero() {
		let mut cursor = Cursor::new(&[b'a', 0, 9, 0]);
		cursor.read_exact(1).expect("payload byte");
		let err = cursor.skip_padding(1).expect_err("dirty padding fails");
		assert!(matches!(err, SaveError::NonZeroPadding { at: 2 }));
	}

	#[test]
	fn writer_pads_with_zeros() {
		let mut writer = Writer::new();
		writer.write_bytes(b"abcde");
		writer.pad(5);
		assert_eq!(writer.into_bytes(), b"abcde\0\0\0");
	}
}
