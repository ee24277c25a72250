use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, SaveError>;

/// Errors produced while decoding, encoding, and converting save data.
#[derive(Debug, Error)]
pub enum SaveError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Text form could not be parsed or rendered.
	#[error("text: {0}")]
	Json(#[from] serde_json::Error),
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Tag code is not part of the supported variant table.
	#[error("unknown variant tag 0x{code:08x} at offset {at}")]
	UnknownTag {
		/// Offset of the tag.
		at: usize,
		/// Raw 32-bit tag code.
		code: u32,
	},
	/// Bytes remained after the root value was fully decoded.
	#[error("trailing data at offset {at}: {rem} bytes after root value")]
	TrailingData {
		/// Offset just past the root value.
		at: usize,
		/// Unconsumed byte count.
		rem: usize,
	},
	/// Declared string length or element count cannot fit in the input.
	#[error("malformed length {len} at offset {at} (input holds at most {limit})")]
	MalformedLength {
		/// Offset of the length field.
		at: usize,
		/// Declared length or count.
		len: u32,
		/// Largest value the input could hold.
		limit: usize,
	},
	/// Container element count exceeded the configured limit.
	#[error("container too large at offset {at}: count={count}, max={max}")]
	ContainerTooLarge {
		/// Offset of the count field.
		at: usize,
		/// Declared element count.
		count: usize,
		/// Maximum permitted element count.
		max: usize,
	},
	/// Alignment padding contained a non-zero byte.
	#[error("non-zero padding byte at offset {at}")]
	NonZeroPadding {
		/// Offset of the offending byte.
		at: usize,
	},
	/// Bool payload was neither 0 nor 1.
	#[error("invalid bool payload {raw} at offset {at}")]
	InvalidBool {
		/// Offset of the payload.
		at: usize,
		/// Raw 32-bit payload.
		raw: u32,
	},
	/// String payload was not valid UTF-8.
	#[error("invalid utf-8 string at offset {at}")]
	InvalidUtf8 {
		/// Offset of the first string byte.
		at: usize,
	},
	/// Decoder recursion depth exceeded configured limit.
	#[error("decode depth exceeded at offset {at} (max={max_depth})")]
	DepthExceeded {
		/// Offset of the value that would exceed the limit.
		at: usize,
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Save file length prefix is smaller than any encoded value.
	#[error("invalid save header: declared length {declared}")]
	InvalidHeader {
		/// Declared root length.
		declared: u32,
	},
	/// A length does not fit its 32-bit wire field.
	#[error("length {len} does not fit a 32-bit length field")]
	TooLarge {
		/// Offending length.
		len: usize,
	},
	/// Re-encoded bytes differ from the source bytes.
	#[error("round trip mismatch at offset {at} (source {source_len} bytes, emitted {emitted_len} bytes)")]
	RoundTripMismatch {
		/// First differing offset.
		at: usize,
		/// Source length.
		source_len: usize,
		/// Re-encoded length.
		emitted_len: usize,
	},
}
