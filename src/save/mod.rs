mod bytes;
mod decode;
mod encode;
mod error;
mod file;
mod float;
mod header;
mod stats;
mod tag;
mod value;

/// Alignment padding rule shared by decoder and encoder.
pub use bytes::pad_len;
/// Variant decoding entry points and options.
pub use decode::{DecodeOptions, decode, decode_with};
/// Variant encoding entry point.
pub use encode::encode;
/// Error and result aliases.
pub use error::{Result, SaveError};
/// Save file envelope and round-trip check.
pub use file::{SaveFile, verify_round_trip};
/// Save file length prefix conventions.
pub use header::LengthPrefix;
/// Tree shape summary.
pub use stats::{ValueStats, scan_stats};
/// Wire tag table.
pub use tag::{ENCODE_FLAG_64, TAG_TABLE, Tag};
/// Decoded variant types.
pub use value::{DictEntry, Variant, Vector2};
