use super::{SaveFile, first_difference, verify_round_trip};
use crate::save::{DecodeOptions, LengthPrefix, SaveError, Variant};

fn sample() -> SaveFile {
	SaveFile::new(Variant::dictionary([
		(Variant::from("level"), Variant::Int32(4)),
		(Variant::from("money"), Variant::Int64(250)),
	]))
}

fn with_prefix(declared: u32, root: &[u8]) -> Vec<u8> {
	let mut bytes = declared.to_le_bytes().to_vec();
	bytes.extend_from_slice(root);
	bytes
}

#[test]
fn new_file_uses_exact_prefix() {
	let bytes = sample().to_bytes().expect("encodes");
	let declared = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
	assert_eq!(declared as usize, bytes.len() - LengthPrefix::SIZE);
}

#[test]
fn prefix_conventions_round_trip() {
	let root = crate::save::encode(&Variant::from("bait")).expect("encodes");
	let root_len = root.len() as u32;

	for (declared, expected) in [
		(root_len, LengthPrefix::Exact),
		(root_len + 4, LengthPrefix::Inclusive),
		(root_len + 100, LengthPrefix::Verbatim(root_len + 100)),
	] {
		let bytes = with_prefix(declared, &root);
		let file = verify_round_trip(&bytes, &DecodeOptions::default()).expect("round trips");
		assert_eq!(file.length_prefix, expected);
	}
}

#[test]
fn inclusive_prefix_follows_edits() {
	let root = crate::save::encode(&Variant::from("bait")).expect("encodes");
	let bytes = with_prefix(root.len() as u32 + 4, &root);

	let mut file = SaveFile::parse(&bytes).expect("parses");
	file.root = Variant::from("a much longer bait name");
	let edited = file.to_bytes().expect("encodes");

	let declared = u32::from_le_bytes([edited[0], edited[1], edited[2], edited[3]]);
	assert_eq!(declared as usize, edited.len());
}

#[test]
fn tiny_prefix_is_invalid_header() {
	let err = SaveFile::parse(&with_prefix(2, &[0, 0, 0, 0])).expect_err("prefix below tag size");
	assert!(matches!(err, SaveError::InvalidHeader { declared: 2 }));
}

#[test]
fn offsets_include_the_prefix() {
	let err = SaveFile::parse(&with_prefix(4, &[6, 0, 0, 0])).expect_err("unknown root tag");
	assert!(matches!(err, SaveError::UnknownTag { at: 4, code: 6 }));

	let err = SaveFile::parse(&with_prefix(4, &[0, 0, 0, 0, 0])).expect_err("trailing byte");
	assert!(matches!(err, SaveError::TrailingData { at: 8, rem: 1 }));
}

#[test]
fn text_form_round_trips_widths() {
	let file = sample();
	let text = file.to_text().expect("renders");
	assert!(text.contains(r#""type": "int64""#), "money keeps its width: {text}");

	let back = SaveFile::from_text(&text).expect("parses");
	assert_eq!(back, file);
	assert_eq!(back.to_bytes().expect("encodes"), file.to_bytes().expect("encodes"));
}

#[test]
fn text_form_defaults_to_exact_prefix() {
	let file = SaveFile::from_text(r#"{"root":{"type":"int32","value":9}}"#).expect("parses");
	assert_eq!(file.length_prefix, LengthPrefix::Exact);
	assert_eq!(file.root, Variant::Int32(9));
}

#[test]
fn text_form_rejects_unknown_kind() {
	let err = SaveFile::from_text(r#"{"root":{"type":"vector3","value":[1,2,3]}}"#).expect_err("vector3 unsupported");
	assert!(matches!(err, SaveError::Json(_)));
}

mod fixture_player {
	use std::path::{Path, PathBuf};

	use crate::save::{LengthPrefix, SaveFile, Variant};

	#[test]
	fn player_fixture_decodes_known_fields() {
		let file = SaveFile::open(fixture_path("player.sav")).expect("fixture opens");
		assert_eq!(file.length_prefix, LengthPrefix::Exact);

		let root = &file.root;
		assert_eq!(root.get("level"), Some(&Variant::Int32(12)));
		assert_eq!(root.get("save_version"), Some(&Variant::Int64(3)));
		assert_eq!(root.get("username").and_then(Variant::as_str), Some("angler"));
		assert_eq!(root.get("rod_power"), Some(&Variant::Float32(1.5)));
		assert_eq!(root.get("last_lure"), Some(&Variant::Nil));
	}

	#[test]
	fn player_fixture_reencodes_identically() {
		let path = fixture_path("player.sav");
		let bytes = std::fs::read(&path).expect("fixture reads");
		let file = SaveFile::parse(&bytes).expect("fixture parses");
		assert_eq!(file.to_bytes().expect("encodes"), bytes);
	}

	fn fixture_path(name: &str) -> PathBuf {
		Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
	}
}

#[test]
fn first_difference_names_mismatch_offset() {
	assert_eq!(first_difference(&[1, 2, 3], &[1, 2, 3]), None);
	assert_eq!(first_difference(&[], &[]), None);
	assert_eq!(first_difference(&[1, 2, 3, 4], &[1, 2, 9, 4]), Some(2));
	assert_eq!(first_difference(&[1, 2, 3, 4], &[1, 2]), Some(2));
	assert_eq!(first_difference(&[1], &[1, 0, 0, 0]), Some(1));
}
