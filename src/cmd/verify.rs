use std::fs;
use std::path::PathBuf;

use wfsave::save::{DecodeOptions, Result, verify_round_trip};

use crate::cmd::util::MAX_DEPTH_CEILING;

#[derive(clap::Args)]
pub struct Args {
	/// Input .sav file.
	pub path: PathBuf,
	/// Maximum container nesting depth (1 to 1024, default 128).
	#[arg(long = "max-depth", value_parser = clap::value_parser!(u32).range(1..=MAX_DEPTH_CEILING))]
	pub max_depth: Option<u32>,
}

/// Decode, re-encode, and compare against the source bytes.
pub fn run(args: Args) -> Result<()> {
	let Args { path, max_depth } = args;

	let mut decode = DecodeOptions::default();
	if let Some(max_depth) = max_depth {
		decode.max_depth = max_depth;
	}

	let bytes = fs::read(&path)?;
	let file = verify_round_trip(&bytes, &decode)?;

	println!("ok: {} ({} bytes, {} prefix, {} root)", path.display(), bytes.len(), file.length_prefix.as_str(), file.root.tag().as_str());
	Ok(())
}
