use std::fs;
use std::path::PathBuf;

use wfsave::save::{DecodeOptions, Result, SaveFile};

use crate::cmd::util::{MAX_DEPTH_CEILING, plain_json, player_stat_lines};

#[derive(clap::Args)]
pub struct Args {
	/// Input .sav file.
	pub input: PathBuf,
	/// Output JSON file; stdout when omitted.
	pub output: Option<PathBuf>,
	/// Write the lossy plain view instead of the editable text form.
	#[arg(long)]
	pub plain: bool,
	/// Print basic player stats.
	#[arg(short, long)]
	pub info: bool,
	/// Maximum container nesting depth (1 to 1024, default 128).
	#[arg(long = "max-depth", value_parser = clap::value_parser!(u32).range(1..=MAX_DEPTH_CEILING))]
	pub max_depth: Option<u32>,
}

/// Decode a save file into JSON.
pub fn run(args: Args) -> Result<()> {
	let Args {
		input,
		output,
		plain,
		info,
		max_depth,
	} = args;

	let mut decode = DecodeOptions::default();
	if let Some(max_depth) = max_depth {
		decode.max_depth = max_depth;
	}

	let bytes = fs::read(&input)?;
	let file = SaveFile::parse_with(&bytes, &decode)?;
	let text = if plain {
		serde_json::to_string_pretty(&plain_json(&file.root))?
	} else {
		file.to_text()?
	};

	let Some(output) = output else {
		println!("{text}");
		if info {
			// stdout carries the JSON document
			for line in player_stat_lines(&file.root) {
				eprintln!("{line}");
			}
		}
		return Ok(());
	};

	fs::write(&output, text)?;
	println!("decoded {} -> {}", input.display(), output.display());
	if info {
		println!();
		println!("Player Stats:");
		for line in player_stat_lines(&file.root) {
			println!("{line}");
		}
	}

	Ok(())
}
