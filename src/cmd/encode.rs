use std::fs;
use std::path::PathBuf;

use wfsave::save::{Result, SaveFile};

#[derive(clap::Args)]
pub struct Args {
	/// Input JSON file in the editable text form.
	pub input: PathBuf,
	/// Output .sav file.
	pub output: PathBuf,
}

/// Encode a JSON text form document into a save file.
pub fn run(args: Args) -> Result<()> {
	let Args { input, output } = args;

	let text = fs::read_to_string(&input)?;
	let file = SaveFile::from_text(&text)?;
	file.write(&output)?;

	println!("encoded {} -> {}", input.display(), output.display());
	Ok(())
}
