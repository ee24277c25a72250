#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "wfsave", about = "WebFishing save file converter")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Convert a .sav file to JSON.
	Decode(cmd::decode::Args),
	/// Convert JSON back to a .sav file.
	Encode(cmd::encode::Args),
	/// Print file and player summary.
	Info(cmd::info::Args),
	/// Check that a .sav file re-encodes byte for byte.
	Verify(cmd::verify::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> wfsave::save::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Encode(args) => cmd::encode::run(args),
		Commands::Info(args) => cmd::info::run(args),
		Commands::Verify(args) => cmd::verify::run(args),
	}
}
