use std::fs;
use std::path::PathBuf;

use serde_json::{Map, Value as JsonValue};
use wfsave::save::{LengthPrefix, Result, SaveFile, Tag, scan_stats};

use crate::cmd::util::{PLAYER_STATS, emit_json, plain_json, player_stat_lines};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print file layout, tree shape, and player stats.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let bytes = fs::read(&path)?;
	let file = SaveFile::parse(&bytes)?;
	let declared = file.length_prefix.resolve(bytes.len() - LengthPrefix::SIZE)?;
	let stats = scan_stats(&file.root);

	let mut kinds: Vec<(Tag, usize)> = stats.kinds.into_iter().collect();
	kinds.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(&right.0)));

	if json {
		let player: Map<String, JsonValue> = PLAYER_STATS
			.iter()
			.map(|(key, _)| (key.to_string(), file.root.get(key).map(plain_json).unwrap_or(JsonValue::Null)))
			.collect();

		return emit_json(&InfoJson {
			path: path.display().to_string(),
			file_len: bytes.len(),
			length_prefix: file.length_prefix.as_str(),
			declared_len: declared,
			root_kind: file.root.tag().as_str(),
			node_count: stats.node_count,
			max_depth: stats.max_depth,
			kinds: kinds
				.into_iter()
				.map(|(tag, count)| KindCountJson { kind: tag.as_str(), count })
				.collect(),
			player,
		});
	}

	println!("path: {}", path.display());
	println!("file_len: {}", bytes.len());
	println!("length_prefix: {}", file.length_prefix.as_str());
	println!("declared_len: {declared}");
	println!("root_kind: {}", file.root.tag().as_str());
	println!("node_count: {}", stats.node_count);
	println!("max_depth: {}", stats.max_depth);
	println!("kinds:");
	for (tag, count) in kinds {
		println!("  {}: {}", tag.as_str(), count);
	}
	println!("player:");
	for line in player_stat_lines(&file.root) {
		println!("  {line}");
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	file_len: usize,
	length_prefix: &'static str,
	declared_len: u32,
	root_kind: &'static str,
	node_count: usize,
	max_depth: u32,
	kinds: Vec<KindCountJson>,
	player: Map<String, JsonValue>,
}

#[derive(serde::Serialize)]
struct KindCountJson {
	kind: &'static str,
	count: usize,
}
