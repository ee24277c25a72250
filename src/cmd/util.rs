use serde::Serialize;
use serde_json::{Map, Value as JsonValue, json};
use wfsave::save::{Result, Variant};

/// Well-known root keys shown by `--info` and `info`.
pub(crate) const PLAYER_STATS: [(&str, &str); 4] = [("level", "Level"), ("xp", "XP"), ("money", "Money"), ("fish_caught", "Fish Caught")];

/// Highest `--max-depth` the decoder's recursion can take on the main thread stack.
pub(crate) const MAX_DEPTH_CEILING: i64 = 1024;

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

/// Lossy display view: dictionaries become objects and widths are dropped.
pub(crate) fn plain_json(value: &Variant) -> JsonValue {
	match value {
		Variant::Nil => JsonValue::Null,
		Variant::Bool(v) => json!(v),
		Variant::Int32(v) => json!(v),
		Variant::Int64(v) => json!(v),
		Variant::Float32(v) => json!(v),
		Variant::Float64(v) => json!(v),
		Variant::String(v) => json!(v),
		Variant::Vector2(v) => json!({ "x": v.x, "y": v.y }),
		Variant::Array(items) => JsonValue::Array(items.iter().map(plain_json).collect()),
		Variant::Dictionary(entries) => {
			let fields: Map<String, JsonValue> = entries
				.iter()
				.map(|entry| (plain_key(&entry.key), plain_json(&entry.value)))
				.collect();
			JsonValue::Object(fields)
		}
	}
}

fn plain_key(key: &Variant) -> String {
	match key {
		Variant::String(v) => v.to_string(),
		Variant::Int32(v) => format!("0x{v:08X}"),
		Variant::Int64(v) => format!("0x{v:08X}"),
		other => render_value(other),
	}
}

/// One-line rendering of a value for text output.
pub(crate) fn render_value(value: &Variant) -> String {
	match value {
		Variant::Nil => "null".to_owned(),
		Variant::Bool(v) => v.to_string(),
		Variant::Int32(v) => v.to_string(),
		Variant::Int64(v) => v.to_string(),
		Variant::Float32(v) => v.to_string(),
		Variant::Float64(v) => v.to_string(),
		Variant::String(v) => v.to_string(),
		Variant::Vector2(v) => format!("({}, {})", v.x, v.y),
		Variant::Array(items) => format!("array[{}]", items.len()),
		Variant::Dictionary(entries) => format!("dictionary[{}]", entries.len()),
	}
}

/// `Label: value` lines for the well-known player stats.
pub(crate) fn player_stat_lines(root: &Variant) -> Vec<String> {
	PLAYER_STATS
		.iter()
		.map(|(key, label)| {
			let value = root.get(key).map(render_value).unwrap_or_else(|| "N/A".to_owned());
			format!("{label}: {value}")
		})
		.collect()
}
