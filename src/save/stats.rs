use std::collections::BTreeMap;

use crate::save::{Tag, Variant};

/// Shape summary of a decoded value tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueStats {
	/// Total values, including dictionary keys and the root.
	pub node_count: usize,
	/// Deepest nesting level, the root being level 0.
	pub max_depth: u32,
	/// Value count per wire kind.
	pub kinds: BTreeMap<Tag, usize>,
}

/// Walk a value tree and count its nodes by kind.
pub fn scan_stats(root: &Variant) -> ValueStats {
	let mut stats = ValueStats::default();
	let mut stack = vec![(root, 0_u32)];

	while let Some((value, depth)) = stack.pop() {
		stats.node_count += 1;
		stats.max_depth = stats.max_depth.max(depth);
		*stats.kinds.entry(value.tag()).or_insert(0) += 1;

		match value {
			Variant::Array(items) => stack.extend(items.iter().map(|item| (item, depth + 1))),
			Variant::Dictionary(entries) => {
				for entry in entries {
					stack.push((&entry.key, depth + 1));
					stack.push((&entry.value, depth + 1));
				}
			}
			_ => {}
		}
	}

	stats
}
