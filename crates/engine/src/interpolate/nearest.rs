// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Lacuna

use lacuna_core::ColumnData;

use crate::interpolate::gap::scan;

/// Nearest-neighbor fill. Selection is purely positional, so one value-level
/// pass serves every supported family, and the output buffer has exactly the
/// input's type. An exact midpoint takes the right anchor.
pub(crate) fn fill_nearest(data: &ColumnData) -> ColumnData {
	let gaps = scan(data.bitvec());
	let mut out = ColumnData::with_capacity(&data.get_type(), data.len());
	let mut next_gap = 0;

	for index in 0..data.len() {
		if data.is_defined(index) {
			out.push_value(data.get_value(index));
			continue;
		}
		while next_gap < gaps.len() && gaps[next_gap].last < index {
			next_gap += 1;
		}
		match gaps.get(next_gap) {
			Some(gap) if gap.covers(index) => {
				let anchor = if 2 * (index - gap.left) < gap.width() {
					gap.left
				} else {
					gap.right
				};
				out.push_value(data.get_value(anchor));
			}
			_ => out.push_undefined(),
		}
	}

	out
}
