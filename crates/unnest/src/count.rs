//! Leaf counting pre-pass.

use crate::error::{Result, UnnestError};
use crate::nested::Nested;

/// Counts the scalar leaves reachable from `value`.
///
/// A scalar counts as one leaf and an empty mapping as none. Keys are not
/// inspected, so an invalid key is only reported by the flattening pass.
pub fn count_leaves<V: Nested>(value: &V) -> Result<usize> {
	let Some(entries) = value.entries() else {
		return Ok(1);
	};

	let mut total = 0usize;
	for (_, child) in entries {
		let leaves = count_leaves(child)?;
		total = total.checked_add(leaves).ok_or_else(UnnestError::count_overflow)?;
	}
	Ok(total)
}
