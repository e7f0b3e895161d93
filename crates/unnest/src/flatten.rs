//! Path-building flattening pass.

use crate::SEPARATOR;
use crate::buffer::{Entry, ScratchBuffer};
use crate::error::{Result, UnnestError};
use crate::nested::{Nested, PathSegment};

/// Appends one entry per scalar leaf under `value` to `buffer`.
///
/// Keys are `prefix` followed by the dot-joined chain of mapping keys down to
/// the leaf. Entries are written depth-first in the host's iteration order.
/// A scalar `value` contributes nothing since it has no key of its own.
///
/// Fails with [`UnnestError::CapacityExceeded`] when `buffer` is too small for
/// the leaves found, and with [`UnnestError::InvalidKey`] on a key that has no
/// string form.
pub fn flatten_into<'a, V: Nested>(value: &'a V, prefix: &str, buffer: &mut ScratchBuffer<'a, V>) -> Result<()> {
	let mut path = String::from(prefix);
	walk(value, &mut path, buffer)
}

/// `path` is the running prefix, always empty or ending in the separator.
/// It is restored to its entry state before each sibling is visited.
fn walk<'a, V: Nested>(value: &'a V, path: &mut String, buffer: &mut ScratchBuffer<'a, V>) -> Result<()> {
	let Some(entries) = value.entries() else {
		return Ok(());
	};

	for (key, child) in entries {
		let segment = key.as_segment().ok_or_else(|| invalid_key(key, path.as_str()))?;
		let mark = path.len();
		path.push_str(segment);

		if child.is_mapping() {
			path.push(SEPARATOR);
			walk(child, path, buffer)?;
		} else {
			buffer.push(Entry::new(path.clone(), child))?;
		}

		path.truncate(mark);
	}
	Ok(())
}

fn invalid_key<K: PathSegment + ?Sized>(key: &K, path: &str) -> UnnestError {
	let parent = path.strip_suffix(SEPARATOR).unwrap_or(path);
	UnnestError::InvalidKey {
		parent: if parent.is_empty() { "<root>".to_owned() } else { parent.to_owned() },
		found: key.type_name(),
	}
}
