//! Rebuild of a sorted scratch buffer into the result map.

use indexmap::IndexMap;
use indexmap::map::Entry as MapEntry;

use crate::buffer::ScratchBuffer;
use crate::error::{Result, UnnestError};
use crate::options::DuplicateKeys;

/// Flat result: path keys mapped to borrowed leaves, in ascending key order.
pub type FlatMap<'a, V> = IndexMap<String, &'a V>;

/// Moves every entry of `buffer` into a new [`FlatMap`], in buffer order.
///
/// The buffer should already be sorted with [`ScratchBuffer::sort_by_key`];
/// insertion order is preserved as-is. Keys are moved, not copied.
pub fn rebuild<'a, V>(buffer: ScratchBuffer<'a, V>, duplicates: DuplicateKeys) -> Result<FlatMap<'a, V>> {
	debug_assert!(buffer.is_sorted(), "rebuild expects a sorted buffer");

	let mut out = IndexMap::with_capacity(buffer.len());
	for entry in buffer.drain() {
		let (key, value) = entry.into_parts();
		match out.entry(key) {
			MapEntry::Vacant(slot) => {
				slot.insert(value);
			}
			MapEntry::Occupied(mut slot) => match duplicates {
				DuplicateKeys::LastWriteWins => {
					tracing::debug!(key = %slot.key(), "unnest.duplicate_key.replaced");
					slot.insert(value);
				}
				DuplicateKeys::Reject => {
					return Err(UnnestError::DuplicateKey { key: slot.key().clone() });
				}
			},
		}
	}
	Ok(out)
}

/// Clones every borrowed leaf so the result can outlive the input.
pub fn into_owned<V: Clone>(flat: FlatMap<'_, V>) -> IndexMap<String, V> {
	flat.into_iter().map(|(key, value)| (key, value.clone())).collect()
}
