//! Fixed-capacity staging buffer between the flatten and sort phases.

use std::cmp::Ordering;

use crate::error::{Result, UnnestError};

/// A flattened leaf: its path key and a borrow of its value.
#[derive(Debug)]
pub struct Entry<'a, V> {
	key: String,
	value: &'a V,
}

impl<'a, V> Entry<'a, V> {
	pub fn new(key: String, value: &'a V) -> Self {
		Self { key, value }
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn value(&self) -> &'a V {
		self.value
	}

	pub fn into_parts(self) -> (String, &'a V) {
		(self.key, self.value)
	}
}

/// Append-only store of [`Entry`] slots sized once at creation.
///
/// Every slot starts absent and is written exactly once, in cursor order.
/// The buffer owns the synthesized keys and borrows every value for `'a`, so
/// the input tree stays alive and frozen until the buffer is drained or
/// dropped.
#[derive(Debug)]
pub struct ScratchBuffer<'a, V> {
	slots: Box<[Option<Entry<'a, V>>]>,
	/// Index of the next free slot. Slots below it are populated.
	cursor: usize,
}

impl<'a, V> ScratchBuffer<'a, V> {
	/// Allocates `capacity` absent slots.
	///
	/// Reports [`UnnestError::Alloc`] instead of aborting when the allocator
	/// refuses the request.
	pub fn with_capacity(capacity: usize) -> Result<Self> {
		let mut slots = Vec::new();
		slots
			.try_reserve_exact(capacity)
			.map_err(|source| UnnestError::Alloc {
				requested: capacity,
				source: Some(source),
			})?;
		slots.resize_with(capacity, || None);
		Ok(Self {
			slots: slots.into_boxed_slice(),
			cursor: 0,
		})
	}

	/// Writes `entry` into the next free slot.
	///
	/// Fails with [`UnnestError::CapacityExceeded`] once every slot is taken;
	/// the buffer is left unchanged in that case.
	pub fn push(&mut self, entry: Entry<'a, V>) -> Result<()> {
		let capacity = self.slots.len();
		let slot = self
			.slots
			.get_mut(self.cursor)
			.ok_or(UnnestError::CapacityExceeded { capacity })?;
		debug_assert!(slot.is_none(), "slot {} written twice", self.cursor);
		*slot = Some(entry);
		self.cursor += 1;
		Ok(())
	}

	pub fn len(&self) -> usize {
		self.cursor
	}

	pub fn is_empty(&self) -> bool {
		self.cursor == 0
	}

	pub fn capacity(&self) -> usize {
		self.slots.len()
	}

	pub fn is_full(&self) -> bool {
		self.cursor == self.slots.len()
	}

	/// Iterates the populated slots in index order.
	pub fn entries(&self) -> impl Iterator<Item = &Entry<'a, V>> {
		self.slots[..self.cursor].iter().flatten()
	}

	/// Sorts the populated slots by key, comparing raw bytes.
	///
	/// Not stable: keys are expected to be unique.
	pub fn sort_by_key(&mut self) {
		self.slots[..self.cursor].sort_unstable_by(compare_slots);
	}

	pub fn is_sorted(&self) -> bool {
		self.slots[..self.cursor].is_sorted_by(|a, b| compare_slots(a, b) != Ordering::Greater)
	}

	/// Consumes the buffer, yielding populated entries in index order.
	pub fn drain(self) -> impl Iterator<Item = Entry<'a, V>> {
		let cursor = self.cursor;
		self.slots.into_vec().into_iter().take(cursor).flatten()
	}
}

fn compare_slots<V>(a: &Option<Entry<'_, V>>, b: &Option<Entry<'_, V>>) -> Ordering {
	let a = a.as_ref().map(|entry| entry.key.as_bytes());
	let b = b.as_ref().map(|entry| entry.key.as_bytes());
	a.cmp(&b)
}
