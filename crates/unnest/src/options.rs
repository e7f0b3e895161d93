//! Pipeline options.

/// What to do when two leaves flatten to the same path key.
///
/// Collisions only happen when a key itself contains the separator, e.g.
/// `{"a.b": 1, "a": {"b": 2}}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateKeys {
	/// Keep a single entry for the key, at its sorted position.
	///
	/// Colliding entries compare equal under the key sort, which is not
	/// stable, so which of their values survives is unspecified.
	#[default]
	LastWriteWins,
	/// Abort with [`UnnestError::DuplicateKey`](crate::UnnestError::DuplicateKey).
	Reject,
}

/// Options for [`unnest_with`](crate::unnest_with).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnnestOptions {
	pub duplicates: DuplicateKeys,
}

impl UnnestOptions {
	#[must_use]
	pub const fn new() -> Self {
		Self {
			duplicates: DuplicateKeys::LastWriteWins,
		}
	}

	#[must_use]
	pub const fn duplicates(mut self, duplicates: DuplicateKeys) -> Self {
		self.duplicates = duplicates;
		self
	}
}
