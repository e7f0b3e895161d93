//! Flattens nested mappings into a single map keyed by dot-joined paths.
//!
//! `{"a": 1, "b": {"c": 2, "a": 3}}` becomes `{"a": 1, "b.a": 3, "b.c": 2}`,
//! with keys in ascending byte order. The work happens in one [`Pipeline`]:
//!
//! * [`count_leaves`] measures the number of scalar leaves,
//! * a [`ScratchBuffer`] of exactly that many slots is allocated,
//! * [`flatten_into`] fills it with path keys and borrowed leaves,
//! * the buffer is sorted by key and [`rebuild()`] moves it into a [`FlatMap`].
//!
//! Any type implementing [`Nested`] can be unnested. Implementations ship for
//! [`serde_json::Value`] and [`unnest_data::Value`].

pub mod buffer;
pub mod count;
pub mod error;
pub mod flatten;
pub mod nested;
pub mod options;
pub mod pipeline;
pub mod rebuild;

#[cfg(test)]
mod test_support;

pub use buffer::{Entry, ScratchBuffer};
pub use count::count_leaves;
pub use error::{Result, UnnestError};
pub use flatten::flatten_into;
pub use nested::{Nested, PathSegment};
pub use options::{DuplicateKeys, UnnestOptions};
pub use pipeline::{Phase, Pipeline};
pub use rebuild::{FlatMap, into_owned, rebuild};

/// Separator placed between path segments.
pub const SEPARATOR: char = '.';

/// Flattens `root` with default options.
///
/// Duplicate path keys resolve last-write-wins.
pub fn unnest<V: Nested>(root: &V) -> Result<FlatMap<'_, V>> {
	unnest_with(root, UnnestOptions::default())
}

/// Flattens `root` with explicit options.
pub fn unnest_with<V: Nested>(root: &V, options: UnnestOptions) -> Result<FlatMap<'_, V>> {
	Pipeline::new(root, options).run()
}

/// Method form of [`unnest`], available on every [`Nested`] type.
pub trait Unnest: Nested + Sized {
	/// Flattens `self` with default options. See [`unnest`].
	fn unnest(&self) -> Result<FlatMap<'_, Self>> {
		unnest(self)
	}

	/// Flattens `self` with explicit options. See [`unnest_with`].
	fn unnest_with(&self, options: UnnestOptions) -> Result<FlatMap<'_, Self>> {
		unnest_with(self, options)
	}
}

impl<V: Nested> Unnest for V {}
