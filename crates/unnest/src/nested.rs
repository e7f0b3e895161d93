//! Host value seam.
//!
//! The pipeline never looks at concrete value types. It only needs to know
//! whether a node is a mapping, how to iterate a mapping's children, and how
//! to turn a key into a path segment.

/// A node of a nested key/value tree.
///
/// A node is a mapping when [`Nested::entries`] returns `Some`, and a scalar
/// leaf otherwise. Lists, nulls and every other non-mapping value are leaves.
pub trait Nested {
	/// Key type of a mapping.
	type Key: PathSegment + ?Sized;

	/// Iterator over a mapping's `(key, child)` pairs.
	///
	/// Each key must be yielded exactly once; order is up to the host.
	type Entries<'a>: Iterator<Item = (&'a Self::Key, &'a Self)>
	where
		Self: 'a;

	/// Returns the children of a mapping, `None` for a scalar.
	fn entries(&self) -> Option<Self::Entries<'_>>;

	/// Short type name used in diagnostics.
	fn type_name(&self) -> &'static str;

	/// Whether this node is a mapping.
	///
	/// Override when [`Nested::entries`] is costly or has side effects.
	fn is_mapping(&self) -> bool {
		self.entries().is_some()
	}
}

/// A mapping key that may be usable as a path segment.
pub trait PathSegment {
	/// Returns the key as a string, `None` when it has no string form.
	fn as_segment(&self) -> Option<&str>;

	/// Short type name used in diagnostics.
	fn type_name(&self) -> &'static str;
}

impl PathSegment for str {
	fn as_segment(&self) -> Option<&str> {
		Some(self)
	}

	fn type_name(&self) -> &'static str {
		"string"
	}
}

impl PathSegment for String {
	fn as_segment(&self) -> Option<&str> {
		Some(self)
	}

	fn type_name(&self) -> &'static str {
		"string"
	}
}

impl Nested for serde_json::Value {
	type Key = String;
	type Entries<'a> = serde_json::map::Iter<'a>;

	fn entries(&self) -> Option<Self::Entries<'_>> {
		match self {
			Self::Object(map) => Some(map.iter()),
			_ => None,
		}
	}

	fn type_name(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Number(_) => "number",
			Self::String(_) => "string",
			Self::Array(_) => "array",
			Self::Object(_) => "object",
		}
	}
}

impl Nested for unnest_data::Value {
	type Key = String;
	type Entries<'a> = unnest_data::RecordIter<'a>;

	fn entries(&self) -> Option<Self::Entries<'_>> {
		match self {
			Self::Record(record) => Some(record.iter()),
			_ => None,
		}
	}

	fn type_name(&self) -> &'static str {
		self.get_type().as_str()
	}
}
