//! Minimal host tree for exercising non-string keys and fixed iteration order.

use crate::nested::{Nested, PathSegment};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Key {
	Name(String),
	Index(u32),
}

impl Key {
	pub(crate) fn name(name: &str) -> Self {
		Self::Name(name.to_owned())
	}
}

impl PathSegment for Key {
	fn as_segment(&self) -> Option<&str> {
		match self {
			Self::Name(name) => Some(name),
			Self::Index(_) => None,
		}
	}

	fn type_name(&self) -> &'static str {
		match self {
			Self::Name(_) => "string",
			Self::Index(_) => "index",
		}
	}
}

/// Mapping that iterates children exactly in construction order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Tree {
	Map(Vec<(Key, Tree)>),
	Leaf(i32),
}

impl Tree {
	pub(crate) fn map(children: impl IntoIterator<Item = (Key, Tree)>) -> Self {
		Self::Map(children.into_iter().collect())
	}
}

pub(crate) struct TreeIter<'a> {
	inner: std::slice::Iter<'a, (Key, Tree)>,
}

impl<'a> Iterator for TreeIter<'a> {
	type Item = (&'a Key, &'a Tree);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|(key, child)| (key, child))
	}
}

impl Nested for Tree {
	type Key = Key;
	type Entries<'a> = TreeIter<'a>;

	fn entries(&self) -> Option<Self::Entries<'_>> {
		match self {
			Self::Map(children) => Some(TreeIter { inner: children.iter() }),
			Self::Leaf(_) => None,
		}
	}

	fn type_name(&self) -> &'static str {
		match self {
			Self::Map(_) => "map",
			Self::Leaf(_) => "leaf",
		}
	}
}
