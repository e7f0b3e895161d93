//! Compact nested value model.
//!
//! This crate defines the value tree unnest operates on when the caller does
//! not bring its own host representation. Records keep insertion order and
//! string keys; everything that is not a record is a leaf as far as flattening
//! is concerned. Conversions to and from [`serde_json::Value`] are provided for
//! I/O boundaries.

use std::fmt;


/// Insertion-ordered record used by [`Value::Record`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
	inner: Vec<(String, Value)>,
}

impl Record {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			inner: Vec::with_capacity(capacity),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Replaces the value stored under `key`, or appends a new entry.
	///
	/// Returns the previous value when one was replaced. The entry keeps its
	/// original position.
	pub fn insert<K>(&mut self, key: K, value: Value) -> Option<Value>
	where
		K: Into<String>,
	{
		let key = key.into();
		match self.inner.iter_mut().find(|(k, _)| *k == key) {
			Some((_, slot)) => Some(std::mem::replace(slot, value)),
			None => {
				self.inner.push((key, value));
				None
			}
		}
	}

	pub fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
		let key = key.as_ref();
		self.inner.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	pub fn iter(&self) -> RecordIter<'_> {
		RecordIter { inner: self.inner.iter() }
	}
}

pub struct RecordIter<'a> {
	inner: std::slice::Iter<'a, (String, Value)>,
}

impl<'a> Iterator for RecordIter<'a> {
	type Item = (&'a String, &'a Value);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|(key, value)| (key, value))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl ExactSizeIterator for RecordIter<'_> {}

impl<'a> IntoIterator for &'a Record {
	type Item = (&'a String, &'a Value);
	type IntoIter = RecordIter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
	fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
		let iter = iter.into_iter();
		let mut out = Self::with_capacity(iter.size_hint().0);
		for (key, value) in iter {
			out.insert(key, value);
		}
		out
	}
}

/// A node of a nested value tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Bool(bool),
	Int(i64),
	Float(f64),
	String(String),
	Record(Record),
	List(Vec<Value>),
	Nothing,
}

impl Value {
	pub fn string(val: impl Into<String>) -> Self {
		Self::String(val.into())
	}

	pub fn record(val: impl IntoIterator<Item = (impl Into<String>, Value)>) -> Self {
		Self::Record(val.into_iter().collect())
	}

	pub fn get_type(&self) -> ValueType {
		match self {
			Self::Bool(_) => ValueType::Bool,
			Self::Int(_) => ValueType::Int,
			Self::Float(_) => ValueType::Float,
			Self::String(_) => ValueType::String,
			Self::Record(_) => ValueType::Record,
			Self::List(_) => ValueType::List,
			Self::Nothing => ValueType::Nothing,
		}
	}
}

/// Coarse value type used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
	Bool,
	Int,
	Float,
	String,
	Record,
	List,
	Nothing,
}

impl ValueType {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::Int => "int",
			Self::Float => "float",
			Self::String => "string",
			Self::Record => "record",
			Self::List => "list",
			Self::Nothing => "nothing",
		}
	}
}

impl fmt::Display for ValueType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Nothing,
			serde_json::Value::Bool(val) => Self::Bool(val),
			serde_json::Value::Number(num) => match num.as_i64() {
				Some(val) => Self::Int(val),
				// u64 above i64::MAX and fractional numbers both land here.
				None => Self::Float(num.as_f64().unwrap_or(f64::NAN)),
			},
			serde_json::Value::String(val) => Self::String(val),
			serde_json::Value::Array(vals) => Self::List(vals.into_iter().map(Self::from).collect()),
			serde_json::Value::Object(map) => {
				let mut out = Record::with_capacity(map.len());
				for (key, item) in map {
					out.insert(key, Self::from(item));
				}
				Self::Record(out)
			}
		}
	}
}

impl From<Value> for serde_json::Value {
	fn from(value: Value) -> Self {
		match value {
			Value::Nothing => Self::Null,
			Value::Bool(val) => Self::Bool(val),
			Value::Int(val) => Self::from(val),
			// Non-finite floats have no JSON representation.
			Value::Float(val) => serde_json::Number::from_f64(val).map_or(Self::Null, Self::Number),
			Value::String(val) => Self::String(val),
			Value::List(vals) => Self::Array(vals.into_iter().map(Into::into).collect()),
			Value::Record(record) => {
				let mut out = serde_json::Map::with_capacity(record.len());
				for (key, item) in record.inner {
					out.insert(key, item.into());
				}
				Self::Object(out)
			}
		}
	}
}
