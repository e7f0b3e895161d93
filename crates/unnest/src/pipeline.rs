//! Count, allocate, flatten, sort and rebuild, in that order.

use std::fmt;

use crate::buffer::ScratchBuffer;
use crate::count::count_leaves;
use crate::error::{Result, UnnestError};
use crate::flatten::flatten_into;
use crate::nested::Nested;
use crate::options::UnnestOptions;
use crate::rebuild::{FlatMap, rebuild};


/// Pipeline state.
///
/// Phases only move forward. `Done` and `Aborted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
	Idle,
	Counting,
	Allocated,
	Flattening,
	Sorting,
	Rebuilding,
	Done,
	Aborted,
}

impl Phase {
	/// Next phase on the success path, `None` once terminal.
	pub const fn successor(self) -> Option<Self> {
		match self {
			Self::Idle => Some(Self::Counting),
			Self::Counting => Some(Self::Allocated),
			Self::Allocated => Some(Self::Flattening),
			Self::Flattening => Some(Self::Sorting),
			Self::Sorting => Some(Self::Rebuilding),
			Self::Rebuilding => Some(Self::Done),
			Self::Done | Self::Aborted => None,
		}
	}

	pub const fn is_terminal(self) -> bool {
		matches!(self, Self::Done | Self::Aborted)
	}

	/// Whether the pipeline may move from `self` to `next`.
	pub const fn can_enter(self, next: Self) -> bool {
		match (self.successor(), next) {
			(None, _) => false,
			(Some(_), Self::Aborted) => true,
			(Some(expected), next) => expected as u8 == next as u8,
		}
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Idle => "idle",
			Self::Counting => "counting",
			Self::Allocated => "allocated",
			Self::Flattening => "flattening",
			Self::Sorting => "sorting",
			Self::Rebuilding => "rebuilding",
			Self::Done => "done",
			Self::Aborted => "aborted",
		}
	}
}

impl fmt::Display for Phase {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One unnest run over a borrowed root.
///
/// The root stays borrowed for `'a`, which is also the lifetime of every value
/// in the returned [`FlatMap`].
#[derive(Debug)]
pub struct Pipeline<'a, V> {
	root: &'a V,
	options: UnnestOptions,
	phase: Phase,
}

impl<'a, V: Nested> Pipeline<'a, V> {
	pub fn new(root: &'a V, options: UnnestOptions) -> Self {
		Self {
			root,
			options,
			phase: Phase::Idle,
		}
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	/// Runs every phase to completion.
	///
	/// On failure the pipeline lands in [`Phase::Aborted`] and nothing built
	/// so far is returned. A pipeline runs once: calling this again after it
	/// reached a terminal phase fails with [`UnnestError::Finished`] and leaves
	/// the phase untouched.
	pub fn run(&mut self) -> Result<FlatMap<'a, V>> {
		if self.phase.is_terminal() {
			return Err(UnnestError::Finished { phase: self.phase });
		}
		match self.execute() {
			Ok(flat) => {
				self.enter(Phase::Done);
				Ok(flat)
			}
			Err(err) => {
				tracing::debug!(phase = %err.phase(), error = %err, "unnest.aborted");
				self.enter(Phase::Aborted);
				Err(err)
			}
		}
	}

	fn execute(&mut self) -> Result<FlatMap<'a, V>> {
		if !self.root.is_mapping() {
			return Err(UnnestError::NotAMapping {
				found: self.root.type_name(),
			});
		}

		self.enter(Phase::Counting);
		let leaves = count_leaves(self.root)?;

		self.enter(Phase::Allocated);
		let mut buffer = ScratchBuffer::with_capacity(leaves)?;
		tracing::debug!(leaves, "unnest.buffer.allocated");

		self.enter(Phase::Flattening);
		flatten_into(self.root, "", &mut buffer)?;
		if !buffer.is_full() {
			return Err(UnnestError::LeafCountMismatch {
				counted: leaves,
				flattened: buffer.len(),
			});
		}

		self.enter(Phase::Sorting);
		buffer.sort_by_key();

		self.enter(Phase::Rebuilding);
		rebuild(buffer, self.options.duplicates)
	}

	fn enter(&mut self, next: Phase) {
		debug_assert!(self.phase.can_enter(next), "illegal transition {} -> {}", self.phase, next);
		tracing::trace!(from = %self.phase, to = %next, "unnest.phase");
		self.phase = next;
	}
}
