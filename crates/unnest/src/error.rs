//! Error types for the unnest pipeline.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::pipeline::Phase;

/// Errors that abort an unnest call.
///
/// The pipeline either produces a complete flat map or one of these; there
/// are no partial results.
#[derive(Debug, Error)]
pub enum UnnestError {
	/// The root value is a scalar, so there is no key to start a path from.
	#[error("root must be a mapping, found {found}")]
	NotAMapping {
		/// Type name of the offending root.
		found: &'static str,
	},

	/// A mapping key cannot be used as a path segment.
	#[error("key of type {found} under `{parent}` is not a string")]
	InvalidKey {
		/// Path of the mapping holding the key, `<root>` at the top level.
		parent: String,
		/// Type name of the key.
		found: &'static str,
	},

	/// The flattening pass found more leaves than the counting pass.
	#[error("scratch buffer overflow: input holds more than the {capacity} counted leaves")]
	CapacityExceeded {
		/// Capacity the buffer was sized to.
		capacity: usize,
	},

	/// The flattening pass found fewer leaves than the counting pass.
	#[error("leaf count mismatch: counted {counted}, flattened {flattened}")]
	LeafCountMismatch {
		/// Leaves seen by the counting pass.
		counted: usize,
		/// Entries written by the flattening pass.
		flattened: usize,
	},

	/// The scratch buffer could not be sized.
	#[error("cannot allocate scratch buffer for {requested} entries")]
	Alloc {
		/// Number of entries requested.
		requested: usize,
		/// Allocator failure, absent when the leaf count itself overflowed.
		#[source]
		source: Option<TryReserveError>,
	},

	/// Two leaves produced the same path key and rejection was requested.
	#[error("duplicate path key `{key}`")]
	DuplicateKey {
		/// The colliding key.
		key: String,
	},

	/// [`Pipeline::run`](crate::Pipeline::run) was called on a finished pipeline.
	#[error("pipeline already finished ({phase})")]
	Finished {
		/// Terminal phase the pipeline is in.
		phase: Phase,
	},
}

impl UnnestError {
	/// Pipeline phase that raised this error.
	pub fn phase(&self) -> Phase {
		match self {
			Self::NotAMapping { .. } => Phase::Idle,
			Self::Alloc { source: None, .. } => Phase::Counting,
			Self::Alloc { .. } => Phase::Allocated,
			Self::InvalidKey { .. } | Self::CapacityExceeded { .. } | Self::LeafCountMismatch { .. } => Phase::Flattening,
			Self::DuplicateKey { .. } => Phase::Rebuilding,
			Self::Finished { phase } => *phase,
		}
	}

	pub(crate) fn count_overflow() -> Self {
		Self::Alloc {
			requested: usize::MAX,
			source: None,
		}
	}
}

/// Result type for unnest operations.
pub type Result<T> = std::result::Result<T, UnnestError>;
