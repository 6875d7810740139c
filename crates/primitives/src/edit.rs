//! Text edits produced by target operations.

use serde::{Deserialize, Serialize};

use crate::range::Range;

/// A single replacement of `range` with `text`.
///
/// An empty `text` is a deletion; an empty `range` is an insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edit {
	pub range: Range,
	pub text: String,
	/// True when the edit replaces existing content rather than inserting.
	pub is_replace: bool,
}

impl Edit {
	/// Deletes the text covered by `range`.
	pub fn delete(range: Range) -> Self {
		Self {
			range,
			text: String::new(),
			is_replace: true,
		}
	}

	/// Replaces the text covered by `range`.
	pub fn replace(range: Range, text: impl Into<String>) -> Self {
		Self {
			range,
			text: text.into(),
			is_replace: true,
		}
	}

	/// Inserts `text` at the start of `range`.
	pub fn insert(range: Range, text: impl Into<String>) -> Self {
		Self {
			range: range.start.to_empty_range(),
			text: text.into(),
			is_replace: false,
		}
	}
}
