//! Anchor/active selections.
//!
//! A [`Selection`] is the editor-level counterpart of a [`Range`]: it keeps
//! track of which end the user started from (the anchor) and which end moves
//! (the active position). Targets are built from selections and carry the same
//! direction through `is_reversed`.

use serde::{Deserialize, Serialize};

use crate::range::{Position, Range};

/// A directed span between an anchor and an active position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
	pub anchor: Position,
	pub active: Position,
}

impl Selection {
	/// Creates a selection from anchor to active.
	pub const fn new(anchor: Position, active: Position) -> Self {
		Self { anchor, active }
	}

	/// Creates a zero-width selection at `position`.
	pub const fn point(position: Position) -> Self {
		Self::new(position, position)
	}

	/// Creates a selection covering `range`, reversed if `is_reversed` is set.
	pub fn from_range(range: Range, is_reversed: bool) -> Self {
		if is_reversed {
			Self::new(range.end, range.start)
		} else {
			Self::new(range.start, range.end)
		}
	}

	/// Returns true if the active position precedes the anchor.
	#[inline]
	pub fn is_reversed(&self) -> bool {
		self.active < self.anchor
	}

	/// Returns true if anchor and active coincide.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.anchor == self.active
	}

	#[inline]
	pub fn start(&self) -> Position {
		self.anchor.min(self.active)
	}

	#[inline]
	pub fn end(&self) -> Position {
		self.anchor.max(self.active)
	}

	/// Returns the undirected range covered by the selection.
	pub fn range(&self) -> Range {
		Range::new(self.anchor, self.active)
	}

	/// Returns the same span with anchor and active swapped.
	pub fn flip(self) -> Self {
		Self::new(self.active, self.anchor)
	}
}

impl From<Selection> for Range {
	fn from(selection: Selection) -> Self {
		selection.range()
	}
}

#[cfg(test)]
mod tests;
