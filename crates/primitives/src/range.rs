use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Direction of a scope search relative to a reference position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
	/// Towards the end of the document.
	Forward,
	/// Towards the start of the document.
	Backward,
}

impl Direction {
	/// Returns the opposite direction.
	pub fn reverse(self) -> Self {
		match self {
			Self::Forward => Self::Backward,
			Self::Backward => Self::Forward,
		}
	}
}

/// A character offset inside a document, measured in chars (not bytes).
pub type CharIdx = usize;

/// A position in a document expressed as a zero-based line and a character
/// offset within that line.
///
/// Positions are totally ordered: first by line, then by character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
	/// Zero-based line index.
	pub line: usize,
	/// Zero-based char offset within the line.
	pub character: usize,
}

impl Position {
	/// Creates a new position.
	pub const fn new(line: usize, character: usize) -> Self {
		Self { line, character }
	}

	/// Moves the position by the given line and character deltas, saturating at zero.
	pub fn translate(self, line_delta: isize, character_delta: isize) -> Self {
		Self {
			line: self.line.saturating_add_signed(line_delta),
			character: self.character.saturating_add_signed(character_delta),
		}
	}

	/// Returns a copy of this position with a different character offset.
	pub fn with_character(self, character: usize) -> Self {
		Self { line: self.line, character }
	}

	/// Returns a zero-width range at this position.
	pub fn to_empty_range(self) -> Range {
		Range::new(self, self)
	}

	#[inline]
	pub fn is_before_or_equal(&self, other: &Position) -> bool {
		self <= other
	}
}

/// A half-open span `[start, end)` between two positions.
///
/// The constructor normalises its arguments so that `start <= end` always
/// holds; direction is tracked separately by targets and selections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
	pub start: Position,
	pub end: Position,
}

impl Range {
	/// Creates a range spanning the two positions in document order.
	pub fn new(a: Position, b: Position) -> Self {
		if a <= b {
			Self { start: a, end: b }
		} else {
			Self { start: b, end: a }
		}
	}

	/// Creates a range from raw line/character coordinates.
	pub fn from_coords(start_line: usize, start_character: usize, end_line: usize, end_character: usize) -> Self {
		Self::new(
			Position::new(start_line, start_character),
			Position::new(end_line, end_character),
		)
	}

	/// Returns true if the range is zero-width.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// Returns true if both ends of the range are on the same line.
	#[inline]
	pub fn is_single_line(&self) -> bool {
		self.start.line == self.end.line
	}

	/// Returns the smallest range containing both ranges.
	///
	/// This is a hull, not a set union: any gap between the ranges is included.
	pub fn union(&self, other: &Range) -> Range {
		Range {
			start: self.start.min(other.start),
			end: self.end.max(other.end),
		}
	}

	/// Returns the overlap between two ranges, or `None` if they are disjoint.
	///
	/// Ranges that only touch produce an empty intersection at the shared
	/// position.
	pub fn intersection(&self, other: &Range) -> Option<Range> {
		let start = self.start.max(other.start);
		let end = self.end.min(other.end);
		(start <= end).then_some(Range { start, end })
	}

	/// Returns true if `position` lies within the range, endpoints included.
	#[inline]
	pub fn contains(&self, position: Position) -> bool {
		self.start <= position && position <= self.end
	}

	/// Returns true if `other` lies entirely within this range.
	#[inline]
	pub fn contains_range(&self, other: &Range) -> bool {
		self.start <= other.start && other.end <= self.end
	}

	/// Orders ranges by start, then end.
	pub fn compare(&self, other: &Range) -> Ordering {
		self.start.cmp(&other.start).then(self.end.cmp(&other.end))
	}
}
