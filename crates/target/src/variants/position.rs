//! Zero-width insertion points relative to another target.

use std::fmt;

use quarry_primitives::{Edit, Range, TextDocument};
use serde::{Deserialize, Serialize};

use super::common_accessors;
use crate::error::{Result, TargetError};
use crate::kind::{TargetFlags, TargetKind};
use crate::target::{TargetCommon, TargetVariant};

/// Where a position target sits relative to its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetPosition {
	/// Before the source, separated by its insertion delimiter.
	Before,
	/// After the source, separated by its insertion delimiter.
	After,
	/// At the first char of the source.
	Start,
	/// Just past the last char of the source.
	End,
}

impl fmt::Display for TargetPosition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Before => "before",
			Self::After => "after",
			Self::Start => "start",
			Self::End => "end",
		})
	}
}

/// A zero-width target. Inserting at `before`/`after` adds the source's
/// insertion delimiter; inserting at `start`/`end` adds nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionTarget {
	pub common: TargetCommon,
	pub position: TargetPosition,
	pub insertion_delimiter: String,
	pub is_raw: bool,
	/// Indentation prepended to text inserted on its own line.
	indentation: String,
}

impl PositionTarget {
	/// `source_range` is the content range of the target being collapsed;
	/// it decides the indentation of line-wise insertions.
	pub fn new(
		common: TargetCommon,
		position: TargetPosition,
		insertion_delimiter: String,
		is_raw: bool,
		source_range: Range,
	) -> Self {
		let indentation = if is_line_delimiter(&insertion_delimiter) {
			min_indentation(common.document(), source_range)
		} else {
			String::new()
		};
		Self {
			common,
			position,
			insertion_delimiter,
			is_raw,
			indentation,
		}
	}

	fn removal_unsupported(&self) -> TargetError {
		let hint = match self.position {
			TargetPosition::After | TargetPosition::End => "trailing",
			TargetPosition::Before | TargetPosition::Start => "leading",
		};
		TargetError::Unsupported(format!(
			"Please use \"{hint}\" modifier; removal is not supported for \"{}\"",
			self.position
		))
	}
}

impl TargetVariant for PositionTarget {
	const KIND: TargetKind = TargetKind::Position;

	common_accessors!();

	fn flags(&self) -> TargetFlags {
		let mut flags = Self::KIND.base_flags();
		flags.set(TargetFlags::RAW, self.is_raw);
		flags
	}

	fn insertion_delimiter(&self) -> &str {
		&self.insertion_delimiter
	}

	fn removal_range(&self) -> Result<Range> {
		Err(self.removal_unsupported())
	}

	fn removal_highlight_range(&self) -> Result<Range> {
		Err(self.removal_unsupported())
	}

	fn construct_change_edit(&self, text: &str) -> Result<Edit> {
		let at = self.common.content_range.start;
		match self.position {
			TargetPosition::Start | TargetPosition::End => Ok(Edit::insert(at.to_empty_range(), text)),
			TargetPosition::Before => {
				let range = if is_line_delimiter(&self.insertion_delimiter) {
					self.common.document().line_at(at.line).range.start.to_empty_range()
				} else {
					at.to_empty_range()
				};
				Ok(Edit::insert(
					range,
					format!("{}{text}{}", self.indentation, self.insertion_delimiter),
				))
			}
			TargetPosition::After => {
				let range = if is_line_delimiter(&self.insertion_delimiter) {
					self.common.document().line_at(at.line).range.end.to_empty_range()
				} else {
					at.to_empty_range()
				};
				Ok(Edit::insert(
					range,
					format!("{}{}{text}", self.insertion_delimiter, self.indentation),
				))
			}
		}
	}
}

fn is_line_delimiter(delimiter: &str) -> bool {
	!delimiter.is_empty() && delimiter.chars().all(|ch| ch == '\n')
}

/// Shortest leading whitespace among the non-blank lines of `range`.
fn min_indentation(document: &TextDocument, range: Range) -> String {
	(range.start.line..=range.end.line)
		.map(|line| document.line_at(line))
		.filter(|line| !line.is_empty_or_whitespace)
		.map(|line| {
			line.text
				.chars()
				.take(line.first_non_whitespace_character_index)
				.collect::<String>()
		})
		.min_by_key(|indent| indent.chars().count())
		.unwrap_or_default()
}
