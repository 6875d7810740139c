//! Line-like variants: lines, paragraphs and the whole document.

use quarry_primitives::{Position, Range, TextDocument};

use super::common_accessors;
use super::pair::InteriorTarget;
use super::simple::PlainTarget;
use crate::error::{Result, TargetError};
use crate::kind::TargetKind;
use crate::removal::expand_to_full_line;
use crate::target::{Target, TargetCommon, TargetVariant};

/// One or more whole lines.
#[derive(Debug, Clone, PartialEq)]
pub struct LineTarget {
	pub common: TargetCommon,
}

impl LineTarget {
	pub fn new(common: TargetCommon) -> Self {
		Self { common }
	}

	fn full_line_range(&self) -> Range {
		expand_to_full_line(self.common.document(), self.common.content_range)
	}

	fn line_break_target(&self, range: Range) -> Target {
		Target::Plain(PlainTarget::new(self.common.derive(range)).with_is_token(false))
	}
}

impl TargetVariant for LineTarget {
	const KIND: TargetKind = TargetKind::Line;

	common_accessors!();

	fn insertion_delimiter(&self) -> &str {
		"\n"
	}

	/// The line break ending the previous line.
	fn leading_delimiter_target(&self) -> Option<Target> {
		let full = self.full_line_range();
		let previous = full.start.line.checked_sub(1)?;
		let previous_end = self.common.document().line_at(previous).range.end;
		Some(self.line_break_target(Range::new(previous_end, full.start)))
	}

	/// The line break ending the last line.
	fn trailing_delimiter_target(&self) -> Option<Target> {
		let full = self.full_line_range();
		let next = full.end.line + 1;
		(next < self.common.document().line_count())
			.then(|| self.line_break_target(Range::new(full.end, Position::new(next, 0))))
	}

	fn removal_range(&self) -> Result<Range> {
		let full = self.full_line_range();
		let delimiter = self
			.trailing_delimiter_target()
			.or_else(|| self.leading_delimiter_target());
		Ok(delimiter.map_or(full, |delimiter| full.union(&delimiter.content_range())))
	}

	fn removal_highlight_range(&self) -> Result<Range> {
		Ok(self.full_line_range())
	}

	fn rich_merge(&self, is_reversed: bool, end: &Self) -> Option<Target> {
		Some(Target::Line(Self::new(self.common.merged(is_reversed, &end.common))))
	}
}

/// A block of non-blank lines.
///
/// Its delimiters are the blank lines separating it from the neighbouring
/// paragraphs, or from the document edge.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphTarget {
	pub common: TargetCommon,
}

impl ParagraphTarget {
	pub fn new(common: TargetCommon) -> Self {
		Self { common }
	}

	fn full_line_range(&self) -> Range {
		expand_to_full_line(self.common.document(), self.common.content_range)
	}

	fn blank_lines_target(&self, range: Range) -> Target {
		Target::Line(LineTarget::new(self.common.derive(range)))
	}

	fn delimiter_target(&self) -> Option<Target> {
		self.trailing_delimiter_target()
			.or_else(|| self.leading_delimiter_target())
	}
}

impl TargetVariant for ParagraphTarget {
	const KIND: TargetKind = TargetKind::Paragraph;

	common_accessors!();

	fn insertion_delimiter(&self) -> &str {
		"\n\n"
	}

	fn leading_delimiter_target(&self) -> Option<Target> {
		paragraph_leading_delimiter_range(self.common.document(), self.full_line_range())
			.map(|range| self.blank_lines_target(range))
	}

	fn trailing_delimiter_target(&self) -> Option<Target> {
		paragraph_trailing_delimiter_range(self.common.document(), self.full_line_range())
			.map(|range| self.blank_lines_target(range))
	}

	fn removal_range(&self) -> Result<Range> {
		let content = self.common.content_range;
		let range = self
			.delimiter_target()
			.map_or(content, |delimiter| content.union(&delimiter.content_range()));
		LineTarget::new(self.common.derive(range)).removal_range()
	}

	fn removal_highlight_range(&self) -> Result<Range> {
		let full = self.full_line_range();
		Ok(self
			.delimiter_target()
			.map_or(full, |delimiter| full.union(&delimiter.content_range())))
	}

	fn rich_merge(&self, is_reversed: bool, end: &Self) -> Option<Target> {
		Some(Target::Paragraph(Self::new(self.common.merged(is_reversed, &end.common))))
	}
}

/// Blank lines between `full` and the previous non-blank line, or the start
/// of the document.
pub(crate) fn paragraph_leading_delimiter_range(document: &TextDocument, full: Range) -> Option<Range> {
	let start_line = full.start.line;
	let previous_line = start_line.checked_sub(1)?;
	let previous_end = document.line_at(previous_line).range.end;
	match (0..start_line)
		.rev()
		.find(|&line| !document.line_at(line).is_empty_or_whitespace)
	{
		Some(line) if line == previous_line => None,
		Some(line) => Some(Range::new(Position::new(line + 1, 0), previous_end)),
		None => Some(Range::new(Position::default(), previous_end)),
	}
}

/// Blank lines between `full` and the next non-blank line, or the end of the
/// document.
pub(crate) fn paragraph_trailing_delimiter_range(document: &TextDocument, full: Range) -> Option<Range> {
	let end_line = full.end.line;
	let last_line = document.line_count().saturating_sub(1);
	if end_line >= last_line {
		return None;
	}
	let start = Position::new(end_line + 1, 0);
	match (end_line + 1..=last_line).find(|&line| !document.line_at(line).is_empty_or_whitespace) {
		Some(line) if line == end_line + 1 => None,
		Some(line) => Some(Range::new(start, document.line_at(line - 1).range.end)),
		None => Some(Range::new(start, document.line_at(last_line).range.end)),
	}
}

/// A paragraph clipped to the interior of an enclosing pair.
///
/// The gaps count lines between the clipped content and the interior's
/// bounds; a delimiter is only taken from the paragraph when it cannot reach
/// the interior's edge.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedParagraphTarget {
	pub common: TargetCommon,
	pub paragraph: ParagraphTarget,
	pub containing_interior: InteriorTarget,
	start_line_gap: usize,
	end_line_gap: usize,
}

impl BoundedParagraphTarget {
	/// Fails with [`TargetError::InvalidScope`] when the paragraph and the
	/// interior do not overlap.
	pub fn new(is_reversed: bool, paragraph: ParagraphTarget, containing_interior: InteriorTarget) -> Result<Self> {
		let content = paragraph
			.common
			.content_range
			.intersection(&containing_interior.common.content_range)
			.filter(|range| !range.is_empty())
			.ok_or_else(|| TargetError::InvalidScope("paragraph does not intersect the interior".into()))?;
		let common = TargetCommon::new(paragraph.common.editor.clone(), content, is_reversed);
		let mut target = Self {
			common,
			paragraph,
			containing_interior,
			start_line_gap: 0,
			end_line_gap: 0,
		};
		target.update_gaps();
		Ok(target)
	}

	pub fn start_line_gap(&self) -> usize {
		self.start_line_gap
	}

	pub fn end_line_gap(&self) -> usize {
		self.end_line_gap
	}

	fn update_gaps(&mut self) {
		let content = self.common.content_range;
		let interior = self.containing_interior.full_interior_range;
		self.start_line_gap = content.start.line.saturating_sub(interior.start.line);
		self.end_line_gap = interior.end.line.saturating_sub(content.end.line);
	}

	fn touches_interior_edge(&self) -> bool {
		self.start_line_gap < 1 || self.end_line_gap < 1
	}

	fn delimiter_target(&self) -> Option<Target> {
		self.trailing_delimiter_target()
			.or_else(|| self.leading_delimiter_target())
	}
}

impl TargetVariant for BoundedParagraphTarget {
	const KIND: TargetKind = TargetKind::BoundedParagraph;

	common_accessors!();

	fn insertion_delimiter(&self) -> &str {
		"\n\n"
	}

	fn leading_delimiter_target(&self) -> Option<Target> {
		(self.start_line_gap > 1)
			.then(|| self.paragraph.leading_delimiter_target())
			.flatten()
	}

	fn trailing_delimiter_target(&self) -> Option<Target> {
		(self.end_line_gap > 1)
			.then(|| self.paragraph.trailing_delimiter_target())
			.flatten()
	}

	fn removal_range(&self) -> Result<Range> {
		let content = self.common.content_range;
		let range = self
			.delimiter_target()
			.map_or(content, |delimiter| content.union(&delimiter.content_range()));
		if self.touches_interior_edge() {
			return Ok(range);
		}
		LineTarget::new(self.common.derive(range)).removal_range()
	}

	fn removal_highlight_range(&self) -> Result<Range> {
		if self.touches_interior_edge() {
			return self.removal_range();
		}
		let full = expand_to_full_line(self.common.document(), self.common.content_range);
		Ok(self
			.delimiter_target()
			.map_or(full, |delimiter| full.union(&delimiter.content_range())))
	}

	fn set_content_range(&mut self, content_range: Range) {
		self.common.content_range = content_range;
		self.update_gaps();
	}

	fn rich_merge(&self, is_reversed: bool, end: &Self) -> Option<Target> {
		let paragraph = ParagraphTarget::new(self.paragraph.common.merged(is_reversed, &end.paragraph.common));
		let interior = self.containing_interior.merged(is_reversed, &end.containing_interior);
		Self::new(is_reversed, paragraph, interior)
			.ok()
			.map(Target::BoundedParagraph)
	}
}

/// The whole document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentTarget {
	pub common: TargetCommon,
}

impl DocumentTarget {
	pub fn new(common: TargetCommon) -> Self {
		Self { common }
	}
}

impl TargetVariant for DocumentTarget {
	const KIND: TargetKind = TargetKind::Document;

	common_accessors!();

	fn insertion_delimiter(&self) -> &str {
		"\n"
	}

	fn removal_range(&self) -> Result<Range> {
		Ok(self.common.document().range())
	}

	fn removal_highlight_range(&self) -> Result<Range> {
		Ok(self.common.content_range)
	}

	fn rich_merge(&self, is_reversed: bool, end: &Self) -> Option<Target> {
		Some(Target::Document(Self::new(self.common.merged(is_reversed, &end.common))))
	}
}
