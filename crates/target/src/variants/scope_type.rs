//! Results of language scope matchers.

use quarry_primitives::{Range, ScopeType};

use super::common_accessors;
use super::lines::{LineTarget, ParagraphTarget};
use super::pair::InteriorTarget;
use super::simple::{PlainTarget, TokenTarget};
use crate::error::{Result, TargetError};
use crate::kind::TargetKind;
use crate::removal::{delimited_sequence_removal_range, expand_to_full_line};
use crate::target::{Target, TargetCommon, TargetVariant, token_leading_delimiter, token_trailing_delimiter};

/// A scope found by a matcher, with whatever extra ranges the matcher knew.
///
/// Explicit ranges win over heuristics: a removal range is used verbatim,
/// delimiter ranges switch removal to delimited-sequence behaviour, and with
/// neither the target falls back to token, line or paragraph cleanup
/// depending on its insertion delimiter.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeTypeTarget {
	pub common: TargetCommon,
	pub scope_type: ScopeType,
	pub insertion_delimiter: String,
	/// Text such as decorators that belongs to the scope but precedes its content.
	pub prefix_range: Option<Range>,
	pub removal_range: Option<Range>,
	pub interior_range: Option<Range>,
	pub leading_delimiter_range: Option<Range>,
	pub trailing_delimiter_range: Option<Range>,
}

impl ScopeTypeTarget {
	/// A scope target using the default insertion delimiter for `scope_type`.
	pub fn new(common: TargetCommon, scope_type: ScopeType) -> Self {
		let insertion_delimiter = scope_type.default_insertion_delimiter().to_string();
		Self {
			common,
			scope_type,
			insertion_delimiter,
			prefix_range: None,
			removal_range: None,
			interior_range: None,
			leading_delimiter_range: None,
			trailing_delimiter_range: None,
		}
	}

	pub fn with_insertion_delimiter(mut self, insertion_delimiter: impl Into<String>) -> Self {
		self.insertion_delimiter = insertion_delimiter.into();
		self
	}

	pub fn with_prefix_range(mut self, prefix_range: Option<Range>) -> Self {
		self.prefix_range = prefix_range;
		self
	}

	pub fn with_removal_range(mut self, removal_range: Option<Range>) -> Self {
		self.removal_range = removal_range;
		self
	}

	pub fn with_interior_range(mut self, interior_range: Option<Range>) -> Self {
		self.interior_range = interior_range;
		self
	}

	pub fn with_delimiter_ranges(mut self, leading: Option<Range>, trailing: Option<Range>) -> Self {
		self.leading_delimiter_range = leading;
		self.trailing_delimiter_range = trailing;
		self
	}

	fn has_delimiter_range(&self) -> bool {
		self.leading_delimiter_range.is_some() || self.trailing_delimiter_range.is_some()
	}

	fn delimiter_target(&self, range: Range) -> Target {
		Target::Plain(PlainTarget::new(self.common.derive(range)))
	}

	/// Target whose heuristics decide removal when the matcher supplied no
	/// explicit ranges. The prefix only joins removal here.
	fn smart_removal_target(&self) -> Target {
		let content = self
			.prefix_range
			.map_or(self.common.content_range, |prefix| self.common.content_range.union(&prefix));
		let common = self.common.derive(content);
		let document = self.common.document();
		let linewise = matches!(self.insertion_delimiter.as_str(), "\n" | "\n\n");
		let spans_lines = || {
			let full = expand_to_full_line(document, content);
			document.get_text(full).trim() == document.get_text(content).trim()
		};
		if !linewise || !spans_lines() {
			return Target::Token(TokenTarget::new(common));
		}
		if self.insertion_delimiter == "\n\n" {
			Target::Paragraph(ParagraphTarget::new(common))
		} else {
			Target::Line(LineTarget::new(common))
		}
	}
}

impl TargetVariant for ScopeTypeTarget {
	const KIND: TargetKind = TargetKind::ScopeType;

	common_accessors!();

	fn insertion_delimiter(&self) -> &str {
		&self.insertion_delimiter
	}

	fn leading_delimiter_target(&self) -> Option<Target> {
		match (self.leading_delimiter_range, self.trailing_delimiter_range) {
			(Some(range), _) => Some(self.delimiter_target(range)),
			(None, None) => token_leading_delimiter(&self.common),
			(None, Some(_)) => None,
		}
	}

	fn trailing_delimiter_target(&self) -> Option<Target> {
		match (self.leading_delimiter_range, self.trailing_delimiter_range) {
			(_, Some(range)) => Some(self.delimiter_target(range)),
			(None, None) => token_trailing_delimiter(&self.common),
			(Some(_), None) => None,
		}
	}

	fn removal_range(&self) -> Result<Range> {
		if let Some(range) = self.removal_range {
			return Ok(range);
		}
		if self.has_delimiter_range() {
			return Ok(delimited_sequence_removal_range(
				self.common.content_range,
				self.leading_delimiter_range,
				self.trailing_delimiter_range,
			));
		}
		self.smart_removal_target().removal_range()
	}

	fn removal_highlight_range(&self) -> Result<Range> {
		if let Some(range) = self.removal_range {
			return Ok(range);
		}
		if self.has_delimiter_range() {
			return Ok(delimited_sequence_removal_range(
				self.common.content_range,
				self.leading_delimiter_range,
				self.trailing_delimiter_range,
			));
		}
		self.smart_removal_target().removal_highlight_range()
	}

	fn interior_strict(&self) -> Result<Vec<Target>> {
		let interior = self
			.interior_range
			.ok_or_else(|| TargetError::no_containing_scope("interior"))?;
		Ok(vec![Target::Interior(InteriorTarget::new(
			self.common.editor.clone(),
			self.common.is_reversed,
			interior,
		))])
	}

	/// A new content range invalidates the matcher's removal and interior ranges.
	fn set_content_range(&mut self, content_range: Range) {
		self.common.content_range = content_range;
		self.removal_range = None;
		self.interior_range = None;
	}

	fn rich_merge(&self, is_reversed: bool, end: &Self) -> Option<Target> {
		if self.scope_type != end.scope_type {
			return None;
		}
		let removal_range = (self.removal_range.is_some() || end.removal_range.is_some()).then(|| {
			let first = self.removal_range.unwrap_or(self.common.content_range);
			let last = end.removal_range.unwrap_or(end.common.content_range);
			first.union(&last)
		});
		Some(Target::ScopeType(Self {
			common: self.common.merged(is_reversed, &end.common),
			scope_type: self.scope_type.clone(),
			insertion_delimiter: self.insertion_delimiter.clone(),
			prefix_range: self.prefix_range,
			removal_range,
			interior_range: None,
			leading_delimiter_range: self.leading_delimiter_range,
			trailing_delimiter_range: end.trailing_delimiter_range,
		}))
	}
}
