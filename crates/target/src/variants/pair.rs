//! Delimiter pairs and their interiors.

use quarry_primitives::{EditorRef, Range};

use super::common_accessors;
use super::simple::TokenTarget;
use crate::error::Result;
use crate::kind::TargetKind;
use crate::removal::shrink_range_to_fit_content;
use crate::target::{Target, TargetCommon, TargetVariant, token_leading_delimiter, token_removal, token_trailing_delimiter};

/// The body between a pair's delimiters.
///
/// The content range is the body trimmed of surrounding whitespace; removal
/// still deletes the whole body.
#[derive(Debug, Clone, PartialEq)]
pub struct InteriorTarget {
	pub common: TargetCommon,
	pub full_interior_range: Range,
}

impl InteriorTarget {
	pub fn new(editor: EditorRef, is_reversed: bool, full_interior_range: Range) -> Self {
		let content_range = shrink_range_to_fit_content(&editor.document, full_interior_range);
		Self {
			common: TargetCommon::new(editor, content_range, is_reversed),
			full_interior_range,
		}
	}

	pub(crate) fn merged(&self, is_reversed: bool, end: &Self) -> Self {
		Self::new(
			self.common.editor.clone(),
			is_reversed,
			self.full_interior_range.union(&end.full_interior_range),
		)
	}
}

impl TargetVariant for InteriorTarget {
	const KIND: TargetKind = TargetKind::Interior;

	common_accessors!();

	fn insertion_delimiter(&self) -> &str {
		" "
	}

	fn removal_range(&self) -> Result<Range> {
		Ok(self.full_interior_range.union(&self.common.content_range))
	}

	fn rich_merge(&self, is_reversed: bool, end: &Self) -> Option<Target> {
		Some(Target::Interior(self.merged(is_reversed, end)))
	}
}

/// A delimiter pair together with its contents.
#[derive(Debug, Clone, PartialEq)]
pub struct SurroundingPairTarget {
	pub common: TargetCommon,
	pub interior_range: Range,
	/// Opening and closing delimiter ranges.
	pub boundary: [Range; 2],
}

impl SurroundingPairTarget {
	pub fn new(common: TargetCommon, interior_range: Range, boundary: [Range; 2]) -> Self {
		Self {
			common,
			interior_range,
			boundary,
		}
	}
}

impl TargetVariant for SurroundingPairTarget {
	const KIND: TargetKind = TargetKind::SurroundingPair;

	common_accessors!();

	fn insertion_delimiter(&self) -> &str {
		" "
	}

	fn leading_delimiter_target(&self) -> Option<Target> {
		token_leading_delimiter(&self.common)
	}

	fn trailing_delimiter_target(&self) -> Option<Target> {
		token_trailing_delimiter(&self.common)
	}

	fn removal_range(&self) -> Result<Range> {
		Ok(token_removal(&self.common))
	}

	fn interior_strict(&self) -> Result<Vec<Target>> {
		Ok(vec![Target::Interior(InteriorTarget::new(
			self.common.editor.clone(),
			self.common.is_reversed,
			self.interior_range,
		))])
	}

	fn boundary_strict(&self) -> Result<Vec<Target>> {
		Ok(self
			.boundary
			.iter()
			.map(|range| Target::Token(TokenTarget::new(self.common.derive(*range))))
			.collect())
	}
}
