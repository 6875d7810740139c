use quarry_primitives::Range;

use super::common_accessors;
use super::pair::InteriorTarget;
use crate::error::{Result, TargetError};
use crate::kind::TargetKind;
use crate::target::{Target, TargetCommon, TargetVariant, token_leading_delimiter, token_removal, token_trailing_delimiter};

/// A target clipped to run from an enclosing target's start up to it (head),
/// or from it to the enclosing target's end (tail).
#[derive(Debug, Clone, PartialEq)]
pub struct HeadTailTarget {
	pub common: TargetCommon,
	pub insertion_delimiter: String,
	pub interior_range: Option<Range>,
}

impl HeadTailTarget {
	pub fn new(common: TargetCommon, insertion_delimiter: impl Into<String>, interior_range: Option<Range>) -> Self {
		Self {
			common,
			insertion_delimiter: insertion_delimiter.into(),
			interior_range,
		}
	}
}

impl TargetVariant for HeadTailTarget {
	const KIND: TargetKind = TargetKind::HeadTail;

	common_accessors!();

	fn insertion_delimiter(&self) -> &str {
		&self.insertion_delimiter
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
		let interior = self
			.interior_range
			.ok_or_else(|| TargetError::no_containing_scope("interior"))?;
		Ok(vec![Target::Interior(InteriorTarget::new(
			self.common.editor.clone(),
			self.common.is_reversed,
			interior,
		))])
	}
}
