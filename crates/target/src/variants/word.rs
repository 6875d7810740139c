use quarry_primitives::Range;

use super::common_accessors;
use super::simple::PlainTarget;
use crate::error::Result;
use crate::kind::TargetKind;
use crate::removal::delimited_sequence_removal_range;
use crate::target::{Target, TargetCommon, TargetVariant};

/// A word or character inside a token, as picked by a subpiece modifier.
///
/// When the piece sits in a delimited list (for example `snake_case` words)
/// the separators are recorded so removal can take one of them along.
#[derive(Debug, Clone, PartialEq)]
pub struct SubTokenWordTarget {
	pub common: TargetCommon,
	pub insertion_delimiter: String,
	pub leading_delimiter_range: Option<Range>,
	pub trailing_delimiter_range: Option<Range>,
}

impl SubTokenWordTarget {
	pub fn new(
		common: TargetCommon,
		insertion_delimiter: impl Into<String>,
		leading_delimiter_range: Option<Range>,
		trailing_delimiter_range: Option<Range>,
	) -> Self {
		Self {
			common,
			insertion_delimiter: insertion_delimiter.into(),
			leading_delimiter_range,
			trailing_delimiter_range,
		}
	}
}

impl TargetVariant for SubTokenWordTarget {
	const KIND: TargetKind = TargetKind::SubTokenWord;

	common_accessors!();

	fn insertion_delimiter(&self) -> &str {
		&self.insertion_delimiter
	}

	fn leading_delimiter_target(&self) -> Option<Target> {
		self.leading_delimiter_range
			.map(|range| Target::Plain(PlainTarget::new(self.common.derive(range))))
	}

	fn trailing_delimiter_target(&self) -> Option<Target> {
		self.trailing_delimiter_range
			.map(|range| Target::Plain(PlainTarget::new(self.common.derive(range))))
	}

	fn removal_range(&self) -> Result<Range> {
		Ok(delimited_sequence_removal_range(
			self.common.content_range,
			self.leading_delimiter_range,
			self.trailing_delimiter_range,
		))
	}

	fn rich_merge(&self, is_reversed: bool, end: &Self) -> Option<Target> {
		Some(Target::SubTokenWord(Self {
			common: self.common.merged(is_reversed, &end.common),
			insertion_delimiter: self.insertion_delimiter.clone(),
			leading_delimiter_range: self.leading_delimiter_range,
			trailing_delimiter_range: end.trailing_delimiter_range,
		}))
	}
}
