//! Variants with little or no structure of their own.

use quarry_primitives::Range;

use super::common_accessors;
use crate::error::{Result, TargetError};
use crate::kind::{TargetFlags, TargetKind};
use crate::target::{Target, TargetCommon, TargetVariant, token_leading_delimiter, token_removal, token_trailing_delimiter};

/// A whitespace-delimited token.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenTarget {
	pub common: TargetCommon,
}

impl TokenTarget {
	pub fn new(common: TargetCommon) -> Self {
		Self { common }
	}
}

impl TargetVariant for TokenTarget {
	const KIND: TargetKind = TargetKind::Token;

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

	fn rich_merge(&self, is_reversed: bool, end: &Self) -> Option<Target> {
		Some(Target::Token(Self::new(self.common.merged(is_reversed, &end.common))))
	}
}

/// A bare range with no delimiters. Delimiter targets of other variants are
/// usually plain targets.
#[derive(Debug, Clone, PartialEq)]
pub struct PlainTarget {
	pub common: TargetCommon,
	pub is_token: bool,
	pub insertion_delimiter: String,
}

impl PlainTarget {
	pub fn new(common: TargetCommon) -> Self {
		Self {
			common,
			is_token: true,
			insertion_delimiter: String::new(),
		}
	}

	pub fn with_is_token(mut self, is_token: bool) -> Self {
		self.is_token = is_token;
		self
	}

	pub fn with_insertion_delimiter(mut self, insertion_delimiter: impl Into<String>) -> Self {
		self.insertion_delimiter = insertion_delimiter.into();
		self
	}
}

impl TargetVariant for PlainTarget {
	const KIND: TargetKind = TargetKind::Plain;

	common_accessors!();

	fn flags(&self) -> TargetFlags {
		let mut flags = Self::KIND.base_flags();
		flags.set(TargetFlags::TOKEN, self.is_token);
		flags
	}

	fn insertion_delimiter(&self) -> &str {
		&self.insertion_delimiter
	}

	fn rich_merge(&self, is_reversed: bool, end: &Self) -> Option<Target> {
		Some(Target::Plain(Self {
			common: self.common.merged(is_reversed, &end.common),
			..self.clone()
		}))
	}
}

/// A target with no scope type, such as a bare cursor or a merge of two
/// targets of different variants.
#[derive(Debug, Clone, PartialEq)]
pub struct UntypedTarget {
	pub common: TargetCommon,
	pub has_explicit_range: bool,
	pub is_token: bool,
}

impl UntypedTarget {
	pub fn new(common: TargetCommon, has_explicit_range: bool) -> Self {
		Self {
			common,
			has_explicit_range,
			is_token: true,
		}
	}

	pub fn with_is_token(mut self, is_token: bool) -> Self {
		self.is_token = is_token;
		self
	}
}

impl TargetVariant for UntypedTarget {
	const KIND: TargetKind = TargetKind::Untyped;

	common_accessors!();

	fn flags(&self) -> TargetFlags {
		let mut flags = Self::KIND.base_flags();
		flags.set(TargetFlags::TOKEN, self.is_token);
		flags.set(TargetFlags::EXPLICIT_RANGE, self.has_explicit_range);
		flags
	}

	fn insertion_delimiter(&self) -> &str {
		" "
	}

	fn leading_delimiter_target(&self) -> Option<Target> {
		token_leading_delimiter(&self.common)
	}

	fn trailing_delimiter_target(&self) -> Option<Target> {
		token_trailing_delimiter(&self.common)
	}

	/// A range of pure whitespace is removed as-is so the cleanup cannot run
	/// away across the line.
	fn removal_range(&self) -> Result<Range> {
		let content = self.common.content_range;
		if self.common.document().get_text(content).trim().is_empty() {
			return Ok(content);
		}
		Ok(token_removal(&self.common))
	}
}

/// A selection taken literally, stripped of scope semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSelectionTarget {
	pub common: TargetCommon,
}

impl RawSelectionTarget {
	pub fn new(common: TargetCommon) -> Self {
		Self { common }
	}
}

impl TargetVariant for RawSelectionTarget {
	const KIND: TargetKind = TargetKind::RawSelection;

	common_accessors!();

	fn insertion_delimiter(&self) -> &str {
		""
	}

	fn rich_merge(&self, is_reversed: bool, end: &Self) -> Option<Target> {
		Some(Target::RawSelection(Self::new(self.common.merged(is_reversed, &end.common))))
	}
}

/// A target the user did not name explicitly, such as the implied cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct ImplicitTarget {
	pub common: TargetCommon,
}

impl ImplicitTarget {
	pub fn new(common: TargetCommon) -> Self {
		Self { common }
	}
}

impl TargetVariant for ImplicitTarget {
	const KIND: TargetKind = TargetKind::Implicit;

	common_accessors!();

	fn insertion_delimiter(&self) -> &str {
		""
	}

	fn rich_merge(&self, is_reversed: bool, end: &Self) -> Option<Target> {
		Some(Target::Implicit(Self::new(self.common.merged(is_reversed, &end.common))))
	}
}

/// Computed text carried through the pipeline. Not backed by a real range,
/// so it cannot be removed.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOnlyTarget {
	pub common: TargetCommon,
	pub text: String,
}

impl TextOnlyTarget {
	pub fn new(common: TargetCommon, text: impl Into<String>) -> Self {
		Self {
			common,
			text: text.into(),
		}
	}
}

impl TargetVariant for TextOnlyTarget {
	const KIND: TargetKind = TargetKind::TextOnly;

	common_accessors!();

	fn insertion_delimiter(&self) -> &str {
		""
	}

	fn removal_range(&self) -> Result<Range> {
		Err(TargetError::Unsupported("Text-only targets do not support removal".into()))
	}

	fn removal_highlight_range(&self) -> Result<Range> {
		Err(TargetError::Unsupported(
			"Text-only targets do not support removal highlights".into(),
		))
	}

	fn construct_removal_edit(&self) -> Result<quarry_primitives::Edit> {
		Err(TargetError::Unsupported("Text-only targets cannot be removed".into()))
	}
}
