//! The [`Target`] sum type and the contract every variant implements.
//!
//! Each variant lives in its own struct under [`crate::variants`] and
//! implements [`TargetVariant`]; [`Target`] dispatches to them with an
//! exhaustive match so adding a variant is a compile error until every
//! operation handles it.

use std::fmt;

use quarry_primitives::{Edit, EditorRef, Range, Selection, TextDocument};

use crate::arena::ThatTargetId;
use crate::error::{Result, TargetError};
use crate::kind::{TargetFlags, TargetKind};
use crate::removal::{expand_to_full_line, token_leading_whitespace, token_removal_range, token_trailing_whitespace};
use crate::variants::{
	BoundedParagraphTarget, DocumentTarget, HeadTailTarget, ImplicitTarget, InteriorTarget, LineTarget,
	ParagraphTarget, PlainTarget, PositionTarget, RawSelectionTarget, ScopeTypeTarget, SubTokenWordTarget,
	SurroundingPairTarget, TargetPosition, TextOnlyTarget, TokenTarget, UntypedTarget,
};

#[cfg(test)]
mod tests;

/// Fields shared by every target.
#[derive(Clone)]
pub struct TargetCommon {
	pub editor: EditorRef,
	/// True if the user's selection runs right-to-left. Never affects range math.
	pub is_reversed: bool,
	pub content_range: Range,
	/// Earlier target this one was derived from, if any.
	pub that_target: Option<ThatTargetId>,
}

impl TargetCommon {
	pub fn new(editor: EditorRef, content_range: Range, is_reversed: bool) -> Self {
		Self {
			editor,
			is_reversed,
			content_range,
			that_target: None,
		}
	}

	pub fn document(&self) -> &TextDocument {
		&self.editor.document
	}

	/// Same editor and direction over a different range, with no that-target.
	pub fn derive(&self, content_range: Range) -> Self {
		Self::new(self.editor.clone(), content_range, self.is_reversed)
	}

	/// Hull of this target's content and `end`'s content, in direction `is_reversed`.
	pub(crate) fn merged(&self, is_reversed: bool, end: &TargetCommon) -> Self {
		Self::new(
			self.editor.clone(),
			self.content_range.union(&end.content_range),
			is_reversed,
		)
	}
}

impl PartialEq for TargetCommon {
	fn eq(&self, other: &Self) -> bool {
		self.editor.id == other.editor.id
			&& self.is_reversed == other.is_reversed
			&& self.content_range == other.content_range
	}
}

impl fmt::Debug for TargetCommon {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TargetCommon")
			.field("editor", &self.editor.id)
			.field("is_reversed", &self.is_reversed)
			.field("content_range", &self.content_range)
			.field("that_target", &self.that_target)
			.finish()
	}
}

/// Behaviour implemented by each target variant. Defaults describe a target
/// with no delimiters whose removal range is its content.
pub(crate) trait TargetVariant: Sized {
	const KIND: TargetKind;

	fn common(&self) -> &TargetCommon;

	fn common_mut(&mut self) -> &mut TargetCommon;

	fn flags(&self) -> TargetFlags {
		Self::KIND.base_flags()
	}

	fn insertion_delimiter(&self) -> &str;

	fn leading_delimiter_target(&self) -> Option<Target> {
		None
	}

	fn trailing_delimiter_target(&self) -> Option<Target> {
		None
	}

	fn removal_range(&self) -> Result<Range> {
		Ok(self.common().content_range)
	}

	fn removal_highlight_range(&self) -> Result<Range> {
		self.removal_range()
	}

	fn construct_removal_edit(&self) -> Result<Edit> {
		Ok(Edit::delete(self.removal_range()?))
	}

	fn construct_change_edit(&self, text: &str) -> Result<Edit> {
		Ok(Edit::replace(self.common().content_range, text))
	}

	fn interior_strict(&self) -> Result<Vec<Target>> {
		Err(TargetError::no_containing_scope("interior"))
	}

	fn boundary_strict(&self) -> Result<Vec<Target>> {
		Err(TargetError::no_containing_scope("boundary"))
	}

	/// Replaces the content range. Variants with derived state refresh it here.
	fn set_content_range(&mut self, content_range: Range) {
		self.common_mut().content_range = content_range;
	}

	/// Type-preserving merge with a target of the same variant, or `None` to
	/// fall back to the generic continuous range.
	fn rich_merge(&self, _is_reversed: bool, _end: &Self) -> Option<Target> {
		None
	}
}

/// A resolved, typed region of a document together with its editing semantics.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
	Token(TokenTarget),
	Line(LineTarget),
	Paragraph(ParagraphTarget),
	BoundedParagraph(BoundedParagraphTarget),
	Document(DocumentTarget),
	Interior(InteriorTarget),
	SurroundingPair(SurroundingPairTarget),
	ScopeType(ScopeTypeTarget),
	SubTokenWord(SubTokenWordTarget),
	HeadTail(HeadTailTarget),
	Position(PositionTarget),
	Plain(PlainTarget),
	Untyped(UntypedTarget),
	RawSelection(RawSelectionTarget),
	Implicit(ImplicitTarget),
	TextOnly(TextOnlyTarget),
}

macro_rules! dispatch {
	($target:expr, $inner:ident => $body:expr) => {
		match $target {
			Target::Token($inner) => $body,
			Target::Line($inner) => $body,
			Target::Paragraph($inner) => $body,
			Target::BoundedParagraph($inner) => $body,
			Target::Document($inner) => $body,
			Target::Interior($inner) => $body,
			Target::SurroundingPair($inner) => $body,
			Target::ScopeType($inner) => $body,
			Target::SubTokenWord($inner) => $body,
			Target::HeadTail($inner) => $body,
			Target::Position($inner) => $body,
			Target::Plain($inner) => $body,
			Target::Untyped($inner) => $body,
			Target::RawSelection($inner) => $body,
			Target::Implicit($inner) => $body,
			Target::TextOnly($inner) => $body,
		}
	};
}

/// Applies `$merge` when both targets are the same variant.
macro_rules! same_variant {
	($a:expr, $b:expr, ($x:ident, $y:ident) => $merge:expr) => {
		match ($a, $b) {
			(Target::Token($x), Target::Token($y)) => $merge,
			(Target::Line($x), Target::Line($y)) => $merge,
			(Target::Paragraph($x), Target::Paragraph($y)) => $merge,
			(Target::BoundedParagraph($x), Target::BoundedParagraph($y)) => $merge,
			(Target::Document($x), Target::Document($y)) => $merge,
			(Target::Interior($x), Target::Interior($y)) => $merge,
			(Target::SurroundingPair($x), Target::SurroundingPair($y)) => $merge,
			(Target::ScopeType($x), Target::ScopeType($y)) => $merge,
			(Target::SubTokenWord($x), Target::SubTokenWord($y)) => $merge,
			(Target::HeadTail($x), Target::HeadTail($y)) => $merge,
			(Target::Position($x), Target::Position($y)) => $merge,
			(Target::Plain($x), Target::Plain($y)) => $merge,
			(Target::Untyped($x), Target::Untyped($y)) => $merge,
			(Target::RawSelection($x), Target::RawSelection($y)) => $merge,
			(Target::Implicit($x), Target::Implicit($y)) => $merge,
			(Target::TextOnly($x), Target::TextOnly($y)) => $merge,
			_ => None,
		}
	};
}

impl Target {
	/// A whitespace-delimited token.
	pub fn token(editor: EditorRef, content_range: Range, is_reversed: bool) -> Self {
		Self::Token(TokenTarget::new(TargetCommon::new(editor, content_range, is_reversed)))
	}

	/// A line target over the full lines touched by `content_range`.
	pub fn line(editor: EditorRef, content_range: Range, is_reversed: bool) -> Self {
		let content_range = expand_to_full_line(&editor.document, content_range);
		Self::Line(LineTarget::new(TargetCommon::new(editor, content_range, is_reversed)))
	}

	pub fn plain(editor: EditorRef, content_range: Range, is_reversed: bool) -> Self {
		Self::Plain(PlainTarget::new(TargetCommon::new(editor, content_range, is_reversed)))
	}

	/// A target with no scope type, as produced from a bare cursor or selection.
	pub fn untyped(editor: EditorRef, content_range: Range, is_reversed: bool, has_explicit_range: bool) -> Self {
		Self::Untyped(UntypedTarget::new(
			TargetCommon::new(editor, content_range, is_reversed),
			has_explicit_range,
		))
	}

	pub fn kind(&self) -> TargetKind {
		dispatch!(self, t => kind_of(t))
	}

	pub fn flags(&self) -> TargetFlags {
		dispatch!(self, t => t.flags())
	}

	pub fn is_line(&self) -> bool {
		self.flags().contains(TargetFlags::LINE)
	}

	pub fn is_token(&self) -> bool {
		self.flags().contains(TargetFlags::TOKEN)
	}

	pub fn is_word(&self) -> bool {
		self.flags().contains(TargetFlags::WORD)
	}

	pub fn is_raw(&self) -> bool {
		self.flags().contains(TargetFlags::RAW)
	}

	pub fn is_implicit(&self) -> bool {
		self.flags().contains(TargetFlags::IMPLICIT)
	}

	pub fn has_explicit_range(&self) -> bool {
		self.flags().contains(TargetFlags::EXPLICIT_RANGE)
	}

	pub fn has_explicit_scope_type(&self) -> bool {
		self.flags().contains(TargetFlags::EXPLICIT_SCOPE_TYPE)
	}

	fn common(&self) -> &TargetCommon {
		dispatch!(self, t => t.common())
	}

	fn common_mut(&mut self) -> &mut TargetCommon {
		dispatch!(self, t => t.common_mut())
	}

	pub fn editor(&self) -> &EditorRef {
		&self.common().editor
	}

	pub fn document(&self) -> &TextDocument {
		self.common().document()
	}

	pub fn is_reversed(&self) -> bool {
		self.common().is_reversed
	}

	pub fn content_range(&self) -> Range {
		self.common().content_range
	}

	/// Arena id of the target this one was derived from.
	pub fn that_target_id(&self) -> Option<ThatTargetId> {
		self.common().that_target
	}

	/// Text covered by the content range, or the carried text of a text-only target.
	pub fn content_text(&self) -> String {
		match self {
			Self::TextOnly(t) => t.text.clone(),
			_ => self.document().get_text(self.content_range()),
		}
	}

	/// Content range as a selection, active end following `is_reversed`.
	pub fn content_selection(&self) -> Selection {
		Selection::from_range(self.content_range(), self.is_reversed())
	}

	pub fn insertion_delimiter(&self) -> &str {
		dispatch!(self, t => t.insertion_delimiter())
	}

	pub fn leading_delimiter_target(&self) -> Option<Target> {
		dispatch!(self, t => t.leading_delimiter_target())
	}

	pub fn trailing_delimiter_target(&self) -> Option<Target> {
		dispatch!(self, t => t.trailing_delimiter_target())
	}

	/// Range deleted when this target is removed. Always contains the content range.
	pub fn removal_range(&self) -> Result<Range> {
		dispatch!(self, t => t.removal_range())
	}

	/// Range highlighted to preview a removal.
	pub fn removal_highlight_range(&self) -> Result<Range> {
		dispatch!(self, t => t.removal_highlight_range())
	}

	pub fn construct_removal_edit(&self) -> Result<Edit> {
		dispatch!(self, t => t.construct_removal_edit())
	}

	/// Edit replacing this target with `text`.
	pub fn construct_change_edit(&self, text: &str) -> Result<Edit> {
		dispatch!(self, t => t.construct_change_edit(text))
	}

	/// Body between the delimiters of a pair-like target.
	pub fn interior_strict(&self) -> Result<Vec<Target>> {
		dispatch!(self, t => t.interior_strict())
	}

	/// The delimiters of a pair-like target as two token targets.
	pub fn boundary_strict(&self) -> Result<Vec<Target>> {
		dispatch!(self, t => t.boundary_strict())
	}

	/// Returns a copy with the given fields replaced.
	pub fn clone_with(&self, overrides: CloneWith) -> Target {
		let mut target = self.clone();
		if let Some(content_range) = overrides.content_range {
			dispatch!(&mut target, t => t.set_content_range(content_range));
		}
		if let Some(is_reversed) = overrides.is_reversed {
			target.common_mut().is_reversed = is_reversed;
		}
		if let Some(that_target) = overrides.that_target {
			target.common_mut().that_target = that_target;
		}
		target
	}

	pub fn with_content_range(&self, content_range: Range) -> Target {
		self.clone_with(CloneWith {
			content_range: Some(content_range),
			..CloneWith::default()
		})
	}

	pub fn with_that_target(&self, that_target: Option<ThatTargetId>) -> Target {
		self.clone_with(CloneWith {
			that_target: Some(that_target),
			..CloneWith::default()
		})
	}

	/// Type-preserving merge with `end` when both share a variant.
	pub(crate) fn rich_merge(&self, is_reversed: bool, end: &Target) -> Option<Target> {
		same_variant!(self, end, (a, b) => a.rich_merge(is_reversed, b))
	}

	/// Collapses this target to a zero-width [`PositionTarget`].
	///
	/// `before` and `after` keep this target's insertion delimiter; `start`
	/// and `end` use an empty one.
	pub fn to_position_target(&self, position: TargetPosition) -> Target {
		let content = self.content_range();
		let (at, insertion_delimiter) = match position {
			TargetPosition::Before => (content.start, self.insertion_delimiter()),
			TargetPosition::After => (content.end, self.insertion_delimiter()),
			TargetPosition::Start => (content.start, ""),
			TargetPosition::End => (content.end, ""),
		};
		let mut common = TargetCommon::new(self.editor().clone(), at.to_empty_range(), self.is_reversed());
		common.that_target = self.that_target_id();
		Target::Position(PositionTarget::new(
			common,
			position,
			insertion_delimiter.to_string(),
			self.is_raw(),
			content,
		))
	}
}

/// Field overrides for [`Target::clone_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CloneWith {
	pub content_range: Option<Range>,
	pub is_reversed: Option<bool>,
	pub that_target: Option<Option<ThatTargetId>>,
}

fn kind_of<T: TargetVariant>(_: &T) -> TargetKind {
	T::KIND
}

/// Token delimiter: whitespace before the content on the same line.
pub(crate) fn token_leading_delimiter(common: &TargetCommon) -> Option<Target> {
	token_leading_whitespace(common.document(), common.content_range)
		.map(|range| Target::Plain(PlainTarget::new(common.derive(range))))
}

/// Token delimiter: whitespace after the content on the same line.
pub(crate) fn token_trailing_delimiter(common: &TargetCommon) -> Option<Target> {
	token_trailing_whitespace(common.document(), common.content_range)
		.map(|range| Target::Plain(PlainTarget::new(common.derive(range))))
}

/// Token removal over the target's own whitespace delimiters.
pub(crate) fn token_removal(common: &TargetCommon) -> Range {
	let document = common.document();
	let content = common.content_range;
	token_removal_range(
		document,
		content,
		token_leading_whitespace(document, content),
		token_trailing_whitespace(document, content),
	)
}
