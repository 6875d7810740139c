//! Target kinds and their capability flags.

use bitflags::bitflags;
use serde::Serialize;

/// Runtime variant tag of a [`Target`](crate::Target).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TargetKind {
	Token,
	Line,
	Paragraph,
	BoundedParagraph,
	Document,
	Interior,
	SurroundingPair,
	ScopeType,
	SubTokenWord,
	HeadTail,
	Position,
	Plain,
	Untyped,
	RawSelection,
	Implicit,
	TextOnly,
}

impl TargetKind {
	/// Type name used in plain-object serialisation.
	pub fn type_name(self) -> &'static str {
		match self {
			Self::Token => "TokenTarget",
			Self::Line => "LineTarget",
			Self::Paragraph => "ParagraphTarget",
			Self::BoundedParagraph => "BoundedParagraphTarget",
			Self::Document => "DocumentTarget",
			Self::Interior => "InteriorTarget",
			Self::SurroundingPair => "SurroundingPairTarget",
			Self::ScopeType => "ScopeTypeTarget",
			Self::SubTokenWord => "SubTokenWordTarget",
			Self::HeadTail => "HeadTailTarget",
			Self::Position => "PositionTarget",
			Self::Plain => "PlainTarget",
			Self::Untyped => "UntypedTarget",
			Self::RawSelection => "RawSelectionTarget",
			Self::Implicit => "ImplicitTarget",
			Self::TextOnly => "TextOnlyTarget",
		}
	}

	/// Flags every target of this kind carries. Parameterised flags are
	/// added on top by the target itself.
	pub const fn base_flags(self) -> TargetFlags {
		use TargetFlags as F;
		match self {
			Self::Token | Self::Interior | Self::SurroundingPair | Self::ScopeType => {
				F::TOKEN.union(F::EXPLICIT_SCOPE_TYPE).union(F::EXPLICIT_RANGE)
			}
			Self::Line | Self::Paragraph | Self::BoundedParagraph | Self::Document => {
				F::LINE.union(F::EXPLICIT_SCOPE_TYPE).union(F::EXPLICIT_RANGE)
			}
			Self::SubTokenWord => F::WORD.union(F::EXPLICIT_SCOPE_TYPE).union(F::EXPLICIT_RANGE),
			Self::HeadTail | Self::Position | Self::Plain => F::EXPLICIT_SCOPE_TYPE.union(F::EXPLICIT_RANGE),
			Self::Untyped => F::empty(),
			Self::RawSelection => F::RAW.union(F::EXPLICIT_RANGE),
			Self::Implicit => F::RAW.union(F::IMPLICIT).union(F::EXPLICIT_RANGE),
			Self::TextOnly => F::TEXT_ONLY.union(F::EXPLICIT_SCOPE_TYPE).union(F::EXPLICIT_RANGE),
		}
	}
}

bitflags! {
	/// Capability flags queried by modifiers and actions.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct TargetFlags: u16 {
		const LINE = 1 << 0;
		const TOKEN = 1 << 1;
		const WORD = 1 << 2;
		const EXPLICIT_RANGE = 1 << 3;
		const EXPLICIT_SCOPE_TYPE = 1 << 4;
		const RAW = 1 << 5;
		const IMPLICIT = 1 << 6;
		/// Reserved for notebook cell targets; no built-in kind sets it.
		const NOTEBOOK_CELL = 1 << 7;
		const TEXT_ONLY = 1 << 8;
	}
}
