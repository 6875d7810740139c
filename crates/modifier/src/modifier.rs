//! Modifier descriptors.
//!
//! Descriptors arrive as JSON objects tagged by `type`, with camelCase field
//! names:
//!
//! ```json
//! {"type": "containingScope", "scopeType": {"type": "namedFunction"}}
//! {"type": "subpiece", "pieceType": "word", "anchor": 0, "active": -1}
//! ```

use quarry_primitives::{Direction, ScopeType, SimpleScopeType, SurroundingPairName};
use quarry_target::TargetPosition;
use serde::{Deserialize, Serialize};

/// Unit a subpiece modifier splits a token into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PieceType {
	Word,
	Character,
}

/// A transformation from one target to zero or more targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Modifier {
	/// The `ancestor_index`-th scope of `scope_type` containing the target.
	ContainingScope {
		scope_type: ScopeType,
		#[serde(default)]
		ancestor_index: usize,
	},
	/// Every scope of `scope_type` in the target's range, or in its iteration
	/// scope when the range is not explicit.
	EveryScope { scope_type: ScopeType },
	/// The `length` scopes starting at index `start` among every scope.
	OrdinalScope {
		scope_type: ScopeType,
		start: isize,
		length: usize,
		#[serde(default)]
		is_every: bool,
	},
	/// `length` scopes, `offset` scopes away from the target in `direction`.
	RelativeScope {
		scope_type: ScopeType,
		offset: usize,
		length: usize,
		direction: Direction,
		#[serde(default)]
		is_every: bool,
	},
	/// Shorthand for the containing surrounding pair.
	SurroundingPair {
		delimiter: SurroundingPairName,
		#[serde(default)]
		require_strong_containment: bool,
	},
	/// From the start of the modified target (the line by default) up to the
	/// end of the target.
	ExtendThroughStartOf {
		#[serde(default)]
		modifiers: Option<Vec<Modifier>>,
	},
	/// From the start of the target to the end of the modified target (the
	/// line by default).
	ExtendThroughEndOf {
		#[serde(default)]
		modifiers: Option<Vec<Modifier>>,
	},
	/// Words or characters of the token, by anchor and active index.
	/// Negative indices count from the end.
	Subpiece {
		piece_type: PieceType,
		anchor: isize,
		active: isize,
		#[serde(default)]
		exclude_anchor: bool,
		#[serde(default)]
		exclude_active: bool,
	},
	StartOf,
	EndOf,
	/// A zero-width target before, after, at the start or at the end.
	Position { position: TargetPosition },
	/// Drops the target's type, keeping its range.
	ToRawSelection,
	/// The full lines covered by the target.
	FullLine,
	/// The document's file name as read-only text.
	Filename,
	InteriorOnly,
	ExcludeInterior,
	/// The target's leading delimiter.
	Leading,
	/// The target's trailing delimiter.
	Trailing,
	/// Keeps targets with non-whitespace content.
	KeepContentFilter,
	/// Keeps targets with whitespace-only content.
	KeepEmptyFilter,
	/// The first of `modifiers` that applies.
	Cascading { modifiers: Vec<Modifier> },
	/// Applies `modifier` only to targets without an explicit scope type.
	ModifyIfUntyped { modifier: Box<Modifier> },
	/// A range from the target modified by `anchor` to the target modified
	/// by `active`.
	Range {
		anchor: Box<Modifier>,
		active: Box<Modifier>,
		#[serde(default)]
		exclude_anchor: bool,
		#[serde(default)]
		exclude_active: bool,
	},
}

impl Modifier {
	pub fn containing(scope_type: impl Into<ScopeType>) -> Self {
		Self::ContainingScope {
			scope_type: scope_type.into(),
			ancestor_index: 0,
		}
	}

	pub fn every(scope_type: impl Into<ScopeType>) -> Self {
		Self::EveryScope {
			scope_type: scope_type.into(),
		}
	}

	/// The containing line, the default bound of head and tail modifiers.
	pub fn containing_line() -> Self {
		Self::containing(SimpleScopeType::Line)
	}

	/// Descriptor tag, for tracing.
	pub fn name(&self) -> &'static str {
		match self {
			Self::ContainingScope { .. } => "containingScope",
			Self::EveryScope { .. } => "everyScope",
			Self::OrdinalScope { .. } => "ordinalScope",
			Self::RelativeScope { .. } => "relativeScope",
			Self::SurroundingPair { .. } => "surroundingPair",
			Self::ExtendThroughStartOf { .. } => "extendThroughStartOf",
			Self::ExtendThroughEndOf { .. } => "extendThroughEndOf",
			Self::Subpiece { .. } => "subpiece",
			Self::StartOf => "startOf",
			Self::EndOf => "endOf",
			Self::Position { .. } => "position",
			Self::ToRawSelection => "toRawSelection",
			Self::FullLine => "fullLine",
			Self::Filename => "filename",
			Self::InteriorOnly => "interiorOnly",
			Self::ExcludeInterior => "excludeInterior",
			Self::Leading => "leading",
			Self::Trailing => "trailing",
			Self::KeepContentFilter => "keepContentFilter",
			Self::KeepEmptyFilter => "keepEmptyFilter",
			Self::Cascading { .. } => "cascading",
			Self::ModifyIfUntyped { .. } => "modifyIfUntyped",
			Self::Range { .. } => "range",
		}
	}

	/// Short description for tracing.
	pub fn describe(&self) -> String {
		match self {
			Self::ContainingScope {
				scope_type,
				ancestor_index: 0,
			} => format!("containing {scope_type}"),
			Self::ContainingScope {
				scope_type,
				ancestor_index,
			} => format!("containing {scope_type}^{ancestor_index}"),
			Self::EveryScope { scope_type } => format!("every {scope_type}"),
			Self::OrdinalScope {
				scope_type,
				start,
				length,
				..
			} => format!("{scope_type}[{start}; {length}]"),
			Self::RelativeScope {
				scope_type,
				offset,
				length,
				direction,
				..
			} => format!("{scope_type} {direction:?}+{offset}x{length}"),
			Self::SurroundingPair { delimiter, .. } => format!("pair {delimiter}"),
			Self::Subpiece {
				piece_type,
				anchor,
				active,
				..
			} => format!("{piece_type:?} {anchor}..{active}"),
			Self::Position { position } => format!("position {position}"),
			Self::Cascading { modifiers } => format!("cascading x{}", modifiers.len()),
			Self::ModifyIfUntyped { modifier } => format!("if untyped: {}", modifier.describe()),
			Self::Range { anchor, active, .. } => format!("range {} - {}", anchor.describe(), active.describe()),
			other => other.name().to_string(),
		}
	}
}
