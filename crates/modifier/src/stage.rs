//! The stage interface and the factory mapping descriptors to stages.

use quarry_primitives::ScopeType;
use quarry_target::{Result, Target, TargetPosition};

use crate::context::ModifierContext;
use crate::modifier::Modifier;
use crate::stages::composite::{CascadingStage, ModifyIfUntypedStage, RangeModifierStage};
use crate::stages::delimiters::{InteriorStage, LeadingTrailingStage, PairPart, Side};
use crate::stages::head_tail::{HeadTailStage, Reach};
use crate::stages::scope::{ContainingScopeStage, EveryScopeStage, OrdinalScopeStage, RelativeScopeStage};
use crate::stages::simple::{FilenameStage, FilterStage, FullLineStage, Keep, PositionStage, RawSelectionStage};
use crate::stages::subpiece::SubpieceStage;

/// One step of the pipeline: turns a target into zero or more targets.
///
/// Stages either succeed for a target as a whole or fail; there is no partial
/// result.
pub trait ModifierStage {
	fn run(&self, ctx: &ModifierContext, target: &Target) -> Result<Vec<Target>>;
}

/// The stage implementing `modifier`.
pub fn create_stage(modifier: &Modifier) -> Box<dyn ModifierStage + '_> {
	match modifier {
		Modifier::ContainingScope {
			scope_type,
			ancestor_index,
		} => Box::new(ContainingScopeStage::new(scope_type.clone(), *ancestor_index)),
		Modifier::SurroundingPair {
			delimiter,
			require_strong_containment,
		} => Box::new(ContainingScopeStage::new(
			ScopeType::SurroundingPair {
				delimiter: *delimiter,
				require_strong_containment: *require_strong_containment,
			},
			0,
		)),
		Modifier::EveryScope { scope_type } => Box::new(EveryScopeStage::new(scope_type.clone())),
		Modifier::OrdinalScope {
			scope_type,
			start,
			length,
			is_every,
		} => Box::new(OrdinalScopeStage {
			scope_type,
			start: *start,
			length: *length,
			is_every: *is_every,
		}),
		Modifier::RelativeScope {
			scope_type,
			offset,
			length,
			direction,
			is_every,
		} => Box::new(RelativeScopeStage {
			scope_type,
			offset: *offset,
			length: *length,
			direction: *direction,
			is_every: *is_every,
		}),
		Modifier::ExtendThroughStartOf { modifiers } => Box::new(HeadTailStage::new(Reach::Head, modifiers.as_deref())),
		Modifier::ExtendThroughEndOf { modifiers } => Box::new(HeadTailStage::new(Reach::Tail, modifiers.as_deref())),
		Modifier::Subpiece {
			piece_type,
			anchor,
			active,
			exclude_anchor,
			exclude_active,
		} => Box::new(SubpieceStage {
			piece_type: *piece_type,
			anchor: *anchor,
			active: *active,
			exclude: *exclude_anchor || *exclude_active,
		}),
		Modifier::StartOf => Box::new(PositionStage(TargetPosition::Start)),
		Modifier::EndOf => Box::new(PositionStage(TargetPosition::End)),
		Modifier::Position { position } => Box::new(PositionStage(*position)),
		Modifier::ToRawSelection => Box::new(RawSelectionStage),
		Modifier::FullLine => Box::new(FullLineStage),
		Modifier::Filename => Box::new(FilenameStage),
		Modifier::InteriorOnly => Box::new(InteriorStage(PairPart::Interior)),
		Modifier::ExcludeInterior => Box::new(InteriorStage(PairPart::Boundary)),
		Modifier::Leading => Box::new(LeadingTrailingStage(Side::Leading)),
		Modifier::Trailing => Box::new(LeadingTrailingStage(Side::Trailing)),
		Modifier::KeepContentFilter => Box::new(FilterStage(Keep::Content)),
		Modifier::KeepEmptyFilter => Box::new(FilterStage(Keep::Empty)),
		Modifier::Cascading { modifiers } => Box::new(CascadingStage { modifiers }),
		Modifier::ModifyIfUntyped { modifier } => Box::new(ModifyIfUntypedStage { modifier }),
		Modifier::Range {
			anchor,
			active,
			exclude_anchor,
			exclude_active,
		} => Box::new(RangeModifierStage {
			anchor,
			active,
			exclude_anchor: *exclude_anchor,
			exclude_active: *exclude_active,
		}),
	}
}
