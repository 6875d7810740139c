//! Stages that reinterpret a target without searching the document.

use quarry_target::{RawSelectionTarget, Result, Target, TargetCommon, TargetError, TargetPosition, TextOnlyTarget};

use crate::context::ModifierContext;
use crate::stage::ModifierStage;

/// Collapses the target to a zero-width position.
pub struct PositionStage(pub TargetPosition);

impl ModifierStage for PositionStage {
	fn run(&self, _ctx: &ModifierContext, target: &Target) -> Result<Vec<Target>> {
		Ok(vec![target.to_position_target(self.0)])
	}
}

/// Keeps the range, drops the type.
pub struct RawSelectionStage;

impl ModifierStage for RawSelectionStage {
	fn run(&self, _ctx: &ModifierContext, target: &Target) -> Result<Vec<Target>> {
		let mut common = TargetCommon::new(target.editor().clone(), target.content_range(), target.is_reversed());
		common.that_target = target.that_target_id();
		Ok(vec![Target::RawSelection(RawSelectionTarget::new(common))])
	}
}

/// The whole lines the target touches.
pub struct FullLineStage;

impl ModifierStage for FullLineStage {
	fn run(&self, _ctx: &ModifierContext, target: &Target) -> Result<Vec<Target>> {
		Ok(vec![Target::line(
			target.editor().clone(),
			target.content_range(),
			target.is_reversed(),
		)])
	}
}

/// The document's file name, as text that cannot be edited in place.
pub struct FilenameStage;

impl ModifierStage for FilenameStage {
	fn run(&self, _ctx: &ModifierContext, target: &Target) -> Result<Vec<Target>> {
		let name = target
			.document()
			.file_name()
			.ok_or_else(|| TargetError::Unsupported("Document has no file name".into()))?;
		let common = TargetCommon::new(target.editor().clone(), target.content_range(), target.is_reversed());
		Ok(vec![Target::TextOnly(TextOnlyTarget::new(common, name))])
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keep {
	/// Targets with some non-whitespace content.
	Content,
	/// Targets whose content is empty or whitespace.
	Empty,
}

pub struct FilterStage(pub Keep);

impl ModifierStage for FilterStage {
	fn run(&self, _ctx: &ModifierContext, target: &Target) -> Result<Vec<Target>> {
		let is_empty = target.content_text().trim().is_empty();
		let keep = match self.0 {
			Keep::Content => !is_empty,
			Keep::Empty => is_empty,
		};
		Ok(if keep { vec![target.clone()] } else { Vec::new() })
	}
}
