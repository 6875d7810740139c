//! Stages that run other modifiers.

use quarry_target::{Result, Target, TargetError, targets_to_continuous_target};
use tracing::debug;

use crate::context::ModifierContext;
use crate::modifier::Modifier;
use crate::pipeline::apply_modifier;
use crate::stage::ModifierStage;

/// The result of the first modifier that succeeds.
pub struct CascadingStage<'a> {
	pub modifiers: &'a [Modifier],
}

impl ModifierStage for CascadingStage<'_> {
	fn run(&self, ctx: &ModifierContext, target: &Target) -> Result<Vec<Target>> {
		let mut last_error = None;
		for modifier in self.modifiers {
			match apply_modifier(target, modifier, ctx) {
				Ok(targets) => return Ok(targets),
				Err(err) => {
					debug!(modifier = modifier.name(), error = %err, "cascading to next modifier");
					last_error = Some(err);
				}
			}
		}
		Err(last_error.unwrap_or_else(|| TargetError::InvalidModifier("cascading modifier has no modifiers".into())))
	}
}

/// Applies the modifier only to targets without an explicit scope type.
pub struct ModifyIfUntypedStage<'a> {
	pub modifier: &'a Modifier,
}

impl ModifierStage for ModifyIfUntypedStage<'_> {
	fn run(&self, ctx: &ModifierContext, target: &Target) -> Result<Vec<Target>> {
		if target.has_explicit_scope_type() {
			return Ok(vec![target.clone()]);
		}
		apply_modifier(target, self.modifier, ctx)
	}
}

/// A range between two modified copies of the target.
pub struct RangeModifierStage<'a> {
	pub anchor: &'a Modifier,
	pub active: &'a Modifier,
	pub exclude_anchor: bool,
	pub exclude_active: bool,
}

fn single(mut targets: Vec<Target>, end: &str) -> Result<Target> {
	match targets.len() {
		1 => Ok(targets.remove(0)),
		found => Err(TargetError::InvalidModifier(format!(
			"range {end} must produce one target, got {found}"
		))),
	}
}

impl ModifierStage for RangeModifierStage<'_> {
	fn run(&self, ctx: &ModifierContext, target: &Target) -> Result<Vec<Target>> {
		let anchor = single(apply_modifier(target, self.anchor, ctx)?, "anchor")?;
		let active = single(apply_modifier(target, self.active, ctx)?, "active")?;
		Ok(vec![targets_to_continuous_target(
			&anchor,
			&active,
			self.exclude_anchor,
			self.exclude_active,
		)?])
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use quarry_primitives::{Range, SimpleScopeType, SurroundingPairName, TextDocument, TextEditor};

	use super::*;

	fn cursor(text: &str, character: usize) -> Target {
		let editor = TextEditor::new(TextDocument::new(text, "plaintext")).into_ref();
		Target::untyped(editor, Range::from_coords(0, character, 0, character), false, false)
	}

	fn run(stage: &dyn ModifierStage, target: &Target) -> Result<Vec<Target>> {
		stage.run(&ModifierContext::default(), target)
	}

	fn pair() -> Modifier {
		Modifier::SurroundingPair {
			delimiter: SurroundingPairName::Any,
			require_strong_containment: false,
		}
	}

	#[test]
	fn cascading_falls_through_failures() {
		let modifiers = [pair(), Modifier::containing(SimpleScopeType::Token)];
		let found = run(&CascadingStage { modifiers: &modifiers }, &cursor("a bb", 3)).unwrap();
		assert_eq!(found[0].content_text(), "bb");
		let found = run(&CascadingStage { modifiers: &modifiers }, &cursor("(bb)", 2)).unwrap();
		assert_eq!(found[0].content_text(), "(bb)");
	}

	#[test]
	fn cascading_reports_last_error() {
		let modifiers = [pair()];
		let err = run(&CascadingStage { modifiers: &modifiers }, &cursor("a", 0)).unwrap_err();
		assert_eq!(err, TargetError::no_containing_scope("surroundingPair"));
		assert!(matches!(
			run(&CascadingStage { modifiers: &[] }, &cursor("a", 0)),
			Err(TargetError::InvalidModifier(_))
		));
	}

	#[test]
	fn modify_if_untyped_leaves_typed_targets() {
		let modifier = Modifier::containing(SimpleScopeType::Line);
		let stage = ModifyIfUntypedStage { modifier: &modifier };
		let untyped = cursor("ab cd", 1);
		assert_eq!(run(&stage, &untyped).unwrap()[0].content_text(), "ab cd");
		let token = Target::token(untyped.editor().clone(), Range::from_coords(0, 0, 0, 2), false);
		assert_eq!(run(&stage, &token).unwrap(), vec![token]);
	}

	#[test]
	fn range_between_modified_targets() {
		let first = Modifier::OrdinalScope {
			scope_type: SimpleScopeType::Token.into(),
			start: 0,
			length: 1,
			is_every: false,
		};
		let last = Modifier::OrdinalScope {
			scope_type: SimpleScopeType::Token.into(),
			start: -1,
			length: 1,
			is_every: false,
		};
		let stage = RangeModifierStage {
			anchor: &last,
			active: &first,
			exclude_anchor: true,
			exclude_active: true,
		};
		let range = run(&stage, &cursor("a bb ccc", 0)).unwrap().remove(0);
		assert_eq!(range.content_text(), " bb ");
		assert!(range.is_reversed());
	}

	#[test]
	fn range_needs_single_endpoints() {
		let every = Modifier::every(SimpleScopeType::Token);
		let token = Modifier::containing(SimpleScopeType::Token);
		let stage = RangeModifierStage {
			anchor: &every,
			active: &token,
			exclude_anchor: false,
			exclude_active: false,
		};
		assert!(matches!(
			run(&stage, &cursor("a bb", 0)),
			Err(TargetError::InvalidModifier(_))
		));
	}
}
