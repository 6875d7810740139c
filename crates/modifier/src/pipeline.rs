//! Running modifiers over targets.

use quarry_target::{Result, Target};
use tracing::trace;

use crate::context::ModifierContext;
use crate::modifier::Modifier;
use crate::stage::create_stage;

/// Applies one modifier to one target.
pub fn apply_modifier(target: &Target, modifier: &Modifier, ctx: &ModifierContext) -> Result<Vec<Target>> {
	trace!(modifier = %modifier.describe(), kind = ?target.kind(), range = ?target.content_range(), "modifier.apply");
	let targets = create_stage(modifier).run(ctx, target)?;
	trace!(modifier = modifier.name(), count = targets.len(), "modifier.done");
	Ok(targets)
}

/// Applies `modifiers` in order, each to every target the previous one
/// produced.
pub fn apply_modifiers(targets: Vec<Target>, modifiers: &[Modifier], ctx: &ModifierContext) -> Result<Vec<Target>> {
	modifiers.iter().try_fold(targets, |targets, modifier| {
		let mut next = Vec::with_capacity(targets.len());
		for target in &targets {
			next.extend(apply_modifier(target, modifier, ctx)?);
		}
		Ok(next)
	})
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use quarry_primitives::{Range, SimpleScopeType, TextDocument, TextEditor};

	use super::*;

	fn cursor(text: &str, line: usize, character: usize) -> Target {
		let editor = TextEditor::new(TextDocument::new(text, "plaintext")).into_ref();
		Target::untyped(editor, Range::from_coords(line, character, line, character), false, false)
	}

	#[test]
	fn no_modifiers_is_identity() {
		let target = cursor("abc", 0, 1);
		let targets = apply_modifiers(vec![target.clone()], &[], &ModifierContext::default()).unwrap();
		assert_eq!(targets, vec![target]);
	}

	#[test]
	fn modifiers_apply_in_order() {
		let target = cursor("one two\nthree", 0, 5);
		let modifiers = [
			Modifier::containing(SimpleScopeType::Line),
			Modifier::every(SimpleScopeType::Token),
		];
		let texts: Vec<String> = apply_modifiers(vec![target], &modifiers, &ModifierContext::default())
			.unwrap()
			.iter()
			.map(Target::content_text)
			.collect();
		assert_eq!(texts, vec!["one", "two"]);
	}

	#[test]
	fn failure_fails_the_whole_chain() {
		let target = cursor("   ", 0, 1);
		let modifiers = [Modifier::containing(SimpleScopeType::Token)];
		assert!(apply_modifiers(vec![target], &modifiers, &ModifierContext::default()).is_err());
	}
}
