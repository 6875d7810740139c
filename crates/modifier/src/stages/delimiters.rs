//! Parts of a target: the interior and boundary of a pair, and the leading
//! and trailing delimiters.

use quarry_primitives::{ScopeType, SimpleScopeType, SurroundingPairName};
use quarry_target::{Result, Target, TargetError};
use tracing::trace;

use super::scope::ContainingScopeStage;
use crate::context::ModifierContext;
use crate::stage::ModifierStage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairPart {
	Interior,
	/// Everything but the interior.
	Boundary,
}

impl PairPart {
	fn of(self, target: &Target) -> Result<Vec<Target>> {
		match self {
			Self::Interior => target.interior_strict(),
			Self::Boundary => target.boundary_strict(),
		}
	}
}

/// Interior or boundary of the target. A target without a scope type is
/// first expanded to its containing surrounding pair.
pub struct InteriorStage(pub PairPart);

impl ModifierStage for InteriorStage {
	fn run(&self, ctx: &ModifierContext, target: &Target) -> Result<Vec<Target>> {
		match self.0.of(target) {
			Ok(parts) => return Ok(parts),
			Err(err) if target.has_explicit_scope_type() => return Err(err),
			Err(_) => trace!(part = ?self.0, "expanding to containing pair"),
		}
		let pair = ScopeType::SurroundingPair {
			delimiter: SurroundingPairName::Any,
			require_strong_containment: true,
		};
		let mut parts = Vec::new();
		for pair in ContainingScopeStage::new(pair, 0).run(ctx, target)? {
			parts.extend(self.0.of(&pair)?);
		}
		Ok(parts)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
	Leading,
	Trailing,
}

/// The delimiter before or after the target. A target without a scope type
/// is first expanded to its containing token.
pub struct LeadingTrailingStage(pub Side);

impl LeadingTrailingStage {
	fn delimiter(&self, target: &Target) -> Option<Target> {
		match self.0 {
			Side::Leading => target.leading_delimiter_target(),
			Side::Trailing => target.trailing_delimiter_target(),
		}
	}
}

impl ModifierStage for LeadingTrailingStage {
	fn run(&self, ctx: &ModifierContext, target: &Target) -> Result<Vec<Target>> {
		let targets = if target.has_explicit_scope_type() {
			vec![target.clone()]
		} else {
			ContainingScopeStage::new(SimpleScopeType::Token.into(), 0).run(ctx, target)?
		};
		targets
			.iter()
			.map(|target| {
				self.delimiter(target).ok_or_else(|| match self.0 {
					Side::Leading => TargetError::no_containing_scope("leading delimiter"),
					Side::Trailing => TargetError::no_containing_scope("trailing delimiter"),
				})
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use quarry_primitives::{Range, TextDocument, TextEditor};

	use super::*;

	fn untyped(text: &str, range: Range) -> Target {
		let editor = TextEditor::new(TextDocument::new(text, "plaintext")).into_ref();
		Target::untyped(editor, range, false, !range.is_empty())
	}

	fn texts(stage: &dyn ModifierStage, target: &Target) -> Vec<String> {
		stage
			.run(&ModifierContext::default(), target)
			.unwrap()
			.iter()
			.map(Target::content_text)
			.collect()
	}

	#[test]
	fn interior_of_containing_pair() {
		let cursor = untyped("call( x + y )", Range::from_coords(0, 8, 0, 8));
		assert_eq!(texts(&InteriorStage(PairPart::Interior), &cursor), vec!["x + y"]);
		assert_eq!(texts(&InteriorStage(PairPart::Boundary), &cursor), vec!["(", ")"]);
	}

	#[test]
	fn typed_target_without_interior_fails() {
		let editor = TextEditor::new(TextDocument::new("(a)", "plaintext")).into_ref();
		let token = Target::token(editor, Range::from_coords(0, 1, 0, 2), false);
		let err = InteriorStage(PairPart::Interior)
			.run(&ModifierContext::default(), &token)
			.unwrap_err();
		assert_eq!(err, TargetError::no_containing_scope("interior"));
	}

	#[test]
	fn delimiters_of_containing_token() {
		let cursor = untyped("a  bb c", Range::from_coords(0, 4, 0, 4));
		assert_eq!(texts(&LeadingTrailingStage(Side::Leading), &cursor), vec!["  "]);
		assert_eq!(texts(&LeadingTrailingStage(Side::Trailing), &cursor), vec![" "]);
	}

	#[test]
	fn missing_delimiter() {
		let cursor = untyped("bb c", Range::from_coords(0, 1, 0, 1));
		let err = LeadingTrailingStage(Side::Leading)
			.run(&ModifierContext::default(), &cursor)
			.unwrap_err();
		assert_eq!(err, TargetError::no_containing_scope("leading delimiter"));
	}
}
