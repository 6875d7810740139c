//! Stages that search for scopes: containing, every, ordinal and relative.

use quarry_primitives::{Direction, Position, Range, ScopeType};
use quarry_scope::{
	ContainmentPolicy, ScopeHandler, ScopeIteratorRequirements, TargetScope, containing_scope_target,
	preferred_scope_touching_position, scope_range_target, scopes_overlapping_range,
};
use quarry_target::{Result, Target, TargetError};
use tracing::{debug, trace};

use crate::context::ModifierContext;
use crate::stage::ModifierStage;

/// The innermost (or `ancestor_index`-th) scope containing the target.
pub struct ContainingScopeStage {
	scope_type: ScopeType,
	ancestor_index: usize,
}

impl ContainingScopeStage {
	pub fn new(scope_type: ScopeType, ancestor_index: usize) -> Self {
		Self {
			scope_type,
			ancestor_index,
		}
	}
}

impl ModifierStage for ContainingScopeStage {
	fn run(&self, ctx: &ModifierContext, target: &Target) -> Result<Vec<Target>> {
		let handler = ctx.handler_for(&self.scope_type, target)?;
		containing_scope_target(&*handler, target, self.ancestor_index)?
			.ok_or_else(|| TargetError::no_containing_scope(&self.scope_type))
	}
}

/// Every scope of a type within the target.
pub struct EveryScopeStage {
	scope_type: ScopeType,
}

impl EveryScopeStage {
	pub fn new(scope_type: ScopeType) -> Self {
		Self { scope_type }
	}

	fn scopes(&self, ctx: &ModifierContext, handler: &dyn ScopeHandler, target: &Target) -> Result<Vec<TargetScope>> {
		let editor = target.editor();
		let range = target.content_range();

		if target.has_explicit_range() {
			let scopes = scopes_overlapping_range(handler, editor, range)?;
			let only_contains_range = matches!(scopes.as_slice(), [scope] if scope.domain.contains_range(&range));
			if !only_contains_range {
				return Ok(scopes);
			}
		}

		let mut scopes = Vec::new();
		for iteration_range in iteration_ranges(ctx, handler, target)? {
			scopes.extend(scopes_overlapping_range(handler, editor, iteration_range)?);
		}
		Ok(scopes)
	}
}

/// Content ranges of the iteration scope containing `target`, or none when
/// there is no such scope.
fn iteration_ranges(ctx: &ModifierContext, handler: &dyn ScopeHandler, target: &Target) -> Result<Vec<Range>> {
	let iteration = match ctx
		.scope_handlers()
		.iteration_handler(handler, target.document().language_id())
	{
		Ok(iteration) => iteration,
		Err(err @ TargetError::NoContainingScope { .. }) => {
			debug!(error = %err, "no iteration scope");
			return Ok(Vec::new());
		}
		Err(err) => return Err(err),
	};
	Ok(containing_scope_target(&*iteration, target, 0)?
		.unwrap_or_default()
		.iter()
		.map(Target::content_range)
		.collect())
}

impl ModifierStage for EveryScopeStage {
	fn run(&self, ctx: &ModifierContext, target: &Target) -> Result<Vec<Target>> {
		let handler = ctx.handler_for(&self.scope_type, target)?;
		let scopes = self.scopes(ctx, &*handler, target)?;
		trace!(scope_type = %self.scope_type, scopes = scopes.len(), "every scope");
		if scopes.is_empty() {
			return Err(TargetError::no_containing_scope(&self.scope_type));
		}
		let mut targets = Vec::with_capacity(scopes.len());
		for scope in &scopes {
			targets.extend(scope.get_targets(target.is_reversed())?);
		}
		Ok(targets)
	}
}

/// `length` targets from index `start` among every scope of a type, as one
/// range or as separate targets.
pub struct OrdinalScopeStage<'a> {
	pub scope_type: &'a ScopeType,
	pub start: isize,
	pub length: usize,
	pub is_every: bool,
}

impl ModifierStage for OrdinalScopeStage<'_> {
	fn run(&self, ctx: &ModifierContext, target: &Target) -> Result<Vec<Target>> {
		if self.length == 0 {
			return Err(TargetError::InvalidModifier("ordinal scope length must be positive".into()));
		}
		let targets = EveryScopeStage::new(self.scope_type.clone()).run(ctx, target)?;
		let out_of_range = || TargetError::ScopeIndexOutOfRange {
			scope_type: self.scope_type.to_string(),
			index: self.start,
		};
		let start = if self.start < 0 {
			targets.len().checked_sub(self.start.unsigned_abs()).ok_or_else(out_of_range)?
		} else {
			self.start.unsigned_abs()
		};
		let end = start.checked_add(self.length - 1).ok_or_else(out_of_range)?;
		if end >= targets.len() {
			return Err(out_of_range());
		}
		if self.is_every {
			return Ok(targets[start..=end].to_vec());
		}
		if start == end {
			return Ok(vec![targets[start].clone()]);
		}
		Ok(vec![targets[start].create_continuous_range_target(
			target.is_reversed(),
			&targets[end],
			true,
			true,
		)])
	}
}

/// Scopes before or after the target.
///
/// With `offset` 0 the count starts at the scope touching the target;
/// otherwise it starts `offset` scopes past the target, skipping scopes the
/// target's own containing scope keeps apart.
pub struct RelativeScopeStage<'a> {
	pub scope_type: &'a ScopeType,
	pub offset: usize,
	pub length: usize,
	pub direction: Direction,
	pub is_every: bool,
}

impl RelativeScopeStage<'_> {
	fn inclusive(&self, handler: &dyn ScopeHandler, target: &Target) -> Result<Vec<TargetScope>> {
		let editor = target.editor();
		let content = target.content_range();
		let forward = self.direction == Direction::Forward;
		let position = if forward { content.start } else { content.end };
		let initial = preferred_scope_touching_position(handler, editor, position, Some(self.direction))?
			.ok_or_else(|| TargetError::no_containing_scope(self.scope_type))?;
		let start = if forward { initial.domain.start } else { initial.domain.end };
		Ok(handler
			.generate_scopes(
				editor,
				start,
				self.direction,
				&ScopeIteratorRequirements::default().with_skip_ancestor_scopes(true),
			)?
			.take(self.length)
			.collect())
	}

	fn exclusive(&self, handler: &dyn ScopeHandler, target: &Target) -> Result<Vec<TargetScope>> {
		let editor = target.editor();
		let content = target.content_range();
		let position = match self.direction {
			Direction::Forward => content.end,
			Direction::Backward => content.start,
		};
		let containment = if content.is_empty() {
			ContainmentPolicy::Disallowed
		} else {
			ContainmentPolicy::DisallowedIfStrict
		};
		let excluded = excluded_interiors(handler, target, position, self.direction)?;
		trace!(excluded = excluded.len(), "relative scope exclusions");
		Ok(handler
			.generate_scopes(
				editor,
				position,
				self.direction,
				&ScopeIteratorRequirements::default()
					.with_containment(Some(containment))
					.with_skip_ancestor_scopes(true),
			)?
			.filter(|scope| !excluded.iter().any(|range| range.contains_range(&scope.domain)))
			.skip(self.offset - 1)
			.take(self.length)
			.collect())
	}
}

/// Interiors of the scope containing `position` that the search must not
/// descend into.
///
/// From the head of a scope the next scope lies past its body; from inside
/// the body it lies within it. Interiors containing `position` are therefore
/// kept searchable.
fn excluded_interiors(
	handler: &dyn ScopeHandler,
	target: &Target,
	position: Position,
	direction: Direction,
) -> Result<Vec<Range>> {
	let requirements = ScopeIteratorRequirements::containing()
		.with_adjacent_scopes(true)
		.with_skip_ancestor_scopes(true);
	let Some(containing) = handler
		.generate_scopes(target.editor(), position, direction, &requirements)?
		.next()
	else {
		return Ok(Vec::new());
	};
	let Some(containing) = containing.get_targets(false)?.into_iter().next() else {
		return Ok(Vec::new());
	};
	let Ok(interiors) = containing.interior_strict() else {
		return Ok(Vec::new());
	};
	Ok(interiors
		.iter()
		.map(|interior| match interior {
			Target::Interior(interior) => interior.full_interior_range,
			other => other.content_range(),
		})
		.filter(|range| !range.contains(position))
		.collect())
}

impl ModifierStage for RelativeScopeStage<'_> {
	fn run(&self, ctx: &ModifierContext, target: &Target) -> Result<Vec<Target>> {
		if self.length == 0 {
			return Err(TargetError::InvalidModifier("relative scope length must be positive".into()));
		}
		let handler = ctx.handler_for(self.scope_type, target)?;
		let scopes = if self.offset == 0 {
			self.inclusive(&*handler, target)?
		} else {
			self.exclusive(&*handler, target)?
		};
		let (Some(first), Some(last)) = (scopes.first(), scopes.last()) else {
			return Err(self.out_of_range());
		};
		if scopes.len() < self.length {
			return Err(self.out_of_range());
		}
		if !self.is_every {
			return scope_range_target(target.is_reversed(), first, last);
		}
		let mut targets = Vec::with_capacity(scopes.len());
		for scope in &scopes {
			targets.extend(scope.get_targets(target.is_reversed())?);
		}
		Ok(targets)
	}
}

impl RelativeScopeStage<'_> {
	fn out_of_range(&self) -> TargetError {
		let last = self.offset.saturating_add(self.length - 1);
		TargetError::ScopeIndexOutOfRange {
			scope_type: self.scope_type.to_string(),
			index: isize::try_from(last).unwrap_or(isize::MAX),
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use quarry_primitives::{SimpleScopeType, SurroundingPairName, TextDocument, TextEditor};

	use super::*;
	use crate::modifier::Modifier;
	use crate::pipeline::apply_modifier;

	fn target(text: &str, range: Range) -> Target {
		let editor = TextEditor::new(TextDocument::new(text, "plaintext")).into_ref();
		Target::untyped(editor, range, false, !range.is_empty())
	}

	fn cursor(text: &str, line: usize, character: usize) -> Target {
		target(text, Range::from_coords(line, character, line, character))
	}

	fn texts(targets: Vec<Target>) -> Vec<String> {
		targets.iter().map(Target::content_text).collect()
	}

	fn run(stage: &dyn ModifierStage, target: &Target) -> Result<Vec<Target>> {
		stage.run(&ModifierContext::default(), target)
	}

	#[test]
	fn containing_token() {
		let stage = ContainingScopeStage::new(SimpleScopeType::Token.into(), 0);
		assert_eq!(texts(run(&stage, &cursor("let value = 1;", 0, 6)).unwrap()), vec!["value"]);
	}

	#[test]
	fn containing_pair_ancestors() {
		let pair = ScopeType::SurroundingPair {
			delimiter: SurroundingPairName::Any,
			require_strong_containment: false,
		};
		let target = cursor("f([a])", 0, 3);
		let inner = ContainingScopeStage::new(pair.clone(), 0);
		let outer = ContainingScopeStage::new(pair.clone(), 1);
		assert_eq!(texts(run(&inner, &target).unwrap()), vec!["[a]"]);
		assert_eq!(texts(run(&outer, &target).unwrap()), vec!["([a])"]);
		let err = run(&ContainingScopeStage::new(pair, 2), &target).unwrap_err();
		assert_eq!(err, TargetError::no_containing_scope("surroundingPair"));
	}

	#[test]
	fn every_token_in_line() {
		let stage = EveryScopeStage::new(SimpleScopeType::Token.into());
		assert_eq!(
			texts(run(&stage, &cursor("a bb ccc\nd", 0, 1)).unwrap()),
			vec!["a", "bb", "ccc"]
		);
	}

	#[test]
	fn every_token_in_explicit_range() {
		let stage = EveryScopeStage::new(SimpleScopeType::Token.into());
		let target = target("a bb ccc dd", Range::from_coords(0, 2, 0, 8));
		assert_eq!(texts(run(&stage, &target).unwrap()), vec!["bb", "ccc"]);
	}

	#[test]
	fn every_token_inside_a_single_token_range_widens() {
		let stage = EveryScopeStage::new(SimpleScopeType::Token.into());
		let target = target("alpha beta", Range::from_coords(0, 1, 0, 3));
		assert_eq!(texts(run(&stage, &target).unwrap()), vec!["alpha", "beta"]);
	}

	#[test]
	fn every_scope_with_nothing_found() {
		let stage = EveryScopeStage::new(SimpleScopeType::Token.into());
		let err = run(&stage, &cursor("   ", 0, 1)).unwrap_err();
		assert_eq!(err, TargetError::no_containing_scope("token"));
	}

	#[test]
	fn ordinal_scopes() {
		let scope_type = SimpleScopeType::Token.into();
		let target = cursor("a bb ccc dd", 0, 0);
		let last = OrdinalScopeStage {
			scope_type: &scope_type,
			start: -1,
			length: 1,
			is_every: false,
		};
		assert_eq!(texts(run(&last, &target).unwrap()), vec!["dd"]);
		let middle = OrdinalScopeStage {
			scope_type: &scope_type,
			start: 1,
			length: 2,
			is_every: false,
		};
		assert_eq!(texts(run(&middle, &target).unwrap()), vec!["bb ccc"]);
		let too_far = OrdinalScopeStage {
			scope_type: &scope_type,
			start: 3,
			length: 2,
			is_every: true,
		};
		assert!(matches!(
			run(&too_far, &target),
			Err(TargetError::ScopeIndexOutOfRange { index: 3, .. })
		));
	}

	#[test]
	fn ordinal_length_past_usize_bounds() {
		let modifier: Modifier = serde_json::from_value(serde_json::json!({
			"type": "ordinalScope",
			"scopeType": {"type": "token"},
			"start": 1,
			"length": usize::MAX,
		}))
		.unwrap();
		let err = apply_modifier(&cursor("a bb", 0, 0), &modifier, &ModifierContext::default()).unwrap_err();
		assert!(matches!(err, TargetError::ScopeIndexOutOfRange { index: 1, .. }));

		let scope_type = SimpleScopeType::Token.into();
		let relative = RelativeScopeStage {
			scope_type: &scope_type,
			offset: usize::MAX,
			length: usize::MAX,
			direction: Direction::Forward,
			is_every: true,
		};
		assert!(matches!(
			run(&relative, &cursor("a bb", 0, 0)),
			Err(TargetError::ScopeIndexOutOfRange { .. })
		));
	}

	#[test]
	fn next_and_previous_tokens() {
		let scope_type = SimpleScopeType::Token.into();
		let target = cursor("a bb ccc dd", 0, 3);
		let next = RelativeScopeStage {
			scope_type: &scope_type,
			offset: 1,
			length: 1,
			direction: Direction::Forward,
			is_every: false,
		};
		assert_eq!(texts(run(&next, &target).unwrap()), vec!["ccc"]);
		let previous_two = RelativeScopeStage {
			scope_type: &scope_type,
			offset: 1,
			length: 2,
			direction: Direction::Backward,
			is_every: true,
		};
		let target = cursor("a bb ccc dd", 0, 6);
		assert_eq!(texts(run(&previous_two, &target).unwrap()), vec!["bb", "a"]);
	}

	#[test]
	fn tokens_from_here() {
		let scope_type = SimpleScopeType::Token.into();
		let two = RelativeScopeStage {
			scope_type: &scope_type,
			offset: 0,
			length: 2,
			direction: Direction::Forward,
			is_every: false,
		};
		assert_eq!(texts(run(&two, &cursor("a bb ccc dd", 0, 3)).unwrap()), vec!["bb ccc"]);
	}

	#[test]
	fn relative_scope_past_the_end() {
		let scope_type = SimpleScopeType::Token.into();
		let next = RelativeScopeStage {
			scope_type: &scope_type,
			offset: 1,
			length: 1,
			direction: Direction::Forward,
			is_every: false,
		};
		assert!(matches!(
			run(&next, &cursor("a bb", 0, 3)),
			Err(TargetError::ScopeIndexOutOfRange { .. })
		));
	}
}
