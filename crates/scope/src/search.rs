//! Searches built on top of scope handlers: the scope containing a target,
//! the scope touching a position and the scopes overlapping a range.

use quarry_primitives::{Direction, EditorRef, Position, Range};
use quarry_target::{Result, Target, TargetError};

use crate::handler::ScopeHandler;
use crate::requirements::ScopeIteratorRequirements;
use crate::scope::TargetScope;

fn touching_requirements() -> ScopeIteratorRequirements {
	ScopeIteratorRequirements::containing()
		.with_adjacent_scopes(true)
		.with_skip_ancestor_scopes(true)
}

/// The scope touching `position`, searching only towards `force_direction`
/// if given.
///
/// With scopes on both sides, a scope nested in the other wins, then the
/// handler's preference, then the scope after the position.
pub fn preferred_scope_touching_position(
	handler: &dyn ScopeHandler,
	editor: &EditorRef,
	position: Position,
	force_direction: Option<Direction>,
) -> Result<Option<TargetScope>> {
	let requirements = touching_requirements();
	let forward = match force_direction {
		Some(Direction::Backward) => None,
		_ => handler
			.generate_scopes(editor, position, Direction::Forward, &requirements)?
			.next(),
	};
	if force_direction == Some(Direction::Forward) {
		return Ok(forward);
	}
	let backward = handler
		.generate_scopes(editor, position, Direction::Backward, &requirements)?
		.next();
	if force_direction == Some(Direction::Backward) {
		return Ok(backward);
	}

	let (forward, backward) = match (forward, backward) {
		(forward, None) => return Ok(forward),
		(None, backward) => return Ok(backward),
		(Some(forward), Some(backward)) => (forward, backward),
	};
	if forward.domain == backward.domain || forward.domain.contains_range(&backward.domain) {
		return Ok(Some(backward));
	}
	if backward.domain.contains_range(&forward.domain) {
		return Ok(Some(forward));
	}
	Ok(Some(match handler.is_preferred_over(&backward, &forward) {
		Some(true) => backward,
		_ => forward,
	}))
}

/// The `ancestor_index`-th scope containing `position`, innermost first.
fn expand_from_position(
	handler: &dyn ScopeHandler,
	editor: &EditorRef,
	position: Position,
	direction: Direction,
	ancestor_index: usize,
	allow_adjacent_scopes: bool,
) -> Result<Option<TargetScope>> {
	let requirements = ScopeIteratorRequirements::containing().with_adjacent_scopes(allow_adjacent_scopes);
	Ok(handler
		.generate_scopes(editor, position, direction, &requirements)?
		.nth(ancestor_index))
}

/// A single target running from `start` to `end`.
///
/// Fails with [`TargetError::InvalidScope`] when either scope has several
/// targets.
pub fn scope_range_target(is_reversed: bool, start: &TargetScope, end: &TargetScope) -> Result<Vec<Target>> {
	if start.domain == end.domain {
		return start.get_targets(is_reversed);
	}
	let (first, second) = match (start.get_targets(is_reversed)?.as_slice(), end.get_targets(is_reversed)?.as_slice()) {
		([first], [second]) => (first.clone(), second.clone()),
		_ => return Err(TargetError::InvalidScope("scope range targets must be single-target".into())),
	};
	let (first, second) = if second.content_range().start >= first.content_range().start {
		(first, second)
	} else {
		(second, first)
	};
	Ok(vec![first.create_continuous_range_target(is_reversed, &second, true, true)])
}

/// Targets of the scope containing `target`, or of its `ancestor_index`-th
/// ancestor.
///
/// An empty target takes the preferred scope touching it. A non-empty target
/// not contained in a single scope gets a range from the scope at its start
/// to the scope at its end. `None` when no such scope exists.
pub fn containing_scope_target(
	handler: &dyn ScopeHandler,
	target: &Target,
	ancestor_index: usize,
) -> Result<Option<Vec<Target>>> {
	let editor = target.editor();
	let is_reversed = target.is_reversed();
	let Range { start, end } = target.content_range();

	if start == end {
		let Some(mut scope) = preferred_scope_touching_position(handler, editor, start, None)? else {
			return Ok(None);
		};
		if ancestor_index > 0 {
			let Some(ancestor) =
				expand_from_position(handler, editor, scope.domain.end, Direction::Forward, ancestor_index, true)?
			else {
				return Ok(None);
			};
			scope = ancestor;
		}
		return scope.get_targets(is_reversed).map(Some);
	}

	let Some(start_scope) = expand_from_position(handler, editor, start, Direction::Forward, ancestor_index, false)?
	else {
		return Ok(None);
	};
	if start_scope.domain.contains(end) {
		return start_scope.get_targets(is_reversed).map(Some);
	}
	let Some(end_scope) = expand_from_position(handler, editor, end, Direction::Backward, ancestor_index, false)? else {
		return Ok(None);
	};
	scope_range_target(is_reversed, &start_scope, &end_scope).map(Some)
}

/// Every top-level scope meeting `range`, in document order.
pub fn scopes_overlapping_range(handler: &dyn ScopeHandler, editor: &EditorRef, range: Range) -> Result<Vec<TargetScope>> {
	let include_adjacent = handler.include_adjacent_in_every();
	let requirements = ScopeIteratorRequirements::default()
		.with_distal_position(range.end)
		.with_skip_ancestor_scopes(true)
		.with_adjacent_scopes(include_adjacent);
	Ok(handler
		.generate_scopes(editor, range.start, Direction::Forward, &requirements)?
		.filter(|scope| {
			include_adjacent || range.is_empty() || scope.domain.is_empty() || scope.domain.start != range.end
		})
		.collect())
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use pretty_assertions::assert_eq;
	use quarry_primitives::{ScopeType, SimpleScopeType, SurroundingPairName, TextDocument, TextEditor};

	use super::*;
	use crate::factory::ScopeHandlerFactory;

	fn editor(text: &str) -> EditorRef {
		TextEditor::new(TextDocument::new(text, "plaintext")).into_ref()
	}

	fn handler(scope_type: SimpleScopeType) -> Arc<dyn ScopeHandler> {
		ScopeHandlerFactory::default().create(&scope_type.into(), "plaintext").unwrap()
	}

	fn texts(targets: Option<Vec<Target>>) -> Vec<String> {
		targets.unwrap_or_default().iter().map(Target::content_text).collect()
	}

	#[test]
	fn touching_prefers_word_tokens() {
		let editor = editor("foo.bar");
		let tokens = handler(SimpleScopeType::Token);
		let scope = preferred_scope_touching_position(&*tokens, &editor, Position::new(0, 3), None)
			.unwrap()
			.unwrap();
		assert_eq!(editor.document.get_text(scope.domain), "foo");
		let scope = preferred_scope_touching_position(&*tokens, &editor, Position::new(0, 4), None)
			.unwrap()
			.unwrap();
		assert_eq!(editor.document.get_text(scope.domain), "bar");
	}

	#[test]
	fn forced_direction() {
		let editor = editor("foo.bar");
		let tokens = handler(SimpleScopeType::Token);
		let text = |direction| {
			let scope = preferred_scope_touching_position(&*tokens, &editor, Position::new(0, 4), Some(direction))
				.unwrap()
				.unwrap();
			editor.document.get_text(scope.domain)
		};
		assert_eq!(text(Direction::Forward), ".");
		assert_eq!(text(Direction::Backward), "bar");
	}

	#[test]
	fn containing_line_of_empty_target() {
		let editor = editor("one\ntwo");
		let target = Target::untyped(editor.clone(), Range::from_coords(1, 1, 1, 1), false, false);
		let lines = handler(SimpleScopeType::Line);
		assert_eq!(texts(containing_scope_target(&*lines, &target, 0).unwrap()), vec!["two"]);
	}

	#[test]
	fn containing_range_across_scopes() {
		let editor = editor("alpha beta gamma");
		let target = Target::untyped(editor.clone(), Range::from_coords(0, 2, 0, 8), false, true);
		let tokens = handler(SimpleScopeType::Token);
		assert_eq!(
			texts(containing_scope_target(&*tokens, &target, 0).unwrap()),
			vec!["alpha beta"]
		);
	}

	#[test]
	fn ancestor_index_climbs_pairs() {
		let editor = editor("[(a)]");
		let target = Target::untyped(editor.clone(), Range::from_coords(0, 2, 0, 2), false, false);
		let pairs = ScopeHandlerFactory::default()
			.create(
				&ScopeType::SurroundingPair {
					delimiter: SurroundingPairName::Any,
					require_strong_containment: false,
				},
				"plaintext",
			)
			.unwrap();
		assert_eq!(texts(containing_scope_target(&*pairs, &target, 0).unwrap()), vec!["(a)"]);
		assert_eq!(texts(containing_scope_target(&*pairs, &target, 1).unwrap()), vec!["[(a)]"]);
		assert!(containing_scope_target(&*pairs, &target, 2).unwrap().is_none());
	}

	#[test]
	fn overlapping_tokens() {
		let editor = editor("a bb ccc dddd");
		let tokens = handler(SimpleScopeType::Token);
		let found: Vec<String> = scopes_overlapping_range(&*tokens, &editor, Range::from_coords(0, 3, 0, 9))
			.unwrap()
			.iter()
			.map(|scope| editor.document.get_text(scope.domain))
			.collect();
		assert_eq!(found, vec!["bb", "ccc"]);
	}
}
