use pretty_assertions::assert_eq;
use quarry_primitives::{TextDocument, TextEditor};

use super::*;
use crate::matcher::MatchedScope;

fn editor(text: &str) -> EditorRef {
	TextEditor::new(TextDocument::new(text, "plaintext")).into_ref()
}

fn pairs(name: SurroundingPairName, strong: bool) -> SurroundingPairScopeHandler {
	SurroundingPairScopeHandler::new(name, strong, "plaintext", 10_000, None).unwrap()
}

fn containing_texts(handler: &dyn ScopeHandler, editor: &EditorRef, character: usize) -> Vec<String> {
	handler
		.generate_scopes(
			editor,
			Position::new(0, character),
			Direction::Forward,
			&ScopeIteratorRequirements::containing(),
		)
		.unwrap()
		.flat_map(|scope| scope.get_targets(false).unwrap())
		.map(|target| target.content_text())
		.collect()
}

#[test]
fn innermost_pair_first() {
	let editor = editor("f(a, [b])");
	let handler = pairs(SurroundingPairName::Any, false);
	assert_eq!(containing_texts(&handler, &editor, 2), vec!["(a, [b])"]);
	assert_eq!(containing_texts(&handler, &editor, 6), vec!["[b]", "(a, [b])"]);
}

#[test]
fn max_ancestor_index_limits_depth() {
	let editor = editor("((x))");
	let handler = pairs(SurroundingPairName::Parentheses, false);
	let found: Vec<_> = handler
		.generate_scopes(
			&editor,
			Position::new(0, 2),
			Direction::Forward,
			&ScopeIteratorRequirements::containing().with_max_ancestor_index(0),
		)
		.unwrap()
		.map(|scope| scope.domain)
		.collect();
	assert_eq!(found, vec![Range::from_coords(0, 1, 0, 4)]);
}

#[test]
fn interior_targets_strip_delimiters() {
	let editor = editor("x = (abc)");
	let strong: Arc<dyn ScopeHandler> = Arc::new(pairs(SurroundingPairName::Parentheses, true));
	let interiors = SurroundingPairInteriorScopeHandler::new(SurroundingPairName::Parentheses, false, strong);
	assert_eq!(containing_texts(&interiors, &editor, 6), vec!["abc"]);
}

#[test]
fn single_line_interiors_skip_multiline_pairs() {
	let editor = editor("(a\nb)");
	let strong: Arc<dyn ScopeHandler> = Arc::new(pairs(SurroundingPairName::Parentheses, true));
	let interiors = SurroundingPairInteriorScopeHandler::new(SurroundingPairName::Parentheses, true, strong);
	assert!(containing_texts(&interiors, &editor, 1).is_empty());
}

#[test]
fn cursor_between_closers_picks_outer_pair() {
	let editor = editor("(a(b))");
	let handler = pairs(SurroundingPairName::Parentheses, false);
	let requirements = ScopeIteratorRequirements::containing()
		.with_adjacent_scopes(true)
		.with_skip_ancestor_scopes(true);
	let first = handler
		.generate_scopes(&editor, Position::new(0, 5), Direction::Forward, &requirements)
		.unwrap()
		.next()
		.unwrap();
	assert_eq!(first.domain, Range::from_coords(0, 0, 0, 6));
}

#[test]
fn pair_target_boundaries() {
	let editor = editor("[ab]");
	let handler = pairs(SurroundingPairName::SquareBrackets, false);
	let scope = handler
		.generate_scopes(
			&editor,
			Position::new(0, 1),
			Direction::Forward,
			&ScopeIteratorRequirements::containing(),
		)
		.unwrap()
		.next()
		.unwrap();
	let target = scope.get_targets(false).unwrap().remove(0);
	let boundary: Vec<_> = target
		.boundary_strict()
		.unwrap()
		.iter()
		.map(|target| target.content_text())
		.collect();
	assert_eq!(boundary, vec!["[", "]"]);
}

struct KeywordPairs;

impl ScopeMatcher for KeywordPairs {
	fn supports(&self, scope_type: &ScopeType) -> bool {
		matches!(scope_type, ScopeType::SurroundingPair { .. })
	}

	fn match_scopes(&self, _document: &TextDocument, _scope_type: &ScopeType) -> Result<Vec<MatchedScope>> {
		let full = Range::from_coords(0, 0, 0, 11);
		Ok(vec![
			MatchedScope::new(full, full).with_interior_range(Range::from_coords(0, 5, 0, 8)),
		])
	}
}

struct NoPairs;

impl ScopeMatcher for NoPairs {
	fn supports(&self, _scope_type: &ScopeType) -> bool {
		true
	}

	fn match_scopes(&self, document: &TextDocument, scope_type: &ScopeType) -> Result<Vec<MatchedScope>> {
		Err(TargetError::UnsupportedLanguage {
			language_id: document.language_id().to_string(),
			scope_type: scope_type.to_string(),
		})
	}
}

#[test]
fn matcher_pairs_take_precedence() {
	let editor = editor("begin x end");
	let handler =
		SurroundingPairScopeHandler::new(SurroundingPairName::Any, false, "plaintext", 10_000, Some(Arc::new(KeywordPairs)))
			.unwrap();
	let scope = handler
		.generate_scopes(
			&editor,
			Position::new(0, 6),
			Direction::Forward,
			&ScopeIteratorRequirements::containing(),
		)
		.unwrap()
		.next()
		.unwrap();
	let target = scope.get_targets(false).unwrap().remove(0);
	assert_eq!(target.content_text(), "begin x end");
	assert_eq!(target.interior_strict().unwrap()[0].content_text(), "x");
}

#[test]
fn unsupported_matcher_falls_back_to_text() {
	let editor = editor("(x)");
	let handler =
		SurroundingPairScopeHandler::new(SurroundingPairName::Any, false, "plaintext", 10_000, Some(Arc::new(NoPairs)))
			.unwrap();
	assert_eq!(containing_texts(&handler, &editor, 1), vec!["(x)"]);
}
