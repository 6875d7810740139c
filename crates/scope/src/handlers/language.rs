//! Syntactic scopes reported by a registered [`ScopeMatcher`].

use std::sync::Arc;

use quarry_primitives::{Direction, EditorRef, Position, ScopeType, SimpleScopeType};
use quarry_target::{Result, ScopeTypeTarget, Target, TargetCommon};
use tracing::trace;

use crate::compare::compare_target_scopes;
use crate::handler::{IterationScope, ScopeHandler, ScopeIter};
use crate::matcher::{MatchedScope, ScopeMatcher};
use crate::requirements::ScopeIteratorRequirements;
use crate::scope::TargetScope;

/// Scopes of one type, as found by a language's matcher.
pub struct LanguageScopeHandler {
	scope_type: ScopeType,
	matcher: Arc<dyn ScopeMatcher>,
	insertion_delimiter: String,
}

impl LanguageScopeHandler {
	/// `insertion_delimiter` applies to matches that do not carry their own.
	pub fn new(scope_type: ScopeType, matcher: Arc<dyn ScopeMatcher>, insertion_delimiter: impl Into<String>) -> Self {
		Self {
			scope_type,
			matcher,
			insertion_delimiter: insertion_delimiter.into(),
		}
	}

	fn matched_scope(&self, editor: &EditorRef, matched: MatchedScope) -> TargetScope {
		let scope_type = self.scope_type.clone();
		let insertion_delimiter = matched
			.insertion_delimiter
			.clone()
			.unwrap_or_else(|| self.insertion_delimiter.clone());
		let target_editor = editor.clone();
		TargetScope::single(editor.clone(), matched.domain, move |is_reversed| {
			Target::ScopeType(
				ScopeTypeTarget::new(
					TargetCommon::new(target_editor.clone(), matched.content_range, is_reversed),
					scope_type.clone(),
				)
				.with_insertion_delimiter(insertion_delimiter.clone())
				.with_prefix_range(matched.prefix_range)
				.with_removal_range(matched.removal_range)
				.with_interior_range(matched.interior_range)
				.with_delimiter_ranges(matched.leading_delimiter_range, matched.trailing_delimiter_range),
			)
		})
	}
}

impl ScopeHandler for LanguageScopeHandler {
	fn scope_type(&self) -> Option<&ScopeType> {
		Some(&self.scope_type)
	}

	fn iteration_scope(&self) -> Result<IterationScope> {
		Ok(IterationScope::Scope(
			self.matcher
				.iteration_scope_type(&self.scope_type)
				.unwrap_or_else(|| SimpleScopeType::Document.into()),
		))
	}

	fn is_hierarchical(&self) -> bool {
		true
	}

	fn generate_scope_candidates<'a>(
		&'a self,
		editor: &EditorRef,
		position: Position,
		direction: Direction,
		_requirements: &ScopeIteratorRequirements,
	) -> Result<ScopeIter<'a>> {
		let matched = self.matcher.match_scopes(&editor.document, &self.scope_type)?;
		trace!(scope_type = %self.scope_type, matches = matched.len(), "language matcher results");
		let mut scopes: Vec<TargetScope> = matched
			.into_iter()
			.map(|matched| self.matched_scope(editor, matched))
			.collect();
		scopes.sort_by(|a, b| compare_target_scopes(direction, position, a, b));
		Ok(Box::new(scopes.into_iter()))
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use quarry_primitives::{Range, TextDocument, TextEditor};

	use super::*;

	/// Every line starting with `fn` is a function; its body is the rest.
	struct FnLines;

	impl ScopeMatcher for FnLines {
		fn supports(&self, scope_type: &ScopeType) -> bool {
			scope_type.is(SimpleScopeType::NamedFunction)
		}

		fn match_scopes(&self, document: &TextDocument, _scope_type: &ScopeType) -> Result<Vec<MatchedScope>> {
			Ok((0..document.line_count())
				.map(|line| document.line_at(line))
				.filter(|line| line.text.starts_with("fn"))
				.map(|line| {
					let interior = Range::new(line.range.start.with_character(3), line.range.end);
					MatchedScope::new(line.range, line.range).with_interior_range(interior)
				})
				.collect())
		}
	}

	fn handler() -> LanguageScopeHandler {
		LanguageScopeHandler::new(SimpleScopeType::NamedFunction.into(), Arc::new(FnLines), "\n\n")
	}

	#[test]
	fn containing_match() {
		let editor = TextEditor::new(TextDocument::new("fn a\nx\nfn b", "test")).into_ref();
		let scope = handler()
			.generate_scopes(
				&editor,
				Position::new(2, 3),
				Direction::Forward,
				&ScopeIteratorRequirements::containing(),
			)
			.unwrap()
			.next()
			.unwrap();
		let target = scope.get_targets(false).unwrap().remove(0);
		assert_eq!(target.content_text(), "fn b");
		assert_eq!(target.insertion_delimiter(), "\n\n");
		assert_eq!(target.interior_strict().unwrap()[0].content_text(), "b");
	}

	#[test]
	fn no_match_outside_scopes() {
		let editor = TextEditor::new(TextDocument::new("fn a\nx\nfn b", "test")).into_ref();
		let found = handler()
			.generate_scopes(
				&editor,
				Position::new(1, 0),
				Direction::Forward,
				&ScopeIteratorRequirements::containing(),
			)
			.unwrap()
			.count();
		assert_eq!(found, 0);
	}

	#[test]
	fn iteration_defaults_to_document() {
		let Ok(IterationScope::Scope(scope_type)) = handler().iteration_scope() else {
			panic!("expected a scope type");
		};
		assert_eq!(scope_type, ScopeType::from(SimpleScopeType::Document));
	}
}
