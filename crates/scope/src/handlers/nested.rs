//! Scopes found by splitting the text of a coarser scope.

use std::sync::Arc;

use quarry_primitives::{Direction, EditorRef, Position, Range, ScopeType};
use quarry_target::Result;

use crate::compare::compare_target_scopes;
use crate::handler::{IterationScope, ScopeHandler, ScopeIter};
use crate::requirements::{ContainmentPolicy, ScopeIteratorRequirements};
use crate::scope::TargetScope;

/// Splits the domain of a search scope into finer scopes.
pub trait ScopeSplitter: Send + Sync {
	/// Scopes inside `domain`, in any order.
	fn split(&self, editor: &EditorRef, domain: Range) -> Vec<TargetScope>;

	fn is_preferred_over(&self, _a: &TargetScope, _b: &TargetScope) -> Option<bool> {
		None
	}
}

/// Runs a search handler and splits each scope it yields.
///
/// Scopes never contain one another, so the handler is not hierarchical.
pub struct NestedScopeHandler {
	scope_type: ScopeType,
	iteration_scope_type: ScopeType,
	search: Arc<dyn ScopeHandler>,
	splitter: Box<dyn ScopeSplitter>,
}

impl NestedScopeHandler {
	pub fn new(
		scope_type: ScopeType,
		iteration_scope_type: ScopeType,
		search: Arc<dyn ScopeHandler>,
		splitter: impl ScopeSplitter + 'static,
	) -> Self {
		Self {
			scope_type,
			iteration_scope_type,
			search,
			splitter: Box::new(splitter),
		}
	}
}

impl ScopeHandler for NestedScopeHandler {
	fn scope_type(&self) -> Option<&ScopeType> {
		Some(&self.scope_type)
	}

	fn iteration_scope(&self) -> Result<IterationScope> {
		Ok(IterationScope::Scope(self.iteration_scope_type.clone()))
	}

	fn is_hierarchical(&self) -> bool {
		false
	}

	fn is_preferred_over(&self, a: &TargetScope, b: &TargetScope) -> Option<bool> {
		self.splitter.is_preferred_over(a, b)
	}

	fn generate_scope_candidates<'a>(
		&'a self,
		editor: &EditorRef,
		position: Position,
		direction: Direction,
		requirements: &ScopeIteratorRequirements,
	) -> Result<ScopeIter<'a>> {
		let containment = requirements
			.containment
			.filter(|containment| *containment == ContainmentPolicy::Required);
		let search_requirements = requirements.clone().with_containment(containment);
		let search_scopes = self
			.search
			.generate_scopes(editor, position, direction, &search_requirements)?;

		let editor = editor.clone();
		let splitter = &self.splitter;
		let scopes = search_scopes.flat_map(move |search_scope| {
			let mut scopes = splitter.split(&editor, search_scope.domain);
			scopes.sort_by(|a, b| compare_target_scopes(direction, position, a, b));
			scopes
		});
		Ok(Box::new(scopes))
	}
}
