//! Handlers built out of other handlers.

use std::iter::Peekable;
use std::sync::Arc;

use quarry_primitives::{Direction, EditorRef, Position, ScopeType};
use quarry_target::{Result, TargetError};

use crate::compare::compare_target_scopes;
use crate::handler::{IterationScope, ScopeHandler, ScopeIter};
use crate::requirements::ScopeIteratorRequirements;
use crate::scope::TargetScope;

/// Uses the first child handler that finds anything.
pub struct FallbackScopeHandler {
	handlers: Vec<Arc<dyn ScopeHandler>>,
	iteration: Option<IterationScope>,
}

impl FallbackScopeHandler {
	pub fn new(handlers: Vec<Arc<dyn ScopeHandler>>) -> Self {
		Self {
			handlers,
			iteration: None,
		}
	}

	/// Gives every-scope searches a bound; without one they fail.
	pub fn with_iteration_scope(mut self, iteration: IterationScope) -> Self {
		self.iteration = Some(iteration);
		self
	}
}

impl ScopeHandler for FallbackScopeHandler {
	fn scope_type(&self) -> Option<&ScopeType> {
		None
	}

	fn iteration_scope(&self) -> Result<IterationScope> {
		self.iteration
			.clone()
			.ok_or_else(|| TargetError::no_containing_scope("iteration scope for fallback scopes"))
	}

	fn is_hierarchical(&self) -> bool {
		true
	}

	fn generate_scope_candidates<'a>(
		&'a self,
		editor: &EditorRef,
		position: Position,
		direction: Direction,
		requirements: &ScopeIteratorRequirements,
	) -> Result<ScopeIter<'a>> {
		for handler in &self.handlers {
			let mut scopes = handler.generate_scopes(editor, position, direction, requirements)?.peekable();
			if scopes.peek().is_some() {
				return Ok(Box::new(scopes));
			}
		}
		Ok(Box::new(std::iter::empty()))
	}
}

type ScopePredicate = dyn Fn(&TargetScope) -> bool + Send + Sync;

/// Keeps only the scopes of a child handler accepted by a predicate.
pub struct ConditionalScopeHandler {
	handler: Arc<dyn ScopeHandler>,
	predicate: Arc<ScopePredicate>,
}

impl ConditionalScopeHandler {
	pub fn new(handler: Arc<dyn ScopeHandler>, predicate: impl Fn(&TargetScope) -> bool + Send + Sync + 'static) -> Self {
		Self {
			handler,
			predicate: Arc::new(predicate),
		}
	}
}

impl ScopeHandler for ConditionalScopeHandler {
	fn scope_type(&self) -> Option<&ScopeType> {
		self.handler.scope_type()
	}

	fn iteration_scope(&self) -> Result<IterationScope> {
		self.handler.iteration_scope()
	}

	fn is_hierarchical(&self) -> bool {
		self.handler.is_hierarchical()
	}

	fn generate_scope_candidates<'a>(
		&'a self,
		editor: &EditorRef,
		position: Position,
		direction: Direction,
		requirements: &ScopeIteratorRequirements,
	) -> Result<ScopeIter<'a>> {
		let predicate = Arc::clone(&self.predicate);
		let scopes = self.handler.generate_scopes(editor, position, direction, requirements)?;
		Ok(Box::new(scopes.filter(move |scope| predicate(scope))))
	}
}

/// Interleaves several handlers into one stream in canonical scope order.
pub struct SortedScopeHandler {
	handlers: Vec<Arc<dyn ScopeHandler>>,
	iteration: Option<Arc<SortedScopeHandler>>,
}

impl SortedScopeHandler {
	/// `iteration_handlers` bound every-scope searches; pass an empty list when
	/// the merged handler has no iteration scope.
	pub fn new(handlers: Vec<Arc<dyn ScopeHandler>>, iteration_handlers: Vec<Arc<dyn ScopeHandler>>) -> Self {
		let iteration = (!iteration_handlers.is_empty()).then(|| {
			Arc::new(Self {
				handlers: iteration_handlers,
				iteration: None,
			})
		});
		Self { handlers, iteration }
	}
}

impl ScopeHandler for SortedScopeHandler {
	fn scope_type(&self) -> Option<&ScopeType> {
		None
	}

	fn iteration_scope(&self) -> Result<IterationScope> {
		self.iteration
			.clone()
			.map(|handler| IterationScope::Handler(handler))
			.ok_or_else(|| TargetError::no_containing_scope("iteration scope for merged scopes"))
	}

	fn is_hierarchical(&self) -> bool {
		true
	}

	fn generate_scope_candidates<'a>(
		&'a self,
		editor: &EditorRef,
		position: Position,
		direction: Direction,
		requirements: &ScopeIteratorRequirements,
	) -> Result<ScopeIter<'a>> {
		let sources = self
			.handlers
			.iter()
			.map(|handler| Ok(handler.generate_scopes(editor, position, direction, requirements)?.peekable()))
			.collect::<Result<Vec<_>>>()?;
		Ok(Box::new(MergedScopes {
			sources,
			direction,
			position,
		}))
	}
}

struct MergedScopes<'a> {
	sources: Vec<Peekable<ScopeIter<'a>>>,
	direction: Direction,
	position: Position,
}

impl Iterator for MergedScopes<'_> {
	type Item = TargetScope;

	fn next(&mut self) -> Option<TargetScope> {
		let (direction, position) = (self.direction, self.position);
		let mut best: Option<(usize, TargetScope)> = None;
		for (index, source) in self.sources.iter_mut().enumerate() {
			let Some(candidate) = source.peek() else {
				continue;
			};
			let better = best
				.as_ref()
				.is_none_or(|(_, current)| compare_target_scopes(direction, position, candidate, current).is_lt());
			if better {
				best = Some((index, candidate.clone()));
			}
		}

		let (index, scope) = best?;
		self.sources[index].next();
		for source in &mut self.sources {
			while source
				.next_if(|next| !compare_target_scopes(direction, position, &scope, next).is_lt())
				.is_some()
			{}
		}
		Some(scope)
	}
}
