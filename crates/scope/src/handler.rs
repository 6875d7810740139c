//! The scope handler trait and the search loop shared by every handler.

use std::sync::Arc;

use quarry_primitives::{Direction, EditorRef, Position, ScopeType};
use quarry_target::Result;
use tracing::trace;

use crate::compare::compare_target_scopes;
use crate::requirements::{ContainmentPolicy, ScopeIteratorRequirements};
use crate::scope::TargetScope;

/// Lazily produced sequence of scopes.
pub type ScopeIter<'a> = Box<dyn Iterator<Item = TargetScope> + 'a>;

/// Where an every-scope search looks when its target has no explicit range.
#[derive(Clone)]
pub enum IterationScope {
	/// Resolved through the scope handler factory.
	Scope(ScopeType),
	/// A ready-made handler, for iteration scopes with no scope type of their own.
	Handler(Arc<dyn ScopeHandler>),
}

/// Enumerates the scopes of one scope type around a position.
///
/// Implementors only produce raw candidates in the right order; the provided
/// [`ScopeHandler::generate_scopes`] applies the caller's
/// [`ScopeIteratorRequirements`] on top.
pub trait ScopeHandler: Send + Sync {
	/// The scope type this handler finds, if it has one.
	fn scope_type(&self) -> Option<&ScopeType>;

	/// The scope that bounds an every-scope search with no explicit range.
	fn iteration_scope(&self) -> Result<IterationScope>;

	/// Whether scopes of this type may contain each other.
	fn is_hierarchical(&self) -> bool;

	/// Whether an every-scope search over a range picks up scopes that only
	/// touch it.
	fn include_adjacent_in_every(&self) -> bool {
		false
	}

	/// Tie-break between two scopes touching an empty target, `a` lying
	/// before `b`. `None` means no preference.
	fn is_preferred_over(&self, _a: &TargetScope, _b: &TargetScope) -> Option<bool> {
		None
	}

	/// Raw candidates, in the order a search from `position` towards
	/// `direction` visits them.
	///
	/// Non-hierarchical handlers yield every scope ending at or after the
	/// position (forward) or starting at or before it (backward). Hierarchical
	/// handlers walk from the position and yield each scope as its domain
	/// starts or ends, inner scopes before their ancestors. Yielding too much
	/// is harmless; yielding out of order is not.
	fn generate_scope_candidates<'a>(
		&'a self,
		editor: &EditorRef,
		position: Position,
		direction: Direction,
		requirements: &ScopeIteratorRequirements,
	) -> Result<ScopeIter<'a>>;

	/// Scopes meeting `requirements`, in search order.
	fn generate_scopes<'a>(
		&'a self,
		editor: &EditorRef,
		position: Position,
		direction: Direction,
		requirements: &ScopeIteratorRequirements,
	) -> Result<ScopeIter<'a>> {
		let document_range = editor.document.range();
		let distal_position = requirements.distal_position.unwrap_or(match direction {
			Direction::Forward => document_range.end,
			Direction::Backward => document_range.start,
		});
		let requirements = ScopeIteratorRequirements {
			distal_position: Some(distal_position),
			..requirements.clone()
		};
		trace!(
			scope_type = %self.scope_type().map_or_else(|| "<composite>".to_string(), ToString::to_string),
			?position,
			?direction,
			"generating scopes"
		);
		let candidates = self.generate_scope_candidates(editor, position, direction, &requirements)?;
		Ok(Box::new(ScopeWalk {
			candidates,
			position,
			current_position: position,
			direction,
			distal_position,
			requirements,
			hierarchical: self.is_hierarchical(),
			previous: None,
			ancestor_index: 0,
			done: false,
		}))
	}
}

/// Display name of a handler's scope type for error messages.
pub fn scope_type_name(handler: &dyn ScopeHandler) -> String {
	handler
		.scope_type()
		.map_or_else(|| "scope".to_string(), ToString::to_string)
}

/// Filters candidates against requirements, tracking ancestor depth.
struct ScopeWalk<'a> {
	candidates: ScopeIter<'a>,
	position: Position,
	current_position: Position,
	direction: Direction,
	distal_position: Position,
	requirements: ScopeIteratorRequirements,
	hierarchical: bool,
	previous: Option<TargetScope>,
	ancestor_index: usize,
	done: bool,
}

impl Iterator for ScopeWalk<'_> {
	type Item = TargetScope;

	fn next(&mut self) -> Option<TargetScope> {
		while !self.done {
			let scope = self.candidates.next()?;
			let mut yielded = None;

			if self.should_yield(&scope) {
				let contains_previous = self
					.previous
					.as_ref()
					.is_some_and(|previous| scope.domain.contains_range(&previous.domain));
				self.ancestor_index = if contains_previous { self.ancestor_index + 1 } else { 0 };

				if self.ancestor_index <= self.requirements.max_ancestor_index {
					self.current_position = match (self.direction, self.requirements.include_descendant_scopes) {
						(Direction::Forward, false) | (Direction::Backward, true) => scope.domain.end,
						(Direction::Backward, false) | (Direction::Forward, true) => scope.domain.start,
					};
					self.previous = Some(scope.clone());
					yielded = Some(scope.clone());
				}
			}

			self.done = self.can_stop_early(&scope);
			if yielded.is_some() {
				return yielded;
			}
		}
		None
	}
}

impl ScopeWalk<'_> {
	fn should_yield(&self, scope: &TargetScope) -> bool {
		self.meets_requirements(scope)
			&& self.previous.as_ref().is_none_or(|previous| {
				compare_target_scopes(self.direction, self.current_position, previous, scope).is_lt()
			})
	}

	fn meets_requirements(&self, scope: &TargetScope) -> bool {
		let domain = scope.domain;
		let position = self.position;
		let forward = self.direction == Direction::Forward;

		let behind = if forward { domain.end < position } else { domain.start > position };
		if behind {
			return false;
		}

		match self.requirements.containment {
			Some(ContainmentPolicy::Required) if !domain.contains(position) => return false,
			Some(ContainmentPolicy::Disallowed) if domain.contains(position) => return false,
			Some(ContainmentPolicy::DisallowedIfStrict) if domain.start < position && position < domain.end => {
				return false;
			}
			_ => {}
		}

		if !self.requirements.allow_adjacent_scopes && !domain.is_empty() {
			let adjacent = if forward { domain.end == position } else { domain.start == position };
			if adjacent {
				return false;
			}
		}

		let past_distal = if forward {
			domain.start > self.distal_position
		} else {
			domain.end < self.distal_position
		};
		if past_distal {
			return false;
		}

		if self.requirements.skip_ancestor_scopes
			&& let Some(previous) = &self.previous
			&& domain.contains_range(&previous.domain)
		{
			return false;
		}

		true
	}

	fn can_stop_early(&self, scope: &TargetScope) -> bool {
		let required = self.requirements.containment == Some(ContainmentPolicy::Required);
		if self.hierarchical {
			return required && self.ancestor_index > self.requirements.max_ancestor_index;
		}

		let domain = scope.domain;
		let forward = self.direction == Direction::Forward;
		if required && (if forward { domain.end > self.position } else { domain.start < self.position }) {
			return true;
		}

		if forward {
			domain.end >= self.distal_position
		} else {
			domain.start <= self.distal_position
		}
	}
}
