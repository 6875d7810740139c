//! Paragraphs clipped to the surrounding pair interior they sit in.

use std::sync::Arc;

use quarry_primitives::{Direction, EditorRef, Position, ScopeType, SimpleScopeType};
use quarry_target::{BoundedParagraphTarget, Result, Target, TargetError};

use super::composite::SortedScopeHandler;
use crate::compare::compare_target_scopes;
use crate::handler::{IterationScope, ScopeHandler, ScopeIter};
use crate::requirements::{ContainmentPolicy, ScopeIteratorRequirements};
use crate::scope::TargetScope;

/// Yields each paragraph together with its intersections with pair
/// interiors, so a paragraph inside `{ ... }` can be selected without
/// spilling past the braces.
pub struct BoundedParagraphScopeHandler {
	scope_type: ScopeType,
	paragraphs: Arc<dyn ScopeHandler>,
	interiors: Arc<dyn ScopeHandler>,
	iteration: Arc<SortedScopeHandler>,
}

impl BoundedParagraphScopeHandler {
	/// `paragraphs` finds plain paragraphs, `interiors` any pair interior and
	/// `documents` the whole document.
	pub fn new(
		paragraphs: Arc<dyn ScopeHandler>,
		interiors: Arc<dyn ScopeHandler>,
		documents: Arc<dyn ScopeHandler>,
	) -> Self {
		let iteration = Arc::new(SortedScopeHandler::new(vec![documents, Arc::clone(&interiors)], Vec::new()));
		Self {
			scope_type: SimpleScopeType::BoundedParagraph.into(),
			paragraphs,
			interiors,
			iteration,
		}
	}
}

fn single_target(scope: &TargetScope, is_reversed: bool) -> Result<Target> {
	let mut targets = scope.get_targets(is_reversed)?;
	match (targets.pop(), targets.is_empty()) {
		(Some(target), true) => Ok(target),
		_ => Err(TargetError::InvalidScope("expected exactly one target".into())),
	}
}

fn bounded_scope(paragraph: &TargetScope, interior: &TargetScope) -> Option<TargetScope> {
	let domain = paragraph.domain.intersection(&interior.domain)?;
	if domain.is_empty() {
		return None;
	}
	let (paragraph, interior) = (paragraph.clone(), interior.clone());
	Some(TargetScope::new(paragraph.editor.clone(), domain, move |is_reversed| {
		let Target::Paragraph(paragraph) = single_target(&paragraph, is_reversed)? else {
			return Err(TargetError::InvalidScope("expected a paragraph target".into()));
		};
		let Target::Interior(interior) = single_target(&interior, is_reversed)? else {
			return Err(TargetError::InvalidScope("expected an interior target".into()));
		};
		Ok(vec![Target::BoundedParagraph(BoundedParagraphTarget::new(
			is_reversed,
			paragraph,
			interior,
		)?)])
	}))
}

impl ScopeHandler for BoundedParagraphScopeHandler {
	fn scope_type(&self) -> Option<&ScopeType> {
		Some(&self.scope_type)
	}

	fn iteration_scope(&self) -> Result<IterationScope> {
		Ok(IterationScope::Handler(self.iteration.clone()))
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
		let paragraph_containment = requirements
			.containment
			.filter(|containment| *containment != ContainmentPolicy::Disallowed);
		let interior_containment = if requirements.containment.is_none() && requirements.skip_ancestor_scopes {
			Some(ContainmentPolicy::Required)
		} else {
			requirements.containment
		};

		let interiors: Vec<TargetScope> = self
			.interiors
			.generate_scopes(
				editor,
				position,
				direction,
				&requirements.clone().with_containment(interior_containment),
			)?
			.collect();
		let paragraphs = self.paragraphs.generate_scopes(
			editor,
			position,
			direction,
			&requirements.clone().with_containment(paragraph_containment),
		)?;

		Ok(Box::new(paragraphs.flat_map(move |paragraph| {
			let mut scopes: Vec<TargetScope> = interiors
				.iter()
				.filter_map(|interior| bounded_scope(&paragraph, interior))
				.collect();
			scopes.push(paragraph);
			scopes.sort_by(|a, b| compare_target_scopes(direction, position, a, b));
			scopes
		})))
	}
}
