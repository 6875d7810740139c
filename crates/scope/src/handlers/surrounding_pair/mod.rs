//! Delimiter pairs and their interiors.

pub mod delimiters;
pub mod finder;

use std::sync::Arc;

use quarry_primitives::{Direction, EditorRef, Position, Range, ScopeType, SurroundingPairName};
use quarry_target::{Result, SurroundingPairTarget, Target, TargetCommon, TargetError};
use tracing::{debug, trace};

pub use self::delimiters::{DelimiterSide, IndividualDelimiter, individual_delimiters};
pub use self::finder::{DelimiterFinder, PairOccurrence};
use super::composite::ConditionalScopeHandler;
use super::lines::LineScopeHandler;
use crate::compare::compare_target_scopes;
use crate::handler::{IterationScope, ScopeHandler, ScopeIter};
use crate::matcher::ScopeMatcher;
use crate::requirements::{ContainmentPolicy, ScopeIteratorRequirements};
use crate::scope::TargetScope;

/// Pairs of delimiters such as brackets and quotes.
///
/// A registered language matcher is asked first; otherwise pairs are found
/// by scanning up to `max_scan_length` chars on either side of the search
/// position.
pub struct SurroundingPairScopeHandler {
	scope_type: ScopeType,
	require_strong_containment: bool,
	finder: DelimiterFinder,
	max_scan_length: usize,
	matcher: Option<Arc<dyn ScopeMatcher>>,
}

impl SurroundingPairScopeHandler {
	pub fn new(
		delimiter: SurroundingPairName,
		require_strong_containment: bool,
		language_id: &str,
		max_scan_length: usize,
		matcher: Option<Arc<dyn ScopeMatcher>>,
	) -> Result<Self> {
		Ok(Self {
			scope_type: ScopeType::SurroundingPair {
				delimiter,
				require_strong_containment,
			},
			require_strong_containment,
			finder: DelimiterFinder::new(individual_delimiters(delimiter, language_id))?,
			max_scan_length,
			matcher,
		})
	}

	fn scan_window(&self, editor: &EditorRef, position: Position) -> Range {
		let document = &editor.document;
		let offset = document.offset_at(position);
		let end_offset = document.offset_at(document.range().end);
		let start = document.position_at(offset.saturating_sub(self.max_scan_length));
		let end = document.position_at(offset.saturating_add(self.max_scan_length).min(end_offset));
		Range::new(start.with_character(0), end)
	}

	fn pairs(&self, editor: &EditorRef, position: Position) -> Result<Vec<PairOccurrence>> {
		if let Some(matcher) = &self.matcher {
			match matcher.match_scopes(&editor.document, &self.scope_type) {
				Ok(matched) => {
					let mut pairs: Vec<PairOccurrence> = matched
						.into_iter()
						.filter_map(|matched| {
							let interior = matched.interior_range?;
							let full = matched.content_range;
							Some(PairOccurrence {
								name: self.delimiter_name(),
								opening: Range::new(full.start, interior.start),
								closing: Range::new(interior.end, full.end),
							})
						})
						.collect();
					pairs.sort_by(|a, b| a.closing.compare(&b.closing));
					return Ok(pairs);
				}
				Err(TargetError::UnsupportedLanguage { language_id, .. }) => {
					debug!(%language_id, scope_type = %self.scope_type, "falling back to text-based pair search");
				}
				Err(err) => return Err(err),
			}
		}
		Ok(self.finder.find_pairs(&editor.document, self.scan_window(editor, position)))
	}

	fn delimiter_name(&self) -> SurroundingPairName {
		match &self.scope_type {
			ScopeType::SurroundingPair { delimiter, .. } => *delimiter,
			_ => SurroundingPairName::Any,
		}
	}

	fn pair_scope(&self, editor: &EditorRef, pair: PairOccurrence) -> TargetScope {
		let domain = if self.require_strong_containment {
			pair.interior_range()
		} else {
			pair.full_range()
		};
		let target_editor = editor.clone();
		TargetScope::single(editor.clone(), domain, move |is_reversed| {
			Target::SurroundingPair(SurroundingPairTarget::new(
				TargetCommon::new(target_editor.clone(), pair.full_range(), is_reversed),
				pair.interior_range(),
				[pair.opening, pair.closing],
			))
		})
	}
}

/// With the cursor between two closing delimiters, as in `(a(b)|)`, a
/// containing search should not pick the inner pair just because it
/// touches the cursor.
fn drop_pairs_closing_at(position: Position, pairs: Vec<PairOccurrence>) -> Vec<PairOccurrence> {
	let keep: Vec<bool> = pairs
		.iter()
		.enumerate()
		.map(|(index, pair)| {
			!(pair.closing.end == position && pairs.get(index + 1).is_some_and(|next| next.closing.start == position))
		})
		.collect();
	pairs
		.into_iter()
		.zip(keep)
		.filter_map(|(pair, keep)| keep.then_some(pair))
		.collect()
}

impl ScopeHandler for SurroundingPairScopeHandler {
	fn scope_type(&self) -> Option<&ScopeType> {
		Some(&self.scope_type)
	}

	fn iteration_scope(&self) -> Result<IterationScope> {
		let lines = ConditionalScopeHandler::new(Arc::new(LineScopeHandler::new()), |scope| !scope.domain.is_empty());
		Ok(IterationScope::Handler(Arc::new(lines)))
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
		let mut pairs = self.pairs(editor, position)?;
		if direction == Direction::Forward
			&& requirements.containment == Some(ContainmentPolicy::Required)
			&& requirements.allow_adjacent_scopes
			&& requirements.skip_ancestor_scopes
		{
			pairs = drop_pairs_closing_at(position, pairs);
		}
		trace!(pairs = pairs.len(), scope_type = %self.scope_type, "matched surrounding pairs");

		let mut scopes: Vec<TargetScope> = pairs.into_iter().map(|pair| self.pair_scope(editor, pair)).collect();
		scopes.sort_by(|a, b| compare_target_scopes(direction, position, a, b));
		Ok(Box::new(scopes.into_iter()))
	}
}

/// The interiors of surrounding pairs.
pub struct SurroundingPairInteriorScopeHandler {
	scope_type: ScopeType,
	require_single_line: bool,
	pairs: Arc<dyn ScopeHandler>,
}

impl SurroundingPairInteriorScopeHandler {
	/// `pairs` must find pairs with strong containment, so that domains are
	/// interiors.
	pub fn new(delimiter: SurroundingPairName, require_single_line: bool, pairs: Arc<dyn ScopeHandler>) -> Self {
		Self {
			scope_type: ScopeType::SurroundingPairInterior {
				delimiter,
				require_single_line,
			},
			require_single_line,
			pairs,
		}
	}
}

impl ScopeHandler for SurroundingPairInteriorScopeHandler {
	fn scope_type(&self) -> Option<&ScopeType> {
		Some(&self.scope_type)
	}

	fn iteration_scope(&self) -> Result<IterationScope> {
		self.pairs.iteration_scope()
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
		let require_single_line = self.require_single_line;
		let scopes = self
			.pairs
			.generate_scopes(editor, position, direction, requirements)?
			.filter(move |scope| !require_single_line || scope.domain.is_single_line())
			.map(|scope| {
				scope.map_targets(|targets| {
					let mut interiors = Vec::with_capacity(targets.len());
					for target in targets {
						interiors.extend(target.interior_strict()?);
					}
					Ok(interiors)
				})
			});
		Ok(Box::new(scopes))
	}
}

#[cfg(test)]
mod tests;
