//! Comma-separated items, found textually.
//!
//! Items are split on commas inside the smallest enclosing collection
//! boundary (`()`, `[]`, `{}`, `<>`) or, outside any boundary, inside the
//! line. Commas within string interiors are ignored.

use std::sync::Arc;

use quarry_primitives::{Direction, EditorRef, Position, Range, ScopeType, SimpleScopeType, TextDocument};
use quarry_target::removal::{collection_item_removal_range, longest_delimiter_text, range_len, shrink_range_to_fit_content};
use quarry_target::{Result, ScopeTypeTarget, Target, TargetCommon};
use tracing::trace;

use super::composite::{ConditionalScopeHandler, FallbackScopeHandler};
use super::lines::LineScopeHandler;
use super::regex::byte_spans_to_ranges;
use crate::compare::compare_target_scopes;
use crate::handler::{IterationScope, ScopeHandler, ScopeIter};
use crate::requirements::ScopeIteratorRequirements;
use crate::scope::TargetScope;

const SEPARATOR: char = ',';

/// Collection items without help from a parser.
pub struct CollectionItemTextualScopeHandler {
	scope_type: ScopeType,
	boundaries: Arc<dyn ScopeHandler>,
	strings: Arc<dyn ScopeHandler>,
	default_delimiter: String,
}

impl CollectionItemTextualScopeHandler {
	/// `boundaries` and `strings` yield the interiors of collection boundary
	/// pairs and of string pairs.
	pub fn new(
		boundaries: Arc<dyn ScopeHandler>,
		strings: Arc<dyn ScopeHandler>,
		default_delimiter: impl Into<String>,
	) -> Self {
		Self {
			scope_type: SimpleScopeType::CollectionItem.into(),
			boundaries,
			strings,
			default_delimiter: default_delimiter.into(),
		}
	}

	fn item_scopes(&self, editor: &EditorRef, iteration_range: Range, separators: &[Range], is_every: bool) -> Vec<TargetScope> {
		let document = &editor.document;
		let mut items = Vec::with_capacity(separators.len() + 1);
		let mut previous_end = iteration_range.start;
		for separator in separators {
			items.push(Range::new(previous_end, separator.start));
			previous_end = separator.end;
		}
		items.push(Range::new(previous_end, iteration_range.end));
		let items: Vec<Range> = items
			.into_iter()
			.map(|range| shrink_range_to_fit_content(document, range))
			.collect();

		let last = items.len() - 1;
		items
			.iter()
			.enumerate()
			.filter(|&(index, item)| index != last || !document.get_text(*item).trim().is_empty())
			.map(|(index, item)| {
				let previous = index.checked_sub(1).map(|previous| items[previous]);
				let next = items.get(index + 1).copied();
				self.item_scope(editor, *item, previous, next, is_every)
			})
			.collect()
	}

	fn item_scope(
		&self,
		editor: &EditorRef,
		content: Range,
		previous: Option<Range>,
		next: Option<Range>,
		is_every: bool,
	) -> TargetScope {
		let document = &editor.document;
		let leading = previous.map(|previous| Range::new(previous.end, content.start));
		let trailing = next.map(|next| Range::new(content.end, next.start));
		let removal_range = collection_item_removal_range(document, content, leading, trailing, is_every);
		let insertion_delimiter = longest_delimiter_text(document, leading, trailing, &self.default_delimiter);
		let target_editor = editor.clone();
		TargetScope::single(editor.clone(), content, move |is_reversed| {
			Target::ScopeType(
				ScopeTypeTarget::new(
					TargetCommon::new(target_editor.clone(), content, is_reversed),
					SimpleScopeType::CollectionItem.into(),
				)
				.with_insertion_delimiter(insertion_delimiter.clone())
				.with_delimiter_ranges(leading, trailing)
				.with_removal_range(removal_range),
			)
		})
	}
}

fn separator_ranges(document: &TextDocument) -> Vec<Range> {
	let range = document.range();
	let text = document.get_text(range);
	let spans = text
		.match_indices(SEPARATOR)
		.map(|(start, separator)| (start, start + separator.len()));
	byte_spans_to_ranges(document, range, &text, spans)
}

/// Domains of every scope `handler` finds in the document.
fn all_domains(handler: &dyn ScopeHandler, editor: &EditorRef) -> Result<Vec<Range>> {
	Ok(handler
		.generate_scopes(
			editor,
			Position::default(),
			Direction::Forward,
			&ScopeIteratorRequirements::default().with_descendant_scopes(true),
		)?
		.map(|scope| scope.domain)
		.collect())
}

/// Separators sharing one iteration range.
struct IterationState {
	iteration_range: Range,
	separators: Vec<Range>,
}

impl ScopeHandler for CollectionItemTextualScopeHandler {
	fn scope_type(&self) -> Option<&ScopeType> {
		Some(&self.scope_type)
	}

	fn iteration_scope(&self) -> Result<IterationScope> {
		let lines = ConditionalScopeHandler::new(Arc::new(LineScopeHandler::new()), |scope| {
			scope.editor.document.get_text(scope.domain).contains(SEPARATOR)
		});
		Ok(IterationScope::Handler(Arc::new(FallbackScopeHandler::new(vec![
			Arc::clone(&self.boundaries),
			Arc::new(lines),
		]))))
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
		let document = &editor.document;
		let is_every = requirements.is_every_scope();
		let interiors = all_domains(&*self.boundaries, editor)?;
		let strings = all_domains(&*self.strings, editor)?;

		let mut used_interiors = vec![false; interiors.len()];
		let mut states: Vec<IterationState> = Vec::new();
		let mut scopes = Vec::new();

		for separator in separator_ranges(document) {
			if strings.iter().any(|string| string.contains_range(&separator)) {
				continue;
			}
			let containing = interiors
				.iter()
				.enumerate()
				.filter(|(_, interior)| interior.contains_range(&separator))
				.min_by_key(|(_, interior)| range_len(document, **interior));
			let iteration_range = containing.map_or_else(
				|| document.line_at(separator.start.line).range,
				|(_, interior)| *interior,
			);

			while let Some(state) = states.pop_if(|state| {
				state.iteration_range != iteration_range && !state.iteration_range.contains_range(&separator)
			}) {
				scopes.extend(self.item_scopes(editor, state.iteration_range, &state.separators, is_every));
			}

			if let Some(state) = states.last_mut()
				&& state.iteration_range == iteration_range
			{
				state.separators.push(separator);
				continue;
			}

			if let Some((index, _)) = containing {
				used_interiors[index] = true;
			}
			states.push(IterationState {
				iteration_range,
				separators: vec![separator],
			});
		}

		for state in states {
			scopes.extend(self.item_scopes(editor, state.iteration_range, &state.separators, is_every));
		}

		for (interior, used) in interiors.into_iter().zip(used_interiors) {
			if used {
				continue;
			}
			let content = shrink_range_to_fit_content(document, interior);
			if !document.get_text(content).trim().is_empty() {
				scopes.push(self.item_scope(editor, content, None, None, is_every));
			}
		}

		trace!(items = scopes.len(), "collected textual collection items");
		scopes.sort_by(|a, b| compare_target_scopes(direction, position, a, b));
		Ok(Box::new(scopes.into_iter()))
	}
}
