//! Line, paragraph and document scopes.

use quarry_primitives::{Direction, EditorRef, Position, Range, ScopeType, SimpleScopeType, TextDocument};
use quarry_target::{DocumentTarget, ParagraphTarget, Result, Target, TargetCommon};

use crate::handler::{IterationScope, ScopeHandler, ScopeIter};
use crate::requirements::ScopeIteratorRequirements;
use crate::scope::TargetScope;

/// Narrows `range` to run from the first non-whitespace char of its first
/// line to the last non-whitespace char of its last line.
pub fn fit_range_to_line_content(document: &TextDocument, range: Range) -> Range {
	let start_line = document.line_at(range.start.line);
	let end_line = document.line_at(range.end.line);
	let end_character = end_line
		.last_non_whitespace_character_index
		.max(if start_line.line_number == end_line.line_number {
			start_line.first_non_whitespace_character_index
		} else {
			0
		});
	Range::new(
		start_line
			.range
			.start
			.with_character(start_line.first_non_whitespace_character_index),
		end_line.range.start.with_character(end_character),
	)
}

/// Each line of the document, domain excluding the line break.
pub struct LineScopeHandler {
	scope_type: ScopeType,
}

impl LineScopeHandler {
	pub fn new() -> Self {
		Self {
			scope_type: SimpleScopeType::Line.into(),
		}
	}
}

impl Default for LineScopeHandler {
	fn default() -> Self {
		Self::new()
	}
}

pub(crate) fn line_scope(editor: &EditorRef, line: usize) -> TargetScope {
	let range = editor.document.line_at(line).range;
	let editor_for_target = editor.clone();
	TargetScope::single(editor.clone(), range, move |is_reversed| {
		Target::line(editor_for_target.clone(), range, is_reversed)
	})
}

impl ScopeHandler for LineScopeHandler {
	fn scope_type(&self) -> Option<&ScopeType> {
		Some(&self.scope_type)
	}

	fn iteration_scope(&self) -> Result<IterationScope> {
		Ok(IterationScope::Scope(SimpleScopeType::Paragraph.into()))
	}

	fn is_hierarchical(&self) -> bool {
		false
	}

	fn include_adjacent_in_every(&self) -> bool {
		true
	}

	fn generate_scope_candidates<'a>(
		&'a self,
		editor: &EditorRef,
		position: Position,
		direction: Direction,
		_requirements: &ScopeIteratorRequirements,
	) -> Result<ScopeIter<'a>> {
		let editor = editor.clone();
		let last = editor.document.line_count().saturating_sub(1);
		let current = position.line.min(last);
		let lines: Box<dyn Iterator<Item = usize>> = match direction {
			Direction::Forward => Box::new(current..=last),
			Direction::Backward => Box::new((0..=current).rev()),
		};
		Ok(Box::new(lines.map(move |line| line_scope(&editor, line))))
	}
}

/// Runs of non-blank lines.
pub struct ParagraphScopeHandler {
	scope_type: ScopeType,
}

impl ParagraphScopeHandler {
	pub fn new() -> Self {
		Self {
			scope_type: SimpleScopeType::Paragraph.into(),
		}
	}
}

impl Default for ParagraphScopeHandler {
	fn default() -> Self {
		Self::new()
	}
}

/// Domains of every paragraph, in document order. A domain runs from the
/// start of its first line to the end of its last line.
pub(crate) fn paragraph_domains(document: &TextDocument) -> Vec<Range> {
	let mut domains = Vec::new();
	let mut start: Option<Position> = None;
	let mut end = Position::default();
	for line_number in 0..document.line_count() {
		let line = document.line_at(line_number);
		if line.is_empty_or_whitespace {
			if let Some(start) = start.take() {
				domains.push(Range::new(start, end));
			}
			continue;
		}
		start.get_or_insert(line.range.start);
		end = line.range.end;
	}
	if let Some(start) = start {
		domains.push(Range::new(start, end));
	}
	domains
}

pub(crate) fn paragraph_scope(editor: &EditorRef, domain: Range) -> TargetScope {
	let content = fit_range_to_line_content(&editor.document, domain);
	let editor_for_target = editor.clone();
	TargetScope::single(editor.clone(), domain, move |is_reversed| {
		Target::Paragraph(ParagraphTarget::new(TargetCommon::new(
			editor_for_target.clone(),
			content,
			is_reversed,
		)))
	})
}

impl ScopeHandler for ParagraphScopeHandler {
	fn scope_type(&self) -> Option<&ScopeType> {
		Some(&self.scope_type)
	}

	fn iteration_scope(&self) -> Result<IterationScope> {
		Ok(IterationScope::Scope(SimpleScopeType::Document.into()))
	}

	fn is_hierarchical(&self) -> bool {
		false
	}

	fn generate_scope_candidates<'a>(
		&'a self,
		editor: &EditorRef,
		position: Position,
		direction: Direction,
		_requirements: &ScopeIteratorRequirements,
	) -> Result<ScopeIter<'a>> {
		let mut domains = paragraph_domains(&editor.document);
		match direction {
			Direction::Forward => domains.retain(|domain| domain.end >= position),
			Direction::Backward => {
				domains.retain(|domain| domain.start <= position);
				domains.reverse();
			}
		}
		let editor = editor.clone();
		Ok(Box::new(domains.into_iter().map(move |domain| paragraph_scope(&editor, domain))))
	}
}

/// The whole document as a single scope.
pub struct DocumentScopeHandler {
	scope_type: ScopeType,
}

impl DocumentScopeHandler {
	pub fn new() -> Self {
		Self {
			scope_type: SimpleScopeType::Document.into(),
		}
	}
}

impl Default for DocumentScopeHandler {
	fn default() -> Self {
		Self::new()
	}
}

impl ScopeHandler for DocumentScopeHandler {
	fn scope_type(&self) -> Option<&ScopeType> {
		Some(&self.scope_type)
	}

	fn iteration_scope(&self) -> Result<IterationScope> {
		Ok(IterationScope::Scope(self.scope_type.clone()))
	}

	fn is_hierarchical(&self) -> bool {
		false
	}

	fn generate_scope_candidates<'a>(
		&'a self,
		editor: &EditorRef,
		_position: Position,
		_direction: Direction,
		_requirements: &ScopeIteratorRequirements,
	) -> Result<ScopeIter<'a>> {
		let domain = editor.document.range();
		let editor_for_target = editor.clone();
		let scope = TargetScope::single(editor.clone(), domain, move |is_reversed| {
			Target::Document(DocumentTarget::new(TargetCommon::new(
				editor_for_target.clone(),
				domain,
				is_reversed,
			)))
		});
		Ok(Box::new(std::iter::once(scope)))
	}
}
