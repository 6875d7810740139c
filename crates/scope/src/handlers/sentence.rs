//! Sentences within paragraphs, by Unicode sentence boundaries.

use quarry_primitives::graphemes::sentence_spans;
use quarry_primitives::{EditorRef, Range, ScopeType, SimpleScopeType};
use quarry_target::removal::shrink_range_to_fit_content;
use quarry_target::{ScopeTypeTarget, Target, TargetCommon};

use super::nested::ScopeSplitter;
use crate::scope::TargetScope;

/// Splits paragraphs into whitespace-trimmed sentences.
pub struct SentenceSplitter {
	insertion_delimiter: String,
}

impl SentenceSplitter {
	pub fn new(insertion_delimiter: impl Into<String>) -> Self {
		Self {
			insertion_delimiter: insertion_delimiter.into(),
		}
	}
}

impl ScopeSplitter for SentenceSplitter {
	fn split(&self, editor: &EditorRef, domain: Range) -> Vec<TargetScope> {
		let document = &editor.document;
		let base = document.offset_at(domain.start);
		sentence_spans(&document.get_text(domain))
			.into_iter()
			.filter_map(|(start, end)| {
				let raw = Range::new(document.position_at(base + start), document.position_at(base + end));
				let trimmed = shrink_range_to_fit_content(document, raw);
				(!document.get_text(trimmed).trim().is_empty()).then_some(trimmed)
			})
			.map(|range| {
				let target_editor = editor.clone();
				let delimiter = self.insertion_delimiter.clone();
				TargetScope::single(editor.clone(), range, move |is_reversed| {
					Target::ScopeType(
						ScopeTypeTarget::new(
							TargetCommon::new(target_editor.clone(), range, is_reversed),
							ScopeType::from(SimpleScopeType::Sentence),
						)
						.with_insertion_delimiter(delimiter.clone()),
					)
				})
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use quarry_primitives::{TextDocument, TextEditor};

	use super::*;

	#[test]
	fn sentences_are_trimmed() {
		let editor = TextEditor::new(TextDocument::new("  Hello there.  How are you?", "plaintext")).into_ref();
		let texts: Vec<_> = SentenceSplitter::new(" ")
			.split(&editor, editor.document.range())
			.iter()
			.map(|scope| editor.document.get_text(scope.domain))
			.collect();
		assert_eq!(texts, vec!["Hello there.", "How are you?"]);
	}

	#[test]
	fn sentence_targets_carry_scope_type() {
		let editor = TextEditor::new(TextDocument::new("One. Two.", "plaintext")).into_ref();
		let scopes = SentenceSplitter::new(" ").split(&editor, editor.document.range());
		let target = &scopes[1].get_targets(false).unwrap()[0];
		assert!(target.has_explicit_scope_type());
		assert_eq!(target.content_text(), "Two.");
	}
}
