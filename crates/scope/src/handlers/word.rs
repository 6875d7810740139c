//! Sub-token scopes: the words of an identifier and the characters of a token.

use std::sync::LazyLock;

use fancy_regex::Regex;
use quarry_primitives::graphemes::grapheme_spans;
use quarry_primitives::{EditorRef, Range};
use quarry_target::{PlainTarget, SubTokenWordTarget, Target, TargetCommon};
use tracing::debug;

use super::nested::ScopeSplitter;
use super::regex::byte_spans_to_ranges;
use crate::scope::TargetScope;

/// Words inside an identifier: `camelCase`, `PascalCase`, `snake_case`,
/// `SCREAMING_CASE` and digit runs.
static SUBWORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\p{Lu}?\p{Ll}+|\p{Lu}+(?!\p{Ll})|\p{N}+|\p{Lo}+").expect("subword pattern compiles")
});

/// Ranges of the words inside `range`.
pub fn word_ranges(editor: &EditorRef, range: Range) -> Vec<Range> {
	let document = &editor.document;
	let text = document.get_text(range);
	let spans = SUBWORD_REGEX.find_iter(&text).filter_map(|found| match found {
		Ok(found) => Some((found.start(), found.end())),
		Err(err) => {
			debug!(error = %err, "subword match aborted");
			None
		}
	});
	byte_spans_to_ranges(document, range, &text, spans)
}

/// Ranges of the grapheme clusters inside `range`.
pub fn character_ranges(editor: &EditorRef, range: Range) -> Vec<Range> {
	let document = &editor.document;
	let base = document.offset_at(range.start);
	grapheme_spans(&document.get_text(range))
		.into_iter()
		.map(|(start, end)| Range::new(document.position_at(base + start), document.position_at(base + end)))
		.collect()
}

/// The words `pieces[start..=end]` as one target.
///
/// The gaps to the neighbouring words become delimiters, and the first gap
/// found is reused as the insertion delimiter so that inserting a word keeps
/// the identifier's casing convention.
pub fn sub_token_word_target(
	editor: &EditorRef,
	is_reversed: bool,
	pieces: &[Range],
	start: usize,
	end: usize,
) -> Target {
	let content = pieces[start].union(&pieces[end]);
	let leading = start
		.checked_sub(1)
		.map(|previous| Range::new(pieces[previous].end, content.start))
		.filter(|gap| !gap.is_empty());
	let trailing = pieces
		.get(end + 1)
		.map(|next| Range::new(content.end, next.start))
		.filter(|gap| !gap.is_empty());
	let insertion_delimiter = leading
		.or(trailing)
		.map(|gap| editor.document.get_text(gap))
		.unwrap_or_default();
	Target::SubTokenWord(SubTokenWordTarget::new(
		TargetCommon::new(editor.clone(), content, is_reversed),
		insertion_delimiter,
		leading,
		trailing,
	))
}

/// Splits identifiers into words.
pub struct WordSplitter;

impl ScopeSplitter for WordSplitter {
	fn split(&self, editor: &EditorRef, domain: Range) -> Vec<TargetScope> {
		let pieces = word_ranges(editor, domain);
		(0..pieces.len())
			.map(|index| {
				let target_editor = editor.clone();
				let target_pieces = pieces.clone();
				TargetScope::single(editor.clone(), pieces[index], move |is_reversed| {
					sub_token_word_target(&target_editor, is_reversed, &target_pieces, index, index)
				})
			})
			.collect()
	}
}

/// Splits text into grapheme clusters.
pub struct CharacterSplitter;

impl ScopeSplitter for CharacterSplitter {
	fn split(&self, editor: &EditorRef, domain: Range) -> Vec<TargetScope> {
		character_ranges(editor, domain)
			.into_iter()
			.map(|range| {
				let target_editor = editor.clone();
				TargetScope::single(editor.clone(), range, move |is_reversed| {
					Target::Plain(
						PlainTarget::new(TargetCommon::new(target_editor.clone(), range, is_reversed))
							.with_is_token(false),
					)
				})
			})
			.collect()
	}

	/// Prefers a non-whitespace character over whitespace.
	fn is_preferred_over(&self, a: &TargetScope, b: &TargetScope) -> Option<bool> {
		let is_blank = |scope: &TargetScope| scope.editor.document.get_text(scope.domain).trim().is_empty();
		match (is_blank(a), is_blank(b)) {
			(false, true) => Some(true),
			(true, false) => Some(false),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use quarry_primitives::{TextDocument, TextEditor};

	use super::*;

	fn editor(text: &str) -> EditorRef {
		TextEditor::new(TextDocument::new(text, "plaintext")).into_ref()
	}

	fn words(text: &str) -> Vec<String> {
		let editor = editor(text);
		word_ranges(&editor, editor.document.range())
			.into_iter()
			.map(|range| editor.document.get_text(range))
			.collect()
	}

	#[test]
	fn splits_identifier_conventions() {
		assert_eq!(words("getHTTPResponse2"), vec!["get", "HTTP", "Response", "2"]);
		assert_eq!(words("snake_case_name"), vec!["snake", "case", "name"]);
		assert_eq!(words("SCREAMING_CASE"), vec!["SCREAMING", "CASE"]);
	}

	#[test]
	fn word_target_records_gaps() {
		let editor = editor("alpha_beta_gamma");
		let pieces = word_ranges(&editor, editor.document.range());
		let Target::SubTokenWord(target) = sub_token_word_target(&editor, false, &pieces, 1, 1) else {
			panic!("expected a word target");
		};
		assert_eq!(target.leading_delimiter_range, Some(Range::from_coords(0, 5, 0, 6)));
		assert_eq!(target.trailing_delimiter_range, Some(Range::from_coords(0, 10, 0, 11)));
		assert_eq!(target.insertion_delimiter, "_");
	}

	#[test]
	fn camel_case_word_has_no_delimiters() {
		let editor = editor("fooBar");
		let pieces = word_ranges(&editor, editor.document.range());
		let target = sub_token_word_target(&editor, false, &pieces, 1, 1);
		assert_eq!(target.content_range(), Range::from_coords(0, 3, 0, 6));
		assert_eq!(target.insertion_delimiter(), "");
		assert_eq!(target.removal_range().unwrap(), Range::from_coords(0, 3, 0, 6));
	}

	#[test]
	fn characters_are_graphemes() {
		let editor = editor("ae\u{301}b");
		let ranges = character_ranges(&editor, editor.document.range());
		assert_eq!(ranges[1], Range::from_coords(0, 1, 0, 3));
		assert_eq!(ranges.len(), 3);
	}
}
