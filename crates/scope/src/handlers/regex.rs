//! Regex-defined scopes: tokens, identifiers, non-whitespace runs, URLs and
//! user-supplied patterns.

use std::sync::LazyLock;

use quarry_primitives::{EditorRef, Range, TextDocument};
use quarry_target::{Result, Target, TargetError};
use regex::Regex;

use super::nested::ScopeSplitter;
use crate::scope::TargetScope;

const TOKEN_PATTERN: &str = concat!(
	r"[\p{L}\p{M}\p{N}_]+",
	r"|===|!==|\*\*=|<<=|>>=|\?\?=|&&=|\|\|=|\.\.\.",
	r"|->|=>|::|\+\+|--|&&|\|\||==|!=|<=|>=|\+=|-=|\*=|/=|\*\*|\?\?",
	r"|[^\s\p{L}\p{M}\p{N}_]",
);

static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| compile_builtin(TOKEN_PATTERN));
static IDENTIFIER_REGEX: LazyLock<Regex> = LazyLock::new(|| compile_builtin(r"[\p{L}\p{M}\p{N}_]+"));
static NON_WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| compile_builtin(r"\S+"));
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	compile_builtin(r#"(?:[a-zA-Z][a-zA-Z0-9+.-]*://|www\.)[^\s<>(){}\[\]"'`]+[^\s<>(){}\[\]"'`.,;:!?]"#)
});
static WORD_CHAR_REGEX: LazyLock<Regex> = LazyLock::new(|| compile_builtin(r"[\p{L}\p{M}\p{N}_]"));

fn compile_builtin(pattern: &str) -> Regex {
	Regex::new(pattern).expect("built-in scope pattern compiles")
}

/// Converts byte spans within the text of `domain` to document ranges.
///
/// Spans must be sorted and non-overlapping.
pub(crate) fn byte_spans_to_ranges(
	document: &TextDocument,
	domain: Range,
	text: &str,
	spans: impl IntoIterator<Item = (usize, usize)>,
) -> Vec<Range> {
	let base = document.offset_at(domain.start);
	let mut char_offset = 0;
	let mut byte_offset = 0;
	let mut to_position = |byte: usize| {
		if byte < byte_offset {
			char_offset = 0;
			byte_offset = 0;
		}
		char_offset += text[byte_offset..byte].chars().count();
		byte_offset = byte;
		document.position_at(base + char_offset)
	};
	spans
		.into_iter()
		.map(|(start, end)| {
			let start = to_position(start);
			Range::new(start, to_position(end))
		})
		.collect()
}

/// Which built-in pattern a [`RegexSplitter`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegexScope {
	Token,
	Identifier,
	NonWhitespaceSequence,
	Url,
}

/// Finds regex matches inside each line, producing token targets.
pub struct RegexSplitter {
	regex: Regex,
	prefer_word_chars: bool,
}

impl RegexSplitter {
	pub fn builtin(scope: RegexScope) -> Self {
		let regex = match scope {
			RegexScope::Token => &*TOKEN_REGEX,
			RegexScope::Identifier => &*IDENTIFIER_REGEX,
			RegexScope::NonWhitespaceSequence => &*NON_WHITESPACE_REGEX,
			RegexScope::Url => &*URL_REGEX,
		};
		Self {
			regex: regex.clone(),
			prefer_word_chars: scope == RegexScope::Token,
		}
	}

	/// A splitter for a user-supplied pattern.
	pub fn custom(pattern: &str) -> Result<Self> {
		let regex =
			Regex::new(pattern).map_err(|err| TargetError::InvalidScope(format!("invalid custom regex: {err}")))?;
		Ok(Self {
			regex,
			prefer_word_chars: false,
		})
	}
}

impl ScopeSplitter for RegexSplitter {
	fn split(&self, editor: &EditorRef, domain: Range) -> Vec<TargetScope> {
		let document = &editor.document;
		let text = document.get_text(domain);
		let spans = self
			.regex
			.find_iter(&text)
			.filter(|found| !found.is_empty())
			.map(|found| (found.start(), found.end()));
		byte_spans_to_ranges(document, domain, &text, spans)
			.into_iter()
			.map(|range| {
				let target_editor = editor.clone();
				TargetScope::single(editor.clone(), range, move |is_reversed| {
					Target::token(target_editor.clone(), range, is_reversed)
				})
			})
			.collect()
	}

	/// Prefers a token made of word characters over one that is not.
	fn is_preferred_over(&self, a: &TargetScope, b: &TargetScope) -> Option<bool> {
		if !self.prefer_word_chars {
			return None;
		}
		let is_word = |scope: &TargetScope| WORD_CHAR_REGEX.is_match(&scope.editor.document.get_text(scope.domain));
		match (is_word(a), is_word(b)) {
			(true, false) => Some(true),
			(false, true) => Some(false),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use quarry_primitives::TextEditor;

	use super::*;

	fn texts(splitter: &RegexSplitter, text: &str) -> Vec<String> {
		let editor = TextEditor::new(TextDocument::new(text, "plaintext")).into_ref();
		let domain = editor.document.line_at(0).range;
		splitter
			.split(&editor, domain)
			.iter()
			.map(|scope| editor.document.get_text(scope.domain))
			.collect()
	}

	#[test]
	fn tokens_split_operators_and_words() {
		assert_eq!(
			texts(&RegexSplitter::builtin(RegexScope::Token), "a.b => c_d(1)"),
			vec!["a", ".", "b", "=>", "c_d", "(", "1", ")"]
		);
	}

	#[test]
	fn non_whitespace_sequences() {
		assert_eq!(
			texts(&RegexSplitter::builtin(RegexScope::NonWhitespaceSequence), " foo.bar  (x) "),
			vec!["foo.bar", "(x)"]
		);
	}

	#[test]
	fn urls_drop_trailing_punctuation() {
		assert_eq!(
			texts(&RegexSplitter::builtin(RegexScope::Url), "see https://example.com/a?b=1."),
			vec!["https://example.com/a?b=1"]
		);
	}

	#[test]
	fn multibyte_offsets_are_chars() {
		let editor = TextEditor::new(TextDocument::new("é ab", "plaintext")).into_ref();
		let domain = editor.document.line_at(0).range;
		let scopes = RegexSplitter::builtin(RegexScope::Token).split(&editor, domain);
		assert_eq!(scopes[1].domain, Range::from_coords(0, 2, 0, 4));
	}

	#[test]
	fn invalid_custom_regex() {
		assert!(matches!(RegexSplitter::custom("("), Err(TargetError::InvalidScope(_))));
	}
}
