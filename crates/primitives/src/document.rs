//! Read-only text documents addressed by line/character positions.

use std::path::{Path, PathBuf};

use ropey::Rope;

use crate::edit::Edit;
use crate::range::{CharIdx, Position, Range};
use crate::rope::{first_non_whitespace, last_non_whitespace_end, line_content_len};

/// Snapshot of a single line of a [`TextDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
	/// Zero-based line index.
	pub line_number: usize,
	/// Line text without the line break.
	pub text: String,
	/// Range of the line content, excluding the line break.
	pub range: Range,
	/// Range of the line including its line break, ending at the start of
	/// the next line. Equal to `range` on the last line.
	pub range_including_line_break: Range,
	/// Offset of the first non-whitespace char, or the content length if blank.
	pub first_non_whitespace_character_index: usize,
	/// Offset just past the last non-whitespace char, or zero if blank.
	pub last_non_whitespace_character_index: usize,
	/// True if the line has no non-whitespace chars.
	pub is_empty_or_whitespace: bool,
}

impl TextLine {
	/// Range from the first to the last non-whitespace char.
	///
	/// Blank lines yield an empty range at the line start.
	pub fn trimmed_range(&self) -> Range {
		if self.is_empty_or_whitespace {
			return self.range.start.to_empty_range();
		}
		Range::new(
			self.range.start.with_character(self.first_non_whitespace_character_index),
			self.range.start.with_character(self.last_non_whitespace_character_index),
		)
	}
}

/// An immutable text buffer with an optional path and a language identifier.
#[derive(Debug, Clone)]
pub struct TextDocument {
	text: Rope,
	language_id: String,
	path: Option<PathBuf>,
}

impl TextDocument {
	/// Creates a document from its text and language identifier.
	pub fn new(text: &str, language_id: impl Into<String>) -> Self {
		Self {
			text: Rope::from_str(text),
			language_id: language_id.into(),
			path: None,
		}
	}

	/// Attaches a file path to the document.
	pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
		self.path = Some(path.into());
		self
	}

	pub fn language_id(&self) -> &str {
		&self.language_id
	}

	pub fn path(&self) -> Option<&Path> {
		self.path.as_deref()
	}

	/// File name of the document, if it has a path.
	pub fn file_name(&self) -> Option<String> {
		self.path
			.as_deref()
			.and_then(Path::file_name)
			.map(|name| name.to_string_lossy().into_owned())
	}

	/// Underlying rope.
	pub fn rope(&self) -> &Rope {
		&self.text
	}

	/// Full document text.
	pub fn text(&self) -> String {
		self.text.to_string()
	}

	/// Number of lines, counting the empty line after a trailing newline.
	pub fn line_count(&self) -> usize {
		self.text.len_lines()
	}

	/// Returns the line at `line`, clamped to the last line.
	pub fn line_at(&self, line: usize) -> TextLine {
		let last = self.line_count().saturating_sub(1);
		let line_number = line.min(last);
		let slice = self.text.line(line_number);
		let len = line_content_len(slice);
		let first = first_non_whitespace(slice);
		let last_end = last_non_whitespace_end(slice);
		let start = Position::new(line_number, 0);
		let end = Position::new(line_number, len);
		let range_including_line_break = if line_number < last {
			Range::new(start, Position::new(line_number + 1, 0))
		} else {
			Range::new(start, end)
		};

		TextLine {
			line_number,
			text: slice.slice(..len).to_string(),
			range: Range::new(start, end),
			range_including_line_break,
			first_non_whitespace_character_index: first,
			last_non_whitespace_character_index: last_end,
			is_empty_or_whitespace: first == len,
		}
	}

	/// Range covering the entire document.
	pub fn range(&self) -> Range {
		let end = self.line_at(self.line_count().saturating_sub(1)).range.end;
		Range::new(Position::default(), end)
	}

	/// Clamps a position to the document: the line to the last line and the
	/// character to the line content.
	pub fn validate_position(&self, position: Position) -> Position {
		let line = self.line_at(position.line);
		if position.line > line.line_number {
			return line.range.end;
		}
		Position::new(line.line_number, position.character.min(line.range.end.character))
	}

	pub fn validate_range(&self, range: Range) -> Range {
		Range::new(self.validate_position(range.start), self.validate_position(range.end))
	}

	/// Converts a position to an absolute char offset.
	pub fn offset_at(&self, position: Position) -> CharIdx {
		let position = self.validate_position(position);
		self.text.line_to_char(position.line) + position.character
	}

	/// Converts an absolute char offset to a position.
	pub fn position_at(&self, offset: CharIdx) -> Position {
		let offset = offset.min(self.text.len_chars());
		let line = self.text.char_to_line(offset);
		let position = Position::new(line, offset - self.text.line_to_char(line));
		self.validate_position(position)
	}

	/// Text covered by `range`.
	pub fn get_text(&self, range: Range) -> String {
		let start = self.offset_at(range.start);
		let end = self.offset_at(range.end);
		self.text.slice(start..end).to_string()
	}

	/// Char at `position`, if it is inside line content.
	pub fn char_at(&self, position: Position) -> Option<char> {
		let line = self.line_at(position.line);
		if position.line != line.line_number || position.character >= line.range.end.character {
			return None;
		}
		self.text.get_char(self.offset_at(position))
	}

	/// Applies edits to a copy of this document and returns it.
	///
	/// Edits are applied from the end of the document backwards so earlier
	/// ranges stay valid. Overlapping edits are applied in the same order and
	/// may clobber one another.
	pub fn apply_edits(&self, edits: &[Edit]) -> TextDocument {
		let mut spans: Vec<(CharIdx, CharIdx, &str)> = edits
			.iter()
			.map(|edit| (self.offset_at(edit.range.start), self.offset_at(edit.range.end), edit.text.as_str()))
			.collect();
		spans.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));

		let mut text = self.text.clone();
		for (start, end, replacement) in spans {
			text.remove(start..end);
			text.insert(start, replacement);
		}

		TextDocument {
			text,
			language_id: self.language_id.clone(),
			path: self.path.clone(),
		}
	}
}
