//! Whitespace and delimiter cleanup used to compute removal ranges.
//!
//! Two families of behaviour live here:
//!
//! - *Token* behaviour, for targets that should clean up after themselves the
//!   way a word in a sentence does: at most one side of adjacent whitespace is
//!   consumed, or the whole line if nothing but whitespace would be left.
//! - *Delimited sequence* behaviour, for targets whose delimiters were found
//!   precisely by a matcher (collection items, sub-token words): the content is
//!   joined with one delimiter and no further whitespace heuristics run.

use quarry_primitives::{Position, Range, TextDocument};

/// Chars that, directly before a token, make trailing whitespace the side to remove.
const LEADING_DELIMITERS: [char; 6] = ['"', '\'', '(', '[', '{', '<'];

/// Chars that, directly after a token, make leading whitespace the side to remove.
const TRAILING_DELIMITERS: [char; 9] = ['"', '\'', ')', ']', '}', '>', ',', ';', ':'];

/// Range from the start of the first line of `range` to the end of its last
/// line, excluding the final line break.
pub fn expand_to_full_line(document: &TextDocument, range: Range) -> Range {
	Range::new(
		document.line_at(range.start.line).range.start,
		document.line_at(range.end.line).range.end,
	)
}

/// Whitespace immediately before `range.start` on the same line.
pub fn token_leading_whitespace(document: &TextDocument, range: Range) -> Option<Range> {
	let start = range.start;
	let line = document.line_at(start.line);
	let before: String = line.text.chars().take(start.character).collect();
	let count = before.chars().rev().take_while(|ch| ch.is_whitespace()).count();
	(count > 0).then(|| Range::new(start.with_character(start.character - count), start))
}

/// Whitespace immediately after `range.end` on the same line.
pub fn token_trailing_whitespace(document: &TextDocument, range: Range) -> Option<Range> {
	let end = range.end;
	let line = document.line_at(end.line);
	let count = line
		.text
		.chars()
		.skip(end.character)
		.take_while(|ch| ch.is_whitespace())
		.count();
	(count > 0).then(|| Range::new(end, end.with_character(end.character + count)))
}

/// Removal range for token-like content.
///
/// `leading` and `trailing` are the whitespace ranges adjacent to `content`,
/// as reported by the target's delimiter targets. Rules, in order:
///
/// 1. If the whitespace on both sides spans the whole line, remove the line.
/// 2. If there is trailing whitespace and there is leading whitespace too, or
///    the content starts the line, or an opening delimiter char precedes the
///    content, remove content plus trailing whitespace.
/// 3. If there is leading whitespace and the content ends the line, or a
///    closing delimiter char follows the content, remove content plus leading
///    whitespace.
/// 4. Otherwise remove the content alone.
pub fn token_removal_range(
	document: &TextDocument,
	content: Range,
	leading: Option<Range>,
	trailing: Option<Range>,
) -> Range {
	let leading = leading.unwrap_or_else(|| content.start.to_empty_range());
	let trailing = trailing.unwrap_or_else(|| content.end.to_empty_range());
	let full_line = expand_to_full_line(document, content);

	if leading.union(&trailing) == full_line {
		return full_line;
	}

	if !trailing.is_empty()
		&& (!leading.is_empty()
			|| content.start == full_line.start
			|| leading_char(document, content.start).is_some_and(|ch| LEADING_DELIMITERS.contains(&ch)))
	{
		return content.union(&trailing);
	}

	if !leading.is_empty()
		&& (content.end == full_line.end
			|| trailing_char(document, content.end).is_some_and(|ch| TRAILING_DELIMITERS.contains(&ch)))
	{
		return content.union(&leading);
	}

	content
}

/// Removal range for content with precisely known delimiters: the content
/// joined with the trailing delimiter, or the leading one if there is no
/// trailing delimiter.
pub fn delimited_sequence_removal_range(content: Range, leading: Option<Range>, trailing: Option<Range>) -> Range {
	trailing.or(leading).map_or(content, |delimiter| content.union(&delimiter))
}

/// Removal override for a single collection item with delimiters on both
/// sides: when the leading delimiter is at least as long as the trailing one,
/// the item is removed together with its leading delimiter.
///
/// Returns `None` when the default delimited-sequence removal applies, which
/// is always the case when iterating every item.
pub fn collection_item_removal_range(
	document: &TextDocument,
	content: Range,
	leading: Option<Range>,
	trailing: Option<Range>,
	is_every_scope: bool,
) -> Option<Range> {
	if is_every_scope {
		return None;
	}
	let (leading, trailing) = (leading?, trailing?);
	(range_len(document, leading) >= range_len(document, trailing)).then(|| content.union(&leading))
}

/// Insertion delimiter for an item between two known delimiters: the longer
/// delimiter text, or `default` on a side without one.
pub fn longest_delimiter_text(
	document: &TextDocument,
	leading: Option<Range>,
	trailing: Option<Range>,
	default: &str,
) -> String {
	let trailing = trailing.map_or_else(|| default.to_string(), |range| document.get_text(range));
	let leading = leading.map_or_else(|| default.to_string(), |range| document.get_text(range));
	if leading.chars().count() > trailing.chars().count() {
		leading
	} else {
		trailing
	}
}

/// Narrows `range` so it neither starts nor ends with whitespace. A range of
/// only whitespace is returned unchanged.
pub fn shrink_range_to_fit_content(document: &TextDocument, range: Range) -> Range {
	let text = document.get_text(range);
	let trimmed = text.trim();
	if trimmed.is_empty() {
		return range;
	}
	let start_delta = text.chars().count() - text.trim_start().chars().count();
	let end_delta = text.chars().count() - text.trim_end().chars().count();
	let start = document.offset_at(range.start) + start_delta;
	let end = document.offset_at(range.end) - end_delta;
	Range::new(document.position_at(start), document.position_at(end))
}

/// Length of `range` in chars, line breaks included.
pub fn range_len(document: &TextDocument, range: Range) -> usize {
	document.offset_at(range.end) - document.offset_at(range.start)
}

fn leading_char(document: &TextDocument, start: Position) -> Option<char> {
	let character = start.character.checked_sub(1)?;
	document.char_at(start.with_character(character))
}

fn trailing_char(document: &TextDocument, end: Position) -> Option<char> {
	document.char_at(end)
}
