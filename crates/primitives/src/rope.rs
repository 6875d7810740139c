//! Rope utilities shared by document line queries.

use ropey::RopeSlice;

use crate::range::CharIdx;

/// Returns the number of chars in a line slice, excluding its line break.
///
/// Recognises every break ropey splits lines on: `\r\n` plus LF, VT, FF, CR,
/// NEL, LS and PS.
pub fn line_content_len(line: RopeSlice) -> CharIdx {
	let len = line.len_chars();
	if len == 0 {
		return 0;
	}
	match line.char(len - 1) {
		'\n' if len >= 2 && line.char(len - 2) == '\r' => len - 2,
		ch if is_line_break(ch) => len - 1,
		_ => len,
	}
}

/// Single-char line breaks.
fn is_line_break(ch: char) -> bool {
	matches!(ch, '\n' | '\u{000B}' | '\u{000C}' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}

/// Returns the char offset of the first non-whitespace char in a line, or the
/// content length if the line is blank.
pub fn first_non_whitespace(line: RopeSlice) -> CharIdx {
	let len = line_content_len(line);
	line.chars().take(len).position(|ch| !ch.is_whitespace()).unwrap_or(len)
}

/// Returns the char offset just past the last non-whitespace char in a line,
/// or zero if the line is blank.
pub fn last_non_whitespace_end(line: RopeSlice) -> CharIdx {
	let len = line_content_len(line);
	let chars: Vec<char> = line.chars().take(len).collect();
	chars.iter().rposition(|ch| !ch.is_whitespace()).map_or(0, |idx| idx + 1)
}
