use unicode_segmentation::UnicodeSegmentation;

use crate::range::CharIdx;

/// Returns `[start, end)` char offsets of each extended grapheme cluster in `text`.
pub fn grapheme_spans(text: &str) -> Vec<(CharIdx, CharIdx)> {
	char_spans(text, text.grapheme_indices(true))
}

/// Returns `[start, end)` char offsets of each Unicode sentence in `text`,
/// including trailing whitespace as the segmenter reports it.
pub fn sentence_spans(text: &str) -> Vec<(CharIdx, CharIdx)> {
	char_spans(text, text.split_sentence_bound_indices())
}

/// Converts a byte offset into `text` to a char offset.
///
/// Offsets inside a multi-byte char round up to the following char.
pub fn byte_to_char_offset(text: &str, byte_offset: usize) -> CharIdx {
	text.char_indices().take_while(|(idx, _)| *idx < byte_offset).count()
}

fn char_spans<'a>(text: &str, pieces: impl Iterator<Item = (usize, &'a str)>) -> Vec<(CharIdx, CharIdx)> {
	let mut spans = Vec::new();
	let mut char_offset = 0;
	let mut byte_offset = 0;
	for (byte_idx, piece) in pieces {
		char_offset += text[byte_offset..byte_idx].chars().count();
		let len = piece.chars().count();
		spans.push((char_offset, char_offset + len));
		char_offset += len;
		byte_offset = byte_idx + piece.len();
	}
	spans
}

#[cfg(test)]
mod tests;
