use super::*;

#[test]
fn ascii_graphemes() {
	assert_eq!(grapheme_spans("abc"), vec![(0, 1), (1, 2), (2, 3)]);
}

#[test]
fn combining_marks_form_one_grapheme() {
	// "e" followed by a combining acute accent
	assert_eq!(grapheme_spans("e\u{301}x"), vec![(0, 2), (2, 3)]);
}

#[test]
fn sentences() {
	let text = "Hello there. How are you?";
	let spans = sentence_spans(text);
	assert_eq!(spans.len(), 2);
	assert_eq!(spans[0], (0, 13));
	assert_eq!(spans[1], (13, 25));
}

#[test]
fn byte_offsets_round_down() {
	let text = "aé b";
	assert_eq!(byte_to_char_offset(text, 0), 0);
	assert_eq!(byte_to_char_offset(text, 1), 1);
	assert_eq!(byte_to_char_offset(text, 3), 2);
	assert_eq!(byte_to_char_offset(text, 2), 2);
}
