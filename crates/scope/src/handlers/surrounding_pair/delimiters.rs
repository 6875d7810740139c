//! Delimiter texts of each surrounding pair family.

use quarry_primitives::SurroundingPairName;

/// Which side of a pair a delimiter text can stand on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterSide {
	Left,
	Right,
	/// Identical opening and closing text, as with quotes.
	Unknown,
}

/// One delimiter text and the pair family it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndividualDelimiter {
	pub text: &'static str,
	pub name: SurroundingPairName,
	pub side: DelimiterSide,
	/// The pair cannot span lines.
	pub single_line: bool,
}

struct PairTexts {
	opening: &'static [&'static str],
	closing: &'static [&'static str],
	single_line: bool,
}

const fn pair(opening: &'static [&'static str], closing: &'static [&'static str]) -> PairTexts {
	PairTexts {
		opening,
		closing,
		single_line: false,
	}
}

const fn single_line(opening: &'static [&'static str], closing: &'static [&'static str]) -> PairTexts {
	PairTexts {
		opening,
		closing,
		single_line: true,
	}
}

fn pair_texts(name: SurroundingPairName, language_id: &str) -> PairTexts {
	use SurroundingPairName::*;
	match (name, language_id) {
		(TripleDoubleQuotes, "python") => pair(&["\"\"\""], &["\"\"\""]),
		(TripleSingleQuotes, "python") => pair(&["'''"], &["'''"]),
		(SingleQuotes, "nix") => pair(&["''"], &["''"]),
		(TripleDoubleQuotes, "ruby") => pair(&["%Q("], &[")"]),
		(AngleBrackets, _) => pair(&["</", "<"], &[">", "/>"]),
		(BacktickQuotes, _) => pair(&["`"], &["`"]),
		(CurlyBrackets, _) => pair(&["{", "${"], &["}"]),
		(TripleDoubleQuotes | TripleSingleQuotes, _) => pair(&[], &[]),
		(DoubleQuotes, _) => single_line(&["\""], &["\""]),
		(EscapedDoubleQuotes, _) => single_line(&["\\\""], &["\\\""]),
		(EscapedParentheses, _) => pair(&["\\("], &["\\)"]),
		(EscapedSquareBrackets, _) => pair(&["\\["], &["\\]"]),
		(EscapedSingleQuotes, _) => single_line(&["\\'"], &["\\'"]),
		(Parentheses, _) => pair(&["(", "$("], &[")"]),
		(SingleQuotes, _) => single_line(&["'"], &["'"]),
		(SquareBrackets, _) => pair(&["["], &["]"]),
		(String | Any | CollectionBoundary, _) => pair(&[], &[]),
	}
}

/// Every delimiter text for the pairs `name` stands for, in `language_id`.
pub fn individual_delimiters(name: SurroundingPairName, language_id: &str) -> Vec<IndividualDelimiter> {
	let mut delimiters = Vec::new();
	for &simple in name.simple_names() {
		let texts = pair_texts(simple, language_id);
		let mut push = |text: &'static str, side: DelimiterSide| {
			let side = if texts.opening.contains(&text) && texts.closing.contains(&text) {
				DelimiterSide::Unknown
			} else {
				side
			};
			if !delimiters
				.iter()
				.any(|existing: &IndividualDelimiter| existing.text == text && existing.name == simple)
			{
				delimiters.push(IndividualDelimiter {
					text,
					name: simple,
					side,
					single_line: texts.single_line,
				});
			}
		};
		for &text in texts.opening {
			push(text, DelimiterSide::Left);
		}
		for &text in texts.closing {
			push(text, DelimiterSide::Right);
		}
	}
	delimiters
}
