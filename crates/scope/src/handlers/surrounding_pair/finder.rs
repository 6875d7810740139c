//! Text-based delimiter matching.

use std::collections::HashMap;

use quarry_primitives::{Range, SurroundingPairName, TextDocument};
use quarry_target::{Result, TargetError};
use regex::Regex;

use super::delimiters::{DelimiterSide, IndividualDelimiter};
use crate::handlers::regex::byte_spans_to_ranges;

/// A matched pair of delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairOccurrence {
	pub name: SurroundingPairName,
	pub opening: Range,
	pub closing: Range,
}

impl PairOccurrence {
	/// From the start of the opening delimiter to the end of the closing one.
	pub fn full_range(&self) -> Range {
		Range::new(self.opening.start, self.closing.end)
	}

	/// Between the delimiters.
	pub fn interior_range(&self) -> Range {
		Range::new(self.opening.end, self.closing.start)
	}
}

/// Finds delimiter pairs by scanning text, without any knowledge of syntax.
///
/// Each pair family keeps its own stack of open delimiters. Ambiguous
/// delimiters such as quotes close the innermost open one of their family if
/// there is one, and open a new one otherwise. A delimiter preceded by a
/// backslash is ignored unless the delimiter itself starts with one.
#[derive(Debug)]
pub struct DelimiterFinder {
	delimiters: Vec<IndividualDelimiter>,
	regex: Option<Regex>,
}

impl DelimiterFinder {
	pub fn new(delimiters: Vec<IndividualDelimiter>) -> Result<Self> {
		let mut texts: Vec<&str> = delimiters.iter().map(|delimiter| delimiter.text).collect();
		texts.sort_by_key(|text| std::cmp::Reverse(text.len()));
		texts.dedup();
		let regex = if texts.is_empty() {
			None
		} else {
			let pattern = texts.iter().map(|text| regex::escape(text)).collect::<Vec<_>>().join("|");
			Some(
				Regex::new(&pattern)
					.map_err(|err| TargetError::InvalidScope(format!("invalid delimiter pattern: {err}")))?,
			)
		};
		Ok(Self { delimiters, regex })
	}

	/// Pairs whose delimiters both lie in `window`, in the order their closing
	/// delimiters appear.
	pub fn find_pairs(&self, document: &TextDocument, window: Range) -> Vec<PairOccurrence> {
		let Some(regex) = &self.regex else {
			return Vec::new();
		};
		let text = document.get_text(window);
		let mut matched_texts = Vec::new();
		let spans: Vec<(usize, usize)> = regex
			.find_iter(&text)
			.filter(|found| {
				let escaped = text[..found.start()].ends_with('\\') && !found.as_str().starts_with('\\');
				!escaped
			})
			.map(|found| {
				matched_texts.push(found.as_str());
				(found.start(), found.end())
			})
			.collect();
		let ranges = byte_spans_to_ranges(document, window, &text, spans);

		let mut open: HashMap<SurroundingPairName, Vec<Range>> = HashMap::new();
		let mut pairs = Vec::new();
		for (range, matched) in ranges.into_iter().zip(matched_texts) {
			for delimiter in self.delimiters.iter().filter(|delimiter| delimiter.text == matched) {
				let stack = open.entry(delimiter.name).or_default();
				if delimiter.single_line {
					stack.retain(|opening| opening.start.line == range.start.line);
				}
				let is_opening = match delimiter.side {
					DelimiterSide::Left => true,
					DelimiterSide::Right => false,
					DelimiterSide::Unknown => stack.is_empty(),
				};
				if is_opening {
					stack.push(range);
				} else if let Some(opening) = stack.pop() {
					pairs.push(PairOccurrence {
						name: delimiter.name,
						opening,
						closing: range,
					});
				}
			}
		}
		pairs
	}
}
