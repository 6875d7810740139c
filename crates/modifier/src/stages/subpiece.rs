//! Words and characters inside a token.

use quarry_primitives::{Range, SimpleScopeType};
use quarry_scope::handlers::{character_ranges, sub_token_word_target, word_ranges};
use quarry_target::{Result, Target, TargetError};

use super::scope::ContainingScopeStage;
use crate::context::ModifierContext;
use crate::modifier::PieceType;
use crate::stage::ModifierStage;

pub struct SubpieceStage {
	pub piece_type: PieceType,
	pub anchor: isize,
	pub active: isize,
	/// Either endpoint is excluded, which subpieces do not support.
	pub exclude: bool,
}

/// Resolves a possibly negative index against `len` pieces.
fn piece_index(index: isize, len: usize) -> Result<usize> {
	let resolved = if index < 0 {
		len.checked_sub(index.unsigned_abs())
	} else {
		Some(index.unsigned_abs())
	};
	resolved
		.filter(|&index| index < len)
		.ok_or(TargetError::SubtokenIndexOutOfRange)
}

impl SubpieceStage {
	/// The token to split: the target itself when its range is explicit,
	/// otherwise the token containing it.
	fn token_range(&self, ctx: &ModifierContext, target: &Target) -> Result<Range> {
		if target.has_explicit_range() {
			return Ok(target.content_range());
		}
		let tokens = ContainingScopeStage::new(SimpleScopeType::Token.into(), 0).run(ctx, target)?;
		tokens
			.iter()
			.map(Target::content_range)
			.reduce(|a, b| a.union(&b))
			.ok_or_else(|| TargetError::no_containing_scope("token"))
	}
}

impl ModifierStage for SubpieceStage {
	fn run(&self, ctx: &ModifierContext, target: &Target) -> Result<Vec<Target>> {
		if self.exclude {
			return Err(TargetError::UnsupportedSubtokenExclusion);
		}
		let editor = target.editor();
		let token = self.token_range(ctx, target)?;
		let pieces = match self.piece_type {
			PieceType::Word => word_ranges(editor, token),
			PieceType::Character => character_ranges(editor, token),
		};
		let anchor = piece_index(self.anchor, pieces.len())?;
		let active = piece_index(self.active, pieces.len())?;
		let is_reversed = active < anchor;
		let (start, end) = (anchor.min(active), anchor.max(active));

		Ok(vec![match self.piece_type {
			PieceType::Word => sub_token_word_target(editor, is_reversed, &pieces, start, end),
			PieceType::Character => Target::plain(editor.clone(), pieces[start].union(&pieces[end]), is_reversed),
		}])
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use quarry_primitives::{TextDocument, TextEditor};
	use quarry_target::TargetKind;

	use super::*;

	fn cursor(text: &str, character: usize) -> Target {
		let editor = TextEditor::new(TextDocument::new(text, "plaintext")).into_ref();
		Target::untyped(editor, Range::from_coords(0, character, 0, character), false, false)
	}

	fn stage(piece_type: PieceType, anchor: isize, active: isize) -> SubpieceStage {
		SubpieceStage {
			piece_type,
			anchor,
			active,
			exclude: false,
		}
	}

	fn run(stage: &SubpieceStage, target: &Target) -> Result<Vec<Target>> {
		stage.run(&ModifierContext::default(), target)
	}

	#[test]
	fn words_of_camel_case() {
		let target = cursor("x = getUserName;", 6);
		let last = run(&stage(PieceType::Word, -1, -1), &target).unwrap().remove(0);
		assert_eq!(last.content_text(), "Name");
		assert_eq!(last.kind(), TargetKind::SubTokenWord);
		let first_two = run(&stage(PieceType::Word, 0, 1), &target).unwrap().remove(0);
		assert_eq!(first_two.content_text(), "getUser");
	}

	#[test]
	fn snake_case_words_carry_underscore_delimiters() {
		let target = cursor("max_line_length", 2);
		let middle = run(&stage(PieceType::Word, 1, 1), &target).unwrap().remove(0);
		assert_eq!(middle.content_text(), "line");
		assert_eq!(middle.insertion_delimiter(), "_");
		assert_eq!(middle.removal_range().unwrap(), Range::from_coords(0, 4, 0, 9));
	}

	#[test]
	fn reversed_when_active_precedes_anchor() {
		let target = cursor("abc", 0);
		let chars = run(&stage(PieceType::Character, 2, 0), &target).unwrap().remove(0);
		assert_eq!(chars.content_text(), "abc");
		assert!(chars.is_reversed());
		assert_eq!(chars.kind(), TargetKind::Plain);
	}

	#[test]
	fn index_out_of_range() {
		let target = cursor("abc", 0);
		assert_eq!(
			run(&stage(PieceType::Character, 0, 3), &target).unwrap_err(),
			TargetError::SubtokenIndexOutOfRange
		);
		assert_eq!(
			run(&stage(PieceType::Character, -4, 0), &target).unwrap_err(),
			TargetError::SubtokenIndexOutOfRange
		);
	}

	#[test]
	fn exclusions_are_unsupported() {
		let mut excluding = stage(PieceType::Word, 0, 1);
		excluding.exclude = true;
		assert_eq!(
			run(&excluding, &cursor("fooBar", 0)).unwrap_err(),
			TargetError::UnsupportedSubtokenExclusion
		);
	}
}
