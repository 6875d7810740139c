use pretty_assertions::assert_eq;
use proptest::prelude::*;
use quarry_primitives::{EditorRef, Position, Range, ScopeType, SimpleScopeType, TextDocument, TextEditor};

use super::*;
use crate::continuous::targets_to_continuous_target;
use crate::kind::TargetKind;
use crate::variants::{BoundedParagraphTarget, ImplicitTarget, InteriorTarget, ParagraphTarget};

const TEXT: &str = "fn main() {\n    let a = foo(b, c);\n\n    bar();\n}\n\nlast paragraph here\n";

fn editor(text: &str) -> EditorRef {
	TextEditor::new(TextDocument::new(text, "plaintext")).into_ref()
}

fn remove(target: &Target) -> String {
	let edit = target.construct_removal_edit().unwrap();
	target.document().apply_edits(&[edit]).text()
}

#[test]
fn whole_line_cleanup() {
	let editor = editor("\n   token   \n\n");
	let token = Target::token(editor, Range::from_coords(1, 3, 1, 8), false);
	assert_eq!(token.removal_range().unwrap(), Range::from_coords(1, 0, 1, 11));
}

#[test]
fn line_removal_takes_trailing_break() {
	let editor = editor("line1\n\nline2");
	let line = Target::line(editor.clone(), Range::from_coords(1, 0, 1, 0), false);
	assert_eq!(remove(&line), "line1\nline2");

	let last = Target::line(editor, Range::from_coords(2, 0, 2, 5), false);
	assert_eq!(last.removal_range().unwrap(), Range::from_coords(1, 0, 2, 5));
	assert_eq!(last.removal_highlight_range().unwrap(), Range::from_coords(2, 0, 2, 5));
}

#[test]
fn implicit_target_removes_only_content() {
	let editor = editor("a bb c");
	let common = TargetCommon::new(editor, Range::from_coords(0, 2, 0, 4), false);
	let implicit = Target::Implicit(ImplicitTarget::new(common));
	assert!(implicit.is_implicit());
	assert!(implicit.is_raw());
	assert_eq!(implicit.insertion_delimiter(), "");
	assert_eq!(implicit.removal_range().unwrap(), implicit.content_range());
}

#[test]
fn line_delimiters_are_line_breaks() {
	let editor = editor("a\nb\nc");
	let line = Target::line(editor, Range::from_coords(1, 0, 1, 1), false);
	let leading = line.leading_delimiter_target().unwrap();
	let trailing = line.trailing_delimiter_target().unwrap();
	assert_eq!(leading.content_range(), Range::from_coords(0, 1, 1, 0));
	assert_eq!(trailing.content_range(), Range::from_coords(1, 1, 2, 0));
	assert!(!leading.is_token());
}

#[test]
fn paragraph_removal_takes_blank_lines() {
	let editor = editor("one\ntwo\n\n\nthree\n");
	let paragraph = Target::Paragraph(ParagraphTarget::new(TargetCommon::new(
		editor,
		Range::from_coords(0, 0, 1, 3),
		false,
	)));
	let trailing = paragraph.trailing_delimiter_target().unwrap();
	assert_eq!(trailing.kind(), TargetKind::Line);
	assert_eq!(trailing.content_range(), Range::from_coords(2, 0, 3, 0));
	assert!(paragraph.leading_delimiter_target().is_none());
	assert_eq!(remove(&paragraph), "three\n");
}

#[test]
fn last_paragraph_takes_leading_blank_lines() {
	let editor = editor("line1\n\nline2");
	let paragraph = Target::Paragraph(ParagraphTarget::new(TargetCommon::new(
		editor,
		Range::from_coords(2, 0, 2, 5),
		false,
	)));
	assert_eq!(remove(&paragraph), "line1");
}

#[test]
fn bounded_paragraph_at_interior_edge_keeps_raw_range() {
	let editor = editor("{\n  a\n  b\n\n  c\n}");
	let paragraph = ParagraphTarget::new(TargetCommon::new(editor.clone(), Range::from_coords(1, 2, 2, 3), false));
	let interior = InteriorTarget::new(editor, false, Range::from_coords(0, 1, 5, 0));
	let bounded = BoundedParagraphTarget::new(false, paragraph, interior).unwrap();
	assert_eq!(bounded.start_line_gap(), 1);
	assert_eq!(bounded.end_line_gap(), 3);
	let target = Target::BoundedParagraph(bounded);
	assert!(target.leading_delimiter_target().is_none());
	assert_eq!(
		target.trailing_delimiter_target().unwrap().content_range(),
		Range::from_coords(3, 0, 3, 0)
	);
	assert!(target.is_line());
}

#[test]
fn bounded_paragraph_excludes_interior_padding() {
	let editor = editor("{ a\n b }");
	let paragraph = ParagraphTarget::new(TargetCommon::new(editor.clone(), Range::from_coords(0, 0, 1, 4), false));
	let interior = InteriorTarget::new(editor, false, Range::from_coords(0, 1, 1, 3));
	let bounded = Target::BoundedParagraph(BoundedParagraphTarget::new(false, paragraph, interior).unwrap());
	assert_eq!(bounded.content_text(), "a\n b");
	assert_eq!(bounded.removal_range().unwrap(), Range::from_coords(0, 2, 1, 2));
}

#[test]
fn bounded_paragraph_requires_overlap() {
	let editor = editor("a\n\n(b)");
	let paragraph = ParagraphTarget::new(TargetCommon::new(editor.clone(), Range::from_coords(0, 0, 0, 1), false));
	let interior = InteriorTarget::new(editor, false, Range::from_coords(2, 1, 2, 2));
	assert!(matches!(
		BoundedParagraphTarget::new(false, paragraph, interior),
		Err(TargetError::InvalidScope(_))
	));
}

#[test]
fn document_removes_everything() {
	let editor = editor(TEXT);
	let document = Target::Document(crate::variants::DocumentTarget::new(TargetCommon::new(
		editor.clone(),
		Range::from_coords(0, 0, 6, 19),
		false,
	)));
	assert_eq!(document.removal_range().unwrap(), editor.document.range());
	assert_eq!(document.insertion_delimiter(), "\n");
}

#[test]
fn surrounding_pair_interior_and_boundary() {
	let editor = editor("x = ( a )");
	let pair = Target::SurroundingPair(crate::variants::SurroundingPairTarget::new(
		TargetCommon::new(editor, Range::from_coords(0, 4, 0, 9), false),
		Range::from_coords(0, 5, 0, 8),
		[Range::from_coords(0, 4, 0, 5), Range::from_coords(0, 8, 0, 9)],
	));
	let interior = pair.interior_strict().unwrap();
	assert_eq!(interior.len(), 1);
	assert_eq!(interior[0].content_range(), Range::from_coords(0, 6, 0, 7));
	assert_eq!(interior[0].removal_range().unwrap(), Range::from_coords(0, 5, 0, 8));

	let boundary = pair.boundary_strict().unwrap();
	assert_eq!(
		boundary.iter().map(Target::content_range).collect::<Vec<_>>(),
		vec![Range::from_coords(0, 4, 0, 5), Range::from_coords(0, 8, 0, 9)]
	);
	assert!(boundary.iter().all(|target| target.kind() == TargetKind::Token));
	assert_eq!(remove(&pair), "x =");
}

#[test]
fn plain_targets_have_no_interior() {
	let editor = editor("foo");
	let token = Target::token(editor, Range::from_coords(0, 0, 0, 3), false);
	assert_eq!(
		token.interior_strict().unwrap_err(),
		TargetError::no_containing_scope("interior")
	);
	assert_eq!(
		token.boundary_strict().unwrap_err().to_string(),
		"Couldn't find containing boundary"
	);
}

#[test]
fn untyped_whitespace_is_removed_verbatim() {
	let editor = editor("a    b");
	let target = Target::untyped(editor.clone(), Range::from_coords(0, 2, 0, 3), false, true);
	assert_eq!(target.removal_range().unwrap(), Range::from_coords(0, 2, 0, 3));
	let word = Target::untyped(editor, Range::from_coords(0, 5, 0, 6), false, true);
	assert_eq!(word.removal_range().unwrap(), Range::from_coords(0, 1, 0, 6));
}

#[test]
fn scope_type_uses_explicit_delimiters() {
	let editor = editor("[a, b, c]");
	let common = TargetCommon::new(editor, Range::from_coords(0, 4, 0, 5), false);
	let item = Target::ScopeType(
		ScopeTypeTarget::new(common, SimpleScopeType::CollectionItem.into()).with_delimiter_ranges(
			Some(Range::from_coords(0, 2, 0, 4)),
			Some(Range::from_coords(0, 5, 0, 7)),
		),
	);
	assert_eq!(item.insertion_delimiter(), "\n");
	assert_eq!(item.removal_range().unwrap(), Range::from_coords(0, 4, 0, 7));
	assert_eq!(remove(&item), "[a, c]");
	assert_eq!(item.leading_delimiter_target().unwrap().kind(), TargetKind::Plain);
}

#[test]
fn scope_type_smart_removal_is_line_wise() {
	let editor = editor("a();\n    b();\nc();");
	let common = TargetCommon::new(editor, Range::from_coords(1, 4, 1, 8), false);
	let statement = Target::ScopeType(ScopeTypeTarget::new(common, SimpleScopeType::Statement.into()));
	assert_eq!(remove(&statement), "a();\nc();");
	assert!(statement.leading_delimiter_target().is_some());
}

#[test]
fn scope_type_prefix_joins_removal() {
	let editor = editor("@dec def f(): pass");
	let common = TargetCommon::new(editor, Range::from_coords(0, 5, 0, 18), false);
	let function = Target::ScopeType(
		ScopeTypeTarget::new(common, ScopeType::Simple(SimpleScopeType::Name))
			.with_prefix_range(Some(Range::from_coords(0, 0, 0, 4))),
	);
	assert_eq!(function.removal_range().unwrap(), Range::from_coords(0, 0, 0, 18));
}

#[test]
fn scope_type_prefix_leaves_explicit_ranges_alone() {
	let editor = editor("@dec def f(): pass, g");
	let common = TargetCommon::new(editor, Range::from_coords(0, 5, 0, 18), false);
	let prefixed = ScopeTypeTarget::new(common, ScopeType::Simple(SimpleScopeType::Name))
		.with_prefix_range(Some(Range::from_coords(0, 0, 0, 4)));
	let explicit = Target::ScopeType(prefixed.clone().with_removal_range(Some(Range::from_coords(0, 5, 0, 18))));
	assert_eq!(explicit.removal_range().unwrap(), Range::from_coords(0, 5, 0, 18));
	let delimited = Target::ScopeType(prefixed.with_delimiter_ranges(None, Some(Range::from_coords(0, 18, 0, 20))));
	assert_eq!(delimited.removal_range().unwrap(), Range::from_coords(0, 5, 0, 20));
}

#[test]
fn scope_type_content_override_drops_matcher_ranges() {
	let editor = editor("{ a }");
	let common = TargetCommon::new(editor, Range::from_coords(0, 0, 0, 5), false);
	let scope = Target::ScopeType(
		ScopeTypeTarget::new(common, SimpleScopeType::Map.into())
			.with_interior_range(Some(Range::from_coords(0, 1, 0, 4)))
			.with_removal_range(Some(Range::from_coords(0, 0, 0, 5))),
	);
	assert!(scope.interior_strict().is_ok());
	let same = scope.clone_with(CloneWith::default());
	assert_eq!(same, scope);
	let moved = scope.with_content_range(Range::from_coords(0, 2, 0, 3));
	assert!(moved.interior_strict().is_err());
}

#[test]
fn text_only_targets_refuse_removal() {
	let editor = editor("foo");
	let target = Target::TextOnly(crate::variants::TextOnlyTarget::new(
		TargetCommon::new(editor, Range::from_coords(0, 0, 0, 0), false),
		"main.rs",
	));
	assert_eq!(target.content_text(), "main.rs");
	assert!(matches!(target.removal_range(), Err(TargetError::Unsupported(_))));
	assert!(matches!(target.removal_highlight_range(), Err(TargetError::Unsupported(_))));
	assert!(matches!(target.construct_removal_edit(), Err(TargetError::Unsupported(_))));
}

#[test]
fn equality_ignores_that_target() {
	let editor = editor("foo bar");
	let mut arena = crate::arena::TargetArena::new();
	let first = Target::token(editor.clone(), Range::from_coords(0, 0, 0, 3), false);
	let id = arena.push(first.clone()).unwrap();
	let second = Target::token(editor.clone(), Range::from_coords(0, 0, 0, 3), false).with_that_target(Some(id));
	assert_eq!(first, second);
	let other_editor = Target::token(self::editor("foo bar"), Range::from_coords(0, 0, 0, 3), false);
	assert_ne!(first, other_editor);
}

#[test]
fn type_preserving_merge() {
	let editor = editor("foo bar baz");
	let a = Target::token(editor.clone(), Range::from_coords(0, 0, 0, 3), false);
	let b = Target::token(editor, Range::from_coords(0, 8, 0, 11), false);
	let merged = a.create_continuous_range_target(false, &b, true, true);
	assert_eq!(merged.kind(), TargetKind::Token);
	assert_eq!(merged.content_range(), Range::from_coords(0, 0, 0, 11));
}

#[test]
fn mixed_type_fallback() {
	let editor = editor("foo\nbar");
	let token = Target::token(editor.clone(), Range::from_coords(0, 0, 0, 3), false);
	let line = Target::line(editor, Range::from_coords(1, 0, 1, 3), false);
	let merged = token.create_continuous_range_target(false, &line, true, true);
	assert_eq!(merged.kind(), TargetKind::Untyped);
	assert!(!merged.is_token());
	assert!(merged.has_explicit_range());
}

#[test]
fn excluded_line_ends_move_to_adjacent_lines() {
	let editor = editor("a\nb\nc\nd");
	let first = Target::line(editor.clone(), Range::from_coords(0, 0, 0, 1), false);
	let last = Target::line(editor, Range::from_coords(3, 0, 3, 1), false);
	let merged = first.create_continuous_range_target(false, &last, false, false);
	assert_eq!(merged.kind(), TargetKind::Line);
	assert_eq!(merged.content_range(), Range::from_coords(1, 0, 2, 1));
}

#[test]
fn exclusive_untyped_range() {
	let editor = editor("foo bar baz");
	let a = Target::token(editor.clone(), Range::from_coords(0, 0, 0, 3), false);
	let b = Target::token(editor, Range::from_coords(0, 8, 0, 11), false);
	let merged = a.create_continuous_range_target(false, &b, false, false);
	assert_eq!(merged.kind(), TargetKind::Untyped);
	assert_eq!(merged.content_range(), Range::from_coords(0, 3, 0, 8));
	assert!(merged.is_token());
}

#[test]
fn scope_type_merge_keeps_outer_delimiters() {
	let editor = editor("[a, b, c]");
	let item = |content: Range, leading: Option<Range>, trailing: Option<Range>| {
		Target::ScopeType(
			ScopeTypeTarget::new(
				TargetCommon::new(editor.clone(), content, false),
				SimpleScopeType::CollectionItem.into(),
			)
			.with_delimiter_ranges(leading, trailing),
		)
	};
	let a = item(Range::from_coords(0, 1, 0, 2), None, Some(Range::from_coords(0, 2, 0, 4)));
	let b = item(
		Range::from_coords(0, 4, 0, 5),
		Some(Range::from_coords(0, 2, 0, 4)),
		Some(Range::from_coords(0, 5, 0, 7)),
	);
	let merged = a.create_continuous_range_target(false, &b, true, true);
	assert_eq!(merged.kind(), TargetKind::ScopeType);
	assert_eq!(remove(&merged), "[c]");
	assert!(merged.leading_delimiter_target().is_none());
}

#[test]
fn anchor_after_active_reverses() {
	let editor = editor("foo bar baz");
	let anchor = Target::token(editor.clone(), Range::from_coords(0, 8, 0, 11), false);
	let active = Target::token(editor, Range::from_coords(0, 0, 0, 3), false);
	let merged = targets_to_continuous_target(&anchor, &active, true, false).unwrap();
	assert!(merged.is_reversed());
	assert_eq!(merged.content_range(), Range::from_coords(0, 0, 0, 8));
}

#[test]
fn continuous_targets_need_one_editor() {
	let a = Target::token(editor("foo"), Range::from_coords(0, 0, 0, 3), false);
	let b = Target::token(editor("foo"), Range::from_coords(0, 0, 0, 3), false);
	assert_eq!(
		targets_to_continuous_target(&a, &b, false, false).unwrap_err(),
		TargetError::EditorMismatch
	);
}

#[test]
fn content_selection_follows_direction() {
	let editor = editor("foo bar");
	let target = Target::token(editor, Range::from_coords(0, 4, 0, 7), true);
	let selection = target.content_selection();
	assert_eq!(selection.anchor, Position::new(0, 7));
	assert_eq!(selection.active, Position::new(0, 4));
	assert_eq!(target.content_text(), "bar");
}

fn arb_range(document: &TextDocument) -> impl Strategy<Value = Range> + use<> {
	let len = document.rope().len_chars();
	let document = document.clone();
	(0..=len, 0..=len).prop_map(move |(a, b)| Range::new(document.position_at(a), document.position_at(b)))
}

fn targets_over(editor: &EditorRef, range: Range) -> Vec<Target> {
	let common = TargetCommon::new(editor.clone(), range, false);
	vec![
		Target::token(editor.clone(), range, false),
		Target::line(editor.clone(), range, false),
		Target::Paragraph(ParagraphTarget::new(common.clone())),
		Target::untyped(editor.clone(), range, false, true),
		Target::plain(editor.clone(), range, false),
		Target::ScopeType(ScopeTypeTarget::new(common.clone(), SimpleScopeType::Statement.into())),
		Target::ScopeType(ScopeTypeTarget::new(common.clone(), SimpleScopeType::FunctionCall.into())),
		Target::Interior(InteriorTarget::new(editor.clone(), false, range)),
	]
}

proptest! {
	#[test]
	fn removal_contains_content(range in arb_range(&TextDocument::new(TEXT, "plaintext"))) {
		let editor = editor(TEXT);
		for target in targets_over(&editor, range) {
			let removal = target.removal_range().unwrap();
			prop_assert!(removal.contains_range(&target.content_range()), "{:?} {:?}", target.kind(), removal);
		}
	}

	#[test]
	fn clone_preserves_variant_and_range(range in arb_range(&TextDocument::new(TEXT, "plaintext"))) {
		let editor = editor(TEXT);
		for target in targets_over(&editor, range) {
			let cloned = target.clone_with(CloneWith::default());
			prop_assert_eq!(cloned.kind(), target.kind());
			prop_assert_eq!(cloned.content_range(), target.content_range());
			prop_assert_eq!(&cloned, &target);
		}
	}

	#[test]
	fn continuous_boundary_law(mut offsets in proptest::collection::vec(0..=TEXT.chars().count(), 4)) {
		offsets.sort_unstable();
		let editor = editor(TEXT);
		let document = &editor.document;
		let first = Range::new(document.position_at(offsets[0]), document.position_at(offsets[1]));
		let second = Range::new(document.position_at(offsets[2]), document.position_at(offsets[3]));
		let pairs = targets_over(&editor, first).into_iter().zip(targets_over(&editor, second));
		for (start, end) in pairs.filter(|(start, _)| start.kind() != TargetKind::Interior) {
			let merged = start.create_continuous_range_target(false, &end, true, true);
			prop_assert_eq!(merged.content_range().start, start.content_range().start);
			prop_assert_eq!(merged.content_range().end, end.content_range().end);
		}
	}
}
