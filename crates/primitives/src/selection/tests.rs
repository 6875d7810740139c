use super::*;

fn pos(line: usize, character: usize) -> Position {
	Position::new(line, character)
}

#[test]
fn forward_selection() {
	let sel = Selection::new(pos(0, 2), pos(0, 6));
	assert!(!sel.is_reversed());
	assert_eq!(sel.range(), Range::new(pos(0, 2), pos(0, 6)));
}

#[test]
fn reversed_selection() {
	let sel = Selection::new(pos(1, 4), pos(0, 1));
	assert!(sel.is_reversed());
	assert_eq!(sel.start(), pos(0, 1));
	assert_eq!(sel.end(), pos(1, 4));
}

#[test]
fn point_is_not_reversed() {
	let sel = Selection::point(pos(3, 3));
	assert!(sel.is_empty());
	assert!(!sel.is_reversed());
}

#[test]
fn from_range_respects_direction() {
	let range = Range::new(pos(0, 0), pos(0, 5));
	assert_eq!(Selection::from_range(range, true), Selection::new(pos(0, 5), pos(0, 0)));
	assert_eq!(Selection::from_range(range, false).flip(), Selection::from_range(range, true));
}
