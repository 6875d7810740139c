//! Canonical ordering of scopes relative to a search position.
//!
//! Walking forward from `position`, a scope is "visible" once its start is at
//! or after the position. Visible scopes are ordered by where they start;
//! scopes that started before the position are ordered by where they end,
//! outermost last. When one scope of each kind meets at a point, empty scopes
//! come first. Walking backward mirrors all of this.

use std::cmp::Ordering;

use quarry_primitives::{Direction, Position, Range};

use crate::scope::TargetScope;

/// Orders two scopes in the sequence a search from `position` visits them.
pub fn compare_target_scopes(direction: Direction, position: Position, a: &TargetScope, b: &TargetScope) -> Ordering {
	compare_domains(direction, position, &a.domain, &b.domain)
}

/// [`compare_target_scopes`] on bare domains.
pub fn compare_domains(direction: Direction, position: Position, a: &Range, b: &Range) -> Ordering {
	match direction {
		Direction::Forward => compare_forward(position, a, b),
		Direction::Backward => compare_backward(position, a, b),
	}
}

fn compare_forward(position: Position, a: &Range, b: &Range) -> Ordering {
	let a_visible = a.start >= position;
	let b_visible = b.start >= position;

	match (a_visible, b_visible) {
		(true, true) => a.start.cmp(&b.start).then(a.end.cmp(&b.end)),
		(false, false) => a.end.cmp(&b.end).then(b.start.cmp(&a.start)),
		(false, true) => match a.end.cmp(&b.start) {
			Ordering::Equal if b.is_empty() => Ordering::Greater,
			Ordering::Equal => Ordering::Less,
			other => other,
		},
		(true, false) => match a.start.cmp(&b.end) {
			Ordering::Equal if a.is_empty() => Ordering::Less,
			Ordering::Equal => Ordering::Greater,
			other => other,
		},
	}
}

fn compare_backward(position: Position, a: &Range, b: &Range) -> Ordering {
	let a_visible = a.end <= position;
	let b_visible = b.end <= position;

	match (a_visible, b_visible) {
		(true, true) => b.end.cmp(&a.end).then(b.start.cmp(&a.start)),
		(false, false) => b.start.cmp(&a.start).then(a.end.cmp(&b.end)),
		(false, true) => match b.end.cmp(&a.start) {
			Ordering::Equal if b.is_empty() => Ordering::Greater,
			Ordering::Equal => Ordering::Less,
			other => other,
		},
		(true, false) => match b.start.cmp(&a.end) {
			Ordering::Equal if a.is_empty() => Ordering::Less,
			Ordering::Equal => Ordering::Greater,
			other => other,
		},
	}
}
