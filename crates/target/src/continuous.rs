//! Merging two targets into one range target.

use quarry_primitives::{Position, Range};
use tracing::trace;

use crate::error::{Result, TargetError};
use crate::target::{Target, TargetCommon};
use crate::variants::{LineTarget, UntypedTarget};

impl Target {
	/// A target spanning from this target to `end`.
	///
	/// Excluding an endpoint starts (or ends) the range at that target's far
	/// boundary. Same-variant merges including both ends may keep their
	/// variant; otherwise line-like pairs become a [`LineTarget`] and
	/// everything else an [`UntypedTarget`].
	pub fn create_continuous_range_target(
		&self,
		is_reversed: bool,
		end: &Target,
		include_start: bool,
		include_end: bool,
	) -> Target {
		if let Target::Untyped(_) = self {
			return untyped_continuous(self, end, is_reversed, include_start, include_end);
		}
		if include_start
			&& include_end
			&& let Some(merged) = self.rich_merge(is_reversed, end)
		{
			trace!(kind = ?merged.kind(), "continuous.rich");
			return merged;
		}
		if self.is_line() && end.is_line() {
			let range = continuous_line_range(self, end, include_start, include_end);
			return Target::Line(LineTarget::new(TargetCommon::new(
				self.editor().clone(),
				range,
				is_reversed,
			)));
		}
		untyped_continuous(self, end, is_reversed, include_start, include_end)
	}
}

/// Range from `start` to `end`, taking the far boundary of an excluded endpoint.
pub fn continuous_range(start: &Target, end: &Target, include_start: bool, include_end: bool) -> Range {
	let first = if include_start {
		start.content_range().start
	} else {
		start.content_range().end
	};
	let last = if include_end {
		end.content_range().end
	} else {
		end.content_range().start
	};
	Range::new(first, last)
}

/// Like [`continuous_range`], but an excluded endpoint moves to the adjacent
/// line instead of stopping mid-line.
pub fn continuous_line_range(start: &Target, end: &Target, include_start: bool, include_end: bool) -> Range {
	let first = if include_start {
		start.content_range().start
	} else {
		Position::new(start.content_range().end.line + 1, 0)
	};
	let last = if include_end {
		end.content_range().end
	} else {
		let line = end.content_range().start.line.saturating_sub(1);
		end.document().line_at(line).range.end
	};
	Range::new(first, last)
}

fn untyped_continuous(start: &Target, end: &Target, is_reversed: bool, include_start: bool, include_end: bool) -> Target {
	let range = continuous_range(start, end, include_start, include_end);
	let common = TargetCommon::new(start.editor().clone(), range, is_reversed);
	Target::Untyped(UntypedTarget::new(common, true).with_is_token(start.is_token() && end.is_token()))
}

/// Range target between an anchor and an active target in either order.
///
/// The direction comes from their relative order; exclusions follow the
/// anchor and active targets to whichever end they land on.
pub fn targets_to_continuous_target(
	anchor: &Target,
	active: &Target,
	exclude_anchor: bool,
	exclude_active: bool,
) -> Result<Target> {
	if anchor.editor().id != active.editor().id {
		return Err(TargetError::EditorMismatch);
	}
	let anchor_range = anchor.content_range();
	let active_range = active.content_range();
	let is_reversed = anchor_range.start > active_range.start
		|| (anchor_range.start == active_range.start && anchor_range.end > active_range.end);

	let (start, end, exclude_start, exclude_end) = if is_reversed {
		(active, anchor, exclude_active, exclude_anchor)
	} else {
		(anchor, active, exclude_anchor, exclude_active)
	};
	Ok(start.create_continuous_range_target(is_reversed, end, !exclude_start, !exclude_end))
}
