//! Head and tail: extending a target through the start or end of an
//! enclosing target.

use quarry_primitives::Range;
use quarry_target::{HeadTailTarget, Result, Target, TargetCommon};

use crate::context::ModifierContext;
use crate::modifier::Modifier;
use crate::pipeline::apply_modifiers;
use crate::stage::ModifierStage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
	/// Back to the start of the enclosing target.
	Head,
	/// On to the end of the enclosing target.
	Tail,
}

pub struct HeadTailStage<'a> {
	reach: Reach,
	modifiers: Option<&'a [Modifier]>,
}

impl<'a> HeadTailStage<'a> {
	/// `modifiers` find the enclosing target; the containing line when `None`.
	pub fn new(reach: Reach, modifiers: Option<&'a [Modifier]>) -> Self {
		Self { reach, modifiers }
	}

	fn head_tail(&self, target: &Target, enclosing: &Target) -> Target {
		let content = target.content_range();
		let outer = enclosing.content_range();
		let range = match self.reach {
			Reach::Head => Range::new(outer.start, content.end),
			Reach::Tail => Range::new(content.start, outer.end),
		};
		let interior = enclosing
			.interior_strict()
			.ok()
			.and_then(|interiors| interiors.first().map(Target::content_range))
			.and_then(|interior| self.clip_interior(interior, content));
		Target::HeadTail(HeadTailTarget::new(
			TargetCommon::new(target.editor().clone(), range, self.reach == Reach::Head),
			target.insertion_delimiter(),
			interior,
		))
	}

	/// The part of `interior` on this stage's side of `content`.
	fn clip_interior(&self, interior: Range, content: Range) -> Option<Range> {
		match self.reach {
			Reach::Head if content.end >= interior.start => Some(Range::new(interior.start, content.end.min(interior.end))),
			Reach::Tail if content.start <= interior.end => Some(Range::new(content.start.max(interior.start), interior.end)),
			_ => None,
		}
	}
}

impl ModifierStage for HeadTailStage<'_> {
	fn run(&self, ctx: &ModifierContext, target: &Target) -> Result<Vec<Target>> {
		let default_modifiers = [Modifier::containing_line()];
		let modifiers = self.modifiers.unwrap_or(&default_modifiers);
		let enclosing = apply_modifiers(vec![target.clone()], modifiers, ctx)?;
		Ok(enclosing
			.iter()
			.map(|enclosing| self.head_tail(target, enclosing))
			.collect())
	}
}
