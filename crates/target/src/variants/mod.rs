//! Concrete target variants.

mod head_tail;
mod lines;
mod pair;
mod position;
mod scope_type;
mod simple;
mod word;

pub use head_tail::HeadTailTarget;
pub use lines::{BoundedParagraphTarget, DocumentTarget, LineTarget, ParagraphTarget};
pub use pair::{InteriorTarget, SurroundingPairTarget};
pub use position::{PositionTarget, TargetPosition};
pub use scope_type::ScopeTypeTarget;
pub use simple::{ImplicitTarget, PlainTarget, RawSelectionTarget, TextOnlyTarget, TokenTarget, UntypedTarget};
pub use word::SubTokenWordTarget;

/// Implements the accessor half of `TargetVariant` for a struct with a
/// `common` field.
macro_rules! common_accessors {
	() => {
		fn common(&self) -> &crate::target::TargetCommon {
			&self.common
		}

		fn common_mut(&mut self) -> &mut crate::target::TargetCommon {
			&mut self.common
		}
	};
}

pub(crate) use common_accessors;
