//! Storage for previously resolved targets that later targets refer back to.

use tracing::trace;

use crate::error::{Result, TargetError};
use crate::target::Target;

/// Index of a target stored in a [`TargetArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThatTargetId(usize);

impl ThatTargetId {
	pub fn index(self) -> usize {
		self.0
	}
}

/// Append-only arena of resolved targets.
///
/// A target may only be pushed if the id it refers back to is already
/// stored, so every chain ends at a target without a back-reference.
#[derive(Debug, Default, Clone)]
pub struct TargetArena {
	targets: Vec<Target>,
}

impl TargetArena {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.targets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.targets.is_empty()
	}

	/// Stores `target` and returns its id.
	pub fn push(&mut self, target: Target) -> Result<ThatTargetId> {
		if let Some(that) = target.that_target_id()
			&& that.0 >= self.targets.len()
		{
			return Err(TargetError::InvalidScope(format!(
				"that-target {} is not in the arena",
				that.0
			)));
		}
		let id = ThatTargetId(self.targets.len());
		trace!(id = id.0, kind = ?target.kind(), "arena.push");
		self.targets.push(target);
		Ok(id)
	}

	pub fn resolve(&self, id: ThatTargetId) -> Option<&Target> {
		self.targets.get(id.0)
	}

	/// Follows `target`'s back-references to the first target in the chain.
	/// A target without a back-reference is its own that-target.
	pub fn that_target<'a>(&'a self, target: &'a Target) -> &'a Target {
		let mut current = target;
		while let Some(next) = current.that_target_id().and_then(|id| self.resolve(id)) {
			current = next;
		}
		current
	}
}
