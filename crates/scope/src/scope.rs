//! Lazily materialised scope candidates.

use std::fmt;
use std::sync::Arc;

use quarry_primitives::{EditorRef, Range};
use quarry_target::{Result, Target};

type TargetFn = dyn Fn(bool) -> Result<Vec<Target>> + Send + Sync;

/// A scope found by a scope handler.
///
/// The `domain` is what the search algorithm orders and filters on; targets
/// are only built for scopes that are actually selected.
#[derive(Clone)]
pub struct TargetScope {
	pub editor: EditorRef,
	/// Region the scope governs, used for containment and ordering.
	pub domain: Range,
	targets: Arc<TargetFn>,
}

impl TargetScope {
	pub fn new(
		editor: EditorRef,
		domain: Range,
		targets: impl Fn(bool) -> Result<Vec<Target>> + Send + Sync + 'static,
	) -> Self {
		Self {
			editor,
			domain,
			targets: Arc::new(targets),
		}
	}

	/// Scope whose single target does not depend on direction beyond `is_reversed`.
	pub fn single(
		editor: EditorRef,
		domain: Range,
		target: impl Fn(bool) -> Target + Send + Sync + 'static,
	) -> Self {
		Self::new(editor, domain, move |is_reversed| Ok(vec![target(is_reversed)]))
	}

	/// Builds the targets of this scope.
	pub fn get_targets(&self, is_reversed: bool) -> Result<Vec<Target>> {
		(self.targets)(is_reversed)
	}

	/// Returns a scope whose targets are post-processed by `map`.
	pub fn map_targets(
		&self,
		map: impl Fn(Vec<Target>) -> Result<Vec<Target>> + Send + Sync + 'static,
	) -> Self {
		let inner = Arc::clone(&self.targets);
		Self {
			editor: self.editor.clone(),
			domain: self.domain,
			targets: Arc::new(move |is_reversed| map(inner(is_reversed)?)),
		}
	}
}

impl fmt::Debug for TargetScope {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TargetScope")
			.field("editor", &self.editor.id)
			.field("domain", &self.domain)
			.finish_non_exhaustive()
	}
}
