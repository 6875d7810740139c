//! Constraints a caller places on a scope search.

use quarry_primitives::Position;

/// How a scope's domain must relate to the search position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainmentPolicy {
	/// The domain must contain the position, endpoints included.
	Required,
	/// The domain must not contain the position, endpoints included.
	Disallowed,
	/// The position may touch the domain but not lie strictly inside it.
	DisallowedIfStrict,
}

/// Requirements applied by [`crate::ScopeHandler::generate_scopes`] to the
/// raw candidates a handler produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeIteratorRequirements {
	/// Containment relation with the search position, if any.
	pub containment: Option<ContainmentPolicy>,
	/// Search stops once scopes lie entirely past this position. Defaults to
	/// the document boundary in the search direction.
	pub distal_position: Option<Position>,
	/// Whether a non-empty scope ending (or starting, backwards) exactly at
	/// the search position may be yielded.
	pub allow_adjacent_scopes: bool,
	/// Highest ancestor index yielded; `0` stops after the innermost scope.
	pub max_ancestor_index: usize,
	/// Skip scopes that contain the previously yielded scope.
	pub skip_ancestor_scopes: bool,
	/// Keep yielding scopes nested inside the previously yielded one instead
	/// of moving past it.
	pub include_descendant_scopes: bool,
}

impl Default for ScopeIteratorRequirements {
	fn default() -> Self {
		Self {
			containment: None,
			distal_position: None,
			allow_adjacent_scopes: false,
			max_ancestor_index: usize::MAX,
			skip_ancestor_scopes: false,
			include_descendant_scopes: false,
		}
	}
}

impl ScopeIteratorRequirements {
	pub fn containing() -> Self {
		Self {
			containment: Some(ContainmentPolicy::Required),
			..Self::default()
		}
	}

	pub fn with_containment(mut self, containment: Option<ContainmentPolicy>) -> Self {
		self.containment = containment;
		self
	}

	pub fn with_distal_position(mut self, distal_position: Position) -> Self {
		self.distal_position = Some(distal_position);
		self
	}

	pub fn with_adjacent_scopes(mut self, allow: bool) -> Self {
		self.allow_adjacent_scopes = allow;
		self
	}

	pub fn with_max_ancestor_index(mut self, max_ancestor_index: usize) -> Self {
		self.max_ancestor_index = max_ancestor_index;
		self
	}

	pub fn with_skip_ancestor_scopes(mut self, skip: bool) -> Self {
		self.skip_ancestor_scopes = skip;
		self
	}

	pub fn with_descendant_scopes(mut self, include: bool) -> Self {
		self.include_descendant_scopes = include;
		self
	}

	/// True for the requirements an every-scope search passes down.
	pub fn is_every_scope(&self) -> bool {
		self.containment.is_none() && self.skip_ancestor_scopes
	}
}
