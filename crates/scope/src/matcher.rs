//! Pluggable language scope matchers.
//!
//! Syntactic scopes (classes, functions, statements, ...) come from a
//! [`ScopeMatcher`] registered for the document's language, typically backed
//! by a parser. Without one, those scope types fail with
//! [`TargetError::UnsupportedLanguage`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use quarry_primitives::{Range, ScopeType, TextDocument};
use quarry_target::{Result, TargetError};

/// One scope reported by a matcher.
///
/// Only `domain` and `content_range` are mandatory; every other range
/// overrides the corresponding heuristic on the resulting target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedScope {
	pub domain: Range,
	pub content_range: Range,
	pub removal_range: Option<Range>,
	pub interior_range: Option<Range>,
	pub leading_delimiter_range: Option<Range>,
	pub trailing_delimiter_range: Option<Range>,
	pub prefix_range: Option<Range>,
	pub insertion_delimiter: Option<String>,
}

impl MatchedScope {
	pub fn new(domain: Range, content_range: Range) -> Self {
		Self {
			domain,
			content_range,
			removal_range: None,
			interior_range: None,
			leading_delimiter_range: None,
			trailing_delimiter_range: None,
			prefix_range: None,
			insertion_delimiter: None,
		}
	}

	pub fn with_removal_range(mut self, range: Range) -> Self {
		self.removal_range = Some(range);
		self
	}

	pub fn with_interior_range(mut self, range: Range) -> Self {
		self.interior_range = Some(range);
		self
	}

	pub fn with_delimiter_ranges(mut self, leading: Option<Range>, trailing: Option<Range>) -> Self {
		self.leading_delimiter_range = leading;
		self.trailing_delimiter_range = trailing;
		self
	}

	pub fn with_prefix_range(mut self, range: Range) -> Self {
		self.prefix_range = Some(range);
		self
	}

	pub fn with_insertion_delimiter(mut self, delimiter: impl Into<String>) -> Self {
		self.insertion_delimiter = Some(delimiter.into());
		self
	}
}

/// Finds syntactic scopes in documents of one language.
pub trait ScopeMatcher: Send + Sync {
	/// Whether this matcher can find scopes of `scope_type`.
	fn supports(&self, scope_type: &ScopeType) -> bool;

	/// All scopes of `scope_type` in the document, in any order.
	fn match_scopes(&self, document: &TextDocument, scope_type: &ScopeType) -> Result<Vec<MatchedScope>>;

	/// Scope bounding every-scope searches for `scope_type`. Defaults to the
	/// whole document.
	fn iteration_scope_type(&self, _scope_type: &ScopeType) -> Option<ScopeType> {
		None
	}
}

/// Scope matchers keyed by language id.
#[derive(Clone, Default)]
pub struct ScopeMatcherRegistry {
	matchers: HashMap<String, Arc<dyn ScopeMatcher>>,
}

impl ScopeMatcherRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `matcher` for `language_id`, replacing any previous one.
	pub fn register(&mut self, language_id: impl Into<String>, matcher: Arc<dyn ScopeMatcher>) {
		self.matchers.insert(language_id.into(), matcher);
	}

	pub fn get(&self, language_id: &str) -> Option<&Arc<dyn ScopeMatcher>> {
		self.matchers.get(language_id)
	}

	/// The matcher for `language_id` if it supports `scope_type`.
	pub fn matcher_for(&self, language_id: &str, scope_type: &ScopeType) -> Result<Arc<dyn ScopeMatcher>> {
		self.get(language_id)
			.filter(|matcher| matcher.supports(scope_type))
			.cloned()
			.ok_or_else(|| TargetError::UnsupportedLanguage {
				language_id: language_id.to_string(),
				scope_type: scope_type.to_string(),
			})
	}
}

impl fmt::Debug for ScopeMatcherRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut languages: Vec<_> = self.matchers.keys().collect();
		languages.sort();
		f.debug_struct("ScopeMatcherRegistry").field("languages", &languages).finish()
	}
}
