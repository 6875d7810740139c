//! Errors raised while resolving or operating on targets.

use thiserror::Error;

/// Errors from target operations, modifier stages and scope searches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
	/// A containing-scope or surrounding-pair search exhausted the document.
	#[error("Couldn't find containing {scope_type}")]
	NoContainingScope {
		/// Name of the scope that was searched for.
		scope_type: String,
	},

	/// A subpiece index lies outside the token's pieces.
	#[error("Subtoken index out of range")]
	SubtokenIndexOutOfRange,

	/// Subpiece ranges do not support excluding their endpoints.
	#[error("Subtoken exclusions unsupported")]
	UnsupportedSubtokenExclusion,

	/// The operation is not defined for this target.
	#[error("{0}")]
	Unsupported(String),

	/// No scope matcher is registered for the document language.
	#[error("Scope type {scope_type} is not supported for language {language_id}")]
	UnsupportedLanguage {
		/// Language of the document.
		language_id: String,
		/// Scope type that was requested.
		scope_type: String,
	},

	/// Two targets that must share an editor do not.
	#[error("Targets must be in the same editor")]
	EditorMismatch,

	/// A scope or target descriptor is malformed.
	#[error("invalid scope: {0}")]
	InvalidScope(String),

	/// An ordinal or relative scope search found fewer scopes than requested.
	#[error("Scope index {index} out of range for {scope_type}")]
	ScopeIndexOutOfRange {
		scope_type: String,
		/// Index that was requested, negative counting from the end.
		index: isize,
	},

	/// A modifier descriptor cannot be applied as written.
	#[error("invalid modifier: {0}")]
	InvalidModifier(String),
}

impl TargetError {
	pub fn no_containing_scope(scope_type: impl ToString) -> Self {
		Self::NoContainingScope {
			scope_type: scope_type.to_string(),
		}
	}
}

/// Result type for target operations.
pub type Result<T> = std::result::Result<T, TargetError>;
