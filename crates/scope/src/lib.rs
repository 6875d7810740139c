//! Scope handlers: enumerating the scopes of a scope type around a position.
//!
//! A [`ScopeHandler`] yields [`TargetScope`]s in the canonical order of
//! [`compare_target_scopes`], filtered by [`ScopeIteratorRequirements`].
//! [`ScopeHandlerFactory`] builds the handler for any [`ScopeType`], using a
//! registered [`ScopeMatcher`] for syntactic scope types.
//!
//! [`ScopeType`]: quarry_primitives::ScopeType

/// Canonical scope ordering.
pub mod compare;
/// Scope handler construction.
pub mod factory;
/// The scope handler trait and search loop.
pub mod handler;
/// Built-in handlers.
pub mod handlers;
/// Language scope matchers.
pub mod matcher;
/// Search requirements.
pub mod requirements;
/// Lazily materialised scopes.
pub mod scope;
/// Containing, touching and overlapping scope searches.
pub mod search;

pub use compare::compare_target_scopes;
pub use factory::ScopeHandlerFactory;
pub use handler::{IterationScope, ScopeHandler, ScopeIter, scope_type_name};
pub use matcher::{MatchedScope, ScopeMatcher, ScopeMatcherRegistry};
pub use requirements::{ContainmentPolicy, ScopeIteratorRequirements};
pub use scope::TargetScope;
pub use search::{
	containing_scope_target, preferred_scope_touching_position, scope_range_target, scopes_overlapping_range,
};
