//! Shared state for modifier stages.

use std::sync::Arc;

use quarry_config::EngineConfig;
use quarry_primitives::ScopeType;
use quarry_scope::{ScopeHandler, ScopeHandlerFactory, ScopeMatcherRegistry};
use quarry_target::{Result, Target};

/// What every stage may consult while running: the engine configuration and
/// the scope handlers it creates.
#[derive(Debug, Clone, Default)]
pub struct ModifierContext {
	scopes: ScopeHandlerFactory,
}

impl ModifierContext {
	pub fn new(config: Arc<EngineConfig>, matchers: ScopeMatcherRegistry) -> Self {
		Self {
			scopes: ScopeHandlerFactory::new(config, matchers),
		}
	}

	pub fn config(&self) -> &EngineConfig {
		self.scopes.config()
	}

	pub fn scope_handlers(&self) -> &ScopeHandlerFactory {
		&self.scopes
	}

	/// The handler for `scope_type` in the language of `target`'s document.
	pub fn handler_for(&self, scope_type: &ScopeType, target: &Target) -> Result<Arc<dyn ScopeHandler>> {
		self.scopes.create(scope_type, target.document().language_id())
	}
}
