//! Builds the scope handler for a scope type.

use std::sync::Arc;

use quarry_config::EngineConfig;
use quarry_primitives::{ScopeType, SimpleScopeType, SurroundingPairName};
use quarry_target::{Result, TargetError};
use tracing::debug;

use crate::handler::{IterationScope, ScopeHandler};
use crate::handlers::bounded::BoundedParagraphScopeHandler;
use crate::handlers::collection_item::CollectionItemTextualScopeHandler;
use crate::handlers::composite::FallbackScopeHandler;
use crate::handlers::language::LanguageScopeHandler;
use crate::handlers::lines::{DocumentScopeHandler, LineScopeHandler, ParagraphScopeHandler};
use crate::handlers::nested::{NestedScopeHandler, ScopeSplitter};
use crate::handlers::regex::{RegexScope, RegexSplitter};
use crate::handlers::sentence::SentenceSplitter;
use crate::handlers::surrounding_pair::{SurroundingPairInteriorScopeHandler, SurroundingPairScopeHandler};
use crate::handlers::word::{CharacterSplitter, WordSplitter};
use crate::matcher::{ScopeMatcher, ScopeMatcherRegistry};

/// Creates scope handlers from the built-in set and the registered language
/// matchers.
#[derive(Debug, Clone, Default)]
pub struct ScopeHandlerFactory {
	config: Arc<EngineConfig>,
	matchers: ScopeMatcherRegistry,
}

impl ScopeHandlerFactory {
	pub fn new(config: Arc<EngineConfig>, matchers: ScopeMatcherRegistry) -> Self {
		Self { config, matchers }
	}

	pub fn config(&self) -> &EngineConfig {
		&self.config
	}

	pub fn matchers(&self) -> &ScopeMatcherRegistry {
		&self.matchers
	}

	/// The handler for `scope_type` in documents of `language_id`.
	///
	/// Textual scope types always succeed. Syntactic ones fail with
	/// [`TargetError::UnsupportedLanguage`] when no matcher for the language
	/// supports them.
	pub fn create(&self, scope_type: &ScopeType, language_id: &str) -> Result<Arc<dyn ScopeHandler>> {
		use SimpleScopeType::*;

		let handler: Arc<dyn ScopeHandler> = match scope_type {
			ScopeType::Simple(Character) => self.nested(scope_type, Token, Line, language_id, CharacterSplitter)?,
			ScopeType::Simple(Word) => self.nested(scope_type, Identifier, Identifier, language_id, WordSplitter)?,
			ScopeType::Simple(Token) => {
				self.nested(scope_type, Line, Line, language_id, RegexSplitter::builtin(RegexScope::Token))?
			}
			ScopeType::Simple(Identifier) => {
				self.nested(scope_type, Line, Line, language_id, RegexSplitter::builtin(RegexScope::Identifier))?
			}
			ScopeType::Simple(NonWhitespaceSequence) => self.nested(
				scope_type,
				Line,
				Line,
				language_id,
				RegexSplitter::builtin(RegexScope::NonWhitespaceSequence),
			)?,
			ScopeType::Simple(Url) => {
				self.nested(scope_type, Line, Line, language_id, RegexSplitter::builtin(RegexScope::Url))?
			}
			ScopeType::CustomRegex { regex } => {
				self.nested(scope_type, Line, Line, language_id, RegexSplitter::custom(regex)?)?
			}
			ScopeType::Simple(Line) => Arc::new(LineScopeHandler::new()),
			ScopeType::Simple(Paragraph) => Arc::new(ParagraphScopeHandler::new()),
			ScopeType::Simple(Document) => Arc::new(DocumentScopeHandler::new()),
			ScopeType::Simple(Sentence) => {
				let splitter = SentenceSplitter::new(self.config.insertion_delimiter(scope_type));
				self.nested(scope_type, Paragraph, Paragraph, language_id, splitter)?
			}
			ScopeType::Simple(BoundedParagraph) => Arc::new(BoundedParagraphScopeHandler::new(
				self.create(&Paragraph.into(), language_id)?,
				self.create(&interior_of(SurroundingPairName::Any), language_id)?,
				self.create(&Document.into(), language_id)?,
			)),
			ScopeType::Simple(CollectionItem) => self.collection_item(scope_type, language_id)?,
			ScopeType::SurroundingPair {
				delimiter,
				require_strong_containment,
			} => Arc::new(SurroundingPairScopeHandler::new(
				*delimiter,
				*require_strong_containment,
				language_id,
				self.config.surrounding_pair.max_scan_length,
				self.optional_matcher(language_id, scope_type),
			)?),
			ScopeType::SurroundingPairInterior {
				delimiter,
				require_single_line,
			} => {
				let pairs = self.create(
					&ScopeType::SurroundingPair {
						delimiter: *delimiter,
						require_strong_containment: true,
					},
					language_id,
				)?;
				Arc::new(SurroundingPairInteriorScopeHandler::new(*delimiter, *require_single_line, pairs))
			}
			ScopeType::Simple(_) => self.language(scope_type, language_id)?,
		};
		Ok(handler)
	}

	/// The handler bounding every-scope searches for `handler`.
	pub fn iteration_handler(&self, handler: &dyn ScopeHandler, language_id: &str) -> Result<Arc<dyn ScopeHandler>> {
		match handler.iteration_scope()? {
			IterationScope::Scope(scope_type) => self.create(&scope_type, language_id),
			IterationScope::Handler(handler) => Ok(handler),
		}
	}

	fn nested(
		&self,
		scope_type: &ScopeType,
		iteration: SimpleScopeType,
		search: SimpleScopeType,
		language_id: &str,
		splitter: impl ScopeSplitter + 'static,
	) -> Result<Arc<dyn ScopeHandler>> {
		Ok(Arc::new(NestedScopeHandler::new(
			scope_type.clone(),
			iteration.into(),
			self.create(&search.into(), language_id)?,
			splitter,
		)))
	}

	fn language(&self, scope_type: &ScopeType, language_id: &str) -> Result<Arc<dyn ScopeHandler>> {
		let matcher = self.matchers.matcher_for(language_id, scope_type)?;
		Ok(Arc::new(LanguageScopeHandler::new(
			scope_type.clone(),
			matcher,
			self.config.insertion_delimiter(scope_type),
		)))
	}

	fn optional_matcher(&self, language_id: &str, scope_type: &ScopeType) -> Option<Arc<dyn ScopeMatcher>> {
		match self.matchers.matcher_for(language_id, scope_type) {
			Ok(matcher) => Some(matcher),
			Err(err) => {
				debug!(%language_id, %scope_type, error = %err, "using text-based pair search");
				None
			}
		}
	}

	/// Language collection items when the matcher has them, textual items
	/// otherwise.
	fn collection_item(&self, scope_type: &ScopeType, language_id: &str) -> Result<Arc<dyn ScopeHandler>> {
		let textual: Arc<dyn ScopeHandler> = Arc::new(CollectionItemTextualScopeHandler::new(
			self.create(&interior_of(SurroundingPairName::CollectionBoundary), language_id)?,
			self.create(&interior_of(SurroundingPairName::String), language_id)?,
			self.config.collection_item.default_delimiter.clone(),
		));
		match self.language(scope_type, language_id) {
			Ok(language) => {
				let iteration = language.iteration_scope()?;
				Ok(Arc::new(
					FallbackScopeHandler::new(vec![language, textual]).with_iteration_scope(iteration),
				))
			}
			Err(TargetError::UnsupportedLanguage { .. }) => Ok(textual),
			Err(err) => Err(err),
		}
	}
}

fn interior_of(delimiter: SurroundingPairName) -> ScopeType {
	ScopeType::SurroundingPairInterior {
		delimiter,
		require_single_line: false,
	}
}
