//! Built-in scope handlers.

/// Paragraphs bounded by pair interiors.
pub mod bounded;
/// Textual collection items.
pub mod collection_item;
/// Handlers composed of other handlers.
pub mod composite;
/// Scopes from language matchers.
pub mod language;
/// Lines, paragraphs and the document.
pub mod lines;
/// Scopes split out of a coarser search scope.
pub mod nested;
/// Regex-defined scopes.
pub mod regex;
/// Sentences.
pub mod sentence;
/// Surrounding pairs and their interiors.
pub mod surrounding_pair;
/// Words and characters.
pub mod word;

pub use bounded::BoundedParagraphScopeHandler;
pub use collection_item::CollectionItemTextualScopeHandler;
pub use composite::{ConditionalScopeHandler, FallbackScopeHandler, SortedScopeHandler};
pub use language::LanguageScopeHandler;
pub use lines::{DocumentScopeHandler, LineScopeHandler, ParagraphScopeHandler, fit_range_to_line_content};
pub use nested::{NestedScopeHandler, ScopeSplitter};
pub use regex::{RegexScope, RegexSplitter};
pub use sentence::SentenceSplitter;
pub use surrounding_pair::{SurroundingPairInteriorScopeHandler, SurroundingPairScopeHandler};
pub use word::{CharacterSplitter, WordSplitter, character_ranges, sub_token_word_target, word_ranges};
