//! Core buffer types for target resolution: positions, ranges, selections,
//! documents, editors and edits.
//!
//! All coordinates are measured in chars, never bytes.

/// Documents and their lines.
pub mod document;
/// Replacement edits.
pub mod edit;
/// Editor handles.
pub mod editor;
/// Grapheme and sentence segmentation in char coordinates.
pub mod graphemes;
/// Positions, ranges and search directions.
pub mod range;
/// Rope line helpers.
pub mod rope;
/// Scope type names and surrounding-pair families.
pub mod scope_type;
/// Anchor/active selections.
pub mod selection;

pub use document::{TextDocument, TextLine};
pub use edit::Edit;
pub use editor::{EditorId, EditorRef, TextEditor};
pub use range::{CharIdx, Direction, Position, Range};
pub use ropey::Rope;
pub use scope_type::{ScopeType, SimpleScopeType, SurroundingPairName};
pub use selection::Selection;
