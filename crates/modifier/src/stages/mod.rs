//! The built-in modifier stages.

/// Cascading, conditional and range stages.
pub mod composite;
/// Interior, boundary, leading and trailing parts.
pub mod delimiters;
/// Head and tail.
pub mod head_tail;
/// Scope searches.
pub mod scope;
/// Position, raw selection, full line, filename and filters.
pub mod simple;
/// Words and characters of a token.
pub mod subpiece;
