//! Editor handles shared by targets.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::document::TextDocument;
use crate::selection::Selection;

/// Identity of an editor. Two targets refer to the same editor iff their ids match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EditorId(u64);

impl EditorId {
	/// Allocates a fresh, process-unique id.
	pub fn next() -> Self {
		static NEXT: AtomicU64 = AtomicU64::new(1);
		Self(NEXT.fetch_add(1, Ordering::Relaxed))
	}

	pub fn get(self) -> u64 {
		self.0
	}
}

/// A document open in an editor, together with its selections.
#[derive(Debug)]
pub struct TextEditor {
	pub id: EditorId,
	pub document: TextDocument,
	pub selections: Vec<Selection>,
}

/// Shared, read-only handle to a [`TextEditor`].
pub type EditorRef = Arc<TextEditor>;

impl TextEditor {
	/// Creates an editor over `document` with a fresh id and no selections.
	pub fn new(document: TextDocument) -> Self {
		Self {
			id: EditorId::next(),
			document,
			selections: Vec::new(),
		}
	}

	pub fn with_selections(mut self, selections: Vec<Selection>) -> Self {
		self.selections = selections;
		self
	}

	/// Wraps the editor in a shared handle.
	pub fn into_ref(self) -> EditorRef {
		Arc::new(self)
	}

	/// Returns true if both handles refer to the same editor.
	pub fn same(a: &TextEditor, b: &TextEditor) -> bool {
		a.id == b.id
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ids_are_unique() {
		let a = TextEditor::new(TextDocument::new("x", "plaintext"));
		let b = TextEditor::new(TextDocument::new("x", "plaintext"));
		assert_ne!(a.id, b.id);
		assert!(TextEditor::same(&a, &a));
		assert!(!TextEditor::same(&a, &b));
	}
}
