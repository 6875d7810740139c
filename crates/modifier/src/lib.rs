//! The modifier pipeline: descriptors that narrow, widen or reinterpret a
//! target, and the stages that apply them.
//!
//! ```
//! use quarry_modifier::{Modifier, ModifierContext, apply_modifier};
//! use quarry_primitives::{Range, SimpleScopeType, TextDocument, TextEditor};
//! use quarry_target::Target;
//!
//! let editor = TextEditor::new(TextDocument::new("let answer = 42;", "plaintext")).into_ref();
//! let cursor = Target::untyped(editor, Range::from_coords(0, 6, 0, 6), false, false);
//! let tokens = apply_modifier(
//! 	&cursor,
//! 	&Modifier::containing(SimpleScopeType::Token),
//! 	&ModifierContext::default(),
//! )
//! .unwrap();
//! assert_eq!(tokens[0].content_text(), "answer");
//! ```

/// Configuration and scope handlers shared by stages.
pub mod context;
/// Modifier descriptors.
pub mod modifier;
/// Applying modifiers.
pub mod pipeline;
/// The stage trait and factory.
pub mod stage;
/// Built-in stages.
pub mod stages;

pub use context::ModifierContext;
pub use modifier::{Modifier, PieceType};
pub use pipeline::{apply_modifier, apply_modifiers};
pub use stage::{ModifierStage, create_stage};
