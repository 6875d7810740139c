//! Serialisable summaries of targets.

use quarry_primitives::{EditorRef, Range};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TargetError};
use crate::kind::TargetKind;
use crate::target::Target;

/// Editor-free summary of a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetPlainObject {
	#[serde(rename = "type")]
	pub target_type: String,
	pub content_range: Range,
	pub is_reversed: bool,
	pub has_explicit_range: bool,
}

impl Target {
	pub fn to_plain_object(&self) -> TargetPlainObject {
		TargetPlainObject {
			target_type: self.kind().type_name().to_string(),
			content_range: self.content_range(),
			is_reversed: self.is_reversed(),
			has_explicit_range: self.has_explicit_range(),
		}
	}

	/// Rebuilds a target from its summary. Only untyped targets carry enough
	/// information to round-trip.
	pub fn from_plain_object(editor: EditorRef, object: &TargetPlainObject) -> Result<Target> {
		if object.target_type != TargetKind::Untyped.type_name() {
			return Err(TargetError::Unsupported(format!(
				"Unsupported target type {}",
				object.target_type
			)));
		}
		Ok(Target::untyped(
			editor,
			object.content_range,
			object.is_reversed,
			object.has_explicit_range,
		))
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use quarry_primitives::{TextDocument, TextEditor};

	use super::*;

	#[test]
	fn plain_object_json_shape() {
		let editor = TextEditor::new(TextDocument::new("foo bar", "plaintext")).into_ref();
		let target = Target::token(editor, Range::from_coords(0, 4, 0, 7), true);
		let json = serde_json::to_value(target.to_plain_object()).unwrap();
		assert_eq!(
			json,
			serde_json::json!({
				"type": "TokenTarget",
				"contentRange": {
					"start": { "line": 0, "character": 4 },
					"end": { "line": 0, "character": 7 }
				},
				"isReversed": true,
				"hasExplicitRange": true
			})
		);
	}

	#[test]
	fn untyped_round_trips() {
		let editor = TextEditor::new(TextDocument::new("foo bar", "plaintext")).into_ref();
		let target = Target::untyped(editor.clone(), Range::from_coords(0, 1, 0, 5), false, false);
		let object = target.to_plain_object();
		assert_eq!(Target::from_plain_object(editor.clone(), &object).unwrap(), target);

		let token = Target::token(editor.clone(), Range::from_coords(0, 0, 0, 3), false);
		assert!(Target::from_plain_object(editor, &token.to_plain_object()).is_err());
	}
}
