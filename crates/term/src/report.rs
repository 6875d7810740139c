//! What the binary prints for resolved targets.

use anyhow::Context;
use quarry_primitives::Range;
use quarry_target::{Target, TargetPlainObject};
use serde::Serialize;

/// One resolved target: its plain summary plus what removing it would delete.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTarget {
	#[serde(flatten)]
	pub target: TargetPlainObject,
	pub text: String,
	/// Absent for targets that cannot be removed in place.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub removal_range: Option<Range>,
}

impl From<&Target> for ResolvedTarget {
	fn from(target: &Target) -> Self {
		Self {
			target: target.to_plain_object(),
			text: target.content_text(),
			removal_range: target.removal_range().ok(),
		}
	}
}

/// Pretty JSON array of the targets.
pub fn targets_json(targets: &[Target]) -> anyhow::Result<String> {
	let resolved: Vec<ResolvedTarget> = targets.iter().map(ResolvedTarget::from).collect();
	serde_json::to_string_pretty(&resolved).context("serializing targets")
}

/// The document after applying every target's removal edit.
pub fn removed_text(targets: &[Target]) -> anyhow::Result<String> {
	let Some(first) = targets.first() else {
		return Ok(String::new());
	};
	let edits = targets
		.iter()
		.map(Target::construct_removal_edit)
		.collect::<Result<Vec<_>, _>>()
		.context("building removal edits")?;
	Ok(first.document().apply_edits(&edits).text())
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use quarry_primitives::{TextDocument, TextEditor};
	use serde_json::json;

	use super::*;

	fn token(text: &str, range: Range) -> Target {
		let editor = TextEditor::new(TextDocument::new(text, "plaintext")).into_ref();
		Target::token(editor, range, false)
	}

	#[test]
	fn json_carries_removal_range() {
		let target = token("aa bb", Range::from_coords(0, 3, 0, 5));
		let value: serde_json::Value = serde_json::from_str(&targets_json(&[target]).unwrap()).unwrap();
		assert_eq!(value[0]["type"], json!("TokenTarget"));
		assert_eq!(value[0]["text"], json!("bb"));
		assert_eq!(
			value[0]["removalRange"]["start"],
			json!({"line": 0, "character": 2})
		);
	}

	#[test]
	fn removes_every_target() {
		let target = token("aa bb cc", Range::from_coords(0, 3, 0, 5));
		assert_eq!(removed_text(&[target]).unwrap(), "aa cc");
		assert_eq!(removed_text(&[]).unwrap(), "");
	}
}
