//! Scope type vocabulary shared by targets, scope handlers and configuration.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Named syntactic or textual region types.
///
/// The string form is the camelCase name used in modifier descriptors and
/// configuration files.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum SimpleScopeType {
	ArgumentOrParameter,
	AnonymousFunction,
	Attribute,
	Branch,
	Class,
	ClassName,
	CollectionItem,
	CollectionKey,
	Comment,
	FunctionCall,
	FunctionCallee,
	FunctionName,
	IfStatement,
	Instance,
	List,
	Map,
	Name,
	NamedFunction,
	RegularExpression,
	Statement,
	String,
	Type,
	Value,
	Condition,
	Section,
	SectionLevelOne,
	SectionLevelTwo,
	SectionLevelThree,
	SectionLevelFour,
	SectionLevelFive,
	SectionLevelSix,
	Selector,
	Unit,
	XmlBothTags,
	XmlElement,
	XmlEndTag,
	XmlStartTag,
	Part,
	Chapter,
	SubSection,
	SubSubSection,
	NamedParagraph,
	SubParagraph,
	Environment,
	Character,
	Word,
	Token,
	Identifier,
	Line,
	Sentence,
	Paragraph,
	BoundedParagraph,
	Document,
	NonWhitespaceSequence,
	Url,
	NotebookCell,
	TextFragment,
}

impl SimpleScopeType {
	/// Separator used when inserting a sibling next to a scope of this type.
	pub fn default_insertion_delimiter(self) -> &'static str {
		use SimpleScopeType::*;
		match self {
			Class | NamedFunction | Section | SectionLevelOne | SectionLevelTwo | SectionLevelThree
			| SectionLevelFour | SectionLevelFive | SectionLevelSix | Part | Chapter | SubSection
			| SubSubSection | NamedParagraph | SubParagraph => "\n\n",
			AnonymousFunction | Statement | IfStatement | Comment | XmlElement | CollectionItem | Branch
			| Environment => "\n",
			_ => " ",
		}
	}
}

/// Delimiter pair families understood by surrounding-pair search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, Serialize, Deserialize)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum SurroundingPairName {
	AngleBrackets,
	BacktickQuotes,
	CurlyBrackets,
	DoubleQuotes,
	EscapedDoubleQuotes,
	EscapedParentheses,
	EscapedSingleQuotes,
	EscapedSquareBrackets,
	Parentheses,
	SingleQuotes,
	SquareBrackets,
	TripleDoubleQuotes,
	TripleSingleQuotes,
	/// Any string delimiter.
	String,
	/// Any delimiter.
	Any,
	/// Brackets that can enclose a collection.
	CollectionBoundary,
}

impl SurroundingPairName {
	/// Expands composite names to the simple pairs they stand for.
	pub fn simple_names(self) -> &'static [SurroundingPairName] {
		use SurroundingPairName::*;
		match self {
			Any => &[
				AngleBrackets,
				BacktickQuotes,
				CurlyBrackets,
				DoubleQuotes,
				EscapedDoubleQuotes,
				EscapedParentheses,
				EscapedSingleQuotes,
				EscapedSquareBrackets,
				Parentheses,
				SingleQuotes,
				SquareBrackets,
				TripleDoubleQuotes,
				TripleSingleQuotes,
			],
			String => &[TripleDoubleQuotes, TripleSingleQuotes, DoubleQuotes, SingleQuotes, BacktickQuotes],
			CollectionBoundary => &[Parentheses, SquareBrackets, CurlyBrackets, AngleBrackets],
			AngleBrackets => &[AngleBrackets],
			BacktickQuotes => &[BacktickQuotes],
			CurlyBrackets => &[CurlyBrackets],
			DoubleQuotes => &[DoubleQuotes],
			EscapedDoubleQuotes => &[EscapedDoubleQuotes],
			EscapedParentheses => &[EscapedParentheses],
			EscapedSingleQuotes => &[EscapedSingleQuotes],
			EscapedSquareBrackets => &[EscapedSquareBrackets],
			Parentheses => &[Parentheses],
			SingleQuotes => &[SingleQuotes],
			SquareBrackets => &[SquareBrackets],
			TripleDoubleQuotes => &[TripleDoubleQuotes],
			TripleSingleQuotes => &[TripleSingleQuotes],
		}
	}
}

/// A scope type, either a simple named type or a parameterised one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawScopeType", into = "RawScopeType")]
pub enum ScopeType {
	Simple(SimpleScopeType),
	SurroundingPair {
		delimiter: SurroundingPairName,
		/// Only accept pairs that contain the selection without touching its edges.
		require_strong_containment: bool,
	},
	SurroundingPairInterior {
		delimiter: SurroundingPairName,
		require_single_line: bool,
	},
	CustomRegex {
		regex: String,
	},
}

impl ScopeType {
	pub fn simple(&self) -> Option<SimpleScopeType> {
		match self {
			Self::Simple(simple) => Some(*simple),
			_ => None,
		}
	}

	pub fn is(&self, simple: SimpleScopeType) -> bool {
		self.simple() == Some(simple)
	}

	/// Type name as it appears in descriptors.
	pub fn name(&self) -> &'static str {
		match self {
			Self::Simple(simple) => simple.into(),
			Self::SurroundingPair { .. } => "surroundingPair",
			Self::SurroundingPairInterior { .. } => "surroundingPairInterior",
			Self::CustomRegex { .. } => "customRegex",
		}
	}

	/// Insertion delimiter from the static table. Parameterised scope types
	/// use a space.
	pub fn default_insertion_delimiter(&self) -> &'static str {
		self.simple().map_or(" ", SimpleScopeType::default_insertion_delimiter)
	}
}

impl From<SimpleScopeType> for ScopeType {
	fn from(simple: SimpleScopeType) -> Self {
		Self::Simple(simple)
	}
}

impl fmt::Display for ScopeType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Wire form of [`ScopeType`]: `{"type": "...", ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawScopeType {
	#[serde(rename = "type")]
	kind: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	delimiter: Option<SurroundingPairName>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	require_strong_containment: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	require_single_line: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	regex: Option<String>,
}

impl TryFrom<RawScopeType> for ScopeType {
	type Error = String;

	fn try_from(raw: RawScopeType) -> Result<Self, Self::Error> {
		match raw.kind.as_str() {
			"surroundingPair" => Ok(Self::SurroundingPair {
				delimiter: raw.delimiter.ok_or("surroundingPair requires a delimiter")?,
				require_strong_containment: raw.require_strong_containment.unwrap_or(false),
			}),
			"surroundingPairInterior" => Ok(Self::SurroundingPairInterior {
				delimiter: raw.delimiter.ok_or("surroundingPairInterior requires a delimiter")?,
				require_single_line: raw.require_single_line.unwrap_or(false),
			}),
			"customRegex" => Ok(Self::CustomRegex {
				regex: raw.regex.ok_or("customRegex requires a regex")?,
			}),
			other => other
				.parse::<SimpleScopeType>()
				.map(Self::Simple)
				.map_err(|_| format!("unknown scope type: {other}")),
		}
	}
}

impl From<ScopeType> for RawScopeType {
	fn from(scope_type: ScopeType) -> Self {
		let mut raw = RawScopeType {
			kind: scope_type.name().to_string(),
			delimiter: None,
			require_strong_containment: None,
			require_single_line: None,
			regex: None,
		};
		match scope_type {
			ScopeType::Simple(_) => {}
			ScopeType::SurroundingPair {
				delimiter,
				require_strong_containment,
			} => {
				raw.delimiter = Some(delimiter);
				raw.require_strong_containment = Some(require_strong_containment);
			}
			ScopeType::SurroundingPairInterior {
				delimiter,
				require_single_line,
			} => {
				raw.delimiter = Some(delimiter);
				raw.require_single_line = Some(require_single_line);
			}
			ScopeType::CustomRegex { regex } => raw.regex = Some(regex),
		}
		raw
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names_are_camel_case() {
		assert_eq!(SimpleScopeType::NamedFunction.to_string(), "namedFunction");
		assert_eq!("collectionItem".parse::<SimpleScopeType>(), Ok(SimpleScopeType::CollectionItem));
		assert_eq!(SurroundingPairName::CurlyBrackets.to_string(), "curlyBrackets");
	}

	#[test]
	fn insertion_delimiter_table() {
		assert_eq!(SimpleScopeType::Class.default_insertion_delimiter(), "\n\n");
		assert_eq!(SimpleScopeType::SectionLevelThree.default_insertion_delimiter(), "\n\n");
		assert_eq!(SimpleScopeType::Statement.default_insertion_delimiter(), "\n");
		assert_eq!(SimpleScopeType::CollectionItem.default_insertion_delimiter(), "\n");
		assert_eq!(SimpleScopeType::Token.default_insertion_delimiter(), " ");
	}

	#[test]
	fn scope_type_from_json() {
		let pair: ScopeType = serde_json::from_str(r#"{"type":"surroundingPair","delimiter":"parentheses"}"#).unwrap();
		assert_eq!(
			pair,
			ScopeType::SurroundingPair {
				delimiter: SurroundingPairName::Parentheses,
				require_strong_containment: false,
			}
		);
		let line: ScopeType = serde_json::from_str(r#"{"type":"line"}"#).unwrap();
		assert_eq!(line, ScopeType::Simple(SimpleScopeType::Line));
		assert!(serde_json::from_str::<ScopeType>(r#"{"type":"nope"}"#).is_err());
	}

	#[test]
	fn composite_pair_names_expand() {
		assert!(SurroundingPairName::CollectionBoundary.simple_names().contains(&SurroundingPairName::Parentheses));
		assert!(!SurroundingPairName::String.simple_names().contains(&SurroundingPairName::Parentheses));
	}
}
