//! Configuration for the target-resolution engine.
//!
//! Configuration is written in TOML. Every section and key is optional; a
//! missing file section falls back to [`EngineConfig::default`].
//!
//! ```toml
//! [surrounding-pair]
//! max-scan-length = 50000
//!
//! [collection-item]
//! default-delimiter = ", "
//!
//! [insertion-delimiters]
//! statement = "\n"
//! ```
//!
//! Keys under `[insertion-delimiters]` must be scope type names; unknown names
//! are rejected with [`ConfigError::InvalidScopeType`].

pub mod error;

use std::collections::BTreeMap;
use std::path::Path;

pub use error::{ConfigError, Result};
use quarry_primitives::{ScopeType, SimpleScopeType};
use serde::Deserialize;
use tracing::debug;

/// Default bound on how many chars around a position text-based pair search
/// will look at in each direction.
pub const DEFAULT_MAX_SCAN_LENGTH: usize = 50_000;

/// Parsed and validated engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
	/// Text-based surrounding-pair search settings.
	pub surrounding_pair: SurroundingPairConfig,
	/// Collection item settings.
	pub collection_item: CollectionItemConfig,
	/// Per scope type overrides of the insertion delimiter table.
	pub insertion_delimiters: BTreeMap<SimpleScopeType, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SurroundingPairConfig {
	/// Chars scanned on each side of the search position.
	pub max_scan_length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct CollectionItemConfig {
	/// Insertion delimiter for an item with no sibling to copy from.
	pub default_delimiter: String,
}

impl Default for SurroundingPairConfig {
	fn default() -> Self {
		Self {
			max_scan_length: DEFAULT_MAX_SCAN_LENGTH,
		}
	}
}

impl Default for CollectionItemConfig {
	fn default() -> Self {
		Self {
			default_delimiter: ", ".to_string(),
		}
	}
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			surrounding_pair: SurroundingPairConfig::default(),
			collection_item: CollectionItemConfig::default(),
			insertion_delimiters: BTreeMap::new(),
		}
	}
}

/// File shape before scope type keys are validated.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
struct RawConfig {
	surrounding_pair: SurroundingPairConfig,
	collection_item: CollectionItemConfig,
	insertion_delimiters: BTreeMap<String, String>,
}

impl EngineConfig {
	/// Parse a TOML string into an [`EngineConfig`].
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let raw: RawConfig = toml::from_str(input)?;

		if raw.surrounding_pair.max_scan_length == 0 {
			return Err(ConfigError::InvalidValue {
				field: "surrounding-pair.max-scan-length",
				reason: "must be greater than zero".to_string(),
			});
		}

		let insertion_delimiters = raw
			.insertion_delimiters
			.into_iter()
			.map(|(key, delimiter)| {
				key.parse::<SimpleScopeType>()
					.map(|scope_type| (scope_type, delimiter))
					.map_err(|_| ConfigError::InvalidScopeType(key))
			})
			.collect::<Result<BTreeMap<_, _>>>()?;

		Ok(Self {
			surrounding_pair: raw.surrounding_pair,
			collection_item: raw.collection_item,
			insertion_delimiters,
		})
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		let config = Self::from_toml_str(&content)?;
		debug!(path = %path.display(), overrides = config.insertion_delimiters.len(), "loaded engine config");
		Ok(config)
	}

	/// Insertion delimiter for `scope_type`, honouring overrides.
	pub fn insertion_delimiter(&self, scope_type: &ScopeType) -> String {
		scope_type
			.simple()
			.and_then(|simple| self.insertion_delimiters.get(&simple))
			.map_or_else(|| scope_type.default_insertion_delimiter().to_string(), Clone::clone)
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn empty_input_is_default() {
		assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
	}

	#[test]
	fn parses_all_sections() {
		let config = EngineConfig::from_toml_str(
			r#"
[surrounding-pair]
max-scan-length = 128

[collection-item]
default-delimiter = "; "

[insertion-delimiters]
statement = "\n\n"
"#,
		)
		.unwrap();

		assert_eq!(config.surrounding_pair.max_scan_length, 128);
		assert_eq!(config.collection_item.default_delimiter, "; ");
		assert_eq!(config.insertion_delimiter(&SimpleScopeType::Statement.into()), "\n\n");
		assert_eq!(config.insertion_delimiter(&SimpleScopeType::Class.into()), "\n\n");
		assert_eq!(config.insertion_delimiter(&SimpleScopeType::Token.into()), " ");
	}

	#[test]
	fn rejects_unknown_scope_type() {
		let err = EngineConfig::from_toml_str("[insertion-delimiters]\nfrobnicator = \" \"\n").unwrap_err();
		assert!(matches!(err, ConfigError::InvalidScopeType(name) if name == "frobnicator"));
	}

	#[test]
	fn rejects_zero_scan_length() {
		let err = EngineConfig::from_toml_str("[surrounding-pair]\nmax-scan-length = 0\n").unwrap_err();
		assert!(matches!(err, ConfigError::InvalidValue { .. }));
	}

	#[test]
	fn rejects_unknown_section() {
		let err = EngineConfig::from_toml_str("[themes]\nname = \"x\"\n").unwrap_err();
		assert!(matches!(err, ConfigError::Toml(_)));
	}

	#[test]
	fn load_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[collection-item]\ndefault-delimiter = \",\"").unwrap();
		let config = EngineConfig::load(file.path()).unwrap();
		assert_eq!(config.collection_item.default_delimiter, ",");
	}

	#[test]
	fn load_missing_file() {
		let err = EngineConfig::load("/nonexistent/quarry.toml").unwrap_err();
		assert!(matches!(err, ConfigError::Io { .. }));
	}
}
