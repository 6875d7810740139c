//! CLI schema and parsing helpers for the quarry binary.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use quarry_modifier::Modifier;
use quarry_primitives::{Position, Range};

/// A cursor or selection given as `line:col` or `line:col-line:col`.
///
/// Lines and columns are 1-indexed on the command line and stored 0-indexed.
/// The first position is the anchor, the second the active end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionArg {
	pub anchor: Position,
	pub active: Position,
}

impl SelectionArg {
	pub fn range(&self) -> Range {
		Range::new(self.anchor, self.active)
	}

	/// Whether the active end is before the anchor.
	pub fn is_backwards(&self) -> bool {
		self.active < self.anchor
	}

	fn parse_position(s: &str) -> Result<Position, String> {
		let (line, column) = s
			.split_once(':')
			.ok_or_else(|| format!("expected line:col, got `{s}`"))?;
		let parse = |part: &str, what: &str| match part.trim().parse::<usize>() {
			Ok(0) => Err(format!("{what} is 1-indexed, got 0")),
			Ok(n) => Ok(n - 1),
			Err(_) => Err(format!("invalid {what} `{part}`")),
		};
		Ok(Position::new(parse(line, "line")?, parse(column, "column")?))
	}
}

impl FromStr for SelectionArg {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.split_once('-') {
			Some((anchor, active)) => Ok(Self {
				anchor: Self::parse_position(anchor)?,
				active: Self::parse_position(active)?,
			}),
			None => {
				let at = Self::parse_position(s)?;
				Ok(Self { anchor: at, active: at })
			}
		}
	}
}

fn parse_modifier(s: &str) -> Result<Modifier, String> {
	serde_json::from_str(s).map_err(|err| format!("invalid modifier JSON: {err}"))
}

#[derive(Parser, Debug)]
#[command(name = "quarry")]
#[command(about = "Resolve structural targets in a text file")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// File to read
	pub file: PathBuf,

	/// Cursor or selection, `line:col` or `line:col-line:col` (1-indexed)
	#[arg(long, short = 's', value_name = "SELECTION")]
	pub selection: SelectionArg,

	/// Treat the selection as reversed even when written forwards
	#[arg(long)]
	pub reversed: bool,

	/// Modifier as JSON, e.g. `{"type":"containingScope","scopeType":{"type":"token"}}`.
	/// Repeat to chain; modifiers apply in the order given.
	#[arg(long = "modifier", short = 'm', value_name = "JSON", value_parser = parse_modifier)]
	pub modifiers: Vec<Modifier>,

	/// Language id (guessed from the file extension if omitted)
	#[arg(long, short = 'l')]
	pub language: Option<String>,

	/// Engine configuration file (TOML)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Print the document with every target removed instead of the targets
	#[arg(long)]
	pub remove: bool,

	/// Log filter, e.g. `debug` or `quarry_scope=trace` (overrides QUARRY_LOG)
	#[arg(long, value_name = "FILTER")]
	pub log: Option<String>,
}

impl Cli {
	/// The language id for the input file.
	pub fn language_id(&self) -> String {
		if let Some(language) = &self.language {
			return language.clone();
		}
		let extension = self.file.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
		language_for_extension(extension).to_string()
	}

	pub fn is_reversed(&self) -> bool {
		self.reversed || self.selection.is_backwards()
	}
}

/// Common extensions; anything else is plain text.
fn language_for_extension(extension: &str) -> &'static str {
	match extension {
		"rs" => "rust",
		"py" | "pyi" => "python",
		"js" | "mjs" | "cjs" => "javascript",
		"ts" | "mts" => "typescript",
		"tsx" => "typescriptreact",
		"jsx" => "javascriptreact",
		"go" => "go",
		"c" | "h" => "c",
		"cc" | "cpp" | "hpp" => "cpp",
		"java" => "java",
		"json" => "json",
		"toml" => "toml",
		"md" => "markdown",
		"html" | "htm" => "html",
		"lua" => "lua",
		"rb" => "ruby",
		"sh" | "bash" => "shellscript",
		_ => "plaintext",
	}
}
