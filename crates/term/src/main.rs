//! `quarry`: resolve a modifier chain against a selection in a file and print
//! the resulting targets.

mod cli;
mod report;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use quarry_config::EngineConfig;
use quarry_modifier::{ModifierContext, apply_modifiers};
use quarry_primitives::{Selection, TextDocument, TextEditor};
use quarry_scope::ScopeMatcherRegistry;
use quarry_target::Target;
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.log.as_deref());
	let output = run(&cli)?;
	println!("{output}");
	Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<String> {
	let config = match &cli.config {
		Some(path) => EngineConfig::load(path)?,
		None => EngineConfig::default(),
	};
	let text = std::fs::read_to_string(&cli.file).with_context(|| format!("reading {}", cli.file.display()))?;
	let language_id = cli.language_id();
	info!(file = %cli.file.display(), language = %language_id, modifiers = cli.modifiers.len(), "resolving");

	let document = TextDocument::new(&text, language_id).with_path(&cli.file);
	let selection = Selection::from_range(document.validate_range(cli.selection.range()), cli.is_reversed());
	let editor = TextEditor::new(document).with_selections(vec![selection]).into_ref();
	let marks: Vec<Target> = editor
		.selections
		.iter()
		.map(|selection| {
			Target::untyped(editor.clone(), selection.range(), selection.is_reversed(), !selection.is_empty())
		})
		.collect();

	let ctx = ModifierContext::new(Arc::new(config), ScopeMatcherRegistry::new());
	let targets = apply_modifiers(marks, &cli.modifiers, &ctx)?;
	debug!(targets = targets.len(), "resolved");

	if cli.remove {
		report::removed_text(&targets)
	} else {
		report::targets_json(&targets)
	}
}

fn setup_tracing(filter: Option<&str>) {
	use tracing_subscriber::EnvFilter;

	let filter = match filter {
		Some(filter) => EnvFilter::new(filter),
		None => EnvFilter::try_from_env("QUARRY_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
	};
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();
}
