//! `pmc init` – write an empty collection skeleton.

use anyhow::{Context, Result};
use pmc_core::config::PmcConfig;
use pmc_core::editor::CollectionEditor;
use pmc_core::scaffold;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct InitArgs {
    pub name: String,
    pub description: String,
    pub base_url: String,
    /// Overwrite an existing file.
    pub force: bool,
}

pub fn run_init(path: &Path, args: &InitArgs, cfg: &PmcConfig) -> Result<()> {
    let description = Some(args.description.as_str()).filter(|d| !d.trim().is_empty());
    let collection = scaffold::new_collection(&args.name, description, &args.base_url);
    let editor = CollectionEditor::create(path, collection, args.force)?.with_indent(cfg.indent);
    editor
        .save()
        .with_context(|| format!("write collection: {}", path.display()))?;
    tracing::info!(path = %path.display(), force = args.force, "initialized collection");
    println!("Created {} ({})", path.display(), args.name);
    Ok(())
}
