//! `pmc list` – print the section tree.

use anyhow::{Context, Result};
use pmc_core::editor::CollectionEditor;
use pmc_core::outline;
use std::path::Path;

pub fn run_list(path: &Path) -> Result<()> {
    let editor = CollectionEditor::open(path)
        .with_context(|| format!("open collection: {}", path.display()))?;
    let collection = editor.collection();

    if !collection.info.name.is_empty() {
        println!("{}", collection.info.name);
    }
    if let Some(first) = collection
        .info
        .description
        .as_ref()
        .and_then(|d| d.text().lines().next())
    {
        println!("{first}");
    }
    let rows = outline::outline(collection);
    if rows.is_empty() {
        println!("(no sections)");
    }
    for row in rows {
        println!("  {row}");
    }
    let variables: Vec<&str> = collection
        .variables()
        .iter()
        .map(|v| v.key.as_str())
        .collect();
    if !variables.is_empty() {
        println!("Variables: {}", variables.join(", "));
    }
    println!("Total endpoints: {}", collection.endpoint_count());
    Ok(())
}
