//! `pmc set-variable <key> <value>` – add or overwrite a collection variable.

use anyhow::{Context, Result};
use pmc_core::config::PmcConfig;
use pmc_core::editor::Upsert;
use serde_json::Value;
use std::path::Path;

use super::open_editor;

pub fn run_set_variable(
    path: &Path,
    key: &str,
    value: &str,
    kind: Option<&str>,
    cfg: &PmcConfig,
) -> Result<()> {
    let mut editor = open_editor(path, cfg)?;
    let collection = editor.collection_mut();
    let outcome = collection.set_variable(key, Value::String(value.to_string()), kind);
    if let Some(now) = cfg.stamp() {
        collection.touch(now);
    }

    editor
        .save()
        .with_context(|| format!("save collection: {}", path.display()))?;
    let verb = match outcome {
        Upsert::Inserted => "Added",
        Upsert::Replaced => "Updated",
    };
    println!("{verb} variable {key} = {value}");
    Ok(())
}
