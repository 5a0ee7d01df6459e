//! `pmc remove <section> <endpoint>` – delete an endpoint by name.

use anyhow::{Context, Result};
use pmc_core::config::PmcConfig;
use pmc_core::error::CollectionError;
use pmc_core::model::SectionPath;
use std::path::Path;

use super::open_editor;

/// Removes every endpoint named `endpoint` directly under `section`.
/// Fails without writing when the section or the endpoint does not exist.
pub fn run_remove(path: &Path, section: &str, endpoint: &str, cfg: &PmcConfig) -> Result<()> {
    let section_path = SectionPath::from(section);
    let mut editor = open_editor(path, cfg)?;

    let collection = editor.collection_mut();
    let removed = collection
        .require_section_mut(&section_path)?
        .remove_endpoint(endpoint);
    if removed == 0 {
        return Err(CollectionError::EndpointNotFound {
            section: section_path,
            name: endpoint.to_string(),
        }
        .into());
    }
    if let Some(now) = cfg.stamp() {
        collection.touch(now);
    }

    editor
        .save()
        .with_context(|| format!("save collection: {}", path.display()))?;
    tracing::info!(section = %section_path, endpoint, removed, "removed endpoint");
    println!("Removed {section_path} > {endpoint} ({removed} matching item(s))");
    Ok(())
}
