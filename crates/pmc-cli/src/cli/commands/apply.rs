//! `pmc apply <patch>...` – apply patch files in order and save once.

use anyhow::{Context, Result};
use pmc_core::config::PmcConfig;
use pmc_core::patch::{self, ApplyOptions, ApplySummary};
use std::path::{Path, PathBuf};

use super::open_editor;

/// Applies every patch to one in-memory copy. Any failure aborts before the
/// collection is written, so either all patches land or none do.
pub fn run_apply(path: &Path, patches: &[PathBuf], dry_run: bool, cfg: &PmcConfig) -> Result<()> {
    let mut editor = open_editor(path, cfg)?;
    let opts = ApplyOptions::from_config(cfg);

    let mut summary = ApplySummary::default();
    for patch_path in patches {
        let patch = patch::load_patch(patch_path)?;
        let applied = patch::apply_patch(editor.collection_mut(), patch, &opts)
            .with_context(|| format!("apply patch: {}", patch_path.display()))?;
        println!("{}:", patch_path.display());
        if applied.is_empty() {
            println!("  (no changes)");
        }
        for change in applied.iter() {
            println!("  - {change}");
        }
        summary.extend(applied);
    }

    let total = editor.collection().endpoint_count();
    if !summary.modified() {
        println!("Nothing to save; {} has {total} endpoint(s)", path.display());
        return Ok(());
    }
    if dry_run {
        println!("Dry run: {} not written ({total} endpoint(s) after changes)", path.display());
        return Ok(());
    }

    editor
        .save()
        .with_context(|| format!("save collection: {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        patches = patches.len(),
        changes = summary.changes.len(),
        "saved collection"
    );
    println!("Saved {} ({total} endpoint(s))", editor.path().display());
    Ok(())
}
