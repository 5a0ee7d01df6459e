//! CLI command handlers. Each command is in its own file.

mod apply;
mod init;
mod list;
mod remove;
mod set_variable;

pub use apply::run_apply;
pub use init::{run_init, InitArgs};
pub use list::run_list;
pub use remove::run_remove;
pub use set_variable::run_set_variable;

use anyhow::{Context, Result};
use pmc_core::config::PmcConfig;
use pmc_core::editor::CollectionEditor;
use std::path::Path;

/// Opens the collection with the configured output indent.
fn open_editor(path: &Path, cfg: &PmcConfig) -> Result<CollectionEditor> {
    let editor = CollectionEditor::open(path)
        .with_context(|| format!("open collection: {}", path.display()))?;
    Ok(editor.with_indent(cfg.indent))
}
