//! Declarative patches: which sections get which endpoints, as data.
//!
//! A patch file replaces a hand-written "load, find section, splice items,
//! save" script. Patches are applied in memory; the caller saves once after
//! every patch applied, so a failing patch leaves the file untouched.

mod apply;
mod examples;
mod summary;

pub use apply::{apply_patch, ApplyOptions};
pub use examples::{EndpointMatch, ExampleRule};
pub use summary::{ApplySummary, Change};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::editor::Anchor;
use crate::model::{Endpoint, ExampleResponse, Section, SectionPath, Variable};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Patch {
    /// Appended to `info.description` when the patch changes anything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub sections: Vec<SectionPatch>,
    /// Whole sections placed in the root list relative to an index or sibling.
    #[serde(default)]
    pub insert_sections: Vec<SectionInsert>,
    /// Whole sections appended to the root list, in order.
    #[serde(default)]
    pub append_sections: Vec<Section>,
    /// Example responses attached by method/path match across the whole tree.
    #[serde(default)]
    pub examples: Vec<ExampleRule>,
    /// Collection variables added when their key is not defined yet.
    #[serde(default)]
    pub variables: Vec<Variable>,
}

/// Edits targeting one section. Applied as: remove, endpoints (per `mode`), responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionPatch {
    pub path: SectionPath,
    #[serde(default)]
    pub mode: PatchMode,
    /// Create the section (and missing parents) instead of treating it as missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<CreateSection>,
    /// Where new endpoints go in `upsert` and `append` modes, kept in patch
    /// order. Appended when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at: Option<Anchor>,
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
    /// Endpoint names to delete from the section.
    #[serde(default)]
    pub remove: Vec<String>,
    #[serde(default)]
    pub responses: Vec<ResponsePatch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchMode {
    /// Replace same-named endpoints in place, append the rest.
    #[default]
    Upsert,
    /// Overwrite the section's item list with `endpoints`.
    Replace,
    /// Append every endpoint, even if the name already exists.
    Append,
    /// Swap the request of existing endpoints; unknown names are skipped.
    Update,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Placement of a newly created leaf in its parent list; appended when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at: Option<Anchor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionInsert {
    pub at: Anchor,
    pub section: Section,
}

/// Example response to upsert (by response name) on a named endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResponsePatch {
    pub endpoint: String,
    pub response: ExampleResponse,
}

/// Reads a patch file (JSON).
pub fn load_patch(path: &Path) -> Result<Patch> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read patch file: {}", path.display()))?;
    let patch: Patch = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse patch JSON: {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        sections = patch.sections.len(),
        insert_sections = patch.insert_sections.len(),
        append_sections = patch.append_sections.len(),
        examples = patch.examples.len(),
        variables = patch.variables.len(),
        "loaded patch"
    );
    Ok(patch)
}
